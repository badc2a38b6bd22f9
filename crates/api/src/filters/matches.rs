//! Filters for the `/v1/matches` endpoint and the URL builder that renders them.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::{form_urlencoded, Url};

/// Wildcard used by Kupo patterns for "any output index" or "any asset name".
pub const WILDCARD: &str = "*";

/// Characters escaped inside a path segment.
///
/// Unreserved characters and the sub-delimiters `$&+,/:;=@` stay literal, everything
/// else is percent-encoded. In particular `*` becomes `%2A`, while `/` survives so that
/// address patterns such as `{payment}/{delegation}` keep their structure.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b',')
    .remove(b'/')
    .remove(b':')
    .remove(b';')
    .remove(b'=')
    .remove(b'@');

/// A dot escaped twice, so that neither the URL parser nor the server resolves it.
const ESCAPED_DOT: &str = "%252E";

/// Append `/segment` to `path`, percent-encoded.
///
/// A `/` inside `segment` still separates sub-segments. A sub-segment that is exactly
/// `.` or `..` would be resolved by [`Url::set_path`] (so would `%2E`), so its dots are
/// written as `ESCAPED_DOT` and the target stays under `path`.
pub(crate) fn push_segment(path: &mut String, segment: &str) {
    for part in segment.split('/') {
        path.push('/');
        if matches!(part, "." | "..") {
            path.push_str(&ESCAPED_DOT.repeat(part.len()));
        } else {
            path.extend(utf8_percent_encode(part, PATH_SEGMENT));
        }
    }
}

/// A single filter directive for a matches query.
///
/// Directives are applied in order onto a [`MatchesOptions`]; when two directives touch
/// the same field, the later one wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchesFilter {
    /// Include both spent and unspent outputs.
    All,
    /// Only outputs that have been spent.
    OnlySpent,
    /// Only outputs that are still unspent.
    OnlyUnspent,
    /// An explicit Kupo pattern (address, credential, wildcard...).
    Pattern(String),
    /// An address; shorthand for [`MatchesFilter::Pattern`].
    Address(String),
    /// Every asset under a minting policy.
    Policy(String),
    /// A single native asset.
    Asset {
        policy_id: String,
        asset_name: String,
    },
    /// Every output of a transaction.
    Transaction(String),
    /// One output of a transaction.
    Output {
        transaction_id: String,
        output_index: u32,
    },
    /// Outputs alive at a slot: created before it and spent after it.
    Overlapping(u64),
    /// Outputs created before a slot.
    CreatedBefore(u64),
    /// Outputs created after a slot.
    CreatedAfter(u64),
    /// Outputs spent before a slot.
    SpentBefore(u64),
    /// Outputs spent after a slot.
    SpentAfter(u64),
}

impl MatchesFilter {
    /// Build an asset directive from a `policy_id.asset_name` identifier.
    ///
    /// An identifier without a `.` selects the whole policy.
    pub fn asset_id(asset_id: &str) -> Self {
        match asset_id.split_once('.') {
            Some((policy_id, asset_name)) => MatchesFilter::Asset {
                policy_id: policy_id.to_string(),
                asset_name: asset_name.to_string(),
            },
            None => MatchesFilter::Policy(asset_id.to_string()),
        }
    }

    /// Apply this directive to an accumulator.
    pub fn apply(self, options: &mut MatchesOptions) {
        match self {
            MatchesFilter::All => {
                options.spent = true;
                options.unspent = true;
            }
            MatchesFilter::OnlySpent => {
                options.spent = true;
                options.unspent = false;
            }
            MatchesFilter::OnlyUnspent => {
                options.spent = false;
                options.unspent = true;
            }
            MatchesFilter::Pattern(pattern) | MatchesFilter::Address(pattern) => {
                options.pattern = Some(pattern);
            }
            MatchesFilter::Policy(policy_id) => {
                options.policy_id = Some(policy_id);
                options.asset_name = None;
            }
            MatchesFilter::Asset {
                policy_id,
                asset_name,
            } => {
                options.policy_id = Some(policy_id);
                options.asset_name = Some(asset_name);
            }
            MatchesFilter::Transaction(transaction_id) => {
                options.transaction_id = Some(transaction_id);
                options.output_index = None;
            }
            MatchesFilter::Output {
                transaction_id,
                output_index,
            } => {
                options.transaction_id = Some(transaction_id);
                options.output_index = Some(output_index);
            }
            MatchesFilter::Overlapping(slot) => {
                options.created_before = slot;
                options.spent_after = slot;
            }
            MatchesFilter::CreatedBefore(slot) => options.created_before = slot,
            MatchesFilter::CreatedAfter(slot) => options.created_after = slot,
            MatchesFilter::SpentBefore(slot) => options.spent_before = slot,
            MatchesFilter::SpentAfter(slot) => options.spent_after = slot,
        }
    }
}

/// Accumulated constraints for one matches query.
///
/// Slot bounds use `0` for "unset". Empty strings are treated the same as absent values
/// when rendering.
///
/// # Example
///
/// ```
/// use kupo_rs_api::MatchesOptions;
///
/// let options = MatchesOptions::new()
///     .only_unspent()
///     .asset("abc", "xyz")
///     .pattern("www");
///
/// assert_eq!(options.path_segments(), vec!["www".to_string()]);
/// assert_eq!(options.query_string(), "unspent&policy_id=abc&asset_name=xyz");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchesOptions {
    /// Include spent outputs.
    pub spent: bool,
    /// Include unspent outputs.
    pub unspent: bool,
    /// Explicit pattern; takes the path slot over asset and transaction filters.
    pub pattern: Option<String>,
    /// Minting policy of the asset filter.
    pub policy_id: Option<String>,
    /// Asset name of the asset filter; meaningless without `policy_id`.
    pub asset_name: Option<String>,
    /// Transaction of the output reference filter.
    pub transaction_id: Option<String>,
    /// Output index; `Some(0)` is a real index.
    pub output_index: Option<u32>,
    pub created_before: u64,
    pub created_after: u64,
    pub spent_before: u64,
    pub spent_after: u64,
}

impl MatchesOptions {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one directive.
    pub fn with(mut self, filter: MatchesFilter) -> Self {
        filter.apply(&mut self);
        self
    }

    pub fn all(self) -> Self {
        self.with(MatchesFilter::All)
    }

    pub fn only_spent(self) -> Self {
        self.with(MatchesFilter::OnlySpent)
    }

    pub fn only_unspent(self) -> Self {
        self.with(MatchesFilter::OnlyUnspent)
    }

    pub fn pattern<S: Into<String>>(self, pattern: S) -> Self {
        self.with(MatchesFilter::Pattern(pattern.into()))
    }

    pub fn address<S: Into<String>>(self, address: S) -> Self {
        self.with(MatchesFilter::Address(address.into()))
    }

    pub fn policy<S: Into<String>>(self, policy_id: S) -> Self {
        self.with(MatchesFilter::Policy(policy_id.into()))
    }

    pub fn asset<P: Into<String>, N: Into<String>>(self, policy_id: P, asset_name: N) -> Self {
        self.with(MatchesFilter::Asset {
            policy_id: policy_id.into(),
            asset_name: asset_name.into(),
        })
    }

    /// Filter by a `policy_id.asset_name` identifier.
    pub fn asset_id(self, asset_id: &str) -> Self {
        self.with(MatchesFilter::asset_id(asset_id))
    }

    pub fn transaction<S: Into<String>>(self, transaction_id: S) -> Self {
        self.with(MatchesFilter::Transaction(transaction_id.into()))
    }

    pub fn output<S: Into<String>>(self, transaction_id: S, output_index: u32) -> Self {
        self.with(MatchesFilter::Output {
            transaction_id: transaction_id.into(),
            output_index,
        })
    }

    pub fn overlapping(self, slot: u64) -> Self {
        self.with(MatchesFilter::Overlapping(slot))
    }

    pub fn created_before(self, slot: u64) -> Self {
        self.with(MatchesFilter::CreatedBefore(slot))
    }

    pub fn created_after(self, slot: u64) -> Self {
        self.with(MatchesFilter::CreatedAfter(slot))
    }

    pub fn spent_before(self, slot: u64) -> Self {
        self.with(MatchesFilter::SpentBefore(slot))
    }

    pub fn spent_after(self, slot: u64) -> Self {
        self.with(MatchesFilter::SpentAfter(slot))
    }

    /// Render the query string, without the leading `?`.
    ///
    /// Order is fixed: spent/unspent flag, the four slot bounds, then the transaction
    /// and asset filters when a pattern pushed them out of the path.
    pub fn query_string(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());

        match (self.spent, self.unspent) {
            (true, false) => {
                query.append_key_only("spent");
            }
            (false, true) => {
                query.append_key_only("unspent");
            }
            _ => {}
        }

        let bounds = [
            ("created_before", self.created_before),
            ("created_after", self.created_after),
            ("spent_before", self.spent_before),
            ("spent_after", self.spent_after),
        ];
        for (key, slot) in bounds {
            if slot != 0 {
                query.append_pair(key, &slot.to_string());
            }
        }

        if non_empty(&self.pattern).is_some() {
            if let Some(transaction_id) = non_empty(&self.transaction_id) {
                query.append_pair("transaction_id", transaction_id);
                if let Some(index) = self.output_index {
                    query.append_pair("output_index", &index.to_string());
                }
            }
            if let Some(policy_id) = non_empty(&self.policy_id) {
                query.append_pair("policy_id", policy_id);
                if let Some(asset_name) = non_empty(&self.asset_name) {
                    query.append_pair("asset_name", asset_name);
                }
            }
        }

        query.finish()
    }

    /// Path segments appended after `/v1/matches`, unescaped.
    pub fn path_segments(&self) -> Vec<String> {
        let mut segments = Vec::new();
        let pattern = non_empty(&self.pattern);

        if pattern.is_none() {
            // `idx@hash` rather than `hash#idx`: '#' cannot travel in a URL path.
            if let Some(transaction_id) = non_empty(&self.transaction_id) {
                let index = self
                    .output_index
                    .map_or_else(|| WILDCARD.to_string(), |index| index.to_string());
                segments.push(format!("{index}@{transaction_id}"));
            }
            if let Some(policy_id) = non_empty(&self.policy_id) {
                let asset_name = non_empty(&self.asset_name).unwrap_or(WILDCARD);
                segments.push(format!("{policy_id}.{asset_name}"));
            }
        }

        if let Some(pattern) = pattern {
            segments.push(pattern.to_string());
        }

        segments
    }

    /// Append the path segments to `url` and replace its query string.
    pub fn apply_to(&self, url: &mut Url) {
        let mut path = url.path().trim_end_matches('/').to_string();
        for segment in self.path_segments() {
            push_segment(&mut path, &segment);
        }
        url.set_path(&path);

        let query = self.query_string();
        url.set_query((!query.is_empty()).then_some(query.as_str()));
    }
}

impl FromIterator<MatchesFilter> for MatchesOptions {
    fn from_iter<I: IntoIterator<Item = MatchesFilter>>(iter: I) -> Self {
        let mut options = MatchesOptions::new();
        options.extend(iter);
        options
    }
}

impl Extend<MatchesFilter> for MatchesOptions {
    fn extend<I: IntoIterator<Item = MatchesFilter>>(&mut self, iter: I) {
        for filter in iter {
            filter.apply(self);
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
