//! HTTP client for the Kupo indexer.

use std::future::Future;
use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::Span;
use url::Url;

use crate::error::{ApiError, Result};
use crate::filters::matches::push_segment;
use crate::filters::{CheckpointsOptions, MatchesOptions};
use crate::types::{Datum, Match, Metadatum, Point, Script};

/// Default Kupo endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:1442";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5 * 60);

/// Configuration for [`KupoClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the indexer. Endpoint paths are appended to its path.
    pub endpoint: Url,
    /// Per-request timeout; `None` disables it.
    pub timeout: Option<Duration>,
    /// Extra headers sent with every request.
    pub headers: Vec<(String, String)>,
    /// Span the per-query log events are emitted in.
    pub span: Option<Span>,
}

impl Default for ClientConfig {
    #[allow(clippy::expect_used)]
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("Invalid default endpoint"),
            timeout: Some(DEFAULT_TIMEOUT),
            headers: Vec::new(),
            span: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom endpoint.
    pub fn with_endpoint_url(mut self, endpoint: Url) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Disable the per-request timeout.
    pub fn without_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    /// Add a header sent with every request. Repeated names are all sent.
    pub fn with_header<N: Into<String>, V: Into<String>>(mut self, name: N, value: V) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Emit per-query log events inside `span`.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }
}

/// Client for a Kupo indexer.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct KupoClient {
    http_client: Client,
    headers: HeaderMap,
    config: ClientConfig,
}

impl Default for KupoClient {
    fn default() -> Self {
        Self::new()
    }
}

impl KupoClient {
    /// Create a client for [`DEFAULT_ENDPOINT`] with default configuration.
    pub fn new() -> Self {
        Self {
            http_client: Client::new(),
            headers: HeaderMap::new(),
            config: ClientConfig::default(),
        }
    }

    /// Create a client with custom configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http_client = Client::builder().build()?;
        Self::with_http_client(http_client, config)
    }

    /// Create a client for `endpoint` with otherwise default configuration.
    pub fn from_endpoint(endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint).map_err(|e| ApiError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })?;
        Self::with_config(ClientConfig::new().with_endpoint_url(endpoint))
    }

    /// Create a client around an existing `reqwest::Client`.
    pub fn with_http_client(http_client: Client, config: ClientConfig) -> Result<Self> {
        validate_endpoint(&config.endpoint)?;
        let headers = header_map(&config.headers)?;
        Ok(Self {
            http_client,
            headers,
            config,
        })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Outputs matching `options`.
    pub async fn matches(&self, options: MatchesOptions) -> Result<Vec<Match>> {
        let mut url = self.endpoint(&["v1", "matches"]);
        options.apply_to(&mut url);

        let started = Instant::now();
        let result = self.get_json::<Vec<Match>>(&url).await;
        self.log_outcome("matches", &url, started, &result, |matches| {
            Some(matches.len())
        });
        result
    }

    /// Checkpoints known to the indexer.
    pub async fn checkpoints(&self, options: CheckpointsOptions) -> Result<Vec<Point>> {
        let mut url = self.endpoint(&["v1", "checkpoints"]);
        options.apply_to(&mut url);

        let started = Instant::now();
        let result = self
            .fetch_checkpoints(&url, options.singular)
            .await
            .map(|points| options.finish(points));
        self.log_outcome("checkpoints", &url, started, &result, |points| {
            Some(points.len())
        });
        result
    }

    /// Datum bytes (hex CBOR) by datum hash. `None` when the indexer does not know it.
    pub async fn datum(&self, datum_hash: &str) -> Result<Option<String>> {
        let url = self.endpoint(&["v1", "datums", datum_hash]);

        let started = Instant::now();
        let result = self
            .get_optional_json::<Datum>(&url)
            .await
            .map(|datum| datum.and_then(|d| d.datum).filter(|datum| !datum.is_empty()));
        self.log_outcome("datum", &url, started, &result, |_| None);
        result
    }

    /// Metadata of the transactions in the block at `slot`, optionally narrowed to one
    /// transaction.
    pub async fn metadata(
        &self,
        slot: u64,
        transaction_id: Option<&str>,
    ) -> Result<Vec<Metadatum>> {
        let mut url = self.endpoint(&["v1", "metadata", &slot.to_string()]);
        if let Some(transaction_id) = transaction_id.filter(|id| !id.is_empty()) {
            url.query_pairs_mut()
                .append_pair("transaction_id", transaction_id);
        }

        let started = Instant::now();
        let result = self.get_json::<Vec<Metadatum>>(&url).await;
        self.log_outcome("metadata", &url, started, &result, |metadata| {
            Some(metadata.len())
        });
        result
    }

    /// Script by script hash. `None` when the indexer does not know it.
    pub async fn script(&self, script_hash: &str) -> Result<Option<Script>> {
        let url = self.endpoint(&["v1", "scripts", script_hash]);

        let started = Instant::now();
        let result = self.get_optional_json::<Script>(&url).await;
        self.log_outcome("script", &url, started, &result, |_| None);
        result
    }

    /// Patterns the indexer is configured with.
    pub async fn patterns(&self) -> Result<Vec<String>> {
        let url = self.endpoint(&["v1", "patterns"]);

        let started = Instant::now();
        let result = self.get_json::<Vec<String>>(&url).await;
        self.log_outcome("patterns", &url, started, &result, |patterns| {
            Some(patterns.len())
        });
        result
    }

    /// Configured endpoint with `segments` appended to its path.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.config.endpoint.clone();
        let mut path = url.path().trim_end_matches('/').to_string();
        for segment in segments {
            push_segment(&mut path, segment);
        }
        url.set_path(&path);
        url.set_query(None);
        url.set_fragment(None);
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T> {
        let body = self.fetch(url).await?;
        decode(&body)
    }

    /// Like [`Self::get_json`], but a blank or `null` body is `None`.
    async fn get_optional_json<T: DeserializeOwned>(&self, url: &Url) -> Result<Option<T>> {
        let body = self.fetch(url).await?;
        if body.trim_ascii().is_empty() {
            return Ok(None);
        }
        decode(&body)
    }

    /// A singular checkpoint response is one object, or `null` when nothing matched.
    async fn fetch_checkpoints(&self, url: &Url, singular: bool) -> Result<Vec<Point>> {
        let body = self.fetch(url).await?;
        if singular {
            Ok(decode::<Option<Point>>(&body)?.into_iter().collect())
        } else {
            decode(&body)
        }
    }

    /// GET `url` and return the body of a 200 response.
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>> {
        let mut request = self
            .http_client
            .get(url.clone())
            .headers(self.headers.clone());
        if let Some(timeout) = self.config.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status != StatusCode::OK {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(body.to_vec())
    }

    fn log_outcome<T>(
        &self,
        operation: &'static str,
        url: &Url,
        started: Instant,
        result: &Result<T>,
        matched: impl FnOnce(&T) -> Option<usize>,
    ) {
        let _entered = self.config.span.as_ref().map(Span::enter);
        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        match result {
            Ok(value) => tracing::debug!(
                operation,
                duration_ms,
                matched = matched(value),
                url = %url,
                "query finished"
            ),
            Err(err) => tracing::warn!(
                operation,
                duration_ms,
                url = %url,
                error = %err,
                "query failed"
            ),
        }
    }
}

/// Race `future` against `token`.
///
/// Yields [`ApiError::Cancelled`] as soon as the token fires; the in-flight request is
/// dropped and no partial result is returned.
pub async fn cancellable<T, F>(token: &CancellationToken, future: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    tokio::select! {
        biased;
        () = token.cancelled() => Err(ApiError::Cancelled),
        result = future => result,
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| ApiError::parse(&e, body))
}

fn validate_endpoint(endpoint: &Url) -> Result<()> {
    let invalid = |reason: &str| ApiError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason: reason.to_string(),
    };

    if endpoint.cannot_be_a_base() {
        return Err(invalid("not a base URL"));
    }
    match endpoint.scheme() {
        "http" | "https" => Ok(()),
        other => Err(invalid(&format!("unsupported scheme {other}"))),
    }
}

fn header_map(headers: &[(String, String)]) -> Result<HeaderMap> {
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        let invalid = |reason: String| ApiError::InvalidHeader {
            name: name.clone(),
            reason,
        };
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| invalid(e.to_string()))?;
        let header_value = HeaderValue::from_str(value).map_err(|e| invalid(e.to_string()))?;
        map.append(header_name, header_value);
    }
    Ok(map)
}
