//! Filter builders for Kupo queries.
//!
//! # Architecture
//!
//! - **[`MatchesFilter`]**: one directive ("only unspent", "by asset", "created before
//!   slot N"...). Directives are applied in order; the last write to a field wins.
//! - **[`MatchesOptions`]**: the accumulator the directives write into. It also renders
//!   itself into a request target with [`MatchesOptions::apply_to`].
//! - **[`CheckpointsFilter`]** / **[`CheckpointsOptions`]**: the same shape, reduced, for
//!   the checkpoints endpoint.
//!
//! An explicit pattern always owns the path slot. When one is present, transaction and
//! asset filters move into the query string (`transaction_id`, `output_index`,
//! `policy_id`, `asset_name`) instead of becoming path segments.
//!
//! # Common Query Patterns
//!
//! ## Unspent outputs of an asset at an address
//!
//! ```no_run
//! # use kupo_rs_api::*;
//! # async fn example() -> Result<()> {
//! let client = KupoClient::new();
//! let options = MatchesOptions::new()
//!     .only_unspent()
//!     .asset_id("4fc16c94d066e949e771c5581235f8090ad6aaffaf373a426445ca51.73636f6f70")
//!     .address("addr_test1qpluezahtqdtwg4f7qewdvjvz806hsatqwr4u04yzcrk2m7pucvj7jyhq97rca9m0wul2fu3qnsayxvqdwlda8wngurqgyfepe");
//! let matches = client.matches(options).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Outputs alive at a slot, from a list of directives
//!
//! ```no_run
//! # use kupo_rs_api::*;
//! # async fn example() -> Result<()> {
//! let client = KupoClient::new();
//! let options: MatchesOptions = [
//!     MatchesFilter::Policy("4fc16c94d066e949e771c5581235f8090ad6aaffaf373a426445ca51".into()),
//!     MatchesFilter::Overlapping(51_540_727),
//! ]
//! .into_iter()
//! .collect();
//! let matches = client.matches(options).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Most recent checkpoint
//!
//! ```no_run
//! # use kupo_rs_api::*;
//! # async fn example() -> Result<()> {
//! let client = KupoClient::new();
//! let points = client.checkpoints(CheckpointsOptions::new().latest()).await?;
//! # Ok(())
//! # }
//! ```

pub mod checkpoints;
pub mod matches;

pub use checkpoints::{CheckpointsFilter, CheckpointsOptions};
pub use matches::{MatchesFilter, MatchesOptions, WILDCARD};
