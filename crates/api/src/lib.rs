//! Kupo Rust API Library
//!
//! This crate provides a Rust client for [Kupo](https://cardanosolutions.github.io/kupo/),
//! a lightweight chain indexer for Cardano. It covers the read-only HTTP surface: matches,
//! checkpoints, datums, scripts, metadata and patterns.
//!
//! # Example
//!
//! ```no_run
//! use kupo_rs_api::{KupoClient, MatchesOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), kupo_rs_api::ApiError> {
//!     let client = KupoClient::from_endpoint("http://127.0.0.1:1442")?;
//!
//!     let options = MatchesOptions::new()
//!         .only_unspent()
//!         .policy("4fc16c94d066e949e771c5581235f8090ad6aaffaf373a426445ca51");
//!     for m in client.matches(options).await? {
//!         println!("{} holds {} lovelace", m.output_reference(), m.value.coins);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Cancellation
//!
//! Dropping a query future aborts the request. To cancel from elsewhere, race it against a
//! [`CancellationToken`](tokio_util::sync::CancellationToken) with [`cancellable`]:
//!
//! ```no_run
//! use kupo_rs_api::{cancellable, KupoClient};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn run() -> Result<(), kupo_rs_api::ApiError> {
//! let client = KupoClient::new();
//! let token = CancellationToken::new();
//! let patterns = cancellable(&token, client.patterns()).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All errors are unified through [`ApiError`]. Use [`ApiError::error_category()`] for
//! high-level classification; see [`ErrorCategory`] for the full set of categories.

pub mod client;
pub mod error;
pub mod filters;
pub mod types;

// Re-export main types at crate root
pub use client::{cancellable, ClientConfig, KupoClient, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
pub use error::{ApiError, ErrorCategory, Result};
pub use filters::{CheckpointsFilter, CheckpointsOptions, MatchesFilter, MatchesOptions, WILDCARD};
pub use types::{
    Datum, Match, Metadatum, Point, Script, ScriptLanguage, Value, LOVELACE, SCRIPT_HASH_LEN,
};
pub use url::Url;
