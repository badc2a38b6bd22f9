//! Transaction metadata and datums.

use serde::{Deserialize, Serialize};

/// Metadata attached to a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadatum {
    /// Hash of the metadata.
    #[serde(alias = "Hash")]
    pub hash: String,
    /// Hex-encoded CBOR.
    #[serde(alias = "Raw")]
    pub raw: String,
    /// Detailed schema, passed through untouched.
    #[serde(alias = "Schema", default)]
    pub schema: serde_json::Value,
}

/// Body of `/v1/datums/{hash}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Datum {
    /// Hex-encoded CBOR; `None` or empty when the indexer does not know the datum.
    #[serde(alias = "Datum", default)]
    pub datum: Option<String>,
}
