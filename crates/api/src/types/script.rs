//! Scripts and script hashing.

use std::fmt;

use blake2b_simd::Params;
use serde::{Deserialize, Serialize};

/// Length in bytes of a script hash (blake2b-224).
pub const SCRIPT_HASH_LEN: usize = 28;

/// Language of a script, as named by Kupo.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ScriptLanguage {
    #[serde(rename = "native")]
    Native,
    #[serde(rename = "plutus:v1")]
    PlutusV1,
    #[serde(rename = "plutus:v2")]
    PlutusV2,
    #[serde(rename = "plutus:v3")]
    PlutusV3,
}

impl ScriptLanguage {
    /// Tag byte prepended to the script bytes before hashing.
    pub fn tag(self) -> u8 {
        match self {
            ScriptLanguage::Native => 0x00,
            ScriptLanguage::PlutusV1 => 0x01,
            ScriptLanguage::PlutusV2 => 0x02,
            ScriptLanguage::PlutusV3 => 0x03,
        }
    }
}

impl fmt::Display for ScriptLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScriptLanguage::Native => "native",
            ScriptLanguage::PlutusV1 => "plutus:v1",
            ScriptLanguage::PlutusV2 => "plutus:v2",
            ScriptLanguage::PlutusV3 => "plutus:v3",
        };
        f.write_str(name)
    }
}

/// A script as served by `/v1/scripts/{hash}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    pub language: ScriptLanguage,
    /// Hex-encoded CBOR.
    pub script: String,
}

impl Script {
    /// Compute the script hash: blake2b-224 over the language tag followed by the
    /// decoded script bytes. The indexer does not transmit it.
    pub fn hash(&self) -> Result<[u8; SCRIPT_HASH_LEN], hex::FromHexError> {
        let bytes = hex::decode(&self.script)?;

        let mut state = Params::new().hash_length(SCRIPT_HASH_LEN).to_state();
        state.update(&[self.language.tag()]);
        state.update(&bytes);
        let digest = state.finalize();

        let mut hash = [0u8; SCRIPT_HASH_LEN];
        hash.copy_from_slice(digest.as_bytes());
        Ok(hash)
    }

    /// [`Script::hash`], hex-encoded.
    pub fn hash_hex(&self) -> Result<String, hex::FromHexError> {
        self.hash().map(hex::encode)
    }
}
