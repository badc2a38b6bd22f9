//! Type definitions for the Kupo API.

pub mod matches;
pub mod metadata;
pub mod scalars;
pub mod script;

pub use matches::{Match, Point, Value, LOVELACE};
pub use metadata::{Datum, Metadatum};
pub use script::{Script, ScriptLanguage, SCRIPT_HASH_LEN};
