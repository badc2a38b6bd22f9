//! Command implementations.

pub mod checkpoints;
pub mod lookup;
pub mod matches;

pub use checkpoints::run_checkpoints;
pub use lookup::{run_datum, run_metadata, run_patterns, run_script};
pub use matches::run_matches;
