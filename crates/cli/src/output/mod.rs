//! Output formatting for CLI results.

pub mod detail;
pub mod table;

pub use detail::{format_datum_detail, format_script_detail};
pub use table::{
    format_checkpoints_table, format_matches_table, format_metadata_table, format_patterns_list,
};
