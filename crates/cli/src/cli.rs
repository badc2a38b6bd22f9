//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use kupo_rs_api::DEFAULT_ENDPOINT;

/// Kupo CLI - Query a Kupo chain indexer
#[derive(Parser, Debug)]
#[command(name = "kupo")]
#[command(about = "CLI tool for querying a Kupo chain indexer", long_about = None)]
pub struct Cli {
    /// Kupo endpoint
    #[arg(long, global = true, env = "KUPO_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Request timeout in seconds (0 disables the timeout)
    #[arg(long, global = true, env = "KUPO_TIMEOUT_SECS", default_value_t = 300)]
    pub timeout_secs: u64,

    /// Output format
    #[arg(long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Level of the diagnostics written to stderr
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find transaction outputs matching a set of filters
    Matches(MatchesArgs),
    /// List checkpoints known to the indexer
    Checkpoints(CheckpointsArgs),
    /// Look up a datum by its hash
    Datum(HashArgs),
    /// Look up a script by its hash
    Script(HashArgs),
    /// List transaction metadata in a block
    Metadata(MetadataArgs),
    /// List the patterns the indexer is configured with
    Patterns,
}

#[derive(Args, Debug, Default)]
pub struct MatchesArgs {
    /// Only spent outputs
    #[arg(long, conflicts_with = "unspent")]
    pub spent: bool,

    /// Only unspent outputs
    #[arg(long)]
    pub unspent: bool,

    /// Kupo pattern to match (address, credential, output reference, asset...)
    #[arg(long)]
    pub pattern: Option<String>,

    /// Policy id to filter to
    #[arg(long)]
    pub policy_id: Option<String>,

    /// Asset name to filter to, as Kupo expects it
    #[arg(long, requires = "policy_id", conflicts_with = "asset_name_hex")]
    pub asset_name: Option<String>,

    /// Hex encoded asset name to filter to. Names that are not UTF-8 are sent as hex
    #[arg(long, requires = "policy_id", value_parser = parse_hex_asset_name)]
    pub asset_name_hex: Option<String>,

    /// Transaction id to filter to
    #[arg(long)]
    pub transaction_id: Option<String>,

    /// Output index within --transaction-id
    #[arg(long, requires = "transaction_id")]
    pub output_index: Option<u32>,

    /// Only outputs created before this slot
    #[arg(long)]
    pub created_before: Option<u64>,

    /// Only outputs created after this slot
    #[arg(long)]
    pub created_after: Option<u64>,

    /// Only outputs spent before this slot
    #[arg(long)]
    pub spent_before: Option<u64>,

    /// Only outputs spent after this slot
    #[arg(long)]
    pub spent_after: Option<u64>,

    /// Only outputs alive at this slot
    #[arg(long)]
    pub overlapping: Option<u64>,
}

#[derive(Args, Debug, Default)]
pub struct CheckpointsArgs {
    /// Checkpoint at, or closest before, this slot
    #[arg(long, conflicts_with = "latest")]
    pub slot: Option<u64>,

    /// Only the most recent checkpoint
    #[arg(long)]
    pub latest: bool,
}

#[derive(Args, Debug)]
pub struct HashArgs {
    /// Hex encoded hash
    pub hash: String,
}

#[derive(Args, Debug)]
pub struct MetadataArgs {
    /// Slot of the block
    pub slot: u64,

    /// Only metadata of this transaction
    #[arg(long)]
    pub transaction_id: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// Decode a hex asset name into the name Kupo filters on.
///
/// Binary names have no text form, so they stay hex encoded.
fn parse_hex_asset_name(s: &str) -> Result<String, String> {
    let bytes = hex::decode(s).map_err(|e| format!("invalid hex: {}", e))?;
    Ok(String::from_utf8(bytes).unwrap_or_else(|_| s.to_string()))
}
