//! Matches command implementation.

use anyhow::{Context, Result};
use kupo_rs_api::{cancellable, KupoClient, MatchesOptions};
use tokio_util::sync::CancellationToken;

use crate::cli::{MatchesArgs, OutputFormat};
use crate::output::format_matches_table;

/// Translate command line flags into query options.
pub fn matches_options(args: &MatchesArgs) -> MatchesOptions {
    let mut options = MatchesOptions::new();

    if args.unspent {
        options = options.only_unspent();
    } else if args.spent {
        options = options.only_spent();
    }
    if let Some(pattern) = &args.pattern {
        options = options.pattern(pattern.as_str());
    }
    if let Some(policy_id) = &args.policy_id {
        options = match args.asset_name.as_ref().or(args.asset_name_hex.as_ref()) {
            Some(asset_name) => options.asset(policy_id.as_str(), asset_name.as_str()),
            None => options.policy(policy_id.as_str()),
        };
    }
    if let Some(transaction_id) = &args.transaction_id {
        options = match args.output_index {
            Some(index) => options.output(transaction_id.as_str(), index),
            None => options.transaction(transaction_id.as_str()),
        };
    }
    // Overlapping first so explicit bounds override it.
    if let Some(slot) = args.overlapping {
        options = options.overlapping(slot);
    }
    if let Some(slot) = args.created_before {
        options = options.created_before(slot);
    }
    if let Some(slot) = args.created_after {
        options = options.created_after(slot);
    }
    if let Some(slot) = args.spent_before {
        options = options.spent_before(slot);
    }
    if let Some(slot) = args.spent_after {
        options = options.spent_after(slot);
    }

    options
}

pub async fn run_matches(
    client: &KupoClient,
    token: &CancellationToken,
    args: &MatchesArgs,
    format: OutputFormat,
) -> Result<()> {
    let options = matches_options(args);
    let matches = cancellable(token, client.matches(options))
        .await
        .context("failed to find matches")?;

    match format {
        OutputFormat::Table => {
            println!("{}", format_matches_table(&matches));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&matches)?;
            println!("{}", json);
        }
    }

    Ok(())
}
