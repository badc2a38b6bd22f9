//! Checkpoints command implementation.

use anyhow::{Context, Result};
use kupo_rs_api::{cancellable, CheckpointsOptions, KupoClient};
use tokio_util::sync::CancellationToken;

use crate::cli::{CheckpointsArgs, OutputFormat};
use crate::output::format_checkpoints_table;

pub async fn run_checkpoints(
    client: &KupoClient,
    token: &CancellationToken,
    args: &CheckpointsArgs,
    format: OutputFormat,
) -> Result<()> {
    let mut options = CheckpointsOptions::new();
    if let Some(slot) = args.slot {
        options = options.by_slot(slot);
    } else if args.latest {
        options = options.latest();
    }

    let points = cancellable(token, client.checkpoints(options))
        .await
        .context("failed to fetch checkpoints")?;

    match format {
        OutputFormat::Table => {
            println!("{}", format_checkpoints_table(&points));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&points)?;
            println!("{}", json);
        }
    }

    Ok(())
}
