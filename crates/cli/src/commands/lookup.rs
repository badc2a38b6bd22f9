//! Single-resource lookups: datums, scripts, metadata and patterns.

use anyhow::{bail, Context, Result};
use kupo_rs_api::{cancellable, KupoClient};
use serde_json::json;
use tokio_util::sync::CancellationToken;

use crate::cli::{HashArgs, MetadataArgs, OutputFormat};
use crate::output::{
    format_datum_detail, format_metadata_table, format_patterns_list, format_script_detail,
};

pub async fn run_datum(
    client: &KupoClient,
    token: &CancellationToken,
    args: &HashArgs,
    format: OutputFormat,
) -> Result<()> {
    let Some(datum) = cancellable(token, client.datum(&args.hash))
        .await
        .context("failed to fetch datum")?
    else {
        bail!("datum {} not found", args.hash);
    };

    match format {
        OutputFormat::Table => {
            println!("{}", format_datum_detail(&args.hash, &datum));
        }
        OutputFormat::Json => {
            let json = json!({ "datum_hash": args.hash, "datum": datum });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(())
}

pub async fn run_script(
    client: &KupoClient,
    token: &CancellationToken,
    args: &HashArgs,
    format: OutputFormat,
) -> Result<()> {
    let Some(script) = cancellable(token, client.script(&args.hash))
        .await
        .context("failed to fetch script")?
    else {
        bail!("script {} not found", args.hash);
    };

    let script_hash = script
        .hash_hex()
        .context("script returned by the indexer is not valid hex")?;

    match format {
        OutputFormat::Table => {
            println!("{}", format_script_detail(&script, &script_hash));
        }
        OutputFormat::Json => {
            let json = json!({
                "script_hash": script_hash,
                "language": script.language,
                "script": script.script,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(())
}

pub async fn run_metadata(
    client: &KupoClient,
    token: &CancellationToken,
    args: &MetadataArgs,
    format: OutputFormat,
) -> Result<()> {
    let metadata = cancellable(
        token,
        client.metadata(args.slot, args.transaction_id.as_deref()),
    )
    .await
    .context("failed to fetch metadata")?;

    match format {
        OutputFormat::Table => {
            println!("{}", format_metadata_table(&metadata));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&metadata)?;
            println!("{}", json);
        }
    }

    Ok(())
}

pub async fn run_patterns(
    client: &KupoClient,
    token: &CancellationToken,
    format: OutputFormat,
) -> Result<()> {
    let patterns = cancellable(token, client.patterns())
        .await
        .context("failed to fetch patterns")?;

    match format {
        OutputFormat::Table => {
            println!("{}", format_patterns_list(&patterns));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&patterns)?;
            println!("{}", json);
        }
    }

    Ok(())
}
