//! Kupo CLI - Query a Kupo chain indexer.

mod cli;
mod commands;
mod output;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use kupo_rs_api::{ClientConfig, KupoClient, Url};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use commands::{run_checkpoints, run_datum, run_matches, run_metadata, run_patterns, run_script};

fn init_tracing(cli: &Cli) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::from(cli.log_level))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("failed to install logger")
}

fn client_config(cli: &Cli) -> Result<ClientConfig> {
    let endpoint = cli
        .endpoint
        .parse::<Url>()
        .with_context(|| format!("invalid endpoint {}", cli.endpoint))?;

    let config = ClientConfig::new()
        .with_endpoint_url(endpoint)
        .with_span(tracing::info_span!("kupo", endpoint = %cli.endpoint));

    Ok(match cli.timeout_secs {
        0 => config.without_timeout(),
        secs => config.with_timeout(Duration::from_secs(secs)),
    })
}

/// Cancel `token` on the first Ctrl-C.
fn cancel_on_ctrl_c(token: &CancellationToken) {
    let token = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("interrupted, cancelling query");
            token.cancel();
        }
    });
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    let client = KupoClient::with_config(client_config(&cli)?)?;
    let token = CancellationToken::new();
    cancel_on_ctrl_c(&token);

    match &cli.command {
        Commands::Matches(args) => {
            run_matches(&client, &token, args, cli.format).await?;
        }
        Commands::Checkpoints(args) => {
            run_checkpoints(&client, &token, args, cli.format).await?;
        }
        Commands::Datum(args) => {
            run_datum(&client, &token, args, cli.format).await?;
        }
        Commands::Script(args) => {
            run_script(&client, &token, args, cli.format).await?;
        }
        Commands::Metadata(args) => {
            run_metadata(&client, &token, args, cli.format).await?;
        }
        Commands::Patterns => {
            run_patterns(&client, &token, cli.format).await?;
        }
    }

    Ok(())
}
