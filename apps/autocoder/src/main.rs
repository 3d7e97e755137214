mod cli;
mod config;
mod dataset;
mod errors;
mod llm_client;
mod models;
mod resolver;
mod runner;
mod taxonomy;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Cli;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::resolver::OccupationResolver;
use crate::taxonomy::{Credentials, OnetClient};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // load .env if present; ignore if missing
    let config = Config::from_cli(Cli::parse())?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting soc-autocoder v{}", env!("CARGO_PKG_VERSION"));

    let responses = dataset::read_responses(&config.input)?;
    info!(
        "Loaded {} survey responses from {}",
        responses.len(),
        config.input.display()
    );

    let responses = dataset::sample_responses(responses, config.sample);
    if config.sample > 0 {
        info!("Sampled down to {} responses", responses.len());
    }

    let oracle = Arc::new(LlmClient::new(config.api_key.clone()));
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let taxonomy = Arc::new(OnetClient::new(Credentials::new(
        &config.onet_username,
        &config.onet_password,
    )));
    info!("O*NET client initialized");

    let resolver = OccupationResolver::new(oracle, taxonomy);

    let summary = runner::process_responses(&resolver, &responses, config.delay).await;

    dataset::write_records(&config.output, &summary.resolved)
        .with_context(|| format!("Failed to write output to {}", config.output.display()))?;

    info!(
        "Run complete: {} resolved, {} failed, output written to {}",
        summary.resolved.len(),
        summary.failures.len(),
        config.output.display()
    );

    Ok(())
}
