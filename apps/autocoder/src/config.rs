use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Result};

use crate::cli::Cli;

/// Runtime configuration assembled from CLI flags and environment variables.
/// Credentials are never embedded in the binary and must never be logged.
#[derive(Debug, Clone)]
pub struct Config {
    pub onet_username: String,
    pub onet_password: String,
    pub api_key: String,
    pub input: PathBuf,
    pub output: PathBuf,
    pub sample: usize,
    pub delay: Duration,
    pub rust_log: String,
}

impl Config {
    /// Validates and converts parsed CLI arguments. Fails before any record
    /// is processed if a credential is missing or blank.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        if cli.onet_username.trim().is_empty() {
            bail!("O*NET username must not be empty");
        }
        if cli.onet_password.trim().is_empty() {
            bail!("O*NET password must not be empty");
        }
        if cli.api_key.trim().is_empty() {
            bail!("API key must not be empty");
        }

        Ok(Config {
            onet_username: cli.onet_username,
            onet_password: cli.onet_password,
            api_key: cli.api_key,
            input: cli.input,
            output: cli.output,
            sample: cli.sample,
            delay: Duration::from_millis(cli.delay_ms),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
