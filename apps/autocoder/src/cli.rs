use std::path::PathBuf;

use clap::Parser;

/// Maps free-text survey responses to SOC occupation codes using a
/// text-completion model and the O*NET keyword-search web service.
#[derive(Debug, Parser)]
#[command(name = "soc-autocoder", version, about)]
pub struct Cli {
    /// O*NET web services username
    #[arg(short = 'u', long, env = "ONET_USERNAME")]
    pub onet_username: String,

    /// O*NET web services password
    #[arg(short = 'p', long, env = "ONET_PASSWORD", hide_env_values = true)]
    pub onet_password: String,

    /// API key for the text-completion service
    #[arg(short = 'k', long, env = "ANTHROPIC_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Input CSV; survey responses are read from its first column
    #[arg(short = 'f', long)]
    pub input: PathBuf,

    /// Output CSV path
    #[arg(short = 'o', long, default_value = "resolved_occupations.csv")]
    pub output: PathBuf,

    /// Randomly sample this many responses before processing (0 = all)
    #[arg(short = 'r', long, default_value_t = 0)]
    pub sample: usize,

    /// Pause between records, in milliseconds, to respect external rate limits
    #[arg(long, default_value_t = 500)]
    pub delay_ms: u64,
}
