use crate::config::toml_config::CuratorConfig;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "pin-curator")]
#[command(about = "Pick the best pin from the feed and add it to a board")]
pub struct CliArgs {
    /// Path to a TOML configuration file. Defaults plus ACCESS_TOKEN/BOARD_ID when omitted.
    #[arg(short, long)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit JSON log lines instead of the compact console format
    #[arg(long)]
    pub json_logs: bool,

    /// Select a pin but do not publish it
    #[arg(long)]
    pub dry_run: bool,

    /// Log process CPU and memory after each phase
    #[arg(long)]
    pub monitor: bool,
}

impl CliArgs {
    pub fn load_config(&self) -> Result<CuratorConfig> {
        match &self.config {
            Some(path) => CuratorConfig::from_file(path),
            None => Ok(CuratorConfig::from_env()),
        }
    }
}
