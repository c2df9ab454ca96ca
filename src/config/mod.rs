#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "movie-catalog")]
#[command(about = "Manage an in-memory movie catalog from the terminal")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format for rendered results (text or json)
    #[arg(long)]
    pub format: Option<String>,

    /// Start with an empty catalog instead of the built-in list
    #[arg(long)]
    pub empty: bool,

    /// Write logs as JSON
    #[arg(long)]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
