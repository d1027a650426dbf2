pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "version-tag")]
#[command(about = "Publish iOS and Android app versions as CI outputs")]
pub struct CliConfig {
    /// Project root holding ios/ and android/ (defaults to the parent of the binary's directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Optional TOML file overriding descriptor paths and output names
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Echo outputs without appending them to GITHUB_OUTPUT
    #[arg(long)]
    pub dry_run: bool,

    /// Log format on stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
