use clap::Parser;
use std::path::PathBuf;
use tracing::Level;

use super::commands::Commands;
use super::output::OutputFormat;

/// Forward touch gestures to a mobile automation session
#[derive(Parser)]
#[command(name = "touchwire", author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Config file (default: ./config/touchwire.yaml, then the user config dir)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log level when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(short, long, default_value_t = Level::INFO)]
    pub log_level: Level,

    /// Shorthand for `--log-level debug`
    #[arg(short, long)]
    pub debug: bool,

    /// How results are printed
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Human)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    pub fn effective_log_level(&self) -> Level {
        if self.debug {
            Level::DEBUG.max(self.log_level)
        } else {
            self.log_level
        }
    }
}
