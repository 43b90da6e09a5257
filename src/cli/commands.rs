use clap::Subcommand;

use super::config::ConfigArgs;
use super::inspect::InspectArgs;
use super::perform::PerformArgs;

#[derive(Subcommand, Clone)]
pub enum Commands {
    /// Forward a gesture through the session or element touch action (dry run)
    Perform(PerformArgs),

    /// Parse a gesture and list its steps
    Inspect(InspectArgs),

    /// Configuration management
    Config(ConfigArgs),
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Perform(_) => "perform",
            Commands::Inspect(_) => "inspect",
            Commands::Config(_) => "config",
        }
    }
}
