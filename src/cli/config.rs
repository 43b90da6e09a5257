use anyhow::Result;
use clap::{Args, Subcommand};

use crate::cli::context::CliContext;
use crate::cli::output::emit;
use crate::config::Config;

#[derive(Args, Clone, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Clone, Debug)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Print the config file location
    Path,
}

pub async fn cmd_config(args: ConfigArgs, ctx: &CliContext) -> Result<()> {
    match args.action {
        ConfigAction::Show => emit(ctx.config(), ctx.output(), render_config),
        ConfigAction::Path => {
            println!("{}", ctx.config_path().display());
            Ok(())
        }
    }
}

fn render_config(config: &Config) -> String {
    let session = config
        .session_id
        .as_ref()
        .map(|id| id.to_string())
        .unwrap_or_else(|| "(generated per run)".to_string());
    let gesture_dir = config
        .gesture_dir
        .as_ref()
        .map(|dir| dir.display().to_string())
        .unwrap_or_else(|| "(current directory)".to_string());
    format!("session_id: {}\ngesture_dir: {}", session, gesture_dir)
}
