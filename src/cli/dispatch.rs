use super::config::cmd_config;
use super::env::CliArgs;
use super::inspect::cmd_inspect;
use super::perform::cmd_perform;
use crate::cli::commands::Commands;
use crate::cli::context::CliContext;
use anyhow::Result;

pub async fn dispatch(cli: &CliArgs, ctx: &CliContext) -> Result<()> {
    match cli.command.clone() {
        Commands::Perform(args) => cmd_perform(args, ctx).await,
        Commands::Inspect(args) => cmd_inspect(args, ctx).await,
        Commands::Config(args) => cmd_config(args, ctx).await,
    }
}
