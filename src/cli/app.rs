use anyhow::Result;
use clap::Parser;
use tracing::{debug, error};

use super::context::CliContext;
use super::dispatch::dispatch;
use super::env::CliArgs;
use super::runtime::{init_logging, load_config, LoadedConfig};

pub async fn run() -> Result<()> {
    let cli = CliArgs::parse();
    init_logging(cli.effective_log_level());

    let command = cli.command.name();
    debug!(command, version = env!("CARGO_PKG_VERSION"), "touchwire starting");

    let LoadedConfig { config, path } = load_config(cli.config.as_ref()).await?;
    let cli_context = CliContext::new(config, path, cli.output.clone());

    dispatch(&cli, &cli_context).await.map_err(|err| {
        error!(command, error = %err, "touchwire command failed");
        err
    })
}
