use std::env;
use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use tokio::fs;
use tracing::{info, warn, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, SESSION_ENV};
use crate::errors::TouchwireError;

/// Logs go to stderr so json/yaml output on stdout stays machine-readable
pub fn init_logging(level: Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .init();
}

pub struct LoadedConfig {
    pub config: Config,
    pub path: PathBuf,
}

pub async fn load_config(config_path: Option<&PathBuf>) -> Result<LoadedConfig> {
    let explicit = config_path.is_some();
    let config_path = match config_path {
        Some(path) => path.clone(),
        None => {
            // Priority: ./config/touchwire.yaml > ~/.config/touchwire/config.yaml
            let local_config = PathBuf::from("config/touchwire.yaml");
            match dirs::config_dir() {
                Some(mut path) if !local_config.exists() => {
                    path.push("touchwire");
                    path.push("config.yaml");
                    path
                }
                _ => local_config,
            }
        }
    };

    let mut config = if config_path.exists() {
        let content = fs::read_to_string(&config_path)
            .await
            .map_err(|source| TouchwireError::Read {
                path: config_path.clone(),
                source,
            })?;
        let config = Config::from_yaml(&content, &config_path)?;
        info!("Loaded configuration from: {}", config_path.display());
        config
    } else if explicit {
        return Err(TouchwireError::ConfigNotFound(config_path).into());
    } else {
        warn!(
            "Config file not found, using defaults: {}",
            config_path.display()
        );
        Config::default()
    };

    config.apply_env_overrides(env::var(SESSION_ENV).ok());

    Ok(LoadedConfig {
        config,
        path: config_path,
    })
}
