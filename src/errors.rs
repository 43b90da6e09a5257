//! Error handling module
//!
//! Errors raised while loading configuration and gesture files. Gesture
//! forwarding itself reports whatever the executor reports.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TouchwireError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON gesture in {origin}: {source}")]
    GestureJson {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid YAML gesture in {origin}: {source}")]
    GestureYaml {
        origin: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("unsupported gesture file format: {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(PathBuf),

    #[error("config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

pub type TouchwireResult<T> = Result<T, TouchwireError>;
