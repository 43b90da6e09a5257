//! Configuration management module
//!
//! YAML configuration for the touchwire CLI. Every key is optional.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use touchwire_core_types::SessionId;

use crate::errors::{TouchwireError, TouchwireResult};

pub const SESSION_ENV: &str = "TOUCHWIRE_SESSION_ID";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Session used when `--session` is not given
    pub session_id: Option<SessionId>,

    /// Base directory for relative gesture file paths
    pub gesture_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_yaml(content: &str, path: &Path) -> TouchwireResult<Self> {
        serde_yaml::from_str(content).map_err(|source| TouchwireError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Environment wins over the file for the session id
    pub fn apply_env_overrides(&mut self, session_override: Option<String>) {
        if let Some(session) = session_override.filter(|value| !value.trim().is_empty()) {
            self.session_id = Some(SessionId::from(session.trim()));
        }
    }

    pub fn resolve_gesture_path(&self, path: &Path) -> PathBuf {
        match &self.gesture_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }
}
