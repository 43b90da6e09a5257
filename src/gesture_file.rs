//! Loading gesture requests from JSON/YAML files and inline JSON

use std::path::Path;

use tokio::fs;
use touch_action::GestureRequest;
use tracing::debug;

use crate::errors::{TouchwireError, TouchwireResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureFormat {
    Json,
    Yaml,
}

impl GestureFormat {
    pub fn from_path(path: &Path) -> TouchwireResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        match extension.as_deref() {
            Some("json") => Ok(GestureFormat::Json),
            Some("yaml") | Some("yml") => Ok(GestureFormat::Yaml),
            _ => Err(TouchwireError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

pub fn parse_gesture(
    content: &str,
    format: GestureFormat,
    origin: &str,
) -> TouchwireResult<GestureRequest> {
    match format {
        GestureFormat::Json => {
            serde_json::from_str(content).map_err(|source| TouchwireError::GestureJson {
                origin: origin.to_string(),
                source,
            })
        }
        GestureFormat::Yaml => {
            serde_yaml::from_str(content).map_err(|source| TouchwireError::GestureYaml {
                origin: origin.to_string(),
                source,
            })
        }
    }
}

pub async fn load_gesture(path: &Path) -> TouchwireResult<GestureRequest> {
    let format = GestureFormat::from_path(path)?;
    let content = fs::read_to_string(path)
        .await
        .map_err(|source| TouchwireError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    let request = parse_gesture(&content, format, &path.display().to_string())?;
    debug!(path = %path.display(), steps = request.len(), "Loaded gesture file");
    Ok(request)
}
