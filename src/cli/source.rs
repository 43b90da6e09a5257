use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use touch_action::GestureRequest;

use crate::config::Config;
use crate::gesture_file::{load_gesture, parse_gesture, GestureFormat};

/// Where a gesture request comes from
#[derive(Args, Clone, Debug)]
#[group(required = true, multiple = false)]
pub struct GestureSource {
    /// Gesture file (.json, .yaml or .yml); relative paths use `gesture_dir`
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Gesture as inline JSON, e.g. '"release"' or '[{"action":"press","x":1,"y":2},"release"]'
    #[arg(long, value_name = "JSON")]
    pub inline: Option<String>,
}

impl GestureSource {
    pub async fn load(&self, config: &Config) -> Result<GestureRequest> {
        let request = match (&self.file, &self.inline) {
            (Some(path), _) => load_gesture(&config.resolve_gesture_path(path)).await?,
            (None, Some(inline)) => parse_gesture(inline, GestureFormat::Json, "--inline")?,
            (None, None) => anyhow::bail!("either --file or --inline is required"),
        };
        Ok(request)
    }
}
