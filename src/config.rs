//! JSON run configuration for the CLI.
use crate::color::{Rgb, DEFAULT_TARGET};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Every field is optional in the file so a config can set just a color or
/// just an output; the CLI validates that an input exists after merging its
/// own flags over these values.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RecolorConfig {
    pub input: Option<PathBuf>,
    pub output: PathBuf,
    pub color: Rgb,
}

impl Default for RecolorConfig {
    fn default() -> Self {
        Self {
            input: None,
            output: PathBuf::from("output.png"),
            color: DEFAULT_TARGET,
        }
    }
}

pub fn load_config(path: &Path) -> Result<RecolorConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
