use crate::pipeline::PreprocessOptions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration of the `preprocess_image` tool.
#[derive(Debug, Deserialize)]
pub struct PreprocessToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub options: PreprocessOptions,
    pub output: ToolOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct ToolOutputConfig {
    #[serde(rename = "result_json")]
    pub result_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<PreprocessToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn parse_config(data: &str) -> Result<PreprocessToolConfig, serde_json::Error> {
    serde_json::from_str(data)
}
