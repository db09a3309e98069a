use std::path::PathBuf;
use thiserror::Error;

/// Errors that could happen when loading or initializing the plugin
/// configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error on {1}: {0}")]
    IoError(std::io::Error, PathBuf),
    #[error("JSON parse error in {1}: {0}")]
    JsonError(serde_json::Error, PathBuf),
}
