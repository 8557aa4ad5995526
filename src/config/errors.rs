use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error
    },
    #[error("Could not parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error
    }
}
