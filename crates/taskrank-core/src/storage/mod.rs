mod config;

pub use config::{AnalyzeConfig, Config, LogConfig, OutputConfig, SuggestConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/taskrank[-dev]/` based on TASKRANK_ENV.
///
/// Set TASKRANK_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("TASKRANK_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("taskrank-dev")
    } else {
        base_dir.join("taskrank")
    };

    std::fs::create_dir_all(&dir).map_err(|source| ConfigError::DirectoryUnavailable {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
