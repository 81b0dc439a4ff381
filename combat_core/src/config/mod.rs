//! Arena configuration loading

mod constants;

pub use constants::{AbilityConstants, ArenaConstants, CombatantStats, OpponentAiConstants};

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error loading arena configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading '{}': {error}", .path.display())]
    Io {
        error: std::io::Error,
        path: PathBuf,
    },
    #[error("Parse error in {}: {error}", describe(.path))]
    Parse {
        error: toml::de::Error,
        path: Option<PathBuf>,
    },
    #[error("Validation error in {}: {message}", describe(.path))]
    Validation {
        message: String,
        path: Option<PathBuf>,
    },
}

impl ConfigError {
    /// Attach the file path to errors raised while parsing inline content
    fn at(self, file: &Path) -> Self {
        match self {
            ConfigError::Parse { error, path: None } => ConfigError::Parse {
                error,
                path: Some(file.to_path_buf()),
            },
            ConfigError::Validation {
                message,
                path: None,
            } => ConfigError::Validation {
                message,
                path: Some(file.to_path_buf()),
            },
            other => other,
        }
    }
}

fn describe(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!("'{}'", path.display()),
        None => "inline config".to_string(),
    }
}

/// Parse a TOML string
pub(crate) fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    toml::from_str(content).map_err(|error| ConfigError::Parse { error, path: None })
}

/// Read and parse a TOML file
pub(crate) fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
        error,
        path: path.to_path_buf(),
    })?;
    parse_toml(&content).map_err(|e| e.at(path))
}
