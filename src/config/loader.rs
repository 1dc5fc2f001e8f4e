//! Configuration loading from disk.

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse failed: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
