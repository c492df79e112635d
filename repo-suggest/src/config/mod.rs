//! Picker settings loading and validation.
//!
//! Settings live in a single TOML file: source limits plus the catalog of
//! tracked configurations offered by the configuration source.

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::{ConfigurationEntry, PickerSettings};

use crate::git_url::is_valid_git_url;
use crate::suggestions::MAX_RESULTS;
use std::path::Path;
use tracing::{info, warn};

/// Loads and validates picker settings from a TOML file.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file is missing, unreadable, not valid
/// TOML, or contains an invalid configuration entry.
pub fn load_settings(path: &Path) -> Result<PickerSettings, ConfigError> {
    info!(path = %path.display(), "Loading picker settings");

    if !path.exists() {
        return Err(ConfigError::MissingFile {
            path: path.display().to_string(),
        });
    }

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;

    let mut settings: PickerSettings =
        toml::from_str(&contents).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })?;

    validate(&settings, path)?;

    if settings.max_results > MAX_RESULTS {
        warn!(
            max_results = settings.max_results,
            cap = MAX_RESULTS,
            "max-results exceeds the engine cap, clamping"
        );
        settings.max_results = MAX_RESULTS;
    }

    info!(
        configurations = settings.configurations.len(),
        "Loaded picker settings"
    );
    Ok(settings)
}

/// Rejects configuration entries that could never resolve in the picker.
fn validate(settings: &PickerSettings, path: &Path) -> Result<(), ConfigError> {
    for entry in &settings.configurations {
        if entry.id.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                path: path.display().to_string(),
                message: "configuration id must not be empty".to_string(),
            });
        }
        if entry.name.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                path: path.display().to_string(),
                message: format!("configuration '{}' has an empty name", entry.id),
            });
        }
        if !is_valid_git_url(&entry.repository_url) {
            return Err(ConfigError::ValidationError {
                path: path.display().to_string(),
                message: format!(
                    "configuration '{}' has an invalid repository-url '{}'",
                    entry.id, entry.repository_url
                ),
            });
        }
    }
    Ok(())
}
