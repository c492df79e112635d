//! Picker settings deserialization.

use serde::Deserialize;

/// Settings for the suggestion picker, parsed from a kebab-case TOML file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PickerSettings {
    /// Maximum recently used repositories offered by the suggested source.
    #[serde(default = "default_suggested_limit")]
    pub suggested_limit: usize,

    /// Maximum tracked configurations returned per name filter.
    #[serde(default = "default_configuration_limit")]
    pub configuration_limit: usize,

    /// Results requested per SCM search query.
    #[serde(default = "default_search_limit")]
    pub search_limit: u8,

    /// Upper bound on the merged result list. Clamped to the engine cap.
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Tracked project configurations offered by the catalog source.
    #[serde(default)]
    pub configurations: Vec<ConfigurationEntry>,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            suggested_limit: default_suggested_limit(),
            configuration_limit: default_configuration_limit(),
            search_limit: default_search_limit(),
            max_results: default_max_results(),
            configurations: Vec::new(),
        }
    }
}

/// A tracked project ("configuration") tied to a repository.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigurationEntry {
    /// Stable identifier of the configuration.
    pub id: String,

    /// Display name shown in the picker.
    pub name: String,

    /// Git remote URL of the tracked repository.
    pub repository_url: String,
}

pub(crate) fn default_suggested_limit() -> usize {
    100
}

pub(crate) fn default_configuration_limit() -> usize {
    100
}

pub(crate) fn default_search_limit() -> u8 {
    30
}

pub(crate) fn default_max_results() -> usize {
    crate::suggestions::MAX_RESULTS
}
