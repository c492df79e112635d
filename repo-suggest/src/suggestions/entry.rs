//! Suggested repository entries and URL normalization.

use serde::{Deserialize, Serialize};

/// Sentinel used in dedup keys for entries without a configuration.
const NO_CONFIGURATION: &str = "no-configuration";

/// A candidate repository shown in the picker.
///
/// Entries come from three sources (recently used, configuration catalog,
/// SCM search) and use the camelCase wire shape of the upstream providers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedRepository {
    /// Git remote URL. Not guaranteed normalized; may carry a trailing `.git`.
    pub url: String,

    /// Display name derived from the URL or provider metadata.
    #[serde(default)]
    pub repo_name: String,

    /// Set only when the repository is onboarded as a tracked configuration.
    pub configuration_id: Option<String>,

    /// Display name of the tracked configuration, when present.
    pub configuration_name: Option<String>,
}

impl SuggestedRepository {
    /// Creates a bare suggestion with no configuration link.
    pub fn new(url: impl Into<String>, repo_name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            repo_name: repo_name.into(),
            configuration_id: None,
            configuration_name: None,
        }
    }

    /// Normalizes the URL in place; see [`normalize_repo_url`].
    pub(crate) fn normalize(&mut self) {
        if let Some(stripped) = self.url.strip_suffix(".git") {
            self.url.truncate(stripped.len());
        }
    }

    /// Key deciding whether two entries represent the same suggestion.
    ///
    /// The URL is combined with the configuration id (or a sentinel when
    /// absent). With `exclude_configurations` the key is the URL alone, so a
    /// configured and a bare entry for the same repository collapse into one.
    /// Comparison is case-sensitive on the raw URL.
    pub(crate) fn dedup_key(&self, exclude_configurations: bool) -> String {
        if exclude_configurations {
            return self.url.clone();
        }
        format!(
            "{}::{}",
            self.url,
            self.configuration_id.as_deref().unwrap_or(NO_CONFIGURATION)
        )
    }
}

/// Strips a single trailing literal `.git` from a repository URL.
///
/// Idempotent: normalizing an already-normalized URL is a no-op.
pub fn normalize_repo_url(url: &str) -> &str {
    url.strip_suffix(".git").unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_strips_git_suffix() {
        assert_eq!(
            normalize_repo_url("https://b.com/repo.git"),
            "https://b.com/repo"
        );
        assert_eq!(normalize_repo_url("https://b.com/repo"), "https://b.com/repo");
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = normalize_repo_url("https://b.com/repo.git");
        let twice = normalize_repo_url(once);
        assert_eq!(once, twice);
    }

    #[test]
    fn normalization_only_matches_suffix() {
        assert_eq!(
            normalize_repo_url("https://b.com/repo.github"),
            "https://b.com/repo.github"
        );
    }

    #[test]
    fn entry_normalize_mutates_in_place() {
        let mut entry = SuggestedRepository::new("https://b.com/repo.git", "repo");
        entry.normalize();
        assert_eq!(entry.url, "https://b.com/repo");
    }

    #[test]
    fn dedup_key_distinguishes_configurations() {
        let bare = SuggestedRepository::new("https://b.com/repo", "repo");
        let mut configured = bare.clone();
        configured.configuration_id = Some("c1".to_string());

        assert_ne!(bare.dedup_key(false), configured.dedup_key(false));
        assert_eq!(bare.dedup_key(true), configured.dedup_key(true));
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let mut entry = SuggestedRepository::new("https://b.com/repo", "repo");
        entry.configuration_id = Some("c1".to_string());

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["repoName"], "repo");
        assert_eq!(json["configurationId"], "c1");
    }
}
