//! Recently used repositories store.

use crate::providers::ProviderError;
use crate::suggestions::{normalize_repo_url, SuggestedRepository};
use std::path::Path;
use tracing::debug;

/// Maximum entries kept in the store, most recent first.
const MAX_RECENT: usize = 100;

/// A small JSON-backed store of recently used repositories.
///
/// Stands in for the platform's suggested-repositories provider: the most
/// recently used entries come first, and recording a repository that is
/// already known moves it to the front instead of duplicating it.
#[derive(Debug, Clone, Default)]
pub struct RecentRepositories {
    entries: Vec<SuggestedRepository>,
}

impl RecentRepositories {
    /// Loads the store from a JSON file.
    ///
    /// A missing file yields an empty store; a present but unreadable or
    /// malformed file is an error.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] on read or parse failure.
    pub fn load(path: &Path) -> Result<Self, ProviderError> {
        if !path.exists() {
            debug!(path = %path.display(), "No recent repositories store, starting empty");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| ProviderError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        let entries: Vec<SuggestedRepository> =
            serde_json::from_str(&contents).map_err(|e| ProviderError::Json {
                path: path.display().to_string(),
                source: e,
            })?;

        debug!(count = entries.len(), "Loaded recent repositories");
        Ok(Self { entries })
    }

    /// Writes the store back to a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] on serialization or write failure.
    pub fn save(&self, path: &Path) -> Result<(), ProviderError> {
        let contents =
            serde_json::to_string_pretty(&self.entries).map_err(|e| ProviderError::Json {
                path: path.display().to_string(),
                source: e,
            })?;

        std::fs::write(path, contents).map_err(|e| ProviderError::Io {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Records a repository as just used, moving it to the front.
    ///
    /// An existing entry for the same normalized URL is replaced; the store
    /// is then capped at its maximum size.
    pub fn record(&mut self, entry: SuggestedRepository) {
        let url = normalize_repo_url(&entry.url).to_string();
        self.entries
            .retain(|existing| normalize_repo_url(&existing.url) != url);
        self.entries.insert(0, entry);
        self.entries.truncate(MAX_RECENT);
    }

    /// Returns up to `limit` entries, most recent first.
    pub fn suggestions(&self, limit: usize) -> Vec<SuggestedRepository> {
        self.entries.iter().take(limit).cloned().collect()
    }

    /// Number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_store_starts_empty() {
        let temp = TempDir::new().unwrap();
        let store = RecentRepositories::load(&temp.path().join("recent.json")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn malformed_store_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("recent.json");
        std::fs::write(&path, "{not json").unwrap();

        let result = RecentRepositories::load(&path);
        assert!(matches!(result, Err(ProviderError::Json { .. })));
    }

    #[test]
    fn save_and_load_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("recent.json");

        let mut store = RecentRepositories::default();
        store.record(SuggestedRepository::new("https://b.com/repo", "repo"));
        store.save(&path).unwrap();

        let loaded = RecentRepositories::load(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.suggestions(10)[0].url, "https://b.com/repo");
    }

    #[test]
    fn record_moves_known_url_to_front() {
        let mut store = RecentRepositories::default();
        store.record(SuggestedRepository::new("https://b.com/first", "first"));
        store.record(SuggestedRepository::new("https://b.com/second", "second"));
        // Same repository as "first", only the .git suffix differs.
        store.record(SuggestedRepository::new("https://b.com/first.git", "first"));

        assert_eq!(store.len(), 2);
        let suggestions = store.suggestions(10);
        assert_eq!(suggestions[0].url, "https://b.com/first.git");
        assert_eq!(suggestions[1].url, "https://b.com/second");
    }

    #[test]
    fn store_is_capped() {
        let mut store = RecentRepositories::default();
        for i in 0..150 {
            store.record(SuggestedRepository::new(
                format!("https://b.com/repo-{i}"),
                format!("repo-{i}"),
            ));
        }

        assert_eq!(store.len(), MAX_RECENT);
        // Most recent survives the cap.
        assert_eq!(store.suggestions(1)[0].url, "https://b.com/repo-149");
    }

    #[test]
    fn suggestions_respect_limit() {
        let mut store = RecentRepositories::default();
        for i in 0..10 {
            store.record(SuggestedRepository::new(
                format!("https://b.com/repo-{i}"),
                format!("repo-{i}"),
            ));
        }

        assert_eq!(store.suggestions(3).len(), 3);
    }
}
