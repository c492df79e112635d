//! Tracked configuration catalog source.

use crate::config::ConfigurationEntry;
use crate::suggestions::{normalize_repo_url, SuggestedRepository};

/// In-memory catalog of tracked configurations, searchable by name or URL.
///
/// Stands in for the platform's paginated configuration-search provider; the
/// catalog is small enough to filter locally.
#[derive(Debug, Clone, Default)]
pub struct ConfigurationCatalog {
    entries: Vec<ConfigurationEntry>,
}

impl ConfigurationCatalog {
    /// Builds a catalog from configuration entries, preserving their order.
    pub fn new(entries: Vec<ConfigurationEntry>) -> Self {
        Self { entries }
    }

    /// Returns configurations matching `name_filter`, up to `limit`.
    ///
    /// Matching is a case-insensitive substring test against the display
    /// name and the repository URL; an empty filter matches everything.
    pub fn search(&self, name_filter: &str, limit: usize) -> Vec<SuggestedRepository> {
        let needle = name_filter.trim().to_lowercase();

        self.entries
            .iter()
            .filter(|entry| {
                needle.is_empty()
                    || entry.name.to_lowercase().contains(&needle)
                    || entry.repository_url.to_lowercase().contains(&needle)
            })
            .take(limit)
            .map(|entry| SuggestedRepository {
                url: entry.repository_url.clone(),
                repo_name: repo_name_from_url(&entry.repository_url),
                configuration_id: Some(entry.id.clone()),
                configuration_name: Some(entry.name.clone()),
            })
            .collect()
    }

    /// Number of configurations in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the catalog has no configurations.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Derives a display name from the last path segment of a remote URL.
fn repo_name_from_url(url: &str) -> String {
    normalize_repo_url(url)
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, name: &str, url: &str) -> ConfigurationEntry {
        ConfigurationEntry {
            id: id.to_string(),
            name: name.to_string(),
            repository_url: url.to_string(),
        }
    }

    fn catalog() -> ConfigurationCatalog {
        ConfigurationCatalog::new(vec![
            entry("cfg-web", "Webapp", "https://git.example.com/acme/webapp.git"),
            entry("cfg-api", "API", "https://git.example.com/acme/api"),
            entry("cfg-docs", "Docs", "https://git.example.com/acme/docs"),
        ])
    }

    #[test]
    fn empty_filter_returns_everything() {
        let results = catalog().search("", 10);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].configuration_id.as_deref(), Some("cfg-web"));
    }

    #[test]
    fn filters_by_name_case_insensitively() {
        let results = catalog().search("WEBAPP", 10);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].configuration_name.as_deref(), Some("Webapp"));
    }

    #[test]
    fn filters_by_url() {
        let results = catalog().search("acme/api", 10);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].configuration_id.as_deref(), Some("cfg-api"));
    }

    #[test]
    fn respects_limit() {
        let results = catalog().search("", 2);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn derives_repo_name_from_url() {
        let results = catalog().search("webapp", 10);
        assert_eq!(results[0].repo_name, "webapp");
    }
}
