//! Orchestrates suggestion resolution across the three sources.

use crate::config::{ConfigError, PickerSettings};
use crate::providers::{
    search_repositories, ConfigurationCatalog, ProviderError, RecentRepositories,
};
use crate::suggestions::{deduplicate_and_filter, FilterOptions, SuggestedRepository};
use octocrab::Octocrab;
use tracing::{debug, info_span, warn, Instrument};

/// Errors that can occur while setting up or running a resolver.
#[derive(Debug, thiserror::Error)]
pub enum ResolverError {
    /// Settings loading errors.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Suggestion source errors.
    #[error(transparent)]
    Provider(#[from] ProviderError),
    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),
}

/// Latest snapshot of the three suggestion sources.
///
/// The sources complete at different times; a snapshot simply holds whatever
/// each has produced so far, with a still-loading or failed source as an
/// empty list. [`SuggestionSnapshot::resolve`] is pure and cheap enough to
/// re-run whenever any source updates.
#[derive(Debug, Clone, Default)]
pub struct SuggestionSnapshot {
    /// Recently used repositories, most recent first.
    pub suggested: Vec<SuggestedRepository>,
    /// Tracked configurations matching the current filter.
    pub configurations: Vec<SuggestedRepository>,
    /// Free-text SCM search results.
    pub search_results: Vec<SuggestedRepository>,
}

impl SuggestionSnapshot {
    /// Merges the snapshot into a deduplicated, bounded suggestion list.
    ///
    /// Sources are concatenated in a fixed order (suggested, configurations,
    /// search results) before the engine runs, so suggested entries win ties
    /// on first-seen position.
    pub fn resolve(
        &self,
        search_string: &str,
        options: FilterOptions,
    ) -> Vec<SuggestedRepository> {
        let mut combined = Vec::with_capacity(
            self.suggested.len() + self.configurations.len() + self.search_results.len(),
        );
        combined.extend_from_slice(&self.suggested);
        combined.extend_from_slice(&self.configurations);
        combined.extend_from_slice(&self.search_results);

        deduplicate_and_filter(search_string, options, &combined)
    }
}

/// Fetches the three suggestion sources and merges them on demand.
pub struct SuggestionResolver {
    settings: PickerSettings,
    recent: RecentRepositories,
    catalog: ConfigurationCatalog,
    github: Option<Octocrab>,
}

impl SuggestionResolver {
    /// Builds a resolver from settings, a recent-repositories store, and an
    /// optional GitHub token. Without a token the SCM search source is
    /// disabled and resolution runs offline.
    ///
    /// # Errors
    ///
    /// Returns [`ResolverError`] if the GitHub client cannot be built.
    pub fn new(
        settings: PickerSettings,
        recent: RecentRepositories,
        token: Option<String>,
    ) -> Result<Self, ResolverError> {
        let github = match token {
            Some(token) => Some(Octocrab::builder().personal_token(token).build()?),
            None => None,
        };
        let catalog = ConfigurationCatalog::new(settings.configurations.clone());

        Ok(Self {
            settings,
            recent,
            catalog,
            github,
        })
    }

    /// Fetches all sources and returns the merged suggestion list.
    ///
    /// Never fails: each source degrades to an empty list on error, which is
    /// the right behavior for a picker that must keep working while parts of
    /// the backend are unavailable.
    pub async fn resolve(
        &self,
        search_string: &str,
        options: FilterOptions,
    ) -> Vec<SuggestedRepository> {
        let span = info_span!("resolve", search = %search_string);

        async {
            let snapshot = self.snapshot(search_string).await;
            let mut results = snapshot.resolve(search_string, options);
            results.truncate(self.settings.max_results);
            debug!(count = results.len(), "Resolution complete");
            results
        }
        .instrument(span)
        .await
    }

    /// Fetches the three sources concurrently into a snapshot.
    pub async fn snapshot(&self, search_string: &str) -> SuggestionSnapshot {
        let (suggested, configurations, search_results) = futures::join!(
            self.fetch_suggested(),
            self.fetch_configurations(search_string),
            self.fetch_search(search_string),
        );

        SuggestionSnapshot {
            suggested,
            configurations,
            search_results,
        }
    }

    async fn fetch_suggested(&self) -> Vec<SuggestedRepository> {
        self.recent.suggestions(self.settings.suggested_limit)
    }

    async fn fetch_configurations(&self, search_string: &str) -> Vec<SuggestedRepository> {
        self.catalog
            .search(search_string, self.settings.configuration_limit)
    }

    async fn fetch_search(&self, search_string: &str) -> Vec<SuggestedRepository> {
        let Some(client) = &self.github else {
            return Vec::new();
        };
        let query = search_string.trim();
        if query.is_empty() {
            return Vec::new();
        }

        match search_repositories(client, query, self.settings.search_limit).await {
            Ok(results) => results,
            Err(e) => {
                // The picker keeps working on the remaining sources.
                warn!(error = %e, "SCM search failed");
                Vec::new()
            }
        }
    }
}
