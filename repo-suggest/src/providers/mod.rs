//! Suggestion sources feeding the merge engine.
//!
//! Three sources mirror the picker's upstream providers: recently used
//! repositories, the tracked configuration catalog, and SCM repository
//! search. Each source fails independently; the resolver degrades a failed
//! source to an empty list.

mod catalog;
mod github;
mod recent;

pub use catalog::ConfigurationCatalog;
pub use github::{search_repositories, DEFAULT_SEARCH_LIMIT};
pub use recent::RecentRepositories;

use thiserror::Error;

/// Errors that can occur while fetching from a suggestion source.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHub(#[from] octocrab::Error),

    /// Failed to read or write a local store.
    #[error("Failed to access '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a local store.
    #[error("Failed to parse '{path}': {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
