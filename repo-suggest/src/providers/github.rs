//! SCM repository search backed by the GitHub API.

use crate::providers::ProviderError;
use crate::rate_limit::ensure_search_capacity;
use crate::suggestions::SuggestedRepository;
use octocrab::Octocrab;
use tracing::{debug, info_span, Instrument};

/// Results requested from the SCM search provider when unconfigured.
pub const DEFAULT_SEARCH_LIMIT: u8 = 30;

/// Searches GitHub repositories matching a free-text query.
///
/// Results are mapped into bare [`SuggestedRepository`] entries (no
/// configuration link); the merge engine decides how they combine with the
/// other sources.
///
/// # Errors
///
/// Returns [`ProviderError`] if the rate limit check or the search fails.
pub async fn search_repositories(
    octocrab: &Octocrab,
    query: &str,
    limit: u8,
) -> Result<Vec<SuggestedRepository>, ProviderError> {
    let span = info_span!("scm_search", query = %query, limit);

    async {
        ensure_search_capacity(octocrab).await?;

        let page = octocrab
            .search()
            .repositories(query)
            .per_page(limit)
            .send()
            .await?;

        let results: Vec<SuggestedRepository> = page
            .items
            .into_iter()
            .filter_map(|repo| {
                let url = repo
                    .clone_url
                    .or(repo.html_url)
                    .map(|url| url.to_string())?;
                Some(SuggestedRepository::new(url, repo.name))
            })
            .collect();

        debug!(count = results.len(), "SCM search complete");
        Ok(results)
    }
    .instrument(span)
    .await
}
