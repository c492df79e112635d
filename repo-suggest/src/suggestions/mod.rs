//! Merge and dedup engine for repository suggestions.
//!
//! Combines entries from multiple sources into a single deduplicated,
//! size-bounded list while preserving first-seen order. The engine is a pure
//! function: no I/O, no shared state, total on all inputs. It is safe to
//! re-run on every input change, including with partial source data.

mod entry;

pub use entry::{normalize_repo_url, SuggestedRepository};

use crate::git_url::is_valid_git_url;
use std::collections::HashSet;

/// Hard cap on the number of entries a merged result set may contain.
pub const MAX_RESULTS: usize = 200;

/// Inclusion rules for [`deduplicate_and_filter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Ignore configuration links: dedup by URL alone and keep bare entries
    /// even when a configured duplicate exists.
    pub exclude_configurations: bool,

    /// Keep only entries linked to a configuration.
    pub only_configurations: bool,
}

/// Merges suggestion entries into a deduplicated, filtered, bounded list.
///
/// A single left-to-right pass over `entries`, preserving the order of first
/// occurrence:
/// - URLs are normalized on working copies; the input is never mutated.
/// - A configuration entry supersedes bare entries for the same URL (unless
///   `exclude_configurations` is set).
/// - Entries survive only if the trimmed, lowercased `search_string` occurs
///   in `url + configuration_name`; an empty search matches everything.
/// - When nothing survives and `search_string` itself looks like a Git URL,
///   a single synthetic entry carrying just that URL is produced, so a pasted
///   clone URL can be used even without a matching suggestion.
/// - The result is capped at [`MAX_RESULTS`] entries.
///
/// The function never fails; callers may pass partially loaded source data.
pub fn deduplicate_and_filter(
    search_string: &str,
    options: FilterOptions,
    entries: &[SuggestedRepository],
) -> Vec<SuggestedRepository> {
    let needle = search_string.trim().to_lowercase();

    // Suppression needs global knowledge: a configured entry anywhere in the
    // input must shadow a bare duplicate that appears before it, so the set
    // is built from the whole list before any filtering.
    let mut configured_urls: HashSet<String> = HashSet::new();
    if !options.exclude_configurations {
        for entry in entries {
            if entry.configuration_id.is_some() {
                configured_urls.insert(normalize_repo_url(&entry.url).to_string());
            }
        }
    }

    let mut seen: HashSet<String> = HashSet::new();
    let mut results: Vec<SuggestedRepository> = Vec::new();

    for entry in entries {
        let mut entry = entry.clone();
        entry.normalize();

        if entry.configuration_id.is_none()
            && (options.only_configurations || configured_urls.contains(&entry.url))
        {
            continue;
        }

        if !needle.is_empty() {
            // Matched against the concatenation without separator, mirroring
            // the picker's observed behavior. Case folding applies to the
            // search only; dedup keys stay case-sensitive.
            let haystack = format!(
                "{}{}",
                entry.url,
                entry.configuration_name.as_deref().unwrap_or_default()
            )
            .to_lowercase();
            if !haystack.contains(&needle) {
                continue;
            }
        }

        if !seen.insert(entry.dedup_key(options.exclude_configurations)) {
            continue;
        }

        results.push(entry);
    }

    if results.is_empty() && is_valid_git_url(search_string) {
        results.push(SuggestedRepository {
            url: search_string.to_string(),
            repo_name: String::new(),
            configuration_id: None,
            configuration_name: None,
        });
    }

    results.truncate(MAX_RESULTS);
    results
}
