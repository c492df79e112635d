//! GitHub search rate limit handling.
//!
//! The SCM search source rides on GitHub's search API, which has a much
//! tighter quota than the core API. Before each query we check the remaining
//! search budget and sleep until the reset when it runs low.

use octocrab::Octocrab;
use std::time::Duration;
use tracing::{info, warn};

/// Longest we are willing to sleep waiting for a quota reset.
const MAX_WAIT_SECS: u64 = 300;

/// Remaining requests below which we proactively wait.
const LOW_WATER_MARK: u32 = 3;

/// Search rate limit snapshot.
#[derive(Debug, Clone)]
pub struct RateLimitInfo {
    /// Requests remaining in the current window.
    pub remaining: u32,
    /// Unix timestamp when the window resets.
    pub reset: u64,
    /// Total requests allowed per window.
    pub limit: u32,
}

/// Ensures there is search quota left before issuing a query.
///
/// Checks the search resource and, when the remaining budget is below the
/// low-water mark, sleeps until the reported reset (capped).
///
/// # Errors
///
/// Returns an error if the rate limit API call itself fails.
pub async fn ensure_search_capacity(octocrab: &Octocrab) -> Result<(), octocrab::Error> {
    let info = check_search_limit(octocrab).await?;
    wait_if_low(&info).await;
    Ok(())
}

/// Fetches the current search rate limit status.
///
/// # Errors
///
/// Returns an error if the rate limit API call fails.
pub async fn check_search_limit(octocrab: &Octocrab) -> Result<RateLimitInfo, octocrab::Error> {
    let rate_limit = octocrab.ratelimit().get().await?;
    let search = &rate_limit.resources.search;

    Ok(RateLimitInfo {
        remaining: search.remaining as u32,
        reset: search.reset,
        limit: search.limit as u32,
    })
}

/// Sleeps until the window resets when the budget is low.
///
/// Returns `true` if a wait happened.
pub(crate) async fn wait_if_low(info: &RateLimitInfo) -> bool {
    if info.remaining >= LOW_WATER_MARK {
        return false;
    }

    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    if info.reset <= now {
        return false;
    }

    let wait_secs = info.reset - now;
    if wait_secs > MAX_WAIT_SECS {
        warn!(
            wait_secs,
            max_wait = MAX_WAIT_SECS,
            "Search quota reset too far away, capping wait"
        );
    }

    let actual_wait = wait_secs.min(MAX_WAIT_SECS);
    info!(
        remaining = info.remaining,
        wait_secs = actual_wait,
        "Search quota low, waiting for reset"
    );

    tokio::time::sleep(Duration::from_secs(actual_wait)).await;
    true
}
