#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod git_url;
pub mod providers;
pub mod rate_limit;
pub mod resolver;
pub mod suggestions;

pub use config::{load_settings, ConfigError, ConfigurationEntry, PickerSettings};
pub use git_url::is_valid_git_url;
pub use providers::{
    search_repositories, ConfigurationCatalog, ProviderError, RecentRepositories,
    DEFAULT_SEARCH_LIMIT,
};
pub use rate_limit::{check_search_limit, ensure_search_capacity, RateLimitInfo};
pub use resolver::{ResolverError, SuggestionResolver, SuggestionSnapshot};
pub use suggestions::{
    deduplicate_and_filter, normalize_repo_url, FilterOptions, SuggestedRepository, MAX_RESULTS,
};
