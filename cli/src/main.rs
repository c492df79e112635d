//! CLI for the repository suggestion resolver.
//!
//! Merges recently used repositories, tracked configurations, and (when a
//! token is available) GitHub search results into one deduplicated list.

use clap::Parser;
use repo_suggest::{
    load_settings, ConfigError, FilterOptions, PickerSettings, ProviderError,
    RecentRepositories, ResolverError, SuggestedRepository, SuggestionResolver,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Repository Suggestion Resolver - merge suggestion sources into one picker list.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Search string; free-text filter or a full clone URL.
    #[arg(default_value = "")]
    search: String,

    /// Path to the picker settings file.
    #[arg(long, default_value = "picker.toml")]
    settings: PathBuf,

    /// Path to the recently used repositories store.
    #[arg(long)]
    recent: Option<PathBuf>,

    /// GitHub token for the SCM search source; omit to run offline.
    #[arg(long, env = "GITHUB_TOKEN")]
    token: Option<String>,

    /// Only show repositories linked to a configuration.
    #[arg(long, conflicts_with = "exclude_configurations")]
    only_configurations: bool,

    /// Ignore configuration links when deduplicating.
    #[arg(long)]
    exclude_configurations: bool,

    /// Emit results as JSON.
    #[arg(long)]
    json: bool,
}

/// Errors that abort the CLI.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error(transparent)]
    Resolver(#[from] ResolverError),
    #[error("Failed to serialize results: {0}")]
    Json(#[from] serde_json::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Compact single-line output; log level controlled via `RUST_LOG`
/// (defaults to "info").
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<(), CliError> {
    // An absent settings file means "defaults, no catalog" rather than an
    // error, so the tool works out of the box.
    let settings = if args.settings.exists() {
        load_settings(&args.settings)?
    } else {
        debug!(path = %args.settings.display(), "No settings file, using defaults");
        PickerSettings::default()
    };

    let recent = match &args.recent {
        Some(path) => RecentRepositories::load(path)?,
        None => RecentRepositories::default(),
    };

    let options = FilterOptions {
        exclude_configurations: args.exclude_configurations,
        only_configurations: args.only_configurations,
    };

    let resolver = SuggestionResolver::new(settings, recent, args.token)?;
    let results = resolver.resolve(&args.search, options).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_results(&results);
    }

    Ok(())
}

/// Prints the merged suggestion list as a plain table.
fn print_results(results: &[SuggestedRepository]) {
    if results.is_empty() {
        println!("No suggestions.");
        return;
    }

    println!("Suggestions ({}):", results.len());
    for entry in results {
        match (&entry.configuration_id, &entry.configuration_name) {
            (Some(id), Some(name)) => {
                println!("  {}  [{} / {}]", entry.url, name, id);
            }
            _ if entry.repo_name.is_empty() => {
                println!("  {}  (from URL)", entry.url);
            }
            _ => {
                println!("  {}  ({})", entry.url, entry.repo_name);
            }
        }
    }
}
