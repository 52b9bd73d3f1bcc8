//! searchbox CLI — run one search through the controller from the terminal.
//!
//! Uses the same `SearchController` as the page, with an in-memory view in
//! place of the DOM and the reqwest transport.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

use searchbox_core::query::{normalize, search_path};
use searchbox_core::{
    load_search_config, ConfigError, MemoryView, SearchConfig, SearchController, SearchOutcome,
};
use searchbox_http::HttpTransport;

/// searchbox CLI — query a search service the way the page does.
#[derive(Parser)]
#[command(name = "sb", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (default: ./searchbox.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a search and print the returned markup
    Search {
        /// Search query
        query: String,

        /// Server origin, e.g. http://localhost:8080 (overrides config)
        #[arg(long)]
        server: Option<String>,

        /// Output as JSON instead of raw markup
        #[arg(long)]
        json: bool,
    },
    /// Print the outbound request path for a query
    Url {
        /// Search query
        query: String,
    },
}

/// Exit status for every failure: bad config, failed or empty search.
const EXIT_FAILURE: i32 = 1;

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("{message}");
    std::process::exit(EXIT_FAILURE);
}

fn resolve_config(path: Option<PathBuf>) -> Result<SearchConfig, ConfigError> {
    match path {
        Some(path) => SearchConfig::from_path(&path),
        None => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            Ok(load_search_config(&cwd))
        }
    }
}

/// Path that was (or would have been) requested; `None` when nothing is sent.
fn outbound_path(config: &SearchConfig, query: &str) -> Option<String> {
    normalize(query).map(|q| search_path(&config.endpoint, &config.param, q))
}

fn json_report(
    config: &SearchConfig,
    query: &str,
    outcome: &SearchOutcome,
    elapsed_ms: f64,
    markup: String,
) -> serde_json::Value {
    let (status, error) = match outcome {
        SearchOutcome::Rendered { .. } => ("rendered", None),
        SearchOutcome::EmptyQuery => ("empty_query", None),
        SearchOutcome::InFlight => ("in_flight", None),
        SearchOutcome::Failed(e) => ("failed", Some(e.to_string())),
    };
    serde_json::json!({
        "query": query.trim(),
        "path": outbound_path(config, query),
        "status": status,
        "error": error,
        "elapsed_ms": elapsed_ms,
        "markup": markup,
    })
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("searchbox=warn".parse().expect("static directive")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config =
        resolve_config(cli.config).unwrap_or_else(|e| fail(format!("Could not load config: {e}")));

    match cli.command {
        Commands::Search { query, server, json } => {
            if let Some(server) = server {
                config.base_url = server;
            }
            let transport = HttpTransport::from_config(&config).unwrap_or_else(|e| fail(e));
            let ctrl =
                SearchController::with_settings(MemoryView::with_query(&query), transport, &config);

            let start = Instant::now();
            let outcome = ctrl.on_trigger().await;
            let elapsed = start.elapsed().as_secs_f64() * 1000.0;

            if json {
                let output =
                    json_report(&config, &query, &outcome, elapsed, ctrl.view().results());
                println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
                if !outcome.is_rendered() {
                    std::process::exit(EXIT_FAILURE);
                }
                return;
            }

            match outcome {
                SearchOutcome::Rendered { bytes } => {
                    println!("{}", ctrl.view().results());
                    eprintln!("\n{bytes} bytes in {elapsed:.1}ms");
                }
                SearchOutcome::EmptyQuery => fail("Empty query, nothing sent"),
                SearchOutcome::InFlight => fail("Search already in flight"),
                SearchOutcome::Failed(e) => fail(format!("Search failed: {e}")),
            }
        }
        Commands::Url { query } => match outbound_path(&config, &query) {
            Some(path) => println!("{path}"),
            None => fail("Empty query"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use searchbox_core::SearchError;

    #[test]
    fn json_report_for_blank_query_has_no_path() {
        let report =
            json_report(&SearchConfig::default(), "   ", &SearchOutcome::EmptyQuery, 0.0, String::new());
        assert!(report["path"].is_null(), "{report}");
        assert_eq!(report["status"], "empty_query");
        assert_eq!(report["query"], "");
    }

    #[test]
    fn json_report_for_failure_carries_path_and_error() {
        let outcome = SearchOutcome::Failed(SearchError::Status { status: 500 });
        let report = json_report(&SearchConfig::default(), " a&b c ", &outcome, 1.5, String::new());
        assert_eq!(report["path"], "/search?q=a%26b%20c");
        assert_eq!(report["status"], "failed");
        assert_eq!(report["error"], "HTTP error, status 500");
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let err = resolve_config(Some(PathBuf::from("/nonexistent/searchbox.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert_eq!(EXIT_FAILURE, 1);
    }
}
