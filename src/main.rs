//! Quotecrawl main entry point
//!
//! This is the command-line interface for the quotecrawl scraper.

use clap::Parser;
use quotecrawl::config::Config;
use quotecrawl::crawler::scrape;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Quotecrawl: scrape a paginated quote site into CSV tables
///
/// Crawls the listing pages in order until the terminal page, resolves every
/// author referenced by a quote, and writes two CSV files: one for quotes,
/// one for author profiles.
#[derive(Parser, Debug)]
#[command(name = "quotecrawl")]
#[command(version = "1.0.0")]
#[command(about = "Scrape quotes and author profiles into CSV tables", long_about = None)]
struct Cli {
    /// Output path for the quotes table
    #[arg(long, value_name = "PATH")]
    quotes: Option<PathBuf>,

    /// Output path for the authors table
    #[arg(long, value_name = "PATH")]
    authors: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging();

    let config = Config::new(cli.quotes, cli.authors)?;
    tracing::info!("Scraping {}", config.base_url);

    match scrape(&config).await {
        Ok(report) => {
            tracing::info!("Visited {} listing pages", report.pages_visited);
            tracing::info!(
                "Wrote {} quotes to {}",
                report.quotes_written,
                config.quotes_path.display()
            );
            tracing::info!(
                "Wrote {} authors to {} ({} skipped)",
                report.authors_written,
                config.authors_path.display(),
                report.authors_skipped
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("Scrape failed: {}", e);
            Err(e.into())
        }
    }
}

/// Sets up the logging/tracing subscriber
///
/// Verbosity comes from RUST_LOG; without it, the crate logs at info level.
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("quotecrawl=info,warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
