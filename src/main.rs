//! douban-top250 main entry point
//!
//! This is the command-line interface for the Top 250 crawler.

use anyhow::Context;
use clap::Parser;
use douban_top250::config::load_config_or_default;
use douban_top250::crawler::{Crawler, HttpDocumentProvider};
use douban_top250::output::{exit_code, write_error, ConsoleReporter};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// douban-top250: crawl the Douban movie Top 250
///
/// Discovers every page of the ranked listing, extracts one record per movie
/// and prints them in rank order.
#[derive(Parser, Debug)]
#[command(name = "douban-top250")]
#[command(version = "1.0.0")]
#[command(about = "Crawl the Douban movie Top 250", long_about = None)]
struct Cli {
    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error logging
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Print the discovered listing pages and exit without fetching them
    #[arg(long)]
    pages_only: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let result = run(cli).await;
    exit_with_error(result.err().as_ref());
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr; stdout carries only records.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("douban_top250=info,warn"),
            1 => EnvFilter::new("douban_top250=debug,info"),
            2 => EnvFilter::new("douban_top250=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config =
        load_config_or_default(cli.config.as_deref()).context("Failed to load configuration")?;
    tracing::debug!("Target listing: {}", config.target.base_url);

    let provider =
        HttpDocumentProvider::new(&config.http).context("Failed to build HTTP client")?;
    let mut crawler = Crawler::new(config.target.base_url, provider);

    if cli.pages_only {
        let pages = crawler
            .discover()
            .await
            .context("Page discovery failed")?
            .to_vec();
        for page in pages {
            println!("{}\t{}", page.number, page.url(crawler.base_url()));
        }
        return Ok(());
    }

    let mut reporter = ConsoleReporter::stdout();
    let count = crawler
        .report(&mut reporter)
        .await
        .context("Crawl failed")?;

    tracing::info!("Reported {} records", count);
    Ok(())
}

/// Terminates the process: status 0 when there is no error, otherwise the
/// error chain goes to stderr and the status is non-zero
fn exit_with_error(error: Option<&anyhow::Error>) -> ! {
    if let Some(error) = error {
        let mut stderr = io::stderr();
        let color = stderr.is_terminal();
        let _ = write_error(&mut stderr, &format!("{:#}", error), color);
    }
    std::process::exit(exit_code(error))
}
