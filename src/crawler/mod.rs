//! Crawler module for the ranked listing
//!
//! This module contains the crawling pipeline:
//! - HTTP fetching with a fixed browser User-Agent
//! - Pagination discovery from the first listing page
//! - Per-entry field extraction
//! - Sequential orchestration of the whole run

mod coordinator;
mod fetcher;
mod pages;
mod parser;

pub use coordinator::Crawler;
pub use fetcher::{build_http_client, HttpDocumentProvider, USER_AGENT};
pub use pages::discover_pages;
pub use parser::{extract_item, extract_items};

use crate::config::Config;
use crate::model::ItemRecord;
use crate::Result;

/// Runs a complete crawl against the configured listing over HTTP
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(Vec<ItemRecord>)` - Every record, in ranking order
/// * `Err(Top250Error)` - Any fetch or parse failure
pub async fn crawl(config: &Config) -> Result<Vec<ItemRecord>> {
    let provider = HttpDocumentProvider::new(&config.http)?;
    let mut crawler = Crawler::new(config.target.base_url.clone(), provider);
    Ok(crawler.run().await?.to_vec())
}
