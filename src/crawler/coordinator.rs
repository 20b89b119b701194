//! Crawl coordinator - drives discovery then extraction
//!
//! The whole run is sequential: the first page is fetched for its paginator,
//! then every discovered page is fetched and parsed in order before the next
//! one is requested. Any failure ends the run with no records kept.

use crate::crawler::{discover_pages, extract_items};
use crate::document::DocumentProvider;
use crate::model::{ItemRecord, PageDescriptor};
use crate::output::RecordConsumer;
use crate::Result;
use tracing::{debug, info};

/// Progress of a crawler instance
#[derive(Debug)]
enum CrawlState {
    /// No successful run yet
    NotStarted,

    /// A run completed; holds every record in ranking order
    Populated(Vec<ItemRecord>),
}

/// Sequential crawler over a paginated listing
///
/// # Example
///
/// ```no_run
/// use douban_top250::config::HttpConfig;
/// use douban_top250::crawler::{Crawler, HttpDocumentProvider};
///
/// # async fn example() -> douban_top250::Result<()> {
/// let provider = HttpDocumentProvider::new(&HttpConfig::default())?;
/// let mut crawler = Crawler::new("https://movie.douban.com/top250", provider);
/// let records = crawler.run().await?;
/// println!("{} records", records.len());
/// # Ok(())
/// # }
/// ```
pub struct Crawler<P> {
    base_url: String,
    provider: P,
    pages: Vec<PageDescriptor>,
    state: CrawlState,
}

impl<P: DocumentProvider> Crawler<P> {
    /// Creates a crawler for the listing whose first page is `base_url`
    pub fn new(base_url: impl Into<String>, provider: P) -> Self {
        Self {
            base_url: base_url.into(),
            provider,
            pages: Vec::new(),
            state: CrawlState::NotStarted,
        }
    }

    /// Returns the base URL page paths are appended to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the pages found by the last successful discovery
    pub fn pages(&self) -> &[PageDescriptor] {
        &self.pages
    }

    /// Returns true once a run has completed
    pub fn is_populated(&self) -> bool {
        matches!(self.state, CrawlState::Populated(_))
    }

    /// Returns the collected records, if a run has completed
    pub fn records(&self) -> Option<&[ItemRecord]> {
        match &self.state {
            CrawlState::NotStarted => None,
            CrawlState::Populated(records) => Some(records),
        }
    }

    /// Fetches the first page and discovers every listing page from it
    pub async fn discover(&mut self) -> Result<&[PageDescriptor]> {
        info!("Discovering listing pages from {}", self.base_url);

        let doc = self.provider.get(&self.base_url).await?;
        self.pages = discover_pages(&doc)?;

        info!("Discovered {} listing pages", self.pages.len());
        Ok(&self.pages)
    }

    /// Collects every record, fetching only on the first successful call
    ///
    /// Later calls return the records already collected without fetching
    /// anything. A failed run leaves the crawler not started.
    pub async fn run(&mut self) -> Result<&[ItemRecord]> {
        if self.is_populated() {
            debug!("Records already collected, skipping fetch");
        } else {
            let records = self.collect().await?;
            self.state = CrawlState::Populated(records);
        }

        Ok(self.records().unwrap_or_default())
    }

    /// Runs the crawl and hands each record to `consumer` with its 1-based rank
    ///
    /// Nothing reaches the consumer unless the whole crawl succeeded.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Number of records reported
    /// * `Err(Top250Error)` - The crawl or the consumer failed
    pub async fn report<C>(&mut self, consumer: &mut C) -> Result<usize>
    where
        C: RecordConsumer + ?Sized,
    {
        let records = self.run().await?;

        for (index, record) in records.iter().enumerate() {
            consumer.consume(index + 1, record)?;
        }
        consumer.finish()?;

        Ok(records.len())
    }

    async fn collect(&mut self) -> Result<Vec<ItemRecord>> {
        self.discover().await?;

        let mut records = Vec::new();
        for page in &self.pages {
            let url = page.url(&self.base_url);
            debug!("Fetching page {} from {}", page.number, url);

            let doc = self.provider.get(&url).await?;
            let items = extract_items(&doc)?;

            debug!("Page {} has {} entries", page.number, items.len());
            records.extend(items);
        }

        info!(
            "Collected {} records from {} pages",
            records.len(),
            self.pages.len()
        );
        Ok(records)
    }
}
