use crate::document::Document;
use crate::Result;
use reqwest::Method;

/// Source of parsed pages
///
/// Implementations fetch the markup behind a URL and hand it back as a
/// [`Document`]. Transport failures and undecodable bodies are both returned
/// as errors; callers treat either as fatal.
#[async_trait::async_trait(?Send)]
pub trait DocumentProvider {
    /// Fetches `url` with the given method and optional request body
    async fn fetch(&self, method: Method, url: &str, body: Option<String>) -> Result<Document>;

    /// Convenience wrapper for a body-less GET
    async fn get(&self, url: &str) -> Result<Document> {
        self.fetch(Method::GET, url, None).await
    }
}
