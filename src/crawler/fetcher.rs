//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building the HTTP client from the optional timeouts
//! - Attaching the browser User-Agent to every request
//! - Separating transport failures, bad statuses, and undecodable bodies

use crate::config::HttpConfig;
use crate::document::{Document, DocumentProvider};
use crate::{Result, Top250Error};
use reqwest::{header, Client, Method};
use std::time::Duration;
use tracing::debug;

/// Desktop browser identification sent with every request
///
/// The listing refuses requests that do not look like they come from a browser.
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/96.0.4664.55 Safari/537.36";

/// Builds an HTTP client with the configured timeouts
///
/// No timeout is applied unless one is configured.
///
/// # Arguments
///
/// * `config` - The HTTP configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &HttpConfig) -> std::result::Result<Client, reqwest::Error> {
    let mut builder = Client::builder().gzip(true).brotli(true);

    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    if let Some(secs) = config.connect_timeout_secs {
        builder = builder.connect_timeout(Duration::from_secs(secs));
    }

    builder.build()
}

/// [`DocumentProvider`] backed by a reqwest client
#[derive(Debug, Clone)]
pub struct HttpDocumentProvider {
    client: Client,
}

impl HttpDocumentProvider {
    /// Creates a provider with a freshly built client
    pub fn new(config: &HttpConfig) -> Result<Self> {
        Ok(Self {
            client: build_http_client(config)?,
        })
    }

    /// Creates a provider around an existing client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait(?Send)]
impl DocumentProvider for HttpDocumentProvider {
    async fn fetch(&self, method: Method, url: &str, body: Option<String>) -> Result<Document> {
        debug!("{} {}", method, url);

        let mut request = self
            .client
            .request(method, url)
            .header(header::USER_AGENT, USER_AGENT);
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await.map_err(|source| Top250Error::Http {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Top250Error::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(|source| Top250Error::Http {
            url: url.to_string(),
            source,
        })?;

        Document::from_bytes(url, &bytes)
    }
}
