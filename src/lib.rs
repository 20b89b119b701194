//! douban-top250: a crawler for the Douban movie Top 250 listing
//!
//! This crate discovers every page of the ranked listing from the first page's
//! paginator, then extracts one structured record per ranked entry.

pub mod config;
pub mod crawler;
pub mod document;
pub mod model;
pub mod output;

use thiserror::Error;

/// Main error type for crawl operations
#[derive(Debug, Error)]
pub enum Top250Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("HTTP status {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("HTML parse error for {url}: {message}")]
    Markup { url: String, message: String },

    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    #[error("Invalid page number '{text}': {source}")]
    InvalidPageNumber {
        text: String,
        source: std::num::ParseIntError,
    },

    #[error("Page number must be positive, got '{text}'")]
    ZeroPageNumber { text: String },

    #[error("Missing attribute '{attribute}' on <{element}>")]
    MissingAttribute { element: String, attribute: String },

    #[error("Unexpected format for {field}: {text:?}")]
    UnexpectedFormat { field: &'static str, text: String },

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for crawl operations
pub type Result<T> = std::result::Result<T, Top250Error>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{Crawler, HttpDocumentProvider};
pub use document::{Document, DocumentProvider};
pub use model::{ItemRecord, PageDescriptor};
