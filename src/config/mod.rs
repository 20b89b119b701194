//! Configuration module for douban-top250
//!
//! The crawler runs without any configuration file. When one is given, it is a
//! TOML file that may override the target base URL and HTTP timeouts.
//!
//! # Example
//!
//! ```no_run
//! use douban_top250::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("top250.toml")).unwrap();
//! println!("Crawling: {}", config.target.base_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, HttpConfig, TargetConfig, DEFAULT_BASE_URL};

// Re-export parser functions
pub use parser::{load_config, load_config_or_default};
pub use validation::validate;
