//! Output module for crawled records
//!
//! This module handles:
//! - The consumer interface records are handed to
//! - Console reporting of ranked records
//! - Error reporting and exit status at the process boundary

mod console;
mod traits;

pub use console::{exit_code, write_error, ConsoleReporter};
pub use traits::{OutputError, OutputResult, RecordConsumer};
