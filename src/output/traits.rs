//! Record consumer trait and errors
//!
//! A consumer receives the finished records, one call per record in ranking
//! order.

use crate::model::ItemRecord;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Receives crawled records
pub trait RecordConsumer {
    /// Handles one record
    ///
    /// # Arguments
    ///
    /// * `rank` - 1-based position of the record in the listing
    /// * `record` - The extracted record
    fn consume(&mut self, rank: usize, record: &ItemRecord) -> OutputResult<()>;

    /// Called once after the last record
    fn finish(&mut self) -> OutputResult<()> {
        Ok(())
    }
}

/// Collects ranked copies of every record
impl RecordConsumer for Vec<(usize, ItemRecord)> {
    fn consume(&mut self, rank: usize, record: &ItemRecord) -> OutputResult<()> {
        self.push((rank, record.clone()));
        Ok(())
    }
}
