//! Data model for the ranked listing
//!
//! # Components
//!
//! - `PageDescriptor`: one listing page (page number + path relative to the base URL)
//! - `ItemRecord`: the fields extracted from one ranked entry

mod item;
mod page;

// Re-export main types
pub use item::ItemRecord;
pub use page::PageDescriptor;
