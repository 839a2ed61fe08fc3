//! Pipeline entry points for importer operations.
//!
//! - `RecordExtractor`: Classify feed entries and extract normalized records
//! - `run_import`: Extract a whole feed and hand it to an import sink

pub mod extract;
pub mod import;

pub use extract::{EntryRejection, Extraction, RecordExtractor, RejectedEntry};
pub use import::{ImportSummary, run_import};
