//! Import sinks for normalized position openings.
//!
//! A run hands its whole batch to exactly one [`PositionOpeningSink::import`]
//! call. Persistence beyond that call belongs to the sink.
//!
//! - [`JsonFileSink`]: writes the batch as a JSON array on disk
//! - [`MemorySink`]: keeps batches in memory (tests, dry runs)

pub mod local;
pub mod memory;

use crate::error::Result;
use crate::models::PositionOpening;

// Re-export for convenience
pub use local::JsonFileSink;
pub use memory::MemorySink;

/// Destination for a run's records.
pub trait PositionOpeningSink {
    /// Short label used in logs and errors.
    fn name(&self) -> &str;

    /// Persist one ordered batch of records.
    fn import(&mut self, records: &[PositionOpening]) -> Result<()>;
}
