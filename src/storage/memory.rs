//! In-memory sink.

use crate::error::Result;
use crate::models::PositionOpening;
use crate::storage::PositionOpeningSink;

/// Sink that retains every batch it receives.
#[derive(Debug, Default)]
pub struct MemorySink {
    batches: Vec<Vec<PositionOpening>>,
}

impl MemorySink {
    /// Batches in the order they were imported.
    pub fn batches(&self) -> &[Vec<PositionOpening>] {
        &self.batches
    }

    /// The most recent batch, if any.
    pub fn last_batch(&self) -> Option<&[PositionOpening]> {
        self.batches.last().map(Vec::as_slice)
    }
}

impl PositionOpeningSink for MemorySink {
    fn name(&self) -> &str {
        "memory"
    }

    fn import(&mut self, records: &[PositionOpening]) -> Result<()> {
        self.batches.push(records.to_vec());
        Ok(())
    }
}
