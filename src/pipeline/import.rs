// src/pipeline/import.rs

//! Feed import pipeline.

use crate::error::Result;
use crate::models::RawFeed;
use crate::storage::PositionOpeningSink;

use super::extract::{Extraction, RecordExtractor};

/// Counts reported after a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Entries in the feed
    pub total: usize,
    /// Records emitted with full detail
    pub full: usize,
    /// Records emitted in minimal shape
    pub minimal: usize,
    /// Entries skipped for lack of a usable id
    pub rejected: usize,
}

impl ImportSummary {
    fn from_extraction(total: usize, extraction: &Extraction) -> Self {
        let full = extraction
            .records
            .iter()
            .filter(|record| record.is_full())
            .count();

        Self {
            total,
            full,
            minimal: extraction.records.len() - full,
            rejected: extraction.rejected.len(),
        }
    }

    /// Records handed to the sink.
    pub fn imported(&self) -> usize {
        self.full + self.minimal
    }
}

/// Extract every feed entry and hand the whole batch to `sink` in one call.
///
/// The sink is called exactly once, even for an empty feed, and sees the
/// records in feed order. A sink error is returned as is.
pub fn run_import(
    feed: &RawFeed,
    extractor: &RecordExtractor<'_>,
    sink: &mut dyn PositionOpeningSink,
) -> Result<ImportSummary> {
    log::info!("Extracting {} feed entries", feed.entries.len());

    let extraction = extractor.extract_all(feed);
    let summary = ImportSummary::from_extraction(feed.entries.len(), &extraction);

    sink.import(&extraction.records)?;

    log::info!(
        "Imported {} position openings ({} full, {} minimal, {} skipped) into {}",
        summary.imported(),
        summary.full,
        summary.minimal,
        summary.rejected,
        sink.name()
    );

    Ok(summary)
}
