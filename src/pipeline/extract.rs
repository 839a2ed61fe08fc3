// src/pipeline/extract.rs

//! Classification and field extraction for feed entries.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;

use crate::models::{
    FeedEntry, FullRecord, ImporterConfig, Location, MinimalRecord, PositionOpening, RawFeed,
    RecordHeader, Ttl, field, parse_feed_date,
};
use crate::normalize::normalize_location;

/// Why a feed entry produced no record at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryRejection {
    /// The entry carries no `PositionOpeningID`
    MissingId,
    /// The `PositionOpeningID` is not a non-negative integer
    InvalidId(String),
}

impl fmt::Display for EntryRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryRejection::MissingId => f.write_str("missing PositionOpeningID"),
            EntryRejection::InvalidId(raw) => write!(f, "unparseable PositionOpeningID '{}'", raw),
        }
    }
}

/// A skipped entry with its position in the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedEntry {
    pub index: usize,
    pub reason: EntryRejection,
}

/// Records extracted from one feed, in feed order.
#[derive(Debug, Default)]
pub struct Extraction {
    pub records: Vec<PositionOpening>,
    pub rejected: Vec<RejectedEntry>,
}

/// Outcome of location extraction for a single entry.
struct ExtractedLocations {
    locations: Vec<Location>,
    /// Too many raw locations: a recruiting announcement, not a posting
    forced_inactive: bool,
}

/// Turns feed entries into [`PositionOpening`]s.
///
/// `today` anchors TTL computation so a run is reproducible.
pub struct RecordExtractor<'a> {
    config: &'a ImporterConfig,
    today: NaiveDate,
    tags: BTreeSet<String>,
}

impl<'a> RecordExtractor<'a> {
    pub fn new(config: &'a ImporterConfig, today: NaiveDate) -> Self {
        let tags = config
            .tags
            .iter()
            .map(|tag| tag.trim())
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            config,
            today,
            tags,
        }
    }

    /// Extract every entry of the feed, skipping entries without a usable id.
    pub fn extract_all(&self, feed: &RawFeed) -> Extraction {
        let mut extraction = Extraction::default();

        for (index, entry) in feed.entries.iter().enumerate() {
            match self.extract(entry) {
                Ok(record) => extraction.records.push(record),
                Err(reason) => {
                    log::warn!("Skipping feed entry #{}: {}", index, reason);
                    extraction.rejected.push(RejectedEntry { index, reason });
                }
            }
        }

        extraction
    }

    /// Extract a single entry.
    pub fn extract(&self, entry: &FeedEntry) -> Result<PositionOpening, EntryRejection> {
        let external_id = parse_external_id(entry)?;
        let extracted = self.extract_locations(external_id, entry);

        let active = !extracted.forced_inactive
            && field(&entry.opening_status).is_some_and(|s| self.config.is_open_status(s));

        let header = RecordHeader {
            record_type: self.config.record_type.clone(),
            source: self.config.source.clone(),
            external_id,
            ttl: Ttl::Immediate,
            tags: self.tags.clone(),
            locations: extracted.locations,
        };

        if !active {
            return Ok(PositionOpening::Minimal(MinimalRecord { header }));
        }

        match self.full_record(header, entry) {
            Ok(record) => Ok(PositionOpening::Full(record)),
            Err(header) => {
                log::debug!(
                    "Position opening {} lacks title, organization or close date; emitting minimal record",
                    external_id
                );
                Ok(PositionOpening::Minimal(MinimalRecord { header }))
            }
        }
    }

    /// Normalize and parse each raw location, dropping the unparseable ones.
    fn extract_locations(&self, external_id: u64, entry: &FeedEntry) -> ExtractedLocations {
        let raw = entry.raw_locations();

        if raw.len() > self.config.max_locations {
            log::debug!(
                "Position opening {} lists {} locations (max {}); treating as recruiting announcement",
                external_id,
                raw.len(),
                self.config.max_locations
            );
            return ExtractedLocations {
                locations: Vec::new(),
                forced_inactive: true,
            };
        }

        let locations = raw
            .into_iter()
            .filter_map(|raw_location| {
                let normalized = normalize_location(raw_location);
                let location = Location::parse(&normalized);
                if location.is_none() {
                    log::debug!(
                        "Dropping unparseable location '{}' of position opening {}",
                        raw_location,
                        external_id
                    );
                }
                location
            })
            .collect();

        ExtractedLocations {
            locations,
            forced_inactive: false,
        }
    }

    /// Build the full shape, or hand the header back when the entry is too
    /// degraded to carry one.
    fn full_record(
        &self,
        mut header: RecordHeader,
        entry: &FeedEntry,
    ) -> Result<FullRecord, RecordHeader> {
        let organization_id = field(&entry.organization_code).map(str::to_string);
        let organization_name = field(&entry.organization_name).map(str::to_string);
        if organization_id.is_none() && organization_name.is_none() {
            return Err(header);
        }

        let Some(position_title) = field(&entry.position_title) else {
            return Err(header);
        };
        let Some(end_date) = field(&entry.close_date).and_then(parse_feed_date) else {
            return Err(header);
        };

        header.ttl = Ttl::Days((end_date - self.today).num_days());

        let salary = entry.salary_range.as_ref();

        Ok(FullRecord {
            header,
            position_title: position_title.to_string(),
            organization_id,
            organization_name,
            start_date: field(&entry.open_date).and_then(parse_feed_date),
            end_date,
            minimum: salary
                .and_then(|range| field(&range.minimum_range))
                .and_then(|s| s.parse().ok()),
            maximum: salary
                .and_then(|range| field(&range.maximum_range))
                .and_then(|s| s.parse().ok()),
            rate_interval_code: salary
                .and_then(|range| field(&range.rate_interval_code))
                .map(str::to_string),
            position_schedule_type_code: field(&entry.position_schedule_type_code)
                .and_then(|s| s.parse().ok()),
            position_offering_type_code: field(&entry.position_offering_type_code)
                .and_then(|s| s.parse().ok()),
        })
    }
}

fn parse_external_id(entry: &FeedEntry) -> Result<u64, EntryRejection> {
    let raw = field(&entry.position_opening_id).ok_or(EntryRejection::MissingId)?;
    raw.parse()
        .map_err(|_| EntryRejection::InvalidId(raw.to_string()))
}
