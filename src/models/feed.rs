//! Parsed USAJobs feed tree.
//!
//! Every leaf is kept as an optional string so that a defect in one entry
//! (a non-numeric id, a garbled date) stays local to that entry instead of
//! failing the whole document.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::Result;

/// Date layouts seen in the feed, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d %b %Y", "%m/%d/%Y"];

/// The whole `<PositionOpenings>` document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFeed {
    #[serde(rename = "PositionOpening", default)]
    pub entries: Vec<FeedEntry>,
}

impl RawFeed {
    /// Decode a feed document. Malformed XML fails the whole document.
    pub fn from_xml(xml: &str) -> Result<Self> {
        Ok(quick_xml::de::from_str(xml)?)
    }

    /// Read and decode a feed file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_xml(&content)
    }
}

/// One `<PositionOpening>` element.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeedEntry {
    #[serde(rename = "PositionOpeningID")]
    pub position_opening_id: Option<String>,

    /// "Active" while the posting accepts applications
    pub opening_status: Option<String>,

    pub position_title: Option<String>,

    pub organization_code: Option<String>,

    pub organization_name: Option<String>,

    pub open_date: Option<String>,

    /// Nominal expiration date of the posting
    pub close_date: Option<String>,

    pub salary_range: Option<SalaryRange>,

    pub position_schedule_type_code: Option<String>,

    pub position_offering_type_code: Option<String>,

    pub position_locations: Option<PositionLocations>,
}

impl FeedEntry {
    /// Raw location strings in feed order, blanks removed.
    pub fn raw_locations(&self) -> Vec<&str> {
        self.position_locations
            .as_ref()
            .map(|locations| {
                locations
                    .locations
                    .iter()
                    .map(|s| s.trim())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// `<SalaryRange>` block.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SalaryRange {
    pub minimum_range: Option<String>,
    pub maximum_range: Option<String>,
    pub rate_interval_code: Option<String>,
}

/// `<PositionLocations>` block holding zero or more free-text locations.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PositionLocations {
    #[serde(rename = "PositionLocation", default)]
    pub locations: Vec<String>,
}

/// Trimmed, non-empty view of an optional feed field.
pub fn field(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Parse a feed date in any of the known layouts.
pub fn parse_feed_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}
