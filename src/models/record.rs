//! Normalized records handed to the import sink.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};

use crate::normalize::states;

/// Trailing `, ST` state token of a normalized location.
static CITY_STATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?),\s*([A-Z]{2})$").expect("valid city/state pattern"));

/// A normalized position opening.
///
/// Active, fully extracted entries become [`PositionOpening::Full`]; inactive,
/// forced-inactive and degraded entries become [`PositionOpening::Minimal`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PositionOpening {
    Full(FullRecord),
    Minimal(MinimalRecord),
}

impl PositionOpening {
    /// Fields common to both shapes.
    pub fn header(&self) -> &RecordHeader {
        match self {
            PositionOpening::Full(record) => &record.header,
            PositionOpening::Minimal(record) => &record.header,
        }
    }

    pub fn external_id(&self) -> u64 {
        self.header().external_id
    }

    pub fn ttl(&self) -> Ttl {
        self.header().ttl
    }

    pub fn locations(&self) -> &[Location] {
        &self.header().locations
    }

    pub fn is_full(&self) -> bool {
        matches!(self, PositionOpening::Full(_))
    }
}

/// Keys carried by every record regardless of shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordHeader {
    #[serde(rename = "type")]
    pub record_type: String,
    pub source: String,
    pub external_id: u64,
    #[serde(rename = "_ttl")]
    pub ttl: Ttl,
    pub tags: BTreeSet<String>,
    pub locations: Vec<Location>,
}

/// Reduced shape for inactive or unusable entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MinimalRecord {
    #[serde(flatten)]
    pub header: RecordHeader,
}

/// Complete shape for active entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FullRecord {
    #[serde(flatten)]
    pub header: RecordHeader,
    pub position_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    pub end_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<serde_json::Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<serde_json::Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_interval_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_schedule_type_code: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_offering_type_code: Option<u32>,
}

/// Time-to-live instruction for the downstream store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ttl {
    /// Whole days until the posting closes; zero or negative when already past
    Days(i64),
    /// Expire right away (`"1s"`)
    Immediate,
}

impl fmt::Display for Ttl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ttl::Days(days) => write!(f, "{}d", days),
            Ttl::Immediate => f.write_str("1s"),
        }
    }
}

impl Serialize for Ttl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A `{city, state}` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub city: String,
    pub state: String,
}

impl Location {
    pub fn new(city: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            state: state.into(),
        }
    }

    /// Split a normalized `City, ST` string on its last state token.
    ///
    /// Everything before the final `, ST` is the city, so
    /// `"Pentagon, Arlington, VA"` yields city `"Pentagon, Arlington"`.
    /// The token must be a state, DC or territory code.
    pub fn parse(normalized: &str) -> Option<Self> {
        let caps = CITY_STATE.captures(normalized.trim())?;
        let city = caps[1].trim();
        let state = &caps[2];
        if city.is_empty() || !states::is_location_code(state) {
            return None;
        }
        Some(Self::new(city, state))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.city, self.state)
    }
}
