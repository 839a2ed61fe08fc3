//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Record shape and classification rules
    #[serde(default)]
    pub importer: ImporterConfig,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        let importer = &self.importer;
        if importer.record_type.trim().is_empty() {
            return Err(AppError::validation("importer.record_type is empty"));
        }
        if importer.source.trim().is_empty() {
            return Err(AppError::validation("importer.source is empty"));
        }
        if importer.tags.iter().all(|tag| tag.trim().is_empty()) {
            return Err(AppError::validation("importer.tags has no usable tag"));
        }
        if importer.max_locations == 0 {
            return Err(AppError::validation("importer.max_locations must be > 0"));
        }
        if importer.open_statuses.is_empty() {
            return Err(AppError::validation("No open statuses defined"));
        }
        Ok(())
    }
}

/// Constants stamped on every record and the business rules used to classify
/// feed entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImporterConfig {
    /// Fixed `type` tag of every emitted record
    #[serde(default = "defaults::record_type")]
    pub record_type: String,

    /// Fixed `source` tag naming the feed origin
    #[serde(default = "defaults::source")]
    pub source: String,

    /// Category tags attached to every record
    #[serde(default = "defaults::tags")]
    pub tags: Vec<String>,

    /// Entries listing more locations than this are recruiting announcements
    #[serde(default = "defaults::max_locations")]
    pub max_locations: usize,

    /// Status markers meaning the posting is still open (case-insensitive)
    #[serde(default = "defaults::open_statuses")]
    pub open_statuses: Vec<String>,
}

impl ImporterConfig {
    /// Whether a feed status marker denotes an open posting.
    pub fn is_open_status(&self, status: &str) -> bool {
        let status = status.trim();
        self.open_statuses
            .iter()
            .any(|open| open.eq_ignore_ascii_case(status))
    }
}

impl Default for ImporterConfig {
    fn default() -> Self {
        Self {
            record_type: defaults::record_type(),
            source: defaults::source(),
            tags: defaults::tags(),
            max_locations: defaults::max_locations(),
            open_statuses: defaults::open_statuses(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log filter when `RUST_LOG` is unset
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

mod defaults {
    // Importer defaults
    pub fn record_type() -> String {
        "position_opening".into()
    }
    pub fn source() -> String {
        "usajobs".into()
    }
    pub fn tags() -> Vec<String> {
        vec!["federal".into()]
    }
    pub fn max_locations() -> usize {
        4
    }
    pub fn open_statuses() -> Vec<String> {
        vec!["Active".into(), "Open".into()]
    }

    // Logging defaults
    pub fn log_level() -> String {
        "info".into()
    }
}
