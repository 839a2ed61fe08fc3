// src/models/mod.rs

//! Domain models for the importer.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod feed;
mod record;

// Re-export all public types
pub use config::{Config, ImporterConfig, LoggingConfig};
pub use feed::{FeedEntry, PositionLocations, RawFeed, SalaryRange, field, parse_feed_date};
pub use record::{FullRecord, Location, MinimalRecord, PositionOpening, RecordHeader, Ttl};
