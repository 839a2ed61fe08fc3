// src/error.rs

//! Unified error handling for the importer.

use std::fmt;

use thiserror::Error;

/// Result type alias for importer operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
///
/// Only failures that abort a whole run live here. Problems confined to a
/// single feed entry are reported as [`crate::pipeline::EntryRejection`].
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Feed document could not be decoded
    #[error("XML feed error: {0}")]
    Xml(#[from] quick_xml::DeError),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// The import sink refused the batch
    #[error("Import error in {sink}: {message}")]
    Import { sink: String, message: String },
}

impl AppError {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create an import error attributed to a sink.
    pub fn import(sink: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Import {
            sink: sink.into(),
            message: message.to_string(),
        }
    }
}
