//! Local filesystem sink.
//!
//! Writes each batch to a single JSON file, replacing the previous one. The
//! write goes to a temporary sibling first and is renamed into place, so a
//! reader never observes a half-written batch.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};
use crate::models::PositionOpening;
use crate::storage::PositionOpeningSink;

/// Sink writing the batch as a pretty-printed JSON array.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    /// Create a sink writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensure parent directory exists.
    fn ensure_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }

    /// Write bytes atomically (write to temp, then rename).
    fn write_bytes(&self, bytes: &[u8]) -> Result<()> {
        self.ensure_dir()?;

        let tmp = self.path.with_extension("tmp");
        let mut file = fs::File::create(&tmp)?;
        file.write_all(bytes)?;
        file.flush()?;
        drop(file);

        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl PositionOpeningSink for JsonFileSink {
    fn name(&self) -> &str {
        "json-file"
    }

    fn import(&mut self, records: &[PositionOpening]) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(records)?;
        self.write_bytes(&bytes).map_err(|e| {
            AppError::import(self.name(), format!("{}: {}", self.path.display(), e))
        })?;

        log::info!(
            "Wrote {} position openings to {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }
}
