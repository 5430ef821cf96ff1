//! Per-row failure ledger.
//!
//! Failures are recorded, never raised: a row that fails is skipped and the
//! batch carries on.

use std::{fmt, path::Path};

use anyhow::Result;
use serde::Serialize;

use crate::utils::write_csv;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorReason {
    /// Archive listed in the report is not on disk.
    MissingArchive,
    /// Archive exists but cannot be read as a container.
    BadArchive,
    /// Expected language resource is absent from the archive.
    MissingEntry,
    /// Language resource is present but not a JSON object.
    BadJson,
    /// Derived output could not be written.
    WriteFailed,
}

impl ErrorReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorReason::MissingArchive => "missing_archive",
            ErrorReason::BadArchive => "bad_archive",
            ErrorReason::MissingEntry => "missing_entry",
            ErrorReason::BadJson => "bad_json",
            ErrorReason::WriteFailed => "write_failed",
        }
    }
}

impl fmt::Display for ErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorRecord {
    pub jar: String,
    pub modid: String,
    pub reason: ErrorReason,
    pub detail: String,
}

impl ErrorRecord {
    pub fn new(jar: &str, modid: &str, reason: ErrorReason, detail: impl Into<String>) -> Self {
        Self {
            jar: jar.to_string(),
            modid: modid.to_string(),
            reason,
            detail: detail.into(),
        }
    }
}

pub fn write_error_ledger(path: &Path, errors: &[ErrorRecord]) -> Result<()> {
    write_csv(path, &["jar", "modid", "reason", "detail"], errors)
}
