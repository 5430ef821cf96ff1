//! Backlog of namespaces that still need a human translation.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;

use super::{lang::Language, report::CoverageReport};
use crate::utils::write_csv;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BacklogEntry {
    pub jar: String,
    pub modid: String,
}

/// `todo-en-only.csv`
pub fn backlog_file_name() -> String {
    format!("todo-{}-only.csv", Language::Source.short_code())
}

/// Every row of the report that ships the source language and neither
/// dialect, regardless of what later stages manage to do with it.
pub fn source_only_backlog(report: &CoverageReport) -> Vec<BacklogEntry> {
    report
        .rows
        .iter()
        .filter(|row| row.is_source_only())
        .map(|row| BacklogEntry {
            jar: row.archive.clone(),
            modid: row.namespace.clone(),
        })
        .collect()
}

pub fn write_backlog(out_dir: &Path, entries: &[BacklogEntry]) -> Result<PathBuf> {
    let path = out_dir.join(backlog_file_name());
    write_csv(&path, &["jar", "modid"], entries)?;
    Ok(path)
}
