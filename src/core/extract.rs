//! Extraction of source-language text for namespaces with no translation.
//!
//! Selection: rows that ship `en_us` and neither Chinese dialect. Each
//! selected bundle is written per namespace and merged into one document;
//! failures go to the error ledger and malformed payloads are preserved
//! verbatim for manual repair.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, warn};

use super::{
    backlog::{BacklogEntry, source_only_backlog, write_backlog},
    errors::{ErrorReason, ErrorRecord, write_error_ledger},
    lang::Language,
    report::CoverageReport,
    resource::{ResourceMap, load_resource},
};
use crate::utils::{ensure_parent_dir, write_csv, write_json_pretty};

pub const PER_PACKAGE_DIR_NAME: &str = "en-only-per-mod";
pub const RAW_DIR_NAME: &str = "en-only-raw";
pub const MERGED_FILE_NAME: &str = "en-only-merged.json";
pub const STATS_FILE_NAME: &str = "en-only-stats.csv";
pub const ERRORS_FILE_NAME: &str = "en-only-errors.csv";

/// Namespace -> merged bundle across every selected archive.
pub type MergedExtraction = BTreeMap<String, ResourceMap>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionStat {
    pub modid: String,
    pub jar: String,
    #[serde(rename = "keyCount")]
    pub key_count: usize,
}

/// Raw bytes of a source bundle that failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPayload {
    pub jar: String,
    pub namespace: String,
    pub bytes: Vec<u8>,
}

impl RawPayload {
    pub fn file_name(&self) -> String {
        format!("{}.{}.raw.txt", self.namespace, Language::Source.code())
    }
}

#[derive(Debug, Default)]
pub struct Extraction {
    /// Number of report rows selected for extraction.
    pub selected: usize,
    pub merged: MergedExtraction,
    /// Last successfully extracted bundle per namespace.
    pub per_package: BTreeMap<String, ResourceMap>,
    pub stats: Vec<ExtractionStat>,
    pub errors: Vec<ErrorRecord>,
    pub raw_payloads: Vec<RawPayload>,
    pub backlog: Vec<BacklogEntry>,
}

/// Paths written by [`Extraction::write`].
#[derive(Debug, Clone)]
pub struct ExtractionFiles {
    pub out_dir: PathBuf,
    pub merged: PathBuf,
    pub stats: PathBuf,
    pub errors: PathBuf,
    pub backlog: PathBuf,
}

/// Merge `map` into the namespace's accumulated bundle; later keys win.
fn merge_into(merged: &mut MergedExtraction, namespace: &str, map: &ResourceMap) {
    let target = merged.entry(namespace.to_string()).or_default();
    for (key, value) in map {
        target.insert(key.clone(), value.clone());
    }
}

/// Read every selected row's source bundle out of `mods_dir`.
///
/// Rows are processed in report order, which fixes the merge tie-break.
pub fn extract(report: &CoverageReport, mods_dir: &Path) -> Extraction {
    let mut extraction = Extraction {
        backlog: source_only_backlog(report),
        ..Default::default()
    };

    for row in report.rows.iter().filter(|r| r.is_source_only()) {
        extraction.selected += 1;

        match load_resource(mods_dir, row, Language::Source) {
            Ok(map) => {
                debug!("{}: {} key(s) from {}", row.namespace, map.len(), row.archive);
                merge_into(&mut extraction.merged, &row.namespace, &map);
                extraction.stats.push(ExtractionStat {
                    modid: row.namespace.clone(),
                    jar: row.archive.clone(),
                    key_count: map.len(),
                });
                extraction.per_package.insert(row.namespace.clone(), map);
            }
            Err(failure) => {
                warn!(
                    "{} ({}): {}",
                    failure.record.jar, failure.record.modid, failure.record.reason
                );
                if let Some(bytes) = failure.raw {
                    extraction.raw_payloads.push(RawPayload {
                        jar: row.archive.clone(),
                        namespace: row.namespace.clone(),
                        bytes,
                    });
                }
                extraction.errors.push(failure.record);
            }
        }
    }

    extraction
}

impl Extraction {
    /// Archive the namespace's per-package bundle was last taken from.
    fn per_package_source(&self, namespace: &str) -> &str {
        self.stats
            .iter()
            .rev()
            .find(|stat| stat.modid == namespace)
            .map(|stat| stat.jar.as_str())
            .unwrap_or_default()
    }

    /// Persist every artifact into `out_dir`.
    ///
    /// A per-namespace file that cannot be written is recorded as
    /// `write_failed` in the error ledger, which is written last.
    pub fn write(&mut self, out_dir: &Path) -> Result<ExtractionFiles> {
        let files = ExtractionFiles {
            out_dir: out_dir.to_path_buf(),
            merged: out_dir.join(MERGED_FILE_NAME),
            stats: out_dir.join(STATS_FILE_NAME),
            errors: out_dir.join(ERRORS_FILE_NAME),
            backlog: out_dir.join(super::backlog::backlog_file_name()),
        };

        let mut write_failures = Vec::new();

        let per_package_dir = out_dir.join(PER_PACKAGE_DIR_NAME);
        for (namespace, map) in &self.per_package {
            let path = per_package_dir.join(format!("{}.json", namespace));
            if let Err(err) = write_json_pretty(&path, map) {
                warn!("{}: {:#}", namespace, err);
                write_failures.push(ErrorRecord::new(
                    self.per_package_source(namespace),
                    namespace,
                    ErrorReason::WriteFailed,
                    format!("{:#}", err),
                ));
            }
        }

        for payload in &self.raw_payloads {
            let path = out_dir.join(RAW_DIR_NAME).join(payload.file_name());
            let written = ensure_parent_dir(&path).and_then(|()| {
                fs::write(&path, &payload.bytes)
                    .with_context(|| format!("Failed to write file: {}", path.display()))
            });
            if let Err(err) = written {
                warn!("{}: {:#}", payload.namespace, err);
                write_failures.push(ErrorRecord::new(
                    &payload.jar,
                    &payload.namespace,
                    ErrorReason::WriteFailed,
                    format!("{:#}", err),
                ));
            }
        }
        self.errors.extend(write_failures);

        write_json_pretty(&files.merged, &self.merged)?;
        write_csv(&files.stats, &["modid", "jar", "keyCount"], &self.stats)?;
        write_backlog(out_dir, &self.backlog)?;
        write_error_ledger(&files.errors, &self.errors)?;

        Ok(files)
    }
}
