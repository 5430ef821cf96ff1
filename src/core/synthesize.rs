//! Generation of target-dialect bundles from the base dialect.
//!
//! Only values are converted; keys and non-string values pass through
//! untouched. A bundle already present in the output pack is never
//! overwritten, so runs can be repeated safely and hand-edited files survive.

use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use super::{
    backlog::{BacklogEntry, source_only_backlog, write_backlog},
    convert::Converter,
    errors::{ErrorReason, ErrorRecord, write_error_ledger},
    lang::{Language, resource_path},
    report::{CoverageReport, CoverageRow},
    resource::{ResourceMap, load_resource},
};
use crate::utils::{ensure_parent_dir, to_pretty_json};

/// `zh_tw-errors.csv`
pub fn errors_file_name() -> String {
    format!("{}-errors.csv", Language::TargetDialect.code())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesisStats {
    pub converted: usize,
    pub skipped_existing: usize,
    pub failed: usize,
}

/// Terminal state of one selected row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Written(PathBuf),
    SkippedExisting(PathBuf),
    Failed(ErrorRecord),
}

#[derive(Debug, Default)]
pub struct Synthesis {
    pub stats: SynthesisStats,
    pub errors: Vec<ErrorRecord>,
    pub backlog: Vec<BacklogEntry>,
}

impl Synthesis {
    fn record(&mut self, outcome: RowOutcome) {
        match outcome {
            RowOutcome::Written(_) => self.stats.converted += 1,
            RowOutcome::SkippedExisting(_) => self.stats.skipped_existing += 1,
            RowOutcome::Failed(record) => {
                self.stats.failed += 1;
                self.errors.push(record);
            }
        }
    }

    /// Persist the backlog and the failure ledger into `out_dir`.
    pub fn write_ledgers(&self, out_dir: &Path) -> Result<PathBuf> {
        write_error_ledger(&out_dir.join(errors_file_name()), &self.errors)?;
        write_backlog(out_dir, &self.backlog)
    }
}

#[derive(Debug, Clone)]
pub struct SynthesizeOptions {
    pub mods_dir: PathBuf,
    /// Root of the resource pack overlay receiving generated bundles.
    pub pack_dir: PathBuf,
}

/// `<pack>/assets/<namespace>/lang/zh_tw.json`
pub fn target_path(pack_dir: &Path, namespace: &str) -> PathBuf {
    pack_dir.join(resource_path(namespace, Language::TargetDialect))
}

/// Convert every string value of `map`; other values are copied as-is.
pub fn convert_resource(map: &ResourceMap, converter: &dyn Converter) -> ResourceMap {
    map.iter()
        .map(|(key, value)| {
            let value = match value {
                Value::String(text) => Value::String(converter.convert(text)),
                other => other.clone(),
            };
            (key.clone(), value)
        })
        .collect()
}

/// Write `map` to `path` unless a file is already there.
///
/// Returns `Ok(false)` when the path exists.
fn write_new(path: &Path, map: &ResourceMap) -> Result<bool> {
    let content = to_pretty_json(map)?;
    persist_new(path, |file| file.write_all(content.as_bytes()))
}

/// Fill a temporary file next to `path`, then move it into place without
/// replacing an existing file. Nothing is left at `path` if `fill` fails.
fn persist_new<F>(path: &Path, fill: F) -> Result<bool>
where
    F: FnOnce(&mut NamedTempFile) -> io::Result<()>,
{
    ensure_parent_dir(path)?;
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut file = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    fill(&mut file).with_context(|| format!("Failed to write file: {}", path.display()))?;

    match file.persist_noclobber(path) {
        Ok(_) => Ok(true),
        Err(err) if err.error.kind() == io::ErrorKind::AlreadyExists => Ok(false),
        Err(err) => Err(err.error)
            .with_context(|| format!("Failed to write file: {}", path.display())),
    }
}

pub fn synthesize_row(
    row: &CoverageRow,
    options: &SynthesizeOptions,
    converter: &dyn Converter,
) -> RowOutcome {
    let source = match load_resource(&options.mods_dir, row, Language::BaseDialect) {
        Ok(map) => map,
        Err(failure) => return RowOutcome::Failed(failure.record),
    };

    let path = target_path(&options.pack_dir, &row.namespace);
    if path.exists() {
        return RowOutcome::SkippedExisting(path);
    }

    let converted = convert_resource(&source, converter);
    match write_new(&path, &converted) {
        Ok(true) => RowOutcome::Written(path),
        Ok(false) => RowOutcome::SkippedExisting(path),
        Err(err) => RowOutcome::Failed(ErrorRecord::new(
            &row.archive,
            &row.namespace,
            ErrorReason::WriteFailed,
            format!("{}: {:#}", path.display(), err),
        )),
    }
}

/// Generate target-dialect bundles for every row that ships the base dialect
/// but not the target dialect.
pub fn synthesize(
    report: &CoverageReport,
    options: &SynthesizeOptions,
    converter: &dyn Converter,
) -> Synthesis {
    let mut synthesis = Synthesis {
        backlog: source_only_backlog(report),
        ..Default::default()
    };

    for row in report.rows.iter().filter(|r| r.needs_target_dialect()) {
        let outcome = synthesize_row(row, options, converter);
        match &outcome {
            RowOutcome::Written(path) => debug!("wrote {}", path.display()),
            RowOutcome::SkippedExisting(path) => debug!("kept existing {}", path.display()),
            RowOutcome::Failed(record) => {
                warn!("{} ({}): {}", record.jar, record.modid, record.reason)
            }
        }
        synthesis.record(outcome);
    }

    synthesis
}
