//! Coverage scanning across a directory of archives.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use glob::Pattern;
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::{
    archive::Archive,
    report::{CoverageReport, CoverageRow},
    resource_index::discover,
};

/// Options resolved from config and CLI before a scan starts.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Archive file extension without the leading dot, matched case-insensitively.
    pub archive_extension: String,
    /// Archive file names matching any of these are skipped.
    pub ignores: Vec<Pattern>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            archive_extension: "jar".to_string(),
            ignores: Vec::new(),
        }
    }
}

impl ScanOptions {
    fn accepts(&self, file_name: &str) -> bool {
        let has_extension = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(&self.archive_extension));
        has_extension && !self.ignores.iter().any(|p| p.matches(file_name))
    }
}

/// List archives directly inside `dir` (non-recursive), sorted by file name.
///
/// The order returned here is the enumeration order every later stage
/// inherits through the report.
pub fn list_archives(dir: &Path, options: &ScanOptions) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        bail!("Mods directory not found: {}", dir.display());
    }

    let mut archives = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("skipping unreadable directory entry: {}", err);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            warn!("skipping non UTF-8 file name: {:?}", entry.file_name());
            continue;
        };
        if options.accepts(name) {
            archives.push(entry.into_path());
        } else {
            debug!("ignoring {}", name);
        }
    }
    Ok(archives)
}

/// Rows for one archive: one per namespace, or a single `(error)` row if the
/// archive cannot be opened.
pub fn scan_archive(path: &Path) -> Vec<CoverageRow> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    match Archive::try_open(path) {
        Ok(archive) => {
            let index = discover(&archive);
            debug!("{}: {} namespace(s)", name, index.len());
            let mut report = CoverageReport::default();
            report.push_index(&name, &index);
            report.rows
        }
        Err(err) => {
            warn!("{}: {}", name, err);
            vec![CoverageRow::failed(&name, err.to_string())]
        }
    }
}

/// Scan already-listed archives in order.
pub fn scan_archives(archives: &[PathBuf]) -> CoverageReport {
    CoverageReport::new(archives.iter().flat_map(|path| scan_archive(path)).collect())
}

pub fn scan(dir: &Path, options: &ScanOptions) -> Result<CoverageReport> {
    let archives = list_archives(dir, options)?;
    Ok(scan_archives(&archives))
}
