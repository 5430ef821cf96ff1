//! Coverage report: the persisted result of a scan and the shared input of
//! the extraction and synthesis stages.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::resource_index::{LanguageSet, ResourceIndex};
use crate::utils::{write_csv, write_json_pretty};

pub const REPORT_JSON_FILE_NAME: &str = "lang-report.json";
pub const REPORT_CSV_FILE_NAME: &str = "lang-report.csv";
pub const SUMMARY_FILE_NAME: &str = "summary.json";

/// Namespace marker for the synthetic row of an archive that failed to open.
pub const ERROR_NAMESPACE: &str = "(error)";

/// One (archive, namespace) pair observed during a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageRow {
    #[serde(rename = "jar")]
    pub archive: String,
    #[serde(rename = "modid")]
    pub namespace: String,
    #[serde(rename = "en_us", default)]
    pub has_source: bool,
    #[serde(rename = "zh_cn", default)]
    pub has_base_dialect: bool,
    #[serde(rename = "zh_tw", default)]
    pub has_target_dialect: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CoverageRow {
    pub fn new(archive: &str, namespace: &str, languages: LanguageSet) -> Self {
        Self {
            archive: archive.to_string(),
            namespace: namespace.to_string(),
            has_source: languages.source,
            has_base_dialect: languages.base_dialect,
            has_target_dialect: languages.target_dialect,
            error: None,
        }
    }

    /// Synthetic row recorded when an archive cannot be opened.
    pub fn failed(archive: &str, detail: String) -> Self {
        Self {
            error: Some(detail),
            ..Self::new(archive, ERROR_NAMESPACE, LanguageSet::default())
        }
    }

    /// Ships the source language but no translation of any recognized kind.
    pub fn is_source_only(&self) -> bool {
        self.has_source && !self.has_base_dialect && !self.has_target_dialect
    }

    /// Ships the base dialect but not the target dialect.
    pub fn needs_target_dialect(&self) -> bool {
        self.has_base_dialect && !self.has_target_dialect
    }
}

/// Aggregate counts written to `summary.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_rows: usize,
    pub has_zh_cn: usize,
    pub has_zh_tw: usize,
    pub only_en: usize,
}

/// Paths of the files written by [`CoverageReport::write`].
#[derive(Debug, Clone)]
pub struct ReportFiles {
    pub json: PathBuf,
    pub csv: PathBuf,
    pub summary: PathBuf,
}

#[derive(Serialize)]
struct CsvRow<'a> {
    jar: &'a str,
    modid: &'a str,
    en_us: u8,
    zh_cn: u8,
    zh_tw: u8,
}

impl<'a> From<&'a CoverageRow> for CsvRow<'a> {
    fn from(row: &'a CoverageRow) -> Self {
        Self {
            jar: &row.archive,
            modid: &row.namespace,
            en_us: row.has_source.into(),
            zh_cn: row.has_base_dialect.into(),
            zh_tw: row.has_target_dialect.into(),
        }
    }
}

/// Ordered rows of one scan, in archive enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoverageReport {
    pub rows: Vec<CoverageRow>,
}

impl CoverageReport {
    pub fn new(rows: Vec<CoverageRow>) -> Self {
        Self { rows }
    }

    /// Append the rows of one archive's resource index.
    pub fn push_index(&mut self, archive: &str, index: &ResourceIndex) {
        self.rows.extend(
            index
                .iter()
                .map(|(namespace, languages)| CoverageRow::new(archive, namespace, *languages)),
        );
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read report: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse report: {}", path.display()))
    }

    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            total_rows: self.rows.len(),
            has_zh_cn: self.rows.iter().filter(|r| r.has_base_dialect).count(),
            has_zh_tw: self.rows.iter().filter(|r| r.has_target_dialect).count(),
            only_en: self.rows.iter().filter(|r| r.is_source_only()).count(),
        }
    }

    /// Number of archives that could not be opened during the scan.
    pub fn failed_archives(&self) -> usize {
        self.rows.iter().filter(|r| r.error.is_some()).count()
    }

    /// Write the JSON report, its CSV mirror and the summary into `out_dir`.
    pub fn write(&self, out_dir: &Path) -> Result<ReportFiles> {
        let files = ReportFiles {
            json: out_dir.join(REPORT_JSON_FILE_NAME),
            csv: out_dir.join(REPORT_CSV_FILE_NAME),
            summary: out_dir.join(SUMMARY_FILE_NAME),
        };

        write_json_pretty(&files.json, self)?;
        let csv_rows: Vec<CsvRow> = self.rows.iter().map(CsvRow::from).collect();
        write_csv(
            &files.csv,
            &["jar", "modid", "en_us", "zh_cn", "zh_tw"],
            &csv_rows,
        )?;
        write_json_pretty(&files.summary, &self.summary())?;

        Ok(files)
    }
}
