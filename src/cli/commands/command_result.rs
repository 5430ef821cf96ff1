use std::path::PathBuf;

use super::super::exit_status::ExitStatus;
use crate::core::{
    ConversionMode,
    extract::ExtractionFiles,
    report::{ReportFiles, ReportSummary},
    synthesize::SynthesisStats,
};

#[derive(Debug)]
pub enum CommandSummary {
    Scan(ScanSummary),
    Extract(ExtractSummary),
    Synthesize(SynthesizeSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ScanSummary {
    pub archive_count: usize,
    pub failed_archives: usize,
    pub report: ReportSummary,
    pub files: ReportFiles,
}

#[derive(Debug)]
pub struct ExtractSummary {
    /// Rows that ship en_us and neither Chinese dialect.
    pub selected: usize,
    pub extracted: usize,
    pub error_count: usize,
    pub files: ExtractionFiles,
}

#[derive(Debug)]
pub struct SynthesizeSummary {
    pub mode: ConversionMode,
    pub stats: SynthesisStats,
    pub pack_dir: PathBuf,
    pub backlog: PathBuf,
}

#[derive(Debug)]
pub struct InitSummary {
    /// False if a config file was already present.
    pub created: bool,
}

/// Result of running a modlang command
pub struct CommandResult {
    pub summary: CommandSummary,
    pub exit_status: ExitStatus,
}

impl CommandResult {
    pub fn success(summary: CommandSummary) -> Self {
        Self {
            summary,
            exit_status: ExitStatus::Success,
        }
    }
}
