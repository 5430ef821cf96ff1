//! Completion summaries printed after each command.
//!
//! Only counts reach the console; per-archive failure details live in the
//! ledger files the commands write.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{
    CommandResult, CommandSummary, ExtractSummary, InitSummary, ScanSummary, SynthesizeSummary,
};
use crate::config::CONFIG_FILE_NAME;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult) {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    print_to(result, &mut stdout, &mut stderr);
}

/// Print the summary of `result`, warnings going to `err`.
pub fn print_to<W: Write, E: Write>(result: &CommandResult, out: &mut W, err: &mut E) {
    match &result.summary {
        CommandSummary::Scan(summary) => print_scan(summary, out, err),
        CommandSummary::Extract(summary) => print_extract(summary, out, err),
        CommandSummary::Synthesize(summary) => print_synthesize(summary, out, err),
        CommandSummary::Init(summary) => print_init(summary, out, err),
    }
}

fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}

fn print_scan<W: Write, E: Write>(summary: &ScanSummary, out: &mut W, err: &mut E) {
    let report = &summary.report;
    let _ = writeln!(
        out,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Scanned {}: {}, {} with zh_cn, {} with zh_tw, {} only en_us",
            plural(summary.archive_count, "archive", "archives"),
            plural(report.total_rows, "row", "rows"),
            report.has_zh_cn,
            report.has_zh_tw,
            report.only_en
        )
        .green()
    );

    if summary.failed_archives > 0 {
        let _ = writeln!(
            err,
            "{} {} could not be opened (see {})",
            "warning:".bold().yellow(),
            plural(summary.failed_archives, "archive", "archives"),
            summary.files.json.display()
        );
    }

    let _ = writeln!(out, "  report: {}", summary.files.json.display());
}

fn print_extract<W: Write, E: Write>(summary: &ExtractSummary, out: &mut W, err: &mut E) {
    let _ = writeln!(
        out,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Extracted {} of {} en_us-only {}",
            summary.extracted,
            summary.selected,
            if summary.selected == 1 { "mod" } else { "mods" }
        )
        .green()
    );

    if summary.error_count > 0 {
        let _ = writeln!(
            err,
            "{} {} recorded in {}",
            "warning:".bold().yellow(),
            plural(summary.error_count, "error", "errors"),
            summary.files.errors.display()
        );
    }

    let _ = writeln!(out, "  output: {}", summary.files.out_dir.display());
}

fn print_synthesize<W: Write, E: Write>(summary: &SynthesizeSummary, out: &mut W, err: &mut E) {
    let stats = &summary.stats;
    let mark = if stats.failed == 0 {
        SUCCESS_MARK.green()
    } else {
        FAILURE_MARK.yellow()
    };
    let _ = writeln!(
        out,
        "{} Synthesized zh_tw ({}): converted {}, skipped existing {}, failed {}",
        mark, summary.mode, stats.converted, stats.skipped_existing, stats.failed
    );

    if stats.failed > 0 {
        let _ = writeln!(
            err,
            "{} {} failed (see {} next to the backlog)",
            "warning:".bold().yellow(),
            plural(stats.failed, "mod", "mods"),
            crate::core::synthesize::errors_file_name()
        );
    }

    let _ = writeln!(out, "  pack: {}", summary.pack_dir.display());
    let _ = writeln!(out, "  backlog: {}", summary.backlog.display());
}

fn print_init<W: Write, E: Write>(summary: &InitSummary, out: &mut W, err: &mut E) {
    if summary.created {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(err, "Error: {} already exists", CONFIG_FILE_NAME);
    }
}
