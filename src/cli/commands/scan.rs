use anyhow::Result;
use tracing::info;

use super::super::args::ScanCommand;
use super::{CommandResult, CommandSummary, ScanSummary, helper::CommandContext};
use crate::core::scan::{ScanOptions, list_archives, scan_archives};

pub fn scan(cmd: ScanCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let options = ScanOptions {
        archive_extension: ctx.config.archive_extension().to_string(),
        ignores: ctx.config.ignore_patterns()?,
    };

    let archives = list_archives(&ctx.mods_dir, &options)?;
    info!("scanning {} archive(s) in {}", archives.len(), ctx.mods_dir.display());

    let report = scan_archives(&archives);
    let files = report.write(&ctx.out_dir)?;

    Ok(CommandResult::success(CommandSummary::Scan(ScanSummary {
        archive_count: archives.len(),
        failed_archives: report.failed_archives(),
        report: report.summary(),
        files,
    })))
}
