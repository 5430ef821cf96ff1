use anyhow::Result;

use super::super::args::ExtractCommand;
use super::{CommandResult, CommandSummary, ExtractSummary, helper::CommandContext};
use crate::core::{CoverageReport, extract::extract as extract_untranslated};

pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let report = CoverageReport::load(&cmd.report)?;

    let mut extraction = extract_untranslated(&report, &ctx.mods_dir);
    let files = extraction.write(&ctx.out_dir)?;

    Ok(CommandResult::success(CommandSummary::Extract(
        ExtractSummary {
            selected: extraction.selected,
            extracted: extraction.stats.len(),
            error_count: extraction.errors.len(),
            files,
        },
    )))
}
