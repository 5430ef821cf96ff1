use anyhow::Result;
use tracing::debug;

use super::super::args::SynthesizeCommand;
use super::{CommandResult, CommandSummary, SynthesizeSummary, helper::CommandContext};
use crate::core::{
    Converter, CoverageReport, ZhConverter,
    synthesize::{SynthesizeOptions, synthesize as synthesize_dialect},
};

pub fn synthesize(cmd: SynthesizeCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let report = CoverageReport::load(&cmd.report)?;

    let converter = ZhConverter::new(cmd.mode.unwrap_or(ctx.config.mode));
    debug!("self-test: 自行车 -> {}", converter.convert("自行车"));

    let options = SynthesizeOptions {
        mods_dir: ctx.mods_dir.clone(),
        pack_dir: cmd.pack.clone(),
    };
    let synthesis = synthesize_dialect(&report, &options, &converter);
    let backlog = synthesis.write_ledgers(&ctx.out_dir)?;

    Ok(CommandResult::success(CommandSummary::Synthesize(
        SynthesizeSummary {
            mode: converter.mode(),
            stats: synthesis.stats,
            pack_dir: options.pack_dir,
            backlog,
        },
    )))
}
