//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `scan`: Inventory localization resources across a mods directory
//! - `extract`: Extract English text for mods without any Chinese translation
//! - `synthesize`: Generate zh_tw bundles from zh_cn into a resource pack
//! - `init`: Initialize modlang configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::ConversionMode;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Scan(cmd)) => cmd.common.verbose,
            Some(Command::Extract(cmd)) => cmd.common.verbose,
            Some(Command::Synthesize(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all pipeline commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory containing the mod archives
    #[arg(long, value_name = "DIR")]
    pub mods: PathBuf,

    /// Output directory for reports and ledgers (overrides config file)
    #[arg(long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// Coverage report produced by `scan` (lang-report.json)
    #[arg(long, value_name = "FILE")]
    pub report: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct SynthesizeCommand {
    /// Coverage report produced by `scan` (lang-report.json)
    #[arg(long, value_name = "FILE")]
    pub report: PathBuf,

    /// Resource pack directory receiving generated zh_tw bundles
    #[arg(long, value_name = "DIR")]
    pub pack: PathBuf,

    /// Conversion variant (overrides config file)
    #[arg(long, value_enum)]
    pub mode: Option<ConversionMode>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan mod archives and report which languages each mod ships
    Scan(ScanCommand),
    /// Extract en_us text of mods that have no Chinese translation
    Extract(ExtractCommand),
    /// Generate zh_tw translations from zh_cn without overwriting existing files
    Synthesize(SynthesizeCommand),
    /// Initialize a new .modlangrc.json configuration file
    Init,
}
