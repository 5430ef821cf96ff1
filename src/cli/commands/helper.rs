use std::{env, path::PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use super::super::args::CommonArgs;
use crate::config::{CONFIG_FILE_NAME, Config, load_config};

/// Configuration resolved for one command run: config file values with CLI
/// overrides applied.
pub struct CommandContext {
    pub config: Config,
    pub mods_dir: PathBuf,
    pub out_dir: PathBuf,
}

impl CommandContext {
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to determine working directory")?;
        let config_result = load_config(&cwd)?;
        if !config_result.from_file {
            debug!("no {} found, using default configuration", CONFIG_FILE_NAME);
        }
        let config = config_result.config;

        let out_dir = common
            .out
            .clone()
            .unwrap_or_else(|| cwd.join(&config.out_dir));

        Ok(Self {
            config,
            mods_dir: common.mods.clone(),
            out_dir,
        })
    }
}
