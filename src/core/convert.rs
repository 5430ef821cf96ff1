//! Text conversion boundary between the base and target dialect.
//!
//! The synthesizer only ever sees a [`Converter`]; the linguistic work is
//! delegated to `zhconv` in production and to plain closures in tests.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use zhconv::{Variant, zhconv};

/// Pure `text -> text` conversion.
pub trait Converter {
    fn convert(&self, text: &str) -> String;
}

impl<F> Converter for F
where
    F: Fn(&str) -> String,
{
    fn convert(&self, text: &str) -> String {
        self(text)
    }
}

/// Conversion variant selected with `--mode`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionMode {
    /// Traditional characters only.
    Tw,
    /// Traditional characters with Taiwanese phrasing.
    #[default]
    Twp,
}

impl fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConversionMode::Tw => "tw",
            ConversionMode::Twp => "twp",
        })
    }
}

/// Simplified -> traditional Chinese converter backed by `zhconv`.
#[derive(Debug, Clone, Copy)]
pub struct ZhConverter {
    mode: ConversionMode,
}

impl ZhConverter {
    pub fn new(mode: ConversionMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ConversionMode {
        self.mode
    }
}

impl Converter for ZhConverter {
    fn convert(&self, text: &str) -> String {
        let target = match self.mode {
            ConversionMode::Tw => Variant::ZhHant,
            ConversionMode::Twp => Variant::ZhTW,
        };
        zhconv(text, target)
    }
}
