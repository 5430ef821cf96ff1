//! Modlang - localization coverage for mod archives
//!
//! Modlang inventories the language resources bundled inside a directory of
//! mod archives, extracts English text for mods that ship no Chinese
//! translation, and generates traditional Chinese bundles from simplified
//! Chinese ones without ever overwriting an existing file.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, console output)
//! - `config`: Configuration file loading and parsing
//! - `core`: The scan / extract / synthesize pipeline
//! - `utils`: Shared file output helpers

pub mod cli;
pub mod config;
pub mod core;
pub mod utils;
