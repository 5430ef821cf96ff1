//! Localization coverage pipeline.
//!
//! ## Module Structure
//!
//! - `archive`: Read-only access to archive entries
//! - `lang`: Recognized languages and resource paths
//! - `resource_index`: Per-archive discovery of (namespace, language) pairs
//! - `scan`: Directory scan producing the coverage report
//! - `report`: Coverage report model and persistence
//! - `resource`: Loading and parsing one namespace's bundle
//! - `extract`: Source-only extraction with merge and error ledger
//! - `synthesize`: Target-dialect generation with do-not-overwrite writes
//! - `convert`: The injected text conversion boundary
//! - `backlog`: Untranslated namespaces awaiting human work
//! - `errors`: Per-row failure records
//!
//! ## Three-Stage Pipeline
//!
//! 1. **Scan** (`scan::scan`): archives directory -> `CoverageReport`
//! 2. **Extract** (`extract::extract`): report + archives -> source-only bundles
//! 3. **Synthesize** (`synthesize::synthesize`): report + archives -> target-dialect overlay
//!
//! Stages 2 and 3 each re-read the persisted report and the archives, so
//! either can run standalone.

pub mod archive;
pub mod backlog;
pub mod convert;
pub mod errors;
pub mod extract;
pub mod lang;
pub mod report;
pub mod resource;
pub mod resource_index;
pub mod scan;
pub mod synthesize;

pub use convert::{ConversionMode, Converter, ZhConverter};
pub use errors::{ErrorReason, ErrorRecord};
pub use lang::Language;
pub use report::{CoverageReport, CoverageRow};
pub use resource::ResourceMap;
