//! Loading a namespace's resource bundle out of an archive on disk.

use std::path::Path;

use anyhow::{Result, bail};
use serde_json::{Map, Value};

use super::{
    archive::Archive,
    errors::{ErrorReason, ErrorRecord},
    lang::{Language, resource_path},
    report::CoverageRow,
};

/// One namespace's one-language bundle: opaque keys to (usually string) values.
pub type ResourceMap = Map<String, Value>;

/// Why a resource could not be loaded, plus the raw payload when the entry
/// existed but did not parse.
#[derive(Debug)]
pub struct LoadFailure {
    pub record: ErrorRecord,
    pub raw: Option<Vec<u8>>,
}

impl LoadFailure {
    fn new(row: &CoverageRow, reason: ErrorReason, detail: impl Into<String>) -> Self {
        Self {
            record: ErrorRecord::new(&row.archive, &row.namespace, reason, detail),
            raw: None,
        }
    }
}

/// Parse resource bytes as a JSON object.
///
/// A leading UTF-8 byte order mark is ignored.
pub fn parse_resource(bytes: &[u8]) -> Result<ResourceMap> {
    let decoded = String::from_utf8_lossy(bytes);
    let text = decoded.strip_prefix('\u{feff}').unwrap_or(decoded.as_ref());
    match serde_json::from_str::<Value>(text)? {
        Value::Object(map) => Ok(map),
        other => bail!("root of resource must be an object, found {}", json_kind(&other)),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Resolve the row's archive under `mods_dir`, open it, and parse the
/// `language` bundle of the row's namespace.
///
/// The archive is closed before returning, on success and failure alike.
pub fn load_resource(
    mods_dir: &Path,
    row: &CoverageRow,
    language: Language,
) -> Result<ResourceMap, LoadFailure> {
    let archive_path = mods_dir.join(&row.archive);
    if !archive_path.is_file() {
        return Err(LoadFailure::new(
            row,
            ErrorReason::MissingArchive,
            archive_path.display().to_string(),
        ));
    }

    let mut archive = Archive::try_open(&archive_path)
        .map_err(|err| LoadFailure::new(row, ErrorReason::BadArchive, err.to_string()))?;

    let entry = resource_path(&row.namespace, language);
    let bytes = match archive.read_entry(&entry) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => return Err(LoadFailure::new(row, ErrorReason::MissingEntry, entry)),
        Err(err) => {
            return Err(LoadFailure::new(
                row,
                ErrorReason::BadArchive,
                err.to_string(),
            ));
        }
    };

    parse_resource(&bytes).map_err(|err| LoadFailure {
        record: ErrorRecord::new(
            &row.archive,
            &row.namespace,
            ErrorReason::BadJson,
            err.to_string(),
        ),
        raw: Some(bytes),
    })
}
