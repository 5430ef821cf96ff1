//! Discovery of localization resources inside a single archive.

use std::{collections::BTreeMap, sync::LazyLock};

use regex::Regex;

use super::{archive::Archive, lang::Language};

/// Matches `assets/<namespace>/lang/<language>.json` for recognized languages.
static LANG_RESOURCE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^assets/([^/]+)/lang/(en_us|zh_cn|zh_tw)\.json$").unwrap()
});

/// Which recognized languages a namespace ships.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LanguageSet {
    pub source: bool,
    pub base_dialect: bool,
    pub target_dialect: bool,
}

impl LanguageSet {
    pub fn insert(&mut self, language: Language) {
        match language {
            Language::Source => self.source = true,
            Language::BaseDialect => self.base_dialect = true,
            Language::TargetDialect => self.target_dialect = true,
        }
    }
}

/// Namespace -> languages present, for one archive.
pub type ResourceIndex = BTreeMap<String, LanguageSet>;

/// Split a logical path into `(namespace, language)` if it is a recognized
/// localization resource.
pub fn match_resource_path(path: &str) -> Option<(&str, Language)> {
    let caps = LANG_RESOURCE_REGEX.captures(path)?;
    let namespace = caps.get(1)?.as_str();
    let language = Language::from_code(caps.get(2)?.as_str())?;
    Some((namespace, language))
}

/// Index every localization resource among the given entry names.
///
/// Archives without any matching path produce an empty index.
pub fn index_entries<'a>(names: impl IntoIterator<Item = &'a str>) -> ResourceIndex {
    let mut index = ResourceIndex::new();
    for name in names {
        if let Some((namespace, language)) = match_resource_path(name) {
            index
                .entry(namespace.to_string())
                .or_default()
                .insert(language);
        }
    }
    index
}

pub fn discover(archive: &Archive) -> ResourceIndex {
    index_entries(archive.entry_names())
}
