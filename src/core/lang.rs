use std::fmt;

/// Localization languages recognized inside mod archives.
///
/// The set is fixed: the English source, the simplified Chinese base
/// dialect that derived translations are generated from, and the traditional
/// Chinese target dialect they are generated into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    Source,
    BaseDialect,
    TargetDialect,
}

impl Language {
    pub const ALL: [Language; 3] = [
        Language::Source,
        Language::BaseDialect,
        Language::TargetDialect,
    ];

    /// Locale code as used in resource file names (`en_us`, `zh_cn`, `zh_tw`).
    pub fn code(self) -> &'static str {
        match self {
            Language::Source => "en_us",
            Language::BaseDialect => "zh_cn",
            Language::TargetDialect => "zh_tw",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }

    /// Short language tag used in backlog file names (`en` for `en_us`).
    pub fn short_code(self) -> &'static str {
        self.code().split('_').next().unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Logical path of a namespace's resource bundle inside an archive.
pub fn resource_path(namespace: &str, language: Language) -> String {
    format!("assets/{}/lang/{}.json", namespace, language.code())
}
