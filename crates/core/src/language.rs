use serde::{Deserialize, Serialize};

/// Languages a flashcard session can show verse translations in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Malay,
    Chinese,
    Tamil,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::Malay,
        Language::Chinese,
        Language::Tamil,
    ];

    /// Resolve a language code such as `en` or `ms`
    ///
    /// Unrecognized codes fall back to English.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Language::English,
            "ms" => Language::Malay,
            "zh" => Language::Chinese,
            "ta" => Language::Tamil,
            _ => Language::English,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Malay => "ms",
            Language::Chinese => "zh",
            Language::Tamil => "ta",
        }
    }

    /// Key of the translation used for this language in compare responses
    pub fn translation_key(self) -> &'static str {
        match self {
            Language::English => "en.hilali",
            Language::Malay => "ms.basmeih",
            Language::Chinese => "zh.jian",
            Language::Tamil => "ta.tamil",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Malay => "Malay",
            Language::Chinese => "Chinese",
            Language::Tamil => "Tamil",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
