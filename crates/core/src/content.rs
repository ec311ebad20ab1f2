use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `/api/info` response
///
/// Only the headline counts are typed; everything else the API reports is
/// kept verbatim in `extra` so `--json` output stays lossless.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ApiInfo {
    #[serde(default)]
    pub chapter_count: u32,
    #[serde(default)]
    pub verse_count: u32,
    #[serde(default)]
    pub token_count: u64,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Entry of the `/api/chapters` list
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChapterSummary {
    pub number: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub verse_count: u32,
    #[serde(default)]
    pub token_count: Option<u64>,
}

/// `/api/chapters/{n}` response
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChapterDetail {
    pub number: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub verse_count: u32,
    #[serde(default)]
    pub token_count: u64,
    #[serde(default)]
    pub verses: Vec<Verse>,
}

/// A verse as embedded in a chapter detail
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Verse {
    pub number: u32,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub token_count: Option<u32>,
    #[serde(default)]
    pub tokens: Vec<Token>,
}

/// Smallest addressable unit of Arabic text inside a verse
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Token {
    pub number: u32,
    pub text: String,
}

/// `/api/verses/{c}/{v}` response
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct VerseDetail {
    pub chapter_number: u32,
    pub verse_number: u32,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub token_count: Option<u32>,
    #[serde(default)]
    pub tokens: Vec<Token>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ArabicText {
    pub text: String,
}

/// `/api/compare/{c}/{v}` response: every translation of a single verse
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct VerseComparison {
    pub chapter_number: u32,
    pub verse_number: u32,
    #[serde(default)]
    pub arabic: Option<ArabicText>,
    /// Keyed by translation key (`en.hilali`, `ms.basmeih`, ...)
    #[serde(default)]
    pub translations: BTreeMap<String, Translation>,
}

impl VerseComparison {
    /// Text of the translation stored under `key`, if any
    pub fn translation_text(&self, key: &str) -> Option<&str> {
        self.translations.get(key).map(|t| t.text.as_str())
    }
}

/// A single rendered translation of a verse
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Translation {
    pub text: String,
    #[serde(default)]
    pub translator: Option<String>,
    #[serde(default, alias = "languageName")]
    pub language_name: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

/// Entry of the `/api/translations` catalogue
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TranslationInfo {
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub language_name: String,
    #[serde(default)]
    pub translator: String,
    #[serde(default)]
    pub source: Option<String>,
}

/// `/api/search` response
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ArabicSearchResults {
    #[serde(default)]
    pub query: String,
    #[serde(rename = "type", default)]
    pub search_type: String,
    #[serde(default)]
    pub normalize: bool,
    #[serde(default)]
    pub result_count: u32,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub results: Vec<ArabicSearchHit>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ArabicSearchHit {
    pub chapter_number: u32,
    #[serde(default)]
    pub chapter_name: Option<String>,
    pub verse_number: u32,
    #[serde(default)]
    pub verse_text: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub matching_tokens: Vec<Token>,
}

/// `/api/search/translation` response
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TranslationSearchResults {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub language_name: Option<String>,
    #[serde(default)]
    pub translator: Option<String>,
    #[serde(default)]
    pub search_type: Option<String>,
    #[serde(default)]
    pub result_count: u32,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub search_info: Option<SearchInfo>,
    #[serde(default)]
    pub results: Vec<TranslationSearchHit>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SearchInfo {
    #[serde(default)]
    pub searched_in: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TranslationSearchHit {
    pub chapter_number: u32,
    #[serde(default)]
    pub chapter_name: Option<String>,
    #[serde(default)]
    pub chapter_name_arabic: Option<String>,
    pub verse_number: u32,
    #[serde(default)]
    pub arabic: Option<ArabicText>,
    #[serde(default)]
    pub translation: Option<HitTranslation>,
}

/// Translation attached to a search hit
///
/// Older API revisions return a bare string instead of an object.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(untagged)]
pub enum HitTranslation {
    Full(Translation),
    Plain(String),
}

impl HitTranslation {
    pub fn text(&self) -> &str {
        match self {
            HitTranslation::Full(t) => &t.text,
            HitTranslation::Plain(s) => s,
        }
    }
}

/// `/api/stats` response
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CorpusStats {
    #[serde(default)]
    pub total_chapters: u32,
    #[serde(default)]
    pub total_verses: u32,
    #[serde(default)]
    pub total_tokens: u64,
    #[serde(default)]
    pub average_verses_per_chapter: f64,
    #[serde(default)]
    pub average_tokens_per_verse: Option<f64>,
    pub longest_chapter: ChapterExtent,
    pub shortest_chapter: ChapterExtent,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ChapterExtent {
    pub number: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub verses: u32,
}
