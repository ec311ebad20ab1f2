use crate::config::ApiConfig;
use crate::prelude::*;
use async_trait::async_trait;
use qurancards_core::content::{
    ApiInfo, ArabicSearchResults, ChapterDetail, ChapterSummary, CorpusStats,
    TranslationInfo, TranslationSearchResults, VerseComparison, VerseDetail,
};
use qurancards_core::provider::{ContentError, ContentProvider};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

const USER_AGENT: &str = concat!("qurancards/", env!("CARGO_PKG_VERSION"));

pub fn chapter_path(chapter: u32) -> String {
    format!("/api/chapters/{chapter}")
}

pub fn verse_path(chapter: u32, verse: u32) -> String {
    format!("/api/verses/{chapter}/{verse}")
}

pub fn compare_path(chapter: u32, verse: u32) -> String {
    format!("/api/compare/{chapter}/{verse}")
}

/// Map a non-success HTTP status to the provider error taxonomy
pub fn status_error(status: StatusCode, path: &str) -> ContentError {
    if status == StatusCode::NOT_FOUND {
        ContentError::NotFound(path.to_string())
    } else {
        ContentError::Network(format!("HTTP {status} for {path}"))
    }
}

/// Query parameters for `/api/search`
#[derive(Debug, Clone)]
pub struct ArabicQuery {
    pub query: String,
    pub search_type: Option<String>,
    pub normalize: bool,
    pub limit: usize,
}

impl ArabicQuery {
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("q", self.query.clone())];
        if let Some(search_type) = &self.search_type {
            params.push(("type", search_type.clone()));
        }
        params.push(("normalize", self.normalize.to_string()));
        params.push(("limit", self.limit.to_string()));
        params
    }
}

/// Query parameters for `/api/search/translation`
#[derive(Debug, Clone)]
pub struct TranslationQuery {
    pub query: String,
    pub lang: String,
    pub search_type: Option<String>,
    pub include_arabic: bool,
    pub limit: usize,
}

impl TranslationQuery {
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("q", self.query.clone()), ("lang", self.lang.clone())];
        if let Some(search_type) = &self.search_type {
            params.push(("type", search_type.clone()));
        }
        params.push(("include_arabic", self.include_arabic.to_string()));
        params.push(("limit", self.limit.to_string()));
        params
    }
}

/// HTTP client for the Quran API
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn from_global(global: &crate::Global) -> Result<Self> {
        Self::new(&ApiConfig::from_global(global))
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ContentError> {
        let url = self.url(path);
        log::debug!("GET {url} {query:?}");

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| ContentError::Network(format!("{path}: {e}")))?;

        let status = response.status();
        log::debug!("{status} {url}");
        if !status.is_success() {
            return Err(status_error(status, path));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ContentError::Decode(format!("{path}: {e}")))
    }

    pub async fn info(&self) -> Result<ApiInfo, ContentError> {
        self.get_json("/api/info", &[]).await
    }

    pub async fn chapters(&self) -> Result<Vec<ChapterSummary>, ContentError> {
        self.get_json("/api/chapters", &[]).await
    }

    pub async fn chapter(&self, chapter: u32) -> Result<ChapterDetail, ContentError> {
        self.get_json(&chapter_path(chapter), &[]).await
    }

    pub async fn verse(&self, chapter: u32, verse: u32) -> Result<VerseDetail, ContentError> {
        self.get_json(&verse_path(chapter, verse), &[]).await
    }

    pub async fn compare(&self, chapter: u32, verse: u32) -> Result<VerseComparison, ContentError> {
        self.get_json(&compare_path(chapter, verse), &[]).await
    }

    pub async fn search_arabic(
        &self,
        query: &ArabicQuery,
    ) -> Result<ArabicSearchResults, ContentError> {
        self.get_json("/api/search", &query.params()).await
    }

    pub async fn search_translation(
        &self,
        query: &TranslationQuery,
    ) -> Result<TranslationSearchResults, ContentError> {
        self.get_json("/api/search/translation", &query.params())
            .await
    }

    pub async fn translations(&self) -> Result<Vec<TranslationInfo>, ContentError> {
        self.get_json("/api/translations", &[]).await
    }

    pub async fn stats(&self) -> Result<CorpusStats, ContentError> {
        self.get_json("/api/stats", &[]).await
    }
}

#[async_trait]
impl ContentProvider for ApiClient {
    async fn chapter_detail(&self, chapter: u32) -> Result<ChapterDetail, ContentError> {
        self.chapter(chapter).await
    }

    async fn verse_translations(
        &self,
        chapter: u32,
        verse: u32,
    ) -> Result<VerseComparison, ContentError> {
        self.compare(chapter, verse).await
    }
}
