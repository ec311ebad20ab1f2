use async_trait::async_trait;

use crate::content::{ChapterDetail, VerseComparison};

/// Failure reported by a [`ContentProvider`]
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

/// Source of chapter and translation content for flashcard sessions
///
/// The shell implements this over HTTP; tests implement it over fixtures.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Chapter with its verses and their tokens
    async fn chapter_detail(&self, chapter: u32) -> Result<ChapterDetail, ContentError>;

    /// All translations of a single verse
    async fn verse_translations(
        &self,
        chapter: u32,
        verse: u32,
    ) -> Result<VerseComparison, ContentError>;
}
