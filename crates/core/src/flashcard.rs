//! Flashcard session engine
//!
//! A session owns a deck of [`WordCard`]s built from one chapter: one card per
//! token, each carrying the translation of the verse it belongs to. Words are
//! never translated individually. Navigation wraps around at both ends and
//! every move shows the front face of the new card.
//!
//! All operations except [`FlashcardSession::build`] are in-memory and total.
//! On an empty deck they are silent no-ops.

use futures::stream::{self, StreamExt, TryStreamExt};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use crate::content::ChapterDetail;
use crate::language::Language;
use crate::provider::{ContentError, ContentProvider};

/// Shown on the back of a card when the verse has no translation for the session language
pub const TRANSLATION_UNAVAILABLE: &str = "Translation not available";

/// Upper bound on translation requests in flight during one build
pub const MAX_CONCURRENT_LOOKUPS: usize = 8;

#[derive(Debug, thiserror::Error)]
pub enum FlashcardError {
    #[error("Content unavailable for chapter {chapter}: {source}")]
    ContentUnavailable {
        chapter: u32,
        #[source]
        source: ContentError,
    },
}

/// 1-based chapter/verse coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub chapter: u32,
    pub verse: u32,
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.chapter, self.verse)
    }
}

/// One word-study card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCard {
    pub arabic_text: String,
    pub location: Location,
    pub position_label: String,
    pub verse_translation_text: String,
    pub verse_arabic_text: String,
}

/// Position within the deck, 1-based for display
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Progress {
    pub position: usize,
    pub total: usize,
    pub fraction: f64,
}

impl Progress {
    pub fn percent(&self) -> f64 {
        self.fraction * 100.0
    }
}

/// Verse translations fetched during one build, keyed by verse number.
/// `None` means the verse has no translation under the session's key.
pub type TranslationCache = HashMap<u32, Option<String>>;

/// Build the deck in natural order: verse order, then token order
///
/// Verses without tokens contribute nothing.
pub fn assemble_deck(
    detail: &ChapterDetail,
    chapter: u32,
    cache: &TranslationCache,
) -> Vec<WordCard> {
    detail
        .verses
        .iter()
        .flat_map(|verse| {
            let translation = cache
                .get(&verse.number)
                .cloned()
                .flatten()
                .unwrap_or_else(|| TRANSLATION_UNAVAILABLE.to_string());

            verse.tokens.iter().map(move |token| WordCard {
                arabic_text: token.text.clone(),
                location: Location {
                    chapter,
                    verse: verse.number,
                },
                position_label: format!("Word {}", token.number),
                verse_translation_text: translation.clone(),
                verse_arabic_text: verse.text.clone(),
            })
        })
        .collect()
}

/// Fetch the translation of every token-bearing verse exactly once
///
/// At most [`MAX_CONCURRENT_LOOKUPS`] requests are in flight at a time.
async fn fetch_translations<P>(
    provider: &P,
    detail: &ChapterDetail,
    chapter: u32,
    language: Language,
) -> Result<TranslationCache, ContentError>
where
    P: ContentProvider + ?Sized,
{
    let verses: BTreeSet<u32> = detail
        .verses
        .iter()
        .filter(|v| !v.tokens.is_empty())
        .map(|v| v.number)
        .collect();

    let key = language.translation_key();
    let lookups = verses.into_iter().map(|verse| async move {
        let comparison = provider.verse_translations(chapter, verse).await?;
        Ok::<_, ContentError>((verse, comparison.translation_text(key).map(str::to_string)))
    });

    stream::iter(lookups)
        .buffered(MAX_CONCURRENT_LOOKUPS)
        .try_collect()
        .await
}

/// Active flashcard study session over one chapter
#[derive(Debug, Clone)]
pub struct FlashcardSession {
    deck: Vec<WordCard>,
    current_index: usize,
    flipped: bool,
    chapter: u32,
    chapter_name: Option<String>,
    language: Language,
}

impl FlashcardSession {
    /// Build a session for `chapter`, showing translations in `language_code`
    ///
    /// The deck is left in natural order. Call [`shuffle`](Self::shuffle)
    /// afterwards for a randomized study order.
    pub async fn build<P>(
        provider: &P,
        chapter: u32,
        language_code: &str,
    ) -> Result<Self, FlashcardError>
    where
        P: ContentProvider + ?Sized,
    {
        let language = Language::from_code(language_code);
        let unavailable = |source| FlashcardError::ContentUnavailable { chapter, source };

        log::debug!(
            "building flashcard deck for chapter {chapter} ({})",
            language.translation_key()
        );

        let detail = provider.chapter_detail(chapter).await.map_err(unavailable)?;
        let cache = fetch_translations(provider, &detail, chapter, language)
            .await
            .map_err(unavailable)?;

        let deck = assemble_deck(&detail, chapter, &cache);
        log::info!(
            "chapter {chapter}: {} cards from {} verses ({} translations fetched)",
            deck.len(),
            detail.verses.len(),
            cache.len()
        );

        Ok(Self::from_deck(deck, chapter, detail.name, language))
    }

    /// Wrap an already assembled deck
    pub fn from_deck(
        deck: Vec<WordCard>,
        chapter: u32,
        chapter_name: Option<String>,
        language: Language,
    ) -> Self {
        Self {
            deck,
            current_index: 0,
            flipped: false,
            chapter,
            chapter_name,
            language,
        }
    }

    /// Shuffle with the thread-local RNG
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::thread_rng());
    }

    /// Fisher-Yates shuffle, then back to the first card, front face up
    pub fn shuffle_with<R: Rng>(&mut self, rng: &mut R) {
        if self.deck.is_empty() {
            return;
        }

        for i in (1..self.deck.len()).rev() {
            let j = rng.gen_range(0..=i);
            self.deck.swap(i, j);
        }

        self.current_index = 0;
        self.flipped = false;
    }

    pub fn next(&mut self) {
        if self.deck.is_empty() {
            return;
        }
        self.current_index = (self.current_index + 1) % self.deck.len();
        self.flipped = false;
    }

    pub fn previous(&mut self) {
        if self.deck.is_empty() {
            return;
        }
        self.current_index = if self.current_index == 0 {
            self.deck.len() - 1
        } else {
            self.current_index - 1
        };
        self.flipped = false;
    }

    pub fn flip(&mut self) {
        if self.deck.is_empty() {
            return;
        }
        self.flipped = !self.flipped;
    }

    /// Go back to the first card of the current order. Flip state is kept.
    pub fn reset(&mut self) {
        self.current_index = 0;
    }

    pub fn current(&self) -> Option<&WordCard> {
        self.deck.get(self.current_index)
    }

    pub fn progress(&self) -> Progress {
        let total = self.deck.len();
        if total == 0 {
            return Progress {
                position: 0,
                total: 0,
                fraction: 0.0,
            };
        }

        let position = self.current_index + 1;
        Progress {
            position,
            total,
            fraction: position as f64 / total as f64,
        }
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn cards(&self) -> &[WordCard] {
        &self.deck
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    pub fn chapter(&self) -> u32 {
        self.chapter
    }

    pub fn chapter_name(&self) -> Option<&str> {
        self.chapter_name.as_deref()
    }

    pub fn language(&self) -> Language {
        self.language
    }
}

/// Ticket handed out by [`SessionSlot::begin`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildTicket {
    generation: u64,
}

/// Outcome of [`SessionSlot::install`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Installed {
    /// The session is now active
    Current,
    /// A newer build was started in the meantime; the result was dropped
    Stale,
}

/// Holder of the active session
///
/// Builds may overlap. Only the result of the most recently started build is
/// installed, whatever order they finish in. A failed build keeps the
/// previous session.
#[derive(Debug, Default)]
pub struct SessionSlot {
    generation: u64,
    session: Option<FlashcardSession>,
}

impl SessionSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> BuildTicket {
        self.generation += 1;
        BuildTicket {
            generation: self.generation,
        }
    }

    pub fn install(
        &mut self,
        ticket: BuildTicket,
        result: Result<FlashcardSession, FlashcardError>,
    ) -> Result<Installed, FlashcardError> {
        if ticket.generation != self.generation {
            log::debug!(
                "dropping stale flashcard build (generation {} < {})",
                ticket.generation,
                self.generation
            );
            return Ok(Installed::Stale);
        }

        self.session = Some(result?);
        Ok(Installed::Current)
    }

    pub fn session(&self) -> Option<&FlashcardSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut FlashcardSession> {
        self.session.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Token, Translation, Verse, VerseComparison};
    use async_trait::async_trait;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    // ============================================================================
    // Fixtures
    // ============================================================================

    fn verse(number: u32, tokens: &[&str]) -> Verse {
        Verse {
            number,
            text: format!("verse {number} text"),
            token_count: Some(tokens.len() as u32),
            tokens: tokens
                .iter()
                .enumerate()
                .map(|(i, t)| Token {
                    number: i as u32 + 1,
                    text: t.to_string(),
                })
                .collect(),
        }
    }

    fn chapter(number: u32, verses: Vec<Verse>) -> ChapterDetail {
        ChapterDetail {
            number,
            name: Some(format!("Chapter {number}")),
            verse_count: verses.len() as u32,
            token_count: verses.iter().map(|v| v.tokens.len() as u64).sum(),
            verses,
        }
    }

    fn comparison(chapter: u32, verse: u32) -> VerseComparison {
        let mut translations = BTreeMap::new();
        for (key, lang) in [("en.hilali", "English"), ("ms.basmeih", "Malay")] {
            translations.insert(
                key.to_string(),
                Translation {
                    text: format!("{lang} {chapter}:{verse}"),
                    translator: Some("Fixture".to_string()),
                    language_name: Some(lang.to_string()),
                    language: None,
                },
            );
        }
        VerseComparison {
            chapter_number: chapter,
            verse_number: verse,
            arabic: None,
            translations,
        }
    }

    #[derive(Default)]
    struct FixtureProvider {
        chapters: HashMap<u32, ChapterDetail>,
        failing_verse: Option<u32>,
        translation_calls: Mutex<Vec<(u32, u32)>>,
        latency: Option<Duration>,
        in_flight: AtomicUsize,
        peak_in_flight: AtomicUsize,
    }

    impl FixtureProvider {
        fn with_chapter(detail: ChapterDetail) -> Self {
            let mut chapters = HashMap::new();
            chapters.insert(detail.number, detail);
            Self {
                chapters,
                ..Default::default()
            }
        }

        fn calls(&self) -> Vec<(u32, u32)> {
            let mut calls = self.translation_calls.lock().unwrap().clone();
            calls.sort();
            calls
        }
    }

    #[async_trait]
    impl ContentProvider for FixtureProvider {
        async fn chapter_detail(&self, chapter: u32) -> Result<ChapterDetail, ContentError> {
            self.chapters
                .get(&chapter)
                .cloned()
                .ok_or_else(|| ContentError::NotFound(format!("chapter {chapter}")))
        }

        async fn verse_translations(
            &self,
            chapter: u32,
            verse: u32,
        ) -> Result<VerseComparison, ContentError> {
            self.translation_calls.lock().unwrap().push((chapter, verse));
            let active = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak_in_flight.fetch_max(active, Ordering::SeqCst);

            if let Some(latency) = self.latency {
                tokio::time::sleep(latency).await;
            }
            self.in_flight.fetch_sub(1, Ordering::SeqCst);

            if self.failing_verse == Some(verse) {
                return Err(ContentError::Network("connection reset".to_string()));
            }
            Ok(comparison(chapter, verse))
        }
    }

    fn session_of(words: &[&str]) -> FlashcardSession {
        let detail = chapter(1, vec![verse(1, words)]);
        let deck = assemble_deck(&detail, 1, &TranslationCache::new());
        FlashcardSession::from_deck(deck, 1, None, Language::English)
    }

    fn words(session: &FlashcardSession) -> Vec<String> {
        session.cards().iter().map(|c| c.arabic_text.clone()).collect()
    }

    // ============================================================================
    // build
    // ============================================================================

    #[tokio::test]
    async fn test_build_two_verses_in_natural_order() {
        let provider =
            FixtureProvider::with_chapter(chapter(7, vec![verse(1, &["A", "B"]), verse(2, &["C"])]));

        let session = FlashcardSession::build(&provider, 7, "en").await.unwrap();

        assert_eq!(words(&session), vec!["A", "B", "C"]);
        let cards = session.cards();
        assert_eq!(cards[0].verse_translation_text, "English 7:1");
        assert_eq!(cards[1].verse_translation_text, "English 7:1");
        assert_eq!(cards[2].verse_translation_text, "English 7:2");
        assert_eq!(cards[2].location, Location { chapter: 7, verse: 2 });
        assert_eq!(cards[1].position_label, "Word 2");
        assert_eq!(cards[0].verse_arabic_text, "verse 1 text");

        let progress = session.progress();
        assert_eq!(progress.position, 1);
        assert_eq!(progress.total, 3);
        assert!((progress.fraction - 1.0 / 3.0).abs() < 1e-9);
        assert!(!session.is_flipped());
    }

    #[tokio::test]
    async fn test_build_deck_size_is_token_total() {
        let provider = FixtureProvider::with_chapter(chapter(
            2,
            vec![
                verse(1, &["a", "b", "c"]),
                verse(2, &[]),
                verse(3, &["d"]),
                verse(4, &["e", "f"]),
            ],
        ));

        let session = FlashcardSession::build(&provider, 2, "ms").await.unwrap();

        assert_eq!(session.len(), 6);
        assert_eq!(session.language(), Language::Malay);
        assert_eq!(session.cards()[5].verse_translation_text, "Malay 2:4");
    }

    #[tokio::test]
    async fn test_build_fetches_each_verse_translation_once() {
        let provider = FixtureProvider::with_chapter(chapter(
            3,
            vec![verse(1, &["a", "b", "c"]), verse(2, &[]), verse(3, &["d", "e"])],
        ));

        FlashcardSession::build(&provider, 3, "en").await.unwrap();

        assert_eq!(provider.calls(), vec![(3, 1), (3, 3)]);
    }

    #[tokio::test]
    async fn test_build_bounds_concurrent_translation_requests() {
        let verses = (1..=286).map(|n| verse(n, &["w"])).collect();
        let mut provider = FixtureProvider::with_chapter(chapter(2, verses));
        provider.latency = Some(Duration::from_millis(5));

        let session = FlashcardSession::build(&provider, 2, "en").await.unwrap();

        assert_eq!(session.len(), 286);
        assert_eq!(provider.calls().len(), 286);
        let peak = provider.peak_in_flight.load(Ordering::SeqCst);
        assert!(peak <= MAX_CONCURRENT_LOOKUPS, "peak in flight was {peak}");
        assert!(peak > 1);
        assert_eq!(session.cards()[285].verse_translation_text, "English 2:286");
    }

    #[tokio::test]
    async fn test_build_empty_chapter() {
        let provider = FixtureProvider::with_chapter(chapter(9, vec![]));

        let session = FlashcardSession::build(&provider, 9, "en").await.unwrap();

        assert!(session.is_empty());
        assert!(session.current().is_none());
        assert_eq!(
            session.progress(),
            Progress {
                position: 0,
                total: 0,
                fraction: 0.0
            }
        );
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn test_build_unknown_language_uses_hilali() {
        let provider = FixtureProvider::with_chapter(chapter(1, vec![verse(1, &["X"])]));

        let session = FlashcardSession::build(&provider, 1, "fr").await.unwrap();

        assert_eq!(session.language(), Language::English);
        assert_eq!(session.cards()[0].verse_translation_text, "English 1:1");
    }

    #[tokio::test]
    async fn test_build_missing_translation_key() {
        let provider = FixtureProvider::with_chapter(chapter(1, vec![verse(1, &["X"])]));

        let session = FlashcardSession::build(&provider, 1, "zh").await.unwrap();

        assert_eq!(session.cards()[0].verse_translation_text, TRANSLATION_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_build_unknown_chapter_is_content_unavailable() {
        let provider = FixtureProvider::default();

        let err = FlashcardSession::build(&provider, 42, "en").await.unwrap_err();

        match err {
            FlashcardError::ContentUnavailable { chapter, source } => {
                assert_eq!(chapter, 42);
                assert!(matches!(source, ContentError::NotFound(_)));
            }
        }
    }

    #[tokio::test]
    async fn test_build_translation_failure_is_content_unavailable() {
        let mut provider =
            FixtureProvider::with_chapter(chapter(4, vec![verse(1, &["a"]), verse(2, &["b"])]));
        provider.failing_verse = Some(2);

        let err = FlashcardSession::build(&provider, 4, "en").await.unwrap_err();

        assert!(err.to_string().contains("chapter 4"));
        assert!(err.to_string().contains("connection reset"));
    }

    // ============================================================================
    // shuffle
    // ============================================================================

    #[test]
    fn test_shuffle_is_permutation() {
        let mut session = session_of(&["a", "b", "c", "d", "e", "f", "g", "h"]);
        let mut before = words(&session);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            session.shuffle_with(&mut rng);
            let mut after = words(&session);
            assert_eq!(after.len(), before.len());
            after.sort();
            before.sort();
            assert_eq!(after, before);
        }
    }

    #[test]
    fn test_shuffle_resets_position_and_flip() {
        let mut session = session_of(&["a", "b", "c"]);
        session.next();
        session.next();
        session.flip();

        session.shuffle_with(&mut StdRng::seed_from_u64(1));

        assert_eq!(session.current_index(), 0);
        assert!(!session.is_flipped());
    }

    #[test]
    fn test_shuffle_reaches_every_arrangement() {
        let mut session = session_of(&["a", "b", "c"]);
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = BTreeSet::new();

        for _ in 0..200 {
            session.shuffle_with(&mut rng);
            seen.insert(words(&session).concat());
        }

        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_shuffle_thread_rng_keeps_cards() {
        let mut session = session_of(&["a", "b"]);
        session.shuffle();
        let mut after = words(&session);
        after.sort();
        assert_eq!(after, vec!["a", "b"]);
    }

    // ============================================================================
    // navigation
    // ============================================================================

    #[test]
    fn test_next_wraps_from_last_to_first() {
        let mut session = session_of(&["X", "Y", "Z"]);
        session.next();
        session.next();
        assert_eq!(session.current_index(), 2);

        session.next();

        assert_eq!(session.current_index(), 0);
        assert_eq!(session.current().unwrap().arabic_text, "X");
    }

    #[test]
    fn test_previous_wraps_from_first_to_last() {
        let mut session = session_of(&["X", "Y", "Z"]);

        session.previous();

        assert_eq!(session.current_index(), 2);
        assert_eq!(session.progress().position, 3);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let mut session = session_of(&["a", "b", "c", "d", "e"]);
        for start in 0..session.len() {
            while session.current_index() != start {
                session.next();
            }
            for _ in 0..session.len() {
                session.next();
            }
            assert_eq!(session.current_index(), start);
        }
    }

    #[test]
    fn test_previous_undoes_next() {
        let mut session = session_of(&["a", "b", "c", "d"]);
        for _ in 0..session.len() {
            let start = session.current_index();
            session.next();
            session.previous();
            assert_eq!(session.current_index(), start);
            session.next();
        }
    }

    #[test]
    fn test_flip_twice_restores_face() {
        let mut session = session_of(&["a"]);
        session.flip();
        assert!(session.is_flipped());
        session.flip();
        assert!(!session.is_flipped());
    }

    #[test]
    fn test_moving_shows_front_face() {
        let mut session = session_of(&["a", "b"]);
        session.flip();
        session.next();
        assert!(!session.is_flipped());

        session.flip();
        session.previous();
        assert!(!session.is_flipped());
    }

    #[test]
    fn test_reset_returns_to_first_card_keeping_order_and_flip() {
        let mut session = session_of(&["a", "b", "c"]);
        session.shuffle_with(&mut StdRng::seed_from_u64(3));
        let order = words(&session);
        session.next();
        session.next();
        session.flip();

        session.reset();

        assert_eq!(session.current_index(), 0);
        assert_eq!(words(&session), order);
        assert!(session.is_flipped());
    }

    #[test]
    fn test_empty_deck_operations_are_noops() {
        let mut session = FlashcardSession::from_deck(vec![], 1, None, Language::English);

        session.next();
        session.previous();
        session.flip();
        session.shuffle();
        session.reset();

        assert!(session.current().is_none());
        assert!(!session.is_flipped());
        assert_eq!(session.progress().total, 0);
        assert_eq!(session.progress().position, 0);
        assert_eq!(session.progress().fraction, 0.0);
    }

    #[test]
    fn test_progress_tracks_position() {
        let mut session = session_of(&["a", "b", "c", "d"]);
        session.next();
        let progress = session.progress();
        assert_eq!(progress.position, 2);
        assert_eq!(progress.total, 4);
        assert_eq!(progress.percent(), 50.0);
    }

    // ============================================================================
    // SessionSlot
    // ============================================================================

    #[test]
    fn test_slot_installs_current_build() {
        let mut slot = SessionSlot::new();
        let ticket = slot.begin();

        let outcome = slot.install(ticket, Ok(session_of(&["a"]))).unwrap();

        assert_eq!(outcome, Installed::Current);
        assert_eq!(slot.session().unwrap().len(), 1);
    }

    #[test]
    fn test_slot_latest_started_build_wins() {
        let mut slot = SessionSlot::new();
        let first = slot.begin();
        let second = slot.begin();

        // The second build finishes first; the first one lands afterwards.
        slot.install(second, Ok(session_of(&["new"]))).unwrap();
        let outcome = slot.install(first, Ok(session_of(&["old", "old"]))).unwrap();

        assert_eq!(outcome, Installed::Stale);
        assert_eq!(words(slot.session().unwrap()), vec!["new"]);
    }

    #[test]
    fn test_slot_failed_build_keeps_previous_session() {
        let mut slot = SessionSlot::new();
        let ticket = slot.begin();
        slot.install(ticket, Ok(session_of(&["kept"]))).unwrap();

        let ticket = slot.begin();
        let result = slot.install(
            ticket,
            Err(FlashcardError::ContentUnavailable {
                chapter: 2,
                source: ContentError::Network("timeout".to_string()),
            }),
        );

        assert!(result.is_err());
        assert_eq!(words(slot.session().unwrap()), vec!["kept"]);
    }

    #[test]
    fn test_slot_session_mut_drives_navigation() {
        let mut slot = SessionSlot::new();
        let ticket = slot.begin();
        slot.install(ticket, Ok(session_of(&["a", "b"]))).unwrap();

        slot.session_mut().unwrap().next();

        assert_eq!(slot.session().unwrap().current_index(), 1);
    }
}
