//! Parsing of `chapter:verse` references typed on the command line.

use regex::Regex;
use std::sync::OnceLock;

pub const CHAPTER_COUNT: u32 = 114;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ReferenceError {
    #[error("Invalid verse reference: {0} (expected CHAPTER:VERSE, e.g. 2:255)")]
    Malformed(String),

    #[error("Please enter a valid chapter number (1-{CHAPTER_COUNT}), got {0}")]
    ChapterOutOfRange(u32),

    #[error("Verse numbers start at 1, got {0}")]
    VerseOutOfRange(u32),
}

fn reference_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*(\d{1,3})\s*[:. ]\s*(\d{1,3})\s*$").unwrap())
}

/// Check that `chapter` names one of the 114 chapters
pub fn validate_chapter(chapter: u32) -> Result<u32, ReferenceError> {
    if chapter == 0 || chapter > CHAPTER_COUNT {
        return Err(ReferenceError::ChapterOutOfRange(chapter));
    }
    Ok(chapter)
}

/// Parse `2:255`, `2.255` or `2 255` into `(chapter, verse)`
pub fn parse_reference(input: &str) -> Result<(u32, u32), ReferenceError> {
    let caps = reference_regex()
        .captures(input)
        .ok_or_else(|| ReferenceError::Malformed(input.to_string()))?;

    // Both groups are at most three digits, so they always fit in a u32.
    let chapter: u32 = caps[1]
        .parse()
        .map_err(|_| ReferenceError::Malformed(input.to_string()))?;
    let verse: u32 = caps[2]
        .parse()
        .map_err(|_| ReferenceError::Malformed(input.to_string()))?;

    validate_chapter(chapter)?;
    if verse == 0 {
        return Err(ReferenceError::VerseOutOfRange(verse));
    }

    Ok((chapter, verse))
}
