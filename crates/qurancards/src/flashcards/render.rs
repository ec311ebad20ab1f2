use colored::Colorize;
use qurancards_core::flashcard::FlashcardSession;
use qurancards_core::format::{chapter_label, decode_entities, progress_bar};

const BAR_WIDTH: usize = 30;

/// Chapter, deck size and language of the session
pub fn format_stats(session: &FlashcardSession) -> String {
    format!(
        "{}: {} | {}: {} | {}: {}\n",
        "Chapter".green(),
        chapter_label(session.chapter(), session.chapter_name()).bright_white(),
        "Total words".green(),
        session.len().to_string().bright_yellow(),
        "Language".green(),
        session.language().display_name().bright_white()
    )
}

/// The current card, front or back depending on the flip state, plus progress
pub fn format_card(session: &FlashcardSession) -> String {
    let Some(card) = session.current() else {
        return format!("\n{}\n", "This chapter has no words to study.".yellow());
    };

    let mut result = String::new();
    result.push_str(&format!("\n{}\n", "-".repeat(60).bright_black()));
    result.push_str(&format!("    {}\n", card.arabic_text.bright_white().bold()));
    result.push_str(&format!(
        "    {} {} | {}\n",
        "Location".green(),
        card.location.to_string().cyan(),
        card.position_label.cyan()
    ));

    if session.is_flipped() {
        result.push_str(&format!("\n    {}\n", "Verse Translation:".bright_white().bold()));
        result.push_str(&format!(
            "    {}\n",
            decode_entities(&card.verse_translation_text)
        ));
        result.push_str(&format!("\n    {}\n", "Verse:".bright_white().bold()));
        result.push_str(&format!("    {}\n", card.verse_arabic_text));
    } else {
        result.push_str(&format!("\n    {}\n", "(f or space to flip)".bright_black()));
    }

    result.push_str(&format!("{}\n", "-".repeat(60).bright_black()));
    result.push_str(&format_progress(session));
    result
}

pub fn format_progress(session: &FlashcardSession) -> String {
    let progress = session.progress();
    format!(
        "{} / {} {} {:.0}%\n",
        progress.position,
        progress.total,
        progress_bar(progress.fraction, BAR_WIDTH).bright_cyan(),
        progress.percent()
    )
}

pub fn format_help() -> String {
    let mut result = String::new();
    result.push_str(&format!("\n{}\n", "Commands".bright_white().bold()));
    for (keys, action) in [
        ("n, <enter>", "next card"),
        ("p", "previous card"),
        ("f, <space>", "flip card"),
        ("s", "shuffle deck"),
        ("r", "back to the first card"),
        ("o <chapter>", "study another chapter"),
        ("h", "show this help"),
        ("q", "quit"),
    ] {
        result.push_str(&format!("  {:<12} {}\n", keys.cyan(), action));
    }
    result
}
