use crate::api::ApiClient;
use crate::prelude::{print, println, *};
use colored::Colorize;
use qurancards_core::content::{VerseComparison, VerseDetail};
use qurancards_core::format::decode_entities;
use qurancards_core::reference::parse_reference;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct VerseOptions {
    /// Verse reference as CHAPTER:VERSE (e.g. 2:255)
    #[arg(value_name = "REFERENCE")]
    pub reference: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct CompareOptions {
    /// Verse reference as CHAPTER:VERSE (e.g. 1:1)
    #[arg(value_name = "REFERENCE")]
    pub reference: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run_verse(options: VerseOptions, global: crate::Global) -> Result<()> {
    let (chapter, verse) = parse_reference(&options.reference).map_err(Error::from)?;
    let client = ApiClient::from_global(&global)?;

    let detail = client
        .verse(chapter, verse)
        .await
        .map_err(Error::from)
        .with_context(|| format!("Failed to load verse {chapter}:{verse}"))?;

    if options.json {
        println!("{}", to_pretty_json(&detail)?);
    } else {
        print!("{}", format_verse_text(&detail));
    }

    Ok(())
}

pub async fn run_compare(options: CompareOptions, global: crate::Global) -> Result<()> {
    let (chapter, verse) = parse_reference(&options.reference).map_err(Error::from)?;
    let client = ApiClient::from_global(&global)?;

    let comparison = client
        .compare(chapter, verse)
        .await
        .map_err(Error::from)
        .with_context(|| format!("Failed to compare translations for {chapter}:{verse}"))?;

    if options.json {
        println!("{}", to_pretty_json(&comparison)?);
    } else {
        print!("{}", format_comparison_text(&comparison));
    }

    Ok(())
}

fn format_verse_text(detail: &VerseDetail) -> String {
    let mut result = String::new();

    result.push_str(&format!(
        "\n{}\n",
        format!(
            "Chapter {}, Verse {}",
            detail.chapter_number, detail.verse_number
        )
        .bright_cyan()
        .bold()
    ));
    result.push_str(&format!("{}\n", detail.text.white().bold()));

    if let Some(location) = &detail.location {
        result.push_str(&format!("{}: {}\n", "Location".green(), location));
    }

    if !detail.tokens.is_empty() {
        result.push_str(&format!(
            "\n{}\n",
            format!("Tokens ({} total):", detail.tokens.len())
                .bright_white()
                .bold()
        ));
        for token in &detail.tokens {
            result.push_str(&format!(
                "  {} {}\n",
                format!("{:>3}.", token.number).yellow(),
                token.text
            ));
        }
    }

    result
}

fn format_comparison_text(comparison: &VerseComparison) -> String {
    let mut result = String::new();

    result.push_str(&format!(
        "\n{}\n",
        format!(
            "Chapter {}, Verse {}",
            comparison.chapter_number, comparison.verse_number
        )
        .bright_cyan()
        .bold()
    ));

    if let Some(arabic) = &comparison.arabic {
        result.push_str(&format!("{}\n", arabic.text.white().bold()));
    }

    if comparison.translations.is_empty() {
        result.push_str(&format!(
            "\n{}\n",
            "Translations not available for this verse.".yellow()
        ));
    }

    for (key, translation) in &comparison.translations {
        let language = translation.language_name.as_deref().unwrap_or(key.as_str());
        result.push_str(&format!(
            "\n{}: {}\n",
            language.bright_white().bold(),
            decode_entities(&translation.text)
        ));
        if let Some(translator) = &translation.translator {
            result.push_str(&format!(
                "  {}: {} ({})\n",
                "Translator".green(),
                translator,
                key.bright_black()
            ));
        }
    }

    result
}
