use crate::api::ApiClient;
use crate::prelude::{eprintln, print, println, *};
use colored::Colorize;
use prettytable::row;
use qurancards_core::content::{ChapterDetail, ChapterSummary};
use qurancards_core::format::chapter_label;
use qurancards_core::reference::validate_chapter;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ListOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ChapterOptions {
    /// Chapter number (1-114)
    #[arg(value_name = "CHAPTER")]
    pub chapter: u32,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run_list(options: ListOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Fetching chapter list...");
    }

    let client = ApiClient::from_global(&global)?;
    let chapters = client
        .chapters()
        .await
        .context("Failed to load chapters")?;

    if options.json {
        println!("{}", to_pretty_json(&chapters)?);
    } else {
        chapters_table(&chapters).printstd();
    }

    Ok(())
}

pub async fn run_chapter(options: ChapterOptions, global: crate::Global) -> Result<()> {
    let chapter = validate_chapter(options.chapter).map_err(Error::from)?;

    if global.verbose {
        eprintln!("Fetching chapter {chapter}...");
    }

    let client = ApiClient::from_global(&global)?;
    let detail = client
        .chapter(chapter)
        .await
        .map_err(Error::from)
        .with_context(|| format!("Failed to load chapter {chapter}"))?;

    if options.json {
        println!("{}", to_pretty_json(&detail)?);
    } else {
        print!("{}", format_chapter_text(&detail));
    }

    Ok(())
}

fn chapters_table(chapters: &[ChapterSummary]) -> prettytable::Table {
    let mut table = new_table();
    table.set_titles(row!["#", "Name", "Verses", "Tokens"]);

    for chapter in chapters {
        table.add_row(row![
            chapter.number,
            chapter.name.as_deref().unwrap_or("-"),
            chapter.verse_count,
            chapter
                .token_count
                .map(|t| t.to_string())
                .unwrap_or_else(|| "-".to_string()),
        ]);
    }

    table
}

fn format_chapter_text(detail: &ChapterDetail) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!(
        "{}\n",
        format!(
            "CHAPTER {}",
            chapter_label(detail.number, detail.name.as_deref())
        )
        .bright_cyan()
        .bold()
    ));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!(
        "{}: {} | {}: {}\n",
        "Verses".green(),
        detail.verse_count.to_string().bright_yellow(),
        "Tokens".green(),
        detail.token_count.to_string().bright_yellow()
    ));

    if detail.verses.is_empty() {
        result.push_str(&format!("\n{}\n", "No verses returned.".yellow()));
    }

    for verse in &detail.verses {
        result.push_str(&format!(
            "\n{} {}\n",
            format!("[{}:{}]", detail.number, verse.number).yellow().bold(),
            verse.text.white().bold()
        ));
        let tokens = verse
            .token_count
            .unwrap_or(verse.tokens.len() as u32);
        result.push_str(&format!("    {}: {}\n", "Tokens".green(), tokens));
    }

    result.push_str(&format!(
        "\n{}: {}\n",
        "Study these words".bright_white().bold(),
        format!("qurancards flashcards {}", detail.number).cyan()
    ));
    result
}
