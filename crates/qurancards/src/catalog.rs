use crate::api::ApiClient;
use crate::prelude::{print, println, *};
use colored::Colorize;
use prettytable::row;
use qurancards_core::content::{ApiInfo, CorpusStats, TranslationInfo};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct InfoOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct TranslationsOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct StatsOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run_info(options: InfoOptions, global: crate::Global) -> Result<()> {
    let client = ApiClient::from_global(&global)?;
    let info = client.info().await.context("Failed to load API info")?;

    if options.json {
        println!("{}", to_pretty_json(&info)?);
    } else {
        print!("{}", format_info_text(&info)?);
    }

    Ok(())
}

pub async fn run_translations(options: TranslationsOptions, global: crate::Global) -> Result<()> {
    let client = ApiClient::from_global(&global)?;
    let translations = client
        .translations()
        .await
        .context("Failed to load translations")?;

    if options.json {
        println!("{}", to_pretty_json(&translations)?);
    } else {
        translations_table(&translations).printstd();
    }

    Ok(())
}

pub async fn run_stats(options: StatsOptions, global: crate::Global) -> Result<()> {
    let client = ApiClient::from_global(&global)?;
    let stats = client.stats().await.context("Failed to load statistics")?;

    if options.json {
        println!("{}", to_pretty_json(&stats)?);
    } else {
        print!("{}", format_stats_text(&stats));
    }

    Ok(())
}

fn format_info_text(info: &ApiInfo) -> Result<String> {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "API INFO".bright_cyan().bold()));
    result.push_str(&format!(
        "{}: {} | {}: {} | {}: {}\n",
        "Chapters".green(),
        info.chapter_count.to_string().bright_yellow(),
        "Verses".green(),
        info.verse_count.to_string().bright_yellow(),
        "Tokens".green(),
        info.token_count.to_string().bright_yellow()
    ));

    if !info.extra.is_empty() {
        result.push_str(&format!("\n{}\n", "API Details:".bright_white().bold()));
        result.push_str(&to_pretty_json(&info.extra)?);
        result.push('\n');
    }

    Ok(result)
}

fn translations_table(translations: &[TranslationInfo]) -> prettytable::Table {
    let mut table = new_table();
    table.set_titles(row!["Key", "Name", "Language", "Translator", "Source"]);

    for translation in translations {
        table.add_row(row![
            translation.key,
            translation.name,
            format!("{} ({})", translation.language_name, translation.language),
            translation.translator,
            translation.source.as_deref().unwrap_or("-"),
        ]);
    }

    table
}

fn format_stats_text(stats: &CorpusStats) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "CORPUS STATISTICS".bright_cyan().bold()));
    result.push_str(&format!(
        "{}: {}\n{}: {}\n{}: {}\n{}: {:.2}\n",
        "Total Chapters".green(),
        stats.total_chapters,
        "Total Verses".green(),
        stats.total_verses,
        "Total Tokens".green(),
        stats.total_tokens,
        "Avg Verses/Chapter".green(),
        stats.average_verses_per_chapter
    ));
    if let Some(avg) = stats.average_tokens_per_verse {
        result.push_str(&format!("{}: {:.2}\n", "Avg Tokens/Verse".green(), avg));
    }

    result.push_str(&format!(
        "\n{} Chapter {}: {} ({} verses)\n",
        "Longest:".bright_white().bold(),
        stats.longest_chapter.number,
        stats.longest_chapter.name,
        stats.longest_chapter.verses
    ));
    result.push_str(&format!(
        "{} Chapter {}: {} ({} verses)\n",
        "Shortest:".bright_white().bold(),
        stats.shortest_chapter.number,
        stats.shortest_chapter.name,
        stats.shortest_chapter.verses
    ));

    result
}
