use crate::api::{ApiClient, ArabicQuery, TranslationQuery};
use crate::prelude::{eprintln, print, println, *};
use colored::Colorize;
use qurancards_core::content::{ArabicSearchResults, TranslationSearchResults};
use qurancards_core::format::decode_entities;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ArabicOptions {
    /// Arabic text to search for
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Match type understood by the API
    #[arg(long = "type", value_name = "TYPE")]
    pub search_type: Option<String>,

    /// Match diacritics exactly instead of normalizing them
    #[arg(long)]
    pub no_normalize: bool,

    /// Maximum number of results
    #[arg(short, long, env = "QURAN_SEARCH_LIMIT", default_value = "20")]
    pub limit: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct TranslationOptions {
    /// Text to search for inside the translation
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Translation language code (en, ms, zh, ta)
    #[arg(long, default_value = "en")]
    pub lang: String,

    /// Match type understood by the API
    #[arg(long = "type", value_name = "TYPE")]
    pub search_type: Option<String>,

    /// Include the Arabic text of every hit
    #[arg(long)]
    pub include_arabic: bool,

    /// Maximum number of results
    #[arg(short, long, env = "QURAN_SEARCH_LIMIT", default_value = "20")]
    pub limit: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run_arabic(options: ArabicOptions, global: crate::Global) -> Result<()> {
    let query = options.query.trim();
    if query.is_empty() {
        return Err(Error::InvalidInput("Please enter an Arabic search query".to_string()).into());
    }

    let query = ArabicQuery {
        query: query.to_string(),
        search_type: options.search_type.clone(),
        normalize: !options.no_normalize,
        limit: options.limit,
    };

    if global.verbose {
        eprintln!("Search parameters: {:?}", query.params());
    }

    let client = ApiClient::from_global(&global)?;
    let results = client
        .search_arabic(&query)
        .await
        .context("Failed to search Arabic text")?;

    if options.json {
        println!("{}", to_pretty_json(&results)?);
    } else {
        print!("{}", format_arabic_results(&results));
    }

    Ok(())
}

pub async fn run_translation(options: TranslationOptions, global: crate::Global) -> Result<()> {
    let query = options.query.trim();
    if query.is_empty() {
        return Err(Error::InvalidInput("Please enter a search query".to_string()).into());
    }

    let query = TranslationQuery {
        query: query.to_string(),
        lang: options.lang.clone(),
        search_type: options.search_type.clone(),
        include_arabic: options.include_arabic,
        limit: options.limit,
    };

    if global.verbose {
        eprintln!("Search parameters: {:?}", query.params());
    }

    let client = ApiClient::from_global(&global)?;
    let results = client
        .search_translation(&query)
        .await
        .context("Failed to search translations")?;

    if options.json {
        println!("{}", to_pretty_json(&results)?);
    } else {
        print!("{}", format_translation_results(&results));
    }

    Ok(())
}

fn format_arabic_results(results: &ArabicSearchResults) -> String {
    let mut result = String::new();

    result.push_str(&format!(
        "\n{}\n",
        format!(
            "Found {} results for \"{}\" (Type: {}, Normalize: {}){}",
            results.result_count,
            results.query,
            results.search_type,
            results.normalize,
            if results.has_more {
                " - More results available"
            } else {
                ""
            }
        )
        .bright_cyan()
    ));

    if results.results.is_empty() {
        result.push_str(&format!("\n{}\n", "No results found.".yellow()));
        return result;
    }

    for hit in &results.results {
        result.push_str(&format!(
            "\n{} {}\n",
            format!(
                "Chapter {} ({}), Verse {}",
                hit.chapter_number,
                hit.chapter_name.as_deref().unwrap_or("-"),
                hit.verse_number
            )
            .yellow()
            .bold(),
            hit.location
                .as_deref()
                .map(|l| format!("[{l}]"))
                .unwrap_or_default()
                .bright_black()
        ));
        result.push_str(&format!("  {}\n", hit.verse_text.white().bold()));

        if !hit.matching_tokens.is_empty() {
            let tokens: Vec<&str> = hit.matching_tokens.iter().map(|t| t.text.as_str()).collect();
            result.push_str(&format!(
                "  {}: {}\n",
                "Matching tokens".green(),
                tokens.join("  ")
            ));
        }
    }

    result
}

fn format_translation_results(results: &TranslationSearchResults) -> String {
    let mut result = String::new();

    result.push_str(&format!(
        "\n{}\n",
        format!(
            "Found {} results for \"{}\" in {} (Translator: {}, Type: {}){}",
            results.result_count,
            results.query,
            results.language_name.as_deref().unwrap_or("-"),
            results.translator.as_deref().unwrap_or("-"),
            results.search_type.as_deref().unwrap_or("-"),
            if results.has_more {
                " - More results available"
            } else {
                ""
            }
        )
        .bright_cyan()
    ));

    if let Some(searched_in) = results
        .search_info
        .as_ref()
        .and_then(|info| info.searched_in.as_deref())
    {
        result.push_str(&format!("{}: {}\n", "Search Info".green(), searched_in));
    }

    if results.results.is_empty() {
        result.push_str(&format!("\n{}\n", "No results found.".yellow()));
        return result;
    }

    for hit in &results.results {
        let chapter_name = match (&hit.chapter_name, &hit.chapter_name_arabic) {
            (Some(name), Some(arabic)) => format!("{name} - {arabic}"),
            (Some(name), None) => name.clone(),
            (None, Some(arabic)) => arabic.clone(),
            (None, None) => "-".to_string(),
        };
        result.push_str(&format!(
            "\n{}\n",
            format!(
                "Chapter {} ({}), Verse {}",
                hit.chapter_number, chapter_name, hit.verse_number
            )
            .yellow()
            .bold()
        ));

        if let Some(arabic) = &hit.arabic {
            result.push_str(&format!("  {}\n", arabic.text.white().bold()));
        }
        if let Some(translation) = &hit.translation {
            result.push_str(&format!("  {}\n", decode_entities(translation.text())));
        }
    }

    result
}
