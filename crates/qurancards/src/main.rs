use crate::prelude::{eprintln, *};
use clap::Parser;

mod api;
mod catalog;
mod chapters;
mod config;
mod error;
mod flashcards;
mod prelude;
mod search;
mod verse;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Browse the Quran text and translation API and study chapter vocabulary with flashcards"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Base URL of the Quran API
    #[clap(
        long,
        env = "QURAN_API_BASE",
        global = true,
        default_value = config::DEFAULT_API_BASE
    )]
    api_base: String,

    /// Request timeout in seconds
    #[clap(long, env = "QURAN_API_TIMEOUT", global = true, default_value = "30")]
    timeout: u64,

    /// Whether to display additional information.
    #[clap(long, env = "QURANCARDS_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Show API information and corpus counts
    Info(catalog::InfoOptions),

    /// List all chapters
    Chapters(chapters::ListOptions),

    /// Show a chapter with its verses
    Chapter(chapters::ChapterOptions),

    /// Show a verse and its tokens (e.g. 2:255)
    Verse(verse::VerseOptions),

    /// Compare every translation of a verse (e.g. 1:1)
    Compare(verse::CompareOptions),

    /// Search the Arabic text
    Search(search::ArabicOptions),

    /// Search inside a translation
    SearchTranslation(search::TranslationOptions),

    /// List available translations
    Translations(catalog::TranslationsOptions),

    /// Show corpus statistics
    Stats(catalog::StatsOptions),

    /// Study the words of a chapter with flashcards
    Flashcards(flashcards::FlashcardOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    if app.global.verbose {
        eprintln!("Quran API Base: {}", app.global.api_base);
    }

    match app.command {
        SubCommands::Info(options) => crate::catalog::run_info(options, app.global).await,
        SubCommands::Chapters(options) => crate::chapters::run_list(options, app.global).await,
        SubCommands::Chapter(options) => crate::chapters::run_chapter(options, app.global).await,
        SubCommands::Verse(options) => crate::verse::run_verse(options, app.global).await,
        SubCommands::Compare(options) => crate::verse::run_compare(options, app.global).await,
        SubCommands::Search(options) => crate::search::run_arabic(options, app.global).await,
        SubCommands::SearchTranslation(options) => {
            crate::search::run_translation(options, app.global).await
        }
        SubCommands::Translations(options) => {
            crate::catalog::run_translations(options, app.global).await
        }
        SubCommands::Stats(options) => crate::catalog::run_stats(options, app.global).await,
        SubCommands::Flashcards(options) => crate::flashcards::run(options, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
