use crate::api::ApiClient;
use crate::prelude::{eprintln, print, println, *};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use qurancards_core::flashcard::{FlashcardSession, Installed, SessionSlot, WordCard};
use qurancards_core::language::Language;
use qurancards_core::reference::validate_chapter;
use serde::Serialize;
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

pub mod command;
pub mod render;

use command::{parse_command, StudyCommand};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct FlashcardOptions {
    /// Chapter number (1-114)
    #[arg(value_name = "CHAPTER")]
    pub chapter: u32,

    /// Translation language shown on the back of each card (en, ms, zh, ta)
    #[arg(short, long, env = "QURANCARDS_LANG", default_value = "en")]
    pub lang: String,

    /// Keep the words in verse order instead of shuffling them
    #[arg(long)]
    pub no_shuffle: bool,

    /// Print the deck as JSON instead of starting a study session
    #[arg(long)]
    pub json: bool,
}

/// Deck as printed by `--json`
#[derive(Debug, Serialize)]
pub struct DeckOutput<'a> {
    pub chapter: u32,
    pub chapter_name: Option<&'a str>,
    pub language: Language,
    pub translation_key: &'static str,
    pub total: usize,
    pub cards: &'a [WordCard],
}

impl<'a> DeckOutput<'a> {
    pub fn from_session(session: &'a FlashcardSession) -> Self {
        Self {
            chapter: session.chapter(),
            chapter_name: session.chapter_name(),
            language: session.language(),
            translation_key: session.language().translation_key(),
            total: session.len(),
            cards: session.cards(),
        }
    }
}

pub async fn run(options: FlashcardOptions, global: crate::Global) -> Result<()> {
    let chapter = validate_chapter(options.chapter).map_err(Error::from)?;
    let client = ApiClient::from_global(&global)?;
    let mut slot = SessionSlot::new();

    load_chapter(&client, &mut slot, chapter, &options.lang, global.verbose).await?;

    let session = slot
        .session_mut()
        .ok_or_eyre("No flashcard session was loaded")?;
    if !options.no_shuffle {
        session.shuffle();
    }

    if options.json {
        println!("{}", to_pretty_json(&DeckOutput::from_session(session))?);
        return Ok(());
    }

    study(&client, &mut slot, &options).await
}

/// Build a deck for `chapter` and make it the active session
///
/// On failure the previously active session, if any, stays in place.
async fn load_chapter(
    client: &ApiClient,
    slot: &mut SessionSlot,
    chapter: u32,
    lang: &str,
    verbose: bool,
) -> Result<Installed> {
    if verbose {
        eprintln!(
            "Building deck for chapter {chapter} ({})",
            Language::from_code(lang).translation_key()
        );
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Loading flashcards for chapter {chapter}..."));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let ticket = slot.begin();
    let result = FlashcardSession::build(client, chapter, lang).await;
    spinner.finish_and_clear();

    slot.install(ticket, result)
        .context("Failed to load flashcard data")
}

async fn study(client: &ApiClient, slot: &mut SessionSlot, options: &FlashcardOptions) -> Result<()> {
    if let Some(session) = slot.session() {
        print!("{}", render::format_stats(session));
        print!("{}", render::format_card(session));
    }
    println!("{}", "Type h for help, q to quit.".bright_black());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        anstream::stdout().flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            break;
        };

        let command = parse_command(&line);
        let Some(session) = slot.session_mut() else {
            break;
        };

        match command {
            StudyCommand::Next => session.next(),
            StudyCommand::Previous => session.previous(),
            StudyCommand::Flip => session.flip(),
            StudyCommand::Shuffle => session.shuffle(),
            StudyCommand::Reset => session.reset(),
            StudyCommand::Help => {
                print!("{}", render::format_help());
                continue;
            }
            StudyCommand::Quit => break,
            StudyCommand::Unknown(input) => {
                eprintln!("{} {input} (h for help)", "Unknown command:".yellow());
                continue;
            }
            StudyCommand::Open(chapter) => {
                let lang = session.language().code();
                match open_chapter(client, slot, chapter, lang, options).await {
                    Ok(()) => {
                        if let Some(session) = slot.session() {
                            print!("{}", render::format_stats(session));
                        }
                    }
                    Err(err) => eprintln!("{} {err:#}", "Error:".red().bold()),
                }
            }
        }

        if let Some(session) = slot.session() {
            print!("{}", render::format_card(session));
        }
    }

    Ok(())
}

async fn open_chapter(
    client: &ApiClient,
    slot: &mut SessionSlot,
    chapter: u32,
    lang: &str,
    options: &FlashcardOptions,
) -> Result<()> {
    let chapter = validate_chapter(chapter).map_err(Error::from)?;
    let installed = load_chapter(client, slot, chapter, lang, false).await?;

    if installed == Installed::Current && !options.no_shuffle {
        if let Some(session) = slot.session_mut() {
            session.shuffle();
        }
    }

    Ok(())
}
