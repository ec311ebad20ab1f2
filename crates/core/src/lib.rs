//! Core library for qurancards
//!
//! This crate implements the **Functional Core** of the qurancards application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`qurancards_core`** (this crate): domain models, pure transformations and
//!   the flashcard session engine
//! - **`qurancards`**: HTTP access, terminal output and orchestration (the Imperative Shell)
//!
//! The only place this crate touches the outside world is through the
//! [`provider::ContentProvider`] trait, which the shell implements over HTTP and
//! tests implement over fixture data.
//!
//! # Module Organization
//!
//! - [`content`]: API response models (chapters, verses, translations, search, stats)
//! - [`flashcard`]: word-study deck construction, navigation and progress
//! - [`format`]: small text helpers shared by every output
//! - [`language`]: language codes and their translation keys
//! - [`provider`]: the content source abstraction used by flashcard builds
//! - [`reference`]: `chapter:verse` parsing and range checks
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use qurancards_core::flashcard::FlashcardSession;
//!
//! let mut session = FlashcardSession::build(&client, 112, "en").await?;
//! session.shuffle();
//!
//! for _ in 0..session.len() {
//!     if let Some(card) = session.current() {
//!         println!("{} ({})", card.arabic_text, card.location);
//!     }
//!     session.next();
//! }
//! ```

pub mod content;
pub mod flashcard;
pub mod format;
pub mod language;
pub mod provider;
pub mod reference;
