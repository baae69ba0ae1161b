//! Word Scramble
//!
//! A word game: make as many words as you can from the letters of a random
//! eight-letter root word. Words must be at least three letters long, use each
//! root letter at most once, be new, and be known to the dictionary.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::{ValidationOutcome, Word, WordValidator};
//! use word_scramble::dictionary::{Locale, WordListDictionary};
//! use word_scramble::session::GameSession;
//!
//! let dictionary = WordListDictionary::from_words(["plate"], Locale::default());
//! let validator = WordValidator::new(dictionary);
//!
//! let mut session = GameSession::new(Word::new("plates").unwrap());
//! let outcome = session.submit_word("Plate", &validator).unwrap();
//!
//! assert_eq!(outcome, Some(ValidationOutcome::Accepted));
//! assert_eq!(session.score(), 1);
//! ```

// Core domain types
pub mod core;

// Dictionary lookups
pub mod dictionary;

// Word lists
pub mod wordlists;

// Game state
pub mod session;

// Settings and logging
pub mod config;
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
