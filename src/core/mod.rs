//! Core game rules
//!
//! Word normalization, letter multisets, validation outcomes and the validator
//! itself. Everything here is pure and has no terminal or file dependencies.

mod letters;
mod outcome;
mod validator;
mod word;

pub use letters::LetterPool;
pub use outcome::{Alert, ValidationOutcome};
pub use validator::{MIN_WORD_LENGTH, WordValidator, is_original, is_possible};
pub use word::{Word, WordError, normalize};
