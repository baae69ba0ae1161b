//! Word check command
//!
//! Validates a single word against a root word without starting a game.

use crate::core::{ValidationOutcome, Word, WordValidator, normalize};
use crate::dictionary::Dictionary;

/// Result of checking one word
#[derive(Debug)]
pub struct CheckResult {
    pub root: String,
    pub word: String,
    /// `None` when the word was blank
    pub outcome: Option<ValidationOutcome>,
}

impl CheckResult {
    /// Score change this word would cause in a game
    #[must_use]
    pub fn score_delta(&self) -> i32 {
        self.outcome.map_or(0, ValidationOutcome::score_delta)
    }
}

/// Check `word` against `root`, treating `used` as already found
///
/// # Errors
///
/// Returns an error if:
/// - The root is blank or not a single word
/// - The dictionary lookup fails
pub fn check_word<D: Dictionary>(
    root: &str,
    used: &[String],
    word: &str,
    validator: &WordValidator<D>,
) -> Result<CheckResult, String> {
    let root_word = Word::new(root).map_err(|e| format!("Invalid root word: {e}"))?;
    let used: Vec<String> = used.iter().map(|w| normalize(w)).collect();

    let outcome = validator
        .validate(&root_word, &used, word)
        .map_err(|e| e.to_string())?;

    Ok(CheckResult {
        root: root_word.text().to_string(),
        word: normalize(word),
        outcome,
    })
}
