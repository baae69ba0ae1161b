//! Solutions command
//!
//! Scans a word list for every word the validator would accept for a root word,
//! as if no words had been used yet.

use crate::core::{ValidationOutcome, Word, WordValidator};
use crate::dictionary::{Dictionary, DictionaryError, WordListDictionary};
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::{debug, instrument};

/// Every acceptable word for one root
#[derive(Debug)]
pub struct SolutionsResult {
    pub root: String,
    /// Longest first, then alphabetical
    pub words: Vec<String>,
    pub scanned: usize,
    pub duration: Duration,
}

impl SolutionsResult {
    /// Words grouped by length, longest first
    #[must_use]
    pub fn by_length(&self) -> Vec<(usize, Vec<&str>)> {
        let mut groups: BTreeMap<usize, Vec<&str>> = BTreeMap::new();
        for word in &self.words {
            groups
                .entry(word.chars().count())
                .or_default()
                .push(word.as_str());
        }
        groups.into_iter().rev().collect()
    }

    /// Highest score reachable for this root
    #[must_use]
    pub fn max_score(&self) -> usize {
        self.words.len()
    }
}

/// Find every word in `candidates` that would be accepted for `root`
///
/// # Errors
///
/// Returns the first dictionary error hit during the scan.
///
/// # Examples
/// ```
/// use word_scramble::commands::find_solutions;
/// use word_scramble::core::{Word, WordValidator};
/// use word_scramble::dictionary::{Locale, WordListDictionary};
///
/// let words = ["loan", "loop", "ball", "boon", "balloon"];
/// let validator = WordValidator::new(WordListDictionary::from_words(words, Locale::default()));
/// let root = Word::new("balloon").unwrap();
///
/// let found = find_solutions(&root, &words, &validator).unwrap();
/// assert_eq!(found, ["ball", "boon", "loan"]);
/// ```
pub fn find_solutions<D: Dictionary + Sync>(
    root: &Word,
    candidates: &[&str],
    validator: &WordValidator<D>,
) -> Result<Vec<String>, DictionaryError> {
    scan(root, candidates, validator, ProgressBar::hidden())
}

/// Find every dictionary word that can be made from `root`, with a progress bar
///
/// # Errors
///
/// Returns an error if the root is not a single word or the dictionary fails.
///
/// # Panics
///
/// Panics if the progress bar template is malformed (it is a constant).
#[instrument(skip(validator))]
pub fn run_solutions(
    root: &str,
    validator: &WordValidator<WordListDictionary>,
    show_progress: bool,
) -> Result<SolutionsResult, String> {
    let root_word = Word::new(root).map_err(|e| format!("Invalid root word: {e}"))?;
    let candidates: Vec<&str> = validator.dictionary().words().collect();

    let pb = if show_progress {
        let pb = ProgressBar::new(candidates.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb.set_message(format!("scanning for '{root_word}'"));
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let words = scan(&root_word, &candidates, validator, pb.clone()).map_err(|e| e.to_string())?;
    pb.finish_and_clear();

    debug!(found = words.len(), scanned = candidates.len(), "scan complete");

    Ok(SolutionsResult {
        root: root_word.text().to_string(),
        words,
        scanned: candidates.len(),
        duration: start.elapsed(),
    })
}

fn scan<D: Dictionary + Sync>(
    root: &Word,
    candidates: &[&str],
    validator: &WordValidator<D>,
    pb: ProgressBar,
) -> Result<Vec<String>, DictionaryError> {
    let none_used: &[&str] = &[];

    let verdicts = candidates
        .par_iter()
        .progress_with(pb)
        .map(|&word| {
            validator
                .validate(root, none_used, word)
                .map(|outcome| (word, outcome))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut words: Vec<String> = verdicts
        .into_iter()
        .filter(|(_, outcome)| outcome.is_some_and(ValidationOutcome::is_accepted))
        .map(|(word, _)| word.to_string())
        .collect();

    words.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
    words.dedup();

    Ok(words)
}
