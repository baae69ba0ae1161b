//! Root word selection
//!
//! A game needs a root word even when the start-word list is missing or empty, so
//! loading never fails: it falls back to a fixed word instead.

use super::embedded::START_WORDS;
use super::loader::{load_from_file, words_from_slice};
use super::WordSource;
use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;
use tracing::{debug, instrument, warn};

/// Root word used when no start words can be loaded
pub const FALLBACK_ROOT_WORD: &str = "silkworm";

/// A non-empty pool of root words to start games with
#[derive(Debug, Clone)]
pub struct RootWordPool {
    words: Vec<Word>,
    fallback: bool,
}

impl RootWordPool {
    /// Build a pool from a list of words
    ///
    /// An empty list yields the fallback pool.
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        if words.is_empty() {
            warn!("start word list is empty, using fallback root word");
            return Self::fallback();
        }
        Self {
            words,
            fallback: false,
        }
    }

    /// Pool containing only [`FALLBACK_ROOT_WORD`]
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            words: vec![Word::from_trusted(FALLBACK_ROOT_WORD)],
            fallback: true,
        }
    }

    /// The start words compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(START_WORDS))
    }

    /// Load a pool from a word source
    ///
    /// An unreadable file is logged and replaced by the fallback pool rather than
    /// treated as an error.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::wordlists::{FALLBACK_ROOT_WORD, RootWordPool, WordSource};
    ///
    /// let pool = RootWordPool::load(&WordSource::File("/missing/start.txt".into()));
    /// assert_eq!(pool.len(), 1);
    /// assert_eq!(pool.words()[0].text(), FALLBACK_ROOT_WORD);
    /// ```
    #[instrument]
    pub fn load(source: &WordSource) -> Self {
        match source {
            WordSource::Embedded => Self::embedded(),
            WordSource::File(path) => match load_from_file(path) {
                Ok(words) => {
                    debug!(count = words.len(), "start words loaded");
                    Self::new(words)
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "could not read start words, using fallback root word");
                    Self::fallback()
                }
            },
        }
    }

    /// Pick a root word uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Word {
        self.words
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| Word::from_trusted(FALLBACK_ROOT_WORD))
    }

    /// Whether the start words could not be used and the fallback stands in
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        self.fallback
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; an empty list is replaced by the fallback
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for RootWordPool {
    fn default() -> Self {
        Self::embedded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn empty_list_falls_back() {
        let pool = RootWordPool::new(Vec::new());
        assert_eq!(pool.len(), 1);
        assert!(!pool.is_empty());
        assert_eq!(pool.words()[0].text(), FALLBACK_ROOT_WORD);
        assert!(pool.is_fallback());
    }

    #[test]
    fn missing_file_falls_back() {
        let pool = RootWordPool::load(&WordSource::File("/nonexistent/start.txt".into()));
        assert!(pool.is_fallback());
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pool.choose(&mut rng).text(), FALLBACK_ROOT_WORD);
    }

    #[test]
    fn embedded_pool_has_start_words() {
        let pool = RootWordPool::load(&WordSource::Embedded);
        assert_eq!(pool.len(), START_WORDS.len());
        assert!(!pool.is_fallback());
    }

    #[test]
    fn choose_returns_pool_member() {
        let pool = RootWordPool::new(words_from_slice(&["silkworm", "balloons", "plates"]));
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let word = pool.choose(&mut rng);
            assert!(pool.words().contains(&word));
        }
    }

    #[test]
    fn choose_is_deterministic_for_seed() {
        let pool = RootWordPool::embedded();

        let first: Vec<Word> = {
            let mut rng = StdRng::seed_from_u64(1234);
            (0..5).map(|_| pool.choose(&mut rng)).collect()
        };
        let second: Vec<Word> = {
            let mut rng = StdRng::seed_from_u64(1234);
            (0..5).map(|_| pool.choose(&mut rng)).collect()
        };

        assert_eq!(first, second);
    }

    #[test]
    fn choose_reaches_every_word() {
        let pool = RootWordPool::new(words_from_slice(&["silkworm", "balloons"]));
        assert!(!pool.is_fallback());
        let mut rng = StdRng::seed_from_u64(9);
        let picks: Vec<Word> = (0..200).map(|_| pool.choose(&mut rng)).collect();

        assert!(picks.iter().any(|w| w.text() == "silkworm"));
        assert!(picks.iter().any(|w| w.text() == "balloons"));
    }
}
