//! Game configuration
//!
//! Resolved from command-line flags in `main.rs`; everything the commands need to
//! build a dictionary, a root word pool and a random source.

use crate::core::WordValidator;
use crate::dictionary::{Locale, WordListDictionary};
use crate::wordlists::{RootWordPool, WordSource};
use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Settings shared by every command
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    pub start_words: WordSource,
    pub dictionary: WordSource,
    pub locale: Locale,
    /// Fixed seed for root word selection; random when `None`
    pub seed: Option<u64>,
}

impl GameConfig {
    #[must_use]
    pub fn new(start_words: &str, dictionary: &str, locale: &str, seed: Option<u64>) -> Self {
        Self {
            start_words: WordSource::parse(start_words),
            dictionary: WordSource::parse(dictionary),
            locale: Locale::new(locale),
            seed,
        }
    }

    /// Random source for picking root words
    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }

    /// Root word pool; never fails, see [`RootWordPool::load`]
    #[must_use]
    pub fn root_pool(&self) -> RootWordPool {
        RootWordPool::load(&self.start_words)
    }

    /// Dictionary for the configured source and locale
    ///
    /// # Errors
    ///
    /// Returns an error if a dictionary file was given and cannot be read.
    pub fn load_dictionary(&self) -> Result<WordListDictionary> {
        WordListDictionary::load(&self.dictionary, self.locale.clone())
            .with_context(|| format!("Failed to load dictionary from {}", self.dictionary))
    }

    /// Validator over the configured dictionary
    ///
    /// # Errors
    ///
    /// See [`GameConfig::load_dictionary`].
    pub fn validator(&self) -> Result<WordValidator<WordListDictionary>> {
        let dictionary = self.load_dictionary()?;
        Ok(WordValidator::with_locale(dictionary, self.locale.clone()))
    }
}
