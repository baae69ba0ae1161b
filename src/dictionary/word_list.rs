//! Word-list backed dictionary
//!
//! Holds every known word in a hash set. Built from the embedded English list by
//! default, or from any file with one word per line.

use super::{Dictionary, DictionaryError, Locale};
use crate::core::normalize;
use crate::wordlists::{DICTIONARY, WordSource, loader};
use rustc_hash::FxHashSet;
use std::io;
use tracing::{debug, instrument};

/// A dictionary backed by an in-memory word set for a single locale
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    words: FxHashSet<String>,
    locale: Locale,
}

impl WordListDictionary {
    /// Build a dictionary from any list of words
    ///
    /// Entries are normalized and blank entries are dropped.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::{Dictionary, Locale, WordListDictionary};
    ///
    /// let dict = WordListDictionary::from_words(["Plate", "silk"], Locale::default());
    /// assert_eq!(dict.is_recognized("plate", &Locale::default()), Ok(true));
    /// assert_eq!(dict.is_recognized("plaet", &Locale::default()), Ok(false));
    /// ```
    pub fn from_words<I, S>(words: I, locale: Locale) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| normalize(word.as_ref()))
            .filter(|word| !word.is_empty())
            .collect();

        Self { words, locale }
    }

    /// The English dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(DICTIONARY.iter().copied(), Locale::default())
    }

    /// Load a dictionary from a word source
    ///
    /// The embedded list is English whatever `locale` says; only file sources take
    /// on the requested locale.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if a file source cannot be read.
    #[instrument]
    pub fn load(source: &WordSource, locale: Locale) -> io::Result<Self> {
        let dictionary = match source {
            WordSource::Embedded => Self::embedded(),
            WordSource::File(path) => {
                let words = loader::load_lines(path)?;
                Self::from_words(words, locale)
            }
        };

        debug!(words = dictionary.len(), "dictionary loaded");
        Ok(dictionary)
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Every word in the dictionary, in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    #[must_use]
    pub const fn locale(&self) -> &Locale {
        &self.locale
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordListDictionary {
    fn is_recognized(&self, word: &str, locale: &Locale) -> Result<bool, DictionaryError> {
        if !self.locale.matches(locale) {
            return Err(DictionaryError::UnsupportedLocale {
                requested: locale.clone(),
                available: self.locale.clone(),
            });
        }

        Ok(self.contains(word))
    }
}
