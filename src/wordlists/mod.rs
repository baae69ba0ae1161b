//! Word lists for the game
//!
//! Provides the embedded start words and dictionary compiled into the binary, plus
//! loading from files for custom lists.

mod embedded;
pub mod loader;
mod roots;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS, START_WORDS_COUNT};
pub use roots::{FALLBACK_ROOT_WORD, RootWordPool};

use std::fmt;
use std::path::PathBuf;

/// Where a word list comes from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WordSource {
    /// The list compiled into the binary
    #[default]
    Embedded,
    /// A text file with one word per line
    File(PathBuf),
}

impl WordSource {
    /// Parse a command-line value: `embedded` or a file path
    ///
    /// # Examples
    /// ```
    /// use word_scramble::wordlists::WordSource;
    ///
    /// assert_eq!(WordSource::parse("embedded"), WordSource::Embedded);
    /// assert_eq!(
    ///     WordSource::parse("words.txt"),
    ///     WordSource::File("words.txt".into())
    /// );
    /// ```
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "embedded" | "" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => f.write_str("embedded"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
