//! Word representation
//!
//! A Word stores a normalized (trimmed, lowercase) word as used for root words and
//! word list entries. Player input goes through [`normalize`] instead, since a
//! candidate may be anything the player typed.

use std::fmt;

/// Normalize raw player input: lowercase and strip surrounding whitespace
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Silk\n"), "silk");
/// assert_eq!(normalize("   "), "");
/// ```
#[must_use]
pub fn normalize(input: &str) -> String {
    input.to_lowercase().trim().to_string()
}

/// A normalized, non-empty single word
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    ContainsWhitespace,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::ContainsWhitespace => write!(f, "Word must not contain whitespace"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is normalized first, so surrounding whitespace and case are ignored.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Nothing is left after trimming
    /// - Whitespace remains inside the word
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::Word;
    ///
    /// let word = Word::new(" SilkWorm ").unwrap();
    /// assert_eq!(word.text(), "silkworm");
    ///
    /// assert!(Word::new("   ").is_err());
    /// assert!(Word::new("two words").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = normalize(text.as_ref());

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if text.chars().any(char::is_whitespace) {
            return Err(WordError::ContainsWhitespace);
        }

        Ok(Self { text })
    }

    /// Wrap a known-good word literal without validation
    pub(crate) fn from_trusted(text: &str) -> Self {
        Self {
            text: normalize(text),
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Always false; a `Word` is never empty
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
