//! Dictionary lookup
//!
//! The game only needs one question answered: is this a real word? [`Dictionary`]
//! is that capability, so any backend (embedded list, custom file, remote
//! spell-checker) can stand behind the validator.

mod word_list;

pub use word_list::WordListDictionary;

use std::fmt;

/// Something that can tell whether a word exists in a language
pub trait Dictionary {
    /// Whether `word` (already normalized) is a recognized word in `locale`
    ///
    /// # Errors
    ///
    /// Returns a `DictionaryError` when the lookup itself cannot be answered, as
    /// opposed to the word simply being unknown.
    fn is_recognized(&self, word: &str, locale: &Locale) -> Result<bool, DictionaryError>;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn is_recognized(&self, word: &str, locale: &Locale) -> Result<bool, DictionaryError> {
        (**self).is_recognized(word, locale)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Box<D> {
    fn is_recognized(&self, word: &str, locale: &Locale) -> Result<bool, DictionaryError> {
        (**self).is_recognized(word, locale)
    }
}

/// A language tag such as `en` or `en-GB`
///
/// Lookups compare only the primary language subtag, case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale(String);

impl Locale {
    /// Create a locale from a tag, normalizing case and separators
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::Locale;
    ///
    /// let locale = Locale::new("EN_us");
    /// assert_eq!(locale.tag(), "en-us");
    /// assert_eq!(locale.language(), "en");
    /// assert!(locale.matches(&Locale::default()));
    /// ```
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self(tag.trim().to_lowercase().replace('_', "-"))
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.0
    }

    /// Primary language subtag (`en` for `en-gb`)
    #[must_use]
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or_default()
    }

    /// Whether both locales name the same language
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.language() == other.language()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self("en".to_string())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A dictionary lookup that could not be answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    /// The dictionary has no words for the requested language
    UnsupportedLocale { requested: Locale, available: Locale },
    /// The backend could not be reached or failed mid-lookup
    Unavailable(String),
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedLocale {
                requested,
                available,
            } => write!(
                f,
                "No dictionary for locale '{requested}' (available: '{available}')"
            ),
            Self::Unavailable(reason) => write!(f, "Dictionary unavailable: {reason}"),
        }
    }
}

impl std::error::Error for DictionaryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_normalizes_tag() {
        assert_eq!(Locale::new(" EN-GB ").tag(), "en-gb");
        assert_eq!(Locale::new("pt_BR").tag(), "pt-br");
    }

    #[test]
    fn locale_language_subtag() {
        assert_eq!(Locale::new("en-GB").language(), "en");
        assert_eq!(Locale::new("fr").language(), "fr");
        assert_eq!(Locale::new("").language(), "");
    }

    #[test]
    fn locale_matches_on_language() {
        let en = Locale::default();
        assert!(en.matches(&Locale::new("en-US")));
        assert!(Locale::new("en-GB").matches(&Locale::new("en_us")));
        assert!(!en.matches(&Locale::new("fr")));
    }

    #[test]
    fn default_locale_is_english() {
        assert_eq!(Locale::default().tag(), "en");
        assert_eq!(Locale::default().to_string(), "en");
    }

    #[test]
    fn error_display() {
        let err = DictionaryError::UnsupportedLocale {
            requested: Locale::new("fr"),
            available: Locale::default(),
        };
        assert_eq!(
            err.to_string(),
            "No dictionary for locale 'fr' (available: 'en')"
        );

        let err = DictionaryError::Unavailable("timed out".to_string());
        assert_eq!(err.to_string(), "Dictionary unavailable: timed out");
    }

    #[test]
    fn reference_forwards_lookup() {
        struct Everything;

        impl Dictionary for Everything {
            fn is_recognized(&self, _: &str, _: &Locale) -> Result<bool, DictionaryError> {
                Ok(true)
            }
        }

        let dict = Everything;
        let by_ref: &dyn Dictionary = &dict;
        assert_eq!(by_ref.is_recognized("any", &Locale::default()), Ok(true));

        let boxed: Box<dyn Dictionary> = Box::new(Everything);
        assert_eq!(boxed.is_recognized("any", &Locale::default()), Ok(true));
    }
}
