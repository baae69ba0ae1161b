//! Word validation
//!
//! Decides whether a submitted word is acceptable for a root word. Checks run as a
//! guard chain: the first failing rule decides the outcome and the remaining rules,
//! including the dictionary lookup, are never evaluated.
//!
//! The validator is pure. It never touches score or used words; applying the
//! outcome is [`GameSession`](crate::session::GameSession)'s job.

use super::letters::LetterPool;
use super::outcome::ValidationOutcome;
use super::word::{Word, normalize};
use crate::dictionary::{Dictionary, DictionaryError, Locale};
use tracing::trace;

/// Shortest word the game accepts, in characters
pub const MIN_WORD_LENGTH: usize = 3;

/// Validates candidate words against a root word and a dictionary
#[derive(Debug, Clone)]
pub struct WordValidator<D> {
    dictionary: D,
    locale: Locale,
}

impl<D: Dictionary> WordValidator<D> {
    /// Create a validator that checks words against `dictionary` in English
    #[must_use]
    pub fn new(dictionary: D) -> Self {
        Self::with_locale(dictionary, Locale::default())
    }

    #[must_use]
    pub const fn with_locale(dictionary: D, locale: Locale) -> Self {
        Self { dictionary, locale }
    }

    #[must_use]
    pub const fn dictionary(&self) -> &D {
        &self.dictionary
    }

    #[must_use]
    pub const fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Validate a raw candidate against `root` and the words already used
    ///
    /// The candidate is normalized first. An empty candidate produces no outcome at
    /// all (`Ok(None)`), which callers treat as a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns the dictionary's error if the final lookup cannot be answered. This
    /// is only reached once every other rule has passed.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::{ValidationOutcome, Word, WordValidator};
    /// use word_scramble::dictionary::{Locale, WordListDictionary};
    ///
    /// let dict = WordListDictionary::from_words(["silk", "worm"], Locale::default());
    /// let validator = WordValidator::new(dict);
    /// let root = Word::new("silkworm").unwrap();
    /// let used: [&str; 0] = [];
    ///
    /// let outcome = validator.validate(&root, &used, " SILK ").unwrap();
    /// assert_eq!(outcome, Some(ValidationOutcome::Accepted));
    ///
    /// let outcome = validator.validate(&root, &used, "silks").unwrap();
    /// assert_eq!(outcome, Some(ValidationOutcome::RejectedNotSubsequenceOfLetters));
    ///
    /// assert_eq!(validator.validate(&root, &used, "   ").unwrap(), None);
    /// ```
    pub fn validate<S: AsRef<str>>(
        &self,
        root: &Word,
        used: &[S],
        candidate: &str,
    ) -> Result<Option<ValidationOutcome>, DictionaryError> {
        let answer = normalize(candidate);

        if answer.is_empty() {
            return Ok(None);
        }

        let outcome = if answer.chars().count() < MIN_WORD_LENGTH {
            ValidationOutcome::RejectedTooShort
        } else if answer == root.text() {
            ValidationOutcome::RejectedSameAsRoot
        } else if !is_original(&answer, used) {
            ValidationOutcome::RejectedAlreadyUsed
        } else if !is_possible(&answer, root) {
            ValidationOutcome::RejectedNotSubsequenceOfLetters
        } else if !self.dictionary.is_recognized(&answer, &self.locale)? {
            ValidationOutcome::RejectedNotInDictionary
        } else {
            ValidationOutcome::Accepted
        };

        trace!(candidate = %answer, root = %root, %outcome, "validated");
        Ok(Some(outcome))
    }
}

/// Whether `word` has not been used yet
///
/// Entries in `used` are expected to be normalized already; matching is exact.
#[must_use]
pub fn is_original<S: AsRef<str>>(word: &str, used: &[S]) -> bool {
    !used.iter().any(|entry| entry.as_ref() == word)
}

/// Whether `word` can be spelled from the letters of `root`
#[must_use]
pub fn is_possible(word: &str, root: &Word) -> bool {
    LetterPool::from_word(root.text()).can_spell(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordListDictionary;
    use std::cell::Cell;

    const NO_WORDS: &[&str] = &[];

    fn validator(words: &[&str]) -> WordValidator<WordListDictionary> {
        WordValidator::new(WordListDictionary::from_words(
            words.iter().copied(),
            Locale::default(),
        ))
    }

    fn root(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    /// Counts lookups and answers from a fixed result
    struct CountingDictionary {
        answer: Result<bool, DictionaryError>,
        lookups: Cell<usize>,
    }

    impl CountingDictionary {
        fn new(answer: Result<bool, DictionaryError>) -> Self {
            Self {
                answer,
                lookups: Cell::new(0),
            }
        }
    }

    impl Dictionary for CountingDictionary {
        fn is_recognized(&self, _: &str, _: &Locale) -> Result<bool, DictionaryError> {
            self.lookups.set(self.lookups.get() + 1);
            self.answer.clone()
        }
    }

    #[test]
    fn accepts_valid_word() {
        let v = validator(&["silk"]);
        assert_eq!(
            v.validate(&root("silkworm"), NO_WORDS, "silk"),
            Ok(Some(ValidationOutcome::Accepted))
        );
    }

    #[test]
    fn empty_candidate_produces_no_outcome() {
        let v = validator(&["silk"]);
        let r = root("silkworm");

        assert_eq!(v.validate(&r, NO_WORDS, ""), Ok(None));
        assert_eq!(v.validate(&r, NO_WORDS, "  \n\t"), Ok(None));
    }

    #[test]
    fn short_words_rejected() {
        let v = validator(&["is", "i"]);
        let r = root("silkworm");

        for candidate in ["i", "is", " IS ", "ow"] {
            assert_eq!(
                v.validate(&r, NO_WORDS, candidate),
                Ok(Some(ValidationOutcome::RejectedTooShort)),
                "candidate {candidate:?}"
            );
        }
    }

    #[test]
    fn length_counts_characters() {
        // Two characters but more than two bytes
        let v = validator(&["éé"]);
        assert_eq!(
            v.validate(&root("éépée"), NO_WORDS, "éé"),
            Ok(Some(ValidationOutcome::RejectedTooShort))
        );
    }

    #[test]
    fn same_as_root_rejected_case_insensitively() {
        let v = validator(&["plates"]);
        let r = root("plates");

        for candidate in ["plates", "PLATES", "  Plates "] {
            assert_eq!(
                v.validate(&r, NO_WORDS, candidate),
                Ok(Some(ValidationOutcome::RejectedSameAsRoot))
            );
        }
    }

    #[test]
    fn already_used_rejected() {
        let v = validator(&["plate"]);
        assert_eq!(
            v.validate(&root("plates"), &["plate"], "Plate"),
            Ok(Some(ValidationOutcome::RejectedAlreadyUsed))
        );
    }

    #[test]
    fn letter_sufficiency() {
        let v = validator(&["silk", "silks", "loan", "loop"]);

        assert_eq!(
            v.validate(&root("silkworm"), NO_WORDS, "silk"),
            Ok(Some(ValidationOutcome::Accepted))
        );
        assert_eq!(
            v.validate(&root("silkworm"), NO_WORDS, "silks"),
            Ok(Some(ValidationOutcome::RejectedNotSubsequenceOfLetters))
        );
        assert_eq!(
            v.validate(&root("balloon"), NO_WORDS, "loan"),
            Ok(Some(ValidationOutcome::Accepted))
        );
        assert_eq!(
            v.validate(&root("balloon"), NO_WORDS, "loop"),
            Ok(Some(ValidationOutcome::RejectedNotSubsequenceOfLetters))
        );
    }

    #[test]
    fn repeated_letters_use_multiset_semantics() {
        let v = validator(&["aaa", "aar"]);
        // "ark" has a single 'a'
        assert_eq!(
            v.validate(&root("ark"), NO_WORDS, "aar"),
            Ok(Some(ValidationOutcome::RejectedNotSubsequenceOfLetters))
        );
        // "aardvark" has three
        assert_eq!(
            v.validate(&root("aardvark"), NO_WORDS, "aaa"),
            Ok(Some(ValidationOutcome::Accepted))
        );
    }

    #[test]
    fn unknown_word_rejected() {
        let v = validator(&["silk"]);
        assert_eq!(
            v.validate(&root("silkworm"), NO_WORDS, "mirk"),
            Ok(Some(ValidationOutcome::RejectedNotInDictionary))
        );
    }

    #[test]
    fn earlier_rules_win() {
        let v = validator(&[]);
        // Too short beats not possible
        assert_eq!(
            v.validate(&root("silkworm"), NO_WORDS, "zz"),
            Ok(Some(ValidationOutcome::RejectedTooShort))
        );
        // Already used beats not possible
        assert_eq!(
            v.validate(&root("silkworm"), &["zzz"], "zzz"),
            Ok(Some(ValidationOutcome::RejectedAlreadyUsed))
        );
        // Not possible beats not recognized
        assert_eq!(
            v.validate(&root("silkworm"), NO_WORDS, "zzz"),
            Ok(Some(ValidationOutcome::RejectedNotSubsequenceOfLetters))
        );
    }

    #[test]
    fn dictionary_only_consulted_when_other_rules_pass() {
        let dict = CountingDictionary::new(Ok(true));
        let v = WordValidator::new(&dict);
        let r = root("silkworm");

        for candidate in ["", "si", "silkworm", "silks"] {
            v.validate(&r, &["worm"], candidate).unwrap();
        }
        v.validate(&r, &["worm"], "worm").unwrap();
        assert_eq!(dict.lookups.get(), 0);

        v.validate(&r, &["worm"], "silk").unwrap();
        assert_eq!(dict.lookups.get(), 1);
    }

    #[test]
    fn dictionary_failure_is_surfaced() {
        let failure = DictionaryError::Unavailable("offline".to_string());
        let dict = CountingDictionary::new(Err(failure.clone()));
        let v = WordValidator::new(&dict);

        assert_eq!(v.validate(&root("silkworm"), NO_WORDS, "silk"), Err(failure));
    }

    #[test]
    fn locale_is_passed_to_dictionary() {
        let dict = WordListDictionary::from_words(["silk"], Locale::default());
        let v = WordValidator::with_locale(dict, Locale::new("de"));

        assert!(matches!(
            v.validate(&root("silkworm"), NO_WORDS, "silk"),
            Err(DictionaryError::UnsupportedLocale { .. })
        ));
        assert_eq!(v.locale().tag(), "de");
    }

    #[test]
    fn non_letters_checked_like_letters() {
        let v = validator(&["o'k", "ok!"]);
        let r = root("o'clock");

        assert_eq!(
            v.validate(&r, NO_WORDS, "o'k"),
            Ok(Some(ValidationOutcome::Accepted))
        );
        assert_eq!(
            v.validate(&r, NO_WORDS, "ok!"),
            Ok(Some(ValidationOutcome::RejectedNotSubsequenceOfLetters))
        );
    }

    #[test]
    fn each_call_is_independent() {
        let v = validator(&[]);
        let r = root("silkworm");
        let first = v.validate(&r, NO_WORDS, "milk");
        let second = v.validate(&r, NO_WORDS, "milk");

        assert_eq!(first, Ok(Some(ValidationOutcome::RejectedNotInDictionary)));
        assert_eq!(first, second);
    }

    #[test]
    fn helper_rules() {
        assert!(is_original("silk", NO_WORDS));
        assert!(!is_original("silk", &["worm", "silk"]));
        assert!(is_possible("worm", &root("silkworm")));
        assert!(is_possible("worms", &root("silkworm")));
        assert!(!is_possible("wormy", &root("silkworm")));
        assert!(!is_possible("silkk", &root("silkworm")));
    }
}
