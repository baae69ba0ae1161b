//! Game session state
//!
//! A [`GameSession`] owns everything that changes while playing: the root word,
//! the words found so far (most recent first), the pending input and the score.
//! Validation is delegated to a [`WordValidator`]; the session only applies the
//! outcome it gets back.

use crate::core::{ValidationOutcome, Word, WordValidator, normalize};
use crate::dictionary::{Dictionary, DictionaryError};
use crate::wordlists::RootWordPool;
use rand::Rng;
use tracing::{debug, info, instrument};

/// One game in progress
#[derive(Debug, Clone)]
pub struct GameSession {
    root: Word,
    used: Vec<String>,
    pending: String,
    score: i32,
}

impl GameSession {
    /// Start a game with a specific root word
    #[must_use]
    pub const fn new(root: Word) -> Self {
        Self {
            root,
            used: Vec::new(),
            pending: String::new(),
            score: 0,
        }
    }

    /// Start a game with a root word picked at random from `pool`
    pub fn start<R: Rng + ?Sized>(pool: &RootWordPool, rng: &mut R) -> Self {
        let session = Self::new(pool.choose(rng));
        info!(root = %session.root, "game started");
        session
    }

    /// Throw away the current game and start over with a new root word
    ///
    /// Clears used words, score and pending input.
    pub fn new_game<R: Rng + ?Sized>(&mut self, pool: &RootWordPool, rng: &mut R) {
        *self = Self::start(pool, rng);
    }

    #[must_use]
    pub const fn root(&self) -> &Word {
        &self.root
    }

    /// Accepted words, most recent first
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used
    }

    #[must_use]
    pub fn words_found(&self) -> usize {
        self.used.len()
    }

    #[must_use]
    pub const fn score(&self) -> i32 {
        self.score
    }

    /// Text the player has typed but not yet had accepted
    #[must_use]
    pub fn pending(&self) -> &str {
        &self.pending
    }

    pub fn set_pending(&mut self, text: impl Into<String>) {
        self.pending = text.into();
    }

    /// Mutable access to the pending input for character-by-character editing
    pub fn pending_mut(&mut self) -> &mut String {
        &mut self.pending
    }

    /// Validate the pending input and apply the outcome
    ///
    /// Returns `Ok(None)` when the input is blank; nothing changes in that case.
    ///
    /// # Errors
    ///
    /// Returns the dictionary's error if the lookup fails. The session is left
    /// untouched: score, used words and pending input are unchanged.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::{ValidationOutcome, Word, WordValidator};
    /// use word_scramble::dictionary::{Locale, WordListDictionary};
    /// use word_scramble::session::GameSession;
    ///
    /// let validator = WordValidator::new(WordListDictionary::from_words(["plate"], Locale::default()));
    /// let mut session = GameSession::new(Word::new("plates").unwrap());
    ///
    /// session.set_pending("plate");
    /// assert_eq!(session.submit(&validator).unwrap(), Some(ValidationOutcome::Accepted));
    /// assert_eq!(session.score(), 1);
    /// assert_eq!(session.pending(), "");
    /// ```
    #[instrument(skip_all, fields(root = %self.root, pending = %self.pending))]
    pub fn submit<D: Dictionary>(
        &mut self,
        validator: &WordValidator<D>,
    ) -> Result<Option<ValidationOutcome>, DictionaryError> {
        let Some(outcome) = validator.validate(&self.root, &self.used, &self.pending)? else {
            return Ok(None);
        };

        let candidate = normalize(&self.pending);
        self.apply(&candidate, outcome);
        Ok(Some(outcome))
    }

    /// Replace the pending input with `word` and submit it
    ///
    /// # Errors
    ///
    /// See [`GameSession::submit`].
    pub fn submit_word<D: Dictionary>(
        &mut self,
        word: &str,
        validator: &WordValidator<D>,
    ) -> Result<Option<ValidationOutcome>, DictionaryError> {
        self.set_pending(word);
        self.submit(validator)
    }

    /// Apply a validation outcome for `candidate` to the session
    ///
    /// Accepted words go to the front of the used list, add a point and clear the
    /// pending input. Rejections adjust the score by
    /// [`ValidationOutcome::score_delta`] and keep the pending input for editing.
    pub fn apply(&mut self, candidate: &str, outcome: ValidationOutcome) {
        if outcome.is_accepted() {
            self.used.insert(0, candidate.to_string());
            self.pending.clear();
        }

        self.score += outcome.score_delta();
        debug!(candidate, %outcome, score = self.score, "outcome applied");
    }
}
