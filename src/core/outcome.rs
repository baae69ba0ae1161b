//! Validation outcomes
//!
//! The result of checking one submitted word, plus the alert text shown to the
//! player and the effect on their score.

use std::fmt;

/// Result of validating a single candidate word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationOutcome {
    Accepted,
    RejectedTooShort,
    RejectedSameAsRoot,
    RejectedAlreadyUsed,
    RejectedNotSubsequenceOfLetters,
    RejectedNotInDictionary,
}

impl ValidationOutcome {
    /// All outcomes, in guard-chain order with `Accepted` last
    pub const ALL: [Self; 6] = [
        Self::RejectedTooShort,
        Self::RejectedSameAsRoot,
        Self::RejectedAlreadyUsed,
        Self::RejectedNotSubsequenceOfLetters,
        Self::RejectedNotInDictionary,
        Self::Accepted,
    ];

    #[inline]
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Change to apply to the player's score
    ///
    /// Too-short and unspellable words cost nothing; the other rejections cost a point.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::ValidationOutcome;
    ///
    /// assert_eq!(ValidationOutcome::Accepted.score_delta(), 1);
    /// assert_eq!(ValidationOutcome::RejectedAlreadyUsed.score_delta(), -1);
    /// assert_eq!(ValidationOutcome::RejectedTooShort.score_delta(), 0);
    /// ```
    #[must_use]
    pub const fn score_delta(self) -> i32 {
        match self {
            Self::Accepted => 1,
            Self::RejectedSameAsRoot | Self::RejectedAlreadyUsed | Self::RejectedNotInDictionary => {
                -1
            }
            Self::RejectedTooShort | Self::RejectedNotSubsequenceOfLetters => 0,
        }
    }

    /// Alert title, or `None` for an accepted word
    #[must_use]
    pub const fn title(self) -> Option<&'static str> {
        match self {
            Self::Accepted => None,
            Self::RejectedTooShort => Some("Word too short"),
            Self::RejectedSameAsRoot => Some("You cant use the same word"),
            Self::RejectedAlreadyUsed => Some("Word used already"),
            Self::RejectedNotSubsequenceOfLetters => Some("Word not possible"),
            Self::RejectedNotInDictionary => Some("Word not recognized"),
        }
    }

    /// Alert to show the player for this outcome
    ///
    /// `root` fills in the unspellable-word message.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::ValidationOutcome;
    ///
    /// let alert = ValidationOutcome::RejectedNotSubsequenceOfLetters
    ///     .alert("silkworm")
    ///     .unwrap();
    /// assert_eq!(alert.title, "Word not possible");
    /// assert_eq!(alert.message, "You can't spell that word from 'silkworm'!");
    ///
    /// assert!(ValidationOutcome::Accepted.alert("silkworm").is_none());
    /// ```
    #[must_use]
    pub fn alert(self, root: &str) -> Option<Alert> {
        let message = match self {
            Self::Accepted => return None,
            Self::RejectedTooShort => "Words must be at least 3 characters long".to_string(),
            Self::RejectedSameAsRoot => "Use Different Words".to_string(),
            Self::RejectedAlreadyUsed => "Be more orignal".to_string(),
            Self::RejectedNotSubsequenceOfLetters => {
                format!("You can't spell that word from '{root}'!")
            }
            Self::RejectedNotInDictionary => "You can't just make them up,you know!".to_string(),
        };

        self.title().map(|title| Alert { title, message })
    }
}

impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Accepted => "accepted",
            Self::RejectedTooShort => "too short",
            Self::RejectedSameAsRoot => "same as root",
            Self::RejectedAlreadyUsed => "already used",
            Self::RejectedNotSubsequenceOfLetters => "not possible",
            Self::RejectedNotInDictionary => "not recognized",
        };
        f.write_str(name)
    }
}

/// Title and message pair shown to the player after a rejection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: &'static str,
    pub message: String,
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_accepted_is_accepted() {
        for outcome in ValidationOutcome::ALL {
            assert_eq!(
                outcome.is_accepted(),
                outcome == ValidationOutcome::Accepted
            );
        }
    }

    #[test]
    fn score_deltas() {
        use ValidationOutcome::*;

        assert_eq!(Accepted.score_delta(), 1);
        assert_eq!(RejectedTooShort.score_delta(), 0);
        assert_eq!(RejectedSameAsRoot.score_delta(), -1);
        assert_eq!(RejectedAlreadyUsed.score_delta(), -1);
        assert_eq!(RejectedNotSubsequenceOfLetters.score_delta(), 0);
        assert_eq!(RejectedNotInDictionary.score_delta(), -1);
    }

    #[test]
    fn alert_text_verbatim() {
        use ValidationOutcome::*;

        let cases = [
            (
                RejectedTooShort,
                "Word too short",
                "Words must be at least 3 characters long",
            ),
            (
                RejectedSameAsRoot,
                "You cant use the same word",
                "Use Different Words",
            ),
            (RejectedAlreadyUsed, "Word used already", "Be more orignal"),
            (
                RejectedNotSubsequenceOfLetters,
                "Word not possible",
                "You can't spell that word from 'plates'!",
            ),
            (
                RejectedNotInDictionary,
                "Word not recognized",
                "You can't just make them up,you know!",
            ),
        ];

        for (outcome, title, message) in cases {
            let alert = outcome.alert("plates").unwrap();
            assert_eq!(alert.title, title, "title for {outcome}");
            assert_eq!(alert.message, message, "message for {outcome}");
            assert_eq!(outcome.title(), Some(title));
        }
    }

    #[test]
    fn accepted_has_no_alert() {
        assert_eq!(ValidationOutcome::Accepted.title(), None);
        assert_eq!(ValidationOutcome::Accepted.alert("plates"), None);
    }

    #[test]
    fn alert_display() {
        let alert = ValidationOutcome::RejectedAlreadyUsed
            .alert("plates")
            .unwrap();
        assert_eq!(alert.to_string(), "Word used already: Be more orignal");
    }
}
