//! Letter multiset
//!
//! Tracks how many of each character a root word offers, so candidate words can be
//! checked for letter sufficiency with repeated letters handled correctly.

use rustc_hash::FxHashMap;

/// A multiset of characters
///
/// Any character counts, not just alphabetic ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterPool {
    counts: FxHashMap<char, u32>,
    total: usize,
}

impl LetterPool {
    /// Build a pool holding every character of `word`
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        let mut counts: FxHashMap<char, u32> = FxHashMap::default();
        let mut total = 0;
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
            total += 1;
        }
        Self { counts, total }
    }

    /// Remove one instance of `ch`
    ///
    /// Returns `false` and leaves the pool untouched if none remain.
    pub fn take(&mut self, ch: char) -> bool {
        match self.counts.get_mut(&ch) {
            Some(count) if *count > 0 => {
                *count -= 1;
                self.total -= 1;
                true
            }
            _ => false,
        }
    }

    /// Whether `word` can be spelled from this pool, each character used at most once
    ///
    /// Consumes a copy of the pool character by character and stops at the first
    /// character with nothing left to take.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// let pool = LetterPool::from_word("balloon");
    /// assert!(pool.can_spell("loan"));
    /// assert!(!pool.can_spell("loop"));
    /// ```
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut remaining = self.clone();
        word.chars().all(|ch| remaining.take(ch))
    }

    /// How many instances of `ch` are left
    #[inline]
    #[must_use]
    pub fn count_of(&self, ch: char) -> u32 {
        self.counts.get(&ch).copied().unwrap_or(0)
    }

    /// Total characters left in the pool
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.total
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_counts_repeated_letters() {
        let pool = LetterPool::from_word("aardvark");
        assert_eq!(pool.count_of('a'), 3);
        assert_eq!(pool.count_of('r'), 2);
        assert_eq!(pool.count_of('d'), 1);
        assert_eq!(pool.len(), 8);
    }

    #[test]
    fn take_consumes_one_instance() {
        let mut pool = LetterPool::from_word("loop");
        assert!(pool.take('o'));
        assert_eq!(pool.count_of('o'), 1);
        assert!(pool.take('o'));
        assert!(!pool.take('o'));
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn take_missing_letter() {
        let mut pool = LetterPool::from_word("silk");
        assert!(!pool.take('z'));
        assert_eq!(pool.len(), 4);
    }

    #[test]
    fn can_spell_subset() {
        let pool = LetterPool::from_word("silkworm");
        assert!(pool.can_spell("silk"));
        assert!(pool.can_spell("worm"));
        assert!(pool.can_spell("milk"));
    }

    #[test]
    fn can_spell_rejects_extra_letter() {
        // Only one 's' in silkworm
        let pool = LetterPool::from_word("silkworm");
        assert!(!pool.can_spell("silks"));
    }

    #[test]
    fn can_spell_multiset_semantics() {
        let pool = LetterPool::from_word("balloon");
        assert!(pool.can_spell("loan"));
        // "lo" uses one of the two o's, the second 'o' is fine, but there's no 'p'
        assert!(!pool.can_spell("loop"));
        assert!(pool.can_spell("loon"));
        assert!(!pool.can_spell("looon"));
    }

    #[test]
    fn can_spell_does_not_consume_pool() {
        let pool = LetterPool::from_word("plates");
        assert!(pool.can_spell("plate"));
        assert!(pool.can_spell("plate"));
        assert_eq!(pool.len(), 6);
    }

    #[test]
    fn can_spell_treats_non_letters_like_letters() {
        let pool = LetterPool::from_word("rock'n'roll");
        assert!(pool.can_spell("n'r"));
        assert!(!pool.can_spell("'''"));
    }

    #[test]
    fn empty_pool() {
        let pool = LetterPool::default();
        assert!(pool.is_empty());
        assert!(pool.can_spell(""));
        assert!(!pool.can_spell("a"));
    }
}
