//! Line filter built from length bounds and a character-class fragment.

use super::loader::WordListError;
use regex::Regex;

/// Shortest word accepted when no bound is configured.
pub const DEFAULT_MIN_LENGTH: usize = 0;

/// Longest word accepted when no bound is configured.
pub const DEFAULT_MAX_LENGTH: usize = 20;

/// Character-class fragment that accepts any character.
pub const DEFAULT_VALID_CHARS: &str = ".";

/// Accepts whole lines of `min..=max` characters, each matching the
/// valid-character fragment.
///
/// The fragment is a regular-expression atom such as `[a-z]` or `\w`.
/// It is grouped and repeated without a bound, so it applies to every
/// character of the line. Length is checked separately by counting
/// characters, which keeps large maximums from inflating the compiled
/// pattern.
#[derive(Debug, Clone)]
pub struct WordFilter {
    min_length: usize,
    max_length: usize,
    valid_chars: String,
    pattern: Regex,
}

impl WordFilter {
    /// Compiles the anchored pattern `^(?:valid_chars)*$`.
    pub fn new(
        min_length: usize,
        max_length: usize,
        valid_chars: &str,
    ) -> Result<Self, WordListError> {
        if max_length < min_length {
            return Err(WordListError::InvalidBounds {
                min: min_length,
                max: max_length,
            });
        }

        let source = format!("^(?:{valid_chars})*$");
        let pattern = Regex::new(&source).map_err(|e| WordListError::InvalidPattern {
            pattern: valid_chars.to_string(),
            source: e,
        })?;

        tracing::debug!(pattern = %source, "Compiled word filter");

        Ok(Self {
            min_length,
            max_length,
            valid_chars: valid_chars.to_string(),
            pattern,
        })
    }

    /// Returns true if the whole of `word` is acceptable.
    #[inline]
    pub fn accepts(&self, word: &str) -> bool {
        let len = word.chars().count();
        len >= self.min_length && len <= self.max_length && self.pattern.is_match(word)
    }

    /// Shortest accepted word, in characters.
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Longest accepted word, in characters.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Valid-character fragment as given.
    pub fn valid_chars(&self) -> &str {
        &self.valid_chars
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_accepts_short_words() {
        let filter =
            WordFilter::new(DEFAULT_MIN_LENGTH, DEFAULT_MAX_LENGTH, DEFAULT_VALID_CHARS).unwrap();
        assert!(filter.accepts("apple"));
        assert!(filter.accepts(""));
        assert!(!filter.accepts("abcdefghijklmnopqrstu")); // 21 chars
    }

    #[test]
    fn test_length_bounds_are_inclusive() {
        let filter = WordFilter::new(3, 5, ".").unwrap();
        assert!(!filter.accepts("ab"));
        assert!(filter.accepts("abc"));
        assert!(filter.accepts("abcde"));
        assert!(!filter.accepts("abcdef"));
    }

    #[test]
    fn test_character_class_is_case_sensitive() {
        let filter = WordFilter::new(5, 5, "[a-z]").unwrap();
        assert!(filter.accepts("apple"));
        assert!(!filter.accepts("Hello"));
        assert!(!filter.accepts("Bees"));
    }

    #[test]
    fn test_bounds_count_characters_not_bytes() {
        let filter = WordFilter::new(4, 4, ".").unwrap();
        assert!(filter.accepts("café"));
    }

    #[test]
    fn test_multi_atom_fragment_applies_to_every_character() {
        let filter = WordFilter::new(2, 4, "a|b").unwrap();
        assert!(filter.accepts("abba"));
        assert!(!filter.accepts("abc"));
    }

    #[test]
    fn test_large_maximum_compiles() {
        let filter = WordFilter::new(0, 20_000, ".").unwrap();
        assert!(filter.accepts(&"a".repeat(19_999)));
        assert!(!filter.accepts(&"a".repeat(20_001)));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        assert!(matches!(
            WordFilter::new(10, 5, "."),
            Err(WordListError::InvalidBounds { min: 10, max: 5 })
        ));
    }

    #[test]
    fn test_invalid_fragment_rejected() {
        assert!(matches!(
            WordFilter::new(0, 20, "[a-"),
            Err(WordListError::InvalidPattern { .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_accepted_words_respect_bounds(
            word in "[a-zA-Z0-9]{0,12}",
            min in 0usize..6,
            extra in 0usize..6,
        ) {
            let max = min + extra;
            let filter = WordFilter::new(min, max, "[a-z]").unwrap();
            if filter.accepts(&word) {
                let len = word.chars().count();
                prop_assert!(len >= min && len <= max);
                prop_assert!(word.chars().all(|c| c.is_ascii_lowercase()));
            }
        }
    }
}
