//! Capitalisation and whole-output case forcing.

use crate::generation::PhraseGenerator;
use rand_core::RngCore;

/// Case forced onto the complete output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseMode {
    /// Leave the output as generated.
    #[default]
    Preserve,
    /// Force uppercase.
    Upper,
    /// Force lowercase.
    Lower,
}

impl CaseMode {
    /// Resolves the two command-line flags. Uppercase wins if both are set.
    pub fn from_flags(uppercase: bool, lowercase: bool) -> Self {
        if uppercase {
            Self::Upper
        } else if lowercase {
            Self::Lower
        } else {
            Self::Preserve
        }
    }

    /// Returns `text` in this case.
    pub fn apply(self, text: &str) -> String {
        match self {
            Self::Preserve => text.to_string(),
            Self::Upper => text.to_uppercase(),
            Self::Lower => text.to_lowercase(),
        }
    }
}

/// Uppercases the first character of `word` and keeps the rest as is.
pub fn capitalise_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Turns sampled phrases into the final output block.
///
/// Capitalisation is applied to each word before joining, so it never
/// touches the separator. The case mode is applied last, to the joined
/// block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Formatter {
    capitalise: bool,
    case: CaseMode,
}

impl Formatter {
    /// Creates a formatter.
    pub fn new(capitalise: bool, case: CaseMode) -> Self {
        Self { capitalise, case }
    }

    /// Generates `count` phrases and joins them with newlines.
    pub fn render<R: RngCore>(&self, generator: &mut PhraseGenerator<'_, R>, count: usize) -> String {
        let phrases: Vec<String> = (0..count)
            .map(|_| {
                let mut phrase = generator.next_phrase();
                if self.capitalise {
                    phrase = phrase.map_words(capitalise_word);
                }
                phrase.join(generator.separator())
            })
            .collect();

        self.case.apply(&phrases.join("\n"))
    }

    /// Whether each word is capitalised.
    pub fn capitalise(&self) -> bool {
        self.capitalise
    }

    /// Case applied to the whole output.
    pub fn case(&self) -> CaseMode {
        self.case
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlist::WordList;
    use proptest::prelude::*;
    use rand_chacha::ChaCha20Rng;
    use rand_core::SeedableRng;

    fn render(formatter: Formatter, adjectives: &[&str], nouns: &[&str], count: usize) -> String {
        let adjectives = WordList::from_words(
            adjectives.iter().map(|w| w.to_string()).collect(),
            "adjectives.txt",
        )
        .unwrap();
        let nouns =
            WordList::from_words(nouns.iter().map(|w| w.to_string()).collect(), "nouns.txt")
                .unwrap();
        let mut generator =
            PhraseGenerator::new(&adjectives, &nouns, " ", ChaCha20Rng::seed_from_u64(42));
        formatter.render(&mut generator, count)
    }

    #[test]
    fn test_uppercase_takes_precedence() {
        assert_eq!(CaseMode::from_flags(true, true), CaseMode::Upper);
        assert_eq!(CaseMode::from_flags(false, true), CaseMode::Lower);
        assert_eq!(CaseMode::from_flags(false, false), CaseMode::Preserve);
    }

    #[test]
    fn test_capitalise_word() {
        assert_eq!(capitalise_word("apple"), "Apple");
        assert_eq!(capitalise_word("mcDonald"), "McDonald");
        assert_eq!(capitalise_word("éclair"), "Éclair");
        assert_eq!(capitalise_word(""), "");
    }

    #[test]
    fn test_render_count_lines() {
        let out = render(Formatter::default(), &["tiny"], &["cat"], 3);
        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(lines, ["tiny tiny cat ", "tiny tiny cat ", "tiny tiny cat "]);
    }

    #[test]
    fn test_single_phrase_has_no_newline() {
        let out = render(Formatter::default(), &["tiny"], &["cat"], 1);
        assert_eq!(out, "tiny tiny cat ");
    }

    #[test]
    fn test_capitalise_preserves_rest_of_word() {
        let out = render(Formatter::new(true, CaseMode::Preserve), &["iPhone"], &["eBook"], 1);
        assert_eq!(out, "IPhone IPhone EBook ");
    }

    #[test]
    fn test_capitalise_then_lowercase() {
        let out = render(Formatter::new(true, CaseMode::Lower), &["Big"], &["Dog"], 2);
        assert_eq!(out, "big big dog \nbig big dog ");
    }

    #[test]
    fn test_capitalise_leaves_separator_alone() {
        let adjectives = WordList::from_words(vec!["red".into()], "a").unwrap();
        let nouns = WordList::from_words(vec!["fox".into()], "n").unwrap();
        let mut generator =
            PhraseGenerator::new(&adjectives, &nouns, "x", ChaCha20Rng::seed_from_u64(0));

        let out = Formatter::new(true, CaseMode::Preserve).render(&mut generator, 1);
        assert_eq!(out, "RedxRedxFoxx");
    }

    proptest! {
        #[test]
        fn prop_uppercase_has_no_lowercase(words in prop::collection::vec("[a-zA-Z]{1,8}", 1..5)) {
            let refs: Vec<&str> = words.iter().map(String::as_str).collect();
            let out = render(Formatter::new(false, CaseMode::Upper), &refs, &refs, 4);
            prop_assert!(!out.chars().any(|c| c.is_lowercase()));
        }

        #[test]
        fn prop_lowercase_has_no_uppercase(words in prop::collection::vec("[a-zA-Z]{1,8}", 1..5)) {
            let refs: Vec<&str> = words.iter().map(String::as_str).collect();
            let out = render(Formatter::new(true, CaseMode::Lower), &refs, &refs, 4);
            prop_assert!(!out.chars().any(|c| c.is_uppercase()));
        }

        #[test]
        fn prop_capitalised_words_start_uppercase(
            words in prop::collection::vec("[a-z][a-zA-Z]{0,7}", 1..5),
            count in 1usize..6,
        ) {
            let refs: Vec<&str> = words.iter().map(String::as_str).collect();
            let out = render(Formatter::new(true, CaseMode::Preserve), &refs, &refs, count);
            let lines: Vec<&str> = out.split('\n').collect();
            prop_assert_eq!(lines.len(), count);
            for line in lines {
                for word in line.split_whitespace() {
                    prop_assert!(word.chars().next().map_or(false, char::is_uppercase));
                    let rest: String = word.chars().skip(1).collect();
                    prop_assert!(words.iter().any(|w| w.ends_with(&rest)));
                }
            }
        }
    }
}
