//! Adjective-adjective-noun phrase sampling.

use crate::wordlist::WordList;
use rand_core::RngCore;

/// Number of words in a phrase.
pub const PHRASE_WORDS: usize = 3;

/// One sampled phrase, before joining.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    words: [String; PHRASE_WORDS],
}

impl Phrase {
    /// Creates a phrase from two adjectives and a noun.
    pub fn new(first: &str, second: &str, noun: &str) -> Self {
        Self {
            words: [first.to_string(), second.to_string(), noun.to_string()],
        }
    }

    /// The words in phrase order.
    pub fn words(&self) -> &[String; PHRASE_WORDS] {
        &self.words
    }

    /// Applies `f` to every word.
    pub fn map_words(self, f: impl Fn(&str) -> String) -> Self {
        Self {
            words: self.words.map(|w| f(&w)),
        }
    }

    /// Joins the words, following each one with `separator`.
    ///
    /// The trailing separator is part of the phrase.
    pub fn join(&self, separator: &str) -> String {
        let capacity = self.words.iter().map(|w| w.len() + separator.len()).sum();
        let mut out = String::with_capacity(capacity);
        for word in &self.words {
            out.push_str(word);
            out.push_str(separator);
        }
        out
    }
}

/// Draws phrases from two word lists with an injected random source.
pub struct PhraseGenerator<'a, R> {
    adjectives: &'a WordList,
    nouns: &'a WordList,
    separator: &'a str,
    rng: R,
}

impl<'a, R: RngCore> PhraseGenerator<'a, R> {
    /// Creates a generator drawing from `adjectives` and `nouns` with `rng`.
    pub fn new(adjectives: &'a WordList, nouns: &'a WordList, separator: &'a str, rng: R) -> Self {
        Self {
            adjectives,
            nouns,
            separator,
            rng,
        }
    }

    /// Samples two adjectives and a noun independently.
    pub fn next_phrase(&mut self) -> Phrase {
        let first = self.adjectives.choose(&mut self.rng);
        let second = self.adjectives.choose(&mut self.rng);
        let noun = self.nouns.choose(&mut self.rng);
        Phrase::new(first, second, noun)
    }

    /// Samples a phrase and joins it with the separator.
    pub fn generate_phrase(&mut self) -> String {
        self.next_phrase().join(self.separator)
    }

    /// Separator placed after each word.
    pub fn separator(&self) -> &str {
        self.separator
    }
}
