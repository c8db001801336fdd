//! Human-readable entropy summaries.

use crate::wordlist::WordList;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Entropy of a single word list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntropy {
    /// Word type, e.g. `adjectives`.
    pub kind: String,
    /// Absolute location of the source file.
    pub location: PathBuf,
    /// Number of words in the list.
    pub count: usize,
}

impl ListEntropy {
    /// Measures `list`, labelled with `kind`.
    pub fn new(kind: impl Into<String>, list: &WordList) -> Self {
        let location = std::path::absolute(list.source())
            .map(|path| normalize(&path))
            .unwrap_or_else(|_| list.source().to_path_buf());
        Self {
            kind: kind.into(),
            location,
            count: list.len(),
        }
    }

    /// Bits of entropy of one draw from the list.
    pub fn bits(&self) -> f64 {
        (self.count as f64).log2()
    }

    /// Bits as an integer when the count is an exact power of two.
    pub fn exact_bits(&self) -> Option<u32> {
        self.count
            .is_power_of_two()
            .then(|| self.count.trailing_zeros())
    }
}

/// Drops `.` and resolves `..` against the preceding component without
/// touching the filesystem. `..` at the root stays at the root.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

/// Verbose report over both word lists.
#[derive(Debug, Clone, PartialEq)]
pub struct EntropyReport {
    /// Adjective list entropy.
    pub adjectives: ListEntropy,
    /// Noun list entropy.
    pub nouns: ListEntropy,
}

impl EntropyReport {
    /// Measures both word lists.
    pub fn new(adjectives: &WordList, nouns: &WordList) -> Self {
        Self {
            adjectives: ListEntropy::new("adjectives", adjectives),
            nouns: ListEntropy::new("nouns", nouns),
        }
    }

    /// Bits of entropy in one phrase: two adjectives and a noun.
    pub fn phrase_bits(&self) -> f64 {
        2.0 * self.adjectives.bits() + self.nouns.bits()
    }

    fn exact_phrase_bits(&self) -> Option<u32> {
        Some(2 * self.adjectives.exact_bits()? + self.nouns.exact_bits()?)
    }
}

/// Formats bits as `N` when exact, otherwise with two decimals.
pub fn format_bits(exact: Option<u32>, bits: f64) -> String {
    match exact {
        Some(n) => n.to_string(),
        None => format!("{bits:.2}"),
    }
}

impl fmt::Display for EntropyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for list in [&self.adjectives, &self.nouns] {
            writeln!(
                f,
                "The supplied {} list is located at {}.",
                list.kind,
                list.location.display()
            )?;
            writeln!(
                f,
                "Your {} word list contains {} words, or 2^{} words.",
                list.kind,
                list.count,
                format_bits(list.exact_bits(), list.bits())
            )?;
        }
        writeln!(
            f,
            "Each phrase carries {} bits of entropy.",
            format_bits(self.exact_phrase_bits(), self.phrase_bits())
        )
    }
}
