//! Reading word files into filtered, immutable word lists.

use super::filter::WordFilter;
use rand::Rng;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while building a word list.
#[derive(Debug, Error)]
pub enum WordListError {
    /// The maximum length is below the minimum.
    #[error("the maximum word length ({max}) can not be less than the minimum length ({min})")]
    InvalidBounds {
        /// Minimum length.
        min: usize,
        /// Maximum length.
        max: usize,
    },

    /// The valid-character fragment does not compile.
    #[error("invalid valid-character pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The fragment as given.
        pattern: String,
        /// Compiler error.
        #[source]
        source: regex::Error,
    },

    /// The word file could not be opened or read.
    #[error("failed to read word file {}: {source}", path.display())]
    Read {
        /// Word file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// No line of the file passed the filter.
    #[error(
        "could not get enough words from {}: the file is too small or the filter settings are too strict",
        path.display()
    )]
    TooFewWords {
        /// Word file path.
        path: PathBuf,
    },
}

/// An ordered, non-empty list of candidate words.
///
/// Words keep the order they had in the source file. Duplicates are kept,
/// so a word repeated in the file is proportionally more likely to be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
    source: PathBuf,
}

impl WordList {
    /// Loads the words of `path` that pass `filter`.
    ///
    /// Each line has trailing whitespace (including `\r\n`) removed before
    /// matching. Invalid UTF-8 is replaced rather than rejected.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or if no line survives the filter.
    pub fn load(path: impl AsRef<Path>, filter: &WordFilter) -> Result<Self, WordListError> {
        let path = path.as_ref();
        let read_err = |source| WordListError::Read {
            path: path.to_path_buf(),
            source,
        };

        let mut reader = BufReader::new(File::open(path).map_err(read_err)?);
        let mut words = Vec::new();
        let mut line = Vec::new();
        let mut total = 0usize;

        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line).map_err(read_err)? == 0 {
                break;
            }
            total += 1;

            let text = String::from_utf8_lossy(&line);
            let word = text.trim_end();
            if filter.accepts(word) {
                words.push(word.to_string());
            }
        }

        tracing::debug!(
            path = %path.display(),
            lines = total,
            kept = words.len(),
            "Loaded word file"
        );

        Self::from_words(words, path)
    }

    /// Builds a list from words that were already filtered.
    ///
    /// `source` is only used for reporting.
    pub fn from_words(
        words: Vec<String>,
        source: impl Into<PathBuf>,
    ) -> Result<Self, WordListError> {
        let source = source.into();
        if words.is_empty() {
            return Err(WordListError::TooFewWords { path: source });
        }
        Ok(Self { words, source })
    }

    /// Draws one word uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        &self.words[rng.gen_range(0..self.words.len())]
    }

    /// Number of words in the list. Never zero.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The words, in file order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The file the list was loaded from.
    pub fn source(&self) -> &Path {
        &self.source
    }
}
