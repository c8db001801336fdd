//! Validated run options.

use super::{ConfigError, FileConfig, Locator, WordKind};
use crate::cli::Cli;
use crate::format::{CaseMode, Formatter};
use crate::wordlist::{
    WordFilter, WordListError, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, DEFAULT_VALID_CHARS,
};
use std::path::{Path, PathBuf};

/// Separator placed after each word when none is configured.
pub const DEFAULT_SEPARATOR: &str = " ";

/// Phrases generated when no count is configured.
pub const DEFAULT_NUM: i64 = 1;

/// Immutable, validated options for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    adjectives: PathBuf,
    nouns: PathBuf,
    separator: String,
    num: usize,
    min_length: usize,
    max_length: usize,
    valid_chars: String,
    uppercase: bool,
    lowercase: bool,
    capitalise: bool,
    verbose: bool,
}

impl Options {
    /// Resolves options against the process environment.
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        Self::resolve_with(cli, &Locator::from_env())
    }

    /// Merges `cli`, the configuration file and defaults, then validates.
    ///
    /// Checks run in a fixed order: phrase count, length bounds, stray
    /// positional arguments, then word file discovery for adjectives and
    /// nouns. The first failure is returned.
    pub fn resolve_with(cli: &Cli, locator: &Locator) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) => FileConfig::from_file(locator.expand(path))?,
            None => match FileConfig::default_location(locator.home()) {
                Some(path) => {
                    tracing::debug!(path = %path.display(), "Loading user config file");
                    FileConfig::from_file(path)?
                }
                None => FileConfig::default(),
            },
        };

        let num = cli.num.or(file.phrase.num).unwrap_or(DEFAULT_NUM);
        let num = usize::try_from(num)
            .ok()
            .filter(|&n| n > 0)
            .ok_or(ConfigError::NoPhrases(num))?;

        let min_length = cli
            .min_length
            .or(file.filter.min)
            .unwrap_or(DEFAULT_MIN_LENGTH);
        let max_length = cli
            .max_length
            .or(file.filter.max)
            .unwrap_or(DEFAULT_MAX_LENGTH);
        if max_length < min_length {
            return Err(ConfigError::LengthBounds {
                min: min_length,
                max: max_length,
            });
        }

        if !cli.extra.is_empty() {
            return Err(ConfigError::TooManyArguments(cli.extra.clone()));
        }

        let adjectives = locator.locate(
            WordKind::Adjectives,
            cli.adjectives
                .as_deref()
                .or(file.wordlists.adjectives.as_deref()),
        )?;
        let nouns = locator.locate(
            WordKind::Nouns,
            cli.nouns.as_deref().or(file.wordlists.nouns.as_deref()),
        )?;

        let options = Self {
            adjectives,
            nouns,
            separator: cli
                .separator
                .clone()
                .or(file.phrase.separator)
                .unwrap_or_else(|| DEFAULT_SEPARATOR.to_string()),
            num,
            min_length,
            max_length,
            valid_chars: cli
                .valid_chars
                .clone()
                .or(file.filter.valid_chars)
                .unwrap_or_else(|| DEFAULT_VALID_CHARS.to_string()),
            uppercase: cli.uppercase || file.format.uppercase,
            lowercase: cli.lowercase || file.format.lowercase,
            capitalise: cli.capitalise || file.format.capitalise,
            verbose: cli.verbose || file.format.verbose,
        };

        tracing::info!(
            adjectives = %options.adjectives.display(),
            nouns = %options.nouns.display(),
            num = options.num,
            "Resolved options"
        );

        Ok(options)
    }

    /// Word file for `kind`.
    pub fn word_file(&self, kind: WordKind) -> &Path {
        match kind {
            WordKind::Adjectives => &self.adjectives,
            WordKind::Nouns => &self.nouns,
        }
    }

    /// Separator placed after each word.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Number of phrases to generate. Always at least one.
    pub fn num(&self) -> usize {
        self.num
    }

    /// Shortest accepted word, in characters.
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Longest accepted word, in characters.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Valid-character regex fragment.
    pub fn valid_chars(&self) -> &str {
        &self.valid_chars
    }

    /// Whether to print the entropy report.
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Case forced onto the output; uppercase wins over lowercase.
    pub fn case_mode(&self) -> CaseMode {
        CaseMode::from_flags(self.uppercase, self.lowercase)
    }

    /// Formatter for the configured capitalisation and case.
    pub fn formatter(&self) -> Formatter {
        Formatter::new(self.capitalise, self.case_mode())
    }

    /// Compiles the word filter for these options.
    pub fn word_filter(&self) -> Result<WordFilter, WordListError> {
        WordFilter::new(self.min_length, self.max_length, &self.valid_chars)
    }
}
