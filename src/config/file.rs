//! Optional TOML configuration file.
//!
//! Every key is optional. Values given on the command line take
//! precedence over the file, and the file over built-in defaults.

use super::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File name of the per-user configuration inside `~/.phrase`.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Full configuration file format.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// `[wordlists]` section.
    #[serde(default)]
    pub wordlists: WordListsConfig,
    /// `[phrase]` section.
    #[serde(default)]
    pub phrase: PhraseConfig,
    /// `[filter]` section.
    #[serde(default)]
    pub filter: FilterConfig,
    /// `[format]` section.
    #[serde(default)]
    pub format: FormatConfig,
}

/// Word file locations.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WordListsConfig {
    /// Adjective word file.
    pub adjectives: Option<PathBuf>,
    /// Noun word file.
    pub nouns: Option<PathBuf>,
}

/// Phrase shape.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PhraseConfig {
    /// Separator placed after each word.
    pub separator: Option<String>,
    /// Signed so that zero and negative counts reach validation.
    pub num: Option<i64>,
}

/// Word filtering.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterConfig {
    /// Shortest accepted word.
    pub min: Option<usize>,
    /// Longest accepted word.
    pub max: Option<usize>,
    /// Valid-character regex fragment.
    pub valid_chars: Option<String>,
}

/// Output formatting and reporting.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatConfig {
    /// Force uppercase.
    #[serde(default)]
    pub uppercase: bool,
    /// Force lowercase.
    #[serde(default)]
    pub lowercase: bool,
    /// Capitalise each word.
    #[serde(default, alias = "capitalize")]
    pub capitalise: bool,
    /// Print the entropy report.
    #[serde(default)]
    pub verbose: bool,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// `~/.phrase/config.toml`, if it exists.
    pub fn default_location(home: Option<&Path>) -> Option<PathBuf> {
        home.map(|h| h.join(super::USER_DIR).join(CONFIG_FILE_NAME))
            .filter(|p| p.is_file())
    }
}
