//! Run configuration.
//!
//! Command-line flags, an optional TOML file and built-in defaults are
//! merged into a single validated [`Options`] value. Validation is eager:
//! an `Options` that exists is always consistent.

mod file;
mod locate;
mod options;

pub use file::{FileConfig, FilterConfig, FormatConfig, PhraseConfig, WordListsConfig};
pub use locate::{Locator, WordKind, USER_DIR};
pub use options::{Options, DEFAULT_NUM, DEFAULT_SEPARATOR};

use std::path::PathBuf;

/// Configuration and validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// The phrase count is zero or negative.
    #[error("little point running without generating even a single passphrase (got --num {0})")]
    NoPhrases(i64),

    /// The maximum word length is below the minimum.
    #[error(
        "the maximum length of a word ({max}) can not be less than the minimum length ({min}); \
         check the specified settings"
    )]
    LengthBounds {
        /// Configured minimum length.
        min: usize,
        /// Configured maximum length.
        max: usize,
    },

    /// Positional arguments were given.
    #[error("too many arguments: {}", .0.join(" "))]
    TooManyArguments(Vec<String>),

    /// An explicitly configured word file does not exist.
    #[error("could not open the specified {kind} word file {}", path.display())]
    MissingWordFile {
        /// Which list the file was meant for.
        kind: WordKind,
        /// The path after `~` expansion.
        path: PathBuf,
    },

    /// No default word file exists for this kind.
    #[error("could not find {kind} word file, or word file does not exist")]
    NoWordFile {
        /// Which list is missing.
        kind: WordKind,
    },

    /// The configuration file could not be read.
    #[error("failed to read config file {}: {reason}", path.display())]
    FileReadError {
        /// Configuration file path.
        path: PathBuf,
        /// Underlying I/O error message.
        reason: String,
    },

    /// The configuration file is not valid TOML for [`FileConfig`].
    #[error("failed to parse config file {}: {reason}", path.display())]
    ParseError {
        /// Configuration file path.
        path: PathBuf,
        /// Parser error message.
        reason: String,
    },
}
