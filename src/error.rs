//! Crate-level error type.

use crate::config::ConfigError;
use crate::wordlist::WordListError;
use thiserror::Error;

/// Any failure that ends a run.
#[derive(Debug, Error)]
pub enum PhraseError {
    /// Invalid options or configuration file.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A word list could not be built.
    #[error(transparent)]
    WordList(#[from] WordListError),

    /// Writing to stdout failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
