//! Word list loading and filtering.
//!
//! A word list is read from a plain text file, one candidate per line.
//! Only lines whose length falls within the configured bounds and whose
//! characters all satisfy the valid-character pattern survive.

mod filter;
mod loader;

pub use filter::{WordFilter, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, DEFAULT_VALID_CHARS};
pub use loader::{WordList, WordListError};
