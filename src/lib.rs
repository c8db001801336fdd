//! Memorable passphrase generation.
//!
//! Builds phrases of the form "adjective adjective noun" by sampling
//! uniformly from user-supplied word lists.
//!
//! # Architecture
//!
//! A run is a straight line:
//!
//! ```text
//! config → wordlist (adjectives, nouns) → [entropy report] → generation → format → output
//! ```
//!
//! The random source is chosen once, before anything else happens, and
//! injected into the generator. Nothing is written until the whole output
//! block has been produced, so a failed run prints no phrases.
//!
//! # Example
//!
//! ```
//! use phrase::{CaseMode, Formatter, PhraseGenerator, WordList};
//! use rand_chacha::ChaCha20Rng;
//! use rand_core::SeedableRng;
//!
//! let adjectives = WordList::from_words(vec!["quiet".into(), "amber".into()], "adjectives.txt")?;
//! let nouns = WordList::from_words(vec!["harbour".into()], "nouns.txt")?;
//!
//! let mut generator =
//!     PhraseGenerator::new(&adjectives, &nouns, "-", ChaCha20Rng::seed_from_u64(1));
//! let phrase = Formatter::new(true, CaseMode::Preserve).render(&mut generator, 1);
//!
//! assert!(phrase.ends_with("-Harbour-"));
//! # Ok::<(), phrase::WordListError>(())
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod entropy;
pub mod error;
pub mod format;
pub mod generation;
pub mod wordlist;

// Re-export commonly used types at crate root
pub use cli::Cli;
pub use config::{ConfigError, Options, WordKind};
pub use entropy::EntropyReport;
pub use error::PhraseError;
pub use format::{CaseMode, Formatter};
pub use generation::{PhraseGenerator, RandomSource};
pub use wordlist::{WordFilter, WordList, WordListError};

use rand_core::RngCore;
use std::io::Write;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Loads both word lists, generates the phrases and writes them to `out`.
///
/// With verbose options the entropy report precedes the phrases.
pub fn run<R, W>(options: &Options, rng: R, out: &mut W) -> Result<(), PhraseError>
where
    R: RngCore,
    W: Write + ?Sized,
{
    let filter = options.word_filter()?;
    let adjectives = WordList::load(options.word_file(WordKind::Adjectives), &filter)?;
    let nouns = WordList::load(options.word_file(WordKind::Nouns), &filter)?;

    let mut output = String::new();
    if options.verbose() {
        output.push_str(&EntropyReport::new(&adjectives, &nouns).to_string());
    }

    let mut generator = PhraseGenerator::new(&adjectives, &nouns, options.separator(), rng);
    output.push_str(&options.formatter().render(&mut generator, options.num()));
    output.push('\n');

    out.write_all(output.as_bytes())?;
    out.flush()?;
    Ok(())
}
