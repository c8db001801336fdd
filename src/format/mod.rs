//! Case transformations applied to generated phrases.

mod case;

pub use case::{capitalise_word, CaseMode, Formatter};
