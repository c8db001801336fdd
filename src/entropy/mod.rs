//! Entropy reporting for loaded word lists.
//!
//! Entropy here is simply `log2` of the number of equally likely choices.
//! Reporting never influences generation.

mod report;

pub use report::{format_bits, EntropyReport, ListEntropy};
