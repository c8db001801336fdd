//! Command-line interface definition.
//!
//! Every value option is optional here so that a configuration file can
//! fill in what the command line leaves out. Defaults are applied in
//! [`crate::config::Options::resolve`].

use clap::Parser;
use std::path::PathBuf;

/// Generate memorable "adjective adjective noun" passphrases.
#[derive(Parser, Debug, Default, Clone)]
#[command(
    name = "phrase",
    about = "Generate memorable \"adjective adjective noun\" passphrases",
    long_about = "Generates random passphrases of two adjectives and a noun, drawn uniformly \
                  from your own word lists. Without --adjectives/--nouns the lists are looked \
                  up as ./<type>.txt, then ~/.phrase/<type>.txt. Defaults may also be set in \
                  ~/.phrase/config.toml."
)]
pub struct Cli {
    /// List of valid adjectives for the phrase
    #[arg(long, value_name = "PATH")]
    pub adjectives: Option<PathBuf>,

    /// List of valid nouns for the phrase
    #[arg(long, value_name = "PATH")]
    pub nouns: Option<PathBuf>,

    /// Separator to add after each word [default: " "]
    #[arg(short, long, value_name = "STR", allow_hyphen_values = true)]
    pub separator: Option<String>,

    /// Number of phrases to generate [default: 1]
    #[arg(short, long, value_name = "INT", allow_negative_numbers = true)]
    pub num: Option<i64>,

    /// Minimum length of a valid word [default: 0]
    #[arg(long = "min", value_name = "INT")]
    pub min_length: Option<usize>,

    /// Maximum length of a valid word [default: 20]
    #[arg(long = "max", value_name = "INT")]
    pub max_length: Option<usize>,

    /// Valid characters as a regex fragment, e.g. '[a-z]' [default: "."]
    #[arg(long = "valid_chars", visible_alias = "valid-chars", value_name = "REGEX")]
    pub valid_chars: Option<String>,

    /// Force the passphrase into uppercase
    #[arg(short = 'U', long)]
    pub uppercase: bool,

    /// Force the passphrase into lowercase
    #[arg(short = 'L', long)]
    pub lowercase: bool,

    /// Capitalise the first letter of each word
    #[arg(short = 'C', long = "capitalise", visible_alias = "capitalize")]
    pub capitalise: bool,

    /// Report word list locations and entropy
    #[arg(short = 'V', long)]
    pub verbose: bool,

    /// Read defaults from this TOML file instead of ~/.phrase/config.toml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Positional arguments are not accepted; captured to report them.
    #[arg(hide = true)]
    pub extra: Vec<String>,
}
