//! Word file discovery.

use super::ConfigError;
use std::fmt;
use std::path::{Path, PathBuf};

/// Directory under the home directory holding per-user defaults.
pub const USER_DIR: &str = ".phrase";

/// The two kinds of word list a phrase is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordKind {
    /// The list both leading words are drawn from.
    Adjectives,
    /// The list the final word is drawn from.
    Nouns,
}

impl WordKind {
    /// Every kind, in load order.
    pub const ALL: [WordKind; 2] = [WordKind::Adjectives, WordKind::Nouns];

    /// Lowercase plural name, as used in file names and messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Adjectives => "adjectives",
            Self::Nouns => "nouns",
        }
    }

    /// Default file name, e.g. `nouns.txt`.
    pub fn file_name(self) -> String {
        format!("{}.txt", self.as_str())
    }
}

impl fmt::Display for WordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves word file paths against a working directory and a home
/// directory.
#[derive(Debug, Clone, Default)]
pub struct Locator {
    work_dir: PathBuf,
    home: Option<PathBuf>,
}

impl Locator {
    /// Creates a locator rooted at `work_dir`.
    pub fn new(work_dir: impl Into<PathBuf>, home: Option<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
            home,
        }
    }

    /// Relative paths stay relative to the process working directory.
    pub fn from_env() -> Self {
        Self::new(PathBuf::new(), dirs::home_dir())
    }

    /// Home directory used for `~` and `~/.phrase`, if known.
    pub fn home(&self) -> Option<&Path> {
        self.home.as_deref()
    }

    /// Expands a leading `~` and anchors relative paths at the working
    /// directory.
    pub fn expand(&self, path: &Path) -> PathBuf {
        let expanded = match (path.strip_prefix("~"), &self.home) {
            (Ok(rest), Some(home)) => home.join(rest),
            _ => path.to_path_buf(),
        };
        self.work_dir.join(expanded)
    }

    /// Candidate locations searched when no path is given, in order.
    pub fn default_candidates(&self, kind: WordKind) -> Vec<PathBuf> {
        let mut candidates = vec![self.work_dir.join(kind.file_name())];
        if let Some(home) = &self.home {
            candidates.push(home.join(USER_DIR).join(kind.file_name()));
        }
        candidates
    }

    /// Returns the word file for `kind`.
    ///
    /// An explicit path must exist. Without one, the first existing default
    /// candidate is used.
    pub fn locate(&self, kind: WordKind, explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
        if let Some(path) = explicit {
            let path = self.expand(path);
            if !path.exists() {
                return Err(ConfigError::MissingWordFile { kind, path });
            }
            return Ok(path);
        }

        let found = self
            .default_candidates(kind)
            .into_iter()
            .find(|candidate| candidate.is_file());

        match found {
            Some(path) => {
                tracing::debug!(%kind, path = %path.display(), "Found default word file");
                Ok(path)
            }
            None => Err(ConfigError::NoWordFile { kind }),
        }
    }
}
