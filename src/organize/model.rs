use std::fmt;
use std::path::PathBuf;

use crate::error::FileError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The destination already held a file with this name.
    AlreadyExists,
}

/// Terminal outcome for one source file.
#[derive(Debug)]
pub enum PlacementResult {
    Copied(PathBuf),
    Skipped(PathBuf, SkipReason),
    Failed { source: PathBuf, error: FileError },
}

impl PlacementResult {
    pub fn is_copied(&self) -> bool {
        matches!(self, Self::Copied(_))
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped(..))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Counts reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub copied: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl Summary {
    pub fn from_results(results: &[PlacementResult]) -> Self {
        Self {
            copied: results.iter().filter(|r| r.is_copied()).count(),
            skipped: results.iter().filter(|r| r.is_skipped()).count(),
            failed: results.iter().filter(|r| r.is_failed()).count(),
        }
    }

    pub fn total(&self) -> usize {
        self.copied + self.skipped + self.failed
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Copied: {}, skipped: {}, failed: {}",
            self.copied, self.skipped, self.failed
        )
    }
}
