use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("problem count must be between 1 and {max}, got {provided}")]
    InvalidProblemCount { provided: u32, max: u32 },
}

//
// ─── SETTINGS ──────────────────────────────────────────────────────────────────
//

/// Configuration for a practice attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSettings {
    problem_count: u32,
}

impl QuizSettings {
    pub const DEFAULT_PROBLEM_COUNT: u32 = 25;
    pub const MAX_PROBLEM_COUNT: u32 = 100;

    /// Creates settings with a custom number of problems per session.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidProblemCount` if `problem_count` is zero
    /// or above `MAX_PROBLEM_COUNT`.
    pub fn new(problem_count: u32) -> Result<Self, SettingsError> {
        if problem_count == 0 || problem_count > Self::MAX_PROBLEM_COUNT {
            return Err(SettingsError::InvalidProblemCount {
                provided: problem_count,
                max: Self::MAX_PROBLEM_COUNT,
            });
        }
        Ok(Self { problem_count })
    }

    #[must_use]
    pub fn problem_count(&self) -> u32 {
        self.problem_count
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            problem_count: Self::DEFAULT_PROBLEM_COUNT,
        }
    }
}
