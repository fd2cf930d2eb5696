use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Error returned when a difficulty tier name is not recognized.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown difficulty tier: {raw}")]
pub struct ParseTierError {
    raw: String,
}

//
// ─── NUMBER RANGE ──────────────────────────────────────────────────────────────
//

/// Inclusive operand range `[min, max]` for a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberRange {
    pub min: i64,
    pub max: i64,
}

impl NumberRange {
    #[must_use]
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

//
// ─── DIFFICULTY TIER ───────────────────────────────────────────────────────────
//

/// Difficulty band that fixes the numeric range problems are drawn from.
///
/// - `Easy`: 1 to 10, addition and subtraction only
/// - `Medium`: 1 to 99, adds multiplication
/// - `Hard`: 0 to 999, adds division
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyTier {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl DifficultyTier {
    pub const ALL: [DifficultyTier; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Inclusive operand range for this tier.
    #[must_use]
    pub const fn range(self) -> NumberRange {
        match self {
            Self::Easy => NumberRange::new(1, 10),
            Self::Medium => NumberRange::new(1, 99),
            Self::Hard => NumberRange::new(0, 999),
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy (1-10)",
            Self::Medium => "Medium (1-99)",
            Self::Hard => "Hard (0-999)",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Parses a tier name, falling back to `Easy` for anything unrecognized.
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }
}

impl fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DifficultyTier {
    type Err = ParseTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(ParseTierError { raw: s.to_string() }),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
