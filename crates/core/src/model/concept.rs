use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a concept name is not recognized.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown concept: {raw}")]
pub struct ParseConceptError {
    raw: String,
}

/// Pedagogical category a problem belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Concept {
    #[default]
    Numbers,
    Patterns,
    Counting,
    Measurement,
    Geometry,
}

impl Concept {
    pub const ALL: [Concept; 5] = [
        Self::Numbers,
        Self::Patterns,
        Self::Counting,
        Self::Measurement,
        Self::Geometry,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Numbers => "numbers",
            Self::Patterns => "patterns",
            Self::Counting => "counting",
            Self::Measurement => "measurement",
            Self::Geometry => "geometry",
        }
    }

    /// Human-readable title used by shells when listing concepts.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Numbers => "Numbers & Operations",
            Self::Patterns => "Patterns",
            Self::Counting => "Counting & Data Handling",
            Self::Measurement => "Measurement",
            Self::Geometry => "Geometry",
        }
    }

    /// Parses a concept name, falling back to `Numbers` for anything unrecognized.
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }
}

impl fmt::Display for Concept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Concept {
    type Err = ParseConceptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // `datahandling` is the legacy name of the counting concept.
        match s.trim().to_ascii_lowercase().as_str() {
            "numbers" => Ok(Self::Numbers),
            "patterns" => Ok(Self::Patterns),
            "counting" | "datahandling" => Ok(Self::Counting),
            "measurement" => Ok(Self::Measurement),
            "geometry" => Ok(Self::Geometry),
            _ => Err(ParseConceptError { raw: s.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_data_handling_name_maps_to_counting() {
        assert_eq!("dataHandling".parse::<Concept>().unwrap(), Concept::Counting);
    }

    #[test]
    fn unknown_concept_falls_back_to_numbers() {
        assert!("fractions".parse::<Concept>().is_err());
        assert_eq!(Concept::parse_lenient("fractions"), Concept::Numbers);
        assert_eq!(Concept::parse_lenient(""), Concept::Numbers);
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for concept in Concept::ALL {
            assert_eq!(concept.to_string().parse::<Concept>().unwrap(), concept);
        }
    }
}
