use thiserror::Error;

use crate::model::{ParseConceptError, ParseTierError, SettingsError};

/// Umbrella error for the core crate.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Tier(#[from] ParseTierError),
    #[error(transparent)]
    Concept(#[from] ParseConceptError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Concept, DifficultyTier, QuizSettings};

    fn configure(
        tier: &str,
        concept: &str,
        count: u32,
    ) -> Result<(DifficultyTier, Concept, QuizSettings), Error> {
        Ok((tier.parse()?, concept.parse()?, QuizSettings::new(count)?))
    }

    #[test]
    fn component_errors_convert_into_the_crate_error() {
        assert!(configure("hard", "patterns", 10).is_ok());
        assert!(matches!(configure("wild", "patterns", 10), Err(Error::Tier(_))));
        assert!(matches!(configure("easy", "poetry", 10), Err(Error::Concept(_))));
        assert!(matches!(configure("easy", "numbers", 0), Err(Error::Settings(_))));
    }
}
