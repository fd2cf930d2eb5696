//! Problem generation for every concept and tier.

mod counting;
mod geometry;
mod measurement;
mod numbers;
mod patterns;

pub use measurement::FACTS;
pub use numbers::operators_for;

use crate::model::{Concept, DifficultyTier, Problem};
use crate::random::RandomSource;

/// Stateless generator producing one `Problem` per call.
///
/// Generation never fails: every `(tier, concept)` pair has a well-formed
/// problem, and all randomness comes from the supplied `RandomSource`.
///
/// # Examples
///
/// ```
/// # use practice_core::generator::ProblemGenerator;
/// # use practice_core::model::{Concept, DifficultyTier};
/// # use practice_core::random::ScriptedRandom;
/// let generator = ProblemGenerator::new();
/// let mut rng = ScriptedRandom::lowest();
/// let problem = generator.generate(DifficultyTier::Easy, Concept::Numbers, &mut rng);
///
/// assert_eq!(problem.prompt(), "1 + 1 = ?");
/// assert_eq!(problem.correct_answer(), 2);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct ProblemGenerator;

impl ProblemGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Generates a single problem.
    pub fn generate(
        &self,
        tier: DifficultyTier,
        concept: Concept,
        rng: &mut impl RandomSource,
    ) -> Problem {
        match concept {
            Concept::Numbers => numbers::generate(tier, rng),
            Concept::Patterns => patterns::generate(tier, rng),
            Concept::Counting => counting::generate(tier, rng),
            Concept::Measurement => measurement::generate(tier, rng),
            Concept::Geometry => geometry::generate(tier, rng),
        }
    }

    /// Generates `count` problems eagerly, in order.
    pub fn generate_set(
        &self,
        tier: DifficultyTier,
        concept: Concept,
        count: usize,
        rng: &mut impl RandomSource,
    ) -> Vec<Problem> {
        (0..count)
            .map(|_| self.generate(tier, concept, rng))
            .collect()
    }

    /// Generates from raw tier/concept names, defaulting unknown names to
    /// `Easy` and `Numbers`.
    pub fn generate_named(
        &self,
        tier: &str,
        concept: &str,
        rng: &mut impl RandomSource,
    ) -> Problem {
        self.generate(
            DifficultyTier::parse_lenient(tier),
            Concept::parse_lenient(concept),
            rng,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{ScriptedRandom, SeededRandom};

    #[test]
    fn every_pair_yields_a_prompt_and_answer() {
        let generator = ProblemGenerator::new();
        let mut rng = SeededRandom::new(1);
        for tier in DifficultyTier::ALL {
            for concept in Concept::ALL {
                for _ in 0..200 {
                    let problem = generator.generate(tier, concept, &mut rng);
                    assert!(!problem.prompt().is_empty());
                    assert_eq!(problem.concept(), concept);
                }
            }
        }
    }

    #[test]
    fn lowest_draws_are_deterministic_per_concept() {
        let generator = ProblemGenerator::new();
        let cases = [
            (Concept::Numbers, "1 + 1 = ?", 2),
            (Concept::Patterns, "What comes next? 1, 3, 5, 7, ___", 9),
            (Concept::Counting, "How many objects do you see?", 1),
            (Concept::Measurement, "How many centimeters are in 1 meter?", 100),
            (Concept::Geometry, "How many sides does this triangle have?", 3),
        ];
        for (concept, prompt, answer) in cases {
            let problem =
                generator.generate(DifficultyTier::Easy, concept, &mut ScriptedRandom::lowest());
            assert_eq!(problem.prompt(), prompt);
            assert_eq!(problem.correct_answer(), answer);
        }
    }

    #[test]
    fn unknown_names_fall_back_to_easy_numbers() {
        let generator = ProblemGenerator::new();
        let problem =
            generator.generate_named("legendary", "calculus", &mut ScriptedRandom::lowest());
        assert_eq!(problem.concept(), Concept::Numbers);
        assert_eq!(problem.prompt(), "1 + 1 = ?");
    }

    #[test]
    fn sets_have_the_requested_length() {
        let generator = ProblemGenerator::new();
        let set = generator.generate_set(
            DifficultyTier::Medium,
            Concept::Geometry,
            25,
            &mut SeededRandom::new(4),
        );
        assert_eq!(set.len(), 25);
    }
}
