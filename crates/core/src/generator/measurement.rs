use crate::model::{Concept, DifficultyTier, Problem, ProblemDetail, Unit};
use crate::random::RandomSource;

/// General-knowledge questions with fixed answers.
pub const FACTS: [(&str, i64); 6] = [
    ("How many centimeters are in 1 meter?", 100),
    ("How many minutes are in 1 hour?", 60),
    ("How many days are in 1 week?", 7),
    ("How many wheels does a bicycle have?", 2),
    ("How many sides does a triangle have?", 3),
    ("How many fingers do you have on one hand?", 5),
];

pub(super) fn generate(tier: DifficultyTier, rng: &mut impl RandomSource) -> Problem {
    let range = tier.range();
    let last_fact = i64::try_from(FACTS.len()).unwrap_or(i64::MAX) - 1;

    // Above easy the pool gains one comparison entry, drawn before the pick.
    let comparison = (tier != DifficultyTier::Easy).then(|| {
        let first = rng.next_int(range.min, range.max);
        let second = rng.next_int(range.min, range.max);
        let unit = *rng.pick(&Unit::ALL);
        (first, second, unit)
    });

    let upper = if comparison.is_some() { last_fact + 1 } else { last_fact };
    let choice = rng.next_int(0, upper);

    match (usize::try_from(choice).ok().and_then(|i| FACTS.get(i)), comparison) {
        (Some((question, answer)), _) => {
            Problem::new(Concept::Measurement, *question, *answer, None, ProblemDetail::Fact)
        }
        (None, Some((first, second, unit))) => Problem::new(
            Concept::Measurement,
            format!(
                "Which is larger: {first}{u} or {second}{u}?",
                u = unit.suffix()
            ),
            first.max(second),
            None,
            ProblemDetail::Comparison {
                first,
                second,
                unit,
            },
        ),
        (None, None) => {
            let (question, answer) = FACTS[0];
            Problem::new(Concept::Measurement, question, answer, None, ProblemDetail::Fact)
        }
    }
}
