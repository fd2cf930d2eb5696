use crate::model::{Concept, DifficultyTier, Icon, Problem, ProblemDetail, VisualAid};
use crate::random::RandomSource;

const MAX_OBJECTS: i64 = 15;

pub(super) fn generate(tier: DifficultyTier, rng: &mut impl RandomSource) -> Problem {
    let range = tier.range();
    let icon = *rng.pick(&Icon::ALL);
    let drawn = rng.next_int(range.min.max(1), MAX_OBJECTS.min(range.max));
    let count = u32::try_from(drawn).unwrap_or(1);

    Problem::new(
        Concept::Counting,
        "How many objects do you see?",
        i64::from(count),
        Some(VisualAid::IconGroup { icon, count }),
        ProblemDetail::Counting { icon, count },
    )
}
