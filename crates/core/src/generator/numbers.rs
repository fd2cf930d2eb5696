use crate::model::{Concept, DifficultyTier, Operator, Problem, ProblemDetail, VisualAid};
use crate::random::RandomSource;

/// Largest divisor offered by division problems.
const MAX_DIVISOR: i64 = 10;

/// Operators unlocked at each tier.
#[must_use]
pub fn operators_for(tier: DifficultyTier) -> &'static [Operator] {
    match tier {
        DifficultyTier::Easy => &[Operator::Add, Operator::Subtract],
        DifficultyTier::Medium => &[Operator::Add, Operator::Subtract, Operator::Multiply],
        DifficultyTier::Hard => &[
            Operator::Add,
            Operator::Subtract,
            Operator::Multiply,
            Operator::Divide,
        ],
    }
}

pub(super) fn generate(tier: DifficultyTier, rng: &mut impl RandomSource) -> Problem {
    let range = tier.range();
    let operator = *rng.pick(operators_for(tier));

    let (lhs, rhs) = match operator {
        Operator::Divide => {
            let divisor = rng.next_int(1, MAX_DIVISOR.min(range.max));
            let quotient = rng.next_int(1, range.max / divisor);
            (divisor * quotient, divisor)
        }
        Operator::Subtract => {
            let a = rng.next_int(range.min, range.max);
            let b = rng.next_int(range.min, range.max);
            if a < b { (b, a) } else { (a, b) }
        }
        Operator::Add | Operator::Multiply => (
            rng.next_int(range.min, range.max),
            rng.next_int(range.min, range.max),
        ),
    };

    let answer = operator.apply(lhs, rhs);
    let visual = (tier == DifficultyTier::Easy
        && matches!(operator, Operator::Add | Operator::Subtract))
    .then(|| number_line(lhs, rhs, operator));

    Problem::new(
        Concept::Numbers,
        format!("{lhs} {} {rhs} = ?", operator.symbol()),
        answer,
        visual,
        ProblemDetail::Arithmetic { lhs, operator, rhs },
    )
}

/// Number line wide enough to show both operands, the sum and the difference.
fn number_line(lhs: i64, rhs: i64, operator: Operator) -> VisualAid {
    let sum = lhs + rhs;
    let diff = lhs - rhs;
    VisualAid::NumberLine {
        start: 0_i64.min(diff).min(sum) - 1,
        end: lhs.max(sum).max(diff) + 1,
        operator,
    }
}
