use crate::model::{Concept, DifficultyTier, Problem, ProblemDetail, Progression};
use crate::random::RandomSource;

const TERM_COUNT: usize = 5;
const MAX_START: i64 = 10;
const FALLBACK_FACTOR: i64 = 2;

const PROGRESSIONS: [Progression; 3] = [
    Progression::Additive,
    Progression::Subtractive,
    Progression::Multiplicative,
];

pub(super) fn generate(tier: DifficultyTier, rng: &mut impl RandomSource) -> Problem {
    let max = tier.range().max;
    let progression = *rng.pick(&PROGRESSIONS);
    let start = rng.next_int(1, MAX_START.min(max));
    let step = rng.next_int(2, 5);

    let (progression, terms) = match progression {
        Progression::Additive => (progression, additive(start, step)),
        Progression::Subtractive => (progression, subtractive(start, step)),
        // A run that overflows even when doubling is rebuilt as an additive one.
        Progression::Multiplicative => multiplicative(start, step, max).map_or_else(
            || (Progression::Additive, additive(start, step)),
            |terms| (Progression::Multiplicative, terms),
        ),
    };

    let shown = terms[..TERM_COUNT - 1]
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let answer = terms[TERM_COUNT - 1];

    Problem::new(
        Concept::Patterns,
        format!("What comes next? {shown}, ___"),
        answer,
        None,
        ProblemDetail::Pattern { progression, terms },
    )
}

fn additive(start: i64, step: i64) -> Vec<i64> {
    successors(start, |prev| prev + step)
}

/// Steps down by `step`, stepping up instead whenever a term would go negative.
fn subtractive(start: i64, step: i64) -> Vec<i64> {
    successors(start, |prev| {
        let next = prev - step;
        if next < 0 { prev + step } else { next }
    })
}

/// Multiplies by `step`; once a product exceeds `max` the factor drops to 2 for
/// the rest of the run. Returns `None` when even doubling overflows `max`.
fn multiplicative(start: i64, step: i64, max: i64) -> Option<Vec<i64>> {
    let mut factor = step;
    let mut terms = Vec::with_capacity(TERM_COUNT);
    terms.push(start);
    while terms.len() < TERM_COUNT {
        let prev = terms[terms.len() - 1];
        let mut next = prev * factor;
        if next > max {
            factor = FALLBACK_FACTOR;
            next = prev * factor;
            if next > max {
                return None;
            }
        }
        terms.push(next);
    }
    Some(terms)
}

fn successors(start: i64, next: impl Fn(i64) -> i64) -> Vec<i64> {
    std::iter::successors(Some(start), |prev| Some(next(*prev)))
        .take(TERM_COUNT)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{ScriptedRandom, SeededRandom};

    fn terms_of(problem: &Problem) -> (Progression, Vec<i64>) {
        match problem.detail() {
            ProblemDetail::Pattern { progression, terms } => (*progression, terms.clone()),
            other => panic!("unexpected detail {other:?}"),
        }
    }

    #[test]
    fn additive_prompt_shows_four_terms() {
        // additive, start 2, step 3
        let mut rng = ScriptedRandom::new(vec![0, 2, 3]);
        let problem = generate(DifficultyTier::Easy, &mut rng);
        assert_eq!(problem.prompt(), "What comes next? 2, 5, 8, 11, ___");
        assert_eq!(problem.correct_answer(), 14);
    }

    #[test]
    fn subtractive_bounces_instead_of_going_negative() {
        assert_eq!(subtractive(7, 3), vec![7, 4, 1, 4, 1]);
        assert_eq!(subtractive(2, 5), vec![2, 7, 2, 7, 2]);
    }

    #[test]
    fn multiplicative_drops_to_doubling_for_the_rest_of_the_run() {
        assert_eq!(multiplicative(1, 3, 99), Some(vec![1, 3, 9, 27, 81]));
        assert_eq!(multiplicative(3, 5, 999), Some(vec![3, 15, 75, 375, 750]));
        assert_eq!(multiplicative(9, 5, 999), Some(vec![9, 45, 225, 450, 900]));
        assert_eq!(multiplicative(3, 5, 99), None);
    }

    #[test]
    fn overflowing_multiplicative_becomes_additive() {
        // multiplicative, start 10, step 2 on the easy tier (max 10)
        let mut rng = ScriptedRandom::new(vec![2, 10, 2]);
        let problem = generate(DifficultyTier::Easy, &mut rng);
        let (progression, terms) = terms_of(&problem);
        assert_eq!(progression, Progression::Additive);
        assert_eq!(terms, vec![10, 12, 14, 16, 18]);
    }

    #[test]
    fn random_sequences_hold_their_invariants() {
        let mut rng = SeededRandom::new(11);
        for tier in DifficultyTier::ALL {
            let max = tier.range().max;
            for _ in 0..500 {
                let problem = generate(tier, &mut rng);
                let (progression, terms) = terms_of(&problem);
                assert_eq!(terms.len(), TERM_COUNT);
                assert_eq!(problem.correct_answer(), terms[4]);
                match progression {
                    Progression::Subtractive => assert!(terms.iter().all(|t| *t >= 0)),
                    Progression::Multiplicative => assert!(terms.iter().all(|t| *t <= max)),
                    Progression::Additive => {
                        assert!(terms.windows(2).all(|w| w[1] > w[0]));
                    }
                }
            }
        }
    }
}
