use crate::model::{
    Concept, DifficultyTier, Problem, ProblemDetail, SHAPE_SIZE_GROUP, SHAPE_SIZE_SINGLE, Shape,
    ShapeQuestion, VisualAid,
};
use crate::random::RandomSource;

const MIN_SHAPES: i64 = 2;
const MAX_SHAPES: i64 = 8;

const QUESTIONS: [ShapeQuestion; 3] = [
    ShapeQuestion::Sides,
    ShapeQuestion::Vertices,
    ShapeQuestion::Count,
];

pub(super) fn generate(tier: DifficultyTier, rng: &mut impl RandomSource) -> Problem {
    let shape = *rng.pick(&Shape::CATALOGUE);
    let question = *rng.pick(&QUESTIONS);
    let name = shape.name();

    let (prompt, answer, count, size) = match question {
        ShapeQuestion::Count => {
            let drawn = rng.next_int(MIN_SHAPES, MAX_SHAPES.min(tier.range().max));
            let count = u32::try_from(drawn).unwrap_or(2);
            (
                format!("How many {name}s do you see?"),
                count,
                count,
                SHAPE_SIZE_GROUP,
            )
        }
        ShapeQuestion::Sides => (
            format!("How many sides does this {name} have?"),
            shape.sides(),
            1,
            SHAPE_SIZE_SINGLE,
        ),
        ShapeQuestion::Vertices => (
            format!("How many vertices (corners) does this {name} have?"),
            shape.vertices(),
            1,
            SHAPE_SIZE_SINGLE,
        ),
    };

    Problem::new(
        Concept::Geometry,
        prompt,
        i64::from(answer),
        Some(VisualAid::Shapes { shape, count, size }),
        ProblemDetail::Shape { shape, question },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{ScriptedRandom, SeededRandom};

    #[test]
    fn circle_has_no_sides_or_vertices() {
        // circle, sides
        let problem = generate(DifficultyTier::Easy, &mut ScriptedRandom::new(vec![3, 0]));
        assert_eq!(problem.prompt(), "How many sides does this circle have?");
        assert_eq!(problem.correct_answer(), 0);

        let problem = generate(DifficultyTier::Easy, &mut ScriptedRandom::new(vec![3, 1]));
        assert_eq!(problem.correct_answer(), 0);
    }

    #[test]
    fn count_mode_shows_answer_many_shapes() {
        // hexagon, count, five of them
        let mut rng = ScriptedRandom::new(vec![5, 2, 5]);
        let problem = generate(DifficultyTier::Medium, &mut rng);
        assert_eq!(problem.prompt(), "How many hexagons do you see?");
        assert_eq!(problem.correct_answer(), 5);
        assert_eq!(
            problem.visual(),
            Some(&VisualAid::Shapes {
                shape: Shape::Hexagon,
                count: 5,
                size: SHAPE_SIZE_GROUP
            })
        );
    }

    #[test]
    fn answers_follow_the_catalogue() {
        let mut rng = SeededRandom::new(21);
        for _ in 0..500 {
            let problem = generate(DifficultyTier::Hard, &mut rng);
            let ProblemDetail::Shape { shape, question } = *problem.detail() else {
                panic!("geometry problem without shape detail");
            };
            let expected = match question {
                ShapeQuestion::Sides => i64::from(shape.sides()),
                ShapeQuestion::Vertices => i64::from(shape.vertices()),
                ShapeQuestion::Count => {
                    let shown = problem.visual().and_then(|v| v.instance_count()).unwrap();
                    assert!((2..=8).contains(&shown));
                    i64::from(shown)
                }
            };
            assert_eq!(problem.correct_answer(), expected);
        }
    }
}
