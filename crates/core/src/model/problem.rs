use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::{Concept, Icon, Shape, VisualAid};

//
// ─── OPERATOR ──────────────────────────────────────────────────────────────────
//

/// Arithmetic operator used by number problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Display symbol. Subtraction uses the typographic minus sign.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "\u{2212}",
            Self::Multiply => "\u{d7}",
            Self::Divide => "\u{f7}",
        }
    }

    /// Applies the operator. Division truncates, callers construct exact quotients.
    #[must_use]
    pub fn apply(self, lhs: i64, rhs: i64) -> i64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs.checked_div(rhs).unwrap_or(0),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

//
// ─── DETAIL ENUMS ──────────────────────────────────────────────────────────────
//

/// How a pattern sequence advances from one term to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Progression {
    Additive,
    Subtractive,
    Multiplicative,
}

/// What a geometry problem asks about its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeQuestion {
    Sides,
    Vertices,
    Count,
}

/// Unit label attached to a comparison problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    Centimeters,
    Kilograms,
    Meters,
}

impl Unit {
    pub const ALL: [Unit; 3] = [Self::Centimeters, Self::Kilograms, Self::Meters];

    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Centimeters => "cm",
            Self::Kilograms => "kg",
            Self::Meters => "m",
        }
    }
}

/// Structured inputs a problem's prompt was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProblemDetail {
    Arithmetic {
        lhs: i64,
        operator: Operator,
        rhs: i64,
    },
    Pattern {
        progression: Progression,
        terms: Vec<i64>,
    },
    Counting {
        icon: Icon,
        count: u32,
    },
    Fact,
    Comparison {
        first: i64,
        second: i64,
        unit: Unit,
    },
    Shape {
        shape: Shape,
        question: ShapeQuestion,
    },
}

//
// ─── PROBLEM ───────────────────────────────────────────────────────────────────
//

/// A single generated question with its answer and optional visual aid.
///
/// Problems are immutable once generated; the answer is always an integer,
/// including division results, which are constructed to be exact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    prompt: String,
    correct_answer: i64,
    concept: Concept,
    visual: Option<VisualAid>,
    detail: ProblemDetail,
}

impl Problem {
    #[must_use]
    pub fn new(
        concept: Concept,
        prompt: impl Into<String>,
        correct_answer: i64,
        visual: Option<VisualAid>,
        detail: ProblemDetail,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            correct_answer,
            concept,
            visual,
            detail,
        }
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn correct_answer(&self) -> i64 {
        self.correct_answer
    }

    #[must_use]
    pub fn concept(&self) -> Concept {
        self.concept
    }

    #[must_use]
    pub fn visual(&self) -> Option<&VisualAid> {
        self.visual.as_ref()
    }

    #[must_use]
    pub fn detail(&self) -> &ProblemDetail {
        &self.detail
    }

    /// True for measurement problems asking which of two quantities is larger.
    #[must_use]
    pub fn is_comparison(&self) -> bool {
        matches!(self.detail, ProblemDetail::Comparison { .. })
    }

    /// Exact match against the correct answer. `NaN` never matches.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::float_cmp)]
    pub fn is_correct(&self, value: f64) -> bool {
        value == self.correct_answer as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_symbols_use_typographic_forms() {
        assert_eq!(Operator::Add.symbol(), "+");
        assert_eq!(Operator::Subtract.symbol(), "−");
        assert_eq!(Operator::Multiply.symbol(), "×");
        assert_eq!(Operator::Divide.symbol(), "÷");
    }

    #[test]
    fn exact_answer_matching() {
        let problem = Problem::new(
            Concept::Numbers,
            "2 + 3 = ?",
            5,
            None,
            ProblemDetail::Arithmetic {
                lhs: 2,
                operator: Operator::Add,
                rhs: 3,
            },
        );
        assert!(problem.is_correct(5.0));
        assert!(!problem.is_correct(5.000_001));
        assert!(!problem.is_correct(f64::NAN));
        assert!(!problem.is_comparison());
    }

    #[test]
    fn detail_serializes_with_kind_tag() {
        let detail = ProblemDetail::Comparison {
            first: 3,
            second: 9,
            unit: Unit::Kilograms,
        };
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["kind"], "comparison");
        assert_eq!(json["second"], 9);
    }
}
