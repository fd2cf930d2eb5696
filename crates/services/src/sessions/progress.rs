use serde::Serialize;

/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizProgress {
    /// Zero-based index of the problem currently shown.
    pub index: usize,
    pub total: usize,
    pub score: u32,
}

impl QuizProgress {
    /// Problems not yet answered.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.index)
    }
}

/// Outcome of a single submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnswerFeedback {
    pub correct: bool,
    pub correct_answer: i64,
    pub is_complete: bool,
}

/// One answered problem, for reviewing a session after the fact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewItem {
    pub prompt: String,
    pub correct_answer: i64,
    pub submitted: Option<f64>,
    pub correct: bool,
}
