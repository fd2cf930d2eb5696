use practice_core::model::{Concept, DifficultyTier, Problem};

use super::progress::{AnswerFeedback, QuizProgress};
use super::result::QuizResult;
use super::session::{QuizSession, SessionState};
use crate::error::SessionError;
use crate::format::{format_elapsed, parse_answer};

/// Result of submitting an answer through the loop.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    pub feedback: AnswerFeedback,
    pub progress: QuizProgress,
    pub result: Option<QuizResult>,
}

/// Synchronous command surface a presentation shell drives.
///
/// Owns the single `QuizSession` for the shell; every mutation goes through
/// one of the `on_*` commands.
#[derive(Debug)]
pub struct PracticeLoop {
    session: QuizSession,
}

impl PracticeLoop {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    /// Begin an attempt and return the first problem.
    pub fn on_start(&mut self, tier: DifficultyTier, concept: Concept) -> Option<&Problem> {
        self.session.start(tier, concept);
        self.session.current_problem()
    }

    /// Submit a numeric answer for the current problem.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the session is not running.
    pub fn on_submit(&mut self, value: f64) -> Result<SubmitOutcome, SessionError> {
        let feedback = self.session.submit_answer(value)?;
        Ok(SubmitOutcome {
            feedback,
            progress: self.session.progress(),
            result: self.session.result().cloned(),
        })
    }

    /// Submit raw typed input; unparseable input counts as no answer.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the session is not running.
    pub fn on_submit_text(&mut self, raw: &str) -> Result<SubmitOutcome, SessionError> {
        self.on_submit(parse_answer(raw))
    }

    /// Timer text for the display tick, or `None` once the session is not running.
    pub fn on_tick(&mut self) -> Option<String> {
        if self.session.state() != SessionState::Running {
            return None;
        }
        Some(format_elapsed(self.session.tick()))
    }

    /// Practice again with the same tier and concept.
    pub fn on_restart(&mut self) -> Option<&Problem> {
        self.session.restart();
        self.session.current_problem()
    }

    /// The shell closed the practice view; stop the clock.
    pub fn on_close(&mut self) {
        self.session.finish();
    }

    #[must_use]
    pub fn current_problem(&self) -> Option<&Problem> {
        self.session.current_problem()
    }
}
