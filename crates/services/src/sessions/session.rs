use chrono::{DateTime, Utc};
use std::fmt;

use practice_core::model::{Concept, DifficultyTier, Problem, QuizSettings};
use practice_core::time::whole_seconds_between;
use practice_core::{Clock, ProblemGenerator, RandomSource, ThreadRandom};

use super::progress::{AnswerFeedback, QuizProgress, ReviewItem};
use super::result::QuizResult;
use crate::error::SessionError;

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// Lifecycle of a practice attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Idle,
    Running,
    Completed,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory practice attempt over a fixed, eagerly generated problem set.
///
/// The session steps through its problems in order, scoring each submitted
/// answer by exact equality. It completes once every problem is answered or
/// `finish` is called, at which point the elapsed time is frozen and a
/// `QuizResult` is computed.
pub struct QuizSession {
    generator: ProblemGenerator,
    rng: Box<dyn RandomSource>,
    clock: Clock,
    settings: QuizSettings,
    tier: DifficultyTier,
    concept: Concept,
    problems: Vec<Problem>,
    current: usize,
    score: u32,
    answers: Vec<f64>,
    state: SessionState,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
    last_elapsed: u64,
    result: Option<QuizResult>,
}

impl QuizSession {
    /// Create an idle session drawing randomness from the thread-local generator.
    #[must_use]
    pub fn new(settings: QuizSettings, clock: Clock) -> Self {
        Self {
            generator: ProblemGenerator::new(),
            rng: Box::new(ThreadRandom),
            clock,
            settings,
            tier: DifficultyTier::default(),
            concept: Concept::default(),
            problems: Vec::new(),
            current: 0,
            score: 0,
            answers: Vec::new(),
            state: SessionState::Idle,
            started_at: None,
            completed_at: None,
            last_elapsed: 0,
            result: None,
        }
    }

    /// Replace the random source, e.g. with a seeded or scripted one.
    #[must_use]
    pub fn with_random(mut self, rng: impl RandomSource + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    /// Change how many problems the next `start` generates.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Settings` if the count is out of range.
    pub fn with_problem_count(mut self, count: u32) -> Result<Self, SessionError> {
        self.settings = QuizSettings::new(count)?;
        Ok(self)
    }

    /// Start a fresh attempt, discarding any previous progress.
    pub fn start(&mut self, tier: DifficultyTier, concept: Concept) {
        let count = self.settings.problem_count() as usize;
        self.tier = tier;
        self.concept = concept;
        self.problems = self
            .generator
            .generate_set(tier, concept, count, &mut self.rng);
        self.current = 0;
        self.score = 0;
        self.answers.clear();
        self.started_at = Some(self.clock.now());
        self.completed_at = None;
        self.last_elapsed = 0;
        self.result = None;
        self.state = SessionState::Running;

        log::debug!("quiz started: tier={tier} concept={concept} problems={count}");
    }

    /// Start again with the same tier and concept and a newly generated set.
    pub fn restart(&mut self) {
        self.start(self.tier, self.concept);
    }

    /// Score an answer for the current problem and advance.
    ///
    /// `NaN` stands for "no answer" and is always incorrect.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotStarted` before `start`, and
    /// `SessionError::Completed` once every problem has been answered.
    pub fn submit_answer(&mut self, value: f64) -> Result<AnswerFeedback, SessionError> {
        match self.state {
            SessionState::Running => {}
            SessionState::Idle => {
                log::warn!("answer submitted before the session started");
                return Err(SessionError::NotStarted);
            }
            SessionState::Completed => {
                log::warn!("answer submitted after the session completed");
                return Err(SessionError::Completed);
            }
        }

        let Some(problem) = self.problems.get(self.current) else {
            return Err(SessionError::Completed);
        };
        let correct = problem.is_correct(value);
        let correct_answer = problem.correct_answer();

        self.answers.push(value);
        if correct {
            self.score += 1;
        }
        self.current += 1;

        if self.current >= self.problems.len() {
            self.complete();
        }

        Ok(AnswerFeedback {
            correct,
            correct_answer,
            is_complete: self.is_complete(),
        })
    }

    /// End a running attempt early. Unanswered problems count as incorrect.
    pub fn finish(&mut self) {
        if self.state == SessionState::Running {
            self.complete();
        }
    }

    /// Re-read the elapsed time for display. Never changes score or position.
    pub fn tick(&mut self) -> u64 {
        let elapsed = self.elapsed();
        self.last_elapsed = elapsed;
        elapsed
    }

    fn complete(&mut self) {
        let now = self.clock.now();
        self.completed_at = Some(now);
        self.state = SessionState::Completed;
        self.last_elapsed = self.elapsed();

        let total = u32::try_from(self.problems.len()).unwrap_or(u32::MAX);
        let result = QuizResult::from_score(self.score, total, self.last_elapsed);
        log::info!(
            "quiz completed: score={}/{} percentage={} elapsed={}s",
            result.score,
            result.total,
            result.percentage,
            result.elapsed_secs
        );
        self.result = Some(result);
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn tier(&self) -> DifficultyTier {
        self.tier
    }

    #[must_use]
    pub fn concept(&self) -> Concept {
        self.concept
    }

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state == SessionState::Completed
    }

    /// Problem awaiting an answer; `None` when idle or complete.
    #[must_use]
    pub fn current_problem(&self) -> Option<&Problem> {
        if self.state == SessionState::Running {
            self.problems.get(self.current)
        } else {
            None
        }
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            index: self.current,
            total: self.problems.len(),
            score: self.score,
        }
    }

    #[must_use]
    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    #[must_use]
    pub fn submitted_answers(&self) -> &[f64] {
        &self.answers
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Whole seconds since `start`, frozen once the session completes.
    #[must_use]
    pub fn elapsed(&self) -> u64 {
        let measured = match (self.started_at, self.completed_at) {
            (None, _) => 0,
            (Some(start), Some(end)) => whole_seconds_between(start, end),
            (Some(start), None) => self.clock.seconds_since(start),
        };
        measured.max(self.last_elapsed)
    }

    /// Final result; available only once the session has completed.
    #[must_use]
    pub fn result(&self) -> Option<&QuizResult> {
        self.result.as_ref()
    }

    /// Answered problems paired with what was submitted.
    #[must_use]
    pub fn review(&self) -> Vec<ReviewItem> {
        self.problems
            .iter()
            .zip(&self.answers)
            .map(|(problem, &value)| ReviewItem {
                prompt: problem.prompt().to_string(),
                correct_answer: problem.correct_answer(),
                submitted: (!value.is_nan()).then_some(value),
                correct: problem.is_correct(value),
            })
            .collect()
    }

    /// Mutable access to the session clock, for driving fixed clocks in tests and demos.
    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("tier", &self.tier)
            .field("concept", &self.concept)
            .field("state", &self.state)
            .field("problems_len", &self.problems.len())
            .field("current", &self.current)
            .field("score", &self.score)
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
