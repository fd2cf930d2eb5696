#![forbid(unsafe_code)]

pub mod error;
pub mod format;
pub mod sessions;

pub use practice_core::Clock;
pub use sessions as session;

pub use error::SessionError;
pub use format::{format_elapsed, parse_answer};

pub use sessions::{
    AnswerFeedback, Encouragement, PracticeLoop, QuizProgress, QuizResult, QuizSession,
    ReviewItem, SessionState, SubmitOutcome,
};
