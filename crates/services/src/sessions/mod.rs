mod progress;
mod result;
mod session;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use progress::{AnswerFeedback, QuizProgress, ReviewItem};
pub use result::{Encouragement, MAX_STARS, QuizResult};
pub use session::{QuizSession, SessionState};
pub use workflow::{PracticeLoop, SubmitOutcome};
