mod queue;
mod session;
mod workflow;

// Public API of the quiz subsystem.
pub use crate::error::QuizError;
pub use session::{
    AnswerVerdict, COMPLETION_CLOSE_DELAY, CORRECT_FEEDBACK_DELAY, QuizPhase, QuizSession,
    WRONG_FEEDBACK_DELAY,
};
pub use workflow::{QuizAnswerResult, QuizLoopService};
