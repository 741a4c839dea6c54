#![forbid(unsafe_code)]

pub mod error;
pub mod progress_service;
pub mod quiz;

pub use error::{ProgressServiceError, QuizError};
pub use progress_service::ProgressService;

pub use quiz::{
    AnswerVerdict, QuizAnswerResult, QuizLoopService, QuizPhase, QuizSession,
};
