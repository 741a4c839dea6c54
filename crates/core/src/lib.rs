#![forbid(unsafe_code)]

pub mod bank;
pub mod error;
pub mod layout;
pub mod model;
pub mod progression;

pub use bank::{BankError, QuestionBank};
pub use error::Error;
pub use layout::{MapLayout, NodePosition};
pub use progression::{AnswerOutcome, ProgressionConfig};
