mod difficulty;
mod node;
mod progress;
mod question;

pub use difficulty::Difficulty;
pub use node::{Node, NodeError};
pub use progress::{Progress, ProgressError};
pub use question::{Question, QuestionError};
