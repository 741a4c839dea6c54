use thiserror::Error;

use crate::bank::BankError;
use crate::model::{NodeError, ProgressError, QuestionError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Bank(#[from] BankError),
    #[error(transparent)]
    Node(#[from] NodeError),
    #[error(transparent)]
    Progress(#[from] ProgressError),
}
