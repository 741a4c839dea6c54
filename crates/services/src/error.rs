//! Shared error types for the services crate.

use thiserror::Error;

use storage::StorageError;

/// Errors emitted by `ProgressService`.
///
/// Load-side failures never show up here: a snapshot that cannot be
/// read or validated is treated as absent and replaced by the default
/// state. Only write-side failures surface.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `QuizLoopService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error(transparent)]
    Progress(#[from] ProgressServiceError),
}
