#![forbid(unsafe_code)]

pub mod repository;
pub mod sqlite;

pub use repository::{
    InMemoryRepository, NodeRecord, ProgressRecord, ProgressRepository, StorageError,
};
pub use sqlite::{SqliteInitError, SqliteRepository};
