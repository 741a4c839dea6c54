use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use thiserror::Error;

use quest_core::ProgressionConfig;
use quest_core::model::{Node, Progress, ProgressError};

/// Errors surfaced by progress storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

//
// ─── RECORDS ───────────────────────────────────────────────────────────────────
//

/// Persisted shape of one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub index: usize,
    pub xp: u32,
    pub completed: bool,
    pub unlocked: bool,
}

/// Persisted shape of the full progress snapshot.
///
/// Mirrors the domain `Progress` so the repository can serialize and
/// rehydrate without leaking storage concerns into the domain layer.
/// The snapshot is always written and replaced as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub nodes: Vec<NodeRecord>,
    pub current_node: usize,
}

impl ProgressRecord {
    #[must_use]
    pub fn from_progress(progress: &Progress) -> Self {
        Self {
            nodes: progress
                .nodes()
                .iter()
                .map(|node| NodeRecord {
                    index: node.index(),
                    xp: node.xp(),
                    completed: node.completed(),
                    unlocked: node.unlocked(),
                })
                .collect(),
            current_node: progress.current_node(),
        }
    }

    /// Convert the record back into domain `Progress`, validating every
    /// invariant against `config`.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError` if the record does not describe a
    /// well-formed snapshot. Callers treat that the same as an absent
    /// snapshot and fall back to the default state.
    pub fn into_progress(self, config: &ProgressionConfig) -> Result<Progress, ProgressError> {
        let nodes = self
            .nodes
            .iter()
            .map(|record| {
                Node::from_persisted(
                    record.index,
                    record.xp,
                    record.completed,
                    record.unlocked,
                    config.required_xp(record.index),
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        Progress::from_persisted(nodes, self.current_node, config)
    }
}

//
// ─── REPOSITORY ────────────────────────────────────────────────────────────────
//

/// Repository contract for the progress snapshot.
///
/// There is exactly one snapshot per store; `save` replaces it
/// wholesale and `load` returns `None` when nothing was ever saved.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Fetch the persisted snapshot, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` when stored bytes exist
    /// but cannot be decoded, or `StorageError::Connection` for backend
    /// failures.
    async fn load(&self) -> Result<Option<ProgressRecord>, StorageError>;

    /// Persist the snapshot, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the snapshot cannot be written.
    async fn save(&self, record: &ProgressRecord) -> Result<(), StorageError>;
}

/// In-memory repository for tests and prototyping.
///
/// Stores the serialized JSON form rather than the record itself so
/// tests can inject malformed payloads the way a corrupted store would
/// present them.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    raw: Arc<Mutex<Option<String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored payload with arbitrary bytes, bypassing
    /// serialization. Intended for corruption tests.
    pub fn set_raw(&self, payload: impl Into<String>) {
        let mut guard = self.raw.lock().expect("in-memory store lock poisoned");
        *guard = Some(payload.into());
    }
}

#[async_trait]
impl ProgressRepository for InMemoryRepository {
    async fn load(&self) -> Result<Option<ProgressRecord>, StorageError> {
        let raw = {
            let guard = self.raw.lock().expect("in-memory store lock poisoned");
            guard.clone()
        };
        match raw {
            None => Ok(None),
            Some(payload) => serde_json::from_str(&payload)
                .map(Some)
                .map_err(|err| StorageError::Serialization(err.to_string())),
        }
    }

    async fn save(&self, record: &ProgressRecord) -> Result<(), StorageError> {
        let payload = serde_json::to_string(record)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        let mut guard = self.raw.lock().expect("in-memory store lock poisoned");
        *guard = Some(payload);
        Ok(())
    }
}
