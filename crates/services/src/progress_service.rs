use std::sync::Arc;

use quest_core::ProgressionConfig;
use quest_core::model::Progress;
use storage::{ProgressRecord, ProgressRepository};

use crate::error::ProgressServiceError;

/// Owns the persistence side of the map's progress.
///
/// Loads are forgiving: anything short of a well-formed snapshot falls
/// back to the default state. Saves replace the whole snapshot.
#[derive(Clone)]
pub struct ProgressService {
    config: ProgressionConfig,
    repo: Arc<dyn ProgressRepository>,
}

impl ProgressService {
    #[must_use]
    pub fn new(config: ProgressionConfig, repo: Arc<dyn ProgressRepository>) -> Self {
        Self { config, repo }
    }

    #[must_use]
    pub fn config(&self) -> &ProgressionConfig {
        &self.config
    }

    /// Return the persisted progress, or the default state when nothing
    /// usable was stored.
    ///
    /// A missing snapshot, undecodable bytes, and a snapshot violating
    /// the progression invariants all land on the same path: a fresh
    /// default. The player never sees a storage error on load.
    pub async fn load_or_default(&self) -> Progress {
        match self.repo.load().await {
            Ok(Some(record)) => record
                .into_progress(&self.config)
                .unwrap_or_else(|_| Progress::new_default(&self.config)),
            Ok(None) | Err(_) => Progress::new_default(&self.config),
        }
    }

    /// Persist the full snapshot.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if the write fails.
    pub async fn save(&self, progress: &Progress) -> Result<(), ProgressServiceError> {
        let record = ProgressRecord::from_progress(progress);
        self.repo.save(&record).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::InMemoryRepository;

    fn service(repo: &InMemoryRepository) -> ProgressService {
        ProgressService::new(ProgressionConfig::default(), Arc::new(repo.clone()))
    }

    #[tokio::test]
    async fn empty_store_yields_default_state() {
        let repo = InMemoryRepository::new();
        let progress = service(&repo).load_or_default().await;

        assert_eq!(progress, Progress::new_default(&ProgressionConfig::default()));
    }

    #[tokio::test]
    async fn invalid_json_yields_same_state_as_empty_store() {
        let repo = InMemoryRepository::new();
        let from_empty = service(&repo).load_or_default().await;

        repo.set_raw("{\"nodes\": oops");
        let from_garbage = service(&repo).load_or_default().await;

        assert_eq!(from_garbage, from_empty);
    }

    #[tokio::test]
    async fn invariant_breaking_snapshot_is_discarded() {
        let repo = InMemoryRepository::new();
        // Valid JSON, but node 3 is unlocked without node 2 being done.
        repo.set_raw(
            r#"{"nodes":[
                {"index":0,"xp":0,"completed":false,"unlocked":true},
                {"index":1,"xp":0,"completed":false,"unlocked":false},
                {"index":2,"xp":0,"completed":false,"unlocked":false},
                {"index":3,"xp":0,"completed":false,"unlocked":true}
            ],"current_node":0}"#,
        );

        let svc = ProgressService::new(
            ProgressionConfig::new(4, 100, 25, 25),
            Arc::new(repo.clone()),
        );
        let progress = svc.load_or_default().await;
        assert_eq!(
            progress,
            Progress::new_default(&ProgressionConfig::new(4, 100, 25, 25))
        );
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let repo = InMemoryRepository::new();
        let svc = service(&repo);
        let config = ProgressionConfig::default();

        let mut progress = Progress::new_default(&config);
        for _ in 0..4 {
            progress.apply_correct_answer(0, &config);
        }
        progress.set_current(1);
        svc.save(&progress).await.unwrap();

        let first = svc.load_or_default().await;
        assert_eq!(first, progress);

        // Idempotent persistence: saving what we loaded changes nothing.
        svc.save(&first).await.unwrap();
        assert_eq!(svc.load_or_default().await, first);
    }
}
