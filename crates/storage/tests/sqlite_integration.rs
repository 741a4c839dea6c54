use quest_core::ProgressionConfig;
use quest_core::model::Progress;
use storage::{ProgressRecord, ProgressRepository, SqliteRepository, StorageError};

async fn connect(name: &str) -> SqliteRepository {
    let url = format!("sqlite:file:{name}?mode=memory&cache=shared");
    let repo = SqliteRepository::connect(&url).await.expect("connect");
    repo.migrate().await.expect("migrate");
    repo
}

#[tokio::test]
async fn empty_store_loads_nothing() {
    let repo = connect("memdb_empty").await;
    assert!(repo.load().await.unwrap().is_none());
}

#[tokio::test]
async fn snapshot_round_trips_and_replaces() {
    let repo = connect("memdb_roundtrip").await;
    let config = ProgressionConfig::default();

    let mut progress = Progress::new_default(&config);
    for _ in 0..4 {
        progress.apply_correct_answer(0, &config);
    }
    progress.set_current(1);

    let record = ProgressRecord::from_progress(&progress);
    repo.save(&record).await.unwrap();
    assert_eq!(repo.load().await.unwrap(), Some(record.clone()));

    // Saving again fully replaces the previous snapshot.
    progress.apply_correct_answer(1, &config);
    let updated = ProgressRecord::from_progress(&progress);
    repo.save(&updated).await.unwrap();

    let loaded = repo.load().await.unwrap().unwrap();
    assert_eq!(loaded, updated);
    assert_ne!(loaded, record);
    assert_eq!(loaded.into_progress(&config).unwrap(), progress);
}

#[tokio::test]
async fn corrupted_row_reports_serialization_error() {
    let repo = connect("memdb_corrupt").await;

    sqlx::query("INSERT INTO progress (id, snapshot) VALUES (1, 'not json at all')")
        .execute(repo.pool())
        .await
        .unwrap();

    let err = repo.load().await.unwrap_err();
    assert!(matches!(err, StorageError::Serialization(_)));
}

#[tokio::test]
async fn clear_progress_drops_the_snapshot() {
    let repo = connect("memdb_clear").await;
    let record = ProgressRecord::from_progress(&Progress::new_default(&ProgressionConfig::default()));
    repo.save(&record).await.unwrap();
    assert!(repo.load().await.unwrap().is_some());

    repo.clear_progress().await.unwrap();
    assert!(repo.load().await.unwrap().is_none());
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let repo = connect("memdb_migrate_twice").await;
    repo.migrate().await.expect("second migrate");

    let record = ProgressRecord::from_progress(&Progress::new_default(&ProgressionConfig::default()));
    repo.save(&record).await.unwrap();
    assert_eq!(repo.load().await.unwrap(), Some(record));
}
