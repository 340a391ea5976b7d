use chrono::Utc;
use file_record_service::{
    database::{queries::FileQueries, Database},
    models::{CreateFileRequest, FileRecord, SEED_FILE_ID},
};
use tempfile::TempDir;

async fn setup_test_db() -> (Database, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let url = format!("sqlite://{}", dir.path().join("files.db").display());
    let db = Database::new(&url, 2).await.expect("Failed to open database");
    db.migrate().await.expect("Failed to run migrations");
    (db, dir)
}

async fn count_files(db: &Database) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM files")
        .fetch_one(db.pool())
        .await
        .unwrap()
}

fn sample_record(filename: &str) -> FileRecord {
    FileRecord::new(
        CreateFileRequest {
            directory_path: "src/".to_string(),
            filename: filename.to_string(),
            file_type: "file".to_string(),
            size: 2048,
            checksum: "cafebabe".to_string(),
        },
        Utc::now(),
    )
}

#[tokio::test]
async fn test_insert_and_find_file() {
    let (db, _dir) = setup_test_db().await;
    let record = sample_record("lib.rs");

    FileQueries::insert(db.pool(), &record).await.unwrap();

    let found = FileQueries::find_by_id(db.pool(), &record.id).await.unwrap().unwrap();
    assert_eq!(found, record);
}

#[tokio::test]
async fn test_find_nonexistent_file() {
    let (db, _dir) = setup_test_db().await;

    let result = FileQueries::find_by_id(db.pool(), "missing").await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_duplicate_id_is_storage_error() {
    let (db, _dir) = setup_test_db().await;
    let record = sample_record("dup.rs");

    FileQueries::insert(db.pool(), &record).await.unwrap();
    let result = FileQueries::insert(db.pool(), &record).await;

    assert!(result.is_err());
    assert_eq!(count_files(&db).await, 1);
}

#[tokio::test]
async fn test_seed_is_idempotent() {
    let (db, _dir) = setup_test_db().await;

    db.seed().await.unwrap();
    db.seed().await.unwrap();

    assert_eq!(count_files(&db).await, 1);
    let seeded = FileQueries::find_by_id(db.pool(), SEED_FILE_ID).await.unwrap().unwrap();
    assert_eq!(seeded.directory_path, "cmd/server/");
    assert_eq!(seeded.checksum, "1afb2837cb93eb1f3d68027adf777218");
    assert_eq!(seeded.created_at, seeded.updated_at);
}

#[tokio::test]
async fn test_migrate_twice_and_reopen() {
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite://{}", dir.path().join("files.db").display());
    let record = sample_record("persisted.rs");

    {
        let db = Database::new(&url, 1).await.unwrap();
        db.migrate().await.unwrap();
        FileQueries::insert(db.pool(), &record).await.unwrap();
        db.close().await;
    }

    let db = Database::new(&url, 1).await.unwrap();
    db.migrate().await.unwrap();
    let found = FileQueries::find_by_id(db.pool(), &record.id).await.unwrap();
    assert_eq!(found, Some(record));
}
