use sqlx::SqlitePool;

use crate::errors::Result;
use crate::models::FileRecord;

pub struct FileQueries;

impl FileQueries {
    pub async fn insert(pool: &SqlitePool, record: &FileRecord) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO files (
                id, directory_path, filename, file_type,
                size, checksum, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.id)
        .bind(&record.directory_path)
        .bind(&record.filename)
        .bind(&record.file_type)
        .bind(record.size)
        .bind(&record.checksum)
        .bind(record.created_at)
        .bind(record.updated_at)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Replaces any existing row with the same id.
    pub async fn upsert(pool: &SqlitePool, record: &FileRecord) -> Result<()> {
        sqlx::query(
            r#"
            INSERT OR REPLACE INTO files (
                id, directory_path, filename, file_type,
                size, checksum, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.id)
        .bind(&record.directory_path)
        .bind(&record.filename)
        .bind(&record.file_type)
        .bind(record.size)
        .bind(&record.checksum)
        .bind(record.created_at)
        .bind(record.updated_at)
        .execute(pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(pool: &SqlitePool, id: &str) -> Result<Option<FileRecord>> {
        let record = sqlx::query_as::<_, FileRecord>(
            r#"
            SELECT id, directory_path, filename, file_type,
                   size, checksum, created_at, updated_at
            FROM files WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }
}
