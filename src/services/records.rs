use chrono::Utc;

use crate::{
    database::{queries::FileQueries, Database},
    errors::{AppError, Result},
    models::{CreateFileRequest, CreateUserRequest, FileRecord, User},
    services::metrics::{FILE_RECORDS_CREATED_TOTAL, USERS_CREATED_TOTAL},
};

/// Record operations, independent of the HTTP layer that exposes them.
#[derive(Clone)]
pub struct RecordService {
    database: Database,
}

impl RecordService {
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    /// Echoes the request back under a fresh id. Nothing is stored.
    pub fn create_user(&self, request: CreateUserRequest) -> User {
        let user = User::from_request(request);
        USERS_CREATED_TOTAL.inc();
        tracing::debug!(user_id = %user.id, "user created");
        user
    }

    pub async fn create_file(&self, request: CreateFileRequest) -> Result<FileRecord> {
        request.validate()?;

        let record = FileRecord::new(request, Utc::now());
        FileQueries::insert(self.database.pool(), &record).await?;

        FILE_RECORDS_CREATED_TOTAL.inc();
        tracing::debug!(file_id = %record.id, "file record created");
        Ok(record)
    }

    pub async fn get_file(&self, id: &str) -> Result<FileRecord> {
        FileQueries::find_by_id(self.database.pool(), id)
            .await?
            .ok_or(AppError::NotFound)
    }
}
