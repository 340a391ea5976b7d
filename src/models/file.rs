use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::errors::{AppError, Result};

/// Body of `POST /files`. Caller-supplied `id` and timestamps are ignored;
/// absent fields take their zero value.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateFileRequest {
    pub directory_path: String,
    pub filename: String,
    pub file_type: String,
    pub size: i64,
    pub checksum: String,
}

impl CreateFileRequest {
    pub fn validate(&self) -> Result<()> {
        if self.size < 0 {
            return Err(AppError::InvalidInput(format!(
                "size must be non-negative, got {}",
                self.size
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize, ToSchema)]
pub struct FileRecord {
    pub id: String,
    pub directory_path: String,
    pub filename: String,
    pub file_type: String,
    pub size: i64,
    pub checksum: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FileRecord {
    /// Builds a new record with a fresh id and both timestamps set to `now`.
    pub fn new(request: CreateFileRequest, now: DateTime<Utc>) -> Self {
        // SQLite round-trips are exact at microsecond precision.
        let now = now.trunc_subsecs(6);
        Self {
            id: Uuid::new_v4().to_string(),
            directory_path: request.directory_path,
            filename: request.filename,
            file_type: request.file_type,
            size: request.size,
            checksum: request.checksum,
            created_at: now,
            updated_at: now,
        }
    }
}

pub const SEED_FILE_ID: &str = "b0320eab-57a6-4c45-ba6d-0b68a3501ef6";

/// Fixed row upserted at startup for manual smoke-testing.
pub fn seed_record(now: DateTime<Utc>) -> FileRecord {
    let now = now.trunc_subsecs(6);
    FileRecord {
        id: SEED_FILE_ID.to_string(),
        directory_path: "cmd/server/".to_string(),
        filename: "main.go".to_string(),
        file_type: "file".to_string(),
        size: 123,
        checksum: "1afb2837cb93eb1f3d68027adf777218".to_string(),
        created_at: now,
        updated_at: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> CreateFileRequest {
        CreateFileRequest {
            directory_path: "a/b/".into(),
            filename: "x.txt".into(),
            file_type: "file".into(),
            size: 10,
            checksum: "deadbeef".into(),
        }
    }

    #[test]
    fn test_new_record_has_equal_timestamps() {
        let record = FileRecord::new(sample_request(), Utc::now());
        assert_eq!(record.created_at, record.updated_at);
        assert_eq!(record.created_at.timestamp_subsec_nanos() % 1_000, 0);
        assert!(Uuid::parse_str(&record.id).is_ok());
    }

    #[test]
    fn test_new_records_get_distinct_ids() {
        let now = Utc::now();
        let a = FileRecord::new(sample_request(), now);
        let b = FileRecord::new(sample_request(), now);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_negative_size_is_invalid() {
        let mut request = sample_request();
        request.size = -1;
        assert!(matches!(request.validate(), Err(AppError::InvalidInput(_))));
        assert!(sample_request().validate().is_ok());
    }

    #[test]
    fn test_request_ignores_caller_id() {
        let request: CreateFileRequest = serde_json::from_str(
            r#"{"id":"mine","directory_path":"a/","filename":"f","file_type":"file","size":1,"checksum":"c"}"#,
        )
        .unwrap();
        let record = FileRecord::new(request, Utc::now());
        assert_ne!(record.id, "mine");
    }

    #[test]
    fn test_missing_fields_take_zero_values() {
        let request: CreateFileRequest =
            serde_json::from_str(r#"{"directory_path":"a/"}"#).unwrap();
        assert_eq!(request.directory_path, "a/");
        assert!(request.filename.is_empty());
        assert!(request.checksum.is_empty());
        assert_eq!(request.size, 0);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_wrong_size_type_is_rejected() {
        let result = serde_json::from_str::<CreateFileRequest>(r#"{"size":"ten"}"#);
        assert!(result.is_err());
    }
}
