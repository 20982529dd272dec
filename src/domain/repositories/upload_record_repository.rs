use async_trait::async_trait;

use crate::domain::entities::{NewUploadRecord, UploadRecord};

#[derive(Debug)]
pub enum UploadRecordRepositoryError {
    DatabaseError(String),
    SerializationError(String),
}

impl std::fmt::Display for UploadRecordRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UploadRecordRepositoryError::DatabaseError(msg) => {
                write!(f, "Database error: {}", msg)
            }
            UploadRecordRepositoryError::SerializationError(msg) => {
                write!(f, "Serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for UploadRecordRepositoryError {}

/// Store for processed uploads. Records are insert-only: there is no update
/// or delete, and ids are assigned by the store at insert time.
#[async_trait]
pub trait UploadRecordRepository: Send + Sync {
    async fn insert(&self, record: NewUploadRecord) -> Result<i32, UploadRecordRepositoryError>;
    async fn find_by_id(&self, id: i32)
    -> Result<Option<UploadRecord>, UploadRecordRepositoryError>;
}
