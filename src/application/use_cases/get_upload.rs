use std::sync::Arc;

use crate::domain::entities::UploadRecord;
use crate::domain::repositories::{
    UploadRecordRepository, upload_record_repository::UploadRecordRepositoryError,
};

#[derive(Debug)]
pub enum GetUploadError {
    RecordNotFound(i32),
    RepositoryError(String),
}

impl std::fmt::Display for GetUploadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetUploadError::RecordNotFound(id) => write!(f, "Image not found: {}", id),
            GetUploadError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for GetUploadError {}

impl From<UploadRecordRepositoryError> for GetUploadError {
    fn from(error: UploadRecordRepositoryError) -> Self {
        GetUploadError::RepositoryError(error.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct GetUploadRequest {
    pub record_id: i32,
}

#[derive(Debug, Clone)]
pub struct GetUploadResponse {
    pub record: UploadRecord,
}

pub struct GetUploadUseCase {
    upload_repository: Arc<dyn UploadRecordRepository>,
}

impl GetUploadUseCase {
    pub fn new(upload_repository: Arc<dyn UploadRecordRepository>) -> Self {
        Self { upload_repository }
    }

    pub async fn execute(
        &self,
        request: GetUploadRequest,
    ) -> Result<GetUploadResponse, GetUploadError> {
        let record = self
            .upload_repository
            .find_by_id(request.record_id)
            .await?
            .ok_or(GetUploadError::RecordNotFound(request.record_id))?;

        Ok(GetUploadResponse { record })
    }
}
