use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

use crate::domain::entities::{NewUploadRecord, UploadRecord};
use crate::domain::repositories::{
    UploadRecordRepository, upload_record_repository::UploadRecordRepositoryError,
};
use crate::infrastructure::database::get_connection_from_pool;
use crate::infrastructure::database::models::{NewUploadRecordModel, UploadRecordModel};
use crate::infrastructure::database::schema::images::dsl::*;

pub struct PostgresUploadRecordRepository {
    pool: Pool<ConnectionManager<PgConnection>>,
}

impl PostgresUploadRecordRepository {
    pub fn new(pool: Pool<ConnectionManager<PgConnection>>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UploadRecordRepository for PostgresUploadRecordRepository {
    async fn insert(&self, record: NewUploadRecord) -> Result<i32, UploadRecordRepositoryError> {
        let mut conn = get_connection_from_pool(&self.pool)
            .map_err(|e| UploadRecordRepositoryError::DatabaseError(e.to_string()))?;

        let new_record = NewUploadRecordModel::try_from(&record)
            .map_err(UploadRecordRepositoryError::SerializationError)?;

        let inserted: UploadRecordModel = diesel::insert_into(images)
            .values(&new_record)
            .get_result(&mut conn)
            .map_err(|e| UploadRecordRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.id)
    }

    async fn find_by_id(
        &self,
        record_id: i32,
    ) -> Result<Option<UploadRecord>, UploadRecordRepositoryError> {
        let mut conn = get_connection_from_pool(&self.pool)
            .map_err(|e| UploadRecordRepositoryError::DatabaseError(e.to_string()))?;

        let result = images
            .find(record_id)
            .first::<UploadRecordModel>(&mut conn)
            .optional()
            .map_err(|e| UploadRecordRepositoryError::DatabaseError(e.to_string()))?;

        match result {
            Some(model) => {
                let record = UploadRecord::try_from(model)
                    .map_err(UploadRecordRepositoryError::SerializationError)?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }
}
