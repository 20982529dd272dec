use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{NewUploadRecord, UploadRecord};
use crate::domain::value_objects::{ImageMetadata, SimilarImage};
use crate::infrastructure::database::schema::images;

#[derive(Debug, Clone, Queryable, Selectable, Serialize, Identifiable)]
#[diesel(table_name = images)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UploadRecordModel {
    pub id: i32,
    pub original_filename: String,
    pub keywords: serde_json::Value,
    pub similar_images: serde_json::Value,
    pub metadata: serde_json::Value,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Insertable, Deserialize)]
#[diesel(table_name = images)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewUploadRecordModel {
    pub original_filename: String,
    pub keywords: serde_json::Value,
    pub similar_images: serde_json::Value,
    pub metadata: serde_json::Value,
}

impl TryFrom<&NewUploadRecord> for NewUploadRecordModel {
    type Error = String;

    fn try_from(record: &NewUploadRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            original_filename: record.original_filename.clone(),
            keywords: serde_json::to_value(&record.keywords)
                .map_err(|e| format!("Invalid keywords: {}", e))?,
            similar_images: serde_json::to_value(&record.similar_images)
                .map_err(|e| format!("Invalid similar images: {}", e))?,
            metadata: serde_json::to_value(&record.metadata)
                .map_err(|e| format!("Invalid metadata: {}", e))?,
        })
    }
}

impl TryFrom<UploadRecordModel> for UploadRecord {
    type Error = String;

    fn try_from(model: UploadRecordModel) -> Result<Self, Self::Error> {
        let keywords: Vec<String> = serde_json::from_value(model.keywords)
            .map_err(|e| format!("Invalid keywords: {}", e))?;

        let similar_images: Vec<SimilarImage> = serde_json::from_value(model.similar_images)
            .map_err(|e| format!("Invalid similar images: {}", e))?;

        let metadata: Vec<ImageMetadata> = serde_json::from_value(model.metadata)
            .map_err(|e| format!("Invalid metadata: {}", e))?;

        Ok(UploadRecord::new(
            model.id,
            model.original_filename,
            keywords,
            similar_images,
            metadata,
            model.created_at,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_serializes_to_json_arrays() {
        let record = NewUploadRecord {
            original_filename: "photo.jpg".to_string(),
            keywords: vec!["dog".to_string(), "park".to_string()],
            similar_images: vec![SimilarImage::new(
                "https://example.com/a.jpg".to_string(),
                "https://example.com/a-thumb.jpg".to_string(),
                800,
                600,
            )],
            metadata: vec![ImageMetadata::new(
                800,
                600,
                "JPEG".to_string(),
                4096,
                "https://example.com/a.jpg".to_string(),
            )],
        };

        let model = NewUploadRecordModel::try_from(&record).unwrap();

        assert_eq!(model.original_filename, "photo.jpg");
        assert_eq!(model.keywords, serde_json::json!(["dog", "park"]));
        assert!(model.similar_images.is_array());
        assert_eq!(model.metadata[0]["dimensions"], "800x600");
    }

    #[test]
    fn test_model_deserializes_into_record() {
        let model = UploadRecordModel {
            id: 7,
            original_filename: "photo.jpg".to_string(),
            keywords: serde_json::json!(["dog"]),
            similar_images: serde_json::json!([{
                "url": "https://example.com/a.jpg",
                "thumbnail": "https://example.com/a-thumb.jpg",
                "width": 800,
                "height": 600
            }]),
            metadata: serde_json::json!([]),
            created_at: None,
        };

        let record = UploadRecord::try_from(model).unwrap();

        assert_eq!(record.id(), 7);
        assert_eq!(record.keywords(), ["dog"]);
        assert_eq!(record.similar_images().len(), 1);
        assert_eq!(record.similar_images()[0].width, 800);
        assert!(record.metadata().is_empty());
    }

    #[test]
    fn test_record_round_trips_through_json_columns() {
        let record = NewUploadRecord {
            original_filename: "cat.png".to_string(),
            keywords: vec!["cat".to_string(), "outdoor".to_string()],
            similar_images: vec![SimilarImage::new(
                "a".to_string(),
                "b".to_string(),
                100,
                200,
            )],
            metadata: vec![ImageMetadata::new(
                100,
                200,
                "PNG".to_string(),
                4096,
                "a".to_string(),
            )],
        };

        let model = NewUploadRecordModel::try_from(&record).unwrap();
        let stored = UploadRecordModel {
            id: 1,
            original_filename: model.original_filename,
            keywords: model.keywords,
            similar_images: model.similar_images,
            metadata: model.metadata,
            created_at: None,
        };
        let loaded = UploadRecord::try_from(stored).unwrap();

        assert_eq!(loaded.keywords(), record.keywords.as_slice());
        assert_eq!(loaded.similar_images(), record.similar_images.as_slice());
        assert_eq!(loaded.metadata(), record.metadata.as_slice());
    }

    #[test]
    fn test_malformed_column_is_rejected() {
        let model = UploadRecordModel {
            id: 7,
            original_filename: "photo.jpg".to_string(),
            keywords: serde_json::json!({"not": "a list"}),
            similar_images: serde_json::json!([]),
            metadata: serde_json::json!([]),
            created_at: None,
        };

        let result = UploadRecord::try_from(model);

        assert!(result.is_err());
    }
}
