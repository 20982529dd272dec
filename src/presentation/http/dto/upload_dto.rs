use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SimilarImageDto {
    pub url: String,
    pub thumbnail: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Serialize)]
pub struct ImageMetadataDto {
    pub dimensions: String,
    pub format: String,
    pub size: u64,
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct UploadResponseDto {
    pub id: i32,
    pub keywords: Vec<String>,
    pub similar_images: Vec<SimilarImageDto>,
    pub metadata: Vec<ImageMetadataDto>,
}

#[derive(Debug, Serialize)]
pub struct ImageDetailResponseDto {
    pub id: i32,
    pub keywords: Vec<String>,
    pub similar_images: Vec<SimilarImageDto>,
    pub metadata: Vec<ImageMetadataDto>,
    pub created_at: Option<String>,
}

impl From<crate::domain::value_objects::SimilarImage> for SimilarImageDto {
    fn from(image: crate::domain::value_objects::SimilarImage) -> Self {
        Self {
            url: image.url,
            thumbnail: image.thumbnail,
            width: image.width,
            height: image.height,
        }
    }
}

impl From<crate::domain::value_objects::ImageMetadata> for ImageMetadataDto {
    fn from(metadata: crate::domain::value_objects::ImageMetadata) -> Self {
        Self {
            dimensions: metadata.dimensions,
            format: metadata.format,
            size: metadata.size,
            url: metadata.url,
        }
    }
}

impl From<crate::application::use_cases::process_upload::ProcessUploadResponse>
    for UploadResponseDto
{
    fn from(
        response: crate::application::use_cases::process_upload::ProcessUploadResponse,
    ) -> Self {
        Self {
            id: response.id,
            keywords: response.keywords,
            similar_images: response
                .similar_images
                .into_iter()
                .map(SimilarImageDto::from)
                .collect(),
            metadata: response
                .metadata
                .into_iter()
                .map(ImageMetadataDto::from)
                .collect(),
        }
    }
}

impl From<crate::domain::entities::UploadRecord> for ImageDetailResponseDto {
    fn from(record: crate::domain::entities::UploadRecord) -> Self {
        Self {
            id: record.id(),
            keywords: record.keywords().to_vec(),
            similar_images: record
                .similar_images()
                .iter()
                .cloned()
                .map(SimilarImageDto::from)
                .collect(),
            metadata: record
                .metadata()
                .iter()
                .cloned()
                .map(ImageMetadataDto::from)
                .collect(),
            created_at: record.created_at().map(|t| t.to_rfc3339()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::UploadRecord;
    use crate::domain::value_objects::{ImageMetadata, SimilarImage};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_detail_dto_wire_fields() {
        let created_at = Utc.with_ymd_and_hms(2024, 6, 14, 12, 0, 0).unwrap();
        let record = UploadRecord::new(
            3,
            "photo.jpg".to_string(),
            vec!["dog".to_string()],
            vec![SimilarImage::new(
                "https://example.com/a.jpg".to_string(),
                "https://example.com/a-thumb.jpg".to_string(),
                800,
                600,
            )],
            vec![ImageMetadata::new(
                800,
                600,
                "JPEG".to_string(),
                2048,
                "https://example.com/a.jpg".to_string(),
            )],
            Some(created_at),
        );

        let payload = serde_json::to_value(ImageDetailResponseDto::from(record)).unwrap();

        assert_eq!(payload["id"], 3);
        assert_eq!(payload["keywords"], serde_json::json!(["dog"]));
        assert_eq!(payload["similar_images"][0]["thumbnail"], "https://example.com/a-thumb.jpg");
        assert_eq!(payload["metadata"][0]["dimensions"], "800x600");
        assert_eq!(payload["metadata"][0]["size"], 2048);
        assert_eq!(payload["created_at"], "2024-06-14T12:00:00+00:00");
    }
}
