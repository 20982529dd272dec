use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ImageMetadata, SimilarImage};

/// One processed upload. Records are created exactly once, never updated or
/// deleted; `metadata` holds one entry per similar image whose fetch
/// succeeded, in attempt order, so it may be shorter than `similar_images`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadRecord {
    id: i32,
    original_filename: String,
    keywords: Vec<String>,
    similar_images: Vec<SimilarImage>,
    metadata: Vec<ImageMetadata>,
    created_at: Option<DateTime<Utc>>,
}

impl UploadRecord {
    pub fn new(
        id: i32,
        original_filename: String,
        keywords: Vec<String>,
        similar_images: Vec<SimilarImage>,
        metadata: Vec<ImageMetadata>,
        created_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            original_filename,
            keywords,
            similar_images,
            metadata,
            created_at,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn original_filename(&self) -> &str {
        &self.original_filename
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn similar_images(&self) -> &[SimilarImage] {
        &self.similar_images
    }

    pub fn metadata(&self) -> &[ImageMetadata] {
        &self.metadata
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

/// Insert payload for a record; the id and timestamp are assigned by the
/// store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUploadRecord {
    pub original_filename: String,
    pub keywords: Vec<String>,
    pub similar_images: Vec<SimilarImage>,
    pub metadata: Vec<ImageMetadata>,
}
