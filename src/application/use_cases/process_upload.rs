use std::sync::Arc;

use crate::application::ports::{ImageMetadataFetcher, ImageSearchProvider, KeywordExtractor};
use crate::domain::entities::NewUploadRecord;
use crate::domain::repositories::{
    UploadRecordRepository, upload_record_repository::UploadRecordRepositoryError,
};
use crate::domain::value_objects::{ImageMetadata, SimilarImage};

/// Result cap requested from the search provider per upload.
const DEFAULT_MAX_RESULTS: u32 = 5;

#[derive(Debug)]
pub enum ProcessUploadError {
    RepositoryError(String),
}

impl std::fmt::Display for ProcessUploadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessUploadError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for ProcessUploadError {}

impl From<UploadRecordRepositoryError> for ProcessUploadError {
    fn from(error: UploadRecordRepositoryError) -> Self {
        ProcessUploadError::RepositoryError(error.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct ProcessUploadRequest {
    pub file_name: String,
    pub file_data: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct ProcessUploadResponse {
    pub id: i32,
    pub keywords: Vec<String>,
    pub similar_images: Vec<SimilarImage>,
    pub metadata: Vec<ImageMetadata>,
}

/// Drives the upload pipeline: keyword extraction, similar-image search,
/// per-result metadata fetch, persistence. Every upstream failure degrades
/// to an empty default and is logged; only a failed insert surfaces an
/// error to the caller.
pub struct ProcessUploadUseCase {
    keyword_extractor: Arc<dyn KeywordExtractor>,
    image_search: Arc<dyn ImageSearchProvider>,
    metadata_fetcher: Arc<dyn ImageMetadataFetcher>,
    upload_repository: Arc<dyn UploadRecordRepository>,
    max_results: u32,
}

impl ProcessUploadUseCase {
    pub fn new(
        keyword_extractor: Arc<dyn KeywordExtractor>,
        image_search: Arc<dyn ImageSearchProvider>,
        metadata_fetcher: Arc<dyn ImageMetadataFetcher>,
        upload_repository: Arc<dyn UploadRecordRepository>,
    ) -> Self {
        Self {
            keyword_extractor,
            image_search,
            metadata_fetcher,
            upload_repository,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results.max(1);
        self
    }

    pub async fn execute(
        &self,
        request: ProcessUploadRequest,
    ) -> Result<ProcessUploadResponse, ProcessUploadError> {
        // Extract keywords; an unreachable or confused model means none.
        let keywords = match self
            .keyword_extractor
            .extract_keywords(&request.file_data)
            .await
        {
            Ok(keywords) => keywords,
            Err(e) => {
                log::warn!("Keyword extraction error: {}", e);
                Vec::new()
            }
        };

        // Search with whatever we got, including an empty keyword list.
        let similar_images = match self.image_search.search(&keywords, self.max_results).await {
            Ok(images) => images,
            Err(e) => {
                log::warn!("Image search error: {}", e);
                Vec::new()
            }
        };

        // Fetch metadata one result at a time; failed fetches are skipped,
        // so this list is correlated to similar_images by order only.
        let mut metadata = Vec::new();
        for image in &similar_images {
            match self.metadata_fetcher.fetch_metadata(&image.url).await {
                Ok(entry) => metadata.push(entry),
                Err(e) => {
                    log::warn!("Image metadata fetch error for {}: {}", image.url, e);
                }
            }
        }

        log::debug!(
            "Processed upload {}: {} keywords, {} similar images, {} metadata entries",
            request.file_name,
            keywords.len(),
            similar_images.len(),
            metadata.len()
        );

        let id = self
            .upload_repository
            .insert(NewUploadRecord {
                original_filename: request.file_name,
                keywords: keywords.clone(),
                similar_images: similar_images.clone(),
                metadata: metadata.clone(),
            })
            .await?;

        Ok(ProcessUploadResponse {
            id,
            keywords,
            similar_images,
            metadata,
        })
    }
}
