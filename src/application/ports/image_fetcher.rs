use async_trait::async_trait;

use crate::domain::value_objects::ImageMetadata;

#[derive(Debug)]
pub enum ImageFetchError {
    RequestFailed(String),
    HttpStatus(u16),
    DecodeError(String),
}

impl std::fmt::Display for ImageFetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageFetchError::RequestFailed(msg) => write!(f, "Request failed: {}", msg),
            ImageFetchError::HttpStatus(code) => write!(f, "Unexpected HTTP status: {}", code),
            ImageFetchError::DecodeError(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for ImageFetchError {}

/// Downloads an image once and reads its raster metadata. One attempt, no
/// retry; a failed fetch means no metadata entry for that URL.
#[async_trait]
pub trait ImageMetadataFetcher: Send + Sync {
    async fn fetch_metadata(&self, url: &str) -> Result<ImageMetadata, ImageFetchError>;
}
