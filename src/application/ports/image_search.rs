use async_trait::async_trait;

use crate::domain::value_objects::SimilarImage;

#[derive(Debug)]
pub enum ImageSearchError {
    NetworkError(String),
    ApiError(String),
    MalformedResponse(String),
}

impl std::fmt::Display for ImageSearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageSearchError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            ImageSearchError::ApiError(msg) => write!(f, "API error: {}", msg),
            ImageSearchError::MalformedResponse(msg) => write!(f, "Malformed response: {}", msg),
        }
    }
}

impl std::error::Error for ImageSearchError {}

/// Queries an external image index for images matching a keyword list.
/// Results keep the provider's ranking order. An empty keyword list is
/// passed through as an empty query, not special-cased here.
#[async_trait]
pub trait ImageSearchProvider: Send + Sync {
    async fn search(
        &self,
        keywords: &[String],
        max_results: u32,
    ) -> Result<Vec<SimilarImage>, ImageSearchError>;
}
