use async_trait::async_trait;

#[derive(Debug)]
pub enum KeywordExtractorError {
    NetworkError(String),
    ApiError(String),
    MalformedResponse(String),
}

impl std::fmt::Display for KeywordExtractorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeywordExtractorError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            KeywordExtractorError::ApiError(msg) => write!(f, "API error: {}", msg),
            KeywordExtractorError::MalformedResponse(msg) => {
                write!(f, "Malformed response: {}", msg)
            }
        }
    }
}

impl std::error::Error for KeywordExtractorError {}

/// Derives descriptive keywords for an image through a vision-capable
/// language model. Failures are returned, not absorbed; the caller decides
/// how to degrade.
#[async_trait]
pub trait KeywordExtractor: Send + Sync {
    async fn extract_keywords(
        &self,
        image_data: &[u8],
    ) -> Result<Vec<String>, KeywordExtractorError>;
}
