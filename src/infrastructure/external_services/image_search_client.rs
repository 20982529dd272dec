use async_trait::async_trait;
use reqwest::{Client, Error as ReqwestError};
use serde::Deserialize;
use std::env;
use std::time::Duration;

use crate::application::ports::image_search::{ImageSearchError, ImageSearchProvider};
use crate::domain::value_objects::SimilarImage;

/// Results are restricted to freely reusable jpg/png images.
const FILE_TYPES: &str = "jpg|png";
const USAGE_RIGHTS: &str = "cc_publicdomain|cc_attribute|cc_sharealike";

#[derive(Deserialize)]
pub struct ImageSearchResponse {
    pub items: Option<Vec<ImageSearchItem>>,
}

#[derive(Deserialize)]
pub struct ImageSearchItem {
    pub link: String,
    pub image: ImageSearchItemImage,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSearchItemImage {
    pub thumbnail_link: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone)]
pub struct ImageSearchClientConfig {
    pub endpoint: String,
    pub api_key: String,
    pub cx: String,
    pub timeout_secs: u64,
}

impl Default for ImageSearchClientConfig {
    fn default() -> Self {
        let endpoint = env::var("GOOGLE_SEARCH_URL")
            .unwrap_or_else(|_| "https://www.googleapis.com/customsearch/v1".to_string());
        let api_key = env::var("GOOGLE_API_KEY").unwrap_or_default();
        let cx = env::var("GOOGLE_CX").unwrap_or_default();

        Self {
            endpoint,
            api_key,
            cx,
            timeout_secs: 30,
        }
    }
}

/// Image search backed by the Google Custom Search JSON API.
#[derive(Debug, Clone)]
pub struct GoogleImageSearchClient {
    client: Client,
    config: ImageSearchClientConfig,
}

impl GoogleImageSearchClient {
    pub fn new(config: ImageSearchClientConfig) -> Result<Self, ReqwestError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    pub fn from_env() -> Result<Self, ReqwestError> {
        let config = ImageSearchClientConfig::default();
        if config.api_key.is_empty() || config.cx.is_empty() {
            log::warn!("GOOGLE_API_KEY or GOOGLE_CX not set; image search will fail");
        }

        Self::new(config)
    }
}

#[async_trait]
impl ImageSearchProvider for GoogleImageSearchClient {
    async fn search(
        &self,
        keywords: &[String],
        max_results: u32,
    ) -> Result<Vec<SimilarImage>, ImageSearchError> {
        let query = build_query(keywords);
        let num = max_results.to_string();

        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&[
                ("key", self.config.api_key.as_str()),
                ("cx", self.config.cx.as_str()),
                ("q", query.as_str()),
                ("searchType", "image"),
                ("num", num.as_str()),
                ("fileType", FILE_TYPES),
                ("rights", USAGE_RIGHTS),
            ])
            .send()
            .await
            .map_err(|e| ImageSearchError::NetworkError(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImageSearchError::ApiError(format!(
                "Search API returned HTTP {}",
                status
            )));
        }

        let search_response: ImageSearchResponse = response
            .json()
            .await
            .map_err(|e| ImageSearchError::MalformedResponse(e.to_string()))?;

        Ok(to_similar_images(search_response))
    }
}

/// Builds the search query from the first three keywords.
pub fn build_query(keywords: &[String]) -> String {
    keywords
        .iter()
        .take(3)
        .map(|k| k.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// An absent items field means zero results, not a malformed response.
pub fn to_similar_images(response: ImageSearchResponse) -> Vec<SimilarImage> {
    response
        .items
        .unwrap_or_default()
        .into_iter()
        .map(|item| {
            SimilarImage::new(
                item.link,
                item.image.thumbnail_link,
                item.image.width,
                item.image.height,
            )
        })
        .collect()
}
