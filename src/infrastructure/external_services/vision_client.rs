use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use reqwest::{Client, Error as ReqwestError};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

use crate::application::ports::keyword_extractor::{KeywordExtractor, KeywordExtractorError};

const KEYWORD_PROMPT: &str = "Describe this image in keywords";

#[derive(Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
}

#[derive(Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: Vec<ContentPart>,
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Serialize)]
pub struct ImageUrl {
    pub url: String,
}

#[derive(Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Deserialize)]
pub struct ChatChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Clone)]
pub struct VisionClientConfig {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

impl Default for VisionClientConfig {
    fn default() -> Self {
        let api_url = env::var("OPENAI_API_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1/chat/completions".to_string());
        let api_key = env::var("OPENAI_API_KEY").unwrap_or_default();

        Self {
            api_url,
            api_key,
            model: "gpt-4-vision-preview".to_string(),
            max_tokens: 100,
            timeout_secs: 30,
        }
    }
}

/// Asks the vision model for a comma-separated keyword description of an
/// image and splits the completion into individual keywords.
#[derive(Debug, Clone)]
pub struct OpenAiVisionClient {
    client: Client,
    config: VisionClientConfig,
}

impl OpenAiVisionClient {
    pub fn new(config: VisionClientConfig) -> Result<Self, ReqwestError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    pub fn from_env() -> Result<Self, ReqwestError> {
        let config = VisionClientConfig::default();
        if config.api_key.is_empty() {
            log::warn!("OPENAI_API_KEY not set; keyword extraction will fail");
        }

        Self::new(config)
    }

    async fn describe_image(&self, image_data: &[u8]) -> Result<String, KeywordExtractorError> {
        let request = build_chat_request(&self.config.model, self.config.max_tokens, image_data);

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| KeywordExtractorError::NetworkError(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(KeywordExtractorError::ApiError(format!(
                "Vision API returned HTTP {}",
                status
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| KeywordExtractorError::MalformedResponse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                KeywordExtractorError::MalformedResponse("No completion content returned".to_string())
            })
    }
}

#[async_trait]
impl KeywordExtractor for OpenAiVisionClient {
    async fn extract_keywords(
        &self,
        image_data: &[u8],
    ) -> Result<Vec<String>, KeywordExtractorError> {
        let content = self.describe_image(image_data).await?;
        Ok(parse_keywords(&content))
    }
}

/// The payload is always labelled image/jpeg; the model reads the actual
/// container from the bytes.
pub fn image_data_url(image_data: &[u8]) -> String {
    format!(
        "data:image/jpeg;base64,{}",
        general_purpose::STANDARD.encode(image_data)
    )
}

pub fn build_chat_request(
    model: &str,
    max_tokens: u32,
    image_data: &[u8],
) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: model.to_string(),
        messages: vec![ChatMessage {
            role: "user".to_string(),
            content: vec![
                ContentPart::Text {
                    text: KEYWORD_PROMPT.to_string(),
                },
                ContentPart::ImageUrl {
                    image_url: ImageUrl {
                        url: image_data_url(image_data),
                    },
                },
            ],
        }],
        max_tokens,
    }
}

/// Splits a completion on commas and trims each entry. Empty entries are
/// kept, so a blank completion still yields one empty keyword.
pub fn parse_keywords(content: &str) -> Vec<String> {
    content.split(',').map(|k| k.trim().to_string()).collect()
}
