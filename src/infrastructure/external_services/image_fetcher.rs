use async_trait::async_trait;
use image::ImageFormat;
use image::io::Reader as ImageReader;
use reqwest::{Client, Error as ReqwestError};
use std::io::Cursor;
use std::time::Duration;

use crate::application::ports::image_fetcher::{ImageFetchError, ImageMetadataFetcher};
use crate::domain::value_objects::ImageMetadata;

/// Remote images are fetched with a short timeout so one slow host cannot
/// stall the whole upload pipeline.
const FETCH_TIMEOUT_SECS: u64 = 10;

/// Downloads a remote image and reads dimensions, container format and
/// byte size from the response body.
#[derive(Debug, Clone)]
pub struct HttpImageFetcher {
    client: Client,
}

impl HttpImageFetcher {
    pub fn new() -> Result<Self, ReqwestError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ImageMetadataFetcher for HttpImageFetcher {
    async fn fetch_metadata(&self, url: &str) -> Result<ImageMetadata, ImageFetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ImageFetchError::RequestFailed(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImageFetchError::HttpStatus(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ImageFetchError::RequestFailed(e.without_url().to_string()))?;

        read_metadata(&bytes, url)
    }
}

/// Decodes only the header, never the full pixel data.
pub fn read_metadata(bytes: &[u8], url: &str) -> Result<ImageMetadata, ImageFetchError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| ImageFetchError::DecodeError(e.to_string()))?;

    let format = reader
        .format()
        .ok_or_else(|| ImageFetchError::DecodeError("Unrecognized image format".to_string()))?;

    let (width, height) = reader
        .into_dimensions()
        .map_err(|e| ImageFetchError::DecodeError(e.to_string()))?;

    Ok(ImageMetadata::new(
        width,
        height,
        format_label(format),
        bytes.len() as u64,
        url.to_string(),
    ))
}

fn format_label(format: ImageFormat) -> String {
    match format {
        ImageFormat::Png => "PNG".to_string(),
        ImageFormat::Jpeg => "JPEG".to_string(),
        ImageFormat::Gif => "GIF".to_string(),
        ImageFormat::WebP => "WEBP".to_string(),
        ImageFormat::Bmp => "BMP".to_string(),
        ImageFormat::Tiff => "TIFF".to_string(),
        other => format!("{:?}", other).to_uppercase(),
    }
}
