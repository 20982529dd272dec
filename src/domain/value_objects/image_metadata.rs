use serde::{Deserialize, Serialize};

/// Raster metadata recorded for a fetched similar image. `dimensions` is the
/// `"{width}x{height}"` label and `size` the raw byte length of the fetched
/// body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageMetadata {
    pub dimensions: String,
    pub format: String,
    pub size: u64,
    pub url: String,
}

impl ImageMetadata {
    pub fn new(width: u32, height: u32, format: String, size: u64, url: String) -> Self {
        Self {
            dimensions: format!("{}x{}", width, height),
            format,
            size,
            url,
        }
    }
}
