use serde::{Deserialize, Serialize};

/// One search-provider hit, in the provider's ranking order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimilarImage {
    pub url: String,
    pub thumbnail: String,
    pub width: u32,
    pub height: u32,
}

impl SimilarImage {
    pub fn new(url: String, thumbnail: String, width: u32, height: u32) -> Self {
        Self {
            url,
            thumbnail,
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip_preserves_fields() {
        let image = SimilarImage::new("a".to_string(), "b".to_string(), 100, 200);

        let value = serde_json::to_value(&image).unwrap();
        assert_eq!(value["url"], "a");
        assert_eq!(value["thumbnail"], "b");
        assert_eq!(value["width"], 100);
        assert_eq!(value["height"], 200);

        let restored: SimilarImage = serde_json::from_value(value).unwrap();
        assert_eq!(restored, image);
    }
}
