pub mod image_fetcher;
pub mod image_search;
pub mod keyword_extractor;

pub use image_fetcher::ImageMetadataFetcher;
pub use image_search::ImageSearchProvider;
pub use keyword_extractor::KeywordExtractor;
