pub mod image_fetcher;
pub mod image_search_client;
pub mod vision_client;

pub use image_fetcher::HttpImageFetcher;
pub use image_search_client::GoogleImageSearchClient;
pub use vision_client::OpenAiVisionClient;
