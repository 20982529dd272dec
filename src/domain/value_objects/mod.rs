pub mod image_metadata;
pub mod similar_image;

pub use image_metadata::ImageMetadata;
pub use similar_image::SimilarImage;
