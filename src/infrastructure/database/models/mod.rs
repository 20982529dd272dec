pub mod upload_record_model;

pub use upload_record_model::*;
