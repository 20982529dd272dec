pub mod upload_record_repository;

pub use upload_record_repository::UploadRecordRepository;
