pub mod postgres_upload_record_repository;

pub use postgres_upload_record_repository::PostgresUploadRecordRepository;
