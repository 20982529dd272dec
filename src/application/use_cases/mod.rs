pub mod get_upload;
pub mod process_upload;

pub use get_upload::GetUploadUseCase;
pub use process_upload::ProcessUploadUseCase;
