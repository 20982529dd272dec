use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::application::use_cases::{
    GetUploadUseCase, ProcessUploadUseCase, get_upload::GetUploadError,
    get_upload::GetUploadRequest, process_upload::ProcessUploadRequest,
};
use crate::presentation::http::dto::{
    ErrorResponseDto, ImageDetailResponseDto, UploadResponseDto,
};

pub struct UploadHandler {
    process_upload_use_case: Arc<ProcessUploadUseCase>,
    get_upload_use_case: Arc<GetUploadUseCase>,
}

impl UploadHandler {
    pub fn new(
        process_upload_use_case: Arc<ProcessUploadUseCase>,
        get_upload_use_case: Arc<GetUploadUseCase>,
    ) -> Self {
        Self {
            process_upload_use_case,
            get_upload_use_case,
        }
    }

    pub async fn upload_image(
        State(handler): State<Arc<UploadHandler>>,
        mut multipart: Multipart,
    ) -> Result<Response, StatusCode> {
        // The first field carrying a filename is the upload; other form
        // fields are ignored.
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|_| StatusCode::BAD_REQUEST)?
        {
            let file_name = match field.file_name() {
                Some(name) => name.to_string(),
                None => continue,
            };

            let data = field
                .bytes()
                .await
                .map_err(|_| StatusCode::BAD_REQUEST)?
                .to_vec();

            let request = ProcessUploadRequest {
                file_name,
                file_data: data,
            };

            return match handler.process_upload_use_case.execute(request).await {
                Ok(response) => {
                    let dto = UploadResponseDto::from(response);
                    Ok((StatusCode::OK, Json(dto)).into_response())
                }
                // A failed insert is reported in the body with a 200 status.
                Err(e) => {
                    log::error!("Upload processing error: {}", e);
                    Ok((
                        StatusCode::OK,
                        Json(ErrorResponseDto {
                            error: e.to_string(),
                        }),
                    )
                        .into_response())
                }
            };
        }

        Ok((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponseDto {
                error: "No file provided in the request".to_string(),
            }),
        )
            .into_response())
    }

    pub async fn get_image(
        State(handler): State<Arc<UploadHandler>>,
        Path(image_id): Path<i32>,
    ) -> Result<Response, StatusCode> {
        let request = GetUploadRequest {
            record_id: image_id,
        };

        match handler.get_upload_use_case.execute(request).await {
            Ok(response) => {
                let dto = ImageDetailResponseDto::from(response.record);
                Ok((StatusCode::OK, Json(dto)).into_response())
            }
            // Missing ids are reported in the body, not the status code.
            Err(GetUploadError::RecordNotFound(_)) => Ok((
                StatusCode::OK,
                Json(ErrorResponseDto {
                    error: "Image not found".to_string(),
                }),
            )
                .into_response()),
            Err(e) => {
                log::error!("Image lookup error: {}", e);
                Ok((
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponseDto {
                        error: e.to_string(),
                    }),
                )
                    .into_response())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use axum::body::{Body, to_bytes};
    use axum::extract::FromRequest;
    use axum::http::Request;
    use chrono::Utc;

    use super::*;
    use crate::application::ports::image_fetcher::{ImageFetchError, ImageMetadataFetcher};
    use crate::application::ports::image_search::{ImageSearchError, ImageSearchProvider};
    use crate::application::ports::keyword_extractor::{KeywordExtractor, KeywordExtractorError};
    use crate::domain::entities::{NewUploadRecord, UploadRecord};
    use crate::domain::repositories::{
        UploadRecordRepository, upload_record_repository::UploadRecordRepositoryError,
    };
    use crate::domain::value_objects::{ImageMetadata, SimilarImage};

    struct StubExtractor;

    #[async_trait]
    impl KeywordExtractor for StubExtractor {
        async fn extract_keywords(
            &self,
            _image_data: &[u8],
        ) -> Result<Vec<String>, KeywordExtractorError> {
            Ok(vec!["dog".to_string(), "park".to_string()])
        }
    }

    struct StubSearch;

    #[async_trait]
    impl ImageSearchProvider for StubSearch {
        async fn search(
            &self,
            _keywords: &[String],
            _max_results: u32,
        ) -> Result<Vec<SimilarImage>, ImageSearchError> {
            Ok(vec![SimilarImage::new(
                "https://example.com/a.jpg".to_string(),
                "https://example.com/a-thumb.jpg".to_string(),
                800,
                600,
            )])
        }
    }

    struct StubFetcher;

    #[async_trait]
    impl ImageMetadataFetcher for StubFetcher {
        async fn fetch_metadata(&self, url: &str) -> Result<ImageMetadata, ImageFetchError> {
            Ok(ImageMetadata::new(800, 600, "JPEG".to_string(), 2048, url.to_string()))
        }
    }

    #[derive(Default)]
    struct InMemoryRepository {
        records: Mutex<Vec<UploadRecord>>,
        fail_inserts: bool,
        fail_lookups: bool,
    }

    impl InMemoryRepository {
        fn failing_inserts() -> Self {
            Self {
                fail_inserts: true,
                ..Self::default()
            }
        }

        fn failing_lookups() -> Self {
            Self {
                fail_lookups: true,
                ..Self::default()
            }
        }
    }

    #[async_trait]
    impl UploadRecordRepository for InMemoryRepository {
        async fn insert(
            &self,
            record: NewUploadRecord,
        ) -> Result<i32, UploadRecordRepositoryError> {
            if self.fail_inserts {
                return Err(UploadRecordRepositoryError::DatabaseError(
                    "connection refused".to_string(),
                ));
            }
            let mut records = self.records.lock().unwrap();
            let id = records.len() as i32 + 1;
            records.push(UploadRecord::new(
                id,
                record.original_filename,
                record.keywords,
                record.similar_images,
                record.metadata,
                Some(Utc::now()),
            ));
            Ok(id)
        }

        async fn find_by_id(
            &self,
            id: i32,
        ) -> Result<Option<UploadRecord>, UploadRecordRepositoryError> {
            if self.fail_lookups {
                return Err(UploadRecordRepositoryError::DatabaseError(
                    "connection refused".to_string(),
                ));
            }
            Ok(self
                .records
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.id() == id)
                .cloned())
        }
    }

    fn handler(repository: Arc<InMemoryRepository>) -> Arc<UploadHandler> {
        let process_upload = Arc::new(ProcessUploadUseCase::new(
            Arc::new(StubExtractor),
            Arc::new(StubSearch),
            Arc::new(StubFetcher),
            repository.clone(),
        ));
        let get_upload = Arc::new(GetUploadUseCase::new(repository));

        Arc::new(UploadHandler::new(process_upload, get_upload))
    }

    const BOUNDARY: &str = "test-boundary";

    fn multipart_body(fields: &[(&str, Option<&str>, &[u8])]) -> Vec<u8> {
        let mut body = Vec::new();
        for (name, file_name, data) in fields {
            body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
            let disposition = match file_name {
                Some(file_name) => format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n\r\n",
                    name, file_name
                ),
                None => format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name),
            };
            body.extend_from_slice(disposition.as_bytes());
            body.extend_from_slice(data);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
        body
    }

    async fn multipart_from(fields: &[(&str, Option<&str>, &[u8])]) -> Multipart {
        let request = Request::builder()
            .header(
                "content-type",
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(multipart_body(fields)))
            .unwrap();

        Multipart::from_request(request, &()).await.unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_upload_returns_persisted_record() {
        let state = handler(Arc::new(InMemoryRepository::default()));
        let multipart =
            multipart_from(&[("file", Some("photo.jpg"), b"\xFF\xD8\xFF".as_slice())]).await;

        let response = UploadHandler::upload_image(State(state), multipart)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["id"], 1);
        assert_eq!(body["keywords"], serde_json::json!(["dog", "park"]));
        assert_eq!(body["similar_images"][0]["url"], "https://example.com/a.jpg");
        assert_eq!(body["metadata"][0]["dimensions"], "800x600");
        // created_at only appears on the retrieval shape.
        assert!(body.get("created_at").is_none());
    }

    #[tokio::test]
    async fn test_upload_skips_plain_form_fields() {
        let state = handler(Arc::new(InMemoryRepository::default()));
        let multipart = multipart_from(&[
            ("note", None, b"ignore me".as_slice()),
            ("file", Some("photo.jpg"), b"\xFF\xD8\xFF".as_slice()),
        ])
        .await;

        let response = UploadHandler::upload_image(State(state), multipart)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["id"], 1);
    }

    #[tokio::test]
    async fn test_upload_persistence_failure_keeps_ok_status() {
        let state = handler(Arc::new(InMemoryRepository::failing_inserts()));
        let multipart =
            multipart_from(&[("file", Some("photo.jpg"), b"\xFF\xD8\xFF".as_slice())]).await;

        let response = UploadHandler::upload_image(State(state), multipart)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("Repository error"));
        assert!(body.get("id").is_none());
    }

    #[tokio::test]
    async fn test_upload_without_file_part_is_rejected() {
        let state = handler(Arc::new(InMemoryRepository::default()));
        let multipart = multipart_from(&[("note", None, b"no file here".as_slice())]).await;

        let response = UploadHandler::upload_image(State(state), multipart)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "No file provided in the request");
    }

    #[tokio::test]
    async fn test_get_image_not_found_reports_error_body() {
        let state = handler(Arc::new(InMemoryRepository::default()));

        let response = UploadHandler::get_image(State(state), Path(99))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({"error": "Image not found"}));
    }

    #[tokio::test]
    async fn test_get_image_returns_stored_record() {
        let repository = Arc::new(InMemoryRepository::default());
        let state = handler(repository.clone());
        repository
            .insert(NewUploadRecord {
                original_filename: "photo.jpg".to_string(),
                keywords: vec!["dog".to_string()],
                similar_images: Vec::new(),
                metadata: Vec::new(),
            })
            .await
            .unwrap();

        let response = UploadHandler::get_image(State(state), Path(1)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["id"], 1);
        assert_eq!(body["keywords"], serde_json::json!(["dog"]));
        assert!(body["created_at"].is_string());
    }

    #[tokio::test]
    async fn test_get_image_repository_failure_is_server_error() {
        let state = handler(Arc::new(InMemoryRepository::failing_lookups()));

        let response = UploadHandler::get_image(State(state), Path(1)).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("Repository error"));
    }
}
