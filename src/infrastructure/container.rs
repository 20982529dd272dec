use std::sync::Arc;

use crate::{
    application::{
        ports::{ImageMetadataFetcher, ImageSearchProvider, KeywordExtractor},
        use_cases::{GetUploadUseCase, ProcessUploadUseCase},
    },
    domain::repositories::UploadRecordRepository,
    infrastructure::{
        database::{
            create_connection_pool, get_database_connection,
            repositories::PostgresUploadRecordRepository, run_migrations,
        },
        external_services::{GoogleImageSearchClient, HttpImageFetcher, OpenAiVisionClient},
    },
    presentation::http::handlers::UploadHandler,
};

pub struct AppContainer {
    // Repositories
    pub upload_repository: Arc<dyn UploadRecordRepository>,

    // External Services
    pub keyword_extractor: Arc<dyn KeywordExtractor>,
    pub image_search: Arc<dyn ImageSearchProvider>,
    pub metadata_fetcher: Arc<dyn ImageMetadataFetcher>,

    // Use Cases
    pub process_upload_use_case: Arc<ProcessUploadUseCase>,
    pub get_upload_use_case: Arc<GetUploadUseCase>,

    // HTTP Handlers
    pub upload_handler: Arc<UploadHandler>,
}

impl AppContainer {
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        // Create database connection pool
        let db_pool = create_connection_pool()?;
        let mut conn = get_database_connection()
            .map_err(|e| format!("Failed to create database connection: {}", e))?;
        run_migrations(&mut conn)
            .map_err(|e| format!("Failed to run database migrations: {}", e))?;

        // Create repositories
        let upload_repository: Arc<dyn UploadRecordRepository> =
            Arc::new(PostgresUploadRecordRepository::new(db_pool));

        // Create external services
        let keyword_extractor: Arc<dyn KeywordExtractor> =
            Arc::new(OpenAiVisionClient::from_env()?);
        let image_search: Arc<dyn ImageSearchProvider> =
            Arc::new(GoogleImageSearchClient::from_env()?);
        let metadata_fetcher: Arc<dyn ImageMetadataFetcher> = Arc::new(HttpImageFetcher::new()?);

        // Create use cases
        let process_upload_use_case = Arc::new(ProcessUploadUseCase::new(
            keyword_extractor.clone(),
            image_search.clone(),
            metadata_fetcher.clone(),
            upload_repository.clone(),
        ));

        let get_upload_use_case = Arc::new(GetUploadUseCase::new(upload_repository.clone()));

        // Create HTTP handlers
        let upload_handler = Arc::new(UploadHandler::new(
            process_upload_use_case.clone(),
            get_upload_use_case.clone(),
        ));

        Ok(Self {
            upload_repository,
            keyword_extractor,
            image_search,
            metadata_fetcher,
            process_upload_use_case,
            get_upload_use_case,
            upload_handler,
        })
    }
}
