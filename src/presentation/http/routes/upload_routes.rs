use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::presentation::http::handlers::UploadHandler;

pub fn upload_routes(upload_handler: Arc<UploadHandler>) -> Router {
    Router::new()
        .route("/upload/", post(UploadHandler::upload_image))
        .route("/images/{image_id}", get(UploadHandler::get_image))
        .with_state(upload_handler)
}
