mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::path::PathBuf;

use dotenv::dotenv;

use crate::infrastructure::container::AppContainer;
use crate::presentation::http::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::init();

    let container = AppContainer::new().await?;

    let static_dir =
        PathBuf::from(std::env::var("STATIC_DIR").unwrap_or_else(|_| "./static".to_string()));
    let port = std::env::var("PORT").ok().and_then(|p| p.parse().ok());

    let server = HttpServer::new(container.upload_handler.clone(), static_dir, port);

    server.run().await
}
