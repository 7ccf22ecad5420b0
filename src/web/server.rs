//! HTTP server startup.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::config::Config;
use crate::uploads::UploadStore;
use crate::web::routes::{create_router, AppState};

/// Run the HTTP front end until the process is stopped.
pub async fn run_server(config: Config) -> Result<()> {
    let uploads = UploadStore::new(config.upload_dir());
    uploads.ensure_dir()?;
    info!(dir = %uploads.dir().display(), "upload directory ready");

    let state = Arc::new(AppState::new(uploads));
    let app = create_router(&config, state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Krishi-Sahayak listening on http://{}", addr);

    axum::serve(listener, app).await?;

    info!("Krishi-Sahayak shutting down");
    Ok(())
}
