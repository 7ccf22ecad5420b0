//! HTTP routes and request handlers.

use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::{header, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::{debug, warn};

use crate::advisor::respond;
use crate::config::Config;
use crate::uploads::UploadStore;
use crate::utils::truncate_str;
use crate::web::static_files::{serve_app_js, serve_css, serve_index};

/// Application state shared across handlers.
pub struct AppState {
    /// Store for uploaded crop photos.
    pub uploads: UploadStore,
}

impl AppState {
    /// Create new application state.
    pub fn new(uploads: UploadStore) -> Self {
        Self { uploads }
    }
}

/// Query submission body.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryRequest {
    #[serde(default)]
    pub text: String,
}

/// Successful upload response.
#[derive(Debug, Clone, Serialize)]
pub struct UploadResponse {
    pub path: String,
}

/// Error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Create the application router.
///
/// Routes:
/// - GET  /                       - advisory page
/// - GET  /style.css, /app.js     - embedded assets
/// - POST /submit_query           - JSON {text} -> advice
/// - POST /upload_image           - multipart field `image` -> {path}
/// - GET  /static/uploads/<file>  - stored uploads
/// - GET  /health                 - liveness probe
pub fn create_router(config: &Config, state: Arc<AppState>) -> Router {
    let router = Router::new()
        .route("/", get(serve_index))
        .route("/style.css", get(serve_css))
        .route("/app.js", get(serve_app_js))
        .route("/submit_query", post(submit_query_handler))
        .route("/upload_image", post(upload_image_handler))
        .route("/health", get(health_handler))
        .nest_service("/static/uploads", ServeDir::new(state.uploads.dir()))
        .layer(DefaultBodyLimit::max(config.server.max_upload_bytes))
        .with_state(state);

    if config.server.enable_cors {
        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
            .allow_origin(Any);
        router.layer(cors)
    } else {
        router
    }
}

/// POST /submit_query - answer a farmer's question.
async fn submit_query_handler(Json(request): Json<QueryRequest>) -> impl IntoResponse {
    match respond(&request.text) {
        Ok(advice) => {
            debug!(query = %truncate_str(request.text.trim(), 80), "query answered");
            (StatusCode::OK, Json(advice)).into_response()
        }
        Err(e) => (StatusCode::BAD_REQUEST, Json(ErrorBody::new(e.to_string()))).into_response(),
    }
}

/// POST /upload_image - validate and store a crop photo.
async fn upload_image_handler(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            // No `image` field behaves like a missing file.
            Ok(None) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorBody::new("Invalid image format")),
                )
                    .into_response();
            }
            Err(e) => {
                return (StatusCode::BAD_REQUEST, Json(ErrorBody::new(e.to_string())))
                    .into_response();
            }
        };

        if field.name() != Some("image") {
            continue;
        }

        let original_name = field.file_name().unwrap_or("").to_string();
        let content = match field.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                return (StatusCode::BAD_REQUEST, Json(ErrorBody::new(e.to_string())))
                    .into_response();
            }
        };

        return match state.uploads.save(&original_name, &content) {
            Ok(stored) => (
                StatusCode::OK,
                Json(UploadResponse {
                    path: stored.url_path,
                }),
            )
                .into_response(),
            Err(e) => {
                warn!(file = %original_name, error = %e, "upload rejected");
                (StatusCode::BAD_REQUEST, Json(ErrorBody::new(e.to_string()))).into_response()
            }
        };
    }
}

/// GET /health - liveness probe.
async fn health_handler() -> &'static str {
    "OK"
}
