//! HTTP endpoint tests for the advisory service.
//!
//! These drive the full router in-process with `tower::ServiceExt::oneshot`,
//! covering query classification through the JSON API, the upload pipeline,
//! and static serving of stored files.

use std::io::Cursor;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use krishi_sahayak::{create_router, AppState, Config, UploadStore};

fn test_app(upload_dir: &std::path::Path) -> Router {
    let mut config = Config::default();
    config.uploads.dir = upload_dir.to_string_lossy().to_string();

    let uploads = UploadStore::new(upload_dir);
    uploads.ensure_dir().unwrap();

    create_router(&config, Arc::new(AppState::new(uploads)))
}

async fn post_query(app: Router, text: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/submit_query")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::json!({ "text": text }).to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn multipart_request(file_name: &str, content: &[u8]) -> Request<Body> {
    let boundary = "krishi-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"image\"; filename=\"{file_name}\"\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri("/upload_image")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap()
}

/// Create a minimal valid PNG image (1x1 white pixel).
fn create_minimal_png() -> Vec<u8> {
    let mut img = image::RgbaImage::new(1, 1);
    img.put_pixel(0, 0, image::Rgba([255, 255, 255, 255]));

    let mut bytes = Vec::new();
    let mut cursor = Cursor::new(&mut bytes);
    img.write_to(&mut cursor, image::ImageFormat::Png).unwrap();
    bytes
}

#[tokio::test]
async fn out_of_scope_query_gets_refusal() {
    let dir = TempDir::new().unwrap();
    let (status, body) = post_query(test_app(dir.path()), "tell me about football").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["text"]
        .as_str()
        .unwrap()
        .starts_with("My expertise is strictly limited to agriculture."));
    assert!(body.get("chart").is_none());
}

#[tokio::test]
async fn price_query_returns_wheat_chart() {
    let dir = TempDir::new().unwrap();
    let (status, body) = post_query(test_app(dir.path()), "what is the market price of wheat").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["chart"]["chartType"], "line");
    assert_eq!(body["chart"]["unit"], "RS/QUINTAL");

    let data = body["chart"]["data"].as_array().unwrap();
    assert_eq!(data.len(), 5);
    assert_eq!(data[0]["label"], "2024-05");
    assert_eq!(data[0]["value"], 2200.0);
    assert_eq!(data[3]["label"], "2024-11");
    assert_eq!(data[3]["value"], 2400.0);

    assert_eq!(body["sources"][0]["title"], "LOCAL SAMPLE DATA");
}

#[tokio::test]
async fn price_group_wins_over_pest_group() {
    let dir = TempDir::new().unwrap();
    let (status, body) =
        post_query(test_app(dir.path()), "pest outbreak is moving the crop price").await;

    assert_eq!(status, StatusCode::OK);
    // The price group is checked first, so no neem-oil answer here.
    assert!(body["chart"].is_object());
    assert!(!body["text"].as_str().unwrap().contains("NEEM OIL"));
}

#[tokio::test]
async fn pest_query_gets_neem_oil_tip() {
    let dir = TempDir::new().unwrap();
    let (status, body) = post_query(test_app(dir.path()), "worms are eating my crop").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["text"].as_str().unwrap().contains("NEEM OIL"));
    assert!(body.get("chart").is_none());
}

#[tokio::test]
async fn empty_query_is_rejected() {
    let dir = TempDir::new().unwrap();
    let (status, body) = post_query(test_app(dir.path()), "   ").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Empty query");
}

#[tokio::test]
async fn txt_upload_is_rejected() {
    let dir = TempDir::new().unwrap();
    let app = test_app(dir.path());

    let response = app
        .oneshot(multipart_request("notes.txt", b"not an image"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "Invalid image format");
}

#[tokio::test]
async fn corrupt_png_upload_is_rejected() {
    let dir = TempDir::new().unwrap();
    let app = test_app(dir.path());

    let response = app
        .oneshot(multipart_request("fake.png", b"garbage bytes"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn png_upload_round_trips_through_static_serving() {
    let dir = TempDir::new().unwrap();
    let app = test_app(dir.path());
    let png = create_minimal_png();

    let response = app
        .clone()
        .oneshot(multipart_request("crop.png", &png))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let path = body["path"].as_str().unwrap();

    // Renamed for collision avoidance, never the original name.
    assert!(path.starts_with("/static/uploads/crop_"));
    assert_ne!(path, "/static/uploads/crop.png");
    assert!(path.ends_with(".png"));

    // The stored file is served back under the returned path.
    let request = Request::builder().uri(path).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let served = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(served.as_ref(), png.as_slice());
}

#[tokio::test]
async fn index_page_is_served() {
    let dir = TempDir::new().unwrap();
    let app = test_app(dir.path());

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("Krishi-Sahayak"));
}

#[tokio::test]
async fn health_endpoint_responds_ok() {
    let dir = TempDir::new().unwrap();
    let app = test_app(dir.path());

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(bytes.as_ref(), b"OK");
}
