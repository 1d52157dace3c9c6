#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tempfile::TempDir;
use tower::ServiceExt;

use restro3d_api::config::ServerConfig;
use restro3d_api::router::build_app_router;
use restro3d_api::state::AppState;

/// Base URL encoded into QR codes during tests.
pub const TEST_BASE_URL: &str = "http://menu.test";

/// CORS origin allowed by [`test_config`].
pub const TEST_ORIGIN: &str = "http://localhost:8000";

/// Body size limit used by [`test_config`], small enough to exceed in a test.
pub const TEST_MAX_FILE_SIZE: usize = 64 * 1024;

/// Build a test `ServerConfig` whose upload directory is `upload_dir`.
pub fn test_config(upload_dir: &std::path::Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        base_url: TEST_BASE_URL.to_string(),
        upload_dir: upload_dir.to_path_buf(),
        static_dir: upload_dir.join("static"),
        max_file_size: TEST_MAX_FILE_SIZE,
        cors_origins: vec![TEST_ORIGIN.to_string()],
        request_timeout_secs: 30,
    }
}

/// Application under test plus the temporary upload directory it writes to.
///
/// The directory is removed when the `TestApp` is dropped.
pub struct TestApp {
    pub pool: PgPool,
    pub uploads: TempDir,
}

impl TestApp {
    /// Create upload directories in a fresh temp dir.
    pub async fn new(pool: PgPool) -> Self {
        let uploads = tempfile::tempdir().expect("create temp upload dir");
        let app = Self { pool, uploads };
        app.state()
            .uploads
            .ensure_dirs()
            .await
            .expect("create upload subdirectories");
        app
    }

    fn state(&self) -> AppState {
        AppState::new(self.pool.clone(), test_config(self.uploads.path()))
            .expect("templates compile")
    }

    /// A router over the same pool and upload directory. Each request
    /// consumes one router, so call this per request.
    pub fn router(&self) -> Router {
        let config = test_config(self.uploads.path());
        build_app_router(self.state(), &config)
    }

    /// Read a file back from the upload directory by its public URL.
    pub fn read_upload(&self, public_url: &str) -> Vec<u8> {
        let relative = public_url
            .strip_prefix("/uploads/")
            .expect("upload URLs start with /uploads/");
        std::fs::read(self.uploads.path().join(relative)).expect("uploaded file exists")
    }
}

// ---------------------------------------------------------------------------
// Multipart bodies
// ---------------------------------------------------------------------------

const BOUNDARY: &str = "----restro3d-test-boundary";

/// Builder for a `multipart/form-data` request body.
#[derive(Default)]
pub struct MultipartBody {
    body: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, filename: &str, data: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(data);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    fn finish(mut self) -> Vec<u8> {
        self.body
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        self.body
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_multipart(app: Router, uri: &str, form: MultipartBody) -> Response<Body> {
    send_multipart(app, Method::POST, uri, form).await
}

pub async fn put_multipart(app: Router, uri: &str, form: MultipartBody) -> Response<Body> {
    send_multipart(app, Method::PUT, uri, form).await
}

async fn send_multipart(
    app: Router,
    method: Method,
    uri: &str,
    form: MultipartBody,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(form.finish()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a restaurant through the API and return its JSON.
pub async fn create_restaurant(app: &TestApp, name: &str) -> serde_json::Value {
    let response = post_multipart(
        app.router(),
        "/api/restaurants",
        MultipartBody::new().text("name", name),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await
}

/// Create a menu item with a minimal GLB upload and return its JSON.
pub async fn create_menu_item(
    app: &TestApp,
    restaurant_id: &str,
    name: &str,
    category: &str,
) -> serde_json::Value {
    let response = post_multipart(
        app.router(),
        &format!("/api/restaurants/{restaurant_id}/menu-items"),
        MultipartBody::new()
            .text("name", name)
            .text("price", "9.5")
            .text("category", category)
            .file("glb_file", "model.glb", b"glTF\x02\x00\x00\x00"),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await
}
