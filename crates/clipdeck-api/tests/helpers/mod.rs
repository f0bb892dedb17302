//! Test application wiring: the real router over the in-memory document
//! store and a tempdir-backed local storage, driven through axum-test.

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use clipdeck_api::setup::routes::setup_routes;
use clipdeck_api::state::AppState;
use clipdeck_core::{Config, StorageBackend};
use clipdeck_db::{MemoryVideoStore, VideoStore};
use clipdeck_storage::{LocalStorage, Storage};
use std::sync::Arc;
use tempfile::TempDir;

const TEST_BASE_URL: &str = "http://localhost:8080/media";

/// Test application state
pub struct TestApp {
    pub server: TestServer,
    pub _temp_dir: TempDir,
}

impl TestApp {
    /// Get the HTTP test client
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

fn test_config(temp_dir: &TempDir) -> Config {
    Config {
        server_port: 0,
        cors_origins: vec!["*".to_string()],
        database_url: "postgres://unused-in-tests/videoapp".to_string(),
        database_max_connections: 1,
        database_timeout_secs: 5,
        videos_table: "videos".to_string(),
        storage_backend: StorageBackend::Local,
        s3_bucket: "videos".to_string(),
        s3_region: None,
        s3_endpoint: None,
        local_storage_path: Some(temp_dir.path().display().to_string()),
        local_storage_base_url: Some(TEST_BASE_URL.to_string()),
        max_video_size_bytes: 16 * 1024 * 1024,
        max_json_body_bytes: 64 * 1024,
    }
}

/// Setup a test application with isolated in-process backends.
pub async fn setup_test_app() -> TestApp {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = test_config(&temp_dir);

    let videos: Arc<dyn VideoStore> = Arc::new(MemoryVideoStore::new());
    videos.ensure_schema().await.expect("Failed to ensure schema");

    let storage: Arc<dyn Storage> = Arc::new(LocalStorage::new(
        temp_dir.path(),
        TEST_BASE_URL.to_string(),
    ));
    storage.ensure_bucket().await.expect("Failed to ensure bucket");

    let state = Arc::new(AppState {
        config: config.clone(),
        videos,
        storage,
    });

    let router = setup_routes(&config, state).expect("Failed to build routes");
    let server = TestServer::new(router).expect("Failed to create test server");

    TestApp {
        server,
        _temp_dir: temp_dir,
    }
}

/// Multipart form for a video upload with an mp4 payload.
pub fn video_form(title: &str, description: &str, file_name: &str) -> MultipartForm {
    MultipartForm::new()
        .add_text("title", title.to_string())
        .add_text("description", description.to_string())
        .add_part(
            "video",
            Part::bytes(b"fake video bytes".to_vec())
                .file_name(file_name.to_string())
                .mime_type("video/mp4"),
        )
}

/// Upload a video and return its parsed 201 response body.
pub async fn upload_video(app: &TestApp, title: &str, file_name: &str) -> serde_json::Value {
    let response = app
        .client()
        .post("/api/videos")
        .multipart(video_form(title, "", file_name))
        .await;
    assert_eq!(response.status_code(), 201);
    response.json()
}
