mod helpers;

use axum_test::multipart::{MultipartForm, Part};
use helpers::{setup_test_app, upload_video};

#[tokio::test]
async fn test_index_reports_service_identity() {
    let app = setup_test_app().await;

    let response = app.client().get("/").await;
    assert_eq!(response.status_code(), 200);

    let data: serde_json::Value = response.json();
    assert_eq!(data.get("name").and_then(|v| v.as_str()), Some("clipdeck"));
    assert_eq!(data.get("ok").and_then(|v| v.as_bool()), Some(true));
    assert!(data.get("time").and_then(|v| v.as_str()).is_some());
}

#[tokio::test]
async fn test_health_check() {
    let app = setup_test_app().await;

    let response = app.client().get("/health").await;
    assert_eq!(response.status_code(), 200);

    let data: serde_json::Value = response.json();
    assert_eq!(data.get("ok").and_then(|v| v.as_bool()), Some(true));
    assert!(data.get("time").and_then(|v| v.as_str()).is_some());
}

#[tokio::test]
async fn test_upload_video_creates_document() {
    let app = setup_test_app().await;

    let video = upload_video(&app, "Intro", "intro.mp4").await;

    let id = video.get("id").and_then(|v| v.as_str()).expect("id");
    assert_eq!(video.get("title").and_then(|v| v.as_str()), Some("Intro"));
    assert_eq!(
        video.get("blobName").and_then(|v| v.as_str()),
        Some(format!("{}.mp4", id).as_str())
    );
    let blob_url = video.get("blobUrl").and_then(|v| v.as_str()).expect("url");
    assert!(blob_url.ends_with(&format!("{}.mp4", id)));
    assert_eq!(
        video.get("comments").and_then(|v| v.as_array()).map(Vec::len),
        Some(0)
    );
    assert!(video.get("createdAt").and_then(|v| v.as_str()).is_some());
}

#[tokio::test]
async fn test_blob_name_extension_follows_original_filename() {
    let app = setup_test_app().await;

    let webm = upload_video(&app, "Clip", "clip.WEBM").await;
    let blob_name = webm.get("blobName").and_then(|v| v.as_str()).expect("name");
    assert!(blob_name.ends_with(".webm"));

    // No extension on the original name falls back to mp4.
    let bare = upload_video(&app, "Bare", "rawclip").await;
    let blob_name = bare.get("blobName").and_then(|v| v.as_str()).expect("name");
    assert!(blob_name.ends_with(".mp4"));
}

#[tokio::test]
async fn test_upload_truncates_long_title() {
    let app = setup_test_app().await;

    let video = upload_video(&app, &"t".repeat(200), "intro.mp4").await;
    let title = video.get("title").and_then(|v| v.as_str()).expect("title");
    assert_eq!(title.chars().count(), 120);
}

#[tokio::test]
async fn test_upload_requires_title() {
    let app = setup_test_app().await;

    let form = MultipartForm::new().add_part(
        "video",
        Part::bytes(b"fake video bytes".to_vec())
            .file_name("intro.mp4")
            .mime_type("video/mp4"),
    );
    let response = app.client().post("/api/videos").multipart(form).await;

    assert_eq!(response.status_code(), 400);
    let data: serde_json::Value = response.json();
    assert_eq!(
        data.get("code").and_then(|v| v.as_str()),
        Some("INVALID_INPUT")
    );
}

#[tokio::test]
async fn test_upload_requires_file() {
    let app = setup_test_app().await;

    let form = MultipartForm::new().add_text("title", "Intro");
    let response = app.client().post("/api/videos").multipart(form).await;

    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn test_upload_rejects_non_video_content_type() {
    let app = setup_test_app().await;

    let form = MultipartForm::new().add_text("title", "Intro").add_part(
        "video",
        Part::bytes(b"not a video".to_vec())
            .file_name("image.png")
            .mime_type("image/png"),
    );
    let response = app.client().post("/api/videos").multipart(form).await;

    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn test_list_videos_newest_first_without_comments() {
    let app = setup_test_app().await;

    upload_video(&app, "older", "a.mp4").await;
    let newer = upload_video(&app, "newer", "b.mp4").await;

    // Comment on one video to prove the projection strips comments.
    let newer_id = newer.get("id").and_then(|v| v.as_str()).expect("id");
    let response = app
        .client()
        .post(&format!("/api/videos/{}/comments", newer_id))
        .json(&serde_json::json!({"userId": "u1", "text": "hi"}))
        .await;
    assert_eq!(response.status_code(), 201);

    let response = app.client().get("/api/videos").await;
    assert_eq!(response.status_code(), 200);

    let data: serde_json::Value = response.json();
    let items = data.get("items").and_then(|v| v.as_array()).expect("items");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].get("title").and_then(|v| v.as_str()), Some("newer"));
    assert_eq!(items[1].get("title").and_then(|v| v.as_str()), Some("older"));
    for item in items {
        assert!(item.get("comments").is_none());
        assert!(item.get("blobUrl").is_some());
        assert!(item.get("blobName").is_some());
    }
}

#[tokio::test]
async fn test_get_video_returns_full_document() {
    let app = setup_test_app().await;

    let uploaded = upload_video(&app, "Intro", "intro.mp4").await;
    let id = uploaded.get("id").and_then(|v| v.as_str()).expect("id");

    let response = app.client().get(&format!("/api/videos/{}", id)).await;
    assert_eq!(response.status_code(), 200);

    let data: serde_json::Value = response.json();
    assert_eq!(data.get("title").and_then(|v| v.as_str()), Some("Intro"));
    assert!(data.get("comments").and_then(|v| v.as_array()).is_some());
}

#[tokio::test]
async fn test_get_video_not_found() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .get(&format!("/api/videos/{}", uuid::Uuid::new_v4()))
        .await;

    assert_eq!(response.status_code(), 404);
    let data: serde_json::Value = response.json();
    assert_eq!(data.get("code").and_then(|v| v.as_str()), Some("NOT_FOUND"));
}

#[tokio::test]
async fn test_reread_without_mutation_is_identical() {
    let app = setup_test_app().await;

    let uploaded = upload_video(&app, "Intro", "intro.mp4").await;
    let id = uploaded.get("id").and_then(|v| v.as_str()).expect("id");

    let first: serde_json::Value = app.client().get(&format!("/api/videos/{}", id)).await.json();
    let second: serde_json::Value = app.client().get(&format!("/api/videos/{}", id)).await.json();
    assert_eq!(first, second);
}
