use azure_image_uploader::{
    app::App,
    models::{StorageConfig, UploadRequest, CONNECTION_STRING_VAR},
    storage::MockBlobStore,
    Error,
};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;

fn fixture(dir: &tempfile::TempDir, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[tokio::test]
async fn test_full_workflow_with_mock_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture(&dir, "photo.jpg", b"\xFF\xD8\xFF\xE0jpeg");

    let store = MockBlobStore::new()
        .with_account_name("moltbook".to_string())
        .with_container_name("moltbook-images".to_string());
    let app = App::with_store(Box::new(store.clone()));

    let request = UploadRequest::new(&path);
    let result = app.run(&request).await.unwrap();

    assert_eq!(result.blob_name, "photo.jpg");
    assert_eq!(
        result.public_url,
        "https://moltbook.blob.core.windows.net/moltbook-images/photo.jpg"
    );
    assert!(result.public_url.ends_with("/moltbook-images/photo.jpg"));

    let blob = store.get_blob("photo.jpg").unwrap();
    assert_eq!(blob.content_type, "image/jpeg");
    assert_eq!(blob.data, b"\xFF\xD8\xFF\xE0jpeg");
}

#[tokio::test]
async fn test_repeated_upload_overwrites_with_same_url() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture(&dir, "photo.png", b"first");

    let store = MockBlobStore::new();
    let app = App::with_store(Box::new(store.clone()));
    let request = UploadRequest::new(&path);

    let first = app.run(&request).await.unwrap();
    fs::write(&path, b"second").unwrap();
    let second = app.run(&request).await.unwrap();

    assert_eq!(first.public_url, second.public_url);
    assert!(first.container_created);
    assert!(!second.container_created);
    assert_eq!(store.get_create_count(), 1);
    assert_eq!(store.get_upload_count(), 2);
    assert_eq!(store.get_blob("photo.png").unwrap().data, b"second");
}

#[tokio::test]
async fn test_custom_blob_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture(&dir, "IMG_0001.jpg", b"jpeg");

    let store = MockBlobStore::new().with_container_name("posts".to_string());
    let app = App::with_store(Box::new(store.clone()));

    let result = app
        .run(&UploadRequest::new(&path).with_blob_name("custom.png"))
        .await
        .unwrap();

    assert!(result.public_url.ends_with("/posts/custom.png"));
    assert!(store.get_blob("custom.png").is_some());
    assert!(store.get_blob("IMG_0001.jpg").is_none());
}

#[tokio::test]
async fn test_markdown_line_uses_alt_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture(&dir, "cat.png", b"png");

    let app = App::with_store(Box::new(MockBlobStore::new().with_existing_container()));
    let request = UploadRequest::new(&path).with_alt_text("A cat");

    let result = app.run(&request).await.unwrap();
    let summary = app.render_summary(&request, &result);

    let last_line = summary.lines().last().unwrap().trim_start();
    assert_eq!(
        last_line,
        format!("Markdown: ![A cat]({})", result.public_url)
    );
    assert_eq!(result.markdown("A cat"), format!("![A cat]({})", result.public_url));
}

#[tokio::test]
async fn test_missing_file_is_reported_without_remote_calls() {
    let dir = tempfile::tempdir().unwrap();
    let store = MockBlobStore::new();
    let app = App::with_store(Box::new(store.clone()));

    let err = app
        .run(&UploadRequest::new(dir.path().join("nope.png")))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InputNotFound(_)));
    assert!(err.to_string().contains("nope.png"));
    assert_eq!(store.remote_call_count(), 0);
}

#[test]
fn test_missing_connection_string_is_a_configuration_error() {
    let err = StorageConfig::from_lookup(|_| None).unwrap_err();

    assert!(matches!(err, Error::Configuration(_)));
    assert!(err.to_string().contains(CONNECTION_STRING_VAR));
}
