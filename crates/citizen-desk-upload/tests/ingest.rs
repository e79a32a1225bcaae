//! Server-side upload ingest tests.
// crates/citizen-desk-upload/tests/ingest.rs
// ============================================================================
// Module: Upload Ingest Tests
// Description: Limit checks and blob writes for upload batches.
// Purpose: Ensure oversized batches never reach storage.
// Dependencies: citizen-desk-upload, tokio
// ============================================================================

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "Test-only panic-based assertions are permitted."
)]

mod common;

use citizen_desk_core::PendingFile;
use citizen_desk_core::Timestamp;
use citizen_desk_upload::InMemoryBlobStore;
use citizen_desk_upload::UploadError;
use citizen_desk_upload::UploadLimits;
use citizen_desk_upload::store_files;

use crate::common::FailingBlobStore;
use crate::common::pending;

/// Fixed ingest time.
const NOW: Timestamp = Timestamp::from_unix_millis(1_709_985_600_000);

#[tokio::test]
async fn stores_each_file_and_describes_it_in_order() {
    let store = InMemoryBlobStore::new();
    let files = vec![pending("photo.jpg", "image/jpeg", 12), pending("notes.pdf", "application/pdf", 3)];
    let uploaded = store_files(&store, files, UploadLimits::default(), NOW).await.unwrap();

    assert_eq!(uploaded.len(), 2);
    assert_eq!(uploaded[0].name, "photo.jpg");
    assert_eq!(uploaded[0].mime_type, "image/jpeg");
    assert_eq!(uploaded[0].size, 12);
    assert_eq!(uploaded[0].url, "memory://submissions/1709985600000-photo.jpg");
    assert_eq!(uploaded[1].url, "memory://submissions/1709985600000-notes.pdf");

    let stored = store.get("submissions/1709985600000-notes.pdf").unwrap();
    assert_eq!(stored.content_type, "application/pdf");
    assert_eq!(stored.bytes.len(), 3);
}

#[tokio::test]
async fn repeated_file_names_keep_their_own_bytes() {
    let store = InMemoryBlobStore::new();
    let now = Timestamp::from_unix_millis(42);
    let files = vec![
        PendingFile::new("photo.jpg", "image/jpeg", b"FIRST".to_vec()),
        PendingFile::new("photo.jpg", "image/jpeg", b"SECOND".to_vec()),
        PendingFile::new("photo.jpg", "image/jpeg", b"THIRD".to_vec()),
    ];
    let uploaded = store_files(&store, files, UploadLimits::default(), now).await.unwrap();

    let urls: Vec<&str> = uploaded.iter().map(|file| file.url.as_str()).collect();
    assert_eq!(
        urls,
        [
            "memory://submissions/42-photo.jpg",
            "memory://submissions/42-1-photo.jpg",
            "memory://submissions/42-2-photo.jpg",
        ]
    );
    assert_eq!(store.object_names().len(), 3);
    assert_eq!(store.get("submissions/42-photo.jpg").unwrap().bytes[..], b"FIRST"[..]);
    assert_eq!(store.get("submissions/42-1-photo.jpg").unwrap().bytes[..], b"SECOND"[..]);
    assert_eq!(store.get("submissions/42-2-photo.jpg").unwrap().bytes[..], b"THIRD"[..]);
    assert!(uploaded.iter().all(|file| file.name == "photo.jpg"));
}

#[tokio::test]
async fn numbered_names_skip_names_already_taken_in_the_batch() {
    let store = InMemoryBlobStore::new();
    let now = Timestamp::from_unix_millis(42);
    let files = vec![
        pending("1-photo.jpg", "image/jpeg", 1),
        pending("photo.jpg", "image/jpeg", 2),
        pending("photo.jpg", "image/jpeg", 3),
    ];
    let uploaded = store_files(&store, files, UploadLimits::default(), now).await.unwrap();

    assert_eq!(uploaded[0].url, "memory://submissions/42-1-photo.jpg");
    assert_eq!(uploaded[1].url, "memory://submissions/42-photo.jpg");
    assert_eq!(uploaded[2].url, "memory://submissions/42-2-photo.jpg");
    assert_eq!(store.get("submissions/42-1-photo.jpg").unwrap().bytes.len(), 1);
}

#[tokio::test]
async fn empty_batch_stores_nothing() {
    let store = InMemoryBlobStore::new();
    let uploaded = store_files(&store, Vec::new(), UploadLimits::default(), NOW).await.unwrap();
    assert!(uploaded.is_empty());
    assert!(store.object_names().is_empty());
}

#[tokio::test]
async fn too_many_files_are_rejected_before_any_write() {
    let store = InMemoryBlobStore::new();
    let files = (0 .. 6).map(|idx| pending(&format!("f{idx}.txt"), "text/plain", 1)).collect();
    let err = store_files(&store, files, UploadLimits::default(), NOW).await.unwrap_err();
    match err {
        UploadError::TooManyFiles {
            count,
            limit,
        } => {
            assert_eq!(count, 6);
            assert_eq!(limit, 5);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(store.object_names().is_empty());
}

#[tokio::test]
async fn oversized_file_is_rejected_before_any_write() {
    let store = InMemoryBlobStore::new();
    let limits = UploadLimits {
        max_files: 5,
        max_file_bytes: 4,
    };
    let files = vec![pending("small.txt", "text/plain", 4), pending("big.txt", "text/plain", 5)];
    let err = store_files(&store, files, limits, NOW).await.unwrap_err();
    match err {
        UploadError::FileTooLarge {
            name,
            limit,
        } => {
            assert_eq!(name, "big.txt");
            assert_eq!(limit, 4);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(store.object_names().is_empty());
}

#[tokio::test]
async fn storage_failure_is_reported() {
    let files = vec![pending("photo.jpg", "image/jpeg", 2)];
    let err = store_files(&FailingBlobStore, files, UploadLimits::default(), NOW).await.unwrap_err();
    assert!(matches!(err, UploadError::Storage(message) if message.contains("bucket unavailable")));
}

#[test]
fn limits_from_config_never_exceed_builtin_caps() {
    let config = citizen_desk_config::UploadConfig {
        max_files: 3,
        max_file_bytes: 1024,
        storage: None,
    };
    let limits = UploadLimits::from_config(&config);
    assert_eq!(limits.max_files, 3);
    assert_eq!(limits.max_file_bytes, 1024);
}

#[test]
fn uploaded_file_uses_type_on_the_wire() {
    let json = r#"{"files":[{"name":"a.png","type":"image/png","size":9,"url":"https://x/a.png"}]}"#;
    let response: citizen_desk_upload::UploadResponse = serde_json::from_str(json).unwrap();
    let attachment = response.files[0].clone().into_attachment();
    assert_eq!(attachment.mime_type, "image/png");
    assert!(attachment.is_durable());
}
