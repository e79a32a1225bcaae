// crates/citizen-desk-upload/tests/common/mod.rs
// ============================================================================
// Module: Upload Test Helpers
// Description: Stub upload endpoint and failing stores for upload tests.
// Purpose: Exercise the upload client against a real HTTP listener.
// Dependencies: axum, tokio
// ============================================================================

#![allow(dead_code, reason = "Shared helpers are not used by every test binary.")]

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;

use async_trait::async_trait;
use axum::Json;
use axum::Router;
use axum::extract::Multipart;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::routing::post;
use bytes::Bytes;
use citizen_desk_core::PendingFile;
use citizen_desk_upload::BlobStore;
use citizen_desk_upload::BlobStoreError;
use citizen_desk_upload::UploadResponse;
use citizen_desk_upload::UploadedFile;
use serde_json::json;
use tokio::task::JoinHandle;

/// Behavior of the stub upload endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StubMode {
    /// Store every part and describe it.
    Accept,
    /// Answer 500 with an `error` body.
    Unconfigured,
    /// Answer 200 with fewer descriptors than parts.
    DropLast,
    /// Answer 200 with a body that is not JSON.
    Garbage,
}

/// Part captured by the stub endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedPart {
    /// Multipart field name.
    pub field: String,
    /// Declared file name.
    pub file_name: String,
    /// Declared content type.
    pub content_type: String,
    /// Part length in bytes.
    pub len: usize,
}

/// Shared stub state.
#[derive(Clone)]
struct StubState {
    /// Configured behavior.
    mode: StubMode,
    /// Captured parts across all requests.
    parts: Arc<Mutex<Vec<CapturedPart>>>,
}

/// Handle for a running stub upload endpoint.
pub struct UploadStub {
    /// Server base URL.
    base_url: String,
    /// Server task.
    join: JoinHandle<()>,
    /// Captured parts.
    parts: Arc<Mutex<Vec<CapturedPart>>>,
}

impl UploadStub {
    /// Returns the base URL of the stub server.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns every part received so far.
    pub fn parts(&self) -> Vec<CapturedPart> {
        self.parts.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Drop for UploadStub {
    fn drop(&mut self) {
        self.join.abort();
    }
}

/// Spawns a stub upload endpoint on an ephemeral port.
pub async fn spawn_upload_stub(mode: StubMode) -> Result<UploadStub, String> {
    let parts = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        mode,
        parts: Arc::clone(&parts),
    };
    let app = Router::new().route("/api/upload", post(handle_upload)).with_state(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .map_err(|err| format!("upload stub bind failed: {err}"))?;
    let base_url = format!("http://{}", listener.local_addr().map_err(|err| err.to_string())?);
    let join = tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(UploadStub {
        base_url,
        join,
        parts,
    })
}

/// Stub handler for `POST /api/upload`.
async fn handle_upload(State(state): State<StubState>, mut multipart: Multipart) -> Response {
    if state.mode == StubMode::Unconfigured {
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": "Upload not configured"})))
            .into_response();
    }
    if state.mode == StubMode::Garbage {
        return (StatusCode::OK, "not json").into_response();
    }
    let mut files = Vec::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let field_name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        let Ok(bytes) = field.bytes().await else {
            return StatusCode::BAD_REQUEST.into_response();
        };
        state.parts.lock().unwrap_or_else(PoisonError::into_inner).push(CapturedPart {
            field: field_name,
            file_name: file_name.clone(),
            content_type: content_type.clone(),
            len: bytes.len(),
        });
        files.push(UploadedFile {
            url: format!("https://files.example.test/{file_name}"),
            name: file_name,
            mime_type: content_type,
            size: bytes.len() as u64,
        });
    }
    if state.mode == StubMode::DropLast {
        files.pop();
    }
    Json(UploadResponse {
        files,
    })
    .into_response()
}

/// Blob store whose writes always fail.
pub struct FailingBlobStore;

#[async_trait]
impl BlobStore for FailingBlobStore {
    async fn put(
        &self,
        _object_name: &str,
        _content_type: &str,
        _bytes: Bytes,
    ) -> Result<String, BlobStoreError> {
        Err(BlobStoreError::Io("bucket unavailable".to_string()))
    }
}

/// Builds a pending file of `len` bytes.
pub fn pending(name: &str, mime_type: &str, len: usize) -> PendingFile {
    PendingFile::new(name, mime_type, vec![7u8; len])
}
