// crates/citizen-desk-server/tests/common/mod.rs
// ============================================================================
// Module: Server Test Helpers
// Description: Spawn a desk server on an ephemeral port with test doubles.
// Purpose: Drive the HTTP routes end to end with reqwest.
// Dependencies: citizen-desk-server, citizen-desk-upload, tokio
// ============================================================================

#![allow(dead_code, reason = "Shared helpers are not used by every test binary.")]

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;

use citizen_desk_config::CitizenDeskConfig;
use citizen_desk_i18n::Locale;
use citizen_desk_server::DeskAuditSink;
use citizen_desk_server::DeskServer;
use citizen_desk_server::SubmissionAuditEvent;
use citizen_desk_server::UploadAuditEvent;
use citizen_desk_upload::BlobStore;
use citizen_desk_upload::InMemoryBlobStore;
use serde_json::Value;
use serde_json::json;
use tokio::task::JoinHandle;

/// Audit sink capturing event identifiers and payloads.
#[derive(Default)]
pub struct RecordingAudit {
    /// Serialized events in arrival order.
    events: Mutex<Vec<Value>>,
}

impl RecordingAudit {
    /// Returns captured events.
    pub fn events(&self) -> Vec<Value> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Returns captured event identifiers.
    pub fn names(&self) -> Vec<String> {
        self.events()
            .iter()
            .filter_map(|event| event["event"].as_str().map(str::to_string))
            .collect()
    }

    /// Stores one serialized event.
    fn push(&self, value: Value) {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).push(value);
    }
}

impl DeskAuditSink for RecordingAudit {
    fn record_submission(&self, event: &SubmissionAuditEvent) {
        self.push(serde_json::to_value(event).unwrap_or(Value::Null));
    }

    fn record_upload(&self, event: &UploadAuditEvent) {
        self.push(serde_json::to_value(event).unwrap_or(Value::Null));
    }
}

/// Running server and its test doubles.
pub struct TestServer {
    /// Base URL, without a trailing slash.
    pub base_url: String,
    /// Blob store behind the upload route, when configured.
    pub blobs: Option<Arc<InMemoryBlobStore>>,
    /// Captured audit events.
    pub audit: Arc<RecordingAudit>,
    /// HTTP client.
    pub client: reqwest::Client,
    /// Server task.
    join: JoinHandle<()>,
}

impl TestServer {
    /// Returns the absolute URL for `path`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.join.abort();
    }
}

/// Options for a test server.
pub struct ServerOptions {
    /// Whether durable storage is configured.
    pub storage: bool,
    /// Configured `upload.max_files`.
    pub max_files: usize,
    /// Configured `upload.max_file_bytes`.
    pub max_file_bytes: u64,
    /// Server default locale.
    pub default_locale: Locale,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            storage: true,
            max_files: 5,
            max_file_bytes: 10 * 1024 * 1024,
            default_locale: Locale::En,
        }
    }
}

/// Spawns a server with default options.
pub async fn spawn_server() -> Result<TestServer, String> {
    spawn_server_with(ServerOptions::default()).await
}

/// Spawns a server on an ephemeral port.
pub async fn spawn_server_with(options: ServerOptions) -> Result<TestServer, String> {
    let mut config = CitizenDeskConfig::default();
    config.upload.max_files = options.max_files;
    config.upload.max_file_bytes = options.max_file_bytes;
    config.i18n.default_locale = options.default_locale;
    let blobs = options.storage.then(|| Arc::new(InMemoryBlobStore::new()));
    let blob_store = blobs.clone().map(|store| store as Arc<dyn BlobStore>);
    let audit = Arc::new(RecordingAudit::default());
    let server = DeskServer::with_parts(&config, blob_store, Arc::clone(&audit) as Arc<dyn DeskAuditSink>)
        .map_err(|err| err.to_string())?;
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .map_err(|err| format!("bind failed: {err}"))?;
    let base_url = format!("http://{}", listener.local_addr().map_err(|err| err.to_string())?);
    let join = tokio::spawn(async move {
        let _ = server.serve_on(listener).await;
    });
    Ok(TestServer {
        base_url,
        blobs,
        audit,
        client: reqwest::Client::new(),
        join,
    })
}

/// Returns a valid draft body of the given type.
pub fn draft(kind: &str, subject: &str) -> Value {
    let mut body = json!({
        "type": kind,
        "subject": subject,
        "name": "Shna Ahmed",
        "mobile": "07701234567",
        "address": "Salim Street",
        "description": "Street light out for a week",
    });
    if kind == "request" {
        body["reason"] = json!("Night safety");
    }
    body
}
