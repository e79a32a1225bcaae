// crates/citizen-desk-server/src/server.rs
// ============================================================================
// Module: Desk Server
// Description: HTTP service hosting the upload route and submission API.
// Purpose: Wire configuration, storage, and audit sinks into an axum router.
// Dependencies: axum, tokio, citizen-desk-config, citizen-desk-upload
// ============================================================================

//! ## Overview
//! [`DeskServer`] owns the shared handler state: the submission store behind
//! an async mutex, the optional blob store, upload limits, the audit sink,
//! and the server's default locale. Routes are registered in [`DeskServer::router`].
//!
//! ## Invariants
//! - Every store mutation happens while holding the store mutex.
//! - Request bodies are capped at the configured `max_body_bytes`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::routing::put;
use citizen_desk_config::CitizenDeskConfig;
use citizen_desk_config::ServerAuditConfig;
use citizen_desk_core::SubmissionStore;
use citizen_desk_i18n::Locale;
use citizen_desk_upload::BlobStore;
use citizen_desk_upload::S3BlobStore;
use citizen_desk_upload::UploadLimits;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

use crate::api;
use crate::audit::DeskAuditSink;
use crate::audit::DeskFileAuditSink;
use crate::audit::DeskNoopAuditSink;
use crate::audit::DeskStderrAuditSink;

// ============================================================================
// SECTION: State
// ============================================================================

/// Shared state for all request handlers.
pub(crate) struct AppState {
    /// Submission collection.
    pub(crate) store: Mutex<SubmissionStore>,
    /// Durable attachment storage, when configured.
    pub(crate) blobs: Option<Arc<dyn BlobStore>>,
    /// Upload batch limits.
    pub(crate) limits: UploadLimits,
    /// Audit sink for submission and upload events.
    pub(crate) audit: Arc<dyn DeskAuditSink>,
    /// Locale used when a request names none.
    pub(crate) default_locale: Locale,
}

// ============================================================================
// SECTION: Desk Server
// ============================================================================

/// Citizen Desk HTTP server.
pub struct DeskServer {
    /// Listen address.
    bind: SocketAddr,
    /// Maximum request body size.
    max_body_bytes: usize,
    /// Shared handler state.
    state: Arc<AppState>,
}

impl DeskServer {
    /// Builds a server from configuration, connecting configured storage.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError`] when configuration or initialization fails.
    pub async fn from_config(config: &CitizenDeskConfig) -> Result<Self, ServerError> {
        config.validate().map_err(|err| ServerError::Config(err.to_string()))?;
        let blobs: Option<Arc<dyn BlobStore>> = match &config.upload.storage {
            Some(storage) => {
                let store = S3BlobStore::from_config(storage)
                    .await
                    .map_err(|err| ServerError::Init(err.to_string()))?;
                Some(Arc::new(store))
            }
            None => None,
        };
        let audit = build_audit_sink(&config.server.audit)?;
        Self::with_parts(config, blobs, audit)
    }

    /// Builds a server from configuration with explicit storage and audit sink.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError`] when the configuration is invalid.
    pub fn with_parts(
        config: &CitizenDeskConfig,
        blobs: Option<Arc<dyn BlobStore>>,
        audit: Arc<dyn DeskAuditSink>,
    ) -> Result<Self, ServerError> {
        config.validate().map_err(|err| ServerError::Config(err.to_string()))?;
        let bind = config.server.bind_addr().map_err(|err| ServerError::Config(err.to_string()))?;
        let state = Arc::new(AppState {
            store: Mutex::new(SubmissionStore::new()),
            blobs,
            limits: UploadLimits::from_config(&config.upload),
            audit,
            default_locale: config.i18n.default_locale,
        });
        Ok(Self {
            bind,
            max_body_bytes: config.server.max_body_bytes,
            state,
        })
    }

    /// Returns the configured listen address.
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        self.bind
    }

    /// Builds the HTTP router.
    #[must_use]
    pub fn router(&self) -> Router {
        Router::new()
            .route("/api/upload", post(api::upload))
            .route("/api/submissions", post(api::create_submission).get(api::list_submissions))
            .route("/api/submissions/{id}/status", put(api::update_status))
            .layer(DefaultBodyLimit::max(self.max_body_bytes))
            .with_state(Arc::clone(&self.state))
    }

    /// Binds the configured address and serves requests.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError`] when binding or serving fails.
    pub async fn serve(self) -> Result<(), ServerError> {
        let listener = TcpListener::bind(self.bind)
            .await
            .map_err(|err| ServerError::Transport(format!("http bind failed: {err}")))?;
        self.serve_on(listener).await
    }

    /// Serves requests on an already bound listener.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError`] when serving fails.
    pub async fn serve_on(self, listener: TcpListener) -> Result<(), ServerError> {
        let app = self.router();
        axum::serve(listener, app)
            .await
            .map_err(|err| ServerError::Transport(format!("http server failed: {err}")))
    }
}

/// Builds the audit sink selected by `[server.audit]`.
fn build_audit_sink(config: &ServerAuditConfig) -> Result<Arc<dyn DeskAuditSink>, ServerError> {
    if !config.enabled {
        return Ok(Arc::new(DeskNoopAuditSink));
    }
    match &config.path {
        Some(path) => {
            let sink = DeskFileAuditSink::new(Path::new(path))
                .map_err(|err| ServerError::Init(format!("audit log open failed: {err}")))?;
            Ok(Arc::new(sink))
        }
        None => Ok(Arc::new(DeskStderrAuditSink)),
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Desk server errors.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration errors.
    #[error("config error: {0}")]
    Config(String),
    /// Initialization errors.
    #[error("init error: {0}")]
    Init(String),
    /// Transport errors.
    #[error("transport error: {0}")]
    Transport(String),
}
