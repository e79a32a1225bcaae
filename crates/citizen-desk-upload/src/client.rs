// crates/citizen-desk-upload/src/client.rs
// ============================================================================
// Module: Upload Client
// Description: Multipart HTTP client for the upload endpoint.
// Purpose: Send picked files to the server and read back stored descriptors.
// Dependencies: async-trait, reqwest, url, crate::ingest
// ============================================================================

//! ## Overview
//! [`HttpUploader`] posts every picked file as a `files` part of one
//! multipart request to `<base>/api/upload` and decodes the `{"files": [...]}`
//! response. Error statuses surface the server's `error` message.

// ============================================================================
// SECTION: Imports
// ============================================================================

use async_trait::async_trait;
use citizen_desk_core::PendingFile;
use reqwest::Client;
use reqwest::multipart::Form;
use reqwest::multipart::Part;
use serde::Deserialize;
use url::Url;

use crate::ingest::UploadError;
use crate::ingest::UploadResponse;
use crate::ingest::UploadedFile;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Relative path of the upload endpoint.
pub const UPLOAD_PATH: &str = "api/upload";

/// Multipart field carrying each file.
pub const UPLOAD_FIELD: &str = "files";

/// Content type used when a file's MIME hint is not a valid media type.
const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

// ============================================================================
// SECTION: Uploader Trait
// ============================================================================

/// Sends picked files to durable storage.
#[async_trait]
pub trait Uploader: Send + Sync {
    /// Uploads `files` and returns their stored descriptors in order.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError`] when any part of the upload fails.
    async fn upload(&self, files: &[PendingFile]) -> Result<Vec<UploadedFile>, UploadError>;
}

// ============================================================================
// SECTION: HTTP Uploader
// ============================================================================

/// Error body returned by the upload endpoint.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    /// Human-readable error.
    error: String,
}

/// Upload client speaking multipart HTTP.
#[derive(Debug, Clone)]
pub struct HttpUploader {
    /// Absolute upload endpoint.
    endpoint: Url,
    /// HTTP client.
    client: Client,
}

impl HttpUploader {
    /// Creates an uploader targeting the server at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError`] when the base URL is invalid.
    pub fn new(base_url: &str) -> Result<Self, UploadError> {
        let mut base =
            Url::parse(base_url.trim()).map_err(|err| UploadError::Transport(err.to_string()))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let endpoint = base.join(UPLOAD_PATH).map_err(|err| UploadError::Transport(err.to_string()))?;
        Ok(Self {
            endpoint,
            client: Client::new(),
        })
    }

    /// Returns the upload endpoint URL.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Builds the multipart form for `files`.
    fn form(files: &[PendingFile]) -> Form {
        files.iter().fold(Form::new(), |form, file| {
            let part = Part::bytes(file.bytes.clone()).file_name(file.name.clone());
            let part = match part.mime_str(&file.mime_type) {
                Ok(part) => part,
                Err(_) => Part::bytes(file.bytes.clone())
                    .file_name(file.name.clone())
                    .mime_str(FALLBACK_CONTENT_TYPE)
                    .unwrap_or_else(|_| Part::bytes(file.bytes.clone())),
            };
            form.part(UPLOAD_FIELD, part)
        })
    }
}

#[async_trait]
impl Uploader for HttpUploader {
    async fn upload(&self, files: &[PendingFile]) -> Result<Vec<UploadedFile>, UploadError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .multipart(Self::form(files))
            .send()
            .await
            .map_err(|err| UploadError::Transport(err.to_string()))?;
        let status = response.status();
        let body = response.bytes().await.map_err(|err| UploadError::Transport(err.to_string()))?;
        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .map(|body| body.error)
                .unwrap_or_else(|_| String::from_utf8_lossy(&body).into_owned());
            return Err(UploadError::Rejected {
                status: status.as_u16(),
                message,
            });
        }
        let decoded: UploadResponse =
            serde_json::from_slice(&body).map_err(|err| UploadError::Decode(err.to_string()))?;
        Ok(decoded.files)
    }
}
