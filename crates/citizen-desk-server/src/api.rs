// crates/citizen-desk-server/src/api.rs
// ============================================================================
// Module: Desk HTTP Handlers
// Description: Upload and submission route handlers.
// Purpose: Translate HTTP requests into store, upload, and catalog calls.
// Dependencies: axum, citizen-desk-core, citizen-desk-i18n, citizen-desk-upload
// ============================================================================

//! ## Overview
//! Handlers resolve the request locale from `?locale=`, falling back to the
//! server default. Validation notices and list labels are rendered through
//! the catalog for that locale. Upload failures other than limit violations
//! are reported as `500 {"error": "Upload not configured"}` so clients fall
//! back to transient references.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use axum::Json;
use axum::extract::Multipart;
use axum::extract::Path;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use citizen_desk_core::PendingFile;
use citizen_desk_core::StatusFilter;
use citizen_desk_core::Submission;
use citizen_desk_core::SubmissionDraft;
use citizen_desk_core::SubmissionFilter;
use citizen_desk_core::SubmissionId;
use citizen_desk_core::SubmissionStatus;
use citizen_desk_core::Timestamp;
use citizen_desk_core::TypeFilter;
use citizen_desk_i18n::Locale;
use citizen_desk_i18n::format_date;
use citizen_desk_i18n::t;
use citizen_desk_upload::UploadError;
use citizen_desk_upload::UploadResponse;
use citizen_desk_upload::store_files;
use serde::Deserialize;
use serde::Serialize;

use crate::audit::SubmissionAuditEvent;
use crate::audit::UploadAuditEvent;
use crate::server::AppState;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Multipart field carrying uploaded files.
const UPLOAD_FIELD: &str = "files";

/// Error message telling clients to fall back to transient references.
const UPLOAD_UNAVAILABLE: &str = "Upload not configured";

// ============================================================================
// SECTION: Wire Types
// ============================================================================

/// JSON error body.
#[derive(Debug, Serialize)]
pub(crate) struct ErrorBody {
    /// Human-readable error.
    error: String,
}

/// Builds an error response.
fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: error.into(),
        }),
    )
        .into_response()
}

/// Locale selector accepted by every submission route.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct LocaleQuery {
    /// Requested locale identifier.
    locale: Option<String>,
}

/// Listing query parameters.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListQuery {
    /// Type filter (`all` or a type identifier).
    #[serde(rename = "type")]
    kind: Option<String>,
    /// Status filter (`all` or a status identifier).
    status: Option<String>,
    /// Free-text search.
    q: Option<String>,
    /// Requested locale identifier.
    locale: Option<String>,
}

/// Status update request body.
#[derive(Debug, Deserialize)]
pub(crate) struct StatusUpdate {
    /// New status.
    status: SubmissionStatus,
}

/// Listed submission with localized labels.
#[derive(Debug, Serialize)]
pub(crate) struct SubmissionView {
    /// Stored record.
    #[serde(flatten)]
    submission: Submission,
    /// Localized type label.
    type_label: String,
    /// Localized status label.
    status_label: String,
    /// Localized project category label, for categorized projects.
    #[serde(skip_serializing_if = "Option::is_none")]
    project_kind_label: Option<String>,
    /// Creation date formatted for the locale.
    date_label: String,
}

impl SubmissionView {
    /// Renders `submission` for `locale`.
    fn render(locale: Locale, submission: &Submission) -> Self {
        let type_label = locale.translate(&format!("types.{}", submission.kind()), Vec::new());
        let status_label = locale.translate(&format!("status.{}", submission.status), Vec::new());
        let project_kind_label = submission.details.project_kind().map(|kind| {
            locale.translate(&format!("form.projectTypeOptions.{kind}"), Vec::new())
        });
        Self {
            submission: submission.clone(),
            type_label,
            status_label,
            project_kind_label,
            date_label: format_date(locale, submission.created_at),
        }
    }
}

/// Listing response body.
#[derive(Debug, Serialize)]
pub(crate) struct ListResponse {
    /// Locale used for labels.
    locale: &'static str,
    /// Text direction of that locale.
    direction: &'static str,
    /// Localized "showing N of M" line.
    summary: String,
    /// Matching submissions.
    count: usize,
    /// All submissions in the store.
    total: usize,
    /// Matching submissions, newest first.
    submissions: Vec<SubmissionView>,
}

/// Resolves a requested locale, falling back to the server default.
fn resolve_locale(state: &AppState, requested: Option<&str>) -> Locale {
    requested.and_then(Locale::parse).unwrap_or(state.default_locale)
}

// ============================================================================
// SECTION: Upload
// ============================================================================

/// Handles `POST /api/upload`.
pub(crate) async fn upload(State(state): State<Arc<AppState>>, multipart: Multipart) -> Response {
    let files = match read_files(multipart).await {
        Ok(files) => files,
        Err(err) => {
            state.audit.record_upload(&UploadAuditEvent::failed(0, 0, err.to_string()));
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, UPLOAD_UNAVAILABLE);
        }
    };
    if files.is_empty() {
        return Json(UploadResponse::default()).into_response();
    }
    let count = files.len();
    let total_bytes: u64 = files.iter().map(PendingFile::size).sum();
    let result = match &state.blobs {
        Some(store) => store_files(store.as_ref(), files, state.limits, Timestamp::now()).await,
        None => Err(UploadError::NotConfigured),
    };
    match result {
        Ok(files) => {
            state.audit.record_upload(&UploadAuditEvent::completed(count, total_bytes));
            Json(UploadResponse {
                files,
            })
            .into_response()
        }
        Err(err) => {
            state.audit.record_upload(&UploadAuditEvent::failed(count, total_bytes, err.to_string()));
            match err {
                UploadError::TooManyFiles {
                    ..
                }
                | UploadError::FileTooLarge {
                    ..
                } => error_response(StatusCode::PAYLOAD_TOO_LARGE, err.to_string()),
                _ => error_response(StatusCode::INTERNAL_SERVER_ERROR, UPLOAD_UNAVAILABLE),
            }
        }
    }
}

/// Reads every file part of the `files` field. Other fields are ignored.
async fn read_files(mut multipart: Multipart) -> Result<Vec<PendingFile>, UploadError> {
    let mut files = Vec::new();
    while let Some(field) =
        multipart.next_field().await.map_err(|err| UploadError::Malformed(err.to_string()))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let Some(name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let mime_type = field.content_type().unwrap_or_default().to_string();
        let bytes = field.bytes().await.map_err(|err| UploadError::Malformed(err.to_string()))?;
        files.push(PendingFile::new(name, mime_type, bytes.to_vec()));
    }
    Ok(files)
}

// ============================================================================
// SECTION: Submissions
// ============================================================================

/// Handles `POST /api/submissions`.
pub(crate) async fn create_submission(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LocaleQuery>,
    Json(draft): Json<SubmissionDraft>,
) -> Response {
    let locale = resolve_locale(&state, query.locale.as_deref());
    let input = match draft.validate() {
        Ok(input) => input,
        Err(err) => {
            return error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                locale.translate(err.notice_key(), Vec::new()),
            );
        }
    };
    let submission = state.store.lock().await.create(input, Timestamp::now());
    state.audit.record_submission(&SubmissionAuditEvent::created(
        &submission.id,
        submission.kind(),
        submission.status,
        submission.attachments.len(),
    ));
    (StatusCode::CREATED, Json(submission)).into_response()
}

/// Handles `GET /api/submissions`.
pub(crate) async fn list_submissions(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Response {
    let locale = resolve_locale(&state, query.locale.as_deref());
    let kind = match query.kind.as_deref().unwrap_or("all").parse::<TypeFilter>() {
        Ok(kind) => kind,
        Err(err) => return error_response(StatusCode::BAD_REQUEST, err.to_string()),
    };
    let status = match query.status.as_deref().unwrap_or("all").parse::<StatusFilter>() {
        Ok(status) => status,
        Err(err) => return error_response(StatusCode::BAD_REQUEST, err.to_string()),
    };
    let filter = SubmissionFilter::new(kind, status, query.q.as_deref().unwrap_or_default());
    let store = state.store.lock().await;
    let submissions: Vec<SubmissionView> =
        store.filter(&filter).map(|submission| SubmissionView::render(locale, submission)).collect();
    let total = store.len();
    drop(store);
    let count = submissions.len();
    Json(ListResponse {
        locale: locale.as_str(),
        direction: locale.direction().as_str(),
        summary: t!(locale, "list.showing", count = count, total = total),
        count,
        total,
        submissions,
    })
    .into_response()
}

/// Handles `PUT /api/submissions/{id}/status`. Unknown ids are a no-op.
pub(crate) async fn update_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(update): Json<StatusUpdate>,
) -> StatusCode {
    let id = SubmissionId::new(id);
    let applied = state.store.lock().await.update_status(&id, update.status);
    state.audit.record_submission(&SubmissionAuditEvent::status_updated(&id, update.status, applied));
    StatusCode::NO_CONTENT
}
