//! JSON wire-shape tests for citizen-desk-core records.
// crates/citizen-desk-core/tests/wire_format.rs
// ============================================================================
// Module: Wire Format Tests
// Description: Serialized field names of submissions and attachments.
// Purpose: Keep the JSON shape that HTTP clients depend on stable.
// Dependencies: citizen-desk-core, serde_json
// ============================================================================

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "Test-only panic-based assertions are permitted."
)]

mod common;

use citizen_desk_core::Attachment;
use citizen_desk_core::ProjectKind;
use citizen_desk_core::Submission;
use citizen_desk_core::SubmissionStatus;
use citizen_desk_core::SubmissionStore;
use citizen_desk_core::Timestamp;
use serde_json::json;

#[test]
fn submission_flattens_the_type_tag_and_its_fields() {
    let mut store = SubmissionStore::new();
    let mut input = common::request("Permit", "Renovation");
    input.attachments.push(Attachment::durable("plan.pdf", "application/pdf", 9, "memory://plan"));
    let mut submission = store.create(input, Timestamp::from_unix_millis(1_700_000_000_000));
    submission.status = SubmissionStatus::InProgress;

    let value = serde_json::to_value(&submission).unwrap();
    assert_eq!(value["id"], json!("1700000000000"));
    assert_eq!(value["type"], json!("request"));
    assert_eq!(value["reason"], json!("Renovation"));
    assert_eq!(value["status"], json!("in-progress"));
    assert_eq!(value["created_at"], json!(1_700_000_000_000_i64));
    assert!(value.get("details").is_none());
    assert_eq!(
        value["attachments"][0],
        json!({
            "name": "plan.pdf",
            "type": "application/pdf",
            "size": 9,
            "url": "memory://plan",
            "storage": "durable"
        })
    );

    let decoded: Submission = serde_json::from_value(value).unwrap();
    assert_eq!(decoded, submission);
}

#[test]
fn project_kind_is_omitted_when_absent() {
    let mut store = SubmissionStore::new();
    let bare = store.create(common::project("Park", None), Timestamp::from_unix_millis(1));
    let tagged = store
        .create(common::project("Clinic", Some(ProjectKind::Construction)), Timestamp::from_unix_millis(2));

    let bare = serde_json::to_value(&bare).unwrap();
    assert_eq!(bare["type"], json!("project"));
    assert!(bare.get("project_kind").is_none());
    assert!(bare.get("reason").is_none());

    let tagged = serde_json::to_value(&tagged).unwrap();
    assert_eq!(tagged["project_kind"], json!("construction"));
}

#[test]
fn attachment_storage_defaults_to_durable_when_missing() {
    let attachment: Attachment = serde_json::from_value(json!({
        "name": "photo.jpg",
        "type": "image/jpeg",
        "size": 4,
        "url": "https://cdn.example/photo.jpg"
    }))
    .unwrap();
    assert!(attachment.is_durable());
    assert_eq!(attachment.mime_type, "image/jpeg");
}
