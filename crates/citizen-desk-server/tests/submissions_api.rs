//! Submission API route tests.
// crates/citizen-desk-server/tests/submissions_api.rs
// ============================================================================
// Module: Submission API Tests
// Description: Create, list, and status routes over HTTP.
// Purpose: Ensure the HTTP surface preserves store and localization semantics.
// Dependencies: citizen-desk-server, reqwest, tokio
// ============================================================================

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "Test-only panic-based assertions are permitted."
)]

mod common;

use citizen_desk_i18n::Locale;
use serde_json::Value;
use serde_json::json;

use crate::common::ServerOptions;
use crate::common::TestServer;
use crate::common::draft;
use crate::common::spawn_server;
use crate::common::spawn_server_with;

/// Creates a submission and returns the stored record.
async fn create(server: &TestServer, body: &Value) -> Value {
    let response =
        server.client.post(server.url("/api/submissions")).json(body).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 201);
    response.json().await.unwrap()
}

/// Lists submissions with a raw query string.
async fn list(server: &TestServer, query: &str) -> Value {
    let response =
        server.client.get(server.url(&format!("/api/submissions{query}"))).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
    response.json().await.unwrap()
}

#[tokio::test]
async fn create_returns_pending_record_with_id() {
    let server = spawn_server().await.unwrap();
    let record = create(&server, &draft("complaint", "Broken street light")).await;

    assert_eq!(record["type"], "complaint");
    assert_eq!(record["status"], "pending");
    assert_eq!(record["subject"], "Broken street light");
    assert!(record["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert_eq!(server.audit.names(), ["submission_created"]);
    assert_eq!(server.audit.events()[0]["submission_type"], "complaint");
}

#[tokio::test]
async fn invalid_draft_gets_localized_notice() {
    let server = spawn_server().await.unwrap();
    let mut body = draft("complaint", "Broken street light");
    body["subject"] = json!("   ");

    let response = server
        .client
        .post(server.url("/api/submissions?locale=ar"))
        .json(&body)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 422);
    let error: Value = response.json().await.unwrap();
    assert_eq!(error["error"], Locale::Ar.translate("form.requiredNote", Vec::new()));
    assert!(server.audit.events().is_empty());
}

#[tokio::test]
async fn request_without_reason_gets_reason_notice() {
    let server = spawn_server().await.unwrap();
    let mut body = draft("request", "Permit");
    body["reason"] = json!("");

    let response =
        server.client.post(server.url("/api/submissions")).json(&body).send().await.unwrap();

    assert_eq!(response.status().as_u16(), 422);
    let error: Value = response.json().await.unwrap();
    assert_eq!(error["error"], Locale::En.translate("form.reason", Vec::new()));
}

#[tokio::test]
async fn list_is_newest_first_with_localized_summary() {
    let server = spawn_server().await.unwrap();
    create(&server, &draft("complaint", "Older")).await;
    create(&server, &draft("suggestion", "Newer")).await;

    let listing = list(&server, "?locale=en").await;

    assert_eq!(listing["total"], 2);
    assert_eq!(listing["count"], 2);
    assert_eq!(listing["locale"], "en");
    assert_eq!(listing["direction"], "ltr");
    assert_eq!(listing["summary"], "Showing 2 of 2 submissions");
    let subjects: Vec<&str> = listing["submissions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|record| record["subject"].as_str().unwrap())
        .collect();
    assert_eq!(subjects, ["Newer", "Older"]);
    assert_eq!(listing["submissions"][0]["type_label"], "Suggestion");
    assert_eq!(listing["submissions"][0]["status_label"], "Pending");
}

#[tokio::test]
async fn list_filters_by_type_status_and_text() {
    let server = spawn_server().await.unwrap();
    create(&server, &draft("complaint", "Water outage")).await;
    let road = create(&server, &draft("request", "Road repair")).await;
    create(&server, &draft("request", "Water meter")).await;

    let requests = list(&server, "?type=request").await;
    assert_eq!(requests["count"], 2);
    assert_eq!(requests["total"], 3);

    let text = list(&server, "?type=request&q=WATER").await;
    assert_eq!(text["count"], 1);
    assert_eq!(text["submissions"][0]["subject"], "Water meter");

    let id = road["id"].as_str().unwrap();
    let response = server
        .client
        .put(server.url(&format!("/api/submissions/{id}/status")))
        .json(&json!({"status": "in-progress"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 204);

    let in_progress = list(&server, "?status=in-progress").await;
    assert_eq!(in_progress["count"], 1);
    assert_eq!(in_progress["submissions"][0]["id"], id);
}

#[tokio::test]
async fn list_defaults_to_server_locale() {
    let server = spawn_server_with(ServerOptions {
        default_locale: Locale::Ckb,
        ..ServerOptions::default()
    })
    .await
    .unwrap();
    create(&server, &draft("project", "Park")).await;

    let listing = list(&server, "?locale=xx").await;

    assert_eq!(listing["locale"], "ckb");
    assert_eq!(listing["direction"], "rtl");
    assert_eq!(listing["submissions"][0]["type_label"], Locale::Ckb.translate("types.project", Vec::new()));
}

#[tokio::test]
async fn unknown_filter_value_is_bad_request() {
    let server = spawn_server().await.unwrap();
    let response =
        server.client.get(server.url("/api/submissions?type=petition")).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn status_update_for_unknown_id_is_a_no_op() {
    let server = spawn_server().await.unwrap();
    create(&server, &draft("complaint", "Noise")).await;

    let response = server
        .client
        .put(server.url("/api/submissions/does-not-exist/status"))
        .json(&json!({"status": "resolved"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 204);
    let listing = list(&server, "").await;
    assert_eq!(listing["submissions"][0]["status"], "pending");
    let events = server.audit.events();
    assert_eq!(events[1]["event"], "submission_status_updated");
    assert_eq!(events[1]["applied"], false);
}

#[tokio::test]
async fn project_listing_carries_category_label() {
    let server = spawn_server().await.unwrap();
    let mut body = draft("project", "Community garden");
    body["project_kind"] = json!("community");
    create(&server, &body).await;

    let listing = list(&server, "?locale=en").await;

    assert_eq!(listing["submissions"][0]["project_kind"], "community");
    assert_eq!(listing["submissions"][0]["project_kind_label"], "Community");
}
