//! Integration tests for the admin content API.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The admin server running (cargo run -p tidepool-admin)
//! - An authenticated session cookie, or the server started with an
//!   allow-all gate for testing
//!
//! Run with: cargo test -p tidepool-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use uuid::Uuid;

use tidepool_integration_tests::admin_base_url;

fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

/// Test helper: create a logo and return its JSON representation.
async fn create_test_logo(client: &Client) -> Value {
    let base_url = admin_base_url();
    let resp = client
        .post(format!("{base_url}/api/logos"))
        .json(&json!({
            "name": format!("test-logo-{}", Uuid::new_v4()),
            "image_url": "https://cdn.example.com/logo.svg",
            "active": false,
        }))
        .send()
        .await
        .expect("Failed to create test logo");

    assert_eq!(resp.status(), StatusCode::CREATED);
    resp.json().await.expect("Failed to parse logo")
}

async fn delete_logo(client: &Client, id: i64) {
    let base_url = admin_base_url();
    let _ = client
        .delete(format!("{base_url}/api/logos/{id}"))
        .send()
        .await;
}

// ============================================================================
// Logo CRUD
// ============================================================================

#[tokio::test]
#[ignore = "Requires running admin server and database"]
async fn test_logo_create_assigns_unique_ids() {
    let client = client();

    let first = create_test_logo(&client).await;
    let second = create_test_logo(&client).await;

    let first_id = first["id"].as_i64().expect("id");
    let second_id = second["id"].as_i64().expect("id");
    assert_ne!(first_id, second_id);

    delete_logo(&client, first_id).await;
    delete_logo(&client, second_id).await;
}

#[tokio::test]
#[ignore = "Requires running admin server and database"]
async fn test_logo_delete_then_get_is_404() {
    let client = client();
    let base_url = admin_base_url();

    let logo = create_test_logo(&client).await;
    let id = logo["id"].as_i64().expect("id");

    let resp = client
        .delete(format!("{base_url}/api/logos/{id}"))
        .send()
        .await
        .expect("Failed to delete logo");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = client
        .get(format!("{base_url}/api/logos/{id}"))
        .send()
        .await
        .expect("Failed to get logo");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running admin server and database"]
async fn test_logo_update_missing_is_404_and_store_unchanged() {
    let client = client();
    let base_url = admin_base_url();

    let before: Value = client
        .get(format!("{base_url}/api/logos"))
        .send()
        .await
        .expect("Failed to list logos")
        .json()
        .await
        .expect("Failed to parse logo list");

    let resp = client
        .put(format!("{base_url}/api/logos/999999999"))
        .json(&json!({
            "name": "ghost",
            "image_url": "https://cdn.example.com/ghost.svg",
        }))
        .send()
        .await
        .expect("Failed to send update");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // A missing-id update must not create or alter any row.
    let after: Value = client
        .get(format!("{base_url}/api/logos"))
        .send()
        .await
        .expect("Failed to list logos")
        .json()
        .await
        .expect("Failed to parse logo list");
    assert_eq!(before, after);
}

#[tokio::test]
#[ignore = "Requires running admin server and database"]
async fn test_logo_rejects_bad_image_url() {
    let client = client();
    let base_url = admin_base_url();

    let resp = client
        .post(format!("{base_url}/api/logos"))
        .json(&json!({
            "name": "bad-url",
            "image_url": "ftp://example.com/logo.svg",
        }))
        .send()
        .await
        .expect("Failed to send create");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// ============================================================================
// Case study CRUD
// ============================================================================

#[tokio::test]
#[ignore = "Requires running admin server and database"]
async fn test_case_study_duplicate_slug_is_409() {
    let client = client();
    let base_url = admin_base_url();

    let slug = format!("test-{}", Uuid::new_v4().simple());
    let body = json!({
        "slug": slug,
        "title": "Duplicate slug test",
        "summary": "summary",
        "body": "body",
        "published": false,
    });

    let resp = client
        .post(format!("{base_url}/api/case-studies"))
        .json(&body)
        .send()
        .await
        .expect("Failed to create case study");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = resp.json().await.expect("Failed to parse case study");

    let resp = client
        .post(format!("{base_url}/api/case-studies"))
        .json(&body)
        .send()
        .await
        .expect("Failed to create duplicate");
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let id = created["id"].as_i64().expect("id");
    let _ = client
        .delete(format!("{base_url}/api/case-studies/{id}"))
        .send()
        .await;
}

// ============================================================================
// Fact review queue
// ============================================================================

#[tokio::test]
#[ignore = "Requires running admin server and database"]
async fn test_fact_approve_stub_always_reports_success() {
    let client = client();
    let base_url = admin_base_url();

    // Frontend contract: approval reports success without touching data,
    // even for an id that does not exist.
    let resp = client
        .post(format!("{base_url}/api/ai/facts/approve"))
        .json(&json!({ "fact_id": 999999999 }))
        .send()
        .await
        .expect("Failed to call approve");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse body");
    assert_eq!(body["approved"], json!(true));
    assert_eq!(body["message"], json!("Fact approved successfully"));
}

#[tokio::test]
#[ignore = "Requires running admin server and database"]
async fn test_fact_approve_stub_ignores_body_shape() {
    let client = client();
    let base_url = admin_base_url();

    // The body is never parsed: no content type, not JSON, still success.
    for body in ["", "not json at all", r#"{"fact_id": "abc"}"#] {
        let resp = client
            .post(format!("{base_url}/api/ai/facts/approve"))
            .body(body.to_string())
            .send()
            .await
            .expect("Failed to call approve");

        assert_eq!(resp.status(), StatusCode::OK, "body: {body:?}");
        let parsed: Value = resp.json().await.expect("Failed to parse body");
        assert_eq!(parsed["approved"], json!(true));
        assert_eq!(parsed["message"], json!("Fact approved successfully"));
    }
}

#[tokio::test]
#[ignore = "Requires running admin server and database"]
async fn test_fact_list_rejects_unknown_status_filter() {
    let client = client();
    let base_url = admin_base_url();

    let resp = client
        .get(format!("{base_url}/api/facts?status=bogus"))
        .send()
        .await
        .expect("Failed to list facts");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_admin_health_reports_ok() {
    let client = client();
    let base_url = admin_base_url();

    let resp = client
        .get(format!("{base_url}/health"))
        .send()
        .await
        .expect("Failed to get health");
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("Failed to parse health");
    assert_eq!(body["ok"], json!(true));
    assert_eq!(body["service"], json!("tidepool-admin"));
    assert!(body["version"].is_string());
    assert!(body["timestamp"].is_string());
}
