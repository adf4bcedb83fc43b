//! Notes API Integration Tests
//!
//! Each test starts the full application (router plus middleware stack) on
//! an ephemeral local port and talks to it over real HTTP with `reqwest`.
//!
//! ## Running
//!
//! ```bash
//! cargo test -p notes-server --test notes_api
//! ```

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use notes_server::{AppState, ServerConfig, build_app};
use notes_store::{NoteService, Store};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;

// ============================================================================
// API Types (matching server responses)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct NoteResponse {
    id: String,
    title: String,
    content: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorDetails,
}

#[derive(Debug, Deserialize)]
struct ErrorDetails {
    code: String,
    message: String,
}

// ============================================================================
// Helpers
// ============================================================================

/// Start a fresh server and return its base URL.
async fn spawn_server(config: ServerConfig) -> String {
    let state = AppState::new(NoteService::new(Store::new()), config);
    let app = build_app(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

async fn create_note(client: &Client, base: &str, title: &str, content: &str) -> NoteResponse {
    let response = client
        .post(format!("{base}/notes"))
        .json(&json!({ "title": title, "content": content }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    response.json().await.unwrap()
}

async fn list_notes(client: &Client, base: &str, query: Option<&str>) -> Vec<NoteResponse> {
    let mut request = client.get(format!("{base}/notes"));
    if let Some(q) = query {
        request = request.query(&[("q", q)]);
    }
    let response = request.send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    response.json().await.unwrap()
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn health_check_reports_healthy() {
    let base = spawn_server(ServerConfig::default()).await;

    let response = reqwest::get(format!("{base}/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Healthy" }));
}

#[tokio::test]
async fn full_note_lifecycle() {
    let base = spawn_server(ServerConfig::default()).await;
    let client = Client::new();

    // Create
    let created = create_note(&client, &base, "  Shopping ", "milk\neggs   \n").await;
    assert_eq!(created.title, "Shopping");
    assert_eq!(created.content, "milk\neggs");
    assert_eq!(created.created_at, created.updated_at);

    // Read
    let fetched: NoteResponse = client
        .get(format!("{base}/notes/{}", created.id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, created);

    // Update content only
    let response = client
        .patch(format!("{base}/notes/{}", created.id))
        .json(&json!({ "content": "bread" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated: NoteResponse = response.json().await.unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Shopping");
    assert_eq!(updated.content, "bread");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);

    // Delete
    let response = client
        .delete(format!("{base}/notes/{}", created.id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(response.bytes().await.unwrap().is_empty());

    // Gone
    let response = client
        .get(format!("{base}/notes/{}", created.id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error: ErrorResponse = response.json().await.unwrap();
    assert_eq!(error.error.code, "NOT_FOUND");
    assert!(error.error.message.contains(&created.id));

    // Second delete is also a 404
    let response = client
        .delete(format!("{base}/notes/{}", created.id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn validation_failures_return_422() {
    let base = spawn_server(ServerConfig::default()).await;
    let client = Client::new();

    let cases = [
        json!({ "title": "   " }),
        json!({ "title": "" }),
        json!({ "content": "no title" }),
        json!({ "title": 42 }),
        json!({ "title": "x".repeat(201) }),
        json!({ "title": "ok", "content": "y".repeat(10_001) }),
    ];

    for body in cases {
        let response = client
            .post(format!("{base}/notes"))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(
            response.status(),
            StatusCode::UNPROCESSABLE_ENTITY,
            "body: {body}"
        );
        let error: ErrorResponse = response.json().await.unwrap();
        assert_eq!(error.error.code, "VALIDATION_ERROR");
    }

    assert!(list_notes(&client, &base, None).await.is_empty());
}

#[tokio::test]
async fn boundary_lengths_are_accepted() {
    let base = spawn_server(ServerConfig::default()).await;
    let client = Client::new();

    let title = "t".repeat(200);
    let content = "c".repeat(10_000);
    let created = create_note(&client, &base, &title, &content).await;

    assert_eq!(created.title, title);
    assert_eq!(created.content, content);
}

#[tokio::test]
async fn content_limit_includes_trailing_whitespace() {
    let base = spawn_server(ServerConfig::default()).await;
    let client = Client::new();

    let response = client
        .post(format!("{base}/notes"))
        .json(&json!({ "title": "t", "content": format!("{}\n", "y".repeat(10_000)) }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    assert!(list_notes(&client, &base, None).await.is_empty());
}

#[tokio::test]
async fn patch_blank_title_is_rejected_without_change() {
    let base = spawn_server(ServerConfig::default()).await;
    let client = Client::new();
    let note = create_note(&client, &base, "Stable", "body").await;

    let response = client
        .patch(format!("{base}/notes/{}", note.id))
        .json(&json!({ "title": "  ", "content": "changed" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let fetched: NoteResponse = client
        .get(format!("{base}/notes/{}", note.id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, note);
}

#[tokio::test]
async fn patch_null_fields_leave_note_unchanged() {
    let base = spawn_server(ServerConfig::default()).await;
    let client = Client::new();
    let note = create_note(&client, &base, "Title", "content").await;

    let updated: NoteResponse = client
        .patch(format!("{base}/notes/{}", note.id))
        .json(&json!({ "title": null, "content": null }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(updated.title, "Title");
    assert_eq!(updated.content, "content");
    assert!(updated.updated_at > note.updated_at);
}

#[tokio::test]
async fn unknown_ids_return_404_and_bad_ids_422() {
    let base = spawn_server(ServerConfig::default()).await;
    let client = Client::new();
    let missing = uuid::Uuid::new_v4();

    let response = client
        .patch(format!("{base}/notes/{missing}"))
        .json(&json!({ "title": "x" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = client
        .delete(format!("{base}/notes/{missing}"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = client
        .get(format!("{base}/notes/12345"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn search_matches_titles_case_insensitively() {
    let base = spawn_server(ServerConfig::default()).await;
    let client = Client::new();

    create_note(&client, &base, "Notebook", "a").await;
    create_note(&client, &base, "Grocery list", "b").await;
    create_note(&client, &base, "NOTES", "c").await;

    let titles: HashSet<String> = list_notes(&client, &base, Some("not"))
        .await
        .into_iter()
        .map(|n| n.title)
        .collect();
    assert_eq!(
        titles,
        HashSet::from(["Notebook".to_string(), "NOTES".to_string()])
    );

    assert_eq!(list_notes(&client, &base, Some("   ")).await.len(), 3);
    assert_eq!(list_notes(&client, &base, None).await.len(), 3);
}

#[tokio::test]
async fn concurrent_creates_are_all_stored() {
    let base = spawn_server(ServerConfig::default()).await;
    let client = Client::new();
    let n = 50;

    let mut handles = Vec::with_capacity(n);
    for i in 0..n {
        let client = client.clone();
        let base = base.clone();
        handles.push(tokio::spawn(async move {
            create_note(&client, &base, &format!("note {i}"), &format!("body {i}")).await
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap().id);
    }
    assert_eq!(ids.len(), n);

    let listed = list_notes(&client, &base, None).await;
    assert_eq!(listed.len(), n);
    let payloads: HashSet<(String, String)> = listed
        .into_iter()
        .map(|note| {
            assert!(ids.contains(&note.id));
            (note.title, note.content)
        })
        .collect();
    let expected: HashSet<(String, String)> = (0..n)
        .map(|i| (format!("note {i}"), format!("body {i}")))
        .collect();
    assert_eq!(payloads, expected);
}

#[tokio::test]
async fn responses_carry_request_id() {
    let base = spawn_server(ServerConfig::default()).await;
    let client = Client::new();

    let response = client.get(format!("{base}/notes")).send().await.unwrap();
    let generated = response.headers().get("x-request-id").unwrap();
    assert!(uuid::Uuid::parse_str(generated.to_str().unwrap()).is_ok());

    let response = client
        .get(format!("{base}/notes"))
        .header("x-request-id", "caller-chosen-id")
        .send()
        .await
        .unwrap();
    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "caller-chosen-id"
    );
}

#[tokio::test]
async fn cors_allows_any_origin_by_default() {
    let base = spawn_server(ServerConfig::default()).await;
    let client = Client::new();

    let response = client
        .get(format!("{base}/notes"))
        .header("origin", "http://localhost:5173")
        .send()
        .await
        .unwrap();

    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn cors_echoes_configured_origin_with_credentials() {
    let config = ServerConfig::from_lookup(|name| match name {
        "CORS_ALLOWED_ORIGINS" => Some("http://localhost:3000".to_string()),
        _ => None,
    })
    .unwrap();
    let base = spawn_server(config).await;
    let client = Client::new();

    let response = client
        .get(format!("{base}/notes"))
        .header("origin", "http://localhost:3000")
        .send()
        .await
        .unwrap();
    let headers = response.headers();
    assert_eq!(
        headers.get("access-control-allow-origin").unwrap(),
        "http://localhost:3000"
    );
    assert_eq!(
        headers.get("access-control-allow-credentials").unwrap(),
        "true"
    );

    let response = client
        .get(format!("{base}/notes"))
        .header("origin", "http://evil.example")
        .send()
        .await
        .unwrap();
    assert!(response.headers().get("access-control-allow-origin").is_none());
}
