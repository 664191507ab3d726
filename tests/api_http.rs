// tests/api_http.rs
//
// HTTP-level tests for the public API Router without opening sockets.
// We exercise the router directly via tower::ServiceExt::oneshot.
//
// Covered:
// - GET /health
// - POST /analyze (success + no-sections error)
// - POST /words

use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::json;
use serde_json::Value as Json;
use tower::ServiceExt as _; // for `oneshot`

use text_corpus_stats::api::{self, AppState};
use text_corpus_stats::Analyzer;

const BODY_LIMIT: usize = 1024 * 1024; // 1MB, safe for tests

/// Build the same Router the binary uses (minus /metrics).
fn test_router() -> Router {
    api::router(AppState::new(Analyzer::default()))
}

async fn post_json(app: Router, uri: &str, payload: Json) -> (StatusCode, Json) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .expect("build POST");
    let resp = app.oneshot(req).await.expect("oneshot");
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .expect("read body");
    let v: Json = serde_json::from_slice(&bytes).expect("parse json");
    (status, v)
}

#[tokio::test]
async fn api_health_returns_200_and_ok_body() {
    let app = test_router();

    let req = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .expect("build GET /health");

    let resp = app.oneshot(req).await.expect("oneshot /health");
    assert_eq!(resp.status(), StatusCode::OK, "health should be 200");

    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .expect("read body")
        .to_vec();
    let body = String::from_utf8(bytes).expect("utf8");
    assert_eq!(body.trim(), "OK", "health body should be 'OK'");
}

#[tokio::test]
async fn api_analyze_returns_file_stats() {
    let (status, v) = post_json(
        test_router(),
        "/analyze",
        json!({ "name": "memo.txt", "text": "This is bad. This is worse.\n\n" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["file_name"], "memo.txt");
    assert_eq!(v["total_words"], 20);
    assert_eq!(v["total_lines"], 1);
    assert_eq!(v["total_sections"], 2);
    assert_eq!(v["avg_line_length"], 10.0);
    assert_eq!(v["sentiment"], "negative");
    assert_eq!(v["top_words"], json!(["bad", "worse"]));
}

#[tokio::test]
async fn api_analyze_defaults_name_to_inline() {
    let (status, v) = post_json(test_router(), "/analyze", json!({ "text": "Hi." })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["file_name"], "inline");
}

#[tokio::test]
async fn api_analyze_without_dots_is_unprocessable() {
    let (status, v) = post_json(
        test_router(),
        "/analyze",
        json!({ "text": "no terminator anywhere" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(v["error"], "no_sections");
    assert!(v["message"]
        .as_str()
        .unwrap_or_default()
        .contains("no sentence-terminating punctuation"));
}

#[tokio::test]
async fn api_words_returns_ranked_listing_with_stop_words() {
    let (status, v) = post_json(
        test_router(),
        "/words",
        json!({ "text": "Python is amazing! Python is powerful.\nI love programming in Python." }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let arr = v.as_array().expect("array");
    assert_eq!(arr[0], json!({ "word": "python", "count": 3 }));
    assert_eq!(arr[1], json!({ "word": "is", "count": 2 }));
    // ties after that are alphabetical
    assert_eq!(arr[2]["word"], "amazing");
    assert_eq!(arr[3]["word"], "i");
}
