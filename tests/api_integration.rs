//! Integration tests for the HTTP API

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;
use tower::ServiceExt;

use tapvote::core::create_router;

fn test_router(dir: &tempfile::TempDir) -> axum::Router {
    create_router(dir.path().to_string_lossy().to_string())
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_router(&dir);

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["records"], 0);
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_vote_without_age_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_router(&dir);

    let response = app
        .oneshot(post_json("/vote", r#"{"category": "excellent"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let message = String::from_utf8(bytes.to_vec()).unwrap();
    assert_eq!(message, "Choisis une tranche d'âge avant de voter.");
}

#[tokio::test]
async fn test_vote_then_summary_and_matrix() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_router(&dir);

    let response = app
        .clone()
        .oneshot(post_json(
            "/vote",
            r#"{"category": "excellent", "age": "20-24"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let vote = body_json(response).await;
    assert_eq!(vote["rating"], 5);
    assert_eq!(vote["session_count"], 1);
    assert_eq!(vote["persisted"], true);

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/summary").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let summary = body_json(response).await;
    assert_eq!(summary["session"]["excellent"], 1);

    let response = app
        .oneshot(Request::builder().uri("/matrix").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let matrix = body_json(response).await;
    assert_eq!(matrix["matrix"]["excellent"]["20-24"], 1);
    assert_eq!(matrix["matrix"]["insuffisant"]["60+"], 0);
    assert_eq!(matrix["totals"]["excellent"], 1);
    assert_eq!(matrix["recent"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_triple_tap_unlocks_admin_view() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_router(&dir);

    for t in [0, 200, 400] {
        let body = format!(r#"{{"x": 1250.0, "y": 50.0, "timestamp_ms": {}}}"#, t);
        let response = app.clone().oneshot(post_json("/tap", &body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let tap = body_json(response).await;
        if t == 400 {
            assert_eq!(tap["unlocked"], true);
            assert_eq!(tap["state"], "UNLOCKED");
            assert_eq!(tap["view"], "admin");
        } else {
            assert_eq!(tap["unlocked"], false);
        }
    }

    // Back to the vote view
    let response = app
        .oneshot(post_json("/view/vote", "{}"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_export_is_plain_text_report() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_router(&dir);

    app.clone()
        .oneshot(post_json("/vote", r#"{"category": "bien", "age": "60+"}"#))
        .await
        .unwrap();

    let response = app
        .oneshot(Request::builder().uri("/export").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/plain"));

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let report = String::from_utf8(bytes.to_vec()).unwrap();
    assert_eq!(
        report,
        "Résultats (compteur smileys):\nExcellent: 0\nBien: 1\nMoyen: 0\nInsuffisant: 0"
    );
}

#[tokio::test]
async fn test_reset_clears_session_but_not_history() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_router(&dir);

    app.clone()
        .oneshot(post_json("/vote", r#"{"category": "moyen", "age": "-15"}"#))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(post_json("/reset", "{}"))
        .await
        .unwrap();
    let summary = body_json(response).await;
    assert_eq!(summary["session"]["moyen"], 0);

    // Persisted history still feeds the matrix
    let response = app
        .oneshot(Request::builder().uri("/matrix").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let matrix = body_json(response).await;
    assert_eq!(matrix["matrix"]["moyen"]["-15"], 1);
    assert_eq!(matrix["records"], 1);
}

#[tokio::test]
async fn test_unknown_category_rejected_by_deserialization() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_router(&dir);

    let response = app
        .oneshot(post_json("/vote", r#"{"category": "parfait", "age": "-15"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
