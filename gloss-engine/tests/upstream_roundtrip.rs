//! Integration test: `UpstreamExplainer` against an in-process stub service.
//!
//! Spins up a local axum server playing the role of the external
//! explanation capability and drives the real HTTP client against it.

use axum::{http::StatusCode, routing::post, Json, Router};
use gloss_engine::{ExplainError, Explainer, UpstreamExplainer};

/// Bind the stub service on an ephemeral port and return the endpoint URL.
async fn serve_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("ephemeral bind should succeed");
    let addr = listener.local_addr().expect("listener has a local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    format!("http://{addr}/explain")
}

#[tokio::test]
async fn explain_forwards_code_and_returns_reply_text() {
    let router = Router::new().route(
        "/explain",
        post(|Json(body): Json<serde_json::Value>| async move {
            let code = body["code"].as_str().unwrap_or_default();
            Json(serde_json::json!({ "result": format!("explained: {code}") }))
        }),
    );
    let endpoint = serve_stub(router).await;

    let client = UpstreamExplainer::new(&endpoint).expect("endpoint should parse");
    let text = client
        .explain("print('hi')")
        .await
        .expect("stub upstream should succeed");
    assert_eq!(text, "explained: print('hi')");
}

#[tokio::test]
async fn explain_maps_non_success_status_to_typed_error() {
    let router = Router::new().route(
        "/explain",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "engine down") }),
    );
    let endpoint = serve_stub(router).await;

    let client = UpstreamExplainer::new(&endpoint).expect("endpoint should parse");
    match client.explain("x").await {
        Err(ExplainError::UpstreamStatus { status, body }) => {
            assert_eq!(status, 500);
            assert!(body.contains("engine down"));
        }
        other => panic!("expected UpstreamStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn explain_rejects_reply_without_result_field() {
    let router = Router::new().route(
        "/explain",
        post(|| async { Json(serde_json::json!({ "ok": true })) }),
    );
    let endpoint = serve_stub(router).await;

    let client = UpstreamExplainer::new(&endpoint).expect("endpoint should parse");
    match client.explain("x").await {
        Err(ExplainError::MalformedReply(_)) => {}
        other => panic!("expected MalformedReply, got {other:?}"),
    }
}

#[tokio::test]
async fn explain_surfaces_connect_failure() {
    // Port 1 is unassigned on loopback; the connect must be refused.
    let client =
        UpstreamExplainer::new("http://127.0.0.1:1/explain").expect("endpoint should parse");
    match client.explain("x").await {
        Err(ExplainError::Connect(_)) => {}
        other => panic!("expected Connect error, got {other:?}"),
    }
}
