#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

//! In-process route tests, driven through the full router with
//! `tower::ServiceExt::oneshot`. Scenarios mirror the service contract:
//! exact bodies, exact status codes, tally visibility across requests.

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use nametally_gateway::app_state::AppState;
use nametally_gateway::config::GatewayConfig;
use nametally_gateway::router::build_router;
use nametally_gateway::stats::MockStatsProvider;

const INVALID_METHOD_BODY: &str = "Invalid request method.\n";

fn app_with(stats: MockStatsProvider) -> (AppState, Router) {
    let state = AppState::with_stats(GatewayConfig::default(), Arc::new(stats));
    let router = build_router(state.clone());
    (state, router)
}

fn app() -> (AppState, Router) {
    app_with(MockStatsProvider::healthy())
}

async fn send(router: &Router, method: &str, path: &str) -> (StatusCode, Option<String>, String) {
    let req = Request::builder()
        .method(method)
        .uri(path)
        .body(Body::empty())
        .unwrap();
    let resp = router.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

fn counts_as_map(body: &str) -> HashMap<String, u64> {
    let entries: Vec<serde_json::Value> = serde_json::from_str(body).unwrap();
    entries
        .into_iter()
        .map(|e| {
            (
                e["name"].as_str().unwrap().to_string(),
                e["count"].as_u64().unwrap(),
            )
        })
        .collect()
}

#[tokio::test]
async fn greet_returns_greeting_and_tallies_once() {
    let (state, router) = app();

    let (status, _, body) = send(&router, "GET", "/hello/test%20name").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Hello, test name!");

    let snapshot = state.counter().snapshot();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].name, "test name");
    assert_eq!(snapshot[0].count, 1);
}

#[tokio::test]
async fn greet_accumulates_across_requests() {
    let (_, router) = app();

    for _ in 0..3 {
        send(&router, "GET", "/hello/test%20name").await;
    }
    send(&router, "GET", "/hello/test%20name2").await;

    let (status, _, body) = send(&router, "GET", "/counts").await;
    assert_eq!(status, StatusCode::OK);

    let expected: HashMap<String, u64> =
        [("test name".to_string(), 3), ("test name2".to_string(), 1)].into();
    assert_eq!(counts_as_map(&body), expected);
}

#[tokio::test]
async fn greet_accepts_empty_name() {
    let (state, router) = app();

    let (status, _, body) = send(&router, "GET", "/hello/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Hello, !");
    assert_eq!(state.counter().snapshot()[0].name, "");
}

#[tokio::test]
async fn greet_rejects_non_get_without_tallying() {
    let (state, router) = app();

    for method in ["POST", "PUT", "DELETE"] {
        let (status, _, body) = send(&router, method, "/hello/someone").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body, INVALID_METHOD_BODY);
    }
    assert!(state.counter().snapshot().is_empty());
}

#[tokio::test]
async fn counts_get_returns_indented_json_array() {
    let (state, router) = app();
    for _ in 0..6 {
        state.counter().increment("John Smith");
    }
    for _ in 0..25 {
        state.counter().increment("Jane Doe");
    }

    let (status, content_type, body) = send(&router, "GET", "/counts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));

    let expected: HashMap<String, u64> =
        [("John Smith".to_string(), 6), ("Jane Doe".to_string(), 25)].into();
    assert_eq!(counts_as_map(&body), expected);
    // Indented output, not a single-line dump.
    assert!(body.contains('\n'));
}

#[tokio::test]
async fn counts_delete_clears_the_tally() {
    let (state, router) = app();
    for _ in 0..6 {
        state.counter().increment("John Smith");
    }
    state.counter().increment("Jane Doe");

    let (status, _, body) = send(&router, "DELETE", "/counts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Count data has been removed.\n");

    let (status, _, body) = send(&router, "GET", "/counts").await;
    assert_eq!(status, StatusCode::OK);
    assert!(counts_as_map(&body).is_empty());
}

#[tokio::test]
async fn counts_rejects_other_methods() {
    let (_, router) = app();
    for method in ["POST", "PUT"] {
        let (status, _, body) = send(&router, method, "/counts").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body, INVALID_METHOD_BODY);
    }
}

#[tokio::test]
async fn health_reports_all_four_sources() {
    let (_, router) = app();

    let (status, content_type, body) = send(&router, "GET", "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));

    let report: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(report["virtual_memory_info"]["total"].as_u64().unwrap() > 0);
    assert!(report["swap_memory_info"].is_object());
    assert_eq!(report["cpu_info"].as_array().unwrap().len(), 2);
    assert!(report["load"]["load1"].as_f64().is_some());
}

#[tokio::test]
async fn health_stays_200_when_every_source_fails() {
    let (_, router) = app_with(MockStatsProvider::all_failing());

    let (status, _, body) = send(&router, "GET", "/health").await;
    assert_eq!(status, StatusCode::OK);

    let report: serde_json::Value = serde_json::from_str(&body).unwrap();
    for key in ["virtual_memory_info", "swap_memory_info", "cpu_info", "load"] {
        assert!(report[key].is_null(), "{key} should be null");
    }
}

#[tokio::test]
async fn health_rejects_non_get() {
    let (_, router) = app();
    for method in ["POST", "PUT", "DELETE"] {
        let (status, _, body) = send(&router, method, "/health").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body, INVALID_METHOD_BODY);
    }
}

#[tokio::test]
async fn unmatched_paths_are_404() {
    let (_, router) = app();
    let (status, _, _) = send(&router, "GET", "/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // No trailing slash: outside the /hello/ prefix space.
    let (status, _, _) = send(&router, "GET", "/hello").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
