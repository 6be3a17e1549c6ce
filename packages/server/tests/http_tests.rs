mod common;

use std::time::Duration;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use common::*;
use extraction::MockFetcher;
use serde_json::{json, Value};
use spotlight_core::kernel::{MockGenerator, TestDependencies};
use spotlight_core::server::build_app;
use tower::ServiceExt;

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn app(ctx: &TestHarness) -> Router {
    build_app(ctx.pipeline())
}

fn acme_harness() -> TestHarness {
    TestHarness::with_deps(
        TestDependencies::new().with_fetcher(MockFetcher::new().with_html(ACME_URL, ACME_HTML)),
    )
}

#[tokio::test]
async fn test_health() {
    let ctx = acme_harness();

    let response = app(&ctx)
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_form_page_lists_twelve_rows() {
    let ctx = acme_harness();

    let response = app(&ctx)
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains(r#"action="/generate""#));
    assert!(html.contains(r#"name="company_12""#));
    assert!(!html.contains(r#"name="company_13""#));
}

#[tokio::test]
async fn test_form_submission_renders_results() {
    let ctx = acme_harness();
    let form = "company_1=Acme+Co&website_1=https%3A%2F%2Fexample.com\
                &company_2=&website_2=\
                &company_3=Down+Inc&website_3=https%3A%2F%2Fdown.test";

    let response = app(&ctx)
        .oneshot(
            Request::post("/generate")
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("Successfully processed Acme Co."));
    assert!(html.contains("Skipped Down Inc: fetch failed"));
    assert!(html.contains("1 succeeded, 1 skipped"));
    assert_eq!(ctx.output_files().len(), 1);
}

#[tokio::test]
async fn test_api_batch_returns_report() {
    let ctx = acme_harness();
    let request = json!({
        "entries": [
            { "name": "Acme Co", "url": ACME_URL },
            { "name": "", "url": "" },
            { "name": "No Url", "url": "" }
        ]
    });

    let response = app(&ctx)
        .oneshot(
            Request::post("/api/batch")
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(request.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    let outcomes = body["outcomes"].as_array().unwrap();
    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0]["company"], "Acme Co");
    assert_eq!(outcomes[0]["status"], "done");
    assert_eq!(outcomes[1]["status"], "skipped");
    assert_eq!(outcomes[1]["stage"], "pending");
    assert_eq!(outcomes[1]["reason"], "invalid entry: website URL is empty");
}

#[tokio::test]
async fn test_api_batch_with_no_entries() {
    let ctx = acme_harness();

    let response = app(&ctx)
        .oneshot(
            Request::post("/api/batch")
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"entries":[]}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body, json!({ "outcomes": [] }));
    assert!(ctx.output_files().is_empty());
}

#[tokio::test]
async fn test_batch_finishes_after_client_disconnects() {
    let fetcher = MockFetcher::new()
        .with_html("https://a.test", homepage("A"))
        .with_html("https://b.test", homepage("B"))
        .with_html("https://c.test", homepage("C"));
    let ctx = TestHarness::with_deps(
        TestDependencies::new()
            .with_fetcher(fetcher)
            .with_generator(MockGenerator::new().with_delay(Duration::from_millis(20))),
    );
    let request = json!({
        "entries": [
            { "name": "A", "url": "https://a.test" },
            { "name": "B", "url": "https://b.test" },
            { "name": "C", "url": "https://c.test" }
        ]
    });

    // Give up on the response long before twelve generation calls finish
    let response = tokio::time::timeout(
        Duration::from_millis(50),
        app(&ctx).oneshot(
            Request::post("/api/batch")
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(request.to_string()))
                .unwrap(),
        ),
    )
    .await;
    assert!(response.is_err(), "batch should still be running");

    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    while ctx.output_files().len() < 3 && tokio::time::Instant::now() < deadline {
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    assert_eq!(ctx.output_files().len(), 3);
    assert_eq!(ctx.deps.generator.call_count(), 12);
}
