// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::util::ServiceExt;

use super::helpers::{app, wait_until_done, FixtureEngine};

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, value)
}

fn post_scrape(body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/scrape")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_results(id: &str) -> Request<Body> {
    Request::builder()
        .uri(format!("/results/{}", id))
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn scrape_returns_job_id_and_results_become_done() {
    let (app, orchestrator) = app(FixtureEngine::standard());

    let (status, created) = send(
        &app,
        post_scrape(json!({ "sources": ["bayt", "https://www.indeed.com"], "window": "24h" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let job_id = created["jobId"].as_str().unwrap().to_string();

    let job = wait_until_done(orchestrator.registry(), job_id.parse().unwrap()).await;
    assert_eq!(job.total, 2);

    let (status, results) = send(&app, get_results(&job_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(results["status"], "done");
    assert_eq!(results["progress"], 2);
    assert_eq!(results["total"], 2);

    let outcomes = results["outcomes"].as_array().unwrap();
    assert_eq!(outcomes[0]["source"], "bayt");
    let record = &outcomes[0]["data"][0];
    assert_eq!(record["title"], "Staff Nurse");
    assert_eq!(record["company"], "Dallah Hospital");
    assert_eq!(record["postingTime"], "2 hours ago");
    assert_eq!(
        record["link"],
        "https://www.bayt.com/en/saudi-arabia/jobs/staff-nurse-1/"
    );
    assert_eq!(outcomes[1]["source"], "https://www.indeed.com");
    assert_eq!(outcomes[1]["error"], "No scraper found for this website");
    assert!(outcomes[1].get("data").is_none());
}

#[tokio::test]
async fn scrape_accepts_legacy_field_names() {
    let (app, orchestrator) = app(FixtureEngine::standard());

    let (status, created) = send(
        &app,
        post_scrape(json!({ "websites": ["https://www.gulftalent.com"], "time": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let id = created["jobId"].as_str().unwrap().parse().unwrap();
    let job = wait_until_done(orchestrator.registry(), id).await;
    assert_eq!(job.outcomes[0].records().len(), 1);
}

#[tokio::test]
async fn scrape_rejects_empty_sources() {
    let (app, orchestrator) = app(FixtureEngine::standard());

    let (status, body) = send(&app, post_scrape(json!({ "sources": [], "window": "7d" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("sources"));
    assert!(orchestrator.registry().is_empty());
}

#[tokio::test]
async fn scrape_rejects_unknown_window() {
    let (app, orchestrator) = app(FixtureEngine::standard());

    let (status, body) = send(&app, post_scrape(json!({ "sources": ["bayt"], "window": "30d" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
    assert!(orchestrator.registry().is_empty());
}

#[tokio::test]
async fn results_for_unknown_job_is_404() {
    let (app, _) = app(FixtureEngine::standard());

    let (status, body) = send(&app, get_results("8a1e5b8e-3a55-4c43-9c43-6b1f1b0f7d10")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Job not found" }));

    let (status, body) = send(&app, get_results("not-a-job")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Job not found" }));
}

#[tokio::test]
async fn cors_preflight_is_allowed() {
    let (app, _) = app(FixtureEngine::standard());

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/scrape")
                .header(header::ORIGIN, "http://localhost:3000")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}
