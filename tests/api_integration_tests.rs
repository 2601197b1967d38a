//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint, with a scripted
//! probe standing in for the visa centre sites.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::Utc;
use schengen_watch::{
    api::create_router, AppState, CheckOutcome, CheckStatus, Checker, CheckerOptions, Probe,
    ProbeTarget,
};
use serde_json::Value;
use tower::ServiceExt;

// == Helper Functions ==

/// Reports `full` for France and `available` elsewhere, counting calls.
#[derive(Default)]
struct StubProbe {
    calls: AtomicUsize,
}

#[async_trait]
impl Probe for StubProbe {
    async fn probe(&self, target: &ProbeTarget) -> CheckOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let status = if target.country == "fr" {
            CheckStatus::Full
        } else {
            CheckStatus::Available
        };
        CheckOutcome::new(&target.country, status, "stub", Utc::now())
            .with_subject(&target.city, &target.visa_type)
            .with_url(&target.url)
    }
}

fn create_test_app() -> (Router, Arc<StubProbe>) {
    create_rate_limited_app(Duration::ZERO)
}

fn create_rate_limited_app(rate_limit: Duration) -> (Router, Arc<StubProbe>) {
    let probe = Arc::new(StubProbe::default());
    let options = CheckerOptions {
        rate_limit,
        ..CheckerOptions::default()
    };
    let checker = Checker::new(options, probe.clone());
    (create_router(AppState::new(checker)), probe)
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

// == Check Endpoint Tests ==

#[tokio::test]
async fn test_check_endpoint_success() {
    let (app, _probe) = create_test_app();

    let (status, json) = send(&app, "GET", "/check/fr", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["country"], "fr");
    assert_eq!(json["status"], "full");
    assert_eq!(json["city"], "ankara");
    assert_eq!(json["visa_type"], "tourist");
}

#[tokio::test]
async fn test_check_endpoint_with_query() {
    let (app, _probe) = create_test_app();

    let (status, json) =
        send(&app, "GET", "/check/de?city=istanbul&visa_type=business", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "available");
    assert_eq!(json["city"], "istanbul");
    assert_eq!(json["visa_type"], "business");
}

#[tokio::test]
async fn test_check_endpoint_non_schengen() {
    let (app, probe) = create_test_app();

    let (status, json) = send(&app, "GET", "/check/us", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("not a Schengen"));
    assert_eq!(probe.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_check_unsupported_schengen_country() {
    let (app, probe) = create_test_app();

    let (status, json) = send(&app, "GET", "/check/pt", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "unknown");
    assert_eq!(probe.calls.load(Ordering::SeqCst), 0);

    let (_, stats) = send(&app, "GET", "/stats", None).await;
    assert_eq!(stats["total_checks"], 0);
}

#[tokio::test]
async fn test_repeat_check_served_from_cache() {
    let (app, probe) = create_test_app();

    send(&app, "GET", "/check/nl", None).await;
    send(&app, "GET", "/check/nl", None).await;

    assert_eq!(probe.calls.load(Ordering::SeqCst), 1);

    let (_, cache) = send(&app, "GET", "/cache", None).await;
    assert_eq!(cache["size"], 1);
    assert_eq!(cache["hits"], 1);
    assert_eq!(cache["misses"], 1);
    assert_eq!(cache["hit_rate_label"], "50.00%");

    let (_, stats) = send(&app, "GET", "/stats", None).await;
    assert_eq!(stats["total_checks"], 2);
    assert_eq!(stats["cache_hits"], 1);
    assert_eq!(stats["cache_misses"], 1);
}

// == Batch Endpoint Tests ==

#[tokio::test]
async fn test_batch_check_mixed_countries() {
    let (app, _probe) = create_test_app();

    let (status, json) = send(
        &app,
        "POST",
        "/check",
        Some(r#"{"countries":["fr","us","de"],"city":"izmir"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 3);
    let results = json["results"].as_array().unwrap();
    assert_eq!(results[0]["status"], "full");
    assert_eq!(results[1]["status"], "error");
    assert_eq!(results[2]["status"], "available");
}

#[tokio::test]
async fn test_batch_check_empty_is_rejected() {
    let (app, _probe) = create_test_app();

    let (status, json) = send(&app, "POST", "/check", Some(r#"{"countries":[]}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json.get("error").is_some());
}

#[tokio::test]
async fn test_stats_answer_while_batch_runs() {
    let (app, probe) = create_rate_limited_app(Duration::from_millis(300));

    let batch = {
        let app = app.clone();
        tokio::spawn(async move {
            send(
                &app,
                "POST",
                "/check",
                Some(r#"{"countries":["fr","de","nl","es"]}"#),
            )
            .await
        })
    };

    tokio::time::sleep(Duration::from_millis(50)).await;
    let (status, stats) = tokio::time::timeout(
        Duration::from_millis(200),
        send(&app, "GET", "/stats", None),
    )
    .await
    .expect("stats should not wait for the whole batch");
    assert_eq!(status, StatusCode::OK);
    assert!(stats["total_checks"].as_u64().unwrap() < 4);

    let (status, json) = batch.await.unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 4);
    assert_eq!(probe.calls.load(Ordering::SeqCst), 4);
}

// == Statistics Endpoint Tests ==

#[tokio::test]
async fn test_country_stats_endpoint() {
    let (app, _probe) = create_test_app();

    send(&app, "GET", "/check/fr", None).await;

    let (status, json) = send(&app, "GET", "/stats/fr", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["country_name"], "France");
    assert_eq!(json["check_count"], 1);
    assert_eq!(json["success_rate"], 100.0);
}

#[tokio::test]
async fn test_most_checked_ranking() {
    let (app, _probe) = create_test_app();

    send(&app, "GET", "/check/de", None).await;
    send(&app, "GET", "/check/fr", None).await;
    send(&app, "GET", "/check/fr?city=istanbul", None).await;

    let (_, json) = send(&app, "GET", "/stats", None).await;
    let ranked = json["most_checked_countries"].as_array().unwrap();
    assert_eq!(ranked[0]["country"], "fr");
    assert_eq!(ranked[0]["check_count"], 2);
    assert_eq!(ranked[1]["country"], "de");
    assert_eq!(json["success_rate"], 100.0);
}

#[tokio::test]
async fn test_reset_stats_endpoint() {
    let (app, _probe) = create_test_app();

    send(&app, "GET", "/check/it", None).await;
    let (status, _) = send(&app, "DELETE", "/stats", None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, json) = send(&app, "GET", "/stats", None).await;
    assert_eq!(json["total_checks"], 0);
    assert_eq!(json["most_checked_countries"].as_array().unwrap().len(), 0);

    let (status, _) = send(&app, "GET", "/stats/it", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// == Cache Endpoint Tests ==

#[tokio::test]
async fn test_clear_cache_forces_new_probe() {
    let (app, probe) = create_test_app();

    send(&app, "GET", "/check/es", None).await;
    let (status, _) = send(&app, "DELETE", "/cache", None).await;
    assert_eq!(status, StatusCode::OK);
    send(&app, "GET", "/check/es", None).await;

    assert_eq!(probe.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_disable_cache() {
    let (app, probe) = create_test_app();

    let (status, json) = send(&app, "PUT", "/cache", Some(r#"{"enabled":false}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["enabled"], false);

    send(&app, "GET", "/check/at", None).await;
    send(&app, "GET", "/check/at", None).await;

    assert_eq!(probe.calls.load(Ordering::SeqCst), 2);
    let (_, cache) = send(&app, "GET", "/cache", None).await;
    assert_eq!(cache["size"], 0);
}

#[tokio::test]
async fn test_cache_config_rejects_zero_ttl() {
    let (app, _probe) = create_test_app();

    let (status, _) = send(&app, "PUT", "/cache", Some(r#"{"ttl":0}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// == Catalog Endpoint Tests ==

#[tokio::test]
async fn test_countries_endpoint() {
    let (app, _probe) = create_test_app();

    let (status, json) = send(&app, "GET", "/countries", None).await;

    assert_eq!(status, StatusCode::OK);
    let countries = json.as_array().unwrap();
    assert!(countries.iter().any(|c| c["id"] == "fr"));
}

#[tokio::test]
async fn test_country_info_endpoint() {
    let (app, _probe) = create_test_app();

    let (status, json) = send(&app, "GET", "/countries/de", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["has_full_info"], true);

    let (status, _) = send(&app, "GET", "/countries/xx", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_centres_endpoint_by_city() {
    let (app, _probe) = create_test_app();

    let (status, json) = send(&app, "GET", "/centres?city=izmir", None).await;

    assert_eq!(status, StatusCode::OK);
    let centres = json.as_array().unwrap();
    let countries: Vec<&str> = centres
        .iter()
        .map(|c| c["country"].as_str().unwrap())
        .collect();
    assert_eq!(countries, vec!["fr", "de", "it"]);
}

// == Health Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _probe) = create_test_app();

    let (status, json) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json.get("timestamp").is_some());
}
