//! Health Check API Tests

use std::sync::Arc;

use axum::http::StatusCode;

use chirp::infrastructure::health::HealthProbe;

use crate::common::{assert_status, json_body, StaticProbe, TestApp};

#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new();

    let response = app.get("/health").await;

    assert_status(&response, StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_liveness_probe() {
    let app = TestApp::new();

    let response = app.get("/health/live").await;

    assert_status(&response, StatusCode::OK);
    assert_eq!(json_body(response).await["status"], "alive");
}

#[tokio::test]
async fn test_readiness_reports_every_dependency() {
    let app = TestApp::new();

    let response = app.get("/health/ready").await;

    assert_status(&response, StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "healthy");
    assert_eq!(json["checks"]["redis"]["status"], "healthy");
}

#[tokio::test]
async fn test_readiness_degrades_without_redis() {
    let app = TestApp::with_probes(vec![
        Arc::new(StaticProbe {
            name: "database",
            critical: true,
            up: true,
        }) as Arc<dyn HealthProbe>,
        Arc::new(StaticProbe {
            name: "redis",
            critical: false,
            up: false,
        }) as Arc<dyn HealthProbe>,
    ]);

    let response = app.get("/health/ready").await;

    assert_status(&response, StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["redis"]["status"], "unhealthy");
    assert_eq!(json["checks"]["redis"]["message"], "redis unreachable");
}

#[tokio::test]
async fn test_readiness_fails_without_database() {
    let app = TestApp::with_probes(vec![Arc::new(StaticProbe {
        name: "database",
        critical: true,
        up: false,
    }) as Arc<dyn HealthProbe>]);

    let response = app.get("/health/ready").await;

    assert_status(&response, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json_body(response).await["status"], "unhealthy");
}

#[tokio::test]
async fn test_metrics_endpoint_exposes_request_counters() {
    let app = TestApp::new();
    app.get("/health").await;

    let response = app.get("/metrics").await;

    assert_status(&response, StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("chirp_http_requests_total"));
}
