//! Request Logging and Metrics
//!
//! Tracing spans for every HTTP request and the Prometheus request
//! counters, keyed by the matched route so path parameters do not explode
//! label cardinality.

use std::time::{Duration, Instant};

use axum::{
    extract::{MatchedPath, Request},
    http,
    middleware::Next,
    response::Response,
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::{Level, Span};

use crate::infrastructure::metrics;

/// Wrap `router` in the HTTP trace layer: one span per request, one event
/// per response.
pub fn with_request_tracing<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().path().to_string();
                tracing::span!(Level::INFO, "http", %method, %uri)
            })
            .on_response(|res: &http::Response<_>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = %res.status(),
                    elapsed_ms = latency.as_millis() as u64,
                    "response"
                );
            }),
    )
}

/// Record request count and latency for every routed request.
pub async fn track_metrics(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().as_str().to_owned();
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());

    let response = next.run(request).await;

    metrics::record_http_request(
        &method,
        &path,
        response.status().as_u16(),
        start.elapsed().as_secs_f64(),
    );

    response
}
