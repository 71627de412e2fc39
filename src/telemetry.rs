//! Telemetry logic.
//! Support logging and metrics.
use std::time::{Duration, Instant};

use axum::extract::{MatchedPath, Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::IntoResponse;
use metrics::Unit;
use metrics_exporter_prometheus::{
    BuildError, Matcher, PrometheusBuilder, PrometheusHandle,
};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::AppState;

const DEFAULT_LOG_LEVEL: &str = "info";
const UPKEEP_PERIOD: Duration = Duration::from_secs(5);

/// Install the global `tracing` subscriber.
///
/// Filtering follows `RUST_LOG`, `info` otherwise.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Create recorder for Prometheus metrics.
///
/// Must be called inside a tokio runtime: histogram upkeep runs on a
/// background task.
pub fn setup_metrics_recorder() -> Result<PrometheusHandle, BuildError> {
    const EXPONENTIAL_SECONDS: &[f64] = &[
        0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
    ];

    metrics::describe_counter!(
        "http_requests_total",
        Unit::Count,
        "Number of HTTP requests handled."
    );
    metrics::describe_histogram!(
        "http_requests_duration_seconds",
        Unit::Seconds,
        "Latency of HTTP requests."
    );

    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("http_requests_duration_seconds".to_string()),
            EXPONENTIAL_SECONDS,
        )?
        .install_recorder()?;

    tokio::spawn(upkeep(handle.clone(), UPKEEP_PERIOD));

    Ok(handle)
}

/// Drain pending histogram samples every `period`, even when `/metrics` is
/// never scraped.
async fn upkeep(handle: PrometheusHandle, period: Duration) {
    let mut interval = tokio::time::interval(period);

    loop {
        interval.tick().await;
        handle.run_upkeep();
    }
}

/// Track every metrics into one function.
pub async fn track(req: Request, next: Next) -> impl IntoResponse {
    let start = Instant::now();
    let path = if let Some(matched_path) = req.extensions().get::<MatchedPath>() {
        matched_path.as_str().to_owned()
    } else {
        req.uri().path().to_owned()
    };
    let method = req.method().clone();

    let response = next.run(req).await;

    let latency = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();

    let labels = [
        ("method", method.to_string()),
        ("path", path),
        ("status", status),
    ];
    metrics::counter!("http_requests_total", &labels).increment(1);
    metrics::histogram!("http_requests_duration_seconds", &labels).record(latency);

    response
}

/// Prometheus exposition of recorded metrics.
pub async fn render(State(state): State<AppState>) -> impl IntoResponse {
    match state.metrics {
        Some(handle) => (StatusCode::OK, handle.render()),
        None => (StatusCode::NOT_FOUND, String::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_upkeep_keeps_samples() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            metrics::histogram!("upkeep_test_seconds").record(0.5);
        });

        let task = tokio::spawn(upkeep(handle.clone(), UPKEEP_PERIOD));
        for _ in 0..3 {
            tokio::time::advance(UPKEEP_PERIOD).await;
            tokio::task::yield_now().await;
        }

        assert!(!task.is_finished());
        assert!(handle.render().contains("upkeep_test_seconds_count 1"));

        task.abort();
    }
}
