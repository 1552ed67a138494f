//! Scrape endpoint — axum router and the per-scrape collection handler.

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use tracing::{debug, error};

use ccd_collector::{CollectError, build_snapshot};
use ccd_metrics::{MetricsSnapshot, render_prometheus};
use ccd_node::GrpcNodeClient;

/// Read-only configuration shared by all scrape requests.
#[derive(Clone)]
pub struct ExporterConfig {
    /// `host:port` of the node's gRPC endpoint.
    pub node_addr: String,
    /// Shared credential sent as `authentication` metadata.
    pub credential: String,
    /// Whether to issue the baker-roster sub-query for baking nodes.
    pub report_baker: bool,
}

/// Build the exporter router exposing `GET /metrics`.
pub fn build_router(config: ExporterConfig) -> Router {
    Router::new()
        .route("/metrics", get(metrics))
        .with_state(config)
}

/// GET /metrics
///
/// Runs one fresh collection pass per request. A failed pass logs the
/// error and answers 200 with an empty body: collection failures must
/// never surface as HTTP errors, or the monitoring system would flag
/// the exporter itself as unhealthy instead of scraping through to
/// recovery.
pub async fn metrics(State(config): State<ExporterConfig>) -> impl IntoResponse {
    let body = match scrape(&config).await {
        Ok(snapshot) => {
            debug!(best_block = %snapshot.best_block, "scrape succeeded");
            render_prometheus(&snapshot)
        }
        Err(e) => {
            error!(error = %e, "metrics collection failed");
            String::new()
        }
    };

    (
        StatusCode::OK,
        [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
        body,
    )
}

/// One scrape: fresh connection, fresh snapshot.
async fn scrape(config: &ExporterConfig) -> Result<MetricsSnapshot, CollectError> {
    let client = GrpcNodeClient::connect(&config.node_addr, &config.credential).await?;
    build_snapshot(&client, config.report_baker).await
}
