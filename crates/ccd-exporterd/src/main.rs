//! ccd-exporterd — Prometheus exporter for Concordium node metrics.
//!
//! Bridges a Concordium node's gRPC API to a Prometheus scrape endpoint:
//! every `GET /metrics` runs one fresh collection pass against the node
//! and renders the resulting snapshot as text exposition gauges. A failed
//! pass answers with an empty 200 so the monitoring system keeps scraping.
//!
//! # Usage
//!
//! ```text
//! ccd-exporterd --url localhost:10000 --hport 9360 --pwd rpcadmin --baker
//! ```
//!
//! Every flag can also be set through the matching `CCDEXPORTER_*`
//! environment variable.

mod server;

use std::net::SocketAddr;

use clap::Parser;
use tracing::info;

use crate::server::{ExporterConfig, build_router};

#[derive(Parser)]
#[command(
    name = "ccd-exporterd",
    version,
    about = "Prometheus exporter for Concordium node metrics"
)]
struct Cli {
    /// Concordium gRPC URL.
    #[arg(long, env = "CCDEXPORTER_URL", default_value = "localhost:10000")]
    url: String,

    /// The port to listen on for HTTP scrape requests.
    #[arg(long, env = "CCDEXPORTER_HPORT", default_value = "9360")]
    hport: u16,

    /// The password to pass to the Concordium node.
    #[arg(long, env = "CCDEXPORTER_PWD", default_value = "rpcadmin")]
    pwd: String,

    /// Whether your node is baking.
    #[arg(long, env = "CCDEXPORTER_BAKER")]
    baker: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,ccd_exporterd=debug".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        url = %cli.url,
        port = cli.hport,
        baker = cli.baker,
        "exporter starting"
    );

    let router = build_router(ExporterConfig {
        node_addr: cli.url,
        credential: cli.pwd,
        report_baker: cli.baker,
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], cli.hport));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "scrape endpoint listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("failed to install CTRL+C handler");
            info!("shutdown signal received");
        })
        .await?;

    info!("exporter stopped");
    Ok(())
}
