//! ccd-metrics — the exporter's published metric surface.
//!
//! Holds the immutable per-scrape [`MetricsSnapshot`], the declarative
//! gauge catalogue mapping each snapshot field to a stable metric name
//! and help text, and the Prometheus text exposition renderer.
//!
//! # Architecture
//!
//! ```text
//! MetricsSnapshot        ← assembled once per scrape by ccd-collector
//!   └── GAUGES           ← name / help / field accessor, one entry per gauge
//!         └── render_prometheus() → text/plain for the /metrics endpoint
//! ```

pub mod gauges;
pub mod prometheus;
pub mod snapshot;

pub use gauges::{GAUGES, GaugeSpec};
pub use prometheus::{NAMESPACE, render_prometheus};
pub use snapshot::MetricsSnapshot;
