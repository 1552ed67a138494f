//! ccd-collector — builds one metrics snapshot per scrape.
//!
//! Runs the fixed five-step call sequence against a [`ccd_node::NodeRpc`],
//! decodes the embedded JSON payloads, and assembles an immutable
//! [`ccd_metrics::MetricsSnapshot`]. The first failing step aborts the
//! build; the publisher turns that into an empty scrape.

pub mod builder;
pub mod error;
pub mod payload;

pub use builder::{SLOTS_PER_DAY, build_snapshot};
pub use error::{CollectError, CollectResult};
