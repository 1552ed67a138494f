//! Error types for the collection pipeline.

use thiserror::Error;

/// Result type alias for collection operations.
pub type CollectResult<T> = Result<T, CollectError>;

/// Errors that abort a snapshot build.
///
/// Every variant is fatal to the current scrape. A missing baker
/// identity or a roster entry that does not match is a normal branch,
/// not an error.
#[derive(Debug, Error)]
pub enum CollectError {
    /// Transport or RPC failure from the node.
    #[error(transparent)]
    Node(#[from] ccd_node::NodeError),

    /// Malformed embedded JSON payload.
    #[error("failed to decode {payload} payload: {source}")]
    Decode {
        payload: &'static str,
        source: serde_json::Error,
    },
}
