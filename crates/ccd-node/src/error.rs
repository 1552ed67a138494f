//! Error types for node RPC calls.

use thiserror::Error;

/// Result type alias for node RPC operations.
pub type NodeResult<T> = Result<T, NodeError>;

/// Errors from the transport layer or the node itself.
#[derive(Debug, Error)]
pub enum NodeError {
    #[error("failed to connect to node: {0}")]
    Connect(#[from] tonic::transport::Error),

    #[error("{call} failed: {status}")]
    Rpc {
        call: &'static str,
        status: tonic::Status,
    },

    #[error("credential is not valid ASCII metadata")]
    Credential,
}
