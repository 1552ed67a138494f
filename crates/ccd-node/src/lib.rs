//! ccd-node — gRPC surface of the Concordium node.
//!
//! Provides the protobuf stubs for the subset of the node's P2P API the
//! exporter consumes, and the [`NodeRpc`] trait that decouples the
//! collection pipeline from the transport.
//!
//! # Architecture
//!
//! ```text
//! NodeRpc (trait)
//!   ├── consensus_status()  → GetConsensusStatus  (JSON payload)
//!   ├── peer_total_sent()   → PeerTotalSent       (byte counter)
//!   ├── peer_total_received() → PeerTotalReceived (byte counter)
//!   ├── node_info()         → NodeInfo            (role flags, baker id)
//!   └── birk_parameters()   → GetBirkParameters   (JSON payload)
//!
//! GrpcNodeClient
//!   └── tonic-backed implementation, attaches the `authentication`
//!       credential to every request
//! ```

pub mod client;
pub mod error;

/// Generated protobuf types and gRPC service stubs.
pub mod proto {
    tonic::include_proto!("concordium");
}

pub use client::{GrpcNodeClient, NodeInfo, NodeRpc};
pub use error::{NodeError, NodeResult};
