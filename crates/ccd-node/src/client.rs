//! Node RPC client — tonic-backed access to the Concordium P2P API.
//!
//! [`NodeRpc`] is the seam between the collection pipeline and the
//! transport: production code talks to a [`GrpcNodeClient`], tests
//! substitute a scripted mock.

use tonic::Request;
use tonic::metadata::{Ascii, MetadataValue};
use tonic::transport::Channel;
use tracing::debug;

use crate::error::{NodeError, NodeResult};
use crate::proto;
use crate::proto::p2p_client::P2pClient;

/// Role flags and baker identity reported by `NodeInfo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeInfo {
    pub consensus_running: bool,
    pub baker_running: bool,
    /// `None` when the node has no baker identity assigned.
    pub baker_id: Option<u64>,
}

/// The node call surface the collection pipeline depends on.
#[tonic::async_trait]
pub trait NodeRpc: Send + Sync {
    /// `GetConsensusStatus` — JSON-encoded consensus status document.
    async fn consensus_status(&self) -> NodeResult<String>;

    /// `PeerTotalSent` — total bytes sent to peers.
    async fn peer_total_sent(&self) -> NodeResult<u64>;

    /// `PeerTotalReceived` — total bytes received from peers.
    async fn peer_total_received(&self) -> NodeResult<u64>;

    /// `NodeInfo` — role flags and optional baker identity.
    async fn node_info(&self) -> NodeResult<NodeInfo>;

    /// `GetBirkParameters` — JSON-encoded election parameters and baker
    /// roster at the given block.
    async fn birk_parameters(&self, block_hash: &str) -> NodeResult<String>;
}

/// Tonic-backed [`NodeRpc`] that attaches the shared `authentication`
/// credential to every request.
#[derive(Clone)]
pub struct GrpcNodeClient {
    client: P2pClient<Channel>,
    credential: MetadataValue<Ascii>,
}

impl GrpcNodeClient {
    /// Connect to the node's gRPC endpoint.
    ///
    /// `addr` is a bare `host:port`; the transport is plaintext, matching
    /// the node's default RPC listener.
    pub async fn connect(addr: &str, credential: &str) -> NodeResult<Self> {
        let credential = credential.parse().map_err(|_| NodeError::Credential)?;

        let endpoint = format!("http://{addr}");
        debug!(%endpoint, "connecting to node");
        let client = P2pClient::connect(endpoint).await?;

        Ok(Self { client, credential })
    }

    fn request<T>(&self, message: T) -> Request<T> {
        let mut request = Request::new(message);
        request
            .metadata_mut()
            .insert("authentication", self.credential.clone());
        request
    }
}

#[tonic::async_trait]
impl NodeRpc for GrpcNodeClient {
    async fn consensus_status(&self) -> NodeResult<String> {
        debug!("calling GetConsensusStatus");
        let response = self
            .client
            .clone()
            .get_consensus_status(self.request(proto::Empty {}))
            .await
            .map_err(|status| NodeError::Rpc {
                call: "GetConsensusStatus",
                status,
            })?;
        Ok(response.into_inner().value)
    }

    async fn peer_total_sent(&self) -> NodeResult<u64> {
        debug!("calling PeerTotalSent");
        let response = self
            .client
            .clone()
            .peer_total_sent(self.request(proto::Empty {}))
            .await
            .map_err(|status| NodeError::Rpc {
                call: "PeerTotalSent",
                status,
            })?;
        Ok(response.into_inner().value)
    }

    async fn peer_total_received(&self) -> NodeResult<u64> {
        debug!("calling PeerTotalReceived");
        let response = self
            .client
            .clone()
            .peer_total_received(self.request(proto::Empty {}))
            .await
            .map_err(|status| NodeError::Rpc {
                call: "PeerTotalReceived",
                status,
            })?;
        Ok(response.into_inner().value)
    }

    async fn node_info(&self) -> NodeResult<NodeInfo> {
        debug!("calling NodeInfo");
        let response = self
            .client
            .clone()
            .node_info(self.request(proto::Empty {}))
            .await
            .map_err(|status| NodeError::Rpc {
                call: "NodeInfo",
                status,
            })?;

        let info = response.into_inner();
        Ok(NodeInfo {
            consensus_running: info.consensus_running,
            baker_running: info.consensus_baker_running,
            baker_id: info.consensus_baker_id,
        })
    }

    async fn birk_parameters(&self, block_hash: &str) -> NodeResult<String> {
        debug!(%block_hash, "calling GetBirkParameters");
        let response = self
            .client
            .clone()
            .get_birk_parameters(self.request(proto::BlockHash {
                block_hash: block_hash.to_string(),
            }))
            .await
            .map_err(|status| NodeError::Rpc {
                call: "GetBirkParameters",
                status,
            })?;
        Ok(response.into_inner().value)
    }
}
