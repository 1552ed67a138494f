//! Snapshot builder — the ordered five-step collection pipeline.
//!
//! One invocation produces one [`MetricsSnapshot`]:
//!
//! 1. `GetConsensusStatus` → consensus fields and the best-block hash
//! 2. `PeerTotalSent` → bytes sent to peers
//! 3. `PeerTotalReceived` → bytes received from peers
//! 4. `NodeInfo` → role indicators and optional baker identity
//! 5. `GetBirkParameters(best_block)` → the node's lottery power, only
//!    when baker reporting is enabled and step 4 carried a baker identity
//!
//! The first failing step aborts the build. A node without a baker
//! identity is a normal branch: step 5 is skipped outright and the
//! baker-derived fields stay at zero.

use ccd_metrics::MetricsSnapshot;
use ccd_node::NodeRpc;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{CollectError, CollectResult};
use crate::payload::{BirkParameters, ConsensusStatus};

/// Block-production slots per day on the network.
///
/// Fixed by the network's slot cadence; turns lottery power into an
/// estimated number of baked blocks per day.
pub const SLOTS_PER_DAY: f64 = 35_000.0;

/// Build one snapshot by querying `node` in the fixed call order.
///
/// `report_baker` gates the roster sub-query: when false, the baker
/// identity and performance fields stay at zero even for a baking node.
pub async fn build_snapshot(
    node: &dyn NodeRpc,
    report_baker: bool,
) -> CollectResult<MetricsSnapshot> {
    debug!("snapshot build started");

    let status: ConsensusStatus = decode("consensus status", &node.consensus_status().await?)?;
    let peer_total_sent = node.peer_total_sent().await? as f64;
    let peer_total_received = node.peer_total_received().await? as f64;
    let info = node.node_info().await?;

    let mut baker_id = 0.0;
    let mut baker_lottery_power = 0.0;
    let mut estimated_baking_block = 0.0;

    if report_baker {
        if let Some(id) = info.baker_id {
            baker_id = id as f64;
            debug!(baker_id = id, best_block = %status.best_block, "querying baker roster");

            let roster: BirkParameters = decode(
                "birk parameters",
                &node.birk_parameters(&status.best_block).await?,
            )?;

            match roster.lottery_power_of(id) {
                Some(power) => {
                    baker_lottery_power = power;
                    estimated_baking_block = power * SLOTS_PER_DAY;
                }
                None => debug!(baker_id = id, "baker not present in roster"),
            }
        }
    }

    let snapshot = MetricsSnapshot {
        best_block: status.best_block,
        peer_total_sent,
        peer_total_received,
        last_finalized_block_height: status.last_finalized_block_height,
        best_block_height: status.best_block_height,
        blocks_received_count: status.blocks_received_count,
        blocks_verified_count: status.blocks_verified_count,
        finalization_count: status.finalization_count,
        epoch_duration: status.epoch_duration,
        slot_duration: status.slot_duration,
        block_arrive_latency_ema: status.block_arrive_latency_ema.unwrap_or_default(),
        block_arrive_latency_emsd: status.block_arrive_latency_emsd.unwrap_or_default(),
        block_receive_latency_ema: status.block_receive_latency_ema.unwrap_or_default(),
        block_receive_latency_emsd: status.block_receive_latency_emsd.unwrap_or_default(),
        block_arrive_period_ema: status.block_arrive_period_ema.unwrap_or_default(),
        block_arrive_period_emsd: status.block_arrive_period_emsd.unwrap_or_default(),
        block_receive_period_ema: status.block_receive_period_ema.unwrap_or_default(),
        block_receive_period_emsd: status.block_receive_period_emsd.unwrap_or_default(),
        finalization_period_ema: status.finalization_period_ema.unwrap_or_default(),
        finalization_period_emsd: status.finalization_period_emsd.unwrap_or_default(),
        transactions_per_block_ema: status.transactions_per_block_ema.unwrap_or_default(),
        transactions_per_block_emsd: status.transactions_per_block_emsd.unwrap_or_default(),
        consensus_running: if info.consensus_running { 1.0 } else { 0.0 },
        baker_running: if info.baker_running { 1.0 } else { 0.0 },
        baker_id,
        baker_lottery_power,
        estimated_baking_block,
    };

    debug!(best_block = %snapshot.best_block, "snapshot build finished");
    Ok(snapshot)
}

fn decode<T: DeserializeOwned>(payload: &'static str, raw: &str) -> CollectResult<T> {
    serde_json::from_str(raw).map_err(|source| CollectError::Decode { payload, source })
}
