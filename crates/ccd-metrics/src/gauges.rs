//! The gauge catalogue.
//!
//! One table maps every published gauge to its stable name, static help
//! text, and the snapshot field it reads. Exposition iterates this table,
//! so names, help strings, and values can never drift apart.

use crate::snapshot::MetricsSnapshot;

/// A single published gauge.
pub struct GaugeSpec {
    /// Metric name, unique within the namespace.
    pub name: &'static str,
    /// Static help text describing unit and meaning.
    pub help: &'static str,
    /// Reads this gauge's value out of a snapshot.
    pub read: fn(&MetricsSnapshot) -> f64,
}

/// Exhaustive name-to-field mapping for every published gauge.
pub const GAUGES: &[GaugeSpec] = &[
    GaugeSpec {
        name: "peer_total_sent_amount",
        help: "Peer total sent packets in Byte",
        read: |s| s.peer_total_sent,
    },
    GaugeSpec {
        name: "peer_total_received_amount",
        help: "Peer total received packets in Byte",
        read: |s| s.peer_total_received,
    },
    GaugeSpec {
        name: "last_finalized_block_height",
        help: "Last finalized block height",
        read: |s| s.last_finalized_block_height,
    },
    GaugeSpec {
        name: "block_arrive_latency_inEMSD",
        help: "Arrived block latency in EMSD",
        read: |s| s.block_arrive_latency_emsd,
    },
    GaugeSpec {
        name: "block_receive_latency_inEMSD",
        help: "Received block latency in EMSD",
        read: |s| s.block_receive_latency_emsd,
    },
    GaugeSpec {
        name: "block_receive_period_inEMSD",
        help: "Received block period in EMSD",
        read: |s| s.block_receive_period_emsd,
    },
    GaugeSpec {
        name: "block_arrive_period_inEMSD",
        help: "Arrived block period in EMSD",
        read: |s| s.block_arrive_period_emsd,
    },
    GaugeSpec {
        name: "block_received_count",
        help: "Received block count",
        read: |s| s.blocks_received_count,
    },
    GaugeSpec {
        name: "transactions_per_block_inEMSD",
        help: "Transaction count per block in EMSD",
        read: |s| s.transactions_per_block_emsd,
    },
    GaugeSpec {
        name: "finalization_period_inEMA",
        help: "Finalization period in EMA",
        read: |s| s.finalization_period_ema,
    },
    GaugeSpec {
        name: "best_block_height",
        help: "Best block height",
        read: |s| s.best_block_height,
    },
    GaugeSpec {
        name: "finalization_count",
        help: "Finalization count",
        read: |s| s.finalization_count,
    },
    GaugeSpec {
        name: "epoch_duration",
        help: "Epoch duration(const.)",
        read: |s| s.epoch_duration,
    },
    GaugeSpec {
        name: "blocks_verified_count",
        help: "Verified blocks count",
        read: |s| s.blocks_verified_count,
    },
    GaugeSpec {
        name: "slot_duration",
        help: "Slot duration(const.)",
        read: |s| s.slot_duration,
    },
    GaugeSpec {
        name: "finalization_period_inEMSD",
        help: "Finalization period in EMSD",
        read: |s| s.finalization_period_emsd,
    },
    GaugeSpec {
        name: "transactions_per_block_inEMA",
        help: "Transactions per block in EMA",
        read: |s| s.transactions_per_block_ema,
    },
    GaugeSpec {
        name: "block_arrive_latency_inEMA",
        help: "Arrived block latency in EMA",
        read: |s| s.block_arrive_latency_ema,
    },
    GaugeSpec {
        name: "block_receive_latency_inEMA",
        help: "Received block latency in EMA",
        read: |s| s.block_receive_latency_ema,
    },
    GaugeSpec {
        name: "block_arrive_period_inEMA",
        help: "Arrived block period in EMA",
        read: |s| s.block_arrive_period_ema,
    },
    GaugeSpec {
        name: "block_receive_period_inEMA",
        help: "Received block period in EMA",
        read: |s| s.block_receive_period_ema,
    },
    GaugeSpec {
        name: "baker_running",
        help: "Bool value of whether baker is running. true=1, false=0",
        read: |s| s.baker_running,
    },
    GaugeSpec {
        name: "consensus_running",
        help: "Bool value of whether consensus module is running. true=1, false=0",
        read: |s| s.consensus_running,
    },
    GaugeSpec {
        name: "baker_id",
        help: "Baker ID in integer",
        read: |s| s.baker_id,
    },
    GaugeSpec {
        name: "baker_lottery_power",
        help: "Baker Block Minting Probability",
        read: |s| s.baker_lottery_power,
    },
    GaugeSpec {
        name: "estimated_baking_block_per_day",
        help: "The number of blocks your baker is expected to bake per day",
        read: |s| s.estimated_baking_block,
    },
];
