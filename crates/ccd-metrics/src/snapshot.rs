//! The per-scrape metrics snapshot.

/// One immutable set of metric values for a single scrape.
///
/// Every field is a finite `f64`: integer counters, 0/1 role indicators,
/// and fractional EMA/EMSD statistics share one numeric path. Fields
/// that do not apply to the queried node (non-baker, roster miss) stay
/// at their neutral zero so consumers always see well-formed numbers.
///
/// A snapshot is assembled in one pass by the collector and never
/// mutated afterwards; nothing is cached across scrapes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetricsSnapshot {
    /// Hash of the current best block. Input to the baker-roster query,
    /// not itself a gauge.
    pub best_block: String,

    // Peer byte counters.
    pub peer_total_sent: f64,
    pub peer_total_received: f64,

    // Consensus status.
    pub last_finalized_block_height: f64,
    pub best_block_height: f64,
    pub blocks_received_count: f64,
    pub blocks_verified_count: f64,
    pub finalization_count: f64,
    pub epoch_duration: f64,
    pub slot_duration: f64,

    // Timing statistics (exponential moving average / standard deviation).
    pub block_arrive_latency_ema: f64,
    pub block_arrive_latency_emsd: f64,
    pub block_receive_latency_ema: f64,
    pub block_receive_latency_emsd: f64,
    pub block_arrive_period_ema: f64,
    pub block_arrive_period_emsd: f64,
    pub block_receive_period_ema: f64,
    pub block_receive_period_emsd: f64,
    pub finalization_period_ema: f64,
    pub finalization_period_emsd: f64,
    pub transactions_per_block_ema: f64,
    pub transactions_per_block_emsd: f64,

    // Node role indicators (0 or 1).
    pub consensus_running: f64,
    pub baker_running: f64,

    // Baker identity and performance. Zero unless baker reporting is
    // enabled and the node carries a baker identity.
    pub baker_id: f64,
    pub baker_lottery_power: f64,
    pub estimated_baking_block: f64,
}
