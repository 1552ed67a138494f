//! Serde models for the JSON documents embedded in node replies.
//!
//! `GetConsensusStatus` and `GetBirkParameters` both return their data
//! as a JSON document inside a string field. These models decode exactly
//! the fields the exporter publishes; the node emits more.

use serde::Deserialize;

/// Consensus status document, camelCase keys as emitted by the node.
///
/// Timing statistics are `null` until the node has observed enough
/// blocks, so they decode through `Option` and fall back to zero when
/// the snapshot is assembled.
#[derive(Debug, Deserialize)]
pub struct ConsensusStatus {
    #[serde(rename = "bestBlock", default)]
    pub best_block: String,
    #[serde(rename = "bestBlockHeight", default)]
    pub best_block_height: f64,
    #[serde(rename = "lastFinalizedBlockHeight", default)]
    pub last_finalized_block_height: f64,
    #[serde(rename = "blocksReceivedCount", default)]
    pub blocks_received_count: f64,
    #[serde(rename = "blocksVerifiedCount", default)]
    pub blocks_verified_count: f64,
    #[serde(rename = "finalizationCount", default)]
    pub finalization_count: f64,
    #[serde(rename = "epochDuration", default)]
    pub epoch_duration: f64,
    #[serde(rename = "slotDuration", default)]
    pub slot_duration: f64,
    #[serde(rename = "blockArriveLatencyEMA", default)]
    pub block_arrive_latency_ema: Option<f64>,
    #[serde(rename = "blockArriveLatencyEMSD", default)]
    pub block_arrive_latency_emsd: Option<f64>,
    #[serde(rename = "blockReceiveLatencyEMA", default)]
    pub block_receive_latency_ema: Option<f64>,
    #[serde(rename = "blockReceiveLatencyEMSD", default)]
    pub block_receive_latency_emsd: Option<f64>,
    #[serde(rename = "blockArrivePeriodEMA", default)]
    pub block_arrive_period_ema: Option<f64>,
    #[serde(rename = "blockArrivePeriodEMSD", default)]
    pub block_arrive_period_emsd: Option<f64>,
    #[serde(rename = "blockReceivePeriodEMA", default)]
    pub block_receive_period_ema: Option<f64>,
    #[serde(rename = "blockReceivePeriodEMSD", default)]
    pub block_receive_period_emsd: Option<f64>,
    #[serde(rename = "finalizationPeriodEMA", default)]
    pub finalization_period_ema: Option<f64>,
    #[serde(rename = "finalizationPeriodEMSD", default)]
    pub finalization_period_emsd: Option<f64>,
    #[serde(rename = "transactionsPerBlockEMA", default)]
    pub transactions_per_block_ema: Option<f64>,
    #[serde(rename = "transactionsPerBlockEMSD", default)]
    pub transactions_per_block_emsd: Option<f64>,
}

/// Election parameters document returned by `GetBirkParameters`.
#[derive(Debug, Deserialize)]
pub struct BirkParameters {
    #[serde(rename = "electionDifficulty", default)]
    pub election_difficulty: f64,
    #[serde(rename = "electionNonce", default)]
    pub election_nonce: String,
    #[serde(default)]
    pub bakers: Vec<BakerEntry>,
}

/// One entry of the baker roster.
#[derive(Debug, Deserialize)]
pub struct BakerEntry {
    #[serde(rename = "bakerId")]
    pub baker_id: u64,
    #[serde(rename = "bakerLotteryPower", default)]
    pub lottery_power: f64,
    #[serde(rename = "bakerAccount", default)]
    pub account: String,
}

impl BirkParameters {
    /// Lottery power of the given baker, if present in the roster.
    pub fn lottery_power_of(&self, baker_id: u64) -> Option<f64> {
        self.bakers
            .iter()
            .find(|b| b.baker_id == baker_id)
            .map(|b| b.lottery_power)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consensus_status_decodes_null_statistics_to_none() {
        let raw = r#"{
            "bestBlock": "abc",
            "bestBlockHeight": 100,
            "blockArrivePeriodEMA": null,
            "blockArrivePeriodEMSD": null
        }"#;

        let status: ConsensusStatus = serde_json::from_str(raw).unwrap();
        assert_eq!(status.best_block, "abc");
        assert_eq!(status.best_block_height, 100.0);
        assert_eq!(status.block_arrive_period_ema, None);
        assert_eq!(status.block_arrive_period_emsd, None);
    }

    #[test]
    fn consensus_status_tolerates_unknown_fields() {
        let raw = r#"{"bestBlock": "abc", "genesisBlock": "def", "protocolVersion": 4}"#;
        let status: ConsensusStatus = serde_json::from_str(raw).unwrap();
        assert_eq!(status.best_block, "abc");
    }

    #[test]
    fn birk_parameters_roster_lookup() {
        let raw = r#"{
            "electionDifficulty": 0.025,
            "electionNonce": "feed",
            "bakers": [
                {"bakerId": 3, "bakerLotteryPower": 0.5, "bakerAccount": "acc3"},
                {"bakerId": 7, "bakerLotteryPower": 0.02, "bakerAccount": "acc7"}
            ]
        }"#;

        let params: BirkParameters = serde_json::from_str(raw).unwrap();
        assert_eq!(params.election_difficulty, 0.025);
        assert_eq!(params.lottery_power_of(7), Some(0.02));
        assert_eq!(params.lottery_power_of(9), None);
    }

    #[test]
    fn birk_parameters_empty_roster() {
        let params: BirkParameters = serde_json::from_str("{}").unwrap();
        assert!(params.bakers.is_empty());
        assert_eq!(params.lottery_power_of(0), None);
    }
}
