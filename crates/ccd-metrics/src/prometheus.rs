//! Prometheus text exposition format.
//!
//! Renders one metrics snapshot into the Prometheus text exposition
//! format for scraping by a Prometheus server or compatible agent.

use crate::gauges::GAUGES;
use crate::snapshot::MetricsSnapshot;

/// Metric namespace prefixed to every gauge name.
pub const NAMESPACE: &str = "concordium";

/// Render a snapshot into Prometheus text format.
///
/// Emits every gauge in the catalogue with `# HELP` and `# TYPE` lines.
pub fn render_prometheus(snapshot: &MetricsSnapshot) -> String {
    let mut out = String::new();

    for gauge in GAUGES {
        out.push_str(&format!("# HELP {NAMESPACE}_{} {}\n", gauge.name, gauge.help));
        out.push_str(&format!("# TYPE {NAMESPACE}_{} gauge\n", gauge.name));
        out.push_str(&format!(
            "{NAMESPACE}_{} {}\n",
            gauge.name,
            (gauge.read)(snapshot)
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_snapshot() -> MetricsSnapshot {
        MetricsSnapshot {
            best_block: "abc".to_string(),
            peer_total_sent: 500.0,
            peer_total_received: 300.0,
            best_block_height: 100.0,
            last_finalized_block_height: 98.0,
            finalization_count: 42.0,
            block_arrive_latency_ema: 0.25,
            consensus_running: 1.0,
            baker_running: 1.0,
            baker_id: 7.0,
            baker_lottery_power: 0.02,
            estimated_baking_block: 700.0,
            ..Default::default()
        }
    }

    #[test]
    fn renders_every_gauge_with_help_and_type() {
        let output = render_prometheus(&test_snapshot());

        for gauge in GAUGES {
            assert!(output.contains(&format!("# HELP concordium_{} ", gauge.name)));
            assert!(output.contains(&format!("# TYPE concordium_{} gauge", gauge.name)));
        }
    }

    #[test]
    fn renders_snapshot_values() {
        let output = render_prometheus(&test_snapshot());

        assert!(output.contains("concordium_peer_total_sent_amount 500\n"));
        assert!(output.contains("concordium_peer_total_received_amount 300\n"));
        assert!(output.contains("concordium_best_block_height 100\n"));
        assert!(output.contains("concordium_consensus_running 1\n"));
        assert!(output.contains("concordium_baker_running 1\n"));
        assert!(output.contains("concordium_baker_id 7\n"));
        assert!(output.contains("concordium_baker_lottery_power 0.02\n"));
        assert!(output.contains("concordium_estimated_baking_block_per_day 700\n"));
    }

    #[test]
    fn default_snapshot_renders_zeroes() {
        let output = render_prometheus(&MetricsSnapshot::default());
        assert!(output.contains("concordium_baker_lottery_power 0\n"));
        assert!(output.contains("concordium_epoch_duration 0\n"));
    }

    #[test]
    fn all_rendered_values_are_finite() {
        let snapshot = test_snapshot();
        for gauge in GAUGES {
            assert!((gauge.read)(&snapshot).is_finite(), "{}", gauge.name);
        }
    }

    #[test]
    fn format_is_prometheus_compatible() {
        let output = render_prometheus(&test_snapshot());

        // Every non-comment line is `name value`.
        for line in output.lines() {
            if line.starts_with('#') {
                continue;
            }
            let mut parts = line.split_whitespace();
            let name = parts.next().expect("metric name");
            let value = parts.next().expect("metric value");
            assert!(name.starts_with("concordium_"), "line: {line}");
            assert!(value.parse::<f64>().is_ok(), "line: {line}");
            assert_eq!(parts.next(), None, "line: {line}");
        }
    }
}
