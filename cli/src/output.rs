//! Rendering of chains, reports and scenario results for stdout.

use std::fmt::Write as _;

use serde::Serialize;

use linkchain::{Chain, FailureReport, Fault};

use crate::scenarios::ScenarioResult;

/// JSON shape of the `append` command output.
#[derive(Serialize)]
pub struct ChainOutput<'a> {
    pub blocks: &'a Chain,
    pub report: FailureReport,
    pub faults: &'a [Fault],
}

/// Text listing of a chain followed by its validation result.
pub fn render_chain_text(chain: &Chain, report: &FailureReport, faults: &[Fault]) -> String {
    let mut out = String::new();
    for (position, block) in chain.iter().enumerate() {
        let created = block
            .created_at()
            .map(|t| t.to_rfc3339())
            .unwrap_or_else(|| block.timestamp.to_string());
        let _ = writeln!(out, "#{:<4} index={} created={}", position, block.index, created);
        let _ = writeln!(out, "      data     {:?}", block.data);
        let _ = writeln!(out, "      previous {}", block.previous_digest);
        let _ = writeln!(out, "      digest   {}", block.self_digest);
    }

    if report.is_clean() {
        let _ = writeln!(out, "valid: {} block(s), no failures", chain.len());
    } else {
        let _ = writeln!(out, "INVALID: {}", report);
        for fault in faults {
            let _ = writeln!(
                out,
                "  block {}: {} (expected {}, found {})",
                fault.position, fault.dimension, fault.expected, fault.found
            );
        }
    }
    out
}

/// Text listing of scenario outcomes, one line each.
pub fn render_scenarios_text(results: &[ScenarioResult]) -> String {
    let mut out = String::new();
    for (i, r) in results.iter().enumerate() {
        let verdict = if r.passed { "passed" } else { "FAILED" };
        let _ = writeln!(
            out,
            "scenario {} {:<6} {} (expected {}, got {})",
            i, verdict, r.name, r.expected, r.actual
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkchain::{find_faults, Block, Digest};

    #[test]
    fn clean_chain_text() {
        let mut chain = Chain::new();
        chain.append(Block::with_timestamp("x", 0));
        let report = chain.validate();
        let text = render_chain_text(&chain, &report, &[]);
        assert!(text.contains("#0"));
        assert!(text.contains("\"x\""));
        assert!(text.contains("valid: 1 block(s), no failures"));
    }

    #[test]
    fn corrupted_chain_text_lists_faults() {
        let mut chain = Chain::new();
        chain.append_with(Block::with_timestamp("x", 0), |b| {
            b.previous_digest = Digest::filled(0xFF)
        });
        let report = chain.validate();
        let faults = find_faults(&chain);
        let text = render_chain_text(&chain, &report, &faults);
        assert!(text.contains("INVALID: {CorruptedGenesis}"));
        assert!(text.contains("block 0: CorruptedGenesis"));
    }

    #[test]
    fn chain_output_json_shape() {
        let mut chain = Chain::new();
        chain.append(Block::with_timestamp("x", 0));
        let out = ChainOutput {
            blocks: &chain,
            report: chain.validate(),
            faults: &[],
        };
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["blocks"].as_array().unwrap().len(), 1);
        assert_eq!(json["report"], serde_json::json!([]));
    }
}
