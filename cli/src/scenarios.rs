//! Built-in corruption scenarios.
//!
//! Each scenario builds a fresh chain, optionally corrupting every block's
//! predecessor link, and compares the validator's report with the expected
//! one.

use serde::Serialize;

use linkchain::{Block, Chain, Digest, FailureDimension, FailureReport};

/// Outcome of one scenario run.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    /// Short description.
    pub name: &'static str,
    /// Report the scenario must produce.
    pub expected: FailureReport,
    /// Report the validator produced.
    pub actual: FailureReport,
    /// Whether they match.
    pub passed: bool,
}

struct Scenario {
    name: &'static str,
    blocks: usize,
    corrupt: bool,
    expected: &'static [FailureDimension],
}

const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "one block",
        blocks: 1,
        corrupt: false,
        expected: &[],
    },
    Scenario {
        name: "two blocks",
        blocks: 2,
        corrupt: false,
        expected: &[],
    },
    Scenario {
        name: "one block, link forced to 0xFF",
        blocks: 1,
        corrupt: true,
        expected: &[FailureDimension::CorruptedGenesis],
    },
    Scenario {
        name: "two blocks, links forced to 0xFF",
        blocks: 2,
        corrupt: true,
        expected: &[
            FailureDimension::CorruptedGenesis,
            FailureDimension::CorruptedLink,
        ],
    },
];

/// Run every built-in scenario in order.
pub fn run_all() -> Vec<ScenarioResult> {
    SCENARIOS.iter().map(run).collect()
}

fn run(scenario: &Scenario) -> ScenarioResult {
    let mut chain = Chain::new();
    for i in 0..scenario.blocks {
        let block = Block::new(format!("scenario block {}", i));
        if scenario.corrupt {
            chain.append_with(block, |b| b.previous_digest = Digest::filled(0xFF));
        } else {
            chain.append(block);
        }
    }

    let expected: FailureReport = scenario.expected.iter().copied().collect();
    let actual = chain.validate();
    tracing::debug!(scenario = scenario.name, %expected, %actual, "scenario finished");

    ScenarioResult {
        name: scenario.name,
        expected,
        actual,
        passed: expected == actual,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_scenarios_pass() {
        let results = run_all();
        assert_eq!(results.len(), 4);
        for r in &results {
            assert!(r.passed, "{}: expected {}, got {}", r.name, r.expected, r.actual);
        }
    }
}
