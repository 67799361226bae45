//! Deterministic calling policy.

use advisor_engine::decision::{Decision, DecisionEngine};
use advisor_engine::hand::HandSnapshot;

/// Always calls the current bet. Useful for walking a hand to the river.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassiveEngine;

impl DecisionEngine for PassiveEngine {
    fn decide(&self, snapshot: &HandSnapshot) -> Decision {
        tracing::debug!(street = %snapshot.street, "passive engine calling");
        Decision::call(snapshot.current_bet(), "Calling to see the next card")
    }

    fn name(&self) -> &str {
        "PassiveEngine"
    }
}
