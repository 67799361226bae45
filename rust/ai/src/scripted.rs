//! Deterministic test double that replays a fixed list of actions.

use advisor_engine::decision::{Action, Decision, DecisionEngine};
use advisor_engine::hand::{HandSnapshot, Street};
use rust_decimal::Decimal;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replays `actions` in order, one per `decide` call, and folds once the
/// script runs out. Calls use the current bet; raises double it.
///
/// ```
/// use advisor_ai::scripted::ScriptedEngine;
/// use advisor_engine::decision::Action;
///
/// let engine = ScriptedEngine::new([Action::Call, Action::Fold]);
/// assert_eq!(engine.calls(), 0);
/// ```
#[derive(Debug, Default)]
pub struct ScriptedEngine {
    script: Mutex<VecDeque<Action>>,
    streets: Mutex<Vec<Street>>,
}

impl ScriptedEngine {
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            script: Mutex::new(actions.into_iter().collect()),
            streets: Mutex::new(Vec::new()),
        }
    }

    /// Number of decisions requested so far.
    pub fn calls(&self) -> usize {
        self.streets().len()
    }

    /// Street of every decision requested so far, in order.
    pub fn streets(&self) -> Vec<Street> {
        self.streets
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl DecisionEngine for ScriptedEngine {
    fn decide(&self, snapshot: &HandSnapshot) -> Decision {
        self.streets
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(snapshot.street);
        let next = self
            .script
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front();
        let bet = snapshot.current_bet();
        match next {
            Some(Action::Call) => Decision::call(bet, "scripted call"),
            Some(Action::Raise) => {
                Decision::raise(crate::raise_amount(snapshot, Decimal::TWO), "scripted raise")
            }
            Some(Action::Fold) => Decision::fold("scripted fold"),
            None => Decision::fold("script exhausted"),
        }
    }

    fn name(&self) -> &str {
        "ScriptedEngine"
    }
}
