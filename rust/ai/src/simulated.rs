//! Random stand-in for a real recommendation model.
//!
//! Draws a factor in `[0, 1)` in steps of 0.01 for every decision:
//!
//! | factor      | action | amount                      |
//! |-------------|--------|-----------------------------|
//! | `< 0.20`    | Fold   | 0                           |
//! | `< 0.60`    | Call   | current bet                 |
//! | otherwise   | Raise  | current bet × (2 + factor)  |
//!
//! Raise amounts are rounded up to cents and saturate instead of overflowing.
//! The generator is a seedable ChaCha20 so sessions can be replayed.

use advisor_engine::decision::{Decision, DecisionEngine};
use advisor_engine::hand::HandSnapshot;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rust_decimal::Decimal;
use std::sync::Mutex;

const FOLD_BELOW: u32 = 20;
const CALL_BELOW: u32 = 60;

#[derive(Debug)]
pub struct SimulatedEngine {
    rng: Mutex<ChaCha20Rng>,
}

impl SimulatedEngine {
    /// Create an engine; without a seed one is drawn at random.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self {
            rng: Mutex::new(ChaCha20Rng::seed_from_u64(seed)),
        }
    }

    fn draw_percent(&self) -> u32 {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.random_range(0..100)
    }

    /// Map a percentage draw to a decision for `snapshot`.
    fn decision_for(percent: u32, snapshot: &HandSnapshot) -> Decision {
        let bet = snapshot.current_bet();
        let odds = snapshot
            .pot_odds()
            .map(|o| format!(" (pot odds {})", o.round_dp(4)))
            .unwrap_or_default();
        if percent < FOLD_BELOW {
            Decision::fold(format!("Hand too weak for current pot odds{}", odds))
        } else if percent < CALL_BELOW {
            Decision::call(bet, format!("Decent hand, calling to see next card{}", odds))
        } else {
            let factor = Decimal::new(percent as i64, 2);
            let amount = crate::raise_amount(snapshot, Decimal::TWO + factor);
            Decision::raise(
                amount,
                format!("Strong hand detected, raising for value/bluff{}", odds),
            )
        }
    }
}

impl DecisionEngine for SimulatedEngine {
    fn decide(&self, snapshot: &HandSnapshot) -> Decision {
        let percent = self.draw_percent();
        let decision = Self::decision_for(percent, snapshot);
        tracing::debug!(
            street = %snapshot.street,
            percent,
            action = %decision.action(),
            "simulated decision"
        );
        decision
    }

    fn name(&self) -> &str {
        "SimulatedEngine"
    }
}
