//! # advisor-ai: Recommendation Policies
//!
//! Implementations of [`DecisionEngine`] that the round controller can be
//! constructed with. None of them evaluate hand strength; they stand in for a
//! real model behind the same contract.
//!
//! ## Core Components
//!
//! - [`simulated`] - Seedable random stand-in (fold 20%, call 40%, raise 40%)
//! - [`passive`] - Deterministic policy that always calls the current bet
//! - [`scripted`] - Replays a fixed action list; used as a test double
//! - [`create_engine`] - Factory for the engines selectable by name
//!
//! ## Quick Start
//!
//! ```rust
//! use advisor_ai::create_engine;
//!
//! let engine = create_engine("simulated", Some(42)).unwrap();
//! assert_eq!(engine.name(), "SimulatedEngine");
//! assert!(create_engine("oracle", None).is_err());
//! ```

pub use advisor_engine::decision::DecisionEngine;
use advisor_engine::errors::AdvisorError;
use advisor_engine::hand::HandSnapshot;
use rust_decimal::{Decimal, RoundingStrategy};

pub mod passive;
pub mod scripted;
pub mod simulated;

/// Engine kinds accepted by [`create_engine`].
pub const ENGINE_KINDS: &[&str] = &["simulated", "passive"];

/// Create a decision engine by kind.
///
/// # Arguments
///
/// * `kind` - `"simulated"` or `"passive"` (case-insensitive)
/// * `seed` - RNG seed for the simulated engine; ignored by deterministic ones
///
/// # Errors
///
/// [`AdvisorError::UnknownEngine`] for any other kind.
pub fn create_engine(kind: &str, seed: Option<u64>) -> Result<Box<dyn DecisionEngine>, AdvisorError> {
    match kind.trim().to_ascii_lowercase().as_str() {
        "simulated" => Ok(Box::new(simulated::SimulatedEngine::new(seed))),
        "passive" => Ok(Box::new(passive::PassiveEngine)),
        _ => Err(AdvisorError::UnknownEngine {
            kind: kind.to_string(),
        }),
    }
}

/// Raise size for `snapshot`: the current bet times `multiplier`, rounded up
/// to cents. With nothing bet the small blind (at least one cent) is scaled
/// instead. Amounts past the representable range saturate at `Decimal::MAX`.
pub(crate) fn raise_amount(snapshot: &HandSnapshot, multiplier: Decimal) -> Decimal {
    let bet = snapshot.current_bet();
    let base = if bet.is_zero() {
        snapshot.small_blind.max(Decimal::new(1, 2))
    } else {
        bet
    };
    base.checked_mul(multiplier).map_or(Decimal::MAX, |amount| {
        amount.round_dp_with_strategy(2, RoundingStrategy::ToPositiveInfinity)
    })
}
