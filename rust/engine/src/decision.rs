//! The decision-engine contract.
//!
//! A [`DecisionEngine`] receives a [`HandSnapshot`] once per street reached
//! and answers with a [`Decision`]. The policy behind it is pluggable; the
//! round controller only depends on this trait.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use crate::hand::HandSnapshot;

/// The recommendation category.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Fold,
    Call,
    Raise,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::Fold => "FOLD",
            Action::Call => "CALL",
            Action::Raise => "RAISE",
        })
    }
}

/// A recommendation with its amount and a free-text explanation.
///
/// Fields are private so that a fold always carries a zero amount and no
/// amount is ever negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    action: Action,
    amount: Decimal,
    reasoning: String,
}

impl Decision {
    /// Build a decision. The amount is forced to zero for
    /// [`Action::Fold`] and clamped at zero otherwise.
    ///
    /// ```
    /// use advisor_engine::decision::{Action, Decision};
    /// use rust_decimal::Decimal;
    ///
    /// let d = Decision::new(Action::Fold, Decimal::TEN, "weak");
    /// assert_eq!(d.amount(), Decimal::ZERO);
    /// ```
    pub fn new(action: Action, amount: Decimal, reasoning: impl Into<String>) -> Self {
        let amount = match action {
            Action::Fold => Decimal::ZERO,
            _ => amount.max(Decimal::ZERO),
        };
        Self {
            action,
            amount,
            reasoning: reasoning.into(),
        }
    }

    pub fn fold(reasoning: impl Into<String>) -> Self {
        Self::new(Action::Fold, Decimal::ZERO, reasoning)
    }

    pub fn call(amount: Decimal, reasoning: impl Into<String>) -> Self {
        Self::new(Action::Call, amount, reasoning)
    }

    /// `amount` is the total wager, not the increment over the current bet.
    pub fn raise(amount: Decimal, reasoning: impl Into<String>) -> Self {
        Self::new(Action::Raise, amount, reasoning)
    }

    pub fn action(&self) -> Action {
        self.action
    }
    pub fn amount(&self) -> Decimal {
        self.amount
    }
    pub fn reasoning(&self) -> &str {
        &self.reasoning
    }
    pub fn is_fold(&self) -> bool {
        self.action == Action::Fold
    }
}

/// Trait implemented by every recommendation policy.
///
/// # Required Methods
///
/// - [`decide`](DecisionEngine::decide) - recommend an action for a street
/// - [`name`](DecisionEngine::name) - identifier shown to the user
///
/// # Example Implementation
///
/// ```rust
/// use advisor_engine::decision::{Decision, DecisionEngine};
/// use advisor_engine::hand::HandSnapshot;
///
/// struct AlwaysCall;
///
/// impl DecisionEngine for AlwaysCall {
///     fn decide(&self, snapshot: &HandSnapshot) -> Decision {
///         Decision::call(snapshot.current_bet(), "calling station")
///     }
///
///     fn name(&self) -> &str {
///         "AlwaysCall"
///     }
/// }
/// ```
pub trait DecisionEngine: Send + Sync {
    /// Recommend an action for the street in `snapshot`.
    ///
    /// Called once per street the hand reaches, so implementations must be
    /// callable repeatedly within one hand.
    fn decide(&self, snapshot: &HandSnapshot) -> Decision;

    /// Return the name/identifier of this policy.
    fn name(&self) -> &str;
}

impl<T: DecisionEngine + ?Sized> DecisionEngine for Box<T> {
    fn decide(&self, snapshot: &HandSnapshot) -> Decision {
        (**self).decide(snapshot)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
