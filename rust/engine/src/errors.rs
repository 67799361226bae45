use rust_decimal::Decimal;
use thiserror::Error;

use crate::cards::Card;
use crate::hand::Street;

/// Errors raised while validating input or advancing a hand.
///
/// Every variant except [`AdvisorError::InputClosed`] is recoverable at the
/// input boundary: the caller re-prompts and nothing invalid is committed.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum AdvisorError {
    #[error("Invalid card format: '{token}'. Use format like AH, KS, 2D, TC")]
    InvalidCardFormat { token: String },
    #[error("Invalid amount '{raw}': expected a number >= {minimum}")]
    InvalidAmount { raw: String, minimum: Decimal },
    #[error("Invalid input '{raw}': expected a number between {lo} and {hi}")]
    InvalidRange { raw: String, lo: i64, hi: i64 },
    #[error("A hand needs exactly 2 hole cards, got {count}")]
    InvalidHandSize { count: usize },
    #[error("Expected {expected} opponent amounts, got {actual}")]
    InvalidCallCount { expected: usize, actual: usize },
    #[error("Cannot deal {dealt} card(s) on {street} with {board} on the board")]
    StreetOutOfOrder {
        street: Street,
        board: usize,
        dealt: usize,
    },
    #[error("Card {card} is already in play")]
    DuplicateCard { card: Card },
    #[error("Unknown decision engine '{kind}'")]
    UnknownEngine { kind: String },
    #[error("Input closed")]
    InputClosed,
}

impl AdvisorError {
    /// Whether re-prompting for the same input can resolve the error.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            AdvisorError::InputClosed | AdvisorError::UnknownEngine { .. }
        )
    }
}
