use rust_decimal::Decimal;
use serde::Serialize;

use crate::cards::Card;
use crate::errors::AdvisorError;
use crate::hand::HandState;

/// Fewest opponents a session can be configured with.
pub const MIN_OPPONENTS: usize = 1;
/// Most opponents a session can be configured with.
pub const MAX_OPPONENTS: usize = 8;

/// Long-lived table configuration that spans hands.
///
/// Holds the opponent count, the stacks, and the blind structure. Stacks can
/// be refreshed between hands without re-entering the blinds or the opponent
/// count. The session also remembers the cards of the last hand played so the
/// current game state can be displayed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSession {
    opponent_count: usize,
    small_blind: Decimal,
    big_blind: Decimal,
    player_pot: Decimal,
    opponent_pots: Vec<Decimal>,
    last_hole_cards: Option<[Card; 2]>,
    last_board: Vec<Card>,
}

impl GameSession {
    /// Create a session for `opponent_count` opponents with the given blinds.
    ///
    /// Blinds are stored as given; an inverted structure (small above big) is
    /// accepted and only logged.
    ///
    /// # Errors
    ///
    /// - [`AdvisorError::InvalidRange`] when `opponent_count` is outside `1..=8`
    /// - [`AdvisorError::InvalidAmount`] when a blind is negative
    ///
    /// # Examples
    ///
    /// ```
    /// use advisor_engine::game::GameSession;
    /// use rust_decimal::Decimal;
    ///
    /// let session = GameSession::configure(2, Decimal::ONE, Decimal::TWO).unwrap();
    /// assert_eq!(session.opponent_count(), 2);
    /// assert!(GameSession::configure(9, Decimal::ONE, Decimal::TWO).is_err());
    /// ```
    pub fn configure(
        opponent_count: usize,
        small_blind: Decimal,
        big_blind: Decimal,
    ) -> Result<Self, AdvisorError> {
        if !(MIN_OPPONENTS..=MAX_OPPONENTS).contains(&opponent_count) {
            return Err(AdvisorError::InvalidRange {
                raw: opponent_count.to_string(),
                lo: MIN_OPPONENTS as i64,
                hi: MAX_OPPONENTS as i64,
            });
        }
        ensure_non_negative(small_blind)?;
        ensure_non_negative(big_blind)?;
        if small_blind > big_blind {
            tracing::warn!(%small_blind, %big_blind, "small blind exceeds big blind");
        }
        tracing::info!(opponent_count, %small_blind, %big_blind, "game session configured");
        Ok(Self {
            opponent_count,
            small_blind,
            big_blind,
            player_pot: Decimal::ZERO,
            opponent_pots: vec![Decimal::ZERO; opponent_count],
            last_hole_cards: None,
            last_board: Vec::new(),
        })
    }

    pub fn opponent_count(&self) -> usize {
        self.opponent_count
    }
    pub fn small_blind(&self) -> Decimal {
        self.small_blind
    }
    pub fn big_blind(&self) -> Decimal {
        self.big_blind
    }
    pub fn player_pot(&self) -> Decimal {
        self.player_pot
    }
    pub fn opponent_pots(&self) -> &[Decimal] {
        &self.opponent_pots
    }
    pub fn last_hole_cards(&self) -> Option<[Card; 2]> {
        self.last_hole_cards
    }
    pub fn last_board(&self) -> &[Card] {
        &self.last_board
    }

    pub fn update_pot(&mut self, player_pot: Decimal) -> Result<(), AdvisorError> {
        ensure_non_negative(player_pot)?;
        self.player_pot = player_pot;
        Ok(())
    }

    /// Replace every opponent's stack. The list must hold one entry per
    /// configured opponent.
    pub fn update_opponent_pots(&mut self, pots: Vec<Decimal>) -> Result<(), AdvisorError> {
        if pots.len() != self.opponent_count {
            return Err(AdvisorError::InvalidCallCount {
                expected: self.opponent_count,
                actual: pots.len(),
            });
        }
        for &pot in &pots {
            ensure_non_negative(pot)?;
        }
        self.opponent_pots = pots;
        Ok(())
    }

    /// Set the hole cards shown before any hand has been played.
    pub fn set_hole_cards(&mut self, cards: [Card; 2]) -> Result<(), AdvisorError> {
        if cards[0] == cards[1] {
            return Err(AdvisorError::DuplicateCard { card: cards[1] });
        }
        self.last_hole_cards = Some(cards);
        self.last_board.clear();
        Ok(())
    }

    /// Remember the cards and stack of a finished (or in-progress) hand.
    pub fn record_hand(&mut self, hand: &HandState) {
        self.last_hole_cards = Some(hand.hole_cards());
        self.last_board = hand.board().to_vec();
        self.player_pot = hand.player_pot();
    }
}

pub(crate) fn ensure_non_negative(amount: Decimal) -> Result<(), AdvisorError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(AdvisorError::InvalidAmount {
            raw: amount.to_string(),
            minimum: Decimal::ZERO,
        });
    }
    Ok(())
}
