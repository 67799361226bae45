//! Single-hand progression: hole cards, community cards and the street.
//!
//! [`HandState`] is an immutable record. Each transition
//! ([`HandState::advance_street`], [`HandState::fold`]) returns a new value and
//! leaves the previous street's record untouched, so a decision engine can
//! never observe a board that changes underneath it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::Card;
use crate::errors::AdvisorError;
use crate::game::{ensure_non_negative, GameSession};

/// Represents a betting street in Texas Hold'em poker.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Street {
    /// Before flop (hole cards dealt)
    Preflop,
    /// After flop (3 community cards)
    Flop,
    /// After turn (4th community card)
    Turn,
    /// After river (5th community card)
    River,
}

impl Street {
    /// The street that follows this one, or `None` after the river.
    pub fn next(self) -> Option<Street> {
        match self {
            Street::Preflop => Some(Street::Flop),
            Street::Flop => Some(Street::Turn),
            Street::Turn => Some(Street::River),
            Street::River => None,
        }
    }

    /// Number of community cards on the board once this street is dealt.
    pub fn board_len(self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Street::Preflop => "Pre-flop",
            Street::Flop => "Flop",
            Street::Turn => "Turn",
            Street::River => "River",
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One hand's progression through the streets.
#[derive(Debug, Clone, PartialEq)]
pub struct HandState {
    street: Street,
    folded: bool,
    hole: [Card; 2],
    board: Vec<Card>,
    player_pot: Decimal,
    opponent_calls: Vec<Decimal>,
    small_blind: Decimal,
    big_blind: Decimal,
}

impl HandState {
    /// Start a hand at [`Street::Preflop`] with an empty board.
    ///
    /// The blinds are copied from `session`; the session itself is not
    /// modified.
    ///
    /// # Errors
    ///
    /// - [`AdvisorError::InvalidHandSize`] unless exactly two hole cards are given
    /// - [`AdvisorError::DuplicateCard`] when both hole cards are the same card
    /// - [`AdvisorError::InvalidCallCount`] when `opponent_calls` does not hold
    ///   one amount per configured opponent
    /// - [`AdvisorError::InvalidAmount`] for a negative pot or call
    ///
    /// # Examples
    ///
    /// ```
    /// use advisor_engine::game::GameSession;
    /// use advisor_engine::hand::{HandState, Street};
    /// use advisor_engine::validation::validate_card;
    /// use rust_decimal::Decimal;
    ///
    /// let session = GameSession::configure(1, Decimal::ONE, Decimal::TWO).unwrap();
    /// let hole = [validate_card("AH").unwrap(), validate_card("KS").unwrap()];
    /// let hand = HandState::new_hand(&session, &hole, Decimal::ONE_HUNDRED, vec![Decimal::TWO]).unwrap();
    /// assert_eq!(hand.street(), Street::Preflop);
    /// assert!(hand.board().is_empty());
    /// ```
    pub fn new_hand(
        session: &GameSession,
        hole_cards: &[Card],
        player_pot: Decimal,
        opponent_calls: Vec<Decimal>,
    ) -> Result<Self, AdvisorError> {
        let hole: [Card; 2] = hole_cards
            .try_into()
            .map_err(|_| AdvisorError::InvalidHandSize {
                count: hole_cards.len(),
            })?;
        if hole[0] == hole[1] {
            return Err(AdvisorError::DuplicateCard { card: hole[1] });
        }
        if opponent_calls.len() != session.opponent_count() {
            return Err(AdvisorError::InvalidCallCount {
                expected: session.opponent_count(),
                actual: opponent_calls.len(),
            });
        }
        ensure_non_negative(player_pot)?;
        for &call in &opponent_calls {
            ensure_non_negative(call)?;
        }
        Ok(Self {
            street: Street::Preflop,
            folded: false,
            hole,
            board: Vec::with_capacity(5),
            player_pot,
            opponent_calls,
            small_blind: session.small_blind(),
            big_blind: session.big_blind(),
        })
    }

    /// Deal the next street's community cards.
    ///
    /// The flop takes exactly three cards, the turn and the river one each.
    /// Returns the state for the new street; `self` is left as it was.
    ///
    /// # Errors
    ///
    /// - [`AdvisorError::StreetOutOfOrder`] if the hand is already over or the
    ///   card count does not move the board along 0 → 3 → 4 → 5
    /// - [`AdvisorError::DuplicateCard`] if a card is already in play
    pub fn advance_street(&self, new_cards: &[Card]) -> Result<HandState, AdvisorError> {
        let out_of_order = AdvisorError::StreetOutOfOrder {
            street: self.street,
            board: self.board.len(),
            dealt: new_cards.len(),
        };
        if self.folded {
            return Err(out_of_order);
        }
        let Some(next) = self.street.next() else {
            return Err(out_of_order);
        };
        if self.board.len() + new_cards.len() != next.board_len() {
            return Err(out_of_order);
        }
        for (i, card) in new_cards.iter().enumerate() {
            if self.is_in_play(card) || new_cards[..i].contains(card) {
                return Err(AdvisorError::DuplicateCard { card: *card });
            }
        }

        let mut advanced = self.clone();
        advanced.board.extend_from_slice(new_cards);
        advanced.street = next;
        Ok(advanced)
    }

    /// A terminal copy of this hand, ended by a fold on the current street.
    pub fn fold(&self) -> HandState {
        HandState {
            folded: true,
            ..self.clone()
        }
    }

    /// Owned, read-only view handed to decision engines.
    pub fn snapshot(&self) -> HandSnapshot {
        HandSnapshot {
            street: self.street,
            hole_cards: self.hole,
            board: self.board.clone(),
            player_pot: self.player_pot,
            opponent_calls: self.opponent_calls.clone(),
            small_blind: self.small_blind,
            big_blind: self.big_blind,
        }
    }

    /// Number of cards the next street needs, or `None` once the hand is over.
    pub fn cards_to_deal(&self) -> Option<usize> {
        if self.folded {
            return None;
        }
        self.street
            .next()
            .map(|next| next.board_len() - self.board.len())
    }

    pub fn is_terminal(&self) -> bool {
        self.folded || self.street == Street::River
    }

    pub fn is_folded(&self) -> bool {
        self.folded
    }

    /// Hole cards followed by the board.
    pub fn cards_in_play(&self) -> Vec<Card> {
        self.hole.iter().chain(self.board.iter()).copied().collect()
    }

    fn is_in_play(&self, card: &Card) -> bool {
        self.hole.contains(card) || self.board.contains(card)
    }

    pub fn street(&self) -> Street {
        self.street
    }
    pub fn hole_cards(&self) -> [Card; 2] {
        self.hole
    }
    pub fn board(&self) -> &[Card] {
        &self.board
    }
    pub fn player_pot(&self) -> Decimal {
        self.player_pot
    }
    pub fn opponent_calls(&self) -> &[Decimal] {
        &self.opponent_calls
    }
}

/// What a decision engine is allowed to see of a hand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HandSnapshot {
    pub street: Street,
    pub hole_cards: [Card; 2],
    pub board: Vec<Card>,
    pub player_pot: Decimal,
    pub opponent_calls: Vec<Decimal>,
    pub small_blind: Decimal,
    pub big_blind: Decimal,
}

impl HandSnapshot {
    /// Amount needed to stay in: the largest opponent wager, never below the
    /// big blind.
    pub fn current_bet(&self) -> Decimal {
        self.opponent_calls
            .iter()
            .copied()
            .fold(self.big_blind, Decimal::max)
    }

    /// Big blind relative to the player's stack; `None` for an empty stack.
    pub fn pot_odds(&self) -> Option<Decimal> {
        if self.player_pot.is_zero() {
            None
        } else {
            self.big_blind.checked_div(self.player_pot)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_card;
    use rust_decimal_macros::dec;

    fn cards(tokens: &[&str]) -> Vec<Card> {
        tokens.iter().map(|t| validate_card(t).unwrap()).collect()
    }

    fn preflop() -> HandState {
        let session = GameSession::configure(2, dec!(1), dec!(2)).unwrap();
        HandState::new_hand(
            &session,
            &cards(&["AH", "KS"]),
            dec!(100),
            vec![dec!(2), dec!(2)],
        )
        .unwrap()
    }

    #[test]
    fn street_sequence_and_board_sizes() {
        assert_eq!(Street::Preflop.next(), Some(Street::Flop));
        assert_eq!(Street::River.next(), None);
        assert_eq!(Street::Turn.board_len(), 4);
        assert_eq!(Street::Preflop.to_string(), "Pre-flop");
    }

    #[test]
    fn new_hand_rejects_three_hole_cards() {
        let session = GameSession::configure(1, dec!(1), dec!(2)).unwrap();
        let err = HandState::new_hand(
            &session,
            &cards(&["AH", "KS", "QD"]),
            dec!(10),
            vec![dec!(0)],
        )
        .unwrap_err();
        assert_eq!(err, AdvisorError::InvalidHandSize { count: 3 });
    }

    #[test]
    fn new_hand_rejects_pair_of_identical_cards() {
        let session = GameSession::configure(1, dec!(1), dec!(2)).unwrap();
        let err =
            HandState::new_hand(&session, &cards(&["AH", "ah"]), dec!(10), vec![dec!(0)])
                .unwrap_err();
        assert!(matches!(err, AdvisorError::DuplicateCard { .. }));
    }

    #[test]
    fn advance_leaves_previous_record_untouched() {
        let pre = preflop();
        let flop = pre.advance_street(&cards(&["2D", "7C", "9H"])).unwrap();
        assert!(pre.board().is_empty());
        assert_eq!(pre.street(), Street::Preflop);
        assert_eq!(flop.board().len(), 3);
        assert_eq!(flop.street(), Street::Flop);
    }

    #[test]
    fn cards_to_deal_follows_streets() {
        let pre = preflop();
        assert_eq!(pre.cards_to_deal(), Some(3));
        let flop = pre.advance_street(&cards(&["2D", "7C", "9H"])).unwrap();
        assert_eq!(flop.cards_to_deal(), Some(1));
        assert_eq!(flop.fold().cards_to_deal(), None);
    }

    #[test]
    fn advance_rejects_card_already_in_hand() {
        let err = preflop()
            .advance_street(&cards(&["2D", "AH", "9H"]))
            .unwrap_err();
        assert_eq!(
            err,
            AdvisorError::DuplicateCard {
                card: validate_card("AH").unwrap()
            }
        );
    }

    #[test]
    fn advance_rejects_repeated_card_within_flop() {
        let err = preflop()
            .advance_street(&cards(&["2D", "2D", "9H"]))
            .unwrap_err();
        assert!(matches!(err, AdvisorError::DuplicateCard { .. }));
    }

    #[test]
    fn folded_hand_cannot_advance() {
        let folded = preflop().fold();
        assert!(folded.is_terminal());
        assert!(matches!(
            folded.advance_street(&cards(&["2D", "7C", "9H"])),
            Err(AdvisorError::StreetOutOfOrder {
                street: Street::Preflop,
                ..
            })
        ));
    }

    #[test]
    fn snapshot_current_bet_uses_largest_call() {
        let session = GameSession::configure(3, dec!(1), dec!(2)).unwrap();
        let hand = HandState::new_hand(
            &session,
            &cards(&["AH", "KS"]),
            dec!(100),
            vec![dec!(0), dec!(6), dec!(4)],
        )
        .unwrap();
        assert_eq!(hand.snapshot().current_bet(), dec!(6));
        assert_eq!(preflop().snapshot().current_bet(), dec!(2));
    }

    #[test]
    fn pot_odds_is_big_blind_over_stack() {
        let snap = preflop().snapshot();
        assert_eq!(snap.pot_odds(), Some(dec!(0.02)));
    }
}
