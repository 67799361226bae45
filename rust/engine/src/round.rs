//! Street-by-street orchestration of one hand.
//!
//! [`RoundController`] builds the [`HandState`], asks the injected
//! [`DecisionEngine`] for a recommendation on every street, and pulls the
//! community cards it needs through a [`RoundIo`] implementation. A fold on
//! any street ends the hand: no further cards are requested and the engine is
//! not consulted again.

use rust_decimal::Decimal;

use crate::cards::Card;
use crate::decision::{Decision, DecisionEngine};
use crate::errors::AdvisorError;
use crate::game::GameSession;
use crate::hand::{HandSnapshot, HandState, Street};

/// Everything needed to start a hand.
#[derive(Debug, Clone, PartialEq)]
pub struct HandSetup {
    pub hole_cards: Vec<Card>,
    pub player_pot: Decimal,
    pub opponent_calls: Vec<Decimal>,
}

/// Describes the card a [`RoundIo`] is asked to supply.
#[derive(Debug, Clone, Copy)]
pub struct CardRequest<'a> {
    /// Street being dealt.
    pub street: Street,
    /// Zero-based position of this card within the street's deal.
    pub index: usize,
    /// Cards dealt on this street in total (3 for the flop, 1 otherwise).
    pub of: usize,
    /// Hole cards, board, and cards already collected for this street.
    pub used: &'a [Card],
}

/// Card supply and progress notifications for a running hand.
///
/// `next_card` owns parsing and re-prompting for malformed input. A returned
/// card that is already in play is reported through `card_rejected` and
/// requested again, so the supplier must eventually return a new card or an
/// error. The notification hooks default to no-ops.
pub trait RoundIo {
    type Error: From<AdvisorError>;

    fn next_card(&mut self, request: &CardRequest<'_>) -> Result<Card, Self::Error>;

    /// The last card from `next_card` was refused; the same request follows.
    fn card_rejected(&mut self, _error: &AdvisorError) -> Result<(), Self::Error> {
        Ok(())
    }

    /// A street is about to be decided.
    fn street_started(&mut self, _snapshot: &HandSnapshot) -> Result<(), Self::Error> {
        Ok(())
    }

    /// The engine answered for `street`.
    fn decision_made(&mut self, _street: Street, _decision: &Decision) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Result of a hand driven to its end.
#[derive(Debug, Clone)]
pub struct HandOutcome {
    state: HandState,
    decisions: Vec<(Street, Decision)>,
}

impl HandOutcome {
    /// The hand as it stood when it ended.
    pub fn state(&self) -> &HandState {
        &self.state
    }

    /// Decisions in street order, one per street reached.
    pub fn decisions(&self) -> &[(Street, Decision)] {
        &self.decisions
    }

    /// The street on which the engine recommended folding, if it did.
    pub fn folded_on(&self) -> Option<Street> {
        self.decisions
            .last()
            .filter(|(_, d)| d.is_fold())
            .map(|(street, _)| *street)
    }

    pub fn last_decision(&self) -> Option<&Decision> {
        self.decisions.last().map(|(_, d)| d)
    }
}

/// Drives one hand at a time through Preflop, Flop, Turn and River.
pub struct RoundController<'a> {
    engine: &'a dyn DecisionEngine,
}

impl<'a> RoundController<'a> {
    pub fn new(engine: &'a dyn DecisionEngine) -> Self {
        Self { engine }
    }

    /// Play a hand from pre-flop until a fold or the river decision.
    ///
    /// # Errors
    ///
    /// Fails when `setup` is rejected by [`HandState::new_hand`], or when the
    /// [`RoundIo`] reports an error (for example, closed input).
    ///
    /// # Examples
    ///
    /// ```
    /// use advisor_engine::cards::Card;
    /// use advisor_engine::decision::{Decision, DecisionEngine};
    /// use advisor_engine::errors::AdvisorError;
    /// use advisor_engine::game::GameSession;
    /// use advisor_engine::hand::{HandSnapshot, Street};
    /// use advisor_engine::round::{CardRequest, HandSetup, RoundController, RoundIo};
    /// use rust_decimal::Decimal;
    ///
    /// struct Folder;
    /// impl DecisionEngine for Folder {
    ///     fn decide(&self, _: &HandSnapshot) -> Decision { Decision::fold("no") }
    ///     fn name(&self) -> &str { "Folder" }
    /// }
    ///
    /// struct NoCards;
    /// impl RoundIo for NoCards {
    ///     type Error = AdvisorError;
    ///     fn next_card(&mut self, _: &CardRequest<'_>) -> Result<Card, AdvisorError> {
    ///         Err(AdvisorError::InputClosed)
    ///     }
    /// }
    ///
    /// let session = GameSession::configure(1, Decimal::ONE, Decimal::TWO).unwrap();
    /// let setup = HandSetup {
    ///     hole_cards: vec!["7H".parse().unwrap(), "2C".parse().unwrap()],
    ///     player_pot: Decimal::ONE_HUNDRED,
    ///     opponent_calls: vec![Decimal::TWO],
    /// };
    /// let outcome = RoundController::new(&Folder)
    ///     .play_hand(&session, setup, &mut NoCards)
    ///     .unwrap();
    /// assert_eq!(outcome.folded_on(), Some(Street::Preflop));
    /// ```
    pub fn play_hand<Io: RoundIo>(
        &self,
        session: &GameSession,
        setup: HandSetup,
        io: &mut Io,
    ) -> Result<HandOutcome, Io::Error> {
        let mut state = HandState::new_hand(
            session,
            &setup.hole_cards,
            setup.player_pot,
            setup.opponent_calls,
        )?;
        let span = tracing::info_span!("hand", engine = self.engine.name());
        let _enter = span.enter();
        tracing::info!(hole = ?state.hole_cards(), pot = %state.player_pot(), "hand started");

        let mut decisions = Vec::with_capacity(4);
        loop {
            let decision = self.decide(&state, io)?;
            let folded = decision.is_fold();
            decisions.push((state.street(), decision));

            if folded {
                tracing::info!(street = %state.street(), "hand ended on fold");
                state = state.fold();
                break;
            }
            let Some(count) = state.cards_to_deal() else {
                tracing::info!("hand complete");
                break;
            };
            let Some(next) = state.street().next() else {
                break;
            };
            let dealt = collect_cards(&state, next, count, io)?;
            state = state.advance_street(&dealt)?;
            tracing::info!(street = %state.street(), board = ?state.board(), "street dealt");
        }

        Ok(HandOutcome { state, decisions })
    }

    fn decide<Io: RoundIo>(&self, state: &HandState, io: &mut Io) -> Result<Decision, Io::Error> {
        let snapshot = state.snapshot();
        io.street_started(&snapshot)?;
        let decision = self.engine.decide(&snapshot);
        tracing::info!(
            street = %snapshot.street,
            action = %decision.action(),
            amount = %decision.amount(),
            "decision"
        );
        io.decision_made(snapshot.street, &decision)?;
        Ok(decision)
    }
}

fn collect_cards<Io: RoundIo>(
    state: &HandState,
    street: Street,
    count: usize,
    io: &mut Io,
) -> Result<Vec<Card>, Io::Error> {
    let mut used = state.cards_in_play();
    let mut dealt = Vec::with_capacity(count);
    for index in 0..count {
        let card = loop {
            let request = CardRequest {
                street,
                index,
                of: count,
                used: &used,
            };
            let card = io.next_card(&request)?;
            if !used.contains(&card) {
                break card;
            }
            tracing::debug!(%card, %street, "card already in play, requesting again");
            io.card_rejected(&AdvisorError::DuplicateCard { card })?;
        };
        used.push(card);
        dealt.push(card);
    }
    Ok(dealt)
}
