//! # advisor-engine: Hold'em Decision-Support Core
//!
//! Validates a player's card and money input, tracks one hand's progress
//! through the betting streets, and defines the contract a decision engine
//! implements to recommend fold, call or raise.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`validation`] - Pure validators for card tokens, amounts and integers
//! - [`game`] - Session configuration spanning hands (opponents, stacks, blinds)
//! - [`hand`] - Immutable per-street hand state and the [`hand::Street`] machine
//! - [`decision`] - The [`decision::DecisionEngine`] trait and [`decision::Decision`]
//! - [`round`] - The controller that walks a hand through its streets
//! - [`errors`] - Error types for validation and progression
//!
//! ## Quick Start
//!
//! ```rust
//! use advisor_engine::game::GameSession;
//! use advisor_engine::hand::{HandState, Street};
//! use advisor_engine::validation::validate_card;
//! use rust_decimal::Decimal;
//!
//! let session = GameSession::configure(2, Decimal::ONE, Decimal::TWO).unwrap();
//! let hole = [validate_card("ah").unwrap(), validate_card("ks").unwrap()];
//! let hand = HandState::new_hand(&session, &hole, Decimal::ONE_HUNDRED, vec![Decimal::TWO; 2]).unwrap();
//!
//! let flop: Vec<_> = ["2D", "7C", "9H"].iter().map(|t| validate_card(t).unwrap()).collect();
//! let hand = hand.advance_street(&flop).unwrap();
//! assert_eq!(hand.street(), Street::Flop);
//! assert_eq!(hand.board().len(), 3);
//!
//! // The turn takes exactly one card
//! assert!(hand.advance_street(&flop[..2]).is_err());
//! ```

pub mod cards;
pub mod decision;
pub mod errors;
pub mod game;
pub mod hand;
pub mod round;
pub mod validation;
