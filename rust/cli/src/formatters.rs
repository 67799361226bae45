//! Game-state and decision formatters for terminal display.
//!
//! Pure functions returning `String`s; callers decide where to write them.
//! Cards are shown as their canonical uppercase tokens and money with a `$`
//! prefix and two decimals. The `$` is never accepted on input.
//!
//! ## Example
//!
//! ```rust
//! use advisor_cli::formatters::{format_cards, format_money};
//! use rust_decimal::Decimal;
//!
//! let board = vec!["2d".parse().unwrap(), "7C".parse().unwrap()];
//! assert_eq!(format_cards(&board), "2D 7C");
//! assert_eq!(format_money(Decimal::new(25, 1)), "$2.50");
//! ```

use advisor_engine::cards::Card;
use advisor_engine::decision::Decision;
use advisor_engine::game::GameSession;
use advisor_engine::hand::HandSnapshot;
use rust_decimal::Decimal;

use crate::ui::rule;

/// Everything the "current game state" block shows.
#[derive(Debug, Clone, PartialEq)]
pub struct GameView<'a> {
    pub hole_cards: Option<[Card; 2]>,
    pub player_pot: Decimal,
    pub opponent_pots: &'a [Decimal],
    pub small_blind: Decimal,
    pub big_blind: Decimal,
    pub board: &'a [Card],
}

impl<'a> GameView<'a> {
    /// View of a session between hands.
    pub fn of_session(session: &'a GameSession) -> Self {
        Self {
            hole_cards: session.last_hole_cards(),
            player_pot: session.player_pot(),
            opponent_pots: session.opponent_pots(),
            small_blind: session.small_blind(),
            big_blind: session.big_blind(),
            board: session.last_board(),
        }
    }

    /// View of a hand in progress; opponent stacks come from the session.
    pub fn of_hand(snapshot: &'a HandSnapshot, opponent_pots: &'a [Decimal]) -> Self {
        Self {
            hole_cards: Some(snapshot.hole_cards),
            player_pot: snapshot.player_pot,
            opponent_pots,
            small_blind: snapshot.small_blind,
            big_blind: snapshot.big_blind,
            board: &snapshot.board,
        }
    }
}

/// Format an amount as `$` followed by two decimals.
pub fn format_money(amount: Decimal) -> String {
    format!("${:.2}", amount.round_dp(2))
}

/// Space-separated card tokens.
pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The framed "CURRENT GAME STATE" block, one line per opponent.
///
/// Opponents are numbered from 2; the player is seat 1.
pub fn format_game_state(view: &GameView<'_>) -> String {
    let line = rule('=', 50);
    let mut s = String::new();
    s.push('\n');
    s.push_str(&line);
    s.push_str("\n         CURRENT GAME STATE\n");
    s.push_str(&line);
    s.push('\n');
    match view.hole_cards {
        Some(hole) => s.push_str(&format!("Your Hand: {}\n", format_cards(&hole))),
        None => s.push_str("Your Hand: (none)\n"),
    }
    s.push_str(&format!("Your Pot: {}\n", format_money(view.player_pot)));
    s.push_str("\nOpponents:\n");
    for (i, pot) in view.opponent_pots.iter().enumerate() {
        s.push_str(&format!("  Player {}: {}\n", i + 2, format_money(*pot)));
    }
    s.push_str(&format!(
        "\nBlinds: {} / {}\n",
        format_money(view.small_blind),
        format_money(view.big_blind)
    ));
    if !view.board.is_empty() {
        s.push_str(&format!("\nCommunity Cards: {}\n", format_cards(view.board)));
    }
    s.push_str(&line);
    s.push('\n');
    s
}

/// The framed decision block. The amount line is omitted for a fold.
pub fn format_decision(decision: &Decision) -> String {
    let line = rule('-', 40);
    let mut s = String::new();
    s.push('\n');
    s.push_str(&line);
    s.push_str("\n         RECOMMENDED DECISION\n");
    s.push_str(&line);
    s.push('\n');
    s.push_str(&format!("Action: {}\n", decision.action()));
    if !decision.is_fold() {
        s.push_str(&format!("Amount: {}\n", format_money(decision.amount())));
    }
    s.push_str(&format!("Reasoning: {}\n", decision.reasoning()));
    s.push_str(&line);
    s.push('\n');
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn money_has_two_decimals() {
        assert_eq!(format_money(dec!(100)), "$100.00");
        assert_eq!(format_money(dec!(5.555)), "$5.56");
        assert_eq!(format_money(dec!(0)), "$0.00");
    }

    #[test]
    fn game_state_numbers_opponents_from_two() {
        let mut session = GameSession::configure(2, dec!(1), dec!(2)).unwrap();
        session.update_pot(dec!(100)).unwrap();
        session
            .update_opponent_pots(vec![dec!(50), dec!(75.5)])
            .unwrap();
        let text = format_game_state(&GameView::of_session(&session));
        assert!(text.contains("Your Pot: $100.00"));
        assert!(text.contains("  Player 2: $50.00"));
        assert!(text.contains("  Player 3: $75.50"));
        assert!(text.contains("Blinds: $1.00 / $2.00"));
        assert!(!text.contains("Community Cards"));
    }

    #[test]
    fn game_state_lists_board_when_present() {
        let board: Vec<Card> = ["2D", "7C", "9H"].iter().map(|t| t.parse().unwrap()).collect();
        let view = GameView {
            hole_cards: Some(["AH".parse().unwrap(), "KS".parse().unwrap()]),
            player_pot: dec!(10),
            opponent_pots: &[],
            small_blind: dec!(1),
            big_blind: dec!(2),
            board: &board,
        };
        let text = format_game_state(&view);
        assert!(text.contains("Your Hand: AH KS"));
        assert!(text.contains("Community Cards: 2D 7C 9H"));
    }

    #[test]
    fn fold_hides_amount() {
        let text = format_decision(&Decision::fold("too weak"));
        assert!(text.contains("Action: FOLD"));
        assert!(!text.contains("Amount:"));
        assert!(text.contains("Reasoning: too weak"));

        let text = format_decision(&Decision::raise(dec!(5.5), "value"));
        assert!(text.contains("Amount: $5.50"));
    }
}
