//! # Menu Command
//!
//! The interactive decision-support session. A main menu offers:
//!
//! 1. Setup New Game: hole cards, stacks, opponents and blinds
//! 2. Play Hand: walks one hand street by street, asking the engine for a
//!    recommendation after each deal
//! 3. View Current Game State
//! 4. Exit
//!
//! Every prompt re-asks until the input is valid. Closing input at the menu
//! prompt ends the session normally; closing it in the middle of a setup or a
//! hand surfaces as [`CliError::Interrupted`].

use advisor_ai::create_engine;
use advisor_engine::cards::Card;
use advisor_engine::decision::{Decision, DecisionEngine};
use advisor_engine::game::{GameSession, MAX_OPPONENTS, MIN_OPPONENTS};
use advisor_engine::hand::{HandSnapshot, Street};
use advisor_engine::round::{CardRequest, HandSetup, RoundController, RoundIo};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};

use crate::error::CliError;
use crate::formatters::{GameView, format_decision, format_game_state};
use crate::prompt::Prompter;
use crate::ui;
use crate::validation::{MenuChoice, parse_menu_choice};

/// Handle the menu command: run the interactive session until Exit or EOF.
///
/// # Arguments
///
/// * `engine` - Decision engine kind (`simulated` or `passive`)
/// * `seed` - Seed for the simulated engine (default: random)
/// * `out` - Output stream for menus, prompts and game state
/// * `err` - Error stream for warnings
/// * `input` - Input stream the prompts read from
///
/// # Errors
///
/// * `CliError::Config` for an unknown engine kind
/// * `CliError::Interrupted` when input closes mid-prompt
/// * `CliError::Io` when reading or writing fails
pub fn handle_menu_command(
    engine: &str,
    seed: Option<u64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    input: &mut dyn BufRead,
) -> Result<(), CliError> {
    if engine.eq_ignore_ascii_case("simulated") {
        ui::display_warning(
            err,
            "Recommendations come from a random stand-in policy. Use for demo purposes only.",
        )?;
    }
    let engine = create_engine(engine, seed)?;
    tracing::info!(engine = engine.name(), "menu session started");

    let mut prompter = Prompter::new(input, out);
    writeln!(prompter.out(), "Welcome to the Hold'em Decision Advisor!")?;
    run_menu(engine.as_ref(), &mut prompter)
}

fn run_menu(engine: &dyn DecisionEngine, p: &mut Prompter<'_>) -> Result<(), CliError> {
    let mut session: Option<GameSession> = None;
    loop {
        display_menu(p.out())?;
        let choice = match p.ask("Enter your choice (1-4): ", parse_menu_choice) {
            Ok(choice) => choice,
            Err(CliError::Interrupted(_)) => {
                tracing::info!("input closed at menu");
                MenuChoice::Exit
            }
            Err(e) => return Err(e),
        };
        tracing::debug!(choice = choice.label(), "menu selection");

        match choice {
            MenuChoice::SetupGame => session = Some(setup_game(p)?),
            MenuChoice::PlayHand => match session.as_mut() {
                Some(session) => play_hand(engine, session, p)?,
                None => writeln!(p.out(), "\nPlease setup a game first (Option 1).")?,
            },
            MenuChoice::ViewState => match &session {
                Some(session) => {
                    write!(p.out(), "{}", format_game_state(&GameView::of_session(session)))?
                }
                None => writeln!(p.out(), "\nNo game setup yet.")?,
            },
            MenuChoice::Exit => {
                writeln!(p.out(), "\nThank you for using the Hold'em Decision Advisor!")?;
                return Ok(());
            }
        }
    }
}

fn display_menu(out: &mut dyn Write) -> std::io::Result<()> {
    ui::banner(out, "MAIN MENU", '=', 40)?;
    for (i, choice) in MenuChoice::ALL.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, choice.label())?;
    }
    writeln!(out, "{}", ui::rule('=', 40))
}

fn setup_game(p: &mut Prompter<'_>) -> Result<GameSession, CliError> {
    ui::banner(p.out(), "HOLD'EM DECISION ADVISOR", '=', 60)?;
    writeln!(p.out(), "\nSetting up new game...\n")?;

    writeln!(p.out(), "Enter your hole cards:")?;
    let hole = p.hole_cards("  First card (e.g., AH): ", "  Second card (e.g., KS): ")?;
    let player_pot = p.amount("\nEnter your current pot/stack: $", Decimal::ZERO)?;
    let opponents = p.integer(
        &format!(
            "\nEnter number of opponents ({}-{}): ",
            MIN_OPPONENTS, MAX_OPPONENTS
        ),
        MIN_OPPONENTS as i64,
        MAX_OPPONENTS as i64,
    )? as usize;

    writeln!(p.out(), "\nEnter each opponent's pot:")?;
    let mut opponent_pots = Vec::with_capacity(opponents);
    for i in 0..opponents {
        opponent_pots.push(p.amount(&format!("  Player {} pot: $", i + 2), Decimal::ZERO)?);
    }

    writeln!(p.out(), "\nEnter blind structure:")?;
    let small_blind = p.amount("  Small blind: $", Decimal::ZERO)?;
    let big_blind = p.amount("  Big blind: $", Decimal::ZERO)?;

    let mut session = GameSession::configure(opponents, small_blind, big_blind)?;
    session.update_pot(player_pot)?;
    session.update_opponent_pots(opponent_pots)?;
    session.set_hole_cards(hole)?;

    writeln!(p.out(), "\nGame setup complete!")?;
    write!(p.out(), "{}", format_game_state(&GameView::of_session(&session)))?;
    Ok(session)
}

fn play_hand(
    engine: &dyn DecisionEngine,
    session: &mut GameSession,
    p: &mut Prompter<'_>,
) -> Result<(), CliError> {
    ui::banner(p.out(), "NEW HAND", '=', 50)?;

    writeln!(p.out(), "\nEnter your new hole cards:")?;
    let hole = p.hole_cards("  First card: ", "  Second card: ")?;
    let player_pot = p.amount("\nEnter your current pot: $", Decimal::ZERO)?;

    writeln!(p.out(), "\nEnter opponent actions/calls:")?;
    let mut opponent_calls = Vec::with_capacity(session.opponent_count());
    for i in 0..session.opponent_count() {
        opponent_calls.push(p.amount(
            &format!("  Player {} call/bet amount: $", i + 2),
            Decimal::ZERO,
        )?);
    }

    let setup = HandSetup {
        hole_cards: hole.to_vec(),
        player_pot,
        opponent_calls,
    };
    let outcome = {
        let mut table = ConsoleTable {
            prompter: &mut *p,
            opponent_pots: session.opponent_pots(),
        };
        RoundController::new(engine).play_hand(session, setup, &mut table)?
    };

    match outcome.folded_on() {
        Some(_) => writeln!(p.out(), "\nHand ended.")?,
        None => writeln!(p.out(), "\nHand complete!")?,
    }
    session.record_hand(outcome.state());
    Ok(())
}

/// Console side of a running hand: prompts for community cards and prints
/// each street's state and recommendation.
struct ConsoleTable<'p, 'a> {
    prompter: &'p mut Prompter<'a>,
    opponent_pots: &'p [Decimal],
}

impl RoundIo for ConsoleTable<'_, '_> {
    type Error = CliError;

    fn next_card(&mut self, request: &CardRequest<'_>) -> Result<Card, CliError> {
        if request.index == 0 {
            writeln!(self.prompter.out(), "\n--- {} ---", request.street.label())?;
        }
        let prompt = match request.street {
            Street::Flop => {
                if request.index == 0 {
                    writeln!(self.prompter.out(), "Enter the flop ({} cards):", request.of)?;
                }
                format!("  Card {}: ", request.index + 1)
            }
            street => format!("Enter the {} card: ", street.label().to_lowercase()),
        };
        self.prompter.card(&prompt, request.used)
    }

    fn street_started(&mut self, snapshot: &HandSnapshot) -> Result<(), CliError> {
        let out = self.prompter.out();
        // Later streets print their header before the cards are requested.
        if snapshot.street == Street::Preflop {
            writeln!(out, "\n--- {} ---", snapshot.street.label())?;
        }
        write!(
            out,
            "{}",
            format_game_state(&GameView::of_hand(snapshot, self.opponent_pots))
        )?;
        Ok(())
    }

    fn decision_made(&mut self, _street: Street, decision: &Decision) -> Result<(), CliError> {
        write!(self.prompter.out(), "{}", format_decision(decision))?;
        Ok(())
    }
}
