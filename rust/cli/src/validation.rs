//! Parsing of menu selections.
//!
//! Card, amount and integer checks live in `advisor_engine::validation`; this
//! module maps a validated number onto the main-menu options.

use advisor_engine::errors::AdvisorError;
use advisor_engine::validation::validate_integer;

/// Options of the main menu, numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    SetupGame,
    PlayHand,
    ViewState,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 4] = [
        MenuChoice::SetupGame,
        MenuChoice::PlayHand,
        MenuChoice::ViewState,
        MenuChoice::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::SetupGame => "Setup New Game",
            MenuChoice::PlayHand => "Play Hand",
            MenuChoice::ViewState => "View Current Game State",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// Parse a menu selection between 1 and 4.
///
/// ```rust
/// # use advisor_cli::validation::{parse_menu_choice, MenuChoice};
/// assert_eq!(parse_menu_choice(" 2 ").unwrap(), MenuChoice::PlayHand);
/// assert!(parse_menu_choice("5").is_err());
/// ```
pub fn parse_menu_choice(raw: &str) -> Result<MenuChoice, AdvisorError> {
    let n = validate_integer(raw, 1, MenuChoice::ALL.len() as i64)?;
    Ok(MenuChoice::ALL[(n - 1) as usize])
}
