//! Interactive prompts with retry loops.
//!
//! [`Prompter`] writes a prompt, reads a line, and hands it to one of the
//! engine validators. On failure it prints the matching retry message and asks
//! again. Errors that re-asking cannot fix (see
//! [`AdvisorError::is_recoverable`]) and I/O failures escape the loop.

use advisor_engine::cards::Card;
use advisor_engine::errors::AdvisorError;
use advisor_engine::validation::{validate_amount, validate_card, validate_integer};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};

use crate::error::CliError;
use crate::io_utils::read_line;
use crate::ui;

pub struct Prompter<'a> {
    input: &'a mut dyn BufRead,
    out: &'a mut dyn Write,
}

impl<'a> Prompter<'a> {
    pub fn new(input: &'a mut dyn BufRead, out: &'a mut dyn Write) -> Self {
        Self { input, out }
    }

    /// Output stream shared with the prompts.
    pub fn out(&mut self) -> &mut dyn Write {
        &mut *self.out
    }

    /// Ask until `parse` accepts the line.
    pub fn ask<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, AdvisorError>,
    ) -> Result<T, CliError> {
        loop {
            write!(self.out, "{}", prompt)?;
            self.out.flush()?;
            let Some(line) = read_line(self.input)? else {
                writeln!(self.out)?;
                return Err(AdvisorError::InputClosed.into());
            };
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) if !e.is_recoverable() => return Err(e.into()),
                Err(e) => {
                    tracing::debug!(input = %line, error = %e, "input rejected");
                    writeln!(self.out, "{}", ui::retry_message(&e))?;
                }
            }
        }
    }

    /// Ask for a card that is not already in `used`.
    pub fn card(&mut self, prompt: &str, used: &[Card]) -> Result<Card, CliError> {
        self.ask(prompt, |raw| {
            let card = validate_card(raw)?;
            if used.contains(&card) {
                return Err(AdvisorError::DuplicateCard { card });
            }
            Ok(card)
        })
    }

    pub fn amount(&mut self, prompt: &str, minimum: Decimal) -> Result<Decimal, CliError> {
        self.ask(prompt, |raw| validate_amount(raw, minimum))
    }

    pub fn integer(&mut self, prompt: &str, lo: i64, hi: i64) -> Result<i64, CliError> {
        self.ask(prompt, |raw| validate_integer(raw, lo, hi))
    }

    /// Ask for two distinct hole cards.
    pub fn hole_cards(&mut self, first: &str, second: &str) -> Result<[Card; 2], CliError> {
        let a = self.card(first, &[])?;
        let b = self.card(second, &[a])?;
        Ok([a, b])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Cursor;

    fn run<T>(input: &str, f: impl FnOnce(&mut Prompter<'_>) -> T) -> (T, String) {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut out = Vec::new();
        let result = {
            let mut p = Prompter::new(&mut reader, &mut out);
            f(&mut p)
        };
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn card_reprompts_until_valid() {
        let (card, out) = run("10h\nzz\nqd\n", |p| p.card("Card: ", &[]));
        assert_eq!(card.unwrap().to_string(), "QD");
        assert_eq!(out.matches("Card: ").count(), 3);
        assert_eq!(out.matches("Invalid card format").count(), 2);
    }

    #[test]
    fn card_rejects_card_in_play() {
        let used = ["AH".parse().unwrap()];
        let (card, out) = run("ah\nAS\n", |p| p.card("Card: ", &used));
        assert_eq!(card.unwrap().to_string(), "AS");
        assert!(out.contains("Card AH is already in play."));
    }

    #[test]
    fn amount_reprompts_on_currency_symbol_and_negative() {
        let (amount, out) = run("$5\n-2\n5.25\n", |p| p.amount("Pot: $", dec!(0)));
        assert_eq!(amount.unwrap(), dec!(5.25));
        assert_eq!(
            out.matches("Invalid amount. Please enter a number >= 0").count(),
            2
        );
    }

    #[test]
    fn integer_respects_range() {
        let (n, out) = run("9\n0\n3\n", |p| p.integer("n: ", 1, 8));
        assert_eq!(n.unwrap(), 3);
        assert_eq!(out.matches("between 1 and 8").count(), 2);
    }

    #[test]
    fn closed_input_is_interrupted() {
        let (res, _) = run("bad\n", |p| p.integer("n: ", 1, 4));
        assert!(matches!(res, Err(CliError::Interrupted(_))));
    }

    #[test]
    fn unrecoverable_parse_error_is_not_retried() {
        let (res, out) = run("oracle\npassive\n", |p| {
            p.ask("Engine: ", |raw| {
                advisor_ai::create_engine(raw, None).map(|e| e.name().to_string())
            })
        });
        assert!(matches!(res, Err(CliError::Config(_))));
        assert_eq!(out.matches("Engine: ").count(), 1);
    }

    #[test]
    fn hole_cards_must_differ() {
        let (hole, out) = run("AH\nah\nKS\n", |p| p.hole_cards("1: ", "2: "));
        let hole = hole.unwrap();
        assert_eq!(hole[0].to_string(), "AH");
        assert_eq!(hole[1].to_string(), "KS");
        assert!(out.contains("already in play"));
    }
}
