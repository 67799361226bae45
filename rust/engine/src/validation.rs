//! Pure validators for raw user input.
//!
//! Each function checks one token and returns a typed value or an
//! [`AdvisorError`]. None of them loop or prompt; interactive callers own the
//! retry loop and re-invoke until validation succeeds.

use rust_decimal::Decimal;

use crate::cards::{Card, Rank, Suit};
use crate::errors::AdvisorError;

/// Parse a two-character card token such as `AH`, `ks` or `2d`.
///
/// Surrounding whitespace is ignored and case is normalized to uppercase
/// before the rank and suit are checked.
///
/// # Examples
///
/// ```
/// use advisor_engine::validation::validate_card;
///
/// assert_eq!(validate_card(" th ").unwrap().to_string(), "TH");
/// assert!(validate_card("10H").is_err());
/// assert!(validate_card("AX").is_err());
/// ```
pub fn validate_card(token: &str) -> Result<Card, AdvisorError> {
    let invalid = || AdvisorError::InvalidCardFormat {
        token: token.to_string(),
    };
    let mut chars = token.trim().chars().map(|c| c.to_ascii_uppercase());
    let (Some(r), Some(s), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(invalid());
    };
    let rank = Rank::from_symbol(r).ok_or_else(invalid)?;
    let suit = Suit::from_symbol(s).ok_or_else(invalid)?;
    Ok(Card { suit, rank })
}

/// Parse a plain decimal amount that must be at least `minimum`.
///
/// Currency symbols are not accepted; `$` is an output-only decoration.
///
/// ```
/// use advisor_engine::validation::validate_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(validate_amount("12.50", Decimal::ZERO).unwrap().to_string(), "12.50");
/// assert!(validate_amount("$5", Decimal::ZERO).is_err());
/// assert!(validate_amount("-1", Decimal::ZERO).is_err());
/// ```
pub fn validate_amount(raw: &str, minimum: Decimal) -> Result<Decimal, AdvisorError> {
    match raw.trim().parse::<Decimal>() {
        Ok(amount) if amount >= minimum => Ok(amount),
        _ => Err(AdvisorError::InvalidAmount {
            raw: raw.to_string(),
            minimum,
        }),
    }
}

/// Parse an integer inside the inclusive range `[lo, hi]`.
pub fn validate_integer(raw: &str, lo: i64, hi: i64) -> Result<i64, AdvisorError> {
    match raw.trim().parse::<i64>() {
        Ok(value) if (lo..=hi).contains(&value) => Ok(value),
        _ => Err(AdvisorError::InvalidRange {
            raw: raw.to_string(),
            lo,
            hi,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn card_is_canonicalized_to_uppercase() {
        let card = validate_card("aS").unwrap();
        assert_eq!(card, Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(card.to_string(), "AS");
    }

    #[test]
    fn card_rejects_wrong_length() {
        for token in ["", "A", "AHS", "10H", "  "] {
            assert!(
                matches!(
                    validate_card(token),
                    Err(AdvisorError::InvalidCardFormat { .. })
                ),
                "token {:?} should be rejected",
                token
            );
        }
    }

    #[test]
    fn card_rejects_suit_before_rank() {
        assert!(validate_card("HA").is_err());
        assert!(validate_card("1H").is_err());
        assert!(validate_card("AZ").is_err());
    }

    #[test]
    fn card_error_keeps_original_token() {
        match validate_card("zz") {
            Err(AdvisorError::InvalidCardFormat { token }) => assert_eq!(token, "zz"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn amount_accepts_minimum_and_trims() {
        assert_eq!(validate_amount(" 0 ", dec!(0)).unwrap(), dec!(0));
        assert_eq!(validate_amount("2.5", dec!(2.5)).unwrap(), dec!(2.5));
    }

    #[test]
    fn amount_rejects_below_minimum_and_garbage() {
        assert!(matches!(
            validate_amount("1.99", dec!(2)),
            Err(AdvisorError::InvalidAmount { .. })
        ));
        assert!(validate_amount("ten", dec!(0)).is_err());
        assert!(validate_amount("", dec!(0)).is_err());
    }

    #[test]
    fn integer_respects_inclusive_bounds() {
        assert_eq!(validate_integer("1", 1, 8).unwrap(), 1);
        assert_eq!(validate_integer("8", 1, 8).unwrap(), 8);
        assert!(matches!(
            validate_integer("9", 1, 8),
            Err(AdvisorError::InvalidRange { lo: 1, hi: 8, .. })
        ));
        assert!(validate_integer("0", 1, 8).is_err());
        assert!(validate_integer("2.5", 1, 8).is_err());
    }
}
