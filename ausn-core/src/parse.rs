//! Freeform numeric input handling.
//!
//! Users type amounts the way they think of them: `1 000 000`, `1000000`
//! or `1000000,50`. Normalization strips every whitespace character and
//! treats the comma as a decimal separator before parsing.

use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when user text cannot be read as a money amount.
#[derive(Debug, Error)]
#[error("invalid amount '{input}': {source}")]
pub struct ParseAmountError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Normalizes input for amount parsing: drops all whitespace and maps the
/// comma decimal separator to a dot.
fn normalize_amount_input(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect()
}

/// Parses user text into a [`Decimal`] amount.
///
/// Empty input, repeated separators and non-numeric characters are parse
/// errors, never panics; the dialogue re-prompts on error.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use ausn_core::parse::parse_amount;
///
/// assert_eq!(parse_amount("1 000 000").unwrap(), dec!(1000000));
/// assert_eq!(parse_amount("1000000,00").unwrap(), dec!(1000000));
/// assert!(parse_amount("abc").is_err());
/// ```
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    normalize_amount_input(s).parse().map_err(|e| {
        tracing::debug!(input = %s, "unparseable amount: {}", e);
        ParseAmountError {
            input: s.to_string(),
            source: e,
        }
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_amount_accepts_plain_digits() {
        assert_eq!(parse_amount("1000000").unwrap(), dec!(1000000));
    }

    #[test]
    fn parse_amount_ignores_interior_spaces() {
        assert_eq!(parse_amount("1 000 000").unwrap(), dec!(1000000));
    }

    #[test]
    fn parse_amount_treats_comma_as_decimal_separator() {
        assert_eq!(parse_amount("1000000,00").unwrap(), dec!(1000000));
        assert_eq!(parse_amount("12,5").unwrap(), dec!(12.5));
    }

    #[test]
    fn parse_amount_equivalent_spellings_agree() {
        let spellings = ["1 000 000", "1000000", "1000000,00"];

        for s in spellings {
            assert_eq!(parse_amount(s).unwrap(), dec!(1000000));
        }
    }

    #[test]
    fn parse_amount_trims_surrounding_whitespace() {
        assert_eq!(parse_amount("  500000\n").unwrap(), dec!(500000));
    }

    #[test]
    fn parse_amount_accepts_negative_numbers() {
        // Domain checks happen in the dialogue layer, not here.
        assert_eq!(parse_amount("-100").unwrap(), dec!(-100));
    }

    #[test]
    fn parse_amount_rejects_text() {
        assert!(parse_amount("abc").is_err());
    }

    #[test]
    fn parse_amount_rejects_empty_input() {
        assert!(parse_amount("").is_err());
        assert!(parse_amount("   ").is_err());
    }

    #[test]
    fn parse_amount_rejects_multiple_separators() {
        assert!(parse_amount("1,2,3").is_err());
        assert!(parse_amount("1.2.3").is_err());
    }

    #[test]
    fn parse_amount_rejects_mixed_digits_and_text() {
        assert!(parse_amount("100k").is_err());
    }
}
