//! Parsing and validation of rates typed at the prompt

use tracing::{instrument, trace};

use crate::domain::error::{DomainResult, InputError};

/// Words that end the interactive session at the first prompt.
pub const QUIT_COMMANDS: [&str; 3] = ["q", "quit", "exit"];

/// Trim and accept `,` as decimal separator.
pub fn normalize_decimal(text: &str) -> String {
    text.trim().replace(',', ".")
}

/// Parse a non-negative real number.
///
/// `NaN` and infinities parse as `f64` but are rejected as not a number.
#[instrument(level = "trace")]
pub fn parse_rate(text: &str) -> DomainResult<f64> {
    let normalized = normalize_decimal(text);
    let value: f64 = normalized
        .parse()
        .map_err(|_| InputError::Parse(text.trim().to_string()))?;
    if !value.is_finite() {
        return Err(InputError::Parse(text.trim().to_string()));
    }
    if value < 0.0 {
        return Err(InputError::Range(value));
    }
    trace!("parsed {:?} as {}", text, value);
    Ok(value)
}

pub fn is_quit_command(text: &str) -> bool {
    let text = text.trim().to_lowercase();
    QUIT_COMMANDS.contains(&text.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0.105", 0.105)]
    #[case("0,105", 0.105)]
    #[case("  2  ", 2.0)]
    #[case("2\n", 2.0)]
    #[case("1e3", 1000.0)]
    #[case("0", 0.0)]
    #[case(",5", 0.5)]
    fn test_parse_rate_accepts(#[case] input: &str, #[case] expected: f64) {
        assert_eq!(parse_rate(input), Ok(expected));
    }

    #[rstest]
    #[case("abc")]
    #[case("")]
    #[case("1,000.5")]
    #[case("NaN")]
    #[case("inf")]
    #[case("-infinity")]
    fn test_parse_rate_rejects_non_numbers(#[case] input: &str) {
        assert!(matches!(parse_rate(input), Err(InputError::Parse(_))));
    }

    #[rstest]
    #[case("-1", -1.0)]
    #[case("-0,5", -0.5)]
    fn test_parse_rate_rejects_negative(#[case] input: &str, #[case] value: f64) {
        assert_eq!(parse_rate(input), Err(InputError::Range(value)));
    }

    #[test]
    fn test_parse_rate_accepts_negative_zero() {
        assert!(parse_rate("-0").is_ok());
    }

    #[rstest]
    #[case("q", true)]
    #[case("Q", true)]
    #[case(" quit ", true)]
    #[case("EXIT", true)]
    #[case("qq", false)]
    #[case("0", false)]
    #[case("", false)]
    fn test_is_quit_command(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_quit_command(input), expected);
    }
}
