//! The input adapter: turns raw user-supplied text into tree keys. Rejection
//! happens here, before any tree operation runs, so malformed input can never
//! mutate tree state.

use thiserror::Error;

/// Rejection of raw input that cannot become a key. The display text is the
/// user-facing validation message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The raw text was not a whole number. Carries the offending input.
    #[error("Please enter a valid number.")]
    NotANumber(String),
}

/// Parses raw text into a key. Surrounding whitespace is trimmed; the rest
/// must be a signed decimal integer in full - unlike `parseInt`-style prefix
/// parsing, trailing junk is rejected.
///
/// # Examples
///
/// ```
/// use treeviz::input::{parse_key, InputError};
///
/// assert_eq!(parse_key(" 42 "), Ok(42));
/// assert_eq!(parse_key("-7"), Ok(-7));
/// assert_eq!(
///     parse_key("42abc"),
///     Err(InputError::NotANumber("42abc".to_string()))
/// );
/// ```
pub fn parse_key(raw: &str) -> Result<i64, InputError> {
    raw.trim()
        .parse()
        .map_err(|_| InputError::NotANumber(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trimmed_integers() {
        assert_eq!(parse_key("5"), Ok(5));
        assert_eq!(parse_key("  -13\n"), Ok(-13));
        assert_eq!(parse_key("+8"), Ok(8));
    }

    #[test]
    fn rejects_malformed_input() {
        for raw in ["", "   ", "abc", "12.5", "0x10", "9 9"] {
            assert_eq!(parse_key(raw), Err(InputError::NotANumber(raw.to_string())));
        }
    }

    #[test]
    fn validation_message_matches_the_prompt() {
        let err = parse_key("nope").unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid number.");
    }
}
