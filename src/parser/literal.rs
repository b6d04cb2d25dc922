//! Integer literal decoding
//!
//! Accepts plain decimal (`42`, `1_000`) and sized or unsized based literals
//! (`8'hFF`, `'d10`, `4'sb1010`). Literals with unknown bits (`x`, `z`, `?`)
//! have no integer value and are rejected.

use thiserror::Error;

/// Why a literal could not be decoded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    #[error("'{0}' is not an integer literal")]
    NotAnInteger(String),

    #[error("'{0}' contains unknown bits")]
    UnknownBits(String),

    #[error("'{0}' does not fit in a 64-bit integer")]
    Overflow(String),

    #[error("'{literal}' does not fit in its declared size of {size} bits")]
    ExceedsSize { literal: String, size: u32 },
}

/// Decode a single integer literal token
pub fn parse_integer(text: &str) -> Result<i64, LiteralError> {
    match text.find('\'') {
        Some(quote) => parse_based(text, quote),
        None => parse_digits(text, 10, text),
    }
}

fn parse_based(text: &str, quote: usize) -> Result<i64, LiteralError> {
    let size = &text[..quote];
    let size = if size.is_empty() {
        None
    } else {
        let bits = parse_digits(size, 10, text)?;
        Some(u32::try_from(bits).map_err(|_| LiteralError::Overflow(text.to_string()))?)
    };

    let mut rest = &text[quote + 1..];
    if rest.starts_with(['s', 'S']) {
        rest = &rest[1..];
    }
    let mut chars = rest.chars();
    let radix = match chars.next().map(|c| c.to_ascii_lowercase()) {
        Some('b') => 2,
        Some('o') => 8,
        Some('d') => 10,
        Some('h') => 16,
        _ => return Err(LiteralError::NotAnInteger(text.to_string())),
    };
    let digits = chars.as_str();
    if digits.chars().any(|c| matches!(c, 'x' | 'X' | 'z' | 'Z' | '?')) {
        return Err(LiteralError::UnknownBits(text.to_string()));
    }

    let value = parse_digits(digits, radix, text)?;
    if let Some(size) = size {
        if size < 64 && (value as u64) >> size != 0 {
            return Err(LiteralError::ExceedsSize {
                literal: text.to_string(),
                size,
            });
        }
    }
    Ok(value)
}

fn parse_digits(digits: &str, radix: u32, literal: &str) -> Result<i64, LiteralError> {
    let cleaned: String = digits.chars().filter(|c| *c != '_').collect();
    if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_digit(radix)) {
        return Err(LiteralError::NotAnInteger(literal.to_string()));
    }
    i64::from_str_radix(&cleaned, radix).map_err(|_| LiteralError::Overflow(literal.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal() {
        assert_eq!(parse_integer("42"), Ok(42));
        assert_eq!(parse_integer("1_000"), Ok(1000));
        assert_eq!(parse_integer("0"), Ok(0));
    }

    #[test]
    fn test_based() {
        assert_eq!(parse_integer("8'hFF"), Ok(255));
        assert_eq!(parse_integer("'d10"), Ok(10));
        assert_eq!(parse_integer("4'b1010"), Ok(10));
        assert_eq!(parse_integer("'o17"), Ok(15));
        assert_eq!(parse_integer("16'sh7f_ff"), Ok(0x7fff));
    }

    #[test]
    fn test_unknown_bits() {
        assert_eq!(
            parse_integer("4'bx01z"),
            Err(LiteralError::UnknownBits("4'bx01z".to_string()))
        );
    }

    #[test]
    fn test_exceeds_size() {
        assert!(matches!(
            parse_integer("4'hFF"),
            Err(LiteralError::ExceedsSize { size: 4, .. })
        ));
    }

    #[test]
    fn test_not_an_integer() {
        assert!(matches!(parse_integer("WIDTH"), Err(LiteralError::NotAnInteger(_))));
        assert!(matches!(parse_integer("'q12"), Err(LiteralError::NotAnInteger(_))));
        assert!(matches!(parse_integer("8'b102"), Err(LiteralError::NotAnInteger(_))));
    }

    #[test]
    fn test_overflow() {
        assert!(matches!(
            parse_integer("99999999999999999999"),
            Err(LiteralError::Overflow(_))
        ));
    }
}
