//! Tokenizer for frame notation.
//!
//! A notation is a comma separated list of single-character tokens:
//! a digit `0-9`, `x` for a strike, or `/` for a spare. Case is ignored and
//! surrounding whitespace is trimmed; whitespace inside the list is not.

use crate::error::{Error, Result};

/// A single token of frame notation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Pins(u8),
    Strike,
    Spare,
}

impl Mark {
    /// Parse one token
    pub fn from_token(token: &str) -> Result<Self> {
        let mut chars = token.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Err(Error::InvalidFormat);
        };

        match c {
            'x' | 'X' => Ok(Self::Strike),
            '/' => Ok(Self::Spare),
            '0'..='9' => Ok(Self::Pins(c as u8 - b'0')),
            _ => Err(Error::InvalidFormat),
        }
    }
}

/// Split a notation into marks without checking the frame shape
pub fn tokenize(notation: &str) -> Result<Vec<Mark>> {
    let trimmed = notation.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidFormat);
    }
    trimmed.split(',').map(Mark::from_token).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_token() {
        assert_eq!(Mark::from_token("x"), Ok(Mark::Strike));
        assert_eq!(Mark::from_token("X"), Ok(Mark::Strike));
        assert_eq!(Mark::from_token("/"), Ok(Mark::Spare));
        assert_eq!(Mark::from_token("0"), Ok(Mark::Pins(0)));
        assert_eq!(Mark::from_token("9"), Ok(Mark::Pins(9)));
    }

    #[test]
    fn test_from_token_rejects_multi_char() {
        assert_eq!(Mark::from_token("10"), Err(Error::InvalidFormat));
        assert_eq!(Mark::from_token(""), Err(Error::InvalidFormat));
        assert_eq!(Mark::from_token(" 5"), Err(Error::InvalidFormat));
        assert_eq!(Mark::from_token("xx"), Err(Error::InvalidFormat));
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(
            tokenize(" X,5,/\n"),
            Ok(vec![Mark::Strike, Mark::Pins(5), Mark::Spare])
        );
        assert_eq!(tokenize("3,4"), Ok(vec![Mark::Pins(3), Mark::Pins(4)]));
    }

    #[test]
    fn test_tokenize_rejects_garbage() {
        assert_eq!(tokenize("foo"), Err(Error::InvalidFormat));
        assert_eq!(tokenize("   "), Err(Error::InvalidFormat));
        assert_eq!(tokenize("3,"), Err(Error::InvalidFormat));
        assert_eq!(tokenize("3;4"), Err(Error::InvalidFormat));
        assert_eq!(tokenize("3, 4"), Err(Error::InvalidFormat));
    }
}
