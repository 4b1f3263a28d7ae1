use std::fmt;

use thiserror::Error;

use crate::calculator::Operator;

/// A single keypad press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    /// 0 through 9.
    Digit(u8),
    DecimalPoint,
    Operator(Operator),
    /// One key for both parentheses; which one is inserted depends on the buffer.
    ParenToggle,
    Backspace,
    Clear,
    Equals,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Unknown key: {0:?}")]
pub struct UnknownKey(pub char);

impl TryFrom<char> for KeyEvent {
    type Error = UnknownKey;

    /// Keys as typed in a replay string: digits, `.`, `+-*/`, `(` or `)` for
    /// the paren toggle, `<` for backspace, `C` for clear and `=` for equals.
    fn try_from(c: char) -> Result<Self, Self::Error> {
        if let Some(digit) = c.to_digit(10) {
            return Ok(Self::Digit(digit as u8));
        }
        if let Some(op) = Operator::from_char(c) {
            return Ok(Self::Operator(op));
        }
        match c {
            '.' => Ok(Self::DecimalPoint),
            '(' | ')' => Ok(Self::ParenToggle),
            '<' => Ok(Self::Backspace),
            'C' | 'c' => Ok(Self::Clear),
            '=' => Ok(Self::Equals),
            other => Err(UnknownKey(other)),
        }
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{d}"),
            Self::DecimalPoint => write!(f, "."),
            Self::Operator(op) => write!(f, "{op}"),
            Self::ParenToggle => write!(f, "()"),
            Self::Backspace => write!(f, "⌫"),
            Self::Clear => write!(f, "C"),
            Self::Equals => write!(f, "="),
        }
    }
}

/// Parse a replay string into key events, ignoring whitespace.
pub fn parse_keys(keys: &str) -> Result<Vec<KeyEvent>, UnknownKey> {
    keys.chars()
        .filter(|c| !c.is_whitespace())
        .map(KeyEvent::try_from)
        .collect()
}
