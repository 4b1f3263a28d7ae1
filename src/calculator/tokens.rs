//! Tokenization of validated expressions.

use std::fmt;

use super::error::{CalcError, Result};

/// One of the four binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Binding strength; higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 1,
            Self::Multiply | Self::Divide => 2,
        }
    }

    /// Compute `lhs <op> rhs`.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide if rhs == 0.0 => Err(CalcError::DivideByZero),
            Self::Divide => Ok(lhs / rhs),
        }
    }
}

/// Check whether `c` is one of `+ - * /`.
pub fn is_operator_char(c: char) -> bool {
    Operator::from_char(c).is_some()
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// Digits and dots, e.g. `12.5` or `.5`
    Number(f64),

    Operator(Operator),

    /// '('
    LeftParen,

    /// ')'
    RightParen,
}

/// Split `expression` into tokens, left to right.
///
/// Numeric literals are munched greedily over digits and dots, so `1.2.3` is
/// one literal that fails to parse rather than two numbers.
pub fn tokenize(expression: &str) -> impl Iterator<Item = Result<Token>> + '_ {
    let mut chars = expression.char_indices().peekable();

    std::iter::from_fn(move || {
        let (start, ch) = chars.next()?;

        Some(match ch {
            '(' => Ok(Token::LeftParen),
            ')' => Ok(Token::RightParen),
            '0'..='9' | '.' => {
                let mut end = start + ch.len_utf8();
                while let Some(&(i, next)) = chars.peek() {
                    if !(next.is_ascii_digit() || next == '.') {
                        break;
                    }
                    end = i + next.len_utf8();
                    chars.next();
                }

                let literal = &expression[start..end];
                literal
                    .parse()
                    .map(Token::Number)
                    .map_err(|_| CalcError::InvalidNumber(literal.to_string()))
            }
            other => Operator::from_char(other)
                .map(Token::Operator)
                .ok_or(CalcError::InvalidCharacter(other)),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Result<Vec<Token>> {
        tokenize(input).collect()
    }

    #[test]
    fn test_numbers_are_munched() {
        assert_eq!(
            tokens("12.5+.5").unwrap(),
            vec![
                Token::Number(12.5),
                Token::Operator(Operator::Add),
                Token::Number(0.5),
            ]
        );
    }

    #[test]
    fn test_trailing_dot_is_a_number() {
        assert_eq!(tokens("3.").unwrap(), vec![Token::Number(3.0)]);
    }

    #[test]
    fn test_malformed_literals() {
        assert_eq!(
            tokens("1.2.3"),
            Err(CalcError::InvalidNumber("1.2.3".to_string()))
        );
        assert_eq!(tokens("."), Err(CalcError::InvalidNumber(".".to_string())));
    }

    #[test]
    fn test_unknown_character() {
        assert_eq!(tokens("2%3"), Err(CalcError::InvalidCharacter('%')));
    }

    #[test]
    fn test_precedence_order() {
        assert!(Operator::Multiply.precedence() > Operator::Add.precedence());
        assert_eq!(
            Operator::Divide.precedence(),
            Operator::Multiply.precedence()
        );
        assert_eq!(
            Operator::Subtract.precedence(),
            Operator::Add.precedence()
        );
    }
}
