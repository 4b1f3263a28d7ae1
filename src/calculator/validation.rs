//! Expression validation.
//!
//! A cheap gate run before evaluation: it only checks the character set and
//! parenthesis nesting. Operator placement problems (`2+`, `*3`) are left for
//! the evaluator to report.

use lazy_static::lazy_static;
use regex::Regex;

use super::error::{CalcError, Result};

lazy_static! {
    /// Matches strings made only of digits, the four operators, dots and parentheses.
    static ref ARITHMETIC_CHARS: Regex = Regex::new(r"^[0-9+\-*/().]+$").unwrap();
}

/// Check whether `c` belongs to the arithmetic alphabet.
pub fn is_allowed_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/' | '.' | '(' | ')')
}

/// Check whether `expression` may be handed to the evaluator.
///
/// Fails closed: empty input is never valid.
pub fn is_valid(expression: &str) -> bool {
    validate(expression).is_ok()
}

/// Like [`is_valid`], but reports which rule failed.
pub fn validate(expression: &str) -> Result<()> {
    if expression.is_empty() {
        return Err(CalcError::EmptyInput);
    }

    if !ARITHMETIC_CHARS.is_match(expression) {
        let bad = expression
            .chars()
            .find(|&c| !is_allowed_char(c))
            .unwrap_or_default();
        return Err(CalcError::InvalidCharacter(bad));
    }

    let mut depth: i64 = 0;
    for c in expression.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {}
        }
        if depth < 0 {
            return Err(CalcError::UnbalancedParentheses);
        }
    }

    if depth != 0 {
        return Err(CalcError::UnbalancedParentheses);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_parentheses() {
        assert!(is_valid("(1+2)"));
        assert!(is_valid("((1+2)*(3-4))/5"));
        assert!(!is_valid("(1+2"));
        assert!(!is_valid("1+2)"));
        assert!(!is_valid(")1+2("));
    }

    #[test]
    fn test_empty_rejected() {
        assert!(!is_valid(""));
        assert_eq!(validate(""), Err(CalcError::EmptyInput));
    }

    #[test]
    fn test_foreign_characters_rejected() {
        assert_eq!(validate("2x3"), Err(CalcError::InvalidCharacter('x')));
        assert_eq!(validate("2 + 3"), Err(CalcError::InvalidCharacter(' ')));
        assert!(!is_valid("2^3"));
    }

    #[test]
    fn test_operator_placement_not_checked() {
        // These are the evaluator's problem.
        assert!(is_valid("+5"));
        assert!(is_valid("2+"));
        assert!(is_valid("1..2"));
        assert!(is_valid("()"));
    }
}
