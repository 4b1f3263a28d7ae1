//! Heuristic "looks like an equation" scoring for recognized lines.
//!
//! The bonuses and the acceptance threshold are fixed values; existing
//! recognition behavior depends on them exactly.

use lazy_static::lazy_static;
use regex::Regex;

/// Bonus for containing a digit.
const DIGIT_BONUS: f64 = 0.3;
/// Bonus for containing one of `+ - * /`.
const OPERATOR_BONUS: f64 = 0.3;
/// Bonus for containing a parenthesis.
const PAREN_BONUS: f64 = 0.2;
/// Bonus for a length within [`MIN_LENGTH`, `MAX_LENGTH`].
const LENGTH_BONUS: f64 = 0.2;

const MIN_LENGTH: usize = 3;
const MAX_LENGTH: usize = 15;

/// A single line is trusted only when its confidence is strictly above this.
pub const CONFIDENCE_THRESHOLD: f64 = 0.5;

lazy_static! {
    static ref HAS_DIGIT: Regex = Regex::new(r"[0-9]").unwrap();
    static ref HAS_OPERATOR: Regex = Regex::new(r"[+\-*/]").unwrap();
    static ref HAS_PAREN: Regex = Regex::new(r"[()]").unwrap();
}

/// Score raw (not yet normalized) text in `[0.0, 1.0]`.
pub fn confidence(text: &str) -> f64 {
    let mut score = 0.0;

    if HAS_DIGIT.is_match(text) {
        score += DIGIT_BONUS;
    }
    if HAS_OPERATOR.is_match(text) {
        score += OPERATOR_BONUS;
    }
    if HAS_PAREN.is_match(text) {
        score += PAREN_BONUS;
    }

    let length = text.chars().count();
    if (MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        score += LENGTH_BONUS;
    }

    score
}
