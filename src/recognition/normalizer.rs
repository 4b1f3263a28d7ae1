//! Cleanup of raw handwriting recognition text.
//!
//! Recognition engines confuse digits with lookalike letters and produce
//! doubled or stray operators. [`normalize`] rewrites that text toward a
//! canonical expression in three sequential passes. The passes are order
//! dependent: operator cleanup assumes the substitution table already ran,
//! and the adjacency collapse assumes doubled operators are already gone.
//!
//! The output may still be invalid; that is for the validator to decide.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::calculator::{is_allowed_char, is_operator_char};

lazy_static! {
    /// Two identical operators in a row.
    static ref DOUBLED_OPERATOR: Regex = Regex::new(r"\+\+|--|\*\*|//").unwrap();

    /// Two identical operators or two dots in a row.
    static ref DOUBLED_SYMBOL: Regex = Regex::new(r"\+\+|--|\*\*|//|\.\.").unwrap();
}

/// Normalize raw recognized text into an expression candidate.
///
/// Never fails; characters with no mapping pass through untouched.
pub fn normalize(raw: &str) -> String {
    let substituted = substitute_characters(raw);
    let cleaned = clean_operators(&substituted);
    let collapsed = collapse_adjacent_operators(&cleaned);
    debug!(raw, normalized = %collapsed, "normalized recognized text");
    collapsed
}

/// Map a single character through the confusion table.
///
/// `None` means the character is dropped.
fn substitute(c: char) -> Option<char> {
    let mapped = match c {
        'l' | 'L' | '|' | '!' | 'I' | 'i' => '1',
        'o' | 'O' => '0',
        's' | 'S' => '5',
        'z' | 'Z' => '2',
        'a' | 'A' => '4',
        'B' => '8',
        'b' => '6',
        'g' | 'q' => '9',
        't' | 'T' | 'Y' => '7',
        // Not a recognition confusion; read as the multiplication sign.
        'x' | 'X' | '×' => '*',
        '÷' | ':' => '/',
        '{' | '[' => '(',
        '}' | ']' => ')',
        '\'' | '"' | '`' => return None,
        other => other,
    };
    Some(mapped)
}

/// Pass 1: drop whitespace and apply the confusion table.
fn substitute_characters(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .filter_map(substitute)
        .collect()
}

/// Pass 2: halve doubled operators, drop `=`, and read `,`/`;` as decimal points.
fn clean_operators(text: &str) -> String {
    DOUBLED_OPERATOR
        .replace_all(text, |caps: &regex::Captures| caps[0][..1].to_string())
        .chars()
        .filter(|&c| c != '=')
        .map(|c| match c {
            ',' | ';' => '.',
            other => other,
        })
        .collect()
}

/// Pass 3: in every run of adjacent operators keep only the last one.
fn collapse_adjacent_operators(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        let next_is_operator = chars.peek().is_some_and(|&next| is_operator_char(next));
        if is_operator_char(c) && next_is_operator {
            continue;
        }
        result.push(c);
    }

    result
}

/// Reduce text to the arithmetic alphabet.
///
/// Deletes every character the validator would reject, then halves doubled
/// operators and doubled dots.
pub fn sanitize(text: &str) -> String {
    let kept: String = text.chars().filter(|&c| is_allowed_char(c)).collect();
    DOUBLED_SYMBOL
        .replace_all(&kept, |caps: &regex::Captures| caps[0][..1].to_string())
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_removed() {
        assert_eq!(normalize(" 2 +\t3\n"), "2+3");
    }

    #[test]
    fn test_lookalike_letters() {
        assert_eq!(normalize("l2+O"), "12+0");
        assert_eq!(normalize("Is+zA"), "15+24");
        assert_eq!(normalize("Bb*gq"), "86*99");
        assert_eq!(normalize("tTY"), "777");
        assert_eq!(normalize("|!i"), "111");
    }

    #[test]
    fn test_brackets_become_parentheses() {
        assert_eq!(normalize("{2+3]*[4}"), "(2+3)*(4)");
    }

    #[test]
    fn test_quotes_deleted_and_colon_divides() {
        assert_eq!(normalize("8:'2\"`"), "8/2");
    }

    #[test]
    fn test_operator_spellings() {
        assert_eq!(normalize("3x4"), "3*4");
        assert_eq!(normalize("9÷3"), "9/3");
    }

    #[test]
    fn test_doubled_operators_collapse() {
        assert_eq!(normalize("2++3"), "2+3");
        assert_eq!(normalize("2**3"), "2*3");
        assert_eq!(normalize("8//2"), "8/2");
        assert_eq!(normalize("5--1"), "5-1");
    }

    #[test]
    fn test_equals_and_decimal_separators() {
        assert_eq!(normalize("2,5+1;5="), "2.5+1.5");
    }

    #[test]
    fn test_adjacent_operators_keep_last() {
        assert_eq!(normalize("5*-3"), "5-3");
        assert_eq!(normalize("5+*/2"), "5/2");
        assert_eq!(normalize("+-2"), "-2");
    }

    #[test]
    fn test_unmapped_passthrough() {
        assert_eq!(normalize("2^3"), "2^3");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_idempotent_on_clean_input() {
        for input in ["2+3*4", "(1+2)/3", "-5", "1.5-.5", "2+-3", "1..2", "((", "*/"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "input {input:?}");
        }
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize("2#+3"), "2+3");
        assert_eq!(sanitize("1..5^2"), "1.52");
        assert_eq!(sanitize("2+&+3"), "2+3");
    }
}
