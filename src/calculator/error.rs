//! Error kinds raised while validating or evaluating an expression.

use thiserror::Error;

/// Result type for validation and evaluation.
pub type Result<T> = std::result::Result<T, CalcError>;

/// Everything that can go wrong between a raw expression and a number.
///
/// These never cross the keypad or recognition boundary as failures; callers
/// turn them into a short status message instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// Nothing to validate or evaluate.
    #[error("Empty expression")]
    EmptyInput,

    /// Character outside the arithmetic alphabet.
    #[error("Invalid character: {0}")]
    InvalidCharacter(char),

    /// Nesting went negative, never closed, or a `)` had no matching `(`.
    #[error("Mismatched parentheses")]
    UnbalancedParentheses,

    /// A numeric literal that does not parse, e.g. `1.2.3`.
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    /// An operator was applied with fewer than two operands available.
    #[error("Missing operand")]
    InsufficientOperands,

    /// The operand stack did not end with exactly one value.
    #[error("Invalid expression")]
    MalformedExpression,

    #[error("Cannot divide by zero")]
    DivideByZero,

    /// The result overflowed to an infinity or NaN.
    #[error("Result is not a finite number")]
    NonFinite,
}
