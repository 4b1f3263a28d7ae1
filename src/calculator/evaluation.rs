//! Expression evaluation.
//!
//! A two-stack infix evaluator over `+ - * /`, parentheses and decimal
//! literals. Operands and pending operators live on separate stacks that
//! are local to each call; operators are applied as soon as precedence
//! allows, so no parse tree is ever built.

use serde::Serialize;
use tracing::debug;

use super::error::{CalcError, Result};
use super::formatting::format_result;
use super::tokens::{Operator, Token, tokenize};
use super::validation::validate;

/// Result of evaluating a calculator expression.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CalcResult {
    /// Successful calculation with a finite numeric result.
    Success {
        /// The expression after cleanup.
        expression: String,
        /// The numeric value.
        value: f64,
        /// Formatted for display.
        display_result: String,
    },
    /// Validation or evaluation failed.
    Error {
        /// The expression after cleanup.
        expression: String,
        #[serde(skip)]
        error: CalcError,
        /// Error message to display.
        message: String,
    },
}

impl CalcResult {
    /// Get the expression that was evaluated.
    pub fn expression(&self) -> &str {
        match self {
            Self::Success { expression, .. } => expression,
            Self::Error { expression, .. } => expression,
        }
    }

    /// Check if this is a successful result.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Get the display string (result or error message).
    pub fn display(&self) -> &str {
        match self {
            Self::Success { display_result, .. } => display_result,
            Self::Error { message, .. } => message,
        }
    }

    /// Get the clipboard string (only for successful results).
    pub fn clipboard(&self) -> Option<&str> {
        match self {
            Self::Success { display_result, .. } => Some(display_result),
            Self::Error { .. } => None,
        }
    }

    /// Get the error, if evaluation failed.
    pub fn error(&self) -> Option<&CalcError> {
        match self {
            Self::Success { .. } => None,
            Self::Error { error, .. } => Some(error),
        }
    }
}

/// Evaluate a user-typed expression and format the outcome.
///
/// Whitespace is ignored and the common operator spellings `x`, `X`, `×`
/// and `÷` are accepted before the expression is validated.
pub fn evaluate_expression(input: &str, precision: usize) -> CalcResult {
    let expression = canonical_operators(input);

    match evaluate(&expression) {
        Ok(value) => CalcResult::Success {
            display_result: format_result(value, precision),
            expression,
            value,
        },
        Err(error) => CalcResult::Error {
            message: error.to_string(),
            expression,
            error,
        },
    }
}

/// Strip whitespace and rewrite alternative operator spellings.
fn canonical_operators(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            'x' | 'X' | '×' => '*',
            '÷' => '/',
            other => other,
        })
        .collect()
}

/// Evaluate a validated expression to a finite number.
///
/// The expression is validated again here, so calling this on arbitrary
/// input is safe; it simply fails.
pub fn evaluate(expression: &str) -> Result<f64> {
    validate(expression)?;

    let value = evaluate_tokens(tokenize(expression)).inspect_err(|err| {
        debug!(expression, %err, "evaluation failed");
    })?;

    if !value.is_finite() {
        return Err(CalcError::NonFinite);
    }

    Ok(value)
}

fn evaluate_tokens(tokens: impl Iterator<Item = Result<Token>>) -> Result<f64> {
    let mut operands: Vec<f64> = Vec::new();
    let mut operators: Vec<Token> = Vec::new();

    for (index, token) in tokens.enumerate() {
        match token? {
            Token::Number(num) => operands.push(num),
            Token::LeftParen => operators.push(Token::LeftParen),
            Token::RightParen => loop {
                match operators.pop() {
                    Some(Token::LeftParen) => break,
                    Some(Token::Operator(op)) => apply(op, &mut operands)?,
                    _ => return Err(CalcError::UnbalancedParentheses),
                }
            },
            Token::Operator(incoming) => {
                // A leading minus negates everything after it.
                if index == 0 && incoming == Operator::Subtract {
                    operands.push(0.0);
                }

                while let Some(&Token::Operator(top)) = operators.last() {
                    if top.precedence() < incoming.precedence() {
                        break;
                    }
                    operators.pop();
                    apply(top, &mut operands)?;
                }
                operators.push(Token::Operator(incoming));
            }
        }
    }

    while let Some(token) = operators.pop() {
        match token {
            Token::Operator(op) => apply(op, &mut operands)?,
            _ => return Err(CalcError::UnbalancedParentheses),
        }
    }

    match operands.as_slice() {
        [value] => Ok(*value),
        _ => Err(CalcError::MalformedExpression),
    }
}

/// Pop the right then the left operand and push `left <op> right`.
fn apply(op: Operator, operands: &mut Vec<f64>) -> Result<()> {
    let rhs = operands.pop().ok_or(CalcError::InsufficientOperands)?;
    let lhs = operands.pop().ok_or(CalcError::InsufficientOperands)?;
    operands.push(op.apply(lhs, rhs)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::formatting::KEYPAD_PRECISION;

    #[test]
    fn test_precedence() {
        assert_eq!(evaluate("2+3*4"), Ok(14.0));
        assert_eq!(evaluate("(2+3)*4"), Ok(20.0));
        assert_eq!(evaluate("10/2-3"), Ok(2.0));
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(evaluate("10-4-3"), Ok(3.0));
        assert_eq!(evaluate("64/4/2"), Ok(8.0));
        assert_eq!(evaluate("2*3/4"), Ok(1.5));
    }

    #[test]
    fn test_nested_parentheses() {
        assert_eq!(evaluate("((1+2)*(3+4))/7"), Ok(3.0));
        assert_eq!(evaluate("2*(3+(4-1))"), Ok(12.0));
    }

    #[test]
    fn test_decimals() {
        assert_eq!(evaluate("1.5*2"), Ok(3.0));
        assert_eq!(evaluate(".5+.25"), Ok(0.75));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(evaluate("5/0"), Err(CalcError::DivideByZero));
        assert_eq!(evaluate("5/(2-2)"), Err(CalcError::DivideByZero));
    }

    #[test]
    fn test_leading_minus() {
        assert_eq!(evaluate("-5"), Ok(-5.0));
        assert_eq!(evaluate("-2*3"), Ok(-6.0));
        assert_eq!(evaluate("-2+3"), Ok(1.0));
        assert_eq!(evaluate("-(2+3)"), Ok(-5.0));
    }

    #[test]
    fn test_leading_plus_fails() {
        assert_eq!(evaluate("+5"), Err(CalcError::InsufficientOperands));
    }

    #[test]
    fn test_malformed_expressions() {
        assert_eq!(evaluate("2+"), Err(CalcError::InsufficientOperands));
        assert_eq!(evaluate("2(3)"), Err(CalcError::MalformedExpression));
        assert_eq!(evaluate("()"), Err(CalcError::MalformedExpression));
        assert_eq!(
            evaluate("1.2.3+1"),
            Err(CalcError::InvalidNumber("1.2.3".to_string()))
        );
    }

    #[test]
    fn test_invalid_input_rechecked() {
        assert_eq!(evaluate(""), Err(CalcError::EmptyInput));
        assert_eq!(evaluate("(1+2"), Err(CalcError::UnbalancedParentheses));
        assert_eq!(evaluate("1+2)"), Err(CalcError::UnbalancedParentheses));
        assert_eq!(evaluate("2a"), Err(CalcError::InvalidCharacter('a')));
    }

    #[test]
    fn test_unbalanced_tokens_without_validation() {
        let close = vec![Ok(Token::Number(1.0)), Ok(Token::RightParen)];
        assert_eq!(
            evaluate_tokens(close.into_iter()),
            Err(CalcError::UnbalancedParentheses)
        );

        let open = vec![Ok(Token::LeftParen), Ok(Token::Number(1.0))];
        assert_eq!(
            evaluate_tokens(open.into_iter()),
            Err(CalcError::UnbalancedParentheses)
        );
    }

    #[test]
    fn test_overflow_is_reported() {
        let huge = format!("{}*10", "9".repeat(308));
        assert_eq!(evaluate(&huge), Err(CalcError::NonFinite));
    }

    #[test]
    fn test_basic_evaluation() {
        let result = evaluate_expression("2 + 2", KEYPAD_PRECISION);
        assert!(result.is_success());
        assert_eq!(result.expression(), "2+2");
        assert_eq!(result.display(), "4");
        assert_eq!(result.clipboard(), Some("4"));
    }

    #[test]
    fn test_operator_spellings() {
        let result = evaluate_expression("6 x 7", KEYPAD_PRECISION);
        assert_eq!(result.display(), "42");

        let result = evaluate_expression("9÷2", KEYPAD_PRECISION);
        assert_eq!(result.display(), "4.5");
    }

    #[test]
    fn test_decimal_result() {
        let result = evaluate_expression("1 / 3", KEYPAD_PRECISION);
        assert!(result.is_success());
        assert_eq!(result.display(), "0.333333");
    }

    #[test]
    fn test_error_result() {
        let result = evaluate_expression("1 / 0", KEYPAD_PRECISION);
        assert!(!result.is_success());
        assert_eq!(result.display(), "Cannot divide by zero");
        assert_eq!(result.clipboard(), None);
        assert_eq!(result.error(), Some(&CalcError::DivideByZero));
    }
}
