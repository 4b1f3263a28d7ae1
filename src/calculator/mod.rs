//! Calculator core.
//!
//! This module provides functionality to:
//! - Validate arithmetic expressions
//! - Evaluate them with operator precedence
//! - Format results for display
//! - Copy results to the clipboard

mod clipboard;
mod error;
mod evaluation;
mod formatting;
mod tokens;
mod validation;

pub use clipboard::copy_result;
pub use error::{CalcError, Result};
pub use evaluation::{CalcResult, evaluate, evaluate_expression};
pub use formatting::{KEYPAD_PRECISION, RECOGNITION_PRECISION, format_result};
pub use tokens::{Operator, Token, is_operator_char, tokenize};
pub use validation::{is_allowed_char, is_valid, validate};
