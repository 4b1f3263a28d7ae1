//! From recognized lines to a user-facing answer.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use super::candidate::select;
use super::normalizer::sanitize;
use super::types::OcrOutcome;
use crate::calculator::{evaluate, format_result, validate};
use crate::config::RecognitionConfig;

/// How a recognition attempt ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum RecognitionStatus {
    /// The equation evaluated; holds the formatted value.
    Solved(String),
    /// The equation looked valid but evaluation failed; holds the reason.
    CannotSolve(String),
    /// The cleaned text is not an arithmetic expression.
    NotAnExpression,
    /// The engine ran but produced no usable text.
    NothingRecognized,
    /// The engine itself failed; holds its message.
    RecognitionFailed(String),
}

impl fmt::Display for RecognitionStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Solved(value) => write!(f, "Result: {value}"),
            Self::CannotSolve(reason) => write!(f, "Can't solve ({reason}), try writing more clearly"),
            Self::NotAnExpression => write!(f, "Not a valid math expression, try: 2+3, 5*4"),
            Self::NothingRecognized => write!(f, "Please draw numbers and operators clearly"),
            Self::RecognitionFailed(error) => write!(f, "Recognition failed: {error}"),
        }
    }
}

/// The cleaned equation together with how solving it went.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecognitionReport {
    pub equation: String,
    #[serde(flatten)]
    pub status: RecognitionStatus,
}

/// Select, clean, validate and evaluate the text in `outcome`.
///
/// Every failure becomes a [`RecognitionStatus`]; nothing here errors out.
pub fn solve_recognized(outcome: OcrOutcome, config: &RecognitionConfig) -> RecognitionReport {
    let lines = match outcome {
        OcrOutcome::Lines(lines) => lines,
        OcrOutcome::Failed(error) => {
            return RecognitionReport {
                equation: String::new(),
                status: RecognitionStatus::RecognitionFailed(error),
            };
        }
    };

    let selected = select(&lines);
    if selected.is_empty() {
        return RecognitionReport {
            equation: selected,
            status: RecognitionStatus::NothingRecognized,
        };
    }

    let equation = if config.sanitize {
        sanitize(&selected)
    } else {
        selected
    };
    debug!(%equation, "recognized equation");

    let status = if validate(&equation).is_err() {
        RecognitionStatus::NotAnExpression
    } else {
        match evaluate(&equation) {
            Ok(value) => RecognitionStatus::Solved(format_result(value, config.precision)),
            Err(err) => RecognitionStatus::CannotSolve(err.to_string()),
        }
    };

    RecognitionReport { equation, status }
}
