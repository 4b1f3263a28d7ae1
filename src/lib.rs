//! Recover and evaluate arithmetic expressions from handwriting recognition
//! output or keypad input.

pub mod calculator;
pub mod config;
pub mod keypad;
pub mod recognition;

pub use calculator::{CalcError, CalcResult, evaluate, evaluate_expression, format_result, is_valid};
pub use config::Config;
pub use keypad::{InputBuffer, KeyEvent, Status};
pub use recognition::{OcrOutcome, RecognitionReport, RecognizedLine, normalize, select};
