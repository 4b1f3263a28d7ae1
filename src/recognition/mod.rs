//! Handwriting recognition path.
//!
//! Recognized lines come in from an external engine. One of them is chosen
//! (or all are joined), the text is normalized toward a canonical
//! expression, and the result is validated and evaluated.

mod candidate;
mod engine;
mod normalizer;
mod preprocess;
mod scoring;
mod solve;
mod types;

pub use candidate::{Candidate, select};
pub use engine::{JsonLineRecognizer, RecognitionSession, TextRecognizer};
pub use normalizer::{normalize, sanitize};
pub use preprocess::{DEFAULT_CONTRAST, preprocess};
pub use scoring::{CONFIDENCE_THRESHOLD, confidence};
pub use solve::{RecognitionReport, RecognitionStatus, solve_recognized};
pub use types::{OcrOutcome, RecognizedLine, Region};
