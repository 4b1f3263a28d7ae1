//! Picking the one line of recognized text that most likely holds the equation.

use tracing::debug;

use super::normalizer::normalize;
use super::scoring::{CONFIDENCE_THRESHOLD, confidence};
use super::types::RecognizedLine;

/// A scored line competing to represent the whole equation.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub text: String,
    pub confidence: f64,
}

impl Candidate {
    /// Score a line. Lines without a region are not candidates.
    pub fn from_line(line: &RecognizedLine) -> Option<Self> {
        line.region.map(|_| {
            let text = line.text.trim();
            Self {
                text: text.to_string(),
                confidence: confidence(text),
            }
        })
    }
}

/// Choose the text to treat as the equation, already normalized.
///
/// The first line with the highest score wins when that score is above
/// [`CONFIDENCE_THRESHOLD`]. Otherwise every non-empty line is joined with
/// spaces, trading precision for not losing anything.
pub fn select(lines: &[RecognizedLine]) -> String {
    let mut best: Option<Candidate> = None;

    for candidate in lines.iter().filter_map(Candidate::from_line) {
        debug!(text = %candidate.text, confidence = candidate.confidence, "scored line");
        let better = best
            .as_ref()
            .is_none_or(|current| candidate.confidence > current.confidence);
        if better {
            best = Some(candidate);
        }
    }

    if let Some(best) = best
        && !best.text.is_empty()
        && best.confidence > CONFIDENCE_THRESHOLD
    {
        let cleaned = normalize(&best.text);
        debug!(selected = %cleaned, confidence = best.confidence, "best line selected");
        return cleaned;
    }

    let joined = lines
        .iter()
        .map(|line| line.text.trim())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    let cleaned = normalize(&joined);
    debug!(joined = %cleaned, "no confident line, using all lines");
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recognition::Region;

    const REGION: Option<Region> = Some(Region {
        x: 0,
        y: 0,
        width: 100,
        height: 20,
    });

    #[test]
    fn test_confident_line_wins() {
        let lines = vec![
            RecognizedLine::new("23", REGION),
            RecognizedLine::new("2**3", REGION),
        ];
        assert_eq!(select(&lines), "2*3");
    }

    #[test]
    fn test_first_of_equal_scores_wins() {
        let lines = vec![
            RecognizedLine::new("2+3", REGION),
            RecognizedLine::new("4*5", REGION),
        ];
        assert_eq!(select(&lines), "2+3");
    }

    #[test]
    fn test_low_confidence_joins_all_lines() {
        let lines = vec![
            RecognizedLine::new("12", REGION),
            RecognizedLine::new("  ", REGION),
            RecognizedLine::new("+", None),
            RecognizedLine::new("3", REGION),
        ];
        assert_eq!(select(&lines), "12+3");
    }

    #[test]
    fn test_lines_without_region_are_not_scored() {
        let lines = vec![
            RecognizedLine::new("(1+2)", None),
            RecognizedLine::new("hello", REGION),
        ];
        // "hello" only earns the length bonus, so everything is joined.
        assert_eq!(select(&lines), "(1+2)he110");
    }

    #[test]
    fn test_scoring_uses_raw_text() {
        // "sOs" scores 0.2 raw even though it normalizes to digits.
        let lines = vec![RecognizedLine::new("sOs", REGION)];
        assert_eq!(select(&lines), "505");
    }

    #[test]
    fn test_no_lines() {
        assert_eq!(select(&[]), "");
    }
}
