use serde::{Deserialize, Serialize};

/// Bounding region of a recognized line, in image pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// One line of text as delivered by the recognition engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizedLine {
    pub text: String,
    /// Lines without a region are never scored, only concatenated.
    #[serde(default)]
    pub region: Option<Region>,
}

impl RecognizedLine {
    pub fn new(text: impl Into<String>, region: Option<Region>) -> Self {
        Self {
            text: text.into(),
            region,
        }
    }
}

/// What the recognition engine hands back for one image.
#[derive(Debug, Clone, PartialEq)]
pub enum OcrOutcome {
    /// Recognition ran; possibly zero lines.
    Lines(Vec<RecognizedLine>),
    /// Recognition failed with an engine-provided message.
    Failed(String),
}
