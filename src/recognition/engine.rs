//! The seam to the external text recognition engine.
//!
//! Engines report asynchronously: they are handed an image and a reply
//! channel and send exactly one [`OcrOutcome`] when they are done, from
//! whatever thread they like. [`RecognitionSession`] waits for that outcome
//! and runs the solve path on it.

use std::fs;
use std::path::{Path, PathBuf};
use std::thread;

use anyhow::{Context, Result};
use image::DynamicImage;
use tracing::{debug, warn};

use super::solve::{RecognitionReport, solve_recognized};
use super::types::{OcrOutcome, RecognizedLine};
use crate::config::RecognitionConfig;

/// A text recognition engine.
pub trait TextRecognizer: Send + Sync {
    /// Start recognizing `image` and send the outcome on `reply` once.
    fn recognize(&self, image: DynamicImage, reply: flume::Sender<OcrOutcome>);
}

/// A recognizer that replays lines previously dumped to a JSON file.
///
/// The file holds an array of `{"text": ..., "region": {...} | null}`. The
/// image is ignored.
#[derive(Debug, Clone)]
pub struct JsonLineRecognizer {
    path: PathBuf,
}

impl JsonLineRecognizer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(path: &Path) -> Result<Vec<RecognizedLine>> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
    }
}

impl TextRecognizer for JsonLineRecognizer {
    fn recognize(&self, _image: DynamicImage, reply: flume::Sender<OcrOutcome>) {
        let path = self.path.clone();
        thread::spawn(move || {
            let outcome = match Self::load(&path) {
                Ok(lines) => OcrOutcome::Lines(lines),
                Err(err) => OcrOutcome::Failed(format!("{err:#}")),
            };
            if reply.send(outcome).is_err() {
                debug!("recognition result dropped, session went away");
            }
        });
    }
}

/// Owns a recognizer and turns images into solved reports.
pub struct RecognitionSession<R: TextRecognizer> {
    recognizer: R,
    config: RecognitionConfig,
}

impl<R: TextRecognizer> RecognitionSession<R> {
    pub fn new(recognizer: R, config: RecognitionConfig) -> Self {
        Self { recognizer, config }
    }

    /// Recognize `image` and solve whatever comes back.
    ///
    /// Blocks until the engine replies. An engine that drops its sender
    /// without replying is reported as a failed recognition.
    pub fn solve(&self, image: DynamicImage) -> RecognitionReport {
        let (tx, rx) = flume::bounded(1);
        self.recognizer.recognize(image, tx);

        let outcome = rx.recv().unwrap_or_else(|_| {
            warn!("recognizer finished without a result");
            OcrOutcome::Failed("Recognizer stopped without a result".to_string())
        });

        solve_recognized(outcome, &self.config)
    }
}
