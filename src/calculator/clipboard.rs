//! Clipboard functionality for copying calculator results.

use anyhow::{Context, Result, bail};
use arboard::Clipboard;

use super::CalcResult;

/// Copy a successful result's value to the system clipboard.
///
/// Error results are refused; there is no number to copy.
pub fn copy_result(result: &CalcResult) -> Result<()> {
    let Some(text) = result.clipboard() else {
        bail!("Nothing to copy: {}", result.display());
    };

    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text.to_string())
        .context("Failed to copy to clipboard")
}
