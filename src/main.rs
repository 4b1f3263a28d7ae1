//! inkcalc - arithmetic from handwriting recognition output
//!
//! Usage:
//!   inkcalc eval "2 + 3 * 4"          Evaluate an expression
//!   inkcalc keys "2++3="              Replay keypad presses
//!   inkcalc recognize lines.json      Solve a dump of recognized lines
//!   inkcalc preprocess in.png out.png Prepare a drawing for recognition

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use image::DynamicImage;
use serde_json::json;

use inkcalc::calculator::{copy_result, evaluate_expression};
use inkcalc::config::Config;
use inkcalc::keypad::{InputBuffer, parse_keys};
use inkcalc::recognition::{JsonLineRecognizer, RecognitionSession, preprocess};

#[derive(Parser)]
#[command(name = "inkcalc", version, about)]
struct Cli {
    /// Config file (defaults to <config dir>/inkcalc/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an expression
    Eval {
        /// Expression; whitespace and x/÷ operator spellings are accepted
        #[arg(required = true, num_args = 1..)]
        expression: Vec<String>,
        /// Copy a successful result to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Replay keypad presses: digits . + - * / ( ) < (backspace) C (clear) = (equals)
    Keys {
        sequence: String,
    },
    /// Solve recognized lines dumped as JSON
    Recognize {
        /// JSON array of {"text": ..., "region": {x, y, width, height} | null}
        lines: PathBuf,
    },
    /// Convert a drawing to high-contrast grayscale
    Preprocess {
        input: PathBuf,
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Eval { expression, copy } => {
            cmd_eval(&expression.join(" "), copy, cli.json, &config)
        }
        Commands::Keys { sequence } => cmd_keys(&sequence, cli.json, &config),
        Commands::Recognize { lines } => cmd_recognize(lines, cli.json, &config),
        Commands::Preprocess { input, output } => cmd_preprocess(&input, &output, &config),
    }
}

fn cmd_eval(expression: &str, copy: bool, as_json: bool, config: &Config) -> Result<()> {
    let result = evaluate_expression(expression, config.keypad.precision);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.display());
    }

    if copy && result.is_success() {
        copy_result(&result)?;
    }

    Ok(())
}

fn cmd_keys(sequence: &str, as_json: bool, config: &Config) -> Result<()> {
    let events = parse_keys(sequence)?;
    let mut buffer = InputBuffer::new(&config.keypad);
    let mut steps = Vec::with_capacity(events.len());

    for event in events {
        let accepted = buffer.press(event);
        if as_json {
            steps.push(json!({
                "key": event.to_string(),
                "accepted": accepted,
                "display": buffer.display(),
                "result": buffer.status(),
            }));
        } else {
            let marker = if accepted { ' ' } else { '!' };
            println!(
                "{marker}{:<3} {:<20} {}",
                event.to_string(),
                buffer.display(),
                buffer.status()
            );
        }
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(&steps)?);
    }

    Ok(())
}

fn cmd_recognize(lines: PathBuf, as_json: bool, config: &Config) -> Result<()> {
    let session = RecognitionSession::new(
        JsonLineRecognizer::new(lines),
        config.recognition.clone(),
    );
    // Replayed lines do not depend on the image.
    let report = session.solve(DynamicImage::new_luma8(1, 1));

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Recognized: {}", report.equation);
        println!("{}", report.status);
    }

    Ok(())
}

fn cmd_preprocess(input: &Path, output: &Path, config: &Config) -> Result<()> {
    let raw = image::open(input)
        .with_context(|| format!("Failed to open image {}", input.display()))?;
    preprocess(&raw, config.preprocess.contrast)
        .save(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognize_takes_only_a_line_dump() {
        let cli = Cli::try_parse_from(["inkcalc", "recognize", "lines.json"]).unwrap();
        assert!(matches!(cli.command, Commands::Recognize { .. }));

        assert!(
            Cli::try_parse_from(["inkcalc", "recognize", "lines.json", "--image", "d.png"])
                .is_err()
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["inkcalc", "eval", "2+2", "--json"]).unwrap();
        assert!(cli.json);
    }
}
