//! The incremental input buffer behind the keypad.
//!
//! Every key press is one transition. Digit, decimal point, backspace and
//! equals re-evaluate the buffer and refresh the live result; operator and
//! parenthesis presses only edit the text.

use std::fmt;

use serde::Serialize;
use tracing::trace;

use super::events::KeyEvent;
use crate::calculator::{evaluate, format_result, is_operator_char, is_valid};
use crate::config::KeypadConfig;

/// What the result line shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Status {
    /// Nothing entered.
    Ready,
    /// The buffer evaluated to this formatted value.
    Value(String),
    /// The buffer failed validation.
    Invalid,
    /// The buffer validated but could not be evaluated.
    Error,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Ready => write!(f, "Ready"),
            Self::Value(value) => write!(f, "= {value}"),
            Self::Invalid => write!(f, "Invalid expression"),
            Self::Error => write!(f, "Error"),
        }
    }
}

/// Text being built on the keypad plus the live result.
#[derive(Debug, Clone)]
pub struct InputBuffer {
    characters: String,
    last_was_operator: bool,
    status: Status,
    allow_leading_paren: bool,
    precision: usize,
}

impl Default for InputBuffer {
    fn default() -> Self {
        Self::new(&KeypadConfig::default())
    }
}

impl InputBuffer {
    pub fn new(config: &KeypadConfig) -> Self {
        Self {
            characters: String::new(),
            last_was_operator: false,
            status: Status::Ready,
            allow_leading_paren: config.allow_leading_paren,
            precision: config.precision,
        }
    }

    /// The raw buffer contents.
    pub fn as_str(&self) -> &str {
        &self.characters
    }

    /// The expression line: the buffer, or `0` when empty.
    pub fn display(&self) -> &str {
        if self.characters.is_empty() {
            "0"
        } else {
            &self.characters
        }
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn last_was_operator(&self) -> bool {
        self.last_was_operator
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Apply one key press. Returns `false` if the press was rejected and
    /// nothing changed.
    pub fn press(&mut self, event: KeyEvent) -> bool {
        let accepted = match event {
            KeyEvent::Digit(digit) => {
                let Some(c) = char::from_digit(u32::from(digit), 10) else {
                    return false;
                };
                self.push_operand(c);
                true
            }
            KeyEvent::DecimalPoint => {
                self.push_operand('.');
                true
            }
            KeyEvent::Operator(op) => self.push_operator(op.symbol()),
            KeyEvent::ParenToggle => {
                let open = self.characters.matches('(').count();
                let close = self.characters.matches(')').count();
                let paren = if open <= close { '(' } else { ')' };
                self.push_operator(paren)
            }
            KeyEvent::Backspace => self.backspace(),
            KeyEvent::Clear => {
                self.clear();
                true
            }
            KeyEvent::Equals => {
                self.refresh();
                true
            }
        };

        trace!(
            %event,
            accepted,
            buffer = %self.characters,
            status = %self.status,
            "keypad edit"
        );
        accepted
    }

    fn push_operand(&mut self, c: char) {
        self.characters.push(c);
        self.last_was_operator = false;
        self.refresh();
    }

    /// Append an operator or parenthesis, replacing a trailing operator.
    fn push_operator(&mut self, c: char) -> bool {
        if self.characters.is_empty() && !self.may_start_with(c) {
            return false;
        }

        if self.last_was_operator {
            self.characters.pop();
        }

        self.characters.push(c);
        self.last_was_operator = true;
        true
    }

    fn may_start_with(&self, c: char) -> bool {
        c == '-' || (self.allow_leading_paren && matches!(c, '(' | ')'))
    }

    fn backspace(&mut self) -> bool {
        if self.characters.pop().is_none() {
            return false;
        }

        match self.characters.chars().last() {
            None => {
                self.last_was_operator = false;
                self.status = Status::Ready;
            }
            Some(last) => {
                self.last_was_operator = is_operator_char(last);
                self.refresh();
            }
        }
        true
    }

    /// Empty the buffer and go back to idle.
    pub fn clear(&mut self) {
        self.characters.clear();
        self.last_was_operator = false;
        self.status = Status::Ready;
    }

    /// Re-evaluate the buffer into the live result.
    fn refresh(&mut self) {
        self.status = if self.characters.is_empty() {
            Status::Ready
        } else if !is_valid(&self.characters) {
            Status::Invalid
        } else {
            match evaluate(&self.characters) {
                Ok(value) => Status::Value(format_result(value, self.precision)),
                Err(_) => Status::Error,
            }
        };
    }
}
