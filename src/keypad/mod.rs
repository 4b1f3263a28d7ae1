//! Keypad input: key events and the buffer they edit.

mod buffer;
mod events;

pub use buffer::{InputBuffer, Status};
pub use events::{KeyEvent, UnknownKey, parse_keys};
