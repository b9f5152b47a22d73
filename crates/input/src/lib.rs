//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework beyond `crossterm` events.
//! It maps key events into [`crate::types::Command`]s; the binary decides
//! what each command does to the session.

pub mod map;

pub use tap_match_types as types;

pub use map::{handle_key_event, should_quit};
