//! Automated play on top of the core session.
//!
//! - [`suggest`] / [`suggest_pick`]: the hint shown to a human player
//! - [`autoplay`]: drive a running session to its end with the same policy
//!
//! The policy only sees what a player sees (free tiles and the inventory), so
//! it can lose.

pub mod autoplay;

pub use tap_match_core as core;
pub use tap_match_types as types;

pub use autoplay::{autoplay, suggest, suggest_pick, AutoplayError, AutoplayReport};
