//! Tap Match (workspace facade crate).
//!
//! Exposes `tap_match::{core,engine,input,term,types}` while the implementation
//! lives in dedicated crates under `crates/`, plus the headless [`cli`] runner.

pub mod cli;

pub use tap_match_core as core;
pub use tap_match_engine as engine;
pub use tap_match_input as input;
pub use tap_match_term as term;
pub use tap_match_types as types;
