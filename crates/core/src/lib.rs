//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the rules of Tap Match: pile generation, coverage,
//! the inventory and its triples, scoring, and the session state machine.
//! It has **no dependencies** on terminals, input devices or wall-clock timers:
//!
//! - **Deterministic**: Same seed produces an identical pile
//! - **Testable**: Time comes from an injectable [`Clock`], the countdown from [`GameSession::tick`]
//! - **Portable**: Front ends only need a snapshot and a [`PickResolver`]
//!
//! # Module Structure
//!
//! - [`pile`]: Tiles on the board and the ring-pile generator
//! - [`coverage`]: Free/covered computation
//! - [`inventory`]: Selection, triple detection and removal
//! - [`scoring`]: Triple, combo and clear-bonus points
//! - [`session`]: The `NotStarted → Running → Victory | Defeat` state machine
//! - [`rng`]: Seeded shuffling
//! - [`clock`]: Millisecond time sources
//! - [`pick`]: Pointer-to-tile resolution
//! - [`settings`]: Difficulty/time-limit settings and environment configuration
//! - [`snapshot`]: Serializable views of a session for HUDs and tools
//!
//! # Game Rules
//!
//! - **Pile**: `layers × 12` tiles in shrinking rings; kinds dealt in runs of three
//! - **Free tiles**: nothing higher within 0.9 on both horizontal axes
//! - **Inventory**: bounded; a full inventory with no triple loses the game
//! - **Triples**: +100, +50 if within 3 s of the previous triple
//! - **Board clear**: +200 and every remaining board tile of the matched kind is removed
//! - **Time limit**: optional countdown; running out loses the game and the score
//!
//! # Example
//!
//! ```
//! use tap_match_core::{GameSession, ManualClock, Phase, Settings};
//! use tap_match_core::types::{Difficulty, DifficultyConfig};
//!
//! let settings = Settings::new(Difficulty::Easy, false).with_seed(7);
//! let mut session = GameSession::new(settings, ManualClock::new(0));
//!
//! // One ring of a single kind: any three picks clear the whole board.
//! session.start_with_config(DifficultyConfig::new(1, 1, 3, 60));
//! let ids: Vec<_> = session.pile().free_tiles().take(3).map(|t| t.id).collect();
//! for id in ids {
//!     session.select(id).unwrap();
//! }
//!
//! assert_eq!(session.phase(), Phase::Victory);
//! assert_eq!(session.score(), 300);
//! ```

pub mod clock;
pub mod coverage;
pub mod error;
pub mod inventory;
pub mod notice;
pub mod pick;
pub mod pile;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod settings;
pub mod snapshot;

pub use tap_match_types as types;

// Re-export commonly used types for convenience
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use error::SelectError;
pub use inventory::{Inventory, RemovalResult, Slot};
pub use notice::{Notice, NoticeKind};
pub use pick::{PickResolver, RingPicker, RingPointer};
pub use pile::{Pile, Tile, TileState};
pub use rng::SimpleRng;
pub use scoring::{triple_score, ScoreResult};
pub use session::{DefeatCause, GameSession, Phase, SelectOutcome};
pub use settings::Settings;
pub use snapshot::{HudSnapshot, SessionSnapshot, TileSnapshot};
