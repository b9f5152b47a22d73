//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, terminal rendering, automated play).
//!
//! # Pile Geometry
//!
//! Tiles are stacked in concentric rings, one ring per layer:
//!
//! - **Tiles per layer**: 12, at equal angular steps
//! - **Base radius**: 3.0, shrinking by 0.3 per layer
//! - **Layer height**: 0.4 per layer
//!
//! # Coverage Tolerances
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `VERTICAL_TOLERANCE` | 0.2 | A coverer must sit this much higher |
//! | `HORIZONTAL_TOLERANCE` | 0.9 | Per-axis footprint overlap (x and z) |
//!
//! # Scoring and Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TRIPLE_POINTS` | 100 | Every removed triple |
//! | `COMBO_BONUS` | 50 | Triple within `COMBO_WINDOW_MS` of the previous one |
//! | `CLEAR_BONUS` | 200 | Remaining same-kind board tiles swept away |
//! | `COMBO_WINDOW_MS` | 3000 | Combo window |
//! | `COUNTDOWN_STEP_MS` | 1000 | One countdown tick |
//! | `NOTICE_MS` | 2000 | Default transient message duration |
//!
//! # Examples
//!
//! ```
//! use tap_match_types::{Command, Difficulty, DifficultyConfig, TileKind};
//!
//! let difficulty = Difficulty::from_str("hard").unwrap();
//! let config = DifficultyConfig::preset(difficulty);
//! assert_eq!(config.layers, 7);
//! assert_eq!(config.inventory_size, 7);
//!
//! assert_eq!(TileKind(0).glyph(), 'A');
//! assert_eq!(Command::from_str("select"), Some(Command::Select));
//! ```

/// Tiles placed on each ring of the pile
pub const TILES_PER_LAYER: usize = 12;

/// Radius of the bottom ring
pub const BASE_RADIUS: f32 = 3.0;

/// Radius lost by each successive layer
pub const RADIUS_SHRINK: f32 = 0.3;

/// Vertical distance between two layers
pub const LAYER_HEIGHT: f32 = 0.4;

/// A covering tile must be strictly higher than this above the covered one
pub const VERTICAL_TOLERANCE: f32 = 0.2;

/// Per-axis horizontal overlap below which a higher tile covers a lower one
pub const HORIZONTAL_TOLERANCE: f32 = 0.9;

/// Points for every removed triple
pub const TRIPLE_POINTS: u32 = 100;

/// Extra points when a triple follows the previous one within the combo window
pub const COMBO_BONUS: u32 = 50;

/// Extra points when a triple sweeps the rest of its kind off the board
pub const CLEAR_BONUS: u32 = 200;

/// Combo window in milliseconds
pub const COMBO_WINDOW_MS: u64 = 3000;

/// Countdown resolution (one second)
pub const COUNTDOWN_STEP_MS: u32 = 1000;

/// Default display duration for transient messages
pub const NOTICE_MS: u32 = 2000;

/// Display duration for the idle welcome message
pub const WELCOME_NOTICE_MS: u32 = 2500;

/// Hard upper bound for any inventory capacity
pub const MAX_INVENTORY_SIZE: usize = 8;

/// Fixed timestep interval for the terminal loop (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Tile colors as 0xRRGGBB, indexed by tile kind
pub const TILE_COLORS: [u32; 16] = [
    0xff6b6b, 0x4ecdc4, 0x45b7d1, 0xf9ca24, 0x6c5ce7, 0xa29bfe, 0xfd79a8, 0xe17055, 0x00b894,
    0x0984e3, 0xfdcb6e, 0xd63031, 0xe84393, 0x2d3436, 0x00cec9, 0xff7675,
];

/// Largest number of distinct kinds a pile may use (one per palette entry)
pub const MAX_TILE_KINDS: u8 = TILE_COLORS.len() as u8;


/// Category of a tile. Three tiles of the same kind form a triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileKind(pub u8);

impl TileKind {
    /// Display color (0xRRGGBB). Wraps around the palette, so every kind has a color.
    pub fn color(self) -> u32 {
        TILE_COLORS[self.0 as usize % TILE_COLORS.len()]
    }

    /// Single letter used by text front ends (`A` for kind 0).
    pub fn glyph(self) -> char {
        (b'A' + self.0 % MAX_TILE_KINDS) as char
    }
}

/// Stable tile identifier, unique within one pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u16);

/// Position in pile space (y is up).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Difficulty presets
///
/// - **Easy**: shallow pile, few kinds, roomy inventory
/// - **Medium**: the default
/// - **Hard**: deep pile, every palette color in play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Parse difficulty from string (case-insensitive)
    ///
    /// Accepts full names or single letters: "easy" | "e", "medium" | "m", "hard" | "h".
    ///
    /// # Examples
    ///
    /// ```
    /// use tap_match_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_str("EASY"), Some(Difficulty::Easy));
    /// assert_eq!(Difficulty::from_str("m"), Some(Difficulty::Medium));
    /// assert_eq!(Difficulty::from_str("nightmare"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "e" => Some(Difficulty::Easy),
            "medium" | "m" => Some(Difficulty::Medium),
            "hard" | "h" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Next difficulty in the settings cycle (wraps from Hard to Easy)
    pub fn next(&self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}

/// Immutable rule set for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DifficultyConfig {
    /// Number of rings in the pile
    pub layers: u8,
    /// Number of distinct tile kinds
    pub types: u8,
    /// Inventory capacity
    pub inventory_size: usize,
    /// Countdown length when the time limit is enabled
    pub time_limit_secs: u32,
}

impl DifficultyConfig {
    /// Build a custom configuration.
    ///
    /// Values are clamped into the playable range: at least one layer,
    /// `1..=MAX_TILE_KINDS` kinds and `1..=MAX_INVENTORY_SIZE` slots.
    pub fn new(layers: u8, types: u8, inventory_size: usize, time_limit_secs: u32) -> Self {
        Self {
            layers: layers.max(1),
            types: types.clamp(1, MAX_TILE_KINDS),
            inventory_size: inventory_size.clamp(1, MAX_INVENTORY_SIZE),
            time_limit_secs,
        }
    }

    pub const fn preset(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self {
                layers: 3,
                types: 8,
                inventory_size: 8,
                time_limit_secs: 240,
            },
            Difficulty::Medium => Self {
                layers: 5,
                types: 12,
                inventory_size: 7,
                time_limit_secs: 180,
            },
            Difficulty::Hard => Self {
                layers: 7,
                types: 16,
                inventory_size: 7,
                time_limit_secs: 120,
            },
        }
    }

    /// Number of ring slots in the pile (`layers × TILES_PER_LAYER`)
    pub fn slot_count(&self) -> usize {
        self.layers as usize * TILES_PER_LAYER
    }
}

impl Default for DifficultyConfig {
    fn default() -> Self {
        Self::preset(Difficulty::default())
    }
}

/// Player commands, produced by key mapping or scripted drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the pointer one slot counter-clockwise
    CursorLeft,
    /// Move the pointer one slot clockwise
    CursorRight,
    /// Move the pointer one layer up the pile
    CursorUp,
    /// Move the pointer one layer down the pile
    CursorDown,
    /// Select the tile under the pointer
    Select,
    /// Jump the pointer to a suggested tile
    Hint,
    /// Start a session (also restarts a finished or running one)
    Start,
    /// Cycle the difficulty setting
    CycleDifficulty,
    /// Toggle the time limit setting
    ToggleTimeLimit,
}

impl Command {
    /// Parse command from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tap_match_types::Command;
    ///
    /// assert_eq!(Command::from_str("cursorLeft"), Some(Command::CursorLeft));
    /// assert_eq!(Command::from_str("toggleTimeLimit"), Some(Command::ToggleTimeLimit));
    /// assert_eq!(Command::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cursorleft" => Some(Command::CursorLeft),
            "cursorright" => Some(Command::CursorRight),
            "cursorup" => Some(Command::CursorUp),
            "cursordown" => Some(Command::CursorDown),
            "select" => Some(Command::Select),
            "hint" => Some(Command::Hint),
            "start" | "restart" => Some(Command::Start),
            "cycledifficulty" => Some(Command::CycleDifficulty),
            "toggletimelimit" => Some(Command::ToggleTimeLimit),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::CursorLeft => "cursorLeft",
            Command::CursorRight => "cursorRight",
            Command::CursorUp => "cursorUp",
            Command::CursorDown => "cursorDown",
            Command::Select => "select",
            Command::Hint => "hint",
            Command::Start => "start",
            Command::CycleDifficulty => "cycleDifficulty",
            Command::ToggleTimeLimit => "toggleTimeLimit",
        }
    }
}
