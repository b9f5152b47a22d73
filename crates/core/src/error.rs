//! Error types for rejected player actions.
//!
//! None of these are fatal: a rejected selection leaves the session exactly as
//! it was.

use thiserror::Error;

use crate::types::TileId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("inventory is full")]
    InventoryFull,
    #[error("tile is covered or already held")]
    NotSelectable,
    #[error("no session is running")]
    NotRunning,
    #[error("unknown tile {0:?}")]
    UnknownTile(TileId),
}

impl SelectError {
    /// Short machine-readable code (snake_case).
    pub fn code(self) -> &'static str {
        match self {
            SelectError::InventoryFull => "inventory_full",
            SelectError::NotSelectable => "not_selectable",
            SelectError::NotRunning => "not_running",
            SelectError::UnknownTile(_) => "unknown_tile",
        }
    }
}
