use serde::Serialize;

use crate::pile::Tile;
use crate::session::{DefeatCause, Phase};

/// Values the HUD shows on every state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct HudSnapshot {
    pub score: u32,
    pub inventory_count: usize,
    pub inventory_capacity: usize,
    pub time_remaining: u32,
    pub time_limit_enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TileSnapshot {
    pub id: u16,
    pub kind: u8,
    pub layer: u8,
    pub slot: usize,
    pub free: bool,
}

impl From<&Tile> for TileSnapshot {
    fn from(tile: &Tile) -> Self {
        Self {
            id: tile.id.0,
            kind: tile.kind.0,
            layer: tile.layer,
            slot: tile.slot(),
            free: tile.is_free(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub session_id: u32,
    pub phase: Phase,
    pub defeat_cause: Option<DefeatCause>,
    pub difficulty: &'static str,
    pub hud: HudSnapshot,
    /// Tiles on the board (not held)
    pub tiles_on_board: usize,
    /// Number of layers in the current configuration
    pub layers: u8,
    /// Held kinds in selection order
    pub inventory: Vec<u8>,
    /// Board tiles, in pile order
    pub tiles: Vec<TileSnapshot>,
}

impl SessionSnapshot {
    pub fn clear(&mut self) {
        self.session_id = 0;
        self.phase = Phase::NotStarted;
        self.defeat_cause = None;
        self.difficulty = "medium";
        self.hud = HudSnapshot::default();
        self.tiles_on_board = 0;
        self.layers = 0;
        self.inventory.clear();
        self.tiles.clear();
    }

    pub fn playable(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Board tile at a ring cell, if any.
    pub fn tile_at(&self, layer: u8, slot: usize) -> Option<&TileSnapshot> {
        self.tiles
            .iter()
            .find(|t| t.layer == layer && t.slot == slot)
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        let mut s = Self {
            session_id: 0,
            phase: Phase::NotStarted,
            defeat_cause: None,
            difficulty: "medium",
            hud: HudSnapshot::default(),
            tiles_on_board: 0,
            layers: 0,
            inventory: Vec::new(),
            tiles: Vec::new(),
        };
        s.clear();
        s
    }
}
