//! Picking - resolving a pointer to a tile.
//!
//! The engine never deals with screen geometry. A front end owns a pointer of
//! its own shape and a resolver that turns it into at most one tile id.

use crate::pile::Pile;
use crate::types::{TileId, TILES_PER_LAYER};

pub trait PickResolver {
    type Pointer;

    fn resolve(&self, pile: &Pile, pointer: &Self::Pointer) -> Option<TileId>;
}

/// Pointer addressing a ring cell: a layer and an angular slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RingPointer {
    pub layer: u8,
    pub slot: usize,
}

impl RingPointer {
    pub fn new(layer: u8, slot: usize) -> Self {
        Self {
            layer,
            slot: slot % TILES_PER_LAYER,
        }
    }

    /// Move around the ring, wrapping.
    pub fn step_slot(self, delta: i32) -> Self {
        let n = TILES_PER_LAYER as i32;
        let slot = (self.slot as i32 + delta).rem_euclid(n) as usize;
        Self { slot, ..self }
    }

    /// Move between layers, clamped to `0..=top`.
    pub fn step_layer(self, delta: i32, top: u8) -> Self {
        let layer = (self.layer as i32 + delta).clamp(0, top as i32) as u8;
        Self { layer, ..self }
    }
}

/// Resolves a [`RingPointer`] to the board tile occupying that cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct RingPicker;

impl PickResolver for RingPicker {
    type Pointer = RingPointer;

    fn resolve(&self, pile: &Pile, pointer: &RingPointer) -> Option<TileId> {
        pile.tile_at(pointer.layer, pointer.slot).map(|t| t.id)
    }
}
