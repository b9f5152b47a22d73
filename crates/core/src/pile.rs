//! Pile module - tiles on the board and pile generation
//!
//! The pile is a set of concentric rings (one per layer) of `TILES_PER_LAYER`
//! tiles each. Kinds are dealt in runs of three before shuffling, so every
//! generated pile can be cleared completely by triples regardless of where
//! the tiles end up.

use std::f32::consts::TAU;

use log::debug;

use crate::coverage;
use crate::rng::SimpleRng;
use crate::types::{
    DifficultyConfig, Position, TileId, TileKind, BASE_RADIUS, LAYER_HEIGHT, RADIUS_SHRINK,
    TILES_PER_LAYER,
};

/// Where a tile currently lives. Removed tiles leave the pile entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileState {
    /// On the board, under at least one higher tile
    Covered,
    /// On the board and selectable
    Free,
    /// In the inventory
    Held,
}

/// A single tile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pub id: TileId,
    pub kind: TileKind,
    pub position: Position,
    pub layer: u8,
    pub(crate) state: TileState,
}

impl Tile {
    /// Create a board tile. Free state is settled by the next coverage pass.
    pub fn new(id: TileId, kind: TileKind, position: Position, layer: u8) -> Self {
        Self {
            id,
            kind,
            position,
            layer,
            state: TileState::Covered,
        }
    }

    pub fn state(&self) -> TileState {
        self.state
    }

    pub fn is_free(&self) -> bool {
        self.state == TileState::Free
    }

    pub fn is_held(&self) -> bool {
        self.state == TileState::Held
    }

    pub fn on_board(&self) -> bool {
        self.state != TileState::Held
    }

    /// Angular slot of this tile on its ring.
    pub fn slot(&self) -> usize {
        ring_slot(self.position)
    }
}

/// Position of `slot` on the ring of `layer`.
pub fn ring_position(layer: u8, slot: usize) -> Position {
    let radius = BASE_RADIUS - layer as f32 * RADIUS_SHRINK;
    let angle = slot as f32 * (TAU / TILES_PER_LAYER as f32);
    Position::new(
        angle.cos() * radius,
        layer as f32 * LAYER_HEIGHT,
        angle.sin() * radius,
    )
}

/// Nearest angular slot for a position (inverse of [`ring_position`]).
pub fn ring_slot(position: Position) -> usize {
    let step = TAU / TILES_PER_LAYER as f32;
    let angle = position.z.atan2(position.x).rem_euclid(TAU);
    (angle / step).round() as usize % TILES_PER_LAYER
}

/// Kinds for a pile of `config`: `floor(slots / 3)` runs of three, shuffled.
///
/// Run `i` uses kind `i mod config.types`. Slots beyond the last full run are
/// dropped, so the length is always a multiple of three.
pub fn deal_kinds(config: &DifficultyConfig, rng: &mut SimpleRng) -> Vec<TileKind> {
    let runs = config.slot_count() / 3;
    let mut kinds = Vec::with_capacity(runs * 3);
    for i in 0..runs {
        let kind = TileKind((i % config.types as usize) as u8);
        kinds.extend([kind; 3]);
    }
    rng.shuffle(&mut kinds);
    kinds
}

/// All tiles of a session that are not yet removed.
#[derive(Debug, Clone, Default)]
pub struct Pile {
    tiles: Vec<Tile>,
}

impl Pile {
    /// Generate a fresh pile for `config`.
    pub fn generate(config: &DifficultyConfig, rng: &mut SimpleRng) -> Self {
        let kinds = deal_kinds(config, rng);
        let mut tiles = Vec::with_capacity(kinds.len());

        let mut dealt = kinds.into_iter();
        'layers: for layer in 0..config.layers {
            for slot in 0..TILES_PER_LAYER {
                let Some(kind) = dealt.next() else {
                    break 'layers;
                };
                let id = TileId(tiles.len() as u16);
                tiles.push(Tile::new(id, kind, ring_position(layer, slot), layer));
            }
        }

        debug!(
            "generated pile: {} tiles, {} layers, {} kinds",
            tiles.len(),
            config.layers,
            config.types
        );
        Self::from_tiles(tiles)
    }

    /// Build a pile from explicit tiles (scripted layouts, tests).
    ///
    /// Every tile is put on the board and coverage is computed.
    pub fn from_tiles(mut tiles: Vec<Tile>) -> Self {
        for tile in &mut tiles {
            tile.state = TileState::Covered;
        }
        let mut pile = Self { tiles };
        pile.recompute_free();
        pile
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        self.tiles.iter_mut().find(|t| t.id == id)
    }

    /// Tiles still on the board (not held).
    pub fn board_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(|t| t.on_board())
    }

    pub fn board_count(&self) -> usize {
        self.board_tiles().count()
    }

    pub fn free_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(|t| t.is_free())
    }

    /// Topmost tile on the board at a ring cell.
    pub fn tile_at(&self, layer: u8, slot: usize) -> Option<&Tile> {
        self.board_tiles()
            .filter(|t| t.layer == layer && t.slot() == slot)
            .max_by(|a, b| a.position.y.total_cmp(&b.position.y))
    }

    /// Highest layer that still has a board tile.
    pub fn top_layer(&self) -> Option<u8> {
        self.board_tiles().map(|t| t.layer).max()
    }

    /// Remove a tile entirely.
    pub(crate) fn remove(&mut self, id: TileId) -> Option<Tile> {
        let idx = self.tiles.iter().position(|t| t.id == id)?;
        Some(self.tiles.remove(idx))
    }

    /// Remove every board tile of `kind`. Held tiles are kept.
    pub(crate) fn remove_board_kind(&mut self, kind: TileKind) -> usize {
        let before = self.tiles.len();
        self.tiles.retain(|t| !(t.kind == kind && t.on_board()));
        before - self.tiles.len()
    }

    /// Recompute free/covered for every board tile.
    pub fn recompute_free(&mut self) {
        coverage::recompute_free(&mut self.tiles);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Difficulty;
    use std::collections::HashMap;

    fn kind_counts(pile: &Pile) -> HashMap<TileKind, usize> {
        let mut counts = HashMap::new();
        for t in pile.tiles() {
            *counts.entry(t.kind).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_generate_sizes_per_difficulty() {
        for (difficulty, expected) in [
            (Difficulty::Easy, 36),
            (Difficulty::Medium, 60),
            (Difficulty::Hard, 84),
        ] {
            let config = DifficultyConfig::preset(difficulty);
            let pile = Pile::generate(&config, &mut SimpleRng::new(3));
            assert_eq!(pile.len(), expected);
        }
    }

    #[test]
    fn test_every_kind_count_is_a_multiple_of_three() {
        for seed in 1..20 {
            let config = DifficultyConfig::preset(Difficulty::Hard);
            let pile = Pile::generate(&config, &mut SimpleRng::new(seed));
            assert_eq!(pile.len() % 3, 0);
            for (kind, count) in kind_counts(&pile) {
                assert_eq!(count % 3, 0, "kind {:?} has {} tiles", kind, count);
                assert!(kind.0 < config.types);
            }
        }
    }

    #[test]
    fn test_deal_kinds_uses_round_robin_runs() {
        // 2 layers × 12 = 24 slots -> 8 runs over 3 kinds: 3,3,2 runs.
        let config = DifficultyConfig::new(2, 3, 7, 60);
        let kinds = deal_kinds(&config, &mut SimpleRng::new(1));
        assert_eq!(kinds.len(), 24);
        let count = |k: u8| kinds.iter().filter(|x| x.0 == k).count();
        assert_eq!(count(0), 9);
        assert_eq!(count(1), 9);
        assert_eq!(count(2), 6);
    }

    #[test]
    fn test_same_seed_same_pile() {
        let config = DifficultyConfig::preset(Difficulty::Medium);
        let a = Pile::generate(&config, &mut SimpleRng::new(42));
        let b = Pile::generate(&config, &mut SimpleRng::new(42));
        let kinds_a: Vec<_> = a.tiles().iter().map(|t| t.kind).collect();
        let kinds_b: Vec<_> = b.tiles().iter().map(|t| t.kind).collect();
        assert_eq!(kinds_a, kinds_b);
    }

    #[test]
    fn test_ring_geometry() {
        let p = ring_position(0, 0);
        assert!((p.x - 3.0).abs() < 1e-5);
        assert!(p.y.abs() < 1e-5);
        assert!(p.z.abs() < 1e-5);

        let p = ring_position(2, 3);
        assert!(p.x.abs() < 1e-5);
        assert!((p.y - 0.8).abs() < 1e-5);
        assert!((p.z - 2.4).abs() < 1e-5);
    }

    #[test]
    fn test_ring_slot_round_trips_every_slot() {
        for layer in 0..7 {
            for slot in 0..TILES_PER_LAYER {
                assert_eq!(ring_slot(ring_position(layer, slot)), slot);
            }
        }
    }

    #[test]
    fn test_top_layer_is_free_and_lower_layers_covered() {
        let config = DifficultyConfig::preset(Difficulty::Medium);
        let pile = Pile::generate(&config, &mut SimpleRng::new(5));
        for tile in pile.tiles() {
            if tile.layer == config.layers - 1 {
                assert!(tile.is_free(), "top tile {:?} should be free", tile.id);
            } else {
                assert_eq!(tile.state(), TileState::Covered);
            }
        }
    }

    #[test]
    fn test_tile_at_and_remove_board_kind() {
        let config = DifficultyConfig::new(1, 1, 3, 60);
        let mut pile = Pile::generate(&config, &mut SimpleRng::new(1));
        assert_eq!(pile.tile_at(0, 4).map(|t| t.id), Some(TileId(4)));
        assert!(pile.tile_at(1, 4).is_none());

        pile.get_mut(TileId(0)).unwrap().state = TileState::Held;
        assert_eq!(pile.remove_board_kind(TileKind(0)), 11);
        assert_eq!(pile.len(), 1);
        assert!(pile.get(TileId(0)).unwrap().is_held());
    }
}
