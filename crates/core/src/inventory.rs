//! Inventory module - selection, triple detection and triple removal
//!
//! The inventory is a fixed-capacity, insertion-ordered list of held tiles.
//! It never grows past its capacity: a selection into a full inventory is
//! rejected, never truncated.

use arrayvec::ArrayVec;
use log::debug;

use crate::error::SelectError;
use crate::pile::{Pile, TileState};
use crate::scoring::{is_combo, triple_score};
use crate::types::{TileId, TileKind, MAX_INVENTORY_SIZE};

/// One held tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    pub id: TileId,
    pub kind: TileKind,
}

/// Outcome of removing a triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovalResult {
    pub kind: TileKind,
    /// The three inventory tiles that were matched
    pub matched: [TileId; 3],
    pub points_awarded: u32,
    pub combo_triggered: bool,
    pub clear_bonus_triggered: bool,
    /// Board tiles swept away by the clear bonus
    pub bonus_tiles_removed: usize,
}

#[derive(Debug, Clone)]
pub struct Inventory {
    slots: ArrayVec<Slot, MAX_INVENTORY_SIZE>,
    capacity: usize,
    /// Time of the last removed triple (drives combos).
    last_triple_ms: Option<u64>,
}

impl Inventory {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: ArrayVec::new(),
            capacity: capacity.clamp(1, MAX_INVENTORY_SIZE),
            last_triple_ms: None,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn last_triple_ms(&self) -> Option<u64> {
        self.last_triple_ms
    }

    pub fn count_of(&self, kind: TileKind) -> usize {
        self.slots.iter().filter(|s| s.kind == kind).count()
    }

    /// Move a free board tile into the inventory.
    ///
    /// Capacity is checked first, so a full inventory reports `InventoryFull`
    /// even for an unselectable tile. Coverage is recomputed on success.
    pub fn select(&mut self, pile: &mut Pile, id: TileId) -> Result<Slot, SelectError> {
        if self.is_full() {
            return Err(SelectError::InventoryFull);
        }
        let tile = pile.get_mut(id).ok_or(SelectError::UnknownTile(id))?;
        if tile.state != TileState::Free {
            return Err(SelectError::NotSelectable);
        }

        tile.state = TileState::Held;
        let slot = Slot {
            id,
            kind: tile.kind,
        };
        self.slots.push(slot);
        pile.recompute_free();

        debug!(
            "selected {:?} (kind {}), inventory {}/{}",
            id,
            slot.kind.0,
            self.slots.len(),
            self.capacity
        );
        Ok(slot)
    }

    /// Kind to remove next, if any kind is held three or more times.
    ///
    /// Kinds are scanned in ascending index order and the first one with a
    /// count of at least three wins.
    pub fn check_triples(&self) -> Option<TileKind> {
        // Indexed by the raw kind so kinds past the palette never alias.
        let mut counts = [0u8; u8::MAX as usize + 1];
        for slot in &self.slots {
            counts[slot.kind.0 as usize] += 1;
        }
        counts
            .iter()
            .position(|&c| c >= 3)
            .map(|k| TileKind(k as u8))
    }

    /// Full and nothing left to match: the session is lost.
    pub fn is_stuck(&self) -> bool {
        self.is_full() && self.check_triples().is_none()
    }

    /// Remove the first three held tiles of `kind` (selection order), then
    /// sweep every remaining board tile of that kind as a clear bonus.
    ///
    /// Returns `None` and changes nothing if fewer than three are held.
    pub fn remove_triple(
        &mut self,
        pile: &mut Pile,
        kind: TileKind,
        now_ms: u64,
    ) -> Option<RemovalResult> {
        if self.count_of(kind) < 3 {
            return None;
        }

        let mut matched = [TileId(0); 3];
        let mut taken = 0usize;
        self.slots.retain(|slot| {
            if taken < 3 && slot.kind == kind {
                matched[taken] = slot.id;
                taken += 1;
                false
            } else {
                true
            }
        });
        for id in matched {
            pile.remove(id);
        }

        let combo = is_combo(self.last_triple_ms, now_ms);
        self.last_triple_ms = Some(now_ms);

        let bonus_tiles_removed = pile.remove_board_kind(kind);
        let clear_bonus = bonus_tiles_removed > 0;
        pile.recompute_free();

        let score = triple_score(combo, clear_bonus);
        debug!(
            "triple of kind {}: +{} (combo={}, clear bonus tiles={})",
            kind.0, score.total, combo, bonus_tiles_removed
        );

        Some(RemovalResult {
            kind,
            matched,
            points_awarded: score.total,
            combo_triggered: combo,
            clear_bonus_triggered: clear_bonus,
            bonus_tiles_removed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pile::{ring_position, Tile};

    /// One flat ring: every tile free.
    fn flat_pile(kinds: &[u8]) -> Pile {
        let tiles = kinds
            .iter()
            .enumerate()
            .map(|(i, &k)| Tile::new(TileId(i as u16), TileKind(k), ring_position(0, i), 0))
            .collect();
        Pile::from_tiles(tiles)
    }

    #[test]
    fn test_select_moves_tile_into_inventory() {
        let mut pile = flat_pile(&[0, 1, 2]);
        let mut inv = Inventory::new(7);

        let slot = inv.select(&mut pile, TileId(1)).unwrap();
        assert_eq!(slot.kind, TileKind(1));
        assert_eq!(inv.len(), 1);
        assert!(pile.get(TileId(1)).unwrap().is_held());
        assert_eq!(pile.board_count(), 2);
    }

    #[test]
    fn test_select_rejects_held_and_unknown_tiles() {
        let mut pile = flat_pile(&[0, 1]);
        let mut inv = Inventory::new(7);
        inv.select(&mut pile, TileId(0)).unwrap();

        assert_eq!(inv.select(&mut pile, TileId(0)), Err(SelectError::NotSelectable));
        assert_eq!(
            inv.select(&mut pile, TileId(9)),
            Err(SelectError::UnknownTile(TileId(9)))
        );
        assert_eq!(inv.len(), 1);
    }

    #[test]
    fn test_select_rejects_covered_tile() {
        let tiles = vec![
            Tile::new(TileId(0), TileKind(0), ring_position(0, 0), 0),
            Tile::new(TileId(1), TileKind(0), ring_position(1, 0), 1),
        ];
        let mut pile = Pile::from_tiles(tiles);
        let mut inv = Inventory::new(7);

        assert_eq!(inv.select(&mut pile, TileId(0)), Err(SelectError::NotSelectable));
        inv.select(&mut pile, TileId(1)).unwrap();
        // The tile underneath is uncovered by the selection.
        assert!(pile.get(TileId(0)).unwrap().is_free());
    }

    #[test]
    fn test_full_inventory_rejects_before_other_checks() {
        let mut pile = flat_pile(&[0, 1, 2]);
        let mut inv = Inventory::new(2);
        inv.select(&mut pile, TileId(0)).unwrap();
        inv.select(&mut pile, TileId(1)).unwrap();

        assert_eq!(inv.select(&mut pile, TileId(2)), Err(SelectError::InventoryFull));
        assert_eq!(inv.select(&mut pile, TileId(0)), Err(SelectError::InventoryFull));
        assert_eq!(inv.len(), 2);
        assert!(inv.is_stuck());
    }

    #[test]
    fn test_check_triples_prefers_lowest_kind() {
        let mut pile = flat_pile(&[5, 5, 2, 5, 2, 2]);
        let mut inv = Inventory::new(8);
        for id in 0..6 {
            inv.select(&mut pile, TileId(id)).unwrap();
        }
        // Kind 5 completed first, but kind 2 is scanned first.
        assert_eq!(inv.check_triples(), Some(TileKind(2)));
    }

    #[test]
    fn test_remove_triple_takes_first_three_in_selection_order() {
        let mut pile = flat_pile(&[1, 1, 1, 1, 0]);
        let mut inv = Inventory::new(8);
        for id in [3, 0, 4, 1, 2] {
            inv.select(&mut pile, TileId(id)).unwrap();
        }

        let result = inv.remove_triple(&mut pile, TileKind(1), 10_000).unwrap();
        assert_eq!(result.matched, [TileId(3), TileId(0), TileId(1)]);
        assert_eq!(result.points_awarded, 100);
        assert!(!result.combo_triggered);
        assert!(!result.clear_bonus_triggered);

        let left: Vec<_> = inv.slots().iter().map(|s| s.id).collect();
        assert_eq!(left, vec![TileId(4), TileId(2)]);
        assert_eq!(pile.len(), 2);
    }

    #[test]
    fn test_remove_triple_sweeps_board_and_awards_clear_bonus() {
        let mut pile = flat_pile(&[0, 0, 0, 0, 0, 0, 1]);
        let mut inv = Inventory::new(7);
        for id in 0..3 {
            inv.select(&mut pile, TileId(id)).unwrap();
        }
        let before = pile.len();

        let result = inv.remove_triple(&mut pile, TileKind(0), 0).unwrap();
        assert!(result.clear_bonus_triggered);
        assert_eq!(result.bonus_tiles_removed, 3);
        assert_eq!(result.points_awarded, 300);
        assert_eq!(pile.len(), before - 3 - result.bonus_tiles_removed);
        assert!(pile.tiles().iter().all(|t| t.kind == TileKind(1)));
    }

    #[test]
    fn test_combo_within_window() {
        let mut pile = flat_pile(&[0, 0, 0, 1, 1, 1, 2, 2, 2]);
        let mut inv = Inventory::new(7);
        for id in 0..3 {
            inv.select(&mut pile, TileId(id)).unwrap();
        }
        let first = inv.remove_triple(&mut pile, TileKind(0), 1_000).unwrap();
        assert!(!first.combo_triggered);

        for id in 3..6 {
            inv.select(&mut pile, TileId(id)).unwrap();
        }
        let second = inv.remove_triple(&mut pile, TileKind(1), 3_999).unwrap();
        assert!(second.combo_triggered);
        assert_eq!(second.points_awarded, 150);

        for id in 6..9 {
            inv.select(&mut pile, TileId(id)).unwrap();
        }
        let third = inv.remove_triple(&mut pile, TileKind(2), 7_000).unwrap();
        assert!(!third.combo_triggered);
        assert_eq!(third.points_awarded, 100);
        assert_eq!(inv.last_triple_ms(), Some(7_000));
    }

    #[test]
    fn test_remove_triple_without_three_is_a_no_op() {
        let mut pile = flat_pile(&[0, 0, 1]);
        let mut inv = Inventory::new(7);
        inv.select(&mut pile, TileId(0)).unwrap();
        inv.select(&mut pile, TileId(1)).unwrap();

        assert!(inv.remove_triple(&mut pile, TileKind(0), 0).is_none());
        assert_eq!(inv.len(), 2);
        assert_eq!(pile.len(), 3);
        assert_eq!(inv.last_triple_ms(), None);
    }

    #[test]
    fn test_kinds_past_the_palette_count_separately() {
        let mut pile = flat_pile(&[16, 16, 0, 16]);
        let mut inv = Inventory::new(7);
        for id in 0..3 {
            inv.select(&mut pile, TileId(id)).unwrap();
        }
        assert_eq!(inv.check_triples(), None);

        inv.select(&mut pile, TileId(3)).unwrap();
        assert_eq!(inv.check_triples(), Some(TileKind(16)));
        let result = inv.remove_triple(&mut pile, TileKind(16), 0).unwrap();
        assert_eq!(result.kind, TileKind(16));
        assert_eq!(inv.slots().iter().map(|s| s.kind).collect::<Vec<_>>(), vec![TileKind(0)]);
    }
}
