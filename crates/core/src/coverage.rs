//! Coverage module - which board tiles are free to pick
//!
//! A tile is covered when another board tile sits more than
//! `VERTICAL_TOLERANCE` above it and overlaps it by less than
//! `HORIZONTAL_TOLERANCE` on both the x and z axes. The axes are checked
//! independently (square footprints), not by Euclidean distance.
//!
//! A full O(n²) pass runs after every insertion or removal. Piles hold at most
//! a few dozen tiles and only ever shrink.

use crate::pile::{Tile, TileState};
use crate::types::{HORIZONTAL_TOLERANCE, VERTICAL_TOLERANCE};

/// Does `upper` cover `lower`?
#[inline]
pub fn covers(upper: &Tile, lower: &Tile) -> bool {
    let (a, b) = (lower.position, upper.position);
    b.y > a.y + VERTICAL_TOLERANCE
        && (b.x - a.x).abs() < HORIZONTAL_TOLERANCE
        && (b.z - a.z).abs() < HORIZONTAL_TOLERANCE
}

/// Is the tile at `index` covered by any other board tile?
pub fn is_covered(tiles: &[Tile], index: usize) -> bool {
    let tile = &tiles[index];
    tiles
        .iter()
        .enumerate()
        .any(|(i, other)| i != index && other.on_board() && covers(other, tile))
}

/// Recompute free/covered for every board tile. Held tiles are left alone.
pub fn recompute_free(tiles: &mut [Tile]) {
    for i in 0..tiles.len() {
        if tiles[i].is_held() {
            continue;
        }
        tiles[i].state = if is_covered(tiles, i) {
            TileState::Covered
        } else {
            TileState::Free
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Position, TileId, TileKind};

    fn tile(id: u16, x: f32, y: f32, z: f32) -> Tile {
        Tile::new(TileId(id), TileKind(0), Position::new(x, y, z), 0)
    }

    #[test]
    fn test_tile_directly_above_covers() {
        let mut tiles = [tile(0, 0.0, 0.0, 0.0), tile(1, 0.0, 0.4, 0.0)];
        recompute_free(&mut tiles);
        assert_eq!(tiles[0].state(), TileState::Covered);
        assert_eq!(tiles[1].state(), TileState::Free);
    }

    #[test]
    fn test_vertical_tolerance_is_strict() {
        // Exactly VERTICAL_TOLERANCE higher does not cover.
        let mut tiles = [tile(0, 0.0, 0.0, 0.0), tile(1, 0.0, 0.2, 0.0)];
        recompute_free(&mut tiles);
        assert!(tiles[0].is_free());

        let mut tiles = [tile(0, 0.0, 0.0, 0.0), tile(1, 0.0, 0.21, 0.0)];
        recompute_free(&mut tiles);
        assert!(!tiles[0].is_free());
    }

    #[test]
    fn test_axes_are_checked_independently() {
        // dx and dz are both 0.8: inside the square footprint, although the
        // Euclidean distance (~1.13) is beyond the tolerance.
        let mut tiles = [tile(0, 0.0, 0.0, 0.0), tile(1, 0.8, 0.4, 0.8)];
        recompute_free(&mut tiles);
        assert!(!tiles[0].is_free());

        let mut tiles = [tile(0, 0.0, 0.0, 0.0), tile(1, 0.9, 0.4, 0.0)];
        recompute_free(&mut tiles);
        assert!(tiles[0].is_free());
    }

    #[test]
    fn test_held_tiles_do_not_cover() {
        let mut tiles = [tile(0, 0.0, 0.0, 0.0), tile(1, 0.0, 0.4, 0.0)];
        tiles[1].state = TileState::Held;
        recompute_free(&mut tiles);
        assert!(tiles[0].is_free());
        assert!(tiles[1].is_held());
    }

    #[test]
    fn test_lower_tiles_never_cover() {
        let mut tiles = [tile(0, 0.0, 0.4, 0.0), tile(1, 0.0, 0.0, 0.0)];
        recompute_free(&mut tiles);
        assert!(tiles[0].is_free());
        assert!(!tiles[1].is_free());
        assert!(is_covered(&tiles, 1));
        assert!(!is_covered(&tiles, 0));
    }
}
