//! Pile generation and coverage properties over many seeds

use std::collections::HashMap;

use tap_match::core::coverage::is_covered;
use tap_match::core::pile::ring_position;
use tap_match::core::{Inventory, Pile, SelectError, SimpleRng, Tile};
use tap_match::types::{Difficulty, DifficultyConfig, TileId, TileKind, TILES_PER_LAYER};

fn presets() -> [DifficultyConfig; 3] {
    [
        DifficultyConfig::preset(Difficulty::Easy),
        DifficultyConfig::preset(Difficulty::Medium),
        DifficultyConfig::preset(Difficulty::Hard),
    ]
}

#[test]
fn every_kind_comes_in_multiples_of_three() {
    for config in presets() {
        for seed in 1..20 {
            let pile = Pile::generate(&config, &mut SimpleRng::new(seed));
            assert_eq!(pile.len() % 3, 0);
            assert_eq!(pile.len(), config.layers as usize * TILES_PER_LAYER);

            let mut counts: HashMap<TileKind, usize> = HashMap::new();
            for tile in pile.tiles() {
                *counts.entry(tile.kind).or_default() += 1;
                assert!(tile.kind.0 < config.types);
            }
            assert!(counts.values().all(|&n| n % 3 == 0), "{:?}", counts);
        }
    }
}

#[test]
fn same_seed_same_pile() {
    let config = DifficultyConfig::preset(Difficulty::Hard);
    let a = Pile::generate(&config, &mut SimpleRng::new(77));
    let b = Pile::generate(&config, &mut SimpleRng::new(77));
    let kinds = |p: &Pile| p.tiles().iter().map(|t| t.kind).collect::<Vec<_>>();
    assert_eq!(kinds(&a), kinds(&b));

    let c = Pile::generate(&config, &mut SimpleRng::new(78));
    assert_ne!(kinds(&a), kinds(&c));
}

#[test]
fn only_the_top_layer_starts_free() {
    for config in presets() {
        let pile = Pile::generate(&config, &mut SimpleRng::new(5));
        let top = pile.top_layer().unwrap();
        assert_eq!(top, config.layers - 1);
        for (i, tile) in pile.tiles().iter().enumerate() {
            assert_eq!(tile.is_free(), tile.layer == top, "tile {:?}", tile.id);
            assert_eq!(is_covered(pile.tiles(), i), !tile.is_free());
        }
    }
}

#[test]
fn covered_picks_never_change_the_inventory() {
    let config = DifficultyConfig::preset(Difficulty::Medium);
    let mut pile = Pile::generate(&config, &mut SimpleRng::new(3));
    let mut inv = Inventory::new(config.inventory_size);

    let covered = pile
        .tiles()
        .iter()
        .find(|t| !t.is_free())
        .map(|t| t.id)
        .unwrap();
    assert_eq!(inv.select(&mut pile, covered), Err(SelectError::NotSelectable));
    assert!(inv.is_empty());
    assert!(!pile.get(covered).unwrap().is_held());
}

#[test]
fn taking_an_upper_tile_frees_the_one_below() {
    let pile_tiles = vec![
        Tile::new(TileId(0), TileKind(0), ring_position(0, 0), 0),
        Tile::new(TileId(1), TileKind(1), ring_position(1, 0), 1),
        Tile::new(TileId(2), TileKind(2), ring_position(1, 6), 1),
    ];
    let mut pile = Pile::from_tiles(pile_tiles);
    let mut inv = Inventory::new(7);
    assert!(!pile.get(TileId(0)).unwrap().is_free());
    assert!(pile.get(TileId(2)).unwrap().is_free());

    inv.select(&mut pile, TileId(1)).unwrap();
    assert!(pile.get(TileId(0)).unwrap().is_free());
    assert!(pile.get(TileId(1)).unwrap().is_held());
    assert_eq!(pile.board_count(), 2);
    assert_eq!(pile.top_layer(), Some(1));
}
