//! Scoring module - triple, combo and board-clear points
//!
//! Every removed triple is worth `TRIPLE_POINTS`. Two bonuses stack on top:
//! - Combo: the previous triple was removed less than `COMBO_WINDOW_MS` ago.
//! - Board clear: removing the triple also swept the remaining tiles of that
//!   kind off the board.

use crate::types::{CLEAR_BONUS, COMBO_BONUS, COMBO_WINDOW_MS, TRIPLE_POINTS};

/// Score calculation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    pub base: u32,
    pub combo_bonus: u32,
    pub clear_bonus: u32,
    pub total: u32,
}

/// Whether a triple at `now_ms` chains onto the one at `last_triple_ms`.
///
/// `None` means no triple has been removed yet in this session.
pub fn is_combo(last_triple_ms: Option<u64>, now_ms: u64) -> bool {
    match last_triple_ms {
        Some(last) => now_ms.saturating_sub(last) < COMBO_WINDOW_MS,
        None => false,
    }
}

/// Points for one removed triple.
pub fn triple_score(combo: bool, clear_bonus: bool) -> ScoreResult {
    let base = TRIPLE_POINTS;
    let combo_bonus = if combo { COMBO_BONUS } else { 0 };
    let clear_bonus = if clear_bonus { CLEAR_BONUS } else { 0 };
    ScoreResult {
        base,
        combo_bonus,
        clear_bonus,
        total: base + combo_bonus + clear_bonus,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_triple() {
        let s = triple_score(false, false);
        assert_eq!(s.total, 100);
        assert_eq!(s.base, 100);
    }

    #[test]
    fn test_bonuses_stack() {
        assert_eq!(triple_score(true, false).total, 150);
        assert_eq!(triple_score(false, true).total, 300);
        let s = triple_score(true, true);
        assert_eq!((s.base, s.combo_bonus, s.clear_bonus, s.total), (100, 50, 200, 350));
    }

    #[test]
    fn test_combo_window() {
        assert!(!is_combo(None, 0));
        assert!(!is_combo(None, 1_000));
        assert!(is_combo(Some(1_000), 1_000));
        assert!(is_combo(Some(1_000), 3_999));
        assert!(!is_combo(Some(1_000), 4_000));
    }
}
