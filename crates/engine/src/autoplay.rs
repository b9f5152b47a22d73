use log::debug;
use serde::Serialize;
use thiserror::Error;

use crate::core::{Clock, DefeatCause, GameSession, Inventory, Phase, Pile, SelectError};
use crate::types::TileId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AutoplayError {
    #[error("session is not running")]
    NotRunning,
    #[error("no free tile to pick")]
    NoMove,
    #[error("selection rejected: {0}")]
    Rejected(#[from] SelectError),
}

impl AutoplayError {
    pub fn code(self) -> &'static str {
        match self {
            AutoplayError::NotRunning => "not_running",
            AutoplayError::NoMove => "no_move",
            AutoplayError::Rejected(e) => e.code(),
        }
    }
}

/// Summary of one automatically played session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AutoplayReport {
    pub session_id: u32,
    pub outcome: Phase,
    pub defeat_cause: Option<DefeatCause>,
    pub score: u32,
    pub selections: u32,
    /// Board tiles left when play stopped
    pub tiles_left: usize,
}

/// Ranking key for a candidate pick; larger is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct PickRank {
    completes: bool,
    keeps_room: bool,
    reachable: bool,
    held: usize,
    free_same: usize,
}

/// Pick the free tile a careful player would take next.
///
/// In order of preference: a tile completing a held pair; a tile that does
/// not fill the inventory; a kind with enough free copies to finish a
/// triple right now; more copies already held; more free copies. Ties go to
/// the lowest tile id.
pub fn suggest_pick(pile: &Pile, inventory: &Inventory) -> Option<TileId> {
    let room_after = inventory.capacity().saturating_sub(inventory.len() + 1);

    pile.free_tiles()
        .map(|tile| {
            let held = inventory.count_of(tile.kind);
            let free_same = pile.free_tiles().filter(|t| t.kind == tile.kind).count();
            let rank = PickRank {
                completes: held >= 2,
                keeps_room: room_after > 0,
                reachable: held + free_same >= 3,
                held,
                free_same,
            };
            (rank, tile.id)
        })
        // max_by_key keeps the last maximum; reverse the id so the lowest id wins.
        .max_by_key(|&(rank, id)| (rank, std::cmp::Reverse(id)))
        .map(|(_, id)| id)
}

/// Hint for the session's current position.
pub fn suggest<C: Clock>(session: &GameSession<C>) -> Option<TileId> {
    if !session.is_running() {
        return None;
    }
    suggest_pick(session.pile(), session.inventory())
}

/// Play the running session until it ends or `max_selections` picks were made.
pub fn autoplay<C: Clock>(
    session: &mut GameSession<C>,
    max_selections: u32,
) -> Result<AutoplayReport, AutoplayError> {
    if !session.is_running() {
        return Err(AutoplayError::NotRunning);
    }

    let mut selections = 0u32;
    while session.is_running() && selections < max_selections {
        let id = suggest(session).ok_or(AutoplayError::NoMove)?;
        let outcome = session.select(id)?;
        selections += 1;
        if let Some(removal) = outcome.removal {
            debug!(
                "autoplay: triple of kind {} for {} points",
                removal.kind.0, removal.points_awarded
            );
        }
    }

    Ok(AutoplayReport {
        session_id: session.session_id(),
        outcome: session.phase(),
        defeat_cause: session.defeat_cause(),
        score: session.score(),
        selections,
        tiles_left: session.pile().board_count(),
    })
}
