//! Transient messages for the HUD.
//!
//! The session queues notices as things happen; front ends drain them with
//! [`GameSession::take_notices`](crate::session::GameSession::take_notices)
//! and show each for `duration_ms`.

use serde::Serialize;

use crate::types::{CLEAR_BONUS, COMBO_BONUS, NOTICE_MS, TRIPLE_POINTS, WELCOME_NOTICE_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Welcome,
    InventoryFull,
    Triple,
    Combo,
    ClearBonus,
    Victory,
    Defeat,
    TimeUp,
    SettingsDeferred,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub duration_ms: u32,
}

impl Notice {
    pub fn new(kind: NoticeKind) -> Self {
        let duration_ms = match kind {
            NoticeKind::Welcome => WELCOME_NOTICE_MS,
            _ => NOTICE_MS,
        };
        Self { kind, duration_ms }
    }

    pub fn text(&self) -> String {
        match self.kind {
            NoticeKind::Welcome => "Pick your settings, then press Enter to start".to_string(),
            NoticeKind::InventoryFull => "Inventory full!".to_string(),
            NoticeKind::Triple => format!("Triple +{}!", TRIPLE_POINTS),
            NoticeKind::Combo => format!("COMBO +{}!", COMBO_BONUS),
            NoticeKind::ClearBonus => format!("CLEAR BONUS +{}!", CLEAR_BONUS),
            NoticeKind::Victory => "VICTORY!".to_string(),
            NoticeKind::Defeat => "DEFEAT".to_string(),
            NoticeKind::TimeUp => "Time's up!".to_string(),
            NoticeKind::SettingsDeferred => "Settings apply on the next start".to_string(),
        }
    }
}
