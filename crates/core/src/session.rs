//! Game session module - the top-level state machine
//!
//! A session owns the pile, the inventory, the score and the countdown. All
//! mutation goes through its methods, one event at a time:
//!
//! ```text
//! NotStarted --start--> Running --select/tick--> Running
//!                          |
//!                          +--> Victory   (board emptied by a triple)
//!                          +--> Defeat    (inventory stuck, or time up)
//! Victory / Defeat --start--> Running
//! ```
//!
//! Selections resolve completely inside [`GameSession::select`]: the tile is
//! held, any triple is removed and scored, and win/loss is decided before the
//! call returns. Front ends may animate afterwards; nothing waits on them.

use log::info;
use serde::Serialize;

use crate::clock::{Clock, MonotonicClock};
use crate::error::SelectError;
use crate::inventory::{Inventory, RemovalResult, Slot};
use crate::notice::{Notice, NoticeKind};
use crate::pile::Pile;
use crate::rng::SimpleRng;
use crate::settings::Settings;
use crate::snapshot::{HudSnapshot, SessionSnapshot, TileSnapshot};
use crate::types::{Difficulty, DifficultyConfig, TileId, COUNTDOWN_STEP_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    NotStarted,
    Running,
    Victory,
    Defeat,
}

impl Phase {
    pub fn is_over(self) -> bool {
        matches!(self, Phase::Victory | Phase::Defeat)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DefeatCause {
    /// Inventory full with nothing to match
    InventoryFull,
    /// Countdown reached zero
    TimeUp,
}

/// Result of a successful selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOutcome {
    pub slot: Slot,
    /// Set when the selection completed a triple
    pub removal: Option<RemovalResult>,
    /// Phase after the selection was resolved
    pub phase: Phase,
}

/// Armed countdown. Dropping it cancels every pending tick.
#[derive(Debug, Clone, Copy, Default)]
struct Countdown {
    carry_ms: u32,
}

pub struct GameSession<C: Clock = MonotonicClock> {
    clock: C,
    rng: SimpleRng,
    /// Settings for the next start
    settings: Settings,
    /// Rules of the current (or last) session
    config: DifficultyConfig,
    time_limit_enabled: bool,
    phase: Phase,
    defeat_cause: Option<DefeatCause>,
    pile: Pile,
    inventory: Inventory,
    score: u32,
    time_remaining: u32,
    countdown: Option<Countdown>,
    /// Monotonic session id (increments on every start).
    session_id: u32,
    notices: Vec<Notice>,
}

impl<C: Clock> GameSession<C> {
    /// Create an idle session. Nothing is generated until [`start`](Self::start).
    pub fn new(settings: Settings, clock: C) -> Self {
        let rng = match settings.seed {
            Some(seed) => SimpleRng::new(seed),
            None => SimpleRng::from_time(),
        };
        let config = settings.config();

        Self {
            clock,
            rng,
            settings,
            config,
            time_limit_enabled: settings.time_limit,
            phase: Phase::NotStarted,
            defeat_cause: None,
            pile: Pile::default(),
            inventory: Inventory::new(config.inventory_size),
            score: 0,
            time_remaining: config.time_limit_secs,
            countdown: None,
            session_id: 0,
            notices: vec![Notice::new(NoticeKind::Welcome)],
        }
    }

    /// Start (or restart) with the current settings.
    pub fn start(&mut self) {
        let config = self.settings.config();
        self.start_with_config(config);
    }

    /// Start (or restart) with explicit rules. The time-limit flag still
    /// comes from the settings.
    pub fn start_with_config(&mut self, config: DifficultyConfig) {
        let pile = Pile::generate(&config, &mut self.rng);
        self.start_with_pile(config, pile);
    }

    /// Start (or restart) on a prepared pile.
    pub fn start_with_pile(&mut self, config: DifficultyConfig, pile: Pile) {
        self.config = config;
        self.time_limit_enabled = self.settings.time_limit;
        self.pile = pile;
        self.inventory = Inventory::new(config.inventory_size);
        self.score = 0;
        self.time_remaining = config.time_limit_secs;
        self.countdown = self.time_limit_enabled.then(Countdown::default);
        self.defeat_cause = None;
        self.phase = Phase::Running;
        self.session_id = self.session_id.wrapping_add(1);

        info!(
            "session {} started: {} tiles, inventory {}, time limit {}",
            self.session_id,
            self.pile.len(),
            config.inventory_size,
            if self.time_limit_enabled {
                format!("{}s", self.time_remaining)
            } else {
                "off".to_string()
            }
        );
    }

    /// Select a board tile.
    ///
    /// Only accepted while running; otherwise nothing changes and
    /// `NotRunning` is returned. A full inventory also queues an
    /// `InventoryFull` notice.
    pub fn select(&mut self, id: TileId) -> Result<SelectOutcome, SelectError> {
        if self.phase != Phase::Running {
            return Err(SelectError::NotRunning);
        }

        let slot = match self.inventory.select(&mut self.pile, id) {
            Ok(slot) => slot,
            Err(err) => {
                if err == SelectError::InventoryFull {
                    self.notify(NoticeKind::InventoryFull);
                }
                return Err(err);
            }
        };

        let removal = self.resolve_triples();
        Ok(SelectOutcome {
            slot,
            removal,
            phase: self.phase,
        })
    }

    /// Remove a pending triple, or end the session if the inventory is stuck.
    fn resolve_triples(&mut self) -> Option<RemovalResult> {
        let Some(kind) = self.inventory.check_triples() else {
            if self.inventory.is_full() {
                self.finish(Phase::Defeat, Some(DefeatCause::InventoryFull));
            }
            return None;
        };

        let now = self.clock.now_ms();
        let removal = self.inventory.remove_triple(&mut self.pile, kind, now)?;
        self.score = self.score.saturating_add(removal.points_awarded);

        self.notify(if removal.combo_triggered {
            NoticeKind::Combo
        } else {
            NoticeKind::Triple
        });
        if removal.clear_bonus_triggered {
            self.notify(NoticeKind::ClearBonus);
        }

        if self.pile.board_count() == 0 {
            self.finish(Phase::Victory, None);
        }
        Some(removal)
    }

    /// Advance the countdown by `elapsed_ms`.
    ///
    /// Returns true if at least one whole second elapsed. Ignored unless a
    /// countdown is armed, which only happens while running.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        let Some(countdown) = self.countdown.as_mut() else {
            return false;
        };

        countdown.carry_ms = countdown.carry_ms.saturating_add(elapsed_ms);
        let mut stepped = false;
        while countdown.carry_ms >= COUNTDOWN_STEP_MS {
            countdown.carry_ms -= COUNTDOWN_STEP_MS;
            self.time_remaining = self.time_remaining.saturating_sub(1);
            stepped = true;
            if self.time_remaining == 0 {
                break;
            }
        }

        if stepped && self.time_remaining == 0 {
            self.finish(Phase::Defeat, Some(DefeatCause::TimeUp));
        }
        stepped
    }

    fn finish(&mut self, phase: Phase, cause: Option<DefeatCause>) {
        self.countdown = None;
        self.phase = phase;
        self.defeat_cause = cause;

        if cause == Some(DefeatCause::TimeUp) {
            if self.time_limit_enabled {
                self.score = 0;
            }
            self.notify(NoticeKind::TimeUp);
        }
        self.notify(match phase {
            Phase::Victory => NoticeKind::Victory,
            _ => NoticeKind::Defeat,
        });

        info!(
            "session {} ended: {:?} ({:?}), score {}",
            self.session_id, phase, cause, self.score
        );
    }

    /// Change the difficulty. Deferred to the next start while running.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.settings.difficulty = difficulty;
        self.apply_settings();
    }

    /// Enable or disable the time limit. Deferred to the next start while running.
    pub fn set_time_limit(&mut self, enabled: bool) {
        self.settings.time_limit = enabled;
        self.apply_settings();
    }

    pub fn cycle_difficulty(&mut self) {
        self.set_difficulty(self.settings.difficulty.next());
    }

    pub fn toggle_time_limit(&mut self) {
        self.set_time_limit(!self.settings.time_limit);
    }

    fn apply_settings(&mut self) {
        if self.phase == Phase::Running {
            self.notify(NoticeKind::SettingsDeferred);
            return;
        }
        self.config = self.settings.config();
        self.time_limit_enabled = self.settings.time_limit;
        if self.phase == Phase::NotStarted {
            self.inventory = Inventory::new(self.config.inventory_size);
            self.time_remaining = self.config.time_limit_secs;
        }
    }

    fn notify(&mut self, kind: NoticeKind) {
        self.notices.push(Notice::new(kind));
    }

    /// Take the queued notices (oldest first).
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn defeat_cause(&self) -> Option<DefeatCause> {
        self.defeat_cause
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn config(&self) -> &DifficultyConfig {
        &self.config
    }

    pub fn pile(&self) -> &Pile {
        &self.pile
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn time_limit_enabled(&self) -> bool {
        self.time_limit_enabled
    }

    /// Whether a countdown is currently armed.
    pub fn countdown_armed(&self) -> bool {
        self.countdown.is_some()
    }

    pub fn session_id(&self) -> u32 {
        self.session_id
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot {
            score: self.score,
            inventory_count: self.inventory.len(),
            inventory_capacity: self.inventory.capacity(),
            time_remaining: self.time_remaining,
            time_limit_enabled: self.time_limit_enabled,
        }
    }

    /// Fill `out`, reusing its allocations.
    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.session_id = self.session_id;
        out.phase = self.phase;
        out.defeat_cause = self.defeat_cause;
        out.difficulty = self.settings.difficulty.as_str();
        out.hud = self.hud();
        out.tiles_on_board = self.pile.board_count();
        out.layers = self.config.layers;

        out.inventory.clear();
        out.inventory
            .extend(self.inventory.slots().iter().map(|s| s.kind.0));

        out.tiles.clear();
        out.tiles
            .extend(self.pile.board_tiles().map(TileSnapshot::from));
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl GameSession<MonotonicClock> {
    /// Session on the real clock.
    pub fn with_settings(settings: Settings) -> Self {
        Self::new(settings, MonotonicClock::new())
    }
}
