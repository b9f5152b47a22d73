//! Terminal Tap Match runner (default binary).
//!
//! `tap-match` plays interactively; `tap-match autoplay ...` plays headless
//! sessions and prints JSON reports. Logs go to stderr (`RUST_LOG`).

use std::io;
use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::debug;

use tap_match::cli::{parse_autoplay_args, run_autoplay};
use tap_match::core::{
    GameSession, Notice, PickResolver, RingPicker, RingPointer, SessionSnapshot, Settings,
};
use tap_match::engine::suggest;
use tap_match::input::{handle_key_event, should_quit};
use tap_match::term::{FrameBuffer, GameView, TerminalRenderer, ViewState, Viewport};
use tap_match::types::{Command, TileId, TICK_MS};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let settings = Settings::from_env();

    if let Some(config) = parse_autoplay_args(&args)? {
        return run_autoplay(&config, settings, &mut io::stdout().lock());
    }
    if let Some(arg) = args.first() {
        bail!("unknown argument: {} (try `autoplay`)", arg);
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, settings);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Pointer, hint and notice state owned by the front end.
struct Controls {
    cursor: RingPointer,
    hint: Option<TileId>,
    /// Notice on screen and its remaining time
    shown: Option<(Notice, u32)>,
}

impl Controls {
    fn new() -> Self {
        Self {
            cursor: RingPointer::default(),
            hint: None,
            shown: None,
        }
    }

    fn apply(&mut self, session: &mut GameSession, command: Command) {
        let top = session.pile().top_layer().unwrap_or(0);
        match command {
            Command::CursorLeft => self.cursor = self.cursor.step_slot(-1),
            Command::CursorRight => self.cursor = self.cursor.step_slot(1),
            Command::CursorUp => self.cursor = self.cursor.step_layer(1, top),
            Command::CursorDown => self.cursor = self.cursor.step_layer(-1, top),
            Command::Select => {
                let Some(id) = RingPicker.resolve(session.pile(), &self.cursor) else {
                    return;
                };
                self.hint = None;
                if let Err(e) = session.select(id) {
                    debug!("pick {:?} rejected: {}", id, e);
                }
                // Keep the cursor on the pile as it shrinks.
                let top = session.pile().top_layer().unwrap_or(0);
                self.cursor = self.cursor.step_layer(0, top);
            }
            Command::Hint => {
                self.hint = suggest(&*session);
                if let Some(tile) = self.hint.and_then(|id| session.pile().get(id)) {
                    self.cursor = RingPointer::new(tile.layer, tile.slot());
                }
            }
            Command::Start => {
                session.start();
                self.hint = None;
                let top = session.pile().top_layer().unwrap_or(0);
                self.cursor = RingPointer::new(top, 0);
            }
            Command::CycleDifficulty => session.cycle_difficulty(),
            Command::ToggleTimeLimit => session.toggle_time_limit(),
        }
    }

    /// Advance the notice timer. The newest notice replaces the one on screen.
    fn update_notices(&mut self, session: &mut GameSession, elapsed_ms: u32) {
        if let Some((_, remaining)) = self.shown.as_mut() {
            *remaining = remaining.saturating_sub(elapsed_ms);
            if *remaining == 0 {
                self.shown = None;
            }
        }
        if let Some(latest) = session.take_notices().pop() {
            self.shown = Some((latest, latest.duration_ms));
        }
    }
}

fn run(term: &mut TerminalRenderer, settings: Settings) -> Result<()> {
    let mut session = GameSession::with_settings(settings);
    let mut controls = Controls::new();

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = SessionSnapshot::default();
    let mut notice_text = String::new();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        notice_text.clear();
        if let Some((notice, _)) = controls.shown {
            notice_text.push_str(&notice.text());
        }
        let state = ViewState {
            cursor: session.is_running().then_some(controls.cursor),
            hint: controls.hint.map(|id| id.0),
            notice: (!notice_text.is_empty()).then_some(notice_text.as_str()),
        };
        view.render_into(&snap, &state, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        controls.apply(&mut session, command);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            let elapsed_ms = elapsed.as_millis().min(u32::MAX as u128) as u32;
            session.tick(elapsed_ms);
            controls.update_notices(&mut session, elapsed_ms);
        }
    }
}
