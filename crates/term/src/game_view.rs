//! GameView: maps a [`SessionSnapshot`] into a terminal framebuffer.
//!
//! The pile is drawn as a grid: one row per layer (top layer first) and one
//! column per ring slot. This module is pure (no I/O).

use crate::core::{DefeatCause, Phase, RingPointer, SessionSnapshot, TileSnapshot};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{TileKind, TILES_PER_LAYER};

const BG: Rgb = Rgb::new(0, 0, 0);
const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const CURSOR_BG: Rgb = Rgb::new(90, 90, 120);
const HINT_BG: Rgb = Rgb::new(40, 90, 60);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Front-end state drawn on top of the snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewState<'a> {
    pub cursor: Option<RingPointer>,
    /// Tile id to highlight as a hint
    pub hint: Option<u16>,
    pub notice: Option<&'a str>,
}

/// Widest ring slot the view will draw.
pub const MAX_CELL_W: u16 = 16;

pub struct GameView {
    /// Width of one ring slot in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self { cell_w: 3 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(1, MAX_CELL_W),
        }
    }

    /// Board frame size (border included) for `layers` rows.
    pub fn frame_size(&self, layers: u8) -> (u16, u16) {
        let w = (TILES_PER_LAYER as u16)
            .saturating_mul(self.cell_w)
            .saturating_add(2);
        let h = (layers.max(1) as u16) + 2;
        (w, h)
    }

    /// Render into an existing framebuffer, reusing its allocation.
    pub fn render_into(
        &self,
        snap: &SessionSnapshot,
        state: &ViewState<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (frame_w, frame_h) = self.frame_size(snap.layers);
        let total_h = frame_h + 4;
        let start_x = viewport.width.saturating_sub(frame_w + 24) / 2;
        let start_y = viewport.height.saturating_sub(total_h) / 2;

        let border = CellStyle::new(Rgb::new(200, 200, 200), BG);
        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w.saturating_sub(2),
            frame_h.saturating_sub(2),
            ' ',
            CellStyle::new(BOARD_BG, BOARD_BG),
        );
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        if snap.phase != Phase::NotStarted {
            self.draw_pile(fb, snap, state, start_x, start_y);
        }

        let inv_y = start_y + frame_h + 1;
        self.draw_inventory(fb, snap, start_x, inv_y);

        if let Some(text) = state.notice {
            let style = CellStyle::new(Rgb::new(255, 220, 120), BG).bold();
            fb.put_str(start_x, inv_y + 2, text, style);
        }

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w + 2, start_y);

        match snap.phase {
            Phase::NotStarted => {
                draw_overlay(fb, start_x, start_y, frame_w, frame_h, "PRESS ENTER TO START", None)
            }
            Phase::Victory => draw_overlay(
                fb,
                start_x,
                start_y,
                frame_w,
                frame_h,
                "VICTORY",
                Some(snap.hud.score),
            ),
            Phase::Defeat => {
                let title = match snap.defeat_cause {
                    Some(DefeatCause::TimeUp) => "DEFEAT - TIME UP",
                    _ => "DEFEAT - INVENTORY FULL",
                };
                draw_overlay(fb, start_x, start_y, frame_w, frame_h, title, Some(snap.hud.score))
            }
            Phase::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &SessionSnapshot,
        state: &ViewState<'_>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, state, viewport, &mut fb);
        fb
    }

    /// Screen column and row of a ring cell inside a frame at `(start_x, start_y)`.
    pub fn cell_origin(
        &self,
        layers: u8,
        layer: u8,
        slot: usize,
        start_x: u16,
        start_y: u16,
    ) -> (u16, u16) {
        let row = layers.saturating_sub(1).saturating_sub(layer) as u16;
        let x = (slot as u16)
            .saturating_mul(self.cell_w)
            .saturating_add(start_x.saturating_add(1));
        (x, start_y.saturating_add(1).saturating_add(row))
    }

    fn draw_pile(
        &self,
        fb: &mut FrameBuffer,
        snap: &SessionSnapshot,
        state: &ViewState<'_>,
        start_x: u16,
        start_y: u16,
    ) {
        for layer in 0..snap.layers {
            for slot in 0..TILES_PER_LAYER {
                let (x, y) = self.cell_origin(snap.layers, layer, slot, start_x, start_y);
                let tile = snap.tile_at(layer, slot);
                let here = RingPointer::new(layer, slot);
                let bg = if state.cursor == Some(here) {
                    CURSOR_BG
                } else if tile.is_some() && tile.map(|t| t.id) == state.hint {
                    HINT_BG
                } else {
                    BOARD_BG
                };
                match tile {
                    Some(t) => self.draw_tile(fb, x, y, t, bg),
                    None => {
                        let style = CellStyle::new(Rgb::new(90, 90, 100), bg).dim();
                        fb.fill_rect(x, y, self.cell_w, 1, ' ', style);
                        fb.put_char(x + self.cell_w / 2, y, '·', style);
                    }
                }
            }
        }
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, x: u16, y: u16, tile: &TileSnapshot, bg: Rgb) {
        let kind = TileKind(tile.kind);
        let color = Rgb::from_hex(kind.color());
        let style = if tile.free {
            CellStyle::new(color, bg).bold()
        } else {
            CellStyle::new(color.shade(2, 5), bg).dim()
        };
        fb.fill_rect(x, y, self.cell_w, 1, ' ', style);
        if self.cell_w >= 3 {
            let (open, close) = if tile.free { ('[', ']') } else { ('(', ')') };
            fb.put_char(x, y, open, style);
            fb.put_char(x + self.cell_w - 1, y, close, style);
        }
        fb.put_char(x + self.cell_w / 2, y, kind.glyph(), style);
    }

    fn draw_inventory(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, x: u16, y: u16) {
        let label = CellStyle::new(Rgb::new(220, 220, 220), BG).bold();
        let empty = CellStyle::new(Rgb::new(90, 90, 100), BG).dim();

        let mut cx = fb.put_str(x, y, "HAND ", label);
        for i in 0..snap.hud.inventory_capacity {
            match snap.inventory.get(i) {
                Some(&k) => {
                    let kind = TileKind(k);
                    let style = CellStyle::new(Rgb::from_hex(kind.color()), BG).bold();
                    fb.put_char(cx, y, '[', style);
                    fb.put_char(cx + 1, y, kind.glyph(), style);
                    fb.put_char(cx + 2, y, ']', style);
                }
                None => {
                    fb.put_str(cx, y, "[ ]", empty);
                }
            }
            cx = cx.saturating_add(3);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &SessionSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x.saturating_add(12) > viewport.width {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), BG);

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, snap.hud.score, value);
        y += 3;

        fb.put_str(panel_x, y, "TIME", label);
        if snap.hud.time_limit_enabled {
            let secs = snap.hud.time_remaining;
            let x = fb.put_u32(panel_x, y + 1, secs / 60, value);
            let x = fb.put_str(x, y + 1, ":", value);
            if secs % 60 < 10 {
                fb.put_char(x, y + 1, '0', value);
                fb.put_u32(x + 1, y + 1, secs % 60, value);
            } else {
                fb.put_u32(x, y + 1, secs % 60, value);
            }
        } else {
            fb.put_str(panel_x, y + 1, "off", value.dim());
        }
        y += 3;

        fb.put_str(panel_x, y, "INVENTORY", label);
        let x = fb.put_u32(panel_x, y + 1, snap.hud.inventory_count as u32, value);
        let x = fb.put_str(x, y + 1, "/", value);
        fb.put_u32(x, y + 1, snap.hud.inventory_capacity as u32, value);
        y += 3;

        fb.put_str(panel_x, y, "TILES", label);
        fb.put_u32(panel_x, y + 1, snap.tiles_on_board as u32, value);
        y += 3;

        fb.put_str(panel_x, y, "DIFFICULTY", label);
        fb.put_str(panel_x, y + 1, snap.difficulty, value);
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

/// Centered title over the board, with an optional final score below it.
fn draw_overlay(
    fb: &mut FrameBuffer,
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
    title: &str,
    score: Option<u32>,
) {
    let style = CellStyle::new(Rgb::new(255, 255, 255), BG).bold();
    let mid_y = start_y + frame_h / 2;
    let centered = |w: u16| start_x + frame_w.saturating_sub(w) / 2;

    let title_w = title.chars().count() as u16;
    fb.put_str(centered(title_w), mid_y, title, style);

    if let Some(score) = score {
        let digits = score.checked_ilog10().unwrap_or(0) as u16 + 1;
        let x = centered(6 + digits);
        let x = fb.put_str(x, mid_y + 1, "SCORE ", style);
        fb.put_u32(x, mid_y + 1, score, style);
    }
}
