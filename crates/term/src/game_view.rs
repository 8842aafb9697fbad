//! GameView: draws a `core::GameSnapshot` into a terminal framebuffer.
//!
//! Pure (no I/O), so layouts can be asserted in tests.

use crate::core::grid::Cell;
use crate::core::{get_layout, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Rotation, Shape};

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Top-left corner of the playfield frame and its size in terminal cells
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// Renders a snapshot as a bordered playfield with a side panel.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps squares roughly square.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_pause(snap, false, viewport, fb);
    }

    /// Like [`render_into`](Self::render_into), with a PAUSED overlay when
    /// `paused` is set. Pausing lives in the front-end, not the engine.
    pub fn render_into_with_pause(
        &self,
        snap: &GameSnapshot,
        paused: bool,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).glyph(' '));

        let frame = self.frame(snap, viewport);

        let bg = CellStyle::new(Rgb::new(80, 80, 90), PLAYFIELD_BG);
        fb.fill_rect(frame.x + 1, frame.y + 1, frame.w - 2, frame.h - 2, ' ', bg);
        draw_border(fb, frame, CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG));

        for row in 0..snap.rows {
            for col in 0..snap.cols {
                let (ch, style) = cell_glyph(snap.cell(row, col));
                self.fill_cell(fb, frame, row as u16, col as u16, ch, style);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if paused {
            draw_overlay_text(fb, frame, "PAUSED");
        } else if snap.game_over {
            draw_overlay_text(fb, frame, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn frame(&self, snap: &GameSnapshot, viewport: Viewport) -> Frame {
        let w = (snap.cols as u16).saturating_mul(self.cell_w).saturating_add(2);
        let h = (snap.rows as u16).saturating_mul(self.cell_h).saturating_add(2);
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        Frame { x, y, w, h }
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        row: u16,
        col: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = frame.x + 1 + col * self.cell_w;
        let py = frame.y + 1 + row * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG)
        };
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = frame.y;
        for (name, v) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
            ("SPEED ms", snap.fall_interval_ms),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), v, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        for shape in &snap.upcoming {
            if y.saturating_add(2) >= viewport.height {
                break;
            }
            draw_preview(fb, panel_x, y, *shape);
            y = y.saturating_add(3);
        }
    }
}

fn cell_glyph(cell: Cell) -> (char, CellStyle) {
    match cell {
        Cell::Empty => (
            '·',
            CellStyle {
                dim: true,
                ..CellStyle::new(Rgb::new(90, 90, 100), PLAYFIELD_BG)
            },
        ),
        Cell::Active(color) => (
            '█',
            CellStyle {
                bold: true,
                ..CellStyle::new(color, PLAYFIELD_BG)
            },
        ),
        Cell::Inactive(color) => ('█', CellStyle::new(color, PLAYFIELD_BG)),
        Cell::Highlighted(color) => (
            '░',
            CellStyle {
                dim: true,
                ..CellStyle::new(color, PLAYFIELD_BG)
            },
        ),
    }
}

/// Draw `shape` at rotation 0 in a 4x3 box, two columns per block.
fn draw_preview(fb: &mut FrameBuffer, x: u16, y: u16, shape: Shape) {
    let style = CellStyle::new(shape.color(), PANEL_BG);
    for (dr, dc) in get_layout(shape, Rotation::North) {
        // Offsets at rotation 0 span rows -1..=1 and cols -1..=2.
        let px = x.saturating_add(((dc + 1) as u16) * 2);
        let py = y.saturating_add((dr + 1) as u16);
        fb.fill_rect(px, py, 2, 1, '█', style);
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
    let Frame { x, y, w, h } = frame;
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

fn draw_overlay_text(fb: &mut FrameBuffer, frame: Frame, text: &str) {
    let text_w = text.chars().count() as u16;
    let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
    let y = frame.y.saturating_add(frame.h / 2);
    let style = CellStyle {
        bold: true,
        ..CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG)
    };
    fb.put_str(x, y, text, style);
}
