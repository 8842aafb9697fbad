//! TerminalRenderer: flushes framebuffers to the real terminal.
//!
//! The first frame (and any frame after a resize or [`TerminalRenderer::invalidate`])
//! is written in full; later frames only rewrite runs of glyphs that changed.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Glyph, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// Frame currently on screen, `None` when unknown
    shown: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            buf: Vec::with_capacity(32 * 1024),
        }
    }

    /// Switch to raw mode on the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf
            .queue(terminal::EnterAlternateScreen)?
            .queue(cursor::Hide)?
            .queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    /// Restore the terminal; safe to call after a failed frame.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf
            .queue(ResetColor)?
            .queue(SetAttribute(Attribute::Reset))?
            .queue(terminal::EnableLineWrap)?
            .queue(cursor::Show)?
            .queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw (e.g. after a resize event).
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Draw `fb`, then swap it with the previously shown frame.
    ///
    /// Keep one framebuffer and pass it every frame; after the call it holds
    /// the stale frame and can be rendered into again.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut shown = match self.shown.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            Some(mut prev) => {
                encode_full_into(fb, &mut self.buf)?;
                prev.resize(fb.width(), fb.height());
                prev
            }
            None => {
                encode_full_into(fb, &mut self.buf)?;
                FrameBuffer::new(fb.width(), fb.height())
            }
        };
        self.flush_buf()?;

        std::mem::swap(&mut shown, fb);
        self.shown = Some(shown);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out` without touching stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?
        .queue(cursor::MoveTo(0, 0))?;

    let mut style = None;
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            print_glyph(out, fb.get(x, y).unwrap_or_default(), &mut style)?;
        }
        if y + 1 < fb.height() {
            out.queue(Print("\r\n"))?;
        }
    }
    reset_style(out)
}

/// Encode only the changed runs of `next` relative to `prev` into `out`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut style = None;
    for (x, y, len) in changed_runs(prev, next) {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            print_glyph(out, next.get(x + dx, y).unwrap_or_default(), &mut style)?;
        }
    }
    reset_style(out)
}

fn print_glyph(out: &mut Vec<u8>, glyph: Glyph, current: &mut Option<CellStyle>) -> Result<()> {
    if *current != Some(glyph.style) {
        apply_style_into(out, glyph.style)?;
        *current = Some(glyph.style);
    }
    out.queue(Print(glyph.ch))?;
    Ok(())
}

fn reset_style(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?
        .queue(SetBackgroundColor(rgb_to_color(style.bg)))?
        .queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// `(x, y, len)` runs of glyphs that differ between two frames, row by row.
///
/// Frames of different sizes are entirely dirty.
fn changed_runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<(u16, u16, u16)> {
    let (w, h) = (next.width(), next.height());
    if prev.width() != w || prev.height() != h {
        return (0..h).map(|y| (0, y, w)).collect();
    }

    let mut runs = Vec::new();
    for y in 0..h {
        let mut run_start: Option<u16> = None;
        for x in 0..=w {
            let dirty = x < w && prev.get(x, y) != next.get(x, y);
            match (dirty, run_start) {
                (true, None) => run_start = Some(x),
                (false, Some(start)) => {
                    runs.push((start, y, x - start));
                    run_start = None;
                }
                _ => {}
            }
        }
    }
    runs
}
