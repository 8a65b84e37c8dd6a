//! TerminalPreview: mirrors a monochrome framebuffer onto a terminal.
//!
//! The preview stands in for the composite video output while developing on a
//! workstation. It starts with a full redraw and afterwards only rewrites the
//! runs of cells that changed since the previous frame.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};
use log::trace;

use tvraster_core::FrameBuffer;

use crate::grid::HalfBlockGrid;

pub struct TerminalPreview<W: Write> {
    out: W,
    last: Option<HalfBlockGrid>,
    next: HalfBlockGrid,
    buf: Vec<u8>,
}

impl TerminalPreview<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalPreview<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            last: None,
            next: HalfBlockGrid::new(0, 0),
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, diffing against the previously drawn frame.
    ///
    /// The two internal grids are swapped after each frame, so steady-state
    /// drawing does not allocate.
    pub fn draw<B: AsRef<[u8]>>(&mut self, fb: &FrameBuffer<B>) -> Result<()> {
        self.next.capture(fb);

        self.buf.clear();
        match &self.last {
            Some(prev) if prev.same_size(&self.next) => {
                encode_diff_into(prev, &self.next, &mut self.buf)?
            }
            _ => encode_full_into(&self.next, &mut self.buf)?,
        }
        trace!("preview frame: {} bytes", self.buf.len());
        self.flush_buf()?;

        let prev = self.last.take().unwrap_or_else(|| HalfBlockGrid::new(0, 0));
        self.last = Some(std::mem::replace(&mut self.next, prev));
        Ok(())
    }

    /// Release the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(grid: &HalfBlockGrid, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;
    apply_palette_into(out)?;

    for y in 0..grid.rows() {
        for x in 0..grid.cols() {
            out.queue(Print(grid.get(x, y).unwrap_or(' ')))?;
        }
        if y + 1 < grid.rows() {
            out.queue(Print("\r\n"))?;
        }
    }

    out.queue(ResetColor)?;
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_diff_into(prev: &HalfBlockGrid, next: &HalfBlockGrid, out: &mut Vec<u8>) -> Result<()> {
    apply_palette_into(out)?;

    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            out.queue(Print(next.get(x + dx, y).unwrap_or(' ')))?;
        }
        Ok(())
    })?;

    out.queue(ResetColor)?;
    Ok(())
}

/// Lit pixels are drawn in the foreground color on a black background, like
/// a monochrome monitor.
fn apply_palette_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(SetForegroundColor(Color::White))?;
    out.queue(SetBackgroundColor(Color::Black))?;
    Ok(())
}

fn for_each_changed_run(
    prev: &HalfBlockGrid,
    next: &HalfBlockGrid,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if !prev.same_size(next) {
        // Size changed: treat everything as dirty in a single pass (row runs).
        for y in 0..next.rows() {
            f(0, y, next.cols())?;
        }
        return Ok(());
    }

    let w = next.cols();
    let h = next.rows();

    for y in 0..h {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}
