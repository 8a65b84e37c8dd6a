//! Half-block character grid for terminal previews.
//!
//! Terminal cells are roughly twice as tall as they are wide, so each cell
//! shows two vertically stacked pixels using the upper/lower half block glyphs.

use tvraster_core::FrameBuffer;

/// Glyph for a cell whose top and bottom pixels are given.
pub fn half_block(top: bool, bottom: bool) -> char {
    match (top, bottom) {
        (false, false) => ' ',
        (true, false) => '▀',
        (false, true) => '▄',
        (true, true) => '█',
    }
}

/// 2D grid of half-block glyphs, one per terminal cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HalfBlockGrid {
    cols: u16,
    rows: u16,
    cells: Vec<char>,
}

impl HalfBlockGrid {
    pub fn new(cols: u16, rows: u16) -> Self {
        let len = (cols as usize) * (rows as usize);
        Self {
            cols,
            rows,
            cells: vec![' '; len],
        }
    }

    pub fn from_framebuffer<B: AsRef<[u8]>>(fb: &FrameBuffer<B>) -> Self {
        let mut grid = Self::new(0, 0);
        grid.capture(fb);
        grid
    }

    /// Re-render `fb` into this grid.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn capture<B: AsRef<[u8]>>(&mut self, fb: &FrameBuffer<B>) {
        let cols = fb.width();
        let rows = fb.height().div_ceil(2);
        self.cols = cols;
        self.rows = rows;
        self.cells.clear();
        self.cells.reserve((cols as usize) * (rows as usize));

        for row in 0..rows as i16 {
            for x in 0..cols as i16 {
                let top = fb.get_pixel(x, row * 2) == 1;
                let bottom = fb.get_pixel(x, row * 2 + 1) == 1;
                self.cells.push(half_block(top, bottom));
            }
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    pub fn same_size(&self, other: &HalfBlockGrid) -> bool {
        self.cols == other.cols && self.rows == other.rows
    }

    pub fn get(&self, x: u16, y: u16) -> Option<char> {
        if x >= self.cols || y >= self.rows {
            return None;
        }
        Some(self.cells[(y as usize) * (self.cols as usize) + (x as usize)])
    }
}
