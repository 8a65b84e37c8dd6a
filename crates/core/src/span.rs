//! Span writer - horizontal and vertical runs of pixels
//!
//! Horizontal spans are written a byte at a time: a partial mask for the first
//! and last byte, whole bytes in between. Spans are clipped to the screen, so
//! callers (circle fills in particular) may pass off-screen endpoints.

use crate::framebuffer::FrameBuffer;
use crate::types::DrawMode;

impl<B: AsRef<[u8]> + AsMut<[u8]>> FrameBuffer<B> {
    /// Apply `mode` to row `y` over the inclusive column range between `x0`
    /// and `x1` (in either order)
    pub fn draw_row(&mut self, y: i16, x0: i16, x1: i16, mode: DrawMode) {
        self.span_row(y as i32, x0 as i32, x1 as i32, mode);
    }

    /// Apply `mode` to column `x` over the inclusive row range between `y0`
    /// and `y1` (in either order)
    pub fn draw_column(&mut self, x: i16, y0: i16, y1: i16, mode: DrawMode) {
        self.span_column(x as i32, y0 as i32, y1 as i32, mode);
    }

    pub(crate) fn span_row(&mut self, y: i32, x0: i32, x1: i32, mode: DrawMode) {
        if x0 == x1 {
            self.plot(x0, y, mode);
            return;
        }

        let (width, height) = (self.width() as i32, self.height() as i32);
        let (lo, hi) = (x0.min(x1), x0.max(x1));
        if y < 0 || y >= height || hi < 0 || lo >= width {
            return;
        }
        let lo = lo.max(0);
        let hi = hi.min(width - 1);

        let row = y as usize * self.stride();
        let first = row + (lo as usize >> 3);
        let last = row + (hi as usize >> 3);
        // Leading mask keeps bits left of `lo`, trailing mask keeps bits right of `hi`.
        let left = 0xFFu8 >> (lo & 7) as u32;
        let right = !(0x7Fu8 >> (hi & 7) as u32);

        let bytes = self.as_bytes_mut();
        if first == last {
            bytes[first] = mode.apply(bytes[first], left & right);
            return;
        }
        bytes[first] = mode.apply(bytes[first], left);
        for byte in &mut bytes[first + 1..last] {
            *byte = mode.apply(*byte, 0xFF);
        }
        bytes[last] = mode.apply(bytes[last], right);
    }

    pub(crate) fn span_column(&mut self, x: i32, y0: i32, y1: i32, mode: DrawMode) {
        if y0 == y1 {
            self.plot(x, y0, mode);
            return;
        }

        let (width, height) = (self.width() as i32, self.height() as i32);
        let (lo, hi) = (y0.min(y1), y0.max(y1));
        if x < 0 || x >= width || hi < 0 || lo >= height {
            return;
        }
        let lo = lo.max(0) as usize;
        let hi = hi.min(height - 1) as usize;

        let stride = self.stride();
        let mask = 0x80u8 >> (x & 7) as u32;
        let column = x as usize >> 3;
        let bytes = self.as_bytes_mut();
        for y in lo..=hi {
            let index = y * stride + column;
            bytes[index] = mode.apply(bytes[index], mask);
        }
    }
}
