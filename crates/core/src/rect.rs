//! Rectangles, outlined or filled.

use crate::framebuffer::FrameBuffer;
use crate::types::{DrawMode, Fill};

impl<B: AsRef<[u8]> + AsMut<[u8]>> FrameBuffer<B> {
    /// Draw a `w` x `h` rectangle with its top-left corner at (x0, y0)
    ///
    /// Outline and fill cover the same footprint: columns `x0..x0 + w` and
    /// rows `y0..y0 + h`. A filled rectangle with a zero extent is empty; an
    /// outline collapses to a single pixel row or column. Negative extents
    /// draw nothing.
    pub fn draw_rect(&mut self, x0: i16, y0: i16, w: i16, h: i16, mode: DrawMode, fill: Fill) {
        if w < 0 || h < 0 {
            return;
        }
        let (x0, y0) = (x0 as i32, y0 as i32);

        if fill.is_solid() {
            if w == 0 {
                return;
            }
            let right = x0 + w as i32 - 1;
            for y in y0..y0 + h as i32 {
                self.span_row(y, x0, right, mode);
            }
            return;
        }

        // Offsets of the far edges from the origin.
        let right = (w as i32 - 1).max(0);
        let bottom = (h as i32 - 1).max(0);

        if right == 0 && bottom == 0 {
            self.plot(x0, y0, mode);
        } else if right == 0 || bottom == 0 {
            self.line(x0, y0, x0 + right, y0 + bottom, mode);
        } else {
            self.line(x0, y0, x0 + right, y0, mode);
            self.line(x0, y0 + bottom, x0 + right, y0 + bottom, mode);
            if bottom > 1 {
                self.line(x0, y0 + 1, x0, y0 + bottom - 1, mode);
                self.line(x0 + right, y0 + 1, x0 + right, y0 + bottom - 1, mode);
            }
        }
    }
}
