//! Rasterizer - lines and circles
//!
//! Both algorithms are integer-only and plot through the clipped pixel and
//! span primitives, so shapes may extend past the screen edges.
//!
//! Two behaviors differ from the textbook versions and are relied upon by
//! existing screens:
//!
//! - A line plots its far endpoint twice (once up front, once when the walk
//!   arrives). Under [`DrawMode::Invert`] the endpoint therefore ends up
//!   unchanged.
//! - The circle walk stops as soon as `x + 1 >= y`, one step before the octants
//!   would meet, so the diagonal pixels are not plotted by two octants.

use crate::framebuffer::FrameBuffer;
use crate::types::{DrawMode, Fill};

impl<B: AsRef<[u8]> + AsMut<[u8]>> FrameBuffer<B> {
    /// Draw a line from (x0, y0) to (x1, y1) with Bresenham's algorithm
    pub fn draw_line(&mut self, x0: i16, y0: i16, x1: i16, y1: i16, mode: DrawMode) {
        self.line(x0 as i32, y0 as i32, x1 as i32, y1 as i32, mode);
    }

    /// Draw a circle of `radius` around (cx, cy), optionally filled
    ///
    /// Small radii take the same path as any other: with a radius of 0 the
    /// four cardinal points all land on the center, so under
    /// [`DrawMode::Invert`] an outline leaves it unchanged and a filled
    /// circle toggles it. A negative radius plots the mirrored cardinal
    /// points only.
    pub fn draw_circle(&mut self, cx: i16, cy: i16, radius: i16, mode: DrawMode, fill: Fill) {
        let (cx, cy, radius) = (cx as i32, cy as i32, radius as i32);

        let mut f = 1 - radius;
        let mut ddf_x = 1;
        let mut ddf_y = -2 * radius;
        let mut x = 0;
        let mut y = radius;
        let mut prev_x = x;
        let mut prev_y = y;

        if fill.is_solid() {
            self.span_row(cy, cx - radius, cx + radius, mode);
        }
        self.plot(cx, cy + radius, mode);
        self.plot(cx, cy - radius, mode);
        self.plot(cx + radius, cy, mode);
        self.plot(cx - radius, cy, mode);

        while x + 1 < y {
            if f >= 0 {
                y -= 1;
                ddf_y += 2;
                f += ddf_y;
            }
            x += 1;
            ddf_x += 2;
            f += ddf_x;

            if fill.is_solid() {
                // Only emit a row the first time its y is reached.
                if prev_y != y {
                    self.span_row(cy + y, cx - x, cx + x, mode);
                    self.span_row(cy - y, cx - x, cx + x, mode);
                }
                if prev_x != x && x != y {
                    self.span_row(cy + x, cx - y, cx + y, mode);
                    self.span_row(cy - x, cx - y, cx + y, mode);
                }
                prev_y = y;
                prev_x = x;
            }
            // The ring is plotted even when filled: a row is emitted with the
            // x of the step that first reached it, the ring supplies the rest.
            self.plot_octants(cx, cy, x, y, mode);
        }
    }

    pub(crate) fn line(&mut self, mut x0: i32, mut y0: i32, x1: i32, y1: i32, mode: DrawMode) {
        if x0 == x1 && y0 == y1 {
            self.plot(x0, y0, mode);
            return;
        }

        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let sx = (x1 - x0).signum();
        let sy = (y1 - y0).signum();
        let mut err = dx - dy;

        self.plot(x1, y1, mode);
        loop {
            self.plot(x0, y0, mode);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x0 += sx;
            }
            if e2 < dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    fn plot_octants(&mut self, cx: i32, cy: i32, x: i32, y: i32, mode: DrawMode) {
        for (px, py) in [
            (cx + x, cy + y),
            (cx - x, cy + y),
            (cx + x, cy - y),
            (cx - x, cy - y),
            (cx + y, cy + x),
            (cx - y, cy + x),
            (cx + y, cy - x),
            (cx - y, cy - x),
        ] {
            self.plot(px, py, mode);
        }
    }
}
