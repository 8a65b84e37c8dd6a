//! Blit engine - copy packed bitmaps onto the screen at any pixel offset
//!
//! Bitmap resources use the framebuffer's own packing (row-major, MSB first,
//! rows padded to a whole byte), optionally preceded by a width byte and a
//! height byte:
//!
//! ```text
//! [width] [height] row0 byte0 .. row0 byteN  row1 byte0 ..
//! ```
//!
//! Each source byte is split across two destination bytes when the target
//! column is not byte aligned. Destination bits outside the bitmap's columns
//! are preserved, so glyphs can be packed tightly next to each other.

use log::trace;

use crate::framebuffer::FrameBuffer;

impl<B: AsRef<[u8]> + AsMut<[u8]>> FrameBuffer<B> {
    /// Copy a `width` x `height` bitmap from `source[offset..]` to (x, y)
    ///
    /// A `width` or `height` of 0 is read from the resource header instead,
    /// width first. Pixels landing off-screen are dropped; a source shorter
    /// than the declared size stops the copy at the last complete row.
    pub fn bitmap(&mut self, x: i16, y: i16, source: &[u8], offset: usize, width: u16, height: u16) {
        let mut cursor = offset;
        let mut header = |declared: u16| -> Option<u16> {
            if declared != 0 {
                return Some(declared);
            }
            let value = *source.get(cursor)?;
            cursor += 1;
            Some(value as u16)
        };
        let (Some(width), Some(height)) = (header(width), header(height)) else {
            return;
        };
        if width == 0 || height == 0 {
            return;
        }
        let Some(data) = source.get(cursor..) else {
            return;
        };
        trace!("bitmap {}x{} at ({}, {})", width, height, x, y);

        let (x, y) = (x as i32, y as i32);
        let src_stride = (width as usize).div_ceil(8);
        let first_byte = x.div_euclid(8);
        let rshift = x.rem_euclid(8) as u32;
        // Columns that may be written, clipped to the screen.
        let lo = x.max(0);
        let hi = (x + width as i32).min(self.width() as i32);
        if lo >= hi {
            return;
        }

        let screen_height = self.height() as i32;
        let stride = self.stride();
        let bytes = self.as_bytes_mut();
        for (line, src_row) in data.chunks_exact(src_stride).take(height as usize).enumerate() {
            let dy = y + line as i32;
            if dy < 0 {
                continue;
            }
            if dy >= screen_height {
                break;
            }
            let row_start = dy as usize * stride;

            let mut carry = 0u8;
            for k in 0..=src_stride {
                let current = src_row.get(k).copied().unwrap_or(0);
                let window = (u16::from(carry) << 8) | u16::from(current);
                carry = current;

                let column = first_byte + k as i32;
                let mask = column_mask(column, lo, hi);
                if mask == 0 {
                    continue;
                }
                let index = row_start + column as usize;
                let value = (window >> rshift) as u8;
                bytes[index] = (bytes[index] & !mask) | (value & mask);
            }
        }
    }
}

/// Bits of destination byte `column` that fall inside pixel range `[lo, hi)`
fn column_mask(column: i32, lo: i32, hi: i32) -> u8 {
    let base = column * 8;
    let start = (lo - base).max(0);
    let end = (hi - base).min(8);
    if start >= end {
        return 0;
    }
    ((0xFFu16 >> start) & !(0xFFu16 >> end)) as u8
}
