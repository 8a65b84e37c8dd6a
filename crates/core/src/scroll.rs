//! Scroll engine - shift the whole screen by N rows or N pixels
//!
//! Vertical scrolls move whole rows with a single overlapping byte copy.
//! Horizontal scrolls work row by row through a 16-bit shift register: the
//! destination byte is the window of two adjacent source bytes selected by
//! the intra-byte shift, so bits carry across byte boundaries but never
//! across rows. The vacated edge is always zero-filled.

use log::trace;

use crate::framebuffer::FrameBuffer;
use crate::types::Direction;

impl<B: AsRef<[u8]> + AsMut<[u8]>> FrameBuffer<B> {
    /// Shift the screen contents `distance` units toward `direction`
    ///
    /// Units are rows for [`Direction::Up`]/[`Direction::Down`] and pixels for
    /// [`Direction::Left`]/[`Direction::Right`]. Content pushed past the edge is
    /// lost; a distance covering the whole screen clears it.
    pub fn shift(&mut self, distance: u16, direction: Direction) {
        if distance == 0 {
            return;
        }
        trace!("shift {} by {}", direction.as_str(), distance);
        match direction {
            Direction::Up => self.shift_up(distance as usize),
            Direction::Down => self.shift_down(distance as usize),
            Direction::Left => self.shift_left(distance as usize),
            Direction::Right => self.shift_right(distance as usize),
        }
    }

    fn shift_up(&mut self, rows: usize) {
        let offset = rows.saturating_mul(self.stride());
        let bytes = self.as_bytes_mut();
        let len = bytes.len();
        if offset >= len {
            bytes.fill(0);
            return;
        }
        bytes.copy_within(offset.., 0);
        bytes[len - offset..].fill(0);
    }

    fn shift_down(&mut self, rows: usize) {
        let offset = rows.saturating_mul(self.stride());
        let bytes = self.as_bytes_mut();
        let len = bytes.len();
        if offset >= len {
            bytes.fill(0);
            return;
        }
        bytes.copy_within(..len - offset, offset);
        bytes[..offset].fill(0);
    }

    fn shift_left(&mut self, distance: usize) {
        let stride = self.stride();
        let skip = distance / 8;
        let bits = (distance % 8) as u32;
        // Padding bits past the right edge must not scroll into view.
        let tail = self.tail_mask();

        for row in self.as_bytes_mut().chunks_exact_mut(stride) {
            if skip >= stride {
                row.fill(0);
                continue;
            }
            row[stride - 1] &= tail;
            for dst in 0..stride {
                let src = dst + skip;
                let hi = row.get(src).copied().unwrap_or(0);
                let lo = row.get(src + 1).copied().unwrap_or(0);
                let window = (u16::from(hi) << 8) | u16::from(lo);
                row[dst] = ((window << bits) >> 8) as u8;
            }
        }
    }

    fn shift_right(&mut self, distance: usize) {
        let stride = self.stride();
        let skip = distance / 8;
        let bits = (distance % 8) as u32;

        for row in self.as_bytes_mut().chunks_exact_mut(stride) {
            if skip >= stride {
                row.fill(0);
                continue;
            }
            for dst in (0..stride).rev() {
                let (hi, lo) = match dst.checked_sub(skip) {
                    Some(0) => (0, row[0]),
                    Some(src) => (row[src - 1], row[src]),
                    None => (0, 0),
                };
                let window = (u16::from(hi) << 8) | u16::from(lo);
                row[dst] = (window >> bits) as u8;
            }
        }
    }

    /// Mask of the visible bits in the last byte of a row
    fn tail_mask(&self) -> u8 {
        match self.width() % 8 {
            0 => 0xFF,
            visible => !(0xFFu8 >> visible),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::types::{Direction, Geometry};
    use crate::FrameBuffer;

    fn from_bytes(width: u16, height: u16, bytes: &[u8]) -> FrameBuffer<Vec<u8>> {
        assert_eq!(bytes.len(), Geometry::new(width, height).buffer_len());
        FrameBuffer::new(bytes.to_vec(), width, height).unwrap()
    }

    #[test]
    fn test_up_and_down_zero_fill() {
        let mut fb = from_bytes(8, 4, &[1, 2, 3, 4]);
        fb.shift(1, Direction::Up);
        assert_eq!(fb.as_bytes(), &[2, 3, 4, 0]);
        fb.shift(2, Direction::Down);
        assert_eq!(fb.as_bytes(), &[0, 0, 2, 3]);
        fb.shift(4, Direction::Up);
        assert_eq!(fb.as_bytes(), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_distance_zero_is_noop() {
        let mut fb = from_bytes(16, 2, &[0xAA, 0x55, 0x0F, 0xF0]);
        for dir in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            fb.shift(0, dir);
        }
        assert_eq!(fb.as_bytes(), &[0xAA, 0x55, 0x0F, 0xF0]);
    }

    #[test]
    fn test_left_carries_across_bytes() {
        let mut fb = from_bytes(24, 1, &[0x01, 0x80, 0xFF]);
        fb.shift(3, Direction::Left);
        assert_eq!(fb.as_bytes(), &[0x0C, 0x07, 0xF8]);
    }

    #[test]
    fn test_right_carries_across_bytes() {
        let mut fb = from_bytes(24, 1, &[0xFF, 0x01, 0x80]);
        fb.shift(3, Direction::Right);
        assert_eq!(fb.as_bytes(), &[0x1F, 0xE0, 0x30]);
    }

    #[test]
    fn test_mixed_byte_and_bit_offsets() {
        let mut fb = from_bytes(24, 1, &[0x00, 0x00, 0xC3]);
        fb.shift(10, Direction::Left);
        assert_eq!(fb.as_bytes(), &[0x03, 0x0C, 0x00]);
        fb.shift(9, Direction::Right);
        assert_eq!(fb.as_bytes(), &[0x00, 0x01, 0x86]);
    }

    #[test]
    fn test_rows_do_not_carry() {
        let mut fb = from_bytes(8, 2, &[0x80, 0x01]);
        fb.shift(1, Direction::Left);
        assert_eq!(fb.as_bytes(), &[0x00, 0x02]);
        fb.shift(2, Direction::Right);
        assert_eq!(fb.as_bytes(), &[0x00, 0x00]);
    }

    #[test]
    fn test_left_ignores_padding_bits() {
        // 12 pixels wide: the low nibble of each second byte is padding.
        let mut fb = from_bytes(12, 1, &[0x00, 0x0F]);
        fb.shift(4, Direction::Left);
        assert_eq!(fb.as_bytes(), &[0x00, 0x00]);
    }

    #[test]
    fn test_wide_horizontal_shift_clears() {
        let mut fb = from_bytes(16, 2, &[0xFF; 4]);
        fb.shift(16, Direction::Right);
        assert_eq!(fb.as_bytes(), &[0x00; 4]);
    }
}
