//! End-to-end scenarios on small framebuffers, checked byte for byte

use tvraster::core::FrameBuffer;
use tvraster::types::{Direction, DrawMode, Fill, Geometry};

fn blank(width: u16, height: u16) -> FrameBuffer<Vec<u8>> {
    let geometry = Geometry::new(width, height);
    FrameBuffer::with_geometry(vec![0u8; geometry.buffer_len()], geometry).unwrap()
}

#[test_log::test]
fn test_full_width_row() {
    let mut fb = blank(16, 8);
    fb.fill(DrawMode::Black);
    fb.draw_row(0, 0, 15, DrawMode::White);

    assert_eq!(fb.row(0), Some(&[0xFF, 0xFF][..]));
    for y in 1..8 {
        assert_eq!(fb.row(y), Some(&[0x00, 0x00][..]), "row {y}");
    }
}

#[test]
fn test_horizontal_line_is_inclusive() {
    let mut fb = blank(16, 2);
    fb.draw_line(0, 0, 5, 0, DrawMode::White);
    for x in 0..16 {
        assert_eq!(fb.get_pixel(x, 0), (x <= 5) as u8, "column {x}");
    }
    assert_eq!(fb.row(1), Some(&[0x00, 0x00][..]));
}

#[test]
fn test_byte_aligned_left_shift() {
    let mut fb = FrameBuffer::new(vec![0xF0, 0x0F], 16, 1).unwrap();
    fb.shift(8, Direction::Left);
    assert_eq!(fb.as_bytes(), &[0x0F, 0x00]);
}

#[test_log::test]
fn test_unaligned_bitmap_keeps_surroundings() {
    // Zeroed row: only the bitmap's own bits appear.
    let mut fb = blank(16, 1);
    fb.bitmap(5, 0, &[0b1011_0011], 0, 8, 1);
    assert_eq!(fb.as_bytes(), &[0b0000_0101, 0b1001_1000]);

    // Sentinel canvas: bits outside [5, 13) keep their value.
    let mut fb = blank(24, 3);
    fb.fill(DrawMode::White);
    fb.bitmap(5, 1, &[0b1011_0011], 0, 8, 1);
    assert_eq!(fb.row(0), Some(&[0xFF, 0xFF, 0xFF][..]));
    assert_eq!(fb.row(1), Some(&[0b1111_1101, 0b1001_1111, 0xFF][..]));
    assert_eq!(fb.row(2), Some(&[0xFF, 0xFF, 0xFF][..]));
}

#[test]
fn test_invert_twice_restores_every_operation() {
    let mut fb = blank(40, 24);
    for i in 0..40i16 {
        fb.set_pixel(i, (i * 5) % 24, DrawMode::White);
    }
    let before = fb.as_bytes().to_vec();

    for _ in 0..2 {
        fb.set_pixel(3, 3, DrawMode::Invert);
        fb.draw_row(7, 2, 37, DrawMode::Invert);
        fb.draw_column(11, 0, 23, DrawMode::Invert);
        fb.draw_line(0, 23, 39, 1, DrawMode::Invert);
        fb.draw_circle(20, 12, 9, DrawMode::Invert, Fill::Outline);
        fb.draw_circle(20, 12, 6, DrawMode::Invert, Fill::Solid);
        fb.draw_rect(4, 4, 30, 15, DrawMode::Invert, Fill::Outline);
        fb.draw_rect(6, 6, 9, 5, DrawMode::Invert, Fill::Solid);
        fb.fill(DrawMode::Invert);
    }
    assert_eq!(fb.as_bytes(), &before[..]);
}

#[test]
fn test_transparent_never_writes() {
    let mut fb = blank(40, 24);
    fb.draw_line(0, 0, 39, 23, DrawMode::White);
    let before = fb.as_bytes().to_vec();

    fb.set_pixel(1, 1, DrawMode::Transparent);
    fb.draw_row(5, 0, 39, DrawMode::Transparent);
    fb.draw_column(5, 0, 23, DrawMode::Transparent);
    fb.draw_line(0, 23, 39, 0, DrawMode::Transparent);
    fb.draw_circle(20, 12, 8, DrawMode::Transparent, Fill::Solid);
    fb.draw_rect(2, 2, 20, 10, DrawMode::Transparent, Fill::Outline);
    fb.fill(DrawMode::from_raw(9));
    assert_eq!(fb.as_bytes(), &before[..]);
}
