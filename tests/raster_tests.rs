//! Rasterizer regression tests against reference images
//!
//! Reference images are text art (`#` lit, `.` dark). They pin down the exact
//! pixel sets, including the quirks existing screens rely on: the doubled
//! line endpoint and the early stop of the circle walk.

use tvraster::core::FrameBuffer;
use tvraster::term::art::{from_art, to_art};
use tvraster::types::{DrawMode, Fill, Geometry};

fn blank(width: u16, height: u16) -> FrameBuffer<Vec<u8>> {
    let geometry = Geometry::new(width, height);
    FrameBuffer::with_geometry(vec![0u8; geometry.buffer_len()], geometry).unwrap()
}

fn assert_art(fb: &FrameBuffer<Vec<u8>>, expected: &str) {
    let expected = from_art(expected).unwrap();
    assert_eq!(
        to_art(fb),
        to_art(&expected),
        "\nactual:\n{}\nexpected:\n{}",
        to_art(fb),
        to_art(&expected)
    );
}

#[test]
fn test_shallow_line_reference() {
    let mut fb = blank(8, 4);
    fb.draw_line(0, 0, 7, 3, DrawMode::White);
    assert_art(
        &fb,
        "
        ##......
        ..##....
        ....##..
        ......##
        ",
    );
}

#[test]
fn test_line_is_direction_independent_for_diagonals() {
    let mut a = blank(16, 16);
    let mut b = blank(16, 16);
    a.draw_line(1, 2, 13, 14, DrawMode::White);
    b.draw_line(13, 14, 1, 2, DrawMode::White);
    assert_eq!(a.as_bytes(), b.as_bytes());
}

#[test]
fn test_invert_line_keeps_far_endpoint() {
    let mut fb = blank(8, 4);
    fb.draw_line(0, 0, 7, 3, DrawMode::Invert);
    assert_art(
        &fb,
        "
        ##......
        ..##....
        ....##..
        ......#.
        ",
    );
}

#[test]
fn test_vertical_line() {
    let mut fb = blank(4, 4);
    fb.draw_line(2, 3, 2, 0, DrawMode::White);
    assert_art(
        &fb,
        "
        ..#.
        ..#.
        ..#.
        ..#.
        ",
    );
}

#[test]
fn test_outline_circle_reference() {
    let mut fb = blank(9, 9);
    fb.draw_circle(4, 4, 3, DrawMode::White, Fill::Outline);
    assert_art(
        &fb,
        "
        .........
        ...###...
        ..#...#..
        .#.....#.
        .#.....#.
        .#.....#.
        ..#...#..
        ...###...
        .........
        ",
    );
}

#[test]
fn test_filled_circle_reference() {
    let mut fb = blank(9, 9);
    fb.draw_circle(4, 4, 3, DrawMode::White, Fill::Solid);
    assert_art(
        &fb,
        "
        .........
        ...###...
        ..#####..
        .#######.
        .#######.
        .#######.
        ..#####..
        ...###...
        .........
        ",
    );
}

#[test]
fn test_inverted_filled_circle_reference() {
    // Rows are spanned once and the ring is plotted on top, so rim pixels
    // outside the diagonals are toggled twice and end up dark.
    let mut fb = blank(9, 9);
    fb.draw_circle(4, 4, 3, DrawMode::Invert, Fill::Solid);
    assert_art(
        &fb,
        "
        .........
        ...###...
        ..#####..
        ..#####..
        ..#####..
        ..#####..
        ..#####..
        ...###...
        .........
        ",
    );
}

#[test]
fn test_zero_radius_circle_under_invert() {
    let mut fb = blank(9, 9);
    fb.draw_circle(4, 4, 0, DrawMode::Invert, Fill::Outline);
    assert!(fb.as_bytes().iter().all(|&b| b == 0));
    fb.draw_circle(4, 4, 0, DrawMode::Invert, Fill::Solid);
    assert_eq!(fb.get_pixel(4, 4), 1);
}

#[test]
fn test_circle_clipped_at_corner() {
    let mut fb = blank(9, 9);
    fb.draw_circle(0, 0, 3, DrawMode::White, Fill::Outline);
    assert_art(
        &fb,
        "
        ...#.....
        ...#.....
        ..#......
        ##.......
        .........
        .........
        .........
        .........
        .........
        ",
    );
}
