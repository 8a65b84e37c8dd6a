//! Plain-text pixel art for fixtures and debugging.
//!
//! One line per pixel row, `#` for a lit pixel and `.` for a dark one. This is
//! the format the regression tests use for reference images.

use anyhow::{bail, Context, Result};

use tvraster_core::types::{DrawMode, Geometry};
use tvraster_core::FrameBuffer;

pub const LIT: char = '#';
pub const DARK: char = '.';

/// Render a framebuffer as text, rows separated by `\n`.
pub fn to_art<B: AsRef<[u8]>>(fb: &FrameBuffer<B>) -> String {
    let width = fb.width() as usize;
    let height = fb.height() as usize;
    let mut out = String::with_capacity((width + 1) * height);
    for y in 0..fb.height() as i16 {
        if y > 0 {
            out.push('\n');
        }
        for x in 0..fb.width() as i16 {
            out.push(if fb.get_pixel(x, y) == 1 { LIT } else { DARK });
        }
    }
    out
}

/// Parse text produced by [`to_art`] into an owned framebuffer.
///
/// Leading and trailing blank lines and surrounding whitespace on each line
/// are ignored, so fixtures can be written as indented raw strings.
pub fn from_art(art: &str) -> Result<FrameBuffer<Vec<u8>>> {
    let rows: Vec<&str> = art
        .lines()
        .map(str::trim)
        .skip_while(|line| line.is_empty())
        .collect();
    let rows = match rows.iter().rposition(|line| !line.is_empty()) {
        Some(last) => &rows[..=last],
        None => bail!("pixel art is empty"),
    };

    let width = rows[0].chars().count();
    let width = u16::try_from(width).context("pixel art is too wide")?;
    let height = u16::try_from(rows.len()).context("pixel art is too tall")?;
    let geometry = Geometry::new(width, height);
    let mut fb = FrameBuffer::with_geometry(vec![0u8; geometry.buffer_len()], geometry)?;

    for (y, line) in rows.iter().enumerate() {
        if line.chars().count() != width as usize {
            bail!(
                "row {} has {} pixels, expected {}",
                y,
                line.chars().count(),
                width
            );
        }
        for (x, ch) in line.chars().enumerate() {
            match ch {
                LIT => fb.set_pixel(x as i16, y as i16, DrawMode::White),
                DARK => {}
                other => bail!("unexpected {:?} at ({}, {})", other, x, y),
            }
        }
    }

    Ok(fb)
}
