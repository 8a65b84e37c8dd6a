//! Terminal preview tests, rendered into an in-memory writer

use tvraster::core::FrameBuffer;
use tvraster::term::{HalfBlockGrid, TerminalPreview};
use tvraster::types::{DrawMode, Fill, Resolution};

#[test]
fn test_preview_of_preset_screen() -> anyhow::Result<()> {
    let geometry = Resolution::W224H108.geometry();
    let mut fb = FrameBuffer::with_geometry(vec![0u8; geometry.buffer_len()], geometry)?;
    fb.draw_rect(0, 0, 224, 108, DrawMode::White, Fill::Outline);
    fb.draw_circle(112, 54, 40, DrawMode::White, Fill::Solid);

    let grid = HalfBlockGrid::from_framebuffer(&fb);
    assert_eq!((grid.cols(), grid.rows()), (224, 54));
    assert_eq!(grid.get(0, 0), Some('█'));
    assert_eq!(grid.get(1, 0), Some('▀'));
    assert_eq!(grid.get(112, 27), Some('█'));

    let mut preview = TerminalPreview::new(Vec::new());
    preview.enter()?;
    preview.draw(&fb)?;
    preview.exit()?;
    let out = String::from_utf8(preview.into_inner())?;
    assert!(out.contains('▀'));
    assert!(out.contains('█'));
    Ok(())
}

#[test]
fn test_unchanged_frame_sends_no_cells() -> anyhow::Result<()> {
    let mut fb = FrameBuffer::new(vec![0u8; 8], 16, 4)?;
    fb.fill(DrawMode::White);

    let mut preview = TerminalPreview::new(Vec::new());
    preview.draw(&fb)?;
    let first = preview.into_inner();

    let mut preview = TerminalPreview::new(Vec::new());
    preview.draw(&fb)?;
    preview.draw(&fb)?;
    let both = preview.into_inner();

    let second = String::from_utf8(both[first.len()..].to_vec())?;
    assert!(!second.contains('█'));
    Ok(())
}
