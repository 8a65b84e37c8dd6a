//! Host-side views of a monochrome framebuffer.
//!
//! The raster engine targets a composite video generator that is not around
//! when developing on a workstation. This crate mirrors a framebuffer onto a
//! terminal instead, and converts it to and from plain-text pixel art for
//! fixtures.
//!
//! - [`art`]: `#`/`.` text rendering and parsing
//! - [`grid`]: two pixels per terminal cell with half-block glyphs
//! - [`renderer`]: diffing crossterm preview

pub mod art;
pub mod grid;
pub mod renderer;

pub use tvraster_core as core;
pub use tvraster_types as types;

pub use art::{from_art, to_art};
pub use grid::{half_block, HalfBlockGrid};
pub use renderer::{encode_diff_into, encode_full_into, TerminalPreview};
