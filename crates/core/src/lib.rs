//! Raster engine - bit-exact drawing into packed monochrome framebuffers
//!
//! This crate turns drawing requests into bit manipulations on a 1-bit-per-pixel
//! framebuffer that a composite video generator scans out. It has **no
//! dependency** on the video hardware itself, making it:
//!
//! - **Allocation-free**: the engine wraps memory owned by the caller and never
//!   allocates or frees it
//! - **Panic-free**: once a [`FrameBuffer`] is constructed, every drawing
//!   operation stays in bounds; off-screen coordinates are clipped or ignored
//! - **Portable**: `no_std`, runs on the microcontroller and on the host
//!
//! # Module Structure
//!
//! - [`framebuffer`]: storage, addressing, single pixels and whole-screen fills
//! - [`span`]: horizontal and vertical runs across byte boundaries
//! - [`raster`]: Bresenham lines and midpoint circles
//! - [`rect`]: outlined and filled rectangles
//! - [`scroll`]: whole-screen shifts in four directions with zero fill
//! - [`blit`]: packed bitmap copies at arbitrary pixel offsets (glyphs, sprites)
//!
//! # Draw Modes
//!
//! Every operation takes a [`DrawMode`]: `Black` clears, `White` sets, `Invert`
//! toggles and `Transparent` leaves the screen untouched.
//!
//! # Example
//!
//! ```
//! use tvraster_core::FrameBuffer;
//! use tvraster_core::types::{Direction, DrawMode, Fill, Geometry};
//!
//! let geometry = Geometry::new(64, 32);
//! let mut vram = vec![0u8; geometry.buffer_len()];
//! let mut fb = FrameBuffer::with_geometry(&mut vram[..], geometry).unwrap();
//!
//! fb.draw_rect(0, 0, 64, 32, DrawMode::White, Fill::Outline);
//! fb.draw_circle(32, 16, 10, DrawMode::White, Fill::Solid);
//! fb.draw_line(0, 0, 63, 31, DrawMode::Invert);
//! fb.shift(1, Direction::Up);
//!
//! // Inside the disk, clear of the inverted diagonal
//! assert_eq!(fb.get_pixel(40, 15), 1);
//! ```
//!
//! # Concurrency
//!
//! Drawing runs to completion on the calling thread through `&mut self`; there
//! is no locking. If the video generator scans the same memory out while a
//! drawing call is in progress, the frame on screen may show a half-finished
//! update (tearing). Synchronizing drawing with the vertical blanking interval
//! is the caller's job.

#![cfg_attr(not(test), no_std)]

pub mod blit;
pub mod error;
pub mod framebuffer;
pub mod raster;
pub mod rect;
pub mod scroll;
pub mod span;

pub use tvraster_types as types;

// Re-export commonly used types for convenience
pub use error::RasterError;
pub use framebuffer::{FrameBuffer, MAX_DIMENSION};
pub use types::{Direction, DrawMode, Fill, Geometry};
