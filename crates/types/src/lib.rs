//! Core types module - shared value types and constants
//!
//! This module defines the fundamental types used throughout the raster engine.
//! All types are plain `Copy` values with no required dependencies, usable from
//! `no_std` firmware as well as from host-side tooling.
//!
//! # Pixel Packing
//!
//! Framebuffers are packed one bit per pixel, MSB first:
//!
//! | Item | Value |
//! |------|-------|
//! | Bytes per row (stride) | `ceil(width / 8)` |
//! | Byte of pixel `(x, y)` | `y * stride + x / 8` |
//! | Mask of pixel `(x, y)` | `0x80 >> (x % 8)` |
//! | Lit pixel | bit set (1) |
//!
//! # Draw Modes
//!
//! The raw mode values understood by the video library are `0` (black),
//! `1` (white) and `2` (invert). Every other raw value is a valid no-op and
//! maps to [`DrawMode::Transparent`].
//!
//! # Examples
//!
//! ```
//! use tvraster_types::{Direction, DrawMode, Geometry, Resolution};
//!
//! // Decode raw modes
//! assert_eq!(DrawMode::from_raw(1), DrawMode::White);
//! assert_eq!(DrawMode::from_raw(7), DrawMode::Transparent);
//!
//! // Apply a mode to a masked byte
//! assert_eq!(DrawMode::Invert.apply(0b1010_0000, 0b1100_0000), 0b0110_0000);
//!
//! // Parse a scroll direction
//! assert_eq!(Direction::from_str("left"), Some(Direction::Left));
//!
//! // Buffer sizing
//! let geometry = Geometry::new(20, 4);
//! assert_eq!(geometry.stride(), 3);
//! assert_eq!(geometry.buffer_len(), 12);
//!
//! assert_eq!(Resolution::W224H216.geometry(), Geometry::new(224, 216));
//! ```

#![cfg_attr(not(test), no_std)]

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of pixels packed into one framebuffer byte
pub const BITS_PER_BYTE: u16 = 8;

/// Screen size used when the video generator is started without a mode
pub const DEFAULT_RESOLUTION: Resolution = Resolution::W224H216;

/// How a target bit (or span of bits) is combined with the framebuffer
///
/// - **Black**: clear the bits (dark)
/// - **White**: set the bits (lit)
/// - **Invert**: toggle the bits (XOR)
/// - **Transparent**: leave the bits untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DrawMode {
    Black,
    White,
    Invert,
    Transparent,
}

impl DrawMode {
    /// Decode a raw mode value (0 = black, 1 = white, 2 = invert)
    ///
    /// Any other value decodes to [`DrawMode::Transparent`].
    ///
    /// # Examples
    ///
    /// ```
    /// use tvraster_types::DrawMode;
    ///
    /// assert_eq!(DrawMode::from_raw(0), DrawMode::Black);
    /// assert_eq!(DrawMode::from_raw(2), DrawMode::Invert);
    /// assert_eq!(DrawMode::from_raw(255), DrawMode::Transparent);
    /// ```
    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            0 => DrawMode::Black,
            1 => DrawMode::White,
            2 => DrawMode::Invert,
            _ => DrawMode::Transparent,
        }
    }

    /// Combine `mask` into `byte` according to the mode
    ///
    /// Bits outside `mask` are always preserved.
    ///
    /// # Examples
    ///
    /// ```
    /// use tvraster_types::DrawMode;
    ///
    /// assert_eq!(DrawMode::White.apply(0x00, 0x0F), 0x0F);
    /// assert_eq!(DrawMode::Black.apply(0xFF, 0x0F), 0xF0);
    /// assert_eq!(DrawMode::Invert.apply(0xF0, 0xFF), 0x0F);
    /// assert_eq!(DrawMode::Transparent.apply(0x5A, 0xFF), 0x5A);
    /// ```
    #[inline(always)]
    pub const fn apply(self, byte: u8, mask: u8) -> u8 {
        match self {
            DrawMode::Black => byte & !mask,
            DrawMode::White => byte | mask,
            DrawMode::Invert => byte ^ mask,
            DrawMode::Transparent => byte,
        }
    }

    /// Parse mode from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("black") {
            Some(DrawMode::Black)
        } else if s.eq_ignore_ascii_case("white") {
            Some(DrawMode::White)
        } else if s.eq_ignore_ascii_case("invert") {
            Some(DrawMode::Invert)
        } else if s.eq_ignore_ascii_case("transparent") {
            Some(DrawMode::Transparent)
        } else {
            None
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            DrawMode::Black => "black",
            DrawMode::White => "white",
            DrawMode::Invert => "invert",
            DrawMode::Transparent => "transparent",
        }
    }
}

impl From<u8> for DrawMode {
    fn from(raw: u8) -> Self {
        DrawMode::from_raw(raw)
    }
}

/// Fill request for closed shapes (rectangles and circles)
///
/// - **Outline**: draw the perimeter only
/// - **Solid**: fill the interior with the shape's draw mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Fill {
    #[default]
    Outline,
    Solid,
}

impl Fill {
    /// Decode a raw fill value, where `-1` means "no fill"
    ///
    /// # Examples
    ///
    /// ```
    /// use tvraster_types::Fill;
    ///
    /// assert_eq!(Fill::from_raw(-1), Fill::Outline);
    /// assert_eq!(Fill::from_raw(1), Fill::Solid);
    /// ```
    pub const fn from_raw(raw: i8) -> Self {
        if raw == -1 {
            Fill::Outline
        } else {
            Fill::Solid
        }
    }

    pub const fn is_solid(self) -> bool {
        matches!(self, Fill::Solid)
    }
}

/// Scroll directions
///
/// Content moves toward the named edge; the opposite edge is zero-filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Decode a raw direction value (0 = up, 1 = down, 2 = left, 3 = right)
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Direction::Up),
            1 => Some(Direction::Down),
            2 => Some(Direction::Left),
            3 => Some(Direction::Right),
            _ => None,
        }
    }

    /// Parse direction from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "up" | "u", "down" | "d", "left" | "l", "right" | "r"
    ///
    /// # Examples
    ///
    /// ```
    /// use tvraster_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("r"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        [
            ("up", "u", Direction::Up),
            ("down", "d", Direction::Down),
            ("left", "l", Direction::Left),
            ("right", "r", Direction::Right),
        ]
        .into_iter()
        .find(|(long, short, _)| s.eq_ignore_ascii_case(long) || s.eq_ignore_ascii_case(short))
        .map(|(_, _, dir)| dir)
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// True for whole-row scrolls (up and down)
    pub const fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

/// Framebuffer dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Geometry {
    pub width: u16,
    pub height: u16,
}

impl Geometry {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Bytes per row, `ceil(width / 8)`
    pub const fn stride(&self) -> usize {
        (self.width as usize).div_ceil(BITS_PER_BYTE as usize)
    }

    /// Bytes the caller must provide for a framebuffer of this size
    pub const fn buffer_len(&self) -> usize {
        self.stride() * self.height as usize
    }

    /// True when either dimension is zero
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl Default for Geometry {
    fn default() -> Self {
        DEFAULT_RESOLUTION.geometry()
    }
}

/// Preset screen sizes of the composite video generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Resolution {
    /// 448x216, full horizontal resolution
    W448H216,
    /// 224x216, the default mode
    W224H216,
    /// 224x108, half vertical resolution
    W224H108,
}

impl Resolution {
    pub const fn geometry(self) -> Geometry {
        match self {
            Resolution::W448H216 => Geometry::new(448, 216),
            Resolution::W224H216 => Geometry::new(224, 216),
            Resolution::W224H108 => Geometry::new(224, 108),
        }
    }

    /// Parse resolution from a `WIDTHxHEIGHT` string
    ///
    /// # Examples
    ///
    /// ```
    /// use tvraster_types::Resolution;
    ///
    /// assert_eq!(Resolution::from_str("448x216"), Some(Resolution::W448H216));
    /// assert_eq!(Resolution::from_str("224X108"), Some(Resolution::W224H108));
    /// assert_eq!(Resolution::from_str("640x480"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        [
            Resolution::W448H216,
            Resolution::W224H216,
            Resolution::W224H108,
        ]
        .into_iter()
        .find(|res| s.eq_ignore_ascii_case(res.as_str()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Resolution::W448H216 => "448x216",
            Resolution::W224H216 => "224x216",
            Resolution::W224H108 => "224x108",
        }
    }
}

impl From<Resolution> for Geometry {
    fn from(res: Resolution) -> Self {
        res.geometry()
    }
}
