//! FrameBuffer - packed 1-bit-per-pixel screen memory
//!
//! The framebuffer never owns its memory in the allocation sense: it wraps
//! whatever storage the video generator hands over (`&mut [u8]`, a static
//! array, a `Vec<u8>`) and gives it back through [`FrameBuffer::into_inner`].
//!
//! Coordinates: (x, y) where x grows to the right and y grows downward.
//! Pixel (x, y) lives in byte `y * stride + x / 8` under mask `0x80 >> (x % 8)`.

use log::{debug, trace};

use crate::error::RasterError;
use crate::types::{DrawMode, Geometry};

/// Largest width or height: every pixel must be addressable with `i16`
/// coordinates.
pub const MAX_DIMENSION: u16 = i16::MAX as u16;

/// A packed monochrome framebuffer over caller-provided storage
#[derive(Debug, Clone)]
pub struct FrameBuffer<B> {
    mem: B,
    geometry: Geometry,
    /// Bytes per row, cached from the geometry
    stride: usize,
}

impl<B> FrameBuffer<B> {
    pub fn width(&self) -> u16 {
        self.geometry.width
    }

    pub fn height(&self) -> u16 {
        self.geometry.height
    }

    /// Bytes per row
    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Release the underlying storage
    pub fn into_inner(self) -> B {
        self.mem
    }
}

impl<B: AsRef<[u8]>> FrameBuffer<B> {
    /// Attach to `mem` as a `width` x `height` screen
    ///
    /// Storage longer than `stride * height` is accepted; the tail is never
    /// touched.
    pub fn new(mem: B, width: u16, height: u16) -> Result<Self, RasterError> {
        Self::with_geometry(mem, Geometry::new(width, height))
    }

    pub fn with_geometry(mem: B, geometry: Geometry) -> Result<Self, RasterError> {
        if geometry.is_empty() {
            return Err(RasterError::EmptyGeometry {
                width: geometry.width,
                height: geometry.height,
            });
        }
        if geometry.width > MAX_DIMENSION || geometry.height > MAX_DIMENSION {
            return Err(RasterError::GeometryTooLarge {
                width: geometry.width,
                height: geometry.height,
                max: MAX_DIMENSION,
            });
        }
        let needed = geometry.buffer_len();
        let actual = mem.as_ref().len();
        if actual < needed {
            return Err(RasterError::BufferTooSmall { needed, actual });
        }

        debug!(
            "attached {}x{} framebuffer ({} bytes, stride {})",
            geometry.width,
            geometry.height,
            needed,
            geometry.stride()
        );
        Ok(Self {
            mem,
            geometry,
            stride: geometry.stride(),
        })
    }

    /// The packed screen bytes, row-major
    pub fn as_bytes(&self) -> &[u8] {
        &self.mem.as_ref()[..self.geometry.buffer_len()]
    }

    /// One packed row, or `None` past the bottom edge
    pub fn row(&self, y: u16) -> Option<&[u8]> {
        if y >= self.geometry.height {
            return None;
        }
        let start = y as usize * self.stride;
        Some(&self.as_bytes()[start..start + self.stride])
    }

    /// Byte index and bit mask of an in-bounds pixel
    #[inline(always)]
    pub(crate) fn locate(&self, x: i32, y: i32) -> Option<(usize, u8)> {
        if x < 0 || y < 0 || x >= self.geometry.width as i32 || y >= self.geometry.height as i32 {
            return None;
        }
        let index = y as usize * self.stride + (x as usize >> 3);
        Some((index, 0x80 >> (x & 7)))
    }

    /// Read the pixel at (x, y): 1 when lit, 0 when dark or off-screen
    pub fn get_pixel(&self, x: i16, y: i16) -> u8 {
        match self.locate(x as i32, y as i32) {
            Some((index, mask)) => (self.as_bytes()[index] & mask != 0) as u8,
            None => 0,
        }
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> FrameBuffer<B> {
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        let len = self.geometry.buffer_len();
        &mut self.mem.as_mut()[..len]
    }

    /// Apply `mode` to one pixel; out-of-bounds coordinates are ignored
    #[inline(always)]
    pub(crate) fn plot(&mut self, x: i32, y: i32, mode: DrawMode) {
        if let Some((index, mask)) = self.locate(x, y) {
            let bytes = self.as_bytes_mut();
            bytes[index] = mode.apply(bytes[index], mask);
        }
    }

    /// Set, clear or toggle the pixel at (x, y)
    ///
    /// Coordinates outside the screen are silently ignored.
    pub fn set_pixel(&mut self, x: i16, y: i16, mode: DrawMode) {
        self.plot(x as i32, y as i32, mode);
    }

    /// Apply `mode` to every pixel of the screen
    pub fn fill(&mut self, mode: DrawMode) {
        trace!("fill {}", mode.as_str());
        match mode {
            DrawMode::Black => self.as_bytes_mut().fill(0x00),
            DrawMode::White => self.as_bytes_mut().fill(0xFF),
            DrawMode::Invert => {
                for byte in self.as_bytes_mut() {
                    *byte = !*byte;
                }
            }
            DrawMode::Transparent => {}
        }
    }

    /// Clear the whole screen to dark
    pub fn clear(&mut self) {
        self.fill(DrawMode::Black);
    }
}
