use thiserror::Error;

/// Errors raised when attaching the engine to caller-owned memory.
///
/// Drawing operations themselves never fail.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RasterError {
    #[error("framebuffer dimensions must be non-zero (got {width}x{height})")]
    EmptyGeometry { width: u16, height: u16 },
    #[error("framebuffer dimensions exceed the coordinate range (got {width}x{height}, max {max})")]
    GeometryTooLarge { width: u16, height: u16, max: u16 },
    #[error("framebuffer storage too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },
}
