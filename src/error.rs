use alloc::string::String;

/// Errors from BMP decoding and blitting.
///
/// Every pipeline stage reports its outcome to the caller; nothing here is
/// fatal to the process and no stage retries internally.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    /// The input does not start with the `BM` magic bytes.
    #[error("bad signature: not a BMP file")]
    BadSignature,

    /// Valid BMP, but not uncompressed 1-bit monochrome.
    #[error("not a 1-bit monochrome BMP ({bits_per_pixel} bpp, compression {compression})")]
    NotBlackAndWhite { bits_per_pixel: u16, compression: u32 },

    /// The color table declares a size other than 0 or 2 entries.
    #[error("invalid palette: {0} colors (only 0 or 2 are allowed)")]
    InvalidPalette(u32),

    /// Blit was attempted before pixel data was successfully loaded.
    #[error("no pixel data loaded")]
    EmptyData,

    /// The source delivered fewer pixel data bytes than the header declares.
    #[error("short read: expected {expected} pixel data bytes, got {actual}")]
    DataRead { expected: usize, actual: usize },

    /// The declared geometry needs more pixel data than was loaded.
    #[error("pixel data too small for geometry: need {needed} bytes, got {actual}")]
    TruncatedData { needed: usize, actual: usize },

    /// The source ended in the middle of the header or color table.
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// Width/height overflow the arithmetic used to size the raster.
    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    /// A caller-supplied [`crate::Limits`] bound was exceeded.
    #[error("limit exceeded: {0}")]
    LimitExceeded(String),
}
