use alloc::format;

use crate::error::BmpError;

/// Resource limits for decoding on memory-constrained targets.
///
/// Checked after header validation and before the pixel buffer is
/// allocated, so a hostile header is rejected without committing memory.
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
    /// Maximum pixel count (`width * height`).
    pub max_pixels: Option<u64>,
    /// Maximum bytes allocated for the raw pixel buffer.
    pub max_alloc_bytes: Option<usize>,
}

impl Limits {
    pub(crate) fn check_geometry(&self, width: u32, height: u32) -> Result<(), BmpError> {
        if let Some(max) = self.max_width {
            if width > max {
                return Err(BmpError::LimitExceeded(format!(
                    "width {width} exceeds limit {max}"
                )));
            }
        }
        if let Some(max) = self.max_height {
            if height > max {
                return Err(BmpError::LimitExceeded(format!(
                    "height {height} exceeds limit {max}"
                )));
            }
        }
        if let Some(max) = self.max_pixels {
            let pixels = u64::from(width) * u64::from(height);
            if pixels > max {
                return Err(BmpError::LimitExceeded(format!(
                    "pixel count {pixels} exceeds limit {max}"
                )));
            }
        }
        Ok(())
    }

    pub(crate) fn check_allocation(&self, bytes: usize) -> Result<(), BmpError> {
        if let Some(max) = self.max_alloc_bytes {
            if bytes > max {
                return Err(BmpError::LimitExceeded(format!(
                    "pixel buffer of {bytes} bytes exceeds limit {max}"
                )));
            }
        }
        Ok(())
    }
}
