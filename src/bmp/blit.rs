//! Rasterization: bottom-up, bit-packed file rows onto a pixel sink.

use crate::error::BmpError;
use crate::log::trace;
use crate::sink::PixelSink;

use super::decode::BmpImage;

impl BmpImage {
    /// Blit the loaded image onto `sink` with its top-left corner at
    /// `(x0, y0)`.
    ///
    /// Walks the declared geometry exhaustively: one
    /// [`PixelSink::set_pixel`] call per source pixel, file rows
    /// (stored bottom-up) mapped to top-down screen rows.
    ///
    /// Returns [`BmpError::EmptyData`] if no pixel data is loaded and
    /// [`BmpError::TruncatedData`] if the header geometry needs more
    /// bytes than were loaded; in both cases the sink is never invoked.
    pub fn blit<P: PixelSink>(&self, sink: &mut P, x0: u32, y0: u32) -> Result<(), BmpError> {
        let Some(data) = self.pixel_data() else {
            return Err(BmpError::EmptyData);
        };

        let width = self.header().width;
        let height = self.header().height;

        // Bytes holding one row of 1-bpp pixels, then the same padded to
        // the 4-byte boundary the file format requires.
        let line_bytes = (width as usize).div_ceil(8);
        let stride = line_bytes.div_ceil(4) * 4;

        // The bottom file row sits at the highest offset. Check the full
        // span the loops will touch up front, so a header lying about its
        // geometry is a reported error instead of an out-of-bounds read.
        if height > 0 {
            let needed = (height as usize - 1)
                .checked_mul(stride)
                .and_then(|n| n.checked_add(line_bytes))
                .ok_or(BmpError::DimensionsTooLarge { width, height })?;
            if needed > data.len() {
                return Err(BmpError::TruncatedData {
                    needed,
                    actual: data.len(),
                });
            }
        }

        trace!("blitting {width}x{height} at ({x0}, {y0}), row stride {stride}");

        let palette = self.palette();
        for y in 0..height {
            // First row in the file is the visually bottom row
            let file_row = height - 1 - y;
            let row_offset = file_row as usize * stride;

            for x in 0..width {
                let byte = data[row_offset + x as usize / 8];
                let bit = (byte >> (7 - x % 8)) & 1;
                sink.set_pixel(x0 + x, y0 + y, palette[bit as usize]);
            }
        }

        Ok(())
    }
}
