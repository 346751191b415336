//! Minimal monochrome BMP encoder: 54-byte header, two-entry black/white
//! color table, bottom-up rows padded to 4-byte boundaries.

use alloc::vec::Vec;

use crate::error::BmpError;
use crate::sink::BitCanvas;

const HEADER_SIZE: usize = 54;
const COLOR_TABLE_SIZE: usize = 8;
/// BITMAPINFOHEADER
const DIB_HEADER_SIZE: u32 = 40;
/// 72 DPI in pixels per meter, the conventional value.
const PPM_72DPI: u32 = 2835;

/// Encode a canvas as an uncompressed 1-bpp BMP.
///
/// Bit 0 maps to black and bit 1 to white, matching the default decode
/// palette, so `encode` → decode → blit reproduces the canvas exactly.
pub fn encode(canvas: &BitCanvas) -> Result<Vec<u8>, BmpError> {
    let width = canvas.width();
    let height = canvas.height();

    let line_bytes = (width as usize).div_ceil(8);
    let stride = line_bytes.div_ceil(4) * 4;
    let data_size = stride
        .checked_mul(height as usize)
        .ok_or(BmpError::DimensionsTooLarge { width, height })?;
    let data_offset = HEADER_SIZE + COLOR_TABLE_SIZE;
    let file_size = data_offset
        .checked_add(data_size)
        .filter(|&size| u32::try_from(size).is_ok())
        .ok_or(BmpError::DimensionsTooLarge { width, height })?;

    let mut out = Vec::with_capacity(file_size);
    out.extend_from_slice(b"BM");
    put_u32_le(&mut out, file_size as u32);
    put_u32_le(&mut out, 0); // reserved
    put_u32_le(&mut out, data_offset as u32);
    put_u32_le(&mut out, DIB_HEADER_SIZE);
    put_u32_le(&mut out, width);
    put_u32_le(&mut out, height);
    put_u16_le(&mut out, 1); // color planes
    put_u16_le(&mut out, 1); // bits per pixel
    put_u32_le(&mut out, 0); // uncompressed
    put_u32_le(&mut out, data_size as u32);
    put_u32_le(&mut out, PPM_72DPI);
    put_u32_le(&mut out, PPM_72DPI);
    put_u32_le(&mut out, 2); // palette colors
    put_u32_le(&mut out, 2); // important colors

    // Color table: entry 0 black, entry 1 white
    put_u32_le(&mut out, 0x0000_0000);
    put_u32_le(&mut out, 0x00FF_FFFF);

    // Rows bottom-up; canvas rows are already packed MSB-first, so each
    // row is a straight copy plus zero padding out to the stride
    for y in (0..height).rev() {
        out.extend_from_slice(canvas.row_bytes(y));
        out.resize(out.len() + (stride - line_bytes), 0);
    }

    Ok(out)
}

fn put_u16_le(out: &mut Vec<u8>, v: u16) {
    out.extend_from_slice(&v.to_le_bytes());
}

fn put_u32_le(out: &mut Vec<u8>, v: u32) {
    out.extend_from_slice(&v.to_le_bytes());
}
