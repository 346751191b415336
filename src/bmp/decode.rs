//! Header parsing, structural validation, palette derivation, and
//! pixel-data loading.
//!
//! The wire format is the classic BITMAPFILEHEADER + BITMAPINFOHEADER
//! layout: fifteen little-endian fields, 54 bytes total, followed (for
//! paletted files) by the color table.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::BmpError;
use crate::limits::Limits;
use crate::log::{debug, trace};
use crate::source::ByteSource;

/// Absolute offsets of the two color-table entries, directly after the
/// 54-byte header region.
const PALETTE_ENTRY_0: usize = 0x36;
const PALETTE_ENTRY_1: usize = 0x3A;

/// Bits of a color-table entry that carry color; the top byte is alpha
/// and is ignored when classifying an entry as on or off.
const RGB_MASK: u32 = 0x00FF_FFFF;

/// Raw file-header + DIB-header fields, in file order.
///
/// Every field is stored as read; nothing is judged at parse time. See
/// [`BmpHeader::validate`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BmpHeader {
    /// 2-byte magic, `BM` for a BMP file.
    pub signature: [u8; 2],
    pub file_size: u32,
    pub reserved: u32,
    /// Offset of the pixel data region from the start of the file.
    pub data_offset: u32,
    pub dib_header_size: u32,
    pub width: u32,
    pub height: u32,
    pub color_planes: u16,
    pub bits_per_pixel: u16,
    /// 0 = uncompressed, the only supported mode.
    pub compression: u32,
    /// Size of the pixel data region in bytes. Some encoders write 0 here
    /// (observed with Paint.NET); in that case the field is recomputed as
    /// `file_size - data_offset` at parse time.
    pub raw_data_size: u32,
    pub ppm_horizontal: u32,
    pub ppm_vertical: u32,
    /// Number of color-table entries; only 0 and 2 pass validation.
    pub palette_colors: u32,
    pub important_colors: u32,
}

impl BmpHeader {
    /// Read the fifteen header fields, in order, from a source positioned
    /// at the start of the file. Consumes exactly 54 bytes.
    pub fn read_from<S: ByteSource>(source: &mut S) -> Result<Self, BmpError> {
        let mut header = BmpHeader {
            signature: read_bytes(source)?,
            file_size: read_u32_le(source)?,
            reserved: read_u32_le(source)?,
            data_offset: read_u32_le(source)?,
            dib_header_size: read_u32_le(source)?,
            width: read_u32_le(source)?,
            height: read_u32_le(source)?,
            color_planes: read_u16_le(source)?,
            bits_per_pixel: read_u16_le(source)?,
            compression: read_u32_le(source)?,
            raw_data_size: read_u32_le(source)?,
            ppm_horizontal: read_u32_le(source)?,
            ppm_vertical: read_u32_le(source)?,
            palette_colors: read_u32_le(source)?,
            important_colors: read_u32_le(source)?,
        };

        if header.raw_data_size == 0 {
            header.raw_data_size = header.file_size.saturating_sub(header.data_offset);
            debug!(
                "raw data size field is 0, derived {} bytes from file size",
                header.raw_data_size
            );
        }

        trace!(
            "BMP header: {}x{} at {} bpp, compression {}, {} palette colors",
            header.width, header.height, header.bits_per_pixel, header.compression,
            header.palette_colors
        );

        Ok(header)
    }

    /// Structural validation: signature, color depth and compression,
    /// palette size, scanned in that order.
    ///
    /// When several checks fail the last failure is the one returned;
    /// treat any error as "at least one structural defect found". Runs
    /// strictly before any buffer allocation.
    pub fn validate(&self) -> Result<(), BmpError> {
        let mut defect = None;

        if self.signature != *b"BM" {
            defect = Some(BmpError::BadSignature);
        }

        if self.bits_per_pixel > 1 || self.compression != 0 {
            defect = Some(BmpError::NotBlackAndWhite {
                bits_per_pixel: self.bits_per_pixel,
                compression: self.compression,
            });
        }

        if self.palette_colors != 0 && self.palette_colors != 2 {
            defect = Some(BmpError::InvalidPalette(self.palette_colors));
        }

        match defect {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// A monochrome BMP image descriptor: parsed header, two-entry palette,
/// and — after [`BmpImage::load`] — the raw bottom-up, row-padded pixel
/// rows exactly as stored in the file.
#[derive(Clone, Debug)]
pub struct BmpImage {
    header: BmpHeader,
    palette: [bool; 2],
    data: Option<Vec<u8>>,
}

impl Default for BmpImage {
    /// An empty descriptor: zeroed header, default palette, no pixel
    /// data. Blitting it reports [`BmpError::EmptyData`].
    fn default() -> Self {
        Self {
            header: BmpHeader::default(),
            palette: DEFAULT_PALETTE,
            data: None,
        }
    }
}

const DEFAULT_PALETTE: [bool; 2] = [false, true];

impl BmpImage {
    /// Parse and validate a BMP header from `source`, then derive the
    /// two-entry palette.
    ///
    /// No pixel data is read and nothing is allocated; follow with
    /// [`BmpImage::load`]. Leaves the source cursor unspecified, since
    /// color-table entries are read by absolute seek.
    pub fn parse<S: ByteSource>(source: &mut S) -> Result<Self, BmpError> {
        let header = BmpHeader::read_from(source)?;
        header.validate()?;
        let palette = read_palette(&header, source)?;
        Ok(Self {
            header,
            palette,
            data: None,
        })
    }

    /// The parsed header fields.
    pub fn header(&self) -> &BmpHeader {
        &self.header
    }

    /// The stored-bit-value → on/off palette.
    pub fn palette(&self) -> [bool; 2] {
        self.palette
    }

    /// Whether pixel data has been loaded and is ready to blit.
    pub fn is_loaded(&self) -> bool {
        self.data.is_some()
    }

    pub(crate) fn pixel_data(&self) -> Option<&[u8]> {
        self.data.as_deref()
    }

    /// Bulk-read the pixel data region into an owned buffer.
    ///
    /// This is the last stage that touches the byte source; the caller
    /// may close the underlying resource once this returns `Ok`.
    pub fn load<S: ByteSource>(&mut self, source: &mut S) -> Result<(), BmpError> {
        self.load_with_limits(source, None)
    }

    /// [`BmpImage::load`] with resource limits checked before the buffer
    /// is allocated.
    pub fn load_with_limits<S: ByteSource>(
        &mut self,
        source: &mut S,
        limits: Option<&Limits>,
    ) -> Result<(), BmpError> {
        let expected = self.header.raw_data_size as usize;
        if let Some(limits) = limits {
            limits.check_geometry(self.header.width, self.header.height)?;
            limits.check_allocation(expected)?;
        }

        source.seek(self.header.data_offset as usize);
        let mut data = vec![0; expected];
        let actual = source.read(&mut data);
        if actual != expected {
            return Err(BmpError::DataRead { expected, actual });
        }

        debug!(
            "loaded {expected} pixel data bytes from offset {}",
            self.header.data_offset
        );
        self.data = Some(data);
        Ok(())
    }

    /// Drop the pixel buffer, returning the descriptor to its unloaded
    /// state.
    ///
    /// Happens implicitly on drop; provided for callers that keep the
    /// descriptor around but want the memory back now. Safe to call
    /// repeatedly.
    pub fn release(&mut self) {
        self.data = None;
    }
}

/// Derive the two-entry palette.
///
/// Without a color table the fixed default maps bit 0 to off and bit 1 to
/// on. A two-color table overrides it: each entry is on iff any of its
/// RGB channels is non-zero, alpha ignored. Midtones therefore land on
/// "on", matching how these files are produced in practice.
fn read_palette<S: ByteSource>(header: &BmpHeader, source: &mut S) -> Result<[bool; 2], BmpError> {
    if header.palette_colors == 0 {
        return Ok(DEFAULT_PALETTE);
    }

    // validate() already rejected everything but 0 and 2
    source.seek(PALETTE_ENTRY_0);
    let entry0 = read_u32_le(source)?;
    source.seek(PALETTE_ENTRY_1);
    let entry1 = read_u32_le(source)?;

    let palette = [entry0 & RGB_MASK != 0, entry1 & RGB_MASK != 0];
    debug!("palette from color table: {palette:?}");
    Ok(palette)
}

fn read_bytes<const N: usize, S: ByteSource>(source: &mut S) -> Result<[u8; N], BmpError> {
    let mut buf = [0; N];
    if source.read(&mut buf) != N {
        return Err(BmpError::UnexpectedEof);
    }
    Ok(buf)
}

fn read_u16_le<S: ByteSource>(source: &mut S) -> Result<u16, BmpError> {
    read_bytes(source).map(u16::from_le_bytes)
}

fn read_u32_le<S: ByteSource>(source: &mut S) -> Result<u32, BmpError> {
    read_bytes(source).map(u32::from_le_bytes)
}
