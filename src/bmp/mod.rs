//! Monochrome BMP pipeline: header parse, validate, palette, load, blit.
//!
//! The pipeline is strictly sequential and synchronous; one descriptor,
//! one byte source, one destination surface, processed start to finish.

mod blit;
mod decode;
mod encode;

pub use decode::{BmpHeader, BmpImage};
pub use encode::encode;

use crate::error::BmpError;
use crate::limits::Limits;
use crate::sink::PixelSink;
use crate::source::ByteSource;

/// Decode a BMP from `source` and blit it to `sink` with its top-left
/// corner at `(x0, y0)`.
///
/// One-shot pipeline: parse + validate + palette, load, blit. The source
/// is not needed once this returns.
pub fn draw<S, P>(source: &mut S, sink: &mut P, x0: u32, y0: u32) -> Result<(), BmpError>
where
    S: ByteSource,
    P: PixelSink,
{
    draw_with_limits(source, sink, x0, y0, None)
}

/// [`draw`] with caller-supplied resource limits applied before the pixel
/// buffer is allocated.
pub fn draw_with_limits<S, P>(
    source: &mut S,
    sink: &mut P,
    x0: u32,
    y0: u32,
    limits: Option<&Limits>,
) -> Result<(), BmpError>
where
    S: ByteSource,
    P: PixelSink,
{
    let mut image = BmpImage::parse(source)?;
    image.load_with_limits(source, limits)?;
    image.blit(sink, x0, y0)
}
