//! # monobmp
//!
//! Monochrome (1-bit-per-pixel) Windows BMP decoder and blitter for
//! embedded targets where no general-purpose image library is available
//! and memory is scarce.
//!
//! ## Capability-based I/O
//!
//! The crate never touches a file system or display driver. Bytes come in
//! through a [`ByteSource`] (random-access `read`/`seek`) and pixels go
//! out through a [`PixelSink`] (`set_pixel`). Both are implemented by the
//! caller for their storage medium and panel; [`MemorySource`] and
//! [`BitCanvas`] cover in-memory buffers and headless rendering, and the
//! `std` feature adds [`StdSource`] for `std::io` readers.
//!
//! ## Supported input
//!
//! Uncompressed 1-bpp BMP with the classic 54-byte header and an optional
//! two-entry color table. Rows are 4-byte padded and stored bottom-up, as
//! the format requires.
//!
//! ## Non-Goals
//!
//! - Color, grayscale, or compressed BMP variants
//! - Streaming/partial decode
//! - Scaling, rotation, or blending — blitting is a direct pixel copy
//!
//! ## Usage
//!
//! ```
//! use monobmp::{draw, encode, BitCanvas, MemorySource};
//!
//! // Build a tiny image, encode it, then decode + blit it back.
//! let mut art = BitCanvas::new(8, 2);
//! art.set(3, 0, true);
//! art.set(4, 1, true);
//! let file = encode(&art)?;
//!
//! let mut screen = BitCanvas::new(128, 64);
//! draw(&mut MemorySource::new(&file), &mut screen, 10, 5)?;
//! assert!(screen.get(13, 5));
//! assert!(screen.get(14, 6));
//! # Ok::<(), monobmp::BmpError>(())
//! ```
//!
//! The stages are also available individually ([`BmpImage::parse`],
//! [`BmpImage::load`], [`BmpImage::blit`]) for callers that want to close
//! the byte source before rendering or to reuse one decoded image.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod bmp;
mod error;
mod limits;
mod log;
mod sink;
mod source;

// Re-exports
pub use bmp::{BmpHeader, BmpImage, draw, draw_with_limits, encode};
pub use error::BmpError;
pub use limits::Limits;
pub use sink::{BitCanvas, PixelSink};
#[cfg(feature = "std")]
pub use source::StdSource;
pub use source::{ByteSource, MemorySource};
