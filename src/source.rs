//! Byte-source capability: where BMP bytes come from.
//!
//! The decoder never owns a file handle or storage medium. It borrows a
//! [`ByteSource`] while parsing headers and loading pixel data, and the
//! caller is free to close the underlying resource as soon as
//! [`crate::BmpImage::load`] returns.

/// Random-access byte source the decoder reads a BMP file from.
///
/// Implementations report partial reads through the return count; a short
/// read is never an error at this layer. Each pipeline stage decides what
/// a shortfall means for it.
pub trait ByteSource {
    /// Read up to `buf.len()` bytes at the cursor, advancing it.
    ///
    /// Returns the number of bytes actually read. Fewer than requested
    /// means the source is exhausted or faulted.
    fn read(&mut self, buf: &mut [u8]) -> usize;

    /// Move the cursor to an absolute byte offset.
    ///
    /// Seeking past the end is not an error; subsequent reads return 0.
    fn seek(&mut self, pos: usize);
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read(&mut self, buf: &mut [u8]) -> usize {
        (**self).read(buf)
    }

    fn seek(&mut self, pos: usize) {
        (**self).seek(pos)
    }
}

/// Byte source over a borrowed in-memory buffer.
#[derive(Clone, Debug)]
pub struct MemorySource<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> MemorySource<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }
}

impl ByteSource for MemorySource<'_> {
    fn read(&mut self, buf: &mut [u8]) -> usize {
        let available = self.data.len().saturating_sub(self.pos);
        let n = buf.len().min(available);
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        n
    }

    fn seek(&mut self, pos: usize) {
        self.pos = pos.min(self.data.len());
    }
}

/// Byte source over any `std::io` reader that can seek (files, cursors).
///
/// I/O errors surface as short reads, which the pipeline reports as
/// [`crate::BmpError::UnexpectedEof`] or [`crate::BmpError::DataRead`]
/// depending on the stage.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct StdSource<R> {
    inner: R,
}

#[cfg(feature = "std")]
impl<R: std::io::Read + std::io::Seek> StdSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Give the underlying reader back, e.g. to close it after loading.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

#[cfg(feature = "std")]
impl<R: std::io::Read + std::io::Seek> ByteSource for StdSource<R> {
    fn read(&mut self, buf: &mut [u8]) -> usize {
        let mut total = 0;
        while total < buf.len() {
            match self.inner.read(&mut buf[total..]) {
                Ok(0) => break,
                Ok(n) => total += n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(_) => break,
            }
        }
        total
    }

    fn seek(&mut self, pos: usize) {
        let _ = self.inner.seek(std::io::SeekFrom::Start(pos as u64));
    }
}
