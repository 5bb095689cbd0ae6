//! Byte sources: the pull side of the stream seam.

use std::io::{self, ErrorKind, Read};

/// Minimal pull-based byte stream.
///
/// Only [`read_byte`](ByteSource::read_byte) is required; the bulk
/// operations have looping defaults, and [`available`](ByteSource::available)
/// is an advisory estimate, not a promise of the exact remaining count.
pub trait ByteSource {
    /// Reads the next byte; `Ok(None)` is a clean end of input.
    fn read_byte(&mut self) -> io::Result<Option<u8>>;

    /// Reads into `buf`, returning the number of bytes read. Zero means end
    /// of input (or an empty `buf`).
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut n = 0;
        while n < buf.len() {
            match self.read_byte()? {
                Some(byte) => {
                    buf[n] = byte;
                    n += 1;
                }
                None => break,
            }
        }
        Ok(n)
    }

    /// Discards up to `n` bytes, returning how many were discarded.
    fn skip(&mut self, n: u64) -> io::Result<u64> {
        let mut skipped = 0;
        while skipped < n {
            if self.read_byte()?.is_none() {
                break;
            }
            skipped += 1;
        }
        Ok(skipped)
    }

    /// Advisory estimate of the bytes readable without blocking.
    fn available(&self) -> u64 {
        0
    }

    /// Releases the underlying resource.
    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A byte source over a slice, with an exact [`available`](ByteSource::available)
/// count.
///
/// # Example
///
/// ```
/// use radix64_stream::{ByteSource, Reader};
///
/// let mut reader = Reader::new(b"ab");
/// assert_eq!(reader.read_byte().unwrap(), Some(b'a'));
/// assert_eq!(reader.available(), 1);
/// ```
pub struct Reader<'a> {
    /// The underlying byte slice.
    pub uint8: &'a [u8],
    /// Current cursor position.
    pub x: usize,
    /// End position (exclusive).
    pub end: usize,
}

impl<'a> Reader<'a> {
    /// Creates a reader over the whole slice.
    pub fn new(uint8: &'a [u8]) -> Self {
        let end = uint8.len();
        Self { uint8, x: 0, end }
    }

    /// Creates a reader over `uint8[x..end]`.
    pub fn from_slice(uint8: &'a [u8], x: usize, end: usize) -> Self {
        Self { uint8, x, end }
    }

    /// Returns the number of remaining bytes.
    pub fn size(&self) -> usize {
        self.end - self.x
    }
}

impl ByteSource for Reader<'_> {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        if self.x >= self.end {
            return Ok(None);
        }
        let byte = self.uint8[self.x];
        self.x += 1;
        Ok(Some(byte))
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = buf.len().min(self.size());
        buf[..n].copy_from_slice(&self.uint8[self.x..self.x + n]);
        self.x += n;
        Ok(n)
    }

    fn skip(&mut self, n: u64) -> io::Result<u64> {
        let n = (self.size() as u64).min(n);
        self.x += n as usize;
        Ok(n)
    }

    fn available(&self) -> u64 {
        self.size() as u64
    }
}

/// Adapts any [`std::io::Read`] into a [`ByteSource`].
///
/// `available` stays at the trait's advisory zero: a generic reader gives
/// no non-blocking guarantee.
pub struct IoSource<R: Read> {
    inner: R,
}

impl<R: Read> IoSource<R> {
    /// Wraps a reader.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Returns the wrapped reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> ByteSource for IoSource<R> {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.inner.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }

    fn skip(&mut self, n: u64) -> io::Result<u64> {
        io::copy(&mut self.inner.by_ref().take(n), &mut io::sink())
    }
}
