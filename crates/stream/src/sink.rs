//! Byte sinks: the push side of the stream seam.

use std::io::{self, Write};

/// Minimal push-based byte stream.
///
/// Only [`write_byte`](ByteSink::write_byte) is required.
pub trait ByteSink {
    /// Writes a single byte.
    fn write_byte(&mut self, byte: u8) -> io::Result<()>;

    /// Writes every byte of `buf`.
    fn write(&mut self, buf: &[u8]) -> io::Result<()> {
        for &byte in buf {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    /// Flushes and releases the underlying resource.
    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A byte sink over a growable buffer.
///
/// # Example
///
/// ```
/// use radix64_stream::{ByteSink, Writer};
///
/// let mut writer = Writer::new();
/// writer.write(b"ab").unwrap();
/// writer.write_byte(b'c').unwrap();
/// assert_eq!(writer.flush(), b"abc");
/// ```
pub struct Writer {
    /// The underlying byte buffer.
    pub uint8: Vec<u8>,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self { uint8: Vec::new() }
    }

    /// Returns the written data, leaving the writer empty.
    pub fn flush(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.uint8)
    }
}

impl ByteSink for Writer {
    fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        self.uint8.push(byte);
        Ok(())
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<()> {
        self.uint8.extend_from_slice(buf);
        Ok(())
    }
}

/// Adapts any [`std::io::Write`] into a [`ByteSink`].
pub struct IoSink<W: Write> {
    inner: W,
}

impl<W: Write> IoSink<W> {
    /// Wraps a writer.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> ByteSink for IoSink<W> {
    fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        self.inner.write_all(&[byte])
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<()> {
        self.inner.write_all(buf)
    }

    fn close(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
