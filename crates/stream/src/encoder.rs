//! Streaming base64 encoder.

use crate::ByteSink;
use radix64_codec::quartet::{encode_final, encode_quartet};
use std::io;

/// Wraps a byte sink and emits base64 text for the raw bytes written in.
///
/// Bytes accumulate in a 3-byte holding buffer; each full group is encoded
/// to 4 characters and pushed to the sink immediately, so memory use stays
/// constant however much is written. [`close`](ByteSink::close) flushes a
/// final partial group with padding and closes the sink; closing with
/// nothing written emits nothing. Sink errors propagate unchanged.
///
/// # Example
///
/// ```
/// use radix64_stream::{Base64Encoder, ByteSink, Writer};
///
/// let mut encoder = Base64Encoder::new(Writer::new());
/// encoder.write(b"hello").unwrap();
/// encoder.close().unwrap();
/// assert_eq!(encoder.into_inner().flush(), b"aGVsbG8=");
/// ```
pub struct Base64Encoder<S: ByteSink> {
    sink: S,
    pending: [u8; 3],
    fill: usize,
}

impl<S: ByteSink> Base64Encoder<S> {
    /// Creates an encoder over `sink`.
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            pending: [0; 3],
            fill: 0,
        }
    }

    /// Returns a shared reference to the underlying sink.
    pub fn get_ref(&self) -> &S {
        &self.sink
    }

    /// Consumes the encoder and returns the underlying sink.
    ///
    /// Pending bytes never flushed by [`close`](ByteSink::close) are
    /// dropped.
    pub fn into_inner(self) -> S {
        self.sink
    }
}

impl<S: ByteSink> ByteSink for Base64Encoder<S> {
    fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        self.pending[self.fill] = byte;
        self.fill += 1;
        if self.fill == 3 {
            let quartet = encode_quartet(self.pending[0], self.pending[1], self.pending[2]);
            self.fill = 0;
            self.sink.write(&quartet)?;
        }
        Ok(())
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<()> {
        let mut rest = buf;
        // top up a partially filled holding buffer first
        while self.fill != 0 {
            let Some((&byte, tail)) = rest.split_first() else {
                return Ok(());
            };
            rest = tail;
            self.write_byte(byte)?;
        }
        let mut chunks = rest.chunks_exact(3);
        for chunk in &mut chunks {
            let quartet = encode_quartet(chunk[0], chunk[1], chunk[2]);
            self.sink.write(&quartet)?;
        }
        let tail = chunks.remainder();
        self.pending[..tail.len()].copy_from_slice(tail);
        self.fill = tail.len();
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        if self.fill > 0 {
            let fill = self.fill;
            // reset before writing so a second close cannot re-emit
            self.fill = 0;
            let quartet = encode_final(&self.pending[..fill]);
            self.sink.write(&quartet)?;
        }
        self.sink.close()
    }
}
