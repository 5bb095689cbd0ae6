//! Streaming base64 decoder.

use crate::ByteSource;
use radix64_codec::quartet::decode_final_quartet;
use radix64_codec::Base64Error;
use std::io::{self, ErrorKind};

/// Wraps a byte source of base64 text and serves the decoded bytes.
///
/// Characters are pulled 4 at a time; each group decodes into a 3-byte
/// buffer handed out byte by byte, so memory use stays constant however
/// long the stream is. End of input at a group boundary is a clean end;
/// end of input inside a group is an error, as a partial group is always
/// malformed. Codec violations surface as [`std::io::Error`]s of kind
/// `InvalidData` (or `UnexpectedEof`) carrying the underlying
/// [`Base64Error`]; source errors propagate unchanged.
///
/// # Example
///
/// ```
/// use radix64_stream::{Base64Decoder, ByteSource, Reader};
///
/// let mut decoder = Base64Decoder::new(Reader::new(b"aGVsbG8="));
/// let mut decoded = Vec::new();
/// while let Some(byte) = decoder.read_byte().unwrap() {
///     decoded.push(byte);
/// }
/// assert_eq!(decoded, b"hello");
/// ```
pub struct Base64Decoder<S: ByteSource> {
    source: S,
    buf: [u8; 3],
    /// Next unread index into `buf`.
    cursor: usize,
    /// Number of decoded bytes `buf` currently holds.
    valid: usize,
}

impl<S: ByteSource> Base64Decoder<S> {
    /// Creates a decoder over `source`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            buf: [0; 3],
            cursor: 0,
            valid: 0,
        }
    }

    /// Returns a shared reference to the underlying source.
    pub fn get_ref(&self) -> &S {
        &self.source
    }

    /// Consumes the decoder and returns the underlying source.
    pub fn into_inner(self) -> S {
        self.source
    }

    fn buffered(&self) -> usize {
        self.valid - self.cursor
    }

    /// Pulls and decodes the next 4-character group. `Ok(false)` is a clean
    /// end of input; running dry after the first character is not.
    fn fill(&mut self) -> io::Result<bool> {
        let mut quartet = [0u8; 4];
        match self.source.read_byte()? {
            Some(ch) => quartet[0] = ch,
            None => return Ok(false),
        }
        for slot in quartet.iter_mut().skip(1) {
            match self.source.read_byte()? {
                Some(ch) => *slot = ch,
                None => {
                    return Err(io::Error::new(
                        ErrorKind::UnexpectedEof,
                        Base64Error::UnexpectedEndOfInput,
                    ))
                }
            }
        }
        let (bytes, valid) =
            decode_final_quartet(quartet).map_err(|e| io::Error::new(ErrorKind::InvalidData, e))?;
        self.buf = bytes;
        self.cursor = 0;
        self.valid = valid;
        Ok(true)
    }
}

impl<S: ByteSource> ByteSource for Base64Decoder<S> {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        if self.cursor == self.valid && !self.fill()? {
            return Ok(None);
        }
        let byte = self.buf[self.cursor];
        self.cursor += 1;
        Ok(Some(byte))
    }

    fn skip(&mut self, n: u64) -> io::Result<u64> {
        // serve from the decoded buffer first
        let take = (self.buffered() as u64).min(n);
        self.cursor += take as usize;
        let mut skipped = take;
        let mut remaining = n - take;

        // discard whole groups on the source without decoding them; the
        // characters inside are never validated
        if remaining >= 3 {
            let want_chars = remaining / 3 * 4;
            let got_chars = self.source.skip(want_chars)?;
            let got = got_chars / 4 * 3;
            skipped += got;
            remaining -= got;
        }

        // fractional remainder, or a source whose own skip came up short:
        // decode group by group and drop bytes until satisfied
        while remaining > 0 {
            if self.cursor == self.valid && !self.fill()? {
                break;
            }
            let take = (self.buffered() as u64).min(remaining);
            self.cursor += take as usize;
            skipped += take;
            remaining -= take;
        }
        Ok(skipped)
    }

    fn available(&self) -> u64 {
        self.buffered() as u64 + self.source.available() / 4 * 3
    }

    fn close(&mut self) -> io::Result<()> {
        self.source.close()
    }
}
