//! Streaming base64 adapters.
//!
//! [`Base64Encoder`] sits between a caller's writes and a byte sink,
//! emitting 4 characters per 3-byte group as it goes; [`Base64Decoder`]
//! sits between a byte source of base64 text and a caller's reads,
//! decoding 4 characters per 3-byte group on demand. Both keep at most one
//! group of state, so arbitrarily large data converts in constant memory.
//!
//! The adapters speak the minimal [`ByteSource`] / [`ByteSink`] contract
//! and implement it themselves, so adapters and backings compose freely:
//! slice-backed [`Reader`], buffer-backed [`Writer`], or any
//! [`std::io::Read`] / [`std::io::Write`] through [`IoSource`] /
//! [`IoSink`].
//!
//! # Example
//!
//! ```
//! use radix64_stream::{Base64Decoder, Base64Encoder, ByteSink, ByteSource, Reader, Writer};
//!
//! let mut encoder = Base64Encoder::new(Writer::new());
//! encoder.write(b"hello world").unwrap();
//! encoder.close().unwrap();
//! let encoded = encoder.into_inner().flush();
//! assert_eq!(encoded, b"aGVsbG8gd29ybGQ=");
//!
//! let mut decoder = Base64Decoder::new(Reader::new(&encoded));
//! let mut decoded = Vec::new();
//! while let Some(byte) = decoder.read_byte().unwrap() {
//!     decoded.push(byte);
//! }
//! assert_eq!(decoded, b"hello world");
//! ```

mod decoder;
mod encoder;
mod sink;
mod source;

pub use decoder::Base64Decoder;
pub use encoder::Base64Encoder;
pub use sink::{ByteSink, IoSink, Writer};
pub use source::{ByteSource, IoSource, Reader};
