//! Base64 encoding and decoding core.
//!
//! This crate provides the codec engine: const-built lookup tables, the
//! shared group (quartet) primitives, and whole-buffer operations over
//! explicit `(buffer, offset, length)` regions:
//!
//! - [`encode`] / [`encode_into`] - bytes to base64 text
//! - [`decode`] / [`decode_into`] - base64 text to bytes
//! - [`is_valid`] - validity predicate that never errors
//!
//! The standard alphabet with `+`, `/`, and `=` padding is used throughout;
//! no whitespace or line breaks are tolerated.
//!
//! # Example
//!
//! ```
//! use radix64_codec::{decode, encode, is_valid};
//!
//! let data = b"hello world";
//! let encoded = encode(data, 0, data.len()).unwrap();
//! assert_eq!(encoded, "aGVsbG8gd29ybGQ=");
//! assert!(is_valid(encoded.as_bytes(), 0, encoded.len()));
//!
//! let decoded = decode(encoded.as_bytes(), 0, encoded.len()).unwrap();
//! assert_eq!(decoded.as_slice(), data);
//! ```

mod decode;
mod decode_into;
mod encode;
mod encode_into;
mod is_valid;
pub mod quartet;
mod tables;

pub use decode::decode;
pub use decode_into::decode_into;
pub use encode::encode;
pub use encode_into::encode_into;
pub use is_valid::is_valid;
pub use tables::{ALPHABET, PAD};

use thiserror::Error;

/// Error type for base64 operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Base64Error {
    /// A requested region does not fit inside its buffer.
    #[error("index {index} is out of bounds for a buffer of {len} bytes")]
    InvalidRange { index: usize, len: usize },
    /// Base64 text length must be a multiple of 4.
    #[error("base64 length {0} is not a multiple of 4")]
    InvalidLength(usize),
    /// The destination buffer cannot hold the result.
    #[error("destination holds {actual} bytes but {required} are required")]
    BufferTooSmall { required: usize, actual: usize },
    /// A character outside the alphabet, a pad where data must be, data
    /// after a pad, or non-zero bits under a pad.
    #[error("invalid base64 character {ch:?} (code {code})")]
    InvalidCharacter { ch: char, code: u8 },
    /// The input ended inside a 4-character group (streaming only).
    #[error("unexpected end of input inside a base64 group")]
    UnexpectedEndOfInput,
}

/// Checks that `buffer[offset..offset + length]` is a valid region of a
/// buffer of `len` bytes.
pub(crate) fn check_region(len: usize, offset: usize, length: usize) -> Result<(), Base64Error> {
    if offset > len {
        return Err(Base64Error::InvalidRange { index: offset, len });
    }
    match offset.checked_add(length) {
        Some(end) if end <= len => Ok(()),
        Some(end) => Err(Base64Error::InvalidRange { index: end, len }),
        None => Err(Base64Error::InvalidRange {
            index: usize::MAX,
            len,
        }),
    }
}
