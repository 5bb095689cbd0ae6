//! Whole-buffer base64 decoding.

use crate::decode_into::{decode_into, pad_count};
use crate::{check_region, Base64Error};

/// Decodes the region `text[offset..offset + length]` into a freshly
/// allocated buffer of exactly the decoded size.
///
/// # Errors
///
/// Same contract as [`decode_into`](crate::decode_into), minus the
/// destination-capacity case: [`Base64Error::InvalidRange`],
/// [`Base64Error::InvalidLength`], and [`Base64Error::InvalidCharacter`].
///
/// # Example
///
/// ```
/// use radix64_codec::decode;
///
/// let decoded = decode(b"aGVsbG8gd29ybGQ=", 0, 16).unwrap();
/// assert_eq!(decoded, b"hello world");
/// assert_eq!(decode(b"", 0, 0).unwrap(), Vec::<u8>::new());
/// ```
pub fn decode(text: &[u8], offset: usize, length: usize) -> Result<Vec<u8>, Base64Error> {
    check_region(text.len(), offset, length)?;
    if length % 4 != 0 {
        return Err(Base64Error::InvalidLength(length));
    }
    if length == 0 {
        return Ok(Vec::new());
    }

    let pads = pad_count(text, offset, length);
    let mut out = vec![0u8; length / 4 * 3 - pads];
    decode_into(text, offset, length, &mut out, 0)?;
    Ok(out)
}
