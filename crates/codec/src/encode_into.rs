//! Whole-buffer base64 encoding into a caller-supplied buffer.

use crate::quartet::{encode_final, encode_quartet};
use crate::{check_region, Base64Error};

/// Encodes `bytes[offset..offset + length]` into `dest[dest_offset..]`,
/// returning the number of characters written (`ceil(length / 3) * 4`).
///
/// # Errors
///
/// Returns [`Base64Error::InvalidRange`] when the source region does not
/// fit in `bytes`, or [`Base64Error::BufferTooSmall`] when the destination
/// cannot hold the encoded output.
///
/// # Example
///
/// ```
/// use radix64_codec::encode_into;
///
/// let data = b"hello";
/// let mut dest = [0u8; 8];
/// let written = encode_into(data, 0, data.len(), &mut dest, 0).unwrap();
/// assert_eq!(&dest[..written], b"aGVsbG8=");
/// ```
pub fn encode_into(
    bytes: &[u8],
    offset: usize,
    length: usize,
    dest: &mut [u8],
    dest_offset: usize,
) -> Result<usize, Base64Error> {
    check_region(bytes.len(), offset, length)?;

    let required = length.div_ceil(3) * 4;
    let actual = dest.len().saturating_sub(dest_offset);
    if actual < required {
        return Err(Base64Error::BufferTooSmall { required, actual });
    }

    let extra_length = length % 3;
    let base_end = offset + length - extra_length;

    let mut i = offset;
    let mut o = dest_offset;
    while i < base_end {
        let quartet = encode_quartet(bytes[i], bytes[i + 1], bytes[i + 2]);
        dest[o..o + 4].copy_from_slice(&quartet);
        i += 3;
        o += 4;
    }

    if extra_length > 0 {
        let quartet = encode_final(&bytes[base_end..base_end + extra_length]);
        dest[o..o + 4].copy_from_slice(&quartet);
        o += 4;
    }

    Ok(o - dest_offset)
}
