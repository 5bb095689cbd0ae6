//! Validity predicate for base64 text.

use crate::quartet::{decode_final_quartet, decode_quartet};

/// Returns `true` when `text[offset..offset + length]` is well-formed
/// base64 that [`decode`](crate::decode) would accept.
///
/// Never errors: a zero length, a length that is not a multiple of 4, or a
/// region outside `text` is simply `false`. The zero-length case is the one
/// spot where this predicate is stricter than `decode`, which accepts an
/// empty region.
///
/// # Example
///
/// ```
/// use radix64_codec::is_valid;
///
/// assert!(is_valid(b"Zm9vYg==", 0, 8));
/// assert!(!is_valid(b"a,aa", 0, 4));
/// assert!(!is_valid(b"", 0, 0));
/// ```
pub fn is_valid(text: &[u8], offset: usize, length: usize) -> bool {
    if length == 0 || length % 4 != 0 {
        return false;
    }
    let Some(end) = offset.checked_add(length) else {
        return false;
    };
    if end > text.len() {
        return false;
    }

    let final_group = end - 4;
    let mut i = offset;
    while i < final_group {
        if decode_quartet([text[i], text[i + 1], text[i + 2], text[i + 3]]).is_err() {
            return false;
        }
        i += 4;
    }
    decode_final_quartet([text[i], text[i + 1], text[i + 2], text[i + 3]]).is_ok()
}
