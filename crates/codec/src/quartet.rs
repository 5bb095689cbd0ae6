//! Group primitives: the 3-byte/4-character packing arithmetic shared by
//! the whole-buffer codec and the streaming adapters.

use crate::tables::{
    DEC_B0_HI, DEC_B0_LO, DEC_B1_HI, DEC_B1_LO, DEC_B2_HI, DEC_B2_LO, ENC_CHAR_HI, ENC_CHAR_LO,
    ENC_REM_HI, ENC_REM_MID, PAD,
};
use crate::Base64Error;

#[inline]
fn invalid(code: u8) -> Base64Error {
    Base64Error::InvalidCharacter {
        ch: code as char,
        code,
    }
}

/// Encodes one full group of 3 bytes into 4 characters.
#[inline]
pub fn encode_quartet(b0: u8, b1: u8, b2: u8) -> [u8; 4] {
    [
        ENC_CHAR_HI[b0 as usize],
        ENC_CHAR_LO[(ENC_REM_HI[b0 as usize] | (b1 >> 4)) as usize],
        ENC_CHAR_LO[(ENC_REM_MID[b1 as usize] | (b2 >> 6)) as usize],
        ENC_CHAR_LO[b2 as usize],
    ]
}

/// Encodes a final group of 1 or 2 residual bytes, padding to 4 characters.
///
/// # Panics
///
/// Panics unless `bytes` holds exactly 1 or 2 bytes: a full group goes
/// through [`encode_quartet`] and an empty tail emits nothing.
#[inline]
pub fn encode_final(bytes: &[u8]) -> [u8; 4] {
    match *bytes {
        [b0] => [
            ENC_CHAR_HI[b0 as usize],
            ENC_CHAR_LO[ENC_REM_HI[b0 as usize] as usize],
            PAD,
            PAD,
        ],
        [b0, b1] => [
            ENC_CHAR_HI[b0 as usize],
            ENC_CHAR_LO[(ENC_REM_HI[b0 as usize] | (b1 >> 4)) as usize],
            ENC_CHAR_LO[ENC_REM_MID[b1 as usize] as usize],
            PAD,
        ],
        _ => panic!("final group must hold 1 or 2 bytes"),
    }
}

/// Decodes one group of 4 characters into 3 bytes.
///
/// Padding is not legal here; a pad trips the sentinel like any other
/// non-alphabet code.
#[inline]
pub fn decode_quartet(q: [u8; 4]) -> Result<[u8; 3], Base64Error> {
    let v0 = DEC_B0_HI[q[0] as usize];
    let v1 = DEC_B0_LO[q[1] as usize];
    let v2 = DEC_B1_LO[q[2] as usize];
    let v3 = DEC_B2_LO[q[3] as usize];
    if v0 < 0 {
        return Err(invalid(q[0]));
    }
    if v1 < 0 {
        return Err(invalid(q[1]));
    }
    if v2 < 0 {
        return Err(invalid(q[2]));
    }
    if v3 < 0 {
        return Err(invalid(q[3]));
    }
    Ok([
        (v0 + v1) as u8,
        (DEC_B1_HI[q[1] as usize] + v2) as u8,
        (DEC_B2_HI[q[2] as usize] + v3) as u8,
    ])
}

/// Decodes the final group of a message: pads are legal in the last one or
/// two positions, and the bits a pad drops must be zero.
///
/// Returns the decoded bytes and how many of them are valid (1-3).
pub fn decode_final_quartet(q: [u8; 4]) -> Result<([u8; 3], usize), Base64Error> {
    if q[3] != PAD {
        if q[2] == PAD {
            // data character after a pad in the same group
            return Err(invalid(q[3]));
        }
        return decode_quartet(q).map(|bytes| (bytes, 3));
    }
    if q[2] == PAD {
        let v0 = DEC_B0_HI[q[0] as usize];
        let v1 = DEC_B0_LO[q[1] as usize];
        if v0 < 0 {
            return Err(invalid(q[0]));
        }
        if v1 < 0 {
            return Err(invalid(q[1]));
        }
        // the four bits that would spill into the dropped second byte
        if DEC_B1_HI[q[1] as usize] != 0 {
            return Err(invalid(q[1]));
        }
        Ok(([(v0 + v1) as u8, 0, 0], 1))
    } else {
        let v0 = DEC_B0_HI[q[0] as usize];
        let v1 = DEC_B0_LO[q[1] as usize];
        let v2 = DEC_B1_LO[q[2] as usize];
        if v0 < 0 {
            return Err(invalid(q[0]));
        }
        if v1 < 0 {
            return Err(invalid(q[1]));
        }
        if v2 < 0 {
            return Err(invalid(q[2]));
        }
        // the two bits that would spill into the dropped third byte
        if DEC_B2_HI[q[2] as usize] != 0 {
            return Err(invalid(q[2]));
        }
        Ok(([(v0 + v1) as u8, (DEC_B1_HI[q[1] as usize] + v2) as u8, 0], 2))
    }
}
