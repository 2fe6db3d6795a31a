//! Fixed-width big-endian integer encoding.
//!
//! Inputs to the nonce derivation are logically unbounded integers, but the
//! HMAC construction consumes them as exactly 32 big-endian bytes. Values are
//! carried as [`U512`] until they are reduced, then narrowed with a checked
//! conversion which refuses to truncate.

use crate::{Error, FieldBytes, Result};
use bigint::{Encoding, U256, U512};

/// Size of an encoded scalar in bytes.
pub const SCALAR_SIZE: usize = 32;

/// Size of the intermediate wide representation in bytes.
const WIDE_SIZE: usize = 64;

/// Decode an arbitrary-length big-endian byte string.
///
/// Leading zero bytes are ignored. Values needing more than 64 significant
/// bytes are rejected: subtracting a 256-bit order from them can never bring
/// them under `2^256`.
pub fn decode_wide(bytes: &[u8]) -> Result<U512> {
    let first_nonzero = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    let significant = &bytes[first_nonzero..];

    if significant.len() > WIDE_SIZE {
        return Err(Error::Encoding);
    }

    let mut buf = [0u8; WIDE_SIZE];
    buf[WIDE_SIZE - significant.len()..].copy_from_slice(significant);
    Ok(U512::from_be_bytes(buf))
}

/// Encode `value` as exactly 32 big-endian bytes.
///
/// Returns [`Error::Encoding`] if `value >= 2^256`.
pub fn encode_fixed(value: &U512) -> Result<FieldBytes> {
    let wide = value.to_be_bytes();
    let (high, low) = wide.split_at(WIDE_SIZE - SCALAR_SIZE);

    if high.iter().any(|&b| b != 0) {
        return Err(Error::Encoding);
    }

    let mut out = [0u8; SCALAR_SIZE];
    out.copy_from_slice(low);
    Ok(out)
}

/// Zero-extend a 256-bit integer to 512 bits.
pub fn widen(value: &U256) -> U512 {
    let mut buf = [0u8; WIDE_SIZE];
    buf[WIDE_SIZE - SCALAR_SIZE..].copy_from_slice(&value.to_be_bytes());
    U512::from_be_bytes(buf)
}
