#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

#[cfg(feature = "std")]
extern crate std;

pub mod encoding;
pub mod hmac_drbg;

mod deriver;
mod error;

#[cfg(any(feature = "test-vectors", test))]
pub mod test_vectors;

pub use crate::{
    deriver::{DEFAULT_MAX_ITERATIONS, NonceDeriver},
    error::{Error, Result},
};
pub use bigint::{self, U256};

/// Big-endian encoding of a 256-bit integer.
pub type FieldBytes = [u8; 32];

/// Hexadecimal secp256k1 group order.
pub const ORDER_HEX: &str = "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141";

/// Order of the secp256k1 group.
///
/// n = FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFE BAAEDCE6 AF48A03B BFD25E8C D0364141
pub const ORDER: U256 = U256::from_be_hex(ORDER_HEX);

/// Derive the ephemeral scalar `k` for a digest `z` and secret scalar using
/// the secp256k1 group order.
///
/// Shorthand for [`NonceDeriver::SECP256K1`]`.derive(z, secret)`.
pub fn derive_k(z: &U256, secret: &U256) -> Result<U256> {
    NonceDeriver::SECP256K1.derive(z, secret)
}
