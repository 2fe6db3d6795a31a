//! HMAC-SHA256 feedback generator described in RFC 6979 Section 3.2:
//! <https://tools.ietf.org/html/rfc6979#section-3.2>

use crate::FieldBytes;
use hmac::{Mac, SimpleHmac};
use sha2::Sha256;
use zeroize::{Zeroize, Zeroizing};

/// Deterministic generator of 32-byte nonce candidates.
///
/// Holds the HMAC key `K` and chaining value `V`. Both are derived from the
/// encoded secret and digest alone and are wiped when the generator drops.
pub struct HmacDrbg {
    /// HMAC key `K` (see RFC 6979 Section 3.2.c)
    k: Zeroizing<FieldBytes>,

    /// Chaining value `V` (see RFC 6979 Section 3.2.b)
    v: FieldBytes,

    /// Whether a candidate has already been handed out
    retry: bool,
}

impl HmacDrbg {
    /// Seed the generator from a 32-byte secret and a 32-byte reduced digest.
    pub fn new(secret: &FieldBytes, z: &FieldBytes) -> Self {
        let mut k = Zeroizing::new([0x00; 32]);
        let mut v = [0x01; 32];

        // Steps 3.2.d-g: two passes with separator bytes 0x00 and 0x01
        for separator in [0x00, 0x01] {
            *k = hmac_sha256(k.as_slice(), &[&v, &[separator], secret, z]);
            v = hmac_sha256(k.as_slice(), &[&v]);
        }

        Self { k, v, retry: false }
    }

    /// Produce the next candidate (RFC 6979 Section 3.2.h).
    ///
    /// Every candidate after the first is preceded by the rejection re-key
    /// `K = HMAC_K(V || 0x00)`, `V = HMAC_K(V)`.
    pub fn next_candidate(&mut self) -> FieldBytes {
        if self.retry {
            *self.k = hmac_sha256(self.k.as_slice(), &[&self.v, &[0x00]]);
            self.v = hmac_sha256(self.k.as_slice(), &[&self.v]);
        }

        self.v = hmac_sha256(self.k.as_slice(), &[&self.v]);
        self.retry = true;
        self.v
    }
}

impl Drop for HmacDrbg {
    fn drop(&mut self) {
        self.v.zeroize();
    }
}

/// HMAC-SHA256 of the concatenation of `parts` under `key`.
fn hmac_sha256(key: &[u8], parts: &[&[u8]]) -> FieldBytes {
    let mut mac = <SimpleHmac<Sha256> as Mac>::new_from_slice(key).expect("HMAC error");

    for part in parts {
        mac.update(part);
    }

    let mut out = [0u8; 32];
    out.copy_from_slice(&mac.finalize().into_bytes());
    out
}

#[cfg(test)]
mod tests {
    use super::{HmacDrbg, hmac_sha256};
    use hex_literal::hex;

    /// RFC 4231 test case 2.
    #[test]
    fn hmac_sha256_known_answer() {
        assert_eq!(
            hmac_sha256(b"Jefe", &[b"what do ya want ", b"for nothing?"]),
            hex!("5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843")
        );
    }

    #[test]
    fn first_candidate_for_z1_secret2() {
        let mut secret = [0u8; 32];
        secret[31] = 2;
        let mut z = [0u8; 32];
        z[31] = 1;

        let mut drbg = HmacDrbg::new(&secret, &z);
        assert_eq!(
            drbg.next_candidate(),
            hex!("799f6cfc448f53181707293d4bb0ac2cf03e9bf28d343655c7a36ea226d2c221")
        );
    }

    #[test]
    fn candidates_do_not_repeat() {
        let mut drbg = HmacDrbg::new(&[7; 32], &[9; 32]);
        let first = drbg.next_candidate();
        let second = drbg.next_candidate();
        assert_ne!(first, second);
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = HmacDrbg::new(&[3; 32], &[4; 32]);
        let mut b = HmacDrbg::new(&[3; 32], &[4; 32]);

        for _ in 0..4 {
            assert_eq!(a.next_candidate(), b.next_candidate());
        }
    }
}
