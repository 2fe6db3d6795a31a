//! Deterministic nonce derivation for a fixed group order.

use crate::{
    Error, FieldBytes, ORDER, Result,
    encoding::{decode_wide, encode_fixed, widen},
    hmac_drbg::HmacDrbg,
};
use bigint::{
    Encoding, U256,
    subtle::{Choice, ConstantTimeGreater, ConstantTimeLess},
};
use zeroize::Zeroizing;

/// Default ceiling on the number of candidates drawn per derivation.
///
/// With a ~256-bit order a single candidate is rejected with probability
/// below `2^-127`, so this is never reached unless the order is broken.
pub const DEFAULT_MAX_ITERATIONS: u32 = 1024;

/// Derives the ephemeral scalar `k` from a digest `z` and a secret scalar.
///
/// The output is a pure function of `(z, secret)` and the configured group
/// order `N`, and always lies in `[1, N)`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct NonceDeriver {
    order: U256,
    max_iterations: u32,
}

impl NonceDeriver {
    /// Deriver for the secp256k1 group order.
    pub const SECP256K1: Self = Self::new(ORDER);

    /// Create a deriver for the group order `order`.
    pub const fn new(order: U256) -> Self {
        Self {
            order,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Bound the rejection loop to at most `max_iterations` candidates.
    pub const fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Group order `N`.
    pub const fn order(&self) -> &U256 {
        &self.order
    }

    /// Maximum number of candidates drawn per derivation.
    pub const fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Derive `k` for a digest and secret already known to be below `2^256`.
    ///
    /// If `z >= N` it is reduced by subtracting `N` exactly once.
    pub fn derive(&self, z: &U256, secret: &U256) -> Result<U256> {
        let z = if *z >= self.order {
            z.wrapping_sub(&self.order)
        } else {
            *z
        };

        let z_bytes = Zeroizing::new(z.to_be_bytes());
        let secret_bytes = Zeroizing::new(secret.to_be_bytes());
        self.generate(&secret_bytes, &z_bytes)
    }

    /// Derive `k` from big-endian byte strings of any length.
    ///
    /// `z` is reduced by a single subtraction of `N` before encoding, so a
    /// digest slightly above `2^256` is accepted whenever `z - N` fits.
    /// Returns [`Error::Encoding`] if `secret` or the reduced `z` needs more
    /// than 32 bytes. Digests at or above `2N` are not reduced further.
    pub fn derive_from_slices(&self, z: &[u8], secret: &[u8]) -> Result<U256> {
        let order = widen(&self.order);
        let mut z = decode_wide(z)?;

        if z >= order {
            z = z.wrapping_sub(&order);
        }

        let z_bytes = Zeroizing::new(encode_fixed(&z)?);
        let secret_bytes = Zeroizing::new(encode_fixed(&Zeroizing::new(decode_wide(secret)?))?);
        self.generate(&secret_bytes, &z_bytes)
    }

    /// Derive `k` and return it as 32 big-endian bytes.
    pub fn derive_bytes(&self, z: &U256, secret: &U256) -> Result<FieldBytes> {
        self.derive(z, secret).map(|k| k.to_be_bytes())
    }

    /// Draw candidates until one falls in `[1, N)`.
    fn generate(&self, secret: &FieldBytes, z: &FieldBytes) -> Result<U256> {
        let mut drbg = HmacDrbg::new(secret, z);

        for _ in 0..self.max_iterations {
            let candidate = U256::from_be_bytes(drbg.next_candidate());

            if bool::from(self.in_range(&candidate)) {
                return Ok(candidate);
            }
        }

        Err(Error::IterationLimit {
            iterations: self.max_iterations,
        })
    }

    fn in_range(&self, candidate: &U256) -> Choice {
        candidate.ct_gt(&U256::ZERO) & candidate.ct_lt(&self.order)
    }
}

impl Default for NonceDeriver {
    fn default() -> Self {
        Self::SECP256K1
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_MAX_ITERATIONS, NonceDeriver};
    use crate::{Error, ORDER};
    use bigint::{Encoding, U256};
    use hex_literal::hex;

    const K_Z1_SECRET2: U256 =
        U256::from_be_hex("799f6cfc448f53181707293d4bb0ac2cf03e9bf28d343655c7a36ea226d2c221");

    #[test]
    fn secp256k1_is_default() {
        let deriver = NonceDeriver::default();
        assert_eq!(deriver.order(), &ORDER);
        assert_eq!(deriver.max_iterations(), DEFAULT_MAX_ITERATIONS);
    }

    #[test]
    fn z1_secret2() {
        let k = NonceDeriver::SECP256K1
            .derive(&U256::ONE, &U256::from_u8(2))
            .unwrap();
        assert_eq!(k, K_Z1_SECRET2);
    }

    #[test]
    fn derive_bytes_is_big_endian() {
        let k = NonceDeriver::SECP256K1
            .derive_bytes(&U256::ONE, &U256::from_u8(2))
            .unwrap();
        assert_eq!(
            k,
            hex!("799f6cfc448f53181707293d4bb0ac2cf03e9bf28d343655c7a36ea226d2c221")
        );
    }

    #[test]
    fn slices_match_integers() {
        let k = NonceDeriver::SECP256K1.derive_from_slices(&[1], &[2]).unwrap();
        assert_eq!(k, K_Z1_SECRET2);
    }

    #[test]
    fn z_equal_to_order_reduces_to_zero() {
        let deriver = NonceDeriver::SECP256K1;
        let k = deriver.derive(&ORDER, &U256::from_u8(2)).unwrap();
        assert_eq!(k, deriver.derive(&U256::ZERO, &U256::from_u8(2)).unwrap());
        assert_eq!(
            k,
            U256::from_be_hex("9727cd6c90360678fd8c9e8ec8da303b759318996400d6121773b935fde0d953")
        );
    }

    #[test]
    fn z_above_2_pow_256_reduces_once() {
        // 2^256 + 10
        let mut z = [0u8; 33];
        z[0] = 1;
        z[32] = 10;

        let k = NonceDeriver::SECP256K1.derive_from_slices(&z, &[7]).unwrap();
        assert_eq!(
            k,
            U256::from_be_hex("783b5165e99f3bab144abc52eaaba34cec4e146d79d721564c52480db0e24b29")
        );
    }

    #[test]
    fn z_above_2n_is_not_reduced_twice() {
        // 2N + 5 becomes N + 5, which is encoded as-is
        let z = hex!("01fffffffffffffffffffffffffffffffd755db9cd5e9140777fa4bd19a06c8287");
        let deriver = NonceDeriver::SECP256K1;

        let k = deriver.derive_from_slices(&z, &[7]).unwrap();
        assert_eq!(
            k,
            U256::from_be_hex("5bb1ae9c6ae87f6cb7c944905fb67cbab8b09c25f644f6319ba27360b90c1930")
        );

        let reduced_fully = deriver.derive(&U256::from_u8(5), &U256::from_u8(7)).unwrap();
        assert_ne!(k, reduced_fully);
    }

    #[test]
    fn oversized_secret_is_rejected() {
        let mut secret = [0u8; 33];
        secret[0] = 1;
        assert_eq!(
            NonceDeriver::SECP256K1.derive_from_slices(&[1], &secret),
            Err(Error::Encoding)
        );
    }

    #[test]
    fn oversized_reduced_z_is_rejected() {
        // 2^257 - N is still above 2^256
        let mut z = [0u8; 33];
        z[0] = 2;
        assert_eq!(
            NonceDeriver::SECP256K1.derive_from_slices(&z, &[2]),
            Err(Error::Encoding)
        );
    }

    #[test]
    fn rejected_candidate_is_rekeyed() {
        // The first candidate for (1, 2) is 0x799f..., above this order
        let order = U256::from_be_hex(
            "7000000000000000000000000000000000000000000000000000000000000000",
        );
        let k = NonceDeriver::new(order)
            .derive(&U256::ONE, &U256::from_u8(2))
            .unwrap();
        assert_eq!(
            k,
            U256::from_be_hex("4d20dbb685de0d0ecb19a4cc8d65b2351a506b67a133ec8a4035d0acd05c1cff")
        );
    }

    #[test]
    fn degenerate_order_hits_iteration_limit() {
        let deriver = NonceDeriver::new(U256::ONE).with_max_iterations(8);
        assert_eq!(
            deriver.derive(&U256::ONE, &U256::from_u8(2)),
            Err(Error::IterationLimit { iterations: 8 })
        );
    }

    #[test]
    fn zero_iterations_never_succeeds() {
        let deriver = NonceDeriver::SECP256K1.with_max_iterations(0);
        assert_eq!(
            deriver.derive(&U256::ONE, &U256::from_u8(2)),
            Err(Error::IterationLimit { iterations: 0 })
        );
    }

    #[test]
    fn result_round_trips_through_bytes() {
        let k = NonceDeriver::SECP256K1
            .derive(&U256::MAX, &ORDER.wrapping_sub(&U256::ONE))
            .unwrap();
        assert_eq!(U256::from_be_bytes(k.to_be_bytes()), k);
        assert!(k < ORDER);
    }
}
