//! Nonce derivation test vectors

use hex_literal::hex;

/// Digest, secret and expected nonce, all big-endian.
pub struct TestVector {
    /// Digest `z`
    pub z: &'static [u8],

    /// Secret scalar
    pub secret: &'static [u8],

    /// Expected nonce `k`
    pub k: &'static [u8; 32],
}

/// Nonce test vectors for the secp256k1 group order.
///
/// The entries with secret `1` are the widely published secp256k1/SHA-256
/// RFC 6979 vectors for the messages "Satoshi Nakamoto" and "All those
/// moments will be lost in time, like tears in rain. Time to die...".
pub const NONCE_TEST_VECTORS: &[TestVector] = &[
    TestVector {
        z: &hex!("01"),
        secret: &hex!("02"),
        k: &hex!("799f6cfc448f53181707293d4bb0ac2cf03e9bf28d343655c7a36ea226d2c221"),
    },
    TestVector {
        z: &hex!("00"),
        secret: &hex!("01"),
        k: &hex!("010497d369b3d525ca15ec29c104a694210bb59ff6cabfc10afe6df0283896df"),
    },
    TestVector {
        z: &hex!("00"),
        secret: &hex!("ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"),
        k: &hex!("902f4461b2da8c81279248a28dbbb5283ab2c98b5c18af78ba3a68acaacb30a3"),
    },
    TestVector {
        z: &hex!("a0dc65ffca799873cbea0ac274015b9526505daaaed385155425f7337704883e"),
        secret: &hex!("01"),
        k: &hex!("8f8a276c19f4149656b280621e358cce24f5f52542772691ee69063b74f15d15"),
    },
    TestVector {
        z: &hex!("7d1833f54854ac51659521afcd0ec6dca2ce2351429614bfa28a756b1b3c637f"),
        secret: &hex!("01"),
        k: &hex!("38aa22d72376b4dbc472e06c3ba403ee0a394da63fc58d88686c611aba98d6b3"),
    },
    TestVector {
        z: &hex!("ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"),
        secret: &hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364140"),
        k: &hex!("1adee7d00425e9742db820dc008f8c6f6b018bc27d7c1160f33f6ee793876a79"),
    },
    TestVector {
        z: &hex!("deadbeef"),
        secret: &hex!("012345"),
        k: &hex!("8e9a9b1540a4177bf0c724b34407101cb0b6eef56e0b7c80cc1b91911f1f7977"),
    },
    TestVector {
        z: &hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364142"),
        secret: &hex!("02"),
        k: &hex!("799f6cfc448f53181707293d4bb0ac2cf03e9bf28d343655c7a36ea226d2c221"),
    },
];
