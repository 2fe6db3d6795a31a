#![no_main]
use k256_nonce::{Error, NonceDeriver, ORDER, bigint::Encoding};
use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // First byte picks where the digest ends and the secret begins
    let split = usize::from(data[0]).min(data.len() - 1);
    let (z, secret) = data[1..].split_at(split);

    let deriver = NonceDeriver::SECP256K1;
    let n = BigUint::from_bytes_be(&ORDER.to_be_bytes());

    match deriver.derive_from_slices(z, secret) {
        Ok(k) => {
            let k_int = BigUint::from_bytes_be(&k.to_be_bytes());
            assert!(k_int > BigUint::ZERO && k_int < n);

            // Leading zeros never change the result
            let mut padded = vec![0u8; 8];
            padded.extend_from_slice(secret);
            assert_eq!(deriver.derive_from_slices(z, &padded), Ok(k));
        }
        Err(Error::Encoding) => {
            let secret = BigUint::from_bytes_be(secret);
            let z = BigUint::from_bytes_be(z);
            let z = if z >= n { z - &n } else { z };
            assert!(secret.bits() > 256 || z.bits() > 256);
        }
        Err(err) => panic!("unexpected error: {err}"),
    }
});
