use k256_nonce::{NonceDeriver, U256};

fn main() -> Result<(), k256_nonce::Error> {
    let z = U256::ONE;
    let secret = U256::from_u8(2);

    let k = NonceDeriver::SECP256K1.derive_bytes(&z, &secret)?;
    println!("0x{}", hex::encode(k));
    Ok(())
}
