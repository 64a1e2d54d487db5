use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rand_core::CryptoRngCore;
use rsa::pkcs1::{DecodeRsaPrivateKey, EncodeRsaPrivateKey};
use rsa::traits::PublicKeyParts;
use rsa::{BigUint, RsaPrivateKey};
use zeroize::Zeroizing;

use super::PublicKeyMaterial;
use crate::defaults::Defaults;
use crate::error::{Error, Result};

/// Generate an RSA key of `bits` with e = 65537, PKCS#1 DER encoded.
///
/// The prime search runs on a ChaCha20 stream seeded with 32 bytes from `rng`,
/// so a failing source is detected before any search work starts.
pub fn generate(bits: usize, rng: &mut impl CryptoRngCore) -> Result<Zeroizing<Vec<u8>>> {
    let mut seed = Zeroizing::new([0u8; 32]);
    rng.try_fill_bytes(&mut seed[..])
        .map_err(|e| Error::Entropy(e.to_string()))?;
    let mut search_rng = ChaCha20Rng::from_seed(*seed);

    let exp = BigUint::from(Defaults::RSA_PUBLIC_EXPONENT);
    let key = RsaPrivateKey::new_with_exp(&mut search_rng, bits, &exp)
        .map_err(|e| Error::KeyGen(e.to_string()))?;
    debug!("generated {}-bit RSA modulus", key.n().bits());

    let doc = key
        .to_pkcs1_der()
        .map_err(|e| Error::KeyGen(format!("encoding RSA private key: {e}")))?;
    Ok(doc.to_bytes())
}

/// Read modulus and public exponent out of a PKCS#1 private key.
pub fn public_from_pkcs1(der: &[u8]) -> Result<PublicKeyMaterial> {
    let key = RsaPrivateKey::from_pkcs1_der(der)
        .map_err(|e| Error::Parse(format!("RSA private key: {e}")))?;

    let exponent = small_exponent(key.e())?;
    Ok(PublicKeyMaterial::Rsa {
        modulus: key.n().clone(),
        exponent,
    })
}

fn small_exponent(e: &BigUint) -> Result<u32> {
    let bytes = e.to_bytes_be();
    if bytes.len() > 4 {
        return Err(Error::Parse(format!(
            "public exponent is {} bytes, want at most 4",
            bytes.len()
        )));
    }
    Ok(bytes.iter().fold(0u32, |acc, b| (acc << 8) | u32::from(*b)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::test_rng::DeadRng;
    use crate::envelope;

    const RSA_2048: &str = include_str!("../../tests/fixtures/rsa_2048.pem");

    #[test]
    fn fixture_exposes_modulus_and_exponent() {
        let (env, _) = envelope::decode(RSA_2048).unwrap();
        match public_from_pkcs1(&env.payload).unwrap() {
            PublicKeyMaterial::Rsa { modulus, exponent } => {
                assert_eq!(modulus.bits(), 2048);
                assert_eq!(exponent, 65537);
            }
            other => panic!("expected RSA material, got {other:?}"),
        }
    }

    #[test]
    fn generated_key_round_trips() {
        let mut rng = ChaCha20Rng::seed_from_u64(2048);
        let der = generate(Defaults::RSA_MODULUS_BITS, &mut rng).unwrap();

        let key = RsaPrivateKey::from_pkcs1_der(&der).unwrap();
        assert_eq!(key.n().bits(), Defaults::RSA_MODULUS_BITS);

        match public_from_pkcs1(&der).unwrap() {
            PublicKeyMaterial::Rsa { modulus, exponent } => {
                assert_eq!(&modulus, key.n());
                assert_eq!(exponent, Defaults::RSA_PUBLIC_EXPONENT);
            }
            other => panic!("expected RSA material, got {other:?}"),
        }
    }

    #[test]
    fn dead_entropy_source_is_reported() {
        let err = generate(Defaults::RSA_MODULUS_BITS, &mut DeadRng).unwrap_err();
        assert!(matches!(err, Error::Entropy(_)), "{err:?}");
    }

    #[test]
    fn truncated_structure_is_a_parse_error() {
        let (env, _) = envelope::decode(RSA_2048).unwrap();
        let err = public_from_pkcs1(&env.payload[..env.payload.len() / 2]).unwrap_err();
        assert!(matches!(err, Error::Parse(_)), "{err:?}");
    }

    #[test]
    fn oversized_exponent_is_rejected() {
        let e = BigUint::from_bytes_be(&[1, 0, 0, 0, 1]);
        assert!(matches!(small_exponent(&e), Err(Error::Parse(_))));
        assert_eq!(small_exponent(&BigUint::from(3u32)).unwrap(), 3);
    }
}
