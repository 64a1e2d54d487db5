pub mod ec;
pub mod rsa;
#[cfg(test)]
pub(crate) mod test_rng;

use der::asn1::ObjectIdentifier;
use ::rsa::BigUint;

use crate::envelope::{EC_PRIVATE_KEY, RSA_PRIVATE_KEY};
use crate::error::{Error, Result};

/// id-ecPublicKey
pub const EC_PUBLIC_KEY_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.2.1");
/// secp224r1
pub const P224_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.33");
/// prime256v1 / secp256r1
pub const P256_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.7");

/// NIST curves the bootloader can verify against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EcCurve {
    P224,
    P256,
}

impl EcCurve {
    pub fn oid(self) -> ObjectIdentifier {
        match self {
            EcCurve::P224 => P224_OID,
            EcCurve::P256 => P256_OID,
        }
    }

    pub fn from_oid(oid: ObjectIdentifier) -> Result<Self> {
        if oid == P224_OID {
            Ok(EcCurve::P224)
        } else if oid == P256_OID {
            Ok(EcCurve::P256)
        } else {
            Err(Error::UnsupportedCurve(oid.to_string()))
        }
    }

    /// Byte length of one affine coordinate.
    pub fn field_width(self) -> usize {
        match self {
            EcCurve::P224 => 28,
            EcCurve::P256 => 32,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EcCurve::P224 => "P-224",
            EcCurve::P256 => "P-256",
        }
    }
}

/// Public half of a decoded private key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PublicKeyMaterial {
    /// Uncompressed affine point, big-endian coordinates
    Ec { curve: EcCurve, x: Vec<u8>, y: Vec<u8> },
    Rsa { modulus: BigUint, exponent: u32 },
}

impl PublicKeyMaterial {
    /// Prefix for the generated C symbols.
    pub fn symbol(&self) -> &'static str {
        match self {
            PublicKeyMaterial::Ec { .. } => "ec_pub_key",
            PublicKeyMaterial::Rsa { .. } => "rsa_pub_key",
        }
    }
}

/// Derive the public key from a private key envelope body, dispatching on its label.
pub fn extract_public(label: &str, payload: &[u8]) -> Result<PublicKeyMaterial> {
    match label {
        EC_PRIVATE_KEY => ec::public_from_sec1(payload),
        RSA_PRIVATE_KEY => rsa::public_from_pkcs1(payload),
        other => Err(Error::UnsupportedKeyType(other.to_string())),
    }
}
