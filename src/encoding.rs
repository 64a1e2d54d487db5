//! DER structures for the public key blob compiled into the bootloader.
//!
//! EC keys become a SubjectPublicKeyInfo (RFC 5480):
//!
//! ```text
//! SEQUENCE {
//!     SEQUENCE { OID id-ecPublicKey, OID <named curve> }
//!     BIT STRING 04 || X || Y
//! }
//! ```
//!
//! RSA keys become a PKCS#1 `RSAPublicKey`: `SEQUENCE { INTEGER n, INTEGER e }`.

use der::asn1::{BitStringRef, ObjectIdentifier, UintRef};
use der::{Encode, Sequence};
use rsa::BigUint;

use crate::crypto::{EcCurve, PublicKeyMaterial, EC_PUBLIC_KEY_OID};
use crate::error::{Error, Result};

/// SEC1 uncompressed point tag.
const UNCOMPRESSED_POINT: u8 = 0x04;

#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
pub struct AlgorithmId {
    pub algorithm: ObjectIdentifier,
    pub curve: ObjectIdentifier,
}

#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
pub struct EcPublicKeyInfo<'a> {
    pub algorithm: AlgorithmId,
    pub public_key: BitStringRef<'a>,
}

#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
pub struct RsaPublicKeyFields<'a> {
    pub modulus: UintRef<'a>,
    pub public_exponent: UintRef<'a>,
}

/// Serialize the public key structure to DER.
pub fn encode(material: &PublicKeyMaterial) -> Result<Vec<u8>> {
    match material {
        PublicKeyMaterial::Ec { curve, x, y } => encode_ec(*curve, x, y),
        PublicKeyMaterial::Rsa { modulus, exponent } => encode_rsa(modulus, *exponent),
    }
}

fn encode_ec(curve: EcCurve, x: &[u8], y: &[u8]) -> Result<Vec<u8>> {
    let width = curve.field_width();
    let mut point = Vec::with_capacity(1 + 2 * width);
    point.push(UNCOMPRESSED_POINT);
    point.extend_from_slice(&left_pad(x, width)?);
    point.extend_from_slice(&left_pad(y, width)?);

    let info = EcPublicKeyInfo {
        algorithm: AlgorithmId {
            algorithm: EC_PUBLIC_KEY_OID,
            curve: curve.oid(),
        },
        public_key: BitStringRef::from_bytes(&point).map_err(der_err)?,
    };
    info.to_der().map_err(der_err)
}

fn encode_rsa(modulus: &BigUint, exponent: u32) -> Result<Vec<u8>> {
    let n = modulus.to_bytes_be();
    let e = exponent.to_be_bytes();

    // UintRef drops redundant leading zeros and emits a 0x00 sign byte
    // whenever the top bit of the magnitude is set.
    let fields = RsaPublicKeyFields {
        modulus: UintRef::new(&n).map_err(der_err)?,
        public_exponent: UintRef::new(&e).map_err(der_err)?,
    };
    fields.to_der().map_err(der_err)
}

/// Left-pad a big-endian coordinate with zero bytes to exactly `width` bytes.
pub fn left_pad(coord: &[u8], width: usize) -> Result<Vec<u8>> {
    let first = coord.iter().position(|b| *b != 0).unwrap_or(coord.len());
    let significant = &coord[first..];
    if significant.len() > width {
        return Err(Error::Encoding(format!(
            "coordinate is {} bytes, field is {width}",
            significant.len()
        )));
    }

    let mut out = vec![0u8; width - significant.len()];
    out.extend_from_slice(significant);
    Ok(out)
}

fn der_err(e: der::Error) -> Error {
    Error::Encoding(e.to_string())
}
