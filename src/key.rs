// src/key.rs
use std::fmt;
use std::str::FromStr;

use rand_core::CryptoRngCore;
use zeroize::Zeroizing;

use crate::crypto::{ec, rsa, EcCurve};
use crate::defaults::Defaults;
use crate::envelope::{EC_PRIVATE_KEY, RSA_PRIVATE_KEY};
use crate::error::{Error, Result};

/// Every algorithm the bootloader can verify.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyType {
    EcdsaP224,
    EcdsaP256,
    Rsa2048,
}

pub struct AlgorithmSpec {
    pub key_type: KeyType,
    pub name: &'static str,
    pub description: &'static str,
    /// PEM label of the private key file
    pub envelope_label: &'static str,
}

pub static KEY_TYPES: [AlgorithmSpec; 3] = [
    AlgorithmSpec {
        key_type: KeyType::EcdsaP256,
        name: "ecdsa-p256",
        description: "ECDSA with SHA256 and the NIST P-256 curve",
        envelope_label: EC_PRIVATE_KEY,
    },
    AlgorithmSpec {
        key_type: KeyType::EcdsaP224,
        name: "ecdsa-p224",
        description: "ECDSA with SHA256 and the NIST P-224 curve",
        envelope_label: EC_PRIVATE_KEY,
    },
    AlgorithmSpec {
        key_type: KeyType::Rsa2048,
        name: "rsa-2048",
        description: "RSA 2048",
        envelope_label: RSA_PRIVATE_KEY,
    },
];

/// Fail on a table that registers the same name twice.
pub fn check_unique(specs: &[AlgorithmSpec]) -> Result<()> {
    for (i, spec) in specs.iter().enumerate() {
        if specs[..i].iter().any(|s| s.name == spec.name) {
            return Err(Error::Config(format!("key type {:?} registered twice", spec.name)));
        }
    }
    Ok(())
}

pub fn lookup(name: &str) -> Result<&'static AlgorithmSpec> {
    KEY_TYPES
        .iter()
        .find(|s| s.name == name)
        .ok_or_else(|| Error::Config(format!("unsupported key type {name:?}")))
}

impl KeyType {
    pub fn spec(self) -> &'static AlgorithmSpec {
        match self {
            KeyType::EcdsaP256 => &KEY_TYPES[0],
            KeyType::EcdsaP224 => &KEY_TYPES[1],
            KeyType::Rsa2048 => &KEY_TYPES[2],
        }
    }

    /// Generate a private key, DER encoded for `spec().envelope_label`.
    pub fn generate(self, rng: &mut impl CryptoRngCore) -> Result<Zeroizing<Vec<u8>>> {
        match self {
            KeyType::EcdsaP224 => ec::generate(EcCurve::P224, rng),
            KeyType::EcdsaP256 => ec::generate(EcCurve::P256, rng),
            KeyType::Rsa2048 => rsa::generate(Defaults::RSA_MODULUS_BITS, rng),
        }
    }
}

impl FromStr for KeyType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        lookup(s).map(|spec| spec.key_type)
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spec().name)
    }
}
