use anyhow::{Context, Result};
use log::info;
use rand_core::CryptoRngCore;
use std::path::Path;

use super::key_save::write_private_key;
use crate::envelope;
use crate::key::KeyType;

/// Generate a `key_type` private key and store its envelope at `out`.
pub fn run(key_type: KeyType, out: &Path, rng: &mut impl CryptoRngCore) -> Result<()> {
    let spec = key_type.spec();

    // 1) Fresh key, DER encoded
    let der = key_type
        .generate(rng)
        .with_context(|| format!("generating {} key", spec.name))?;

    // 2) Wrap in its PEM envelope
    let pem = envelope::encode(spec.envelope_label, &der)?;

    // 3) Exclusive create, 0600
    write_private_key(out, &pem)?;

    info!("wrote {} key to {}", spec.name, out.display());
    Ok(())
}
