use anyhow::{Context, Result};
use log::{debug, info};
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use zeroize::Zeroizing;

use crate::crypto::extract_public;
use crate::encoding;
use crate::envelope;
use crate::util::render_c_source;

/// Print the public half of the key at `key_file` as C source.
pub fn run(key_file: &Path) -> Result<()> {
    let text = Zeroizing::new(
        fs::read_to_string(key_file).with_context(|| format!("reading {}", key_file.display()))?,
    );
    let source = render(&text)
        .with_context(|| format!("extracting public key from {}", key_file.display()))?;

    // Rendered in full first so a failure never leaves half a file on stdout.
    let mut out = io::stdout().lock();
    out.write_all(source.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Envelope text -> C source for the encoded public key.
pub fn render(text: &str) -> Result<String> {
    let (env, _) = envelope::decode(text)?;
    debug!("found {} envelope", env.label);

    let material = extract_public(&env.label, &env.payload)?;
    let der = encoding::encode(&material)?;

    // The bootloader compares against this digest of the embedded key.
    info!("key hash (sha256): {}", hex::encode(Sha256::digest(&der)));

    Ok(render_c_source(material.symbol(), &der))
}
