//! PEM envelopes (RFC 7468) around private key DER.

use pem_rfc7468::LineEnding;
use zeroize::Zeroizing;

use crate::error::{Error, Result};

pub const EC_PRIVATE_KEY: &str = "EC PRIVATE KEY";
pub const RSA_PRIVATE_KEY: &str = "RSA PRIVATE KEY";
/// Emitted by `openssl ecparam -genkey` ahead of the key itself.
pub const EC_PARAMETERS: &str = "EC PARAMETERS";

const BEGIN: &str = "-----BEGIN ";
const DASHES: &str = "-----";

/// One decoded block.
pub struct Envelope {
    pub label: String,
    pub payload: Zeroizing<Vec<u8>>,
}

pub fn encode(label: &str, payload: &[u8]) -> Result<Zeroizing<String>> {
    Ok(Zeroizing::new(pem_rfc7468::encode_string(
        label,
        LineEnding::LF,
        payload,
    )?))
}

/// Decode the key envelope at the start of `text`, skipping one leading
/// EC PARAMETERS block. Returns the envelope and whatever text follows it.
pub fn decode(text: &str) -> Result<(Envelope, &str)> {
    let (mut env, mut rest) = decode_block(text)?;
    if env.label == EC_PARAMETERS {
        (env, rest) = decode_block(rest)?;
    }

    if env.label == EC_PRIVATE_KEY || env.label == RSA_PRIVATE_KEY {
        Ok((env, rest))
    } else {
        Err(Error::UnsupportedLabel(env.label))
    }
}

/// Decode the first block found in `text`, whatever its label.
pub fn decode_block(text: &str) -> Result<(Envelope, &str)> {
    let (block, rest) = split_block(text)?;
    let (label, payload) = pem_rfc7468::decode_vec(block.as_bytes())?;
    Ok((
        Envelope {
            label: label.to_string(),
            payload: Zeroizing::new(payload),
        },
        rest,
    ))
}

/// Cut the first BEGIN..END block (with its trailing line break) out of `text`.
fn split_block(text: &str) -> Result<(&str, &str)> {
    let start = text
        .find(BEGIN)
        .ok_or_else(|| Error::Format("no BEGIN line found".into()))?;
    let from_begin = &text[start..];

    let label_len = from_begin[BEGIN.len()..]
        .find(DASHES)
        .ok_or_else(|| Error::Format("unterminated BEGIN line".into()))?;
    let label = &from_begin[BEGIN.len()..BEGIN.len() + label_len];

    let footer = format!("-----END {label}-----");
    let footer_at = from_begin
        .find(&footer)
        .ok_or_else(|| Error::Format(format!("no END line for {label:?}")))?;

    let mut end = footer_at + footer.len();
    let tail = &from_begin[end..];
    if tail.starts_with("\r\n") {
        end += 2;
    } else if tail.starts_with('\n') {
        end += 1;
    }
    Ok(from_begin.split_at(end))
}
