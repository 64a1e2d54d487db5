//! Error kinds for key generation, envelope handling and public key encoding.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Unknown algorithm name or a broken registry table
    #[error("configuration error: {0}")]
    Config(String),

    /// The random source failed to deliver key material
    #[error("entropy source unavailable: {0}")]
    Entropy(String),

    #[error("key generation failed: {0}")]
    KeyGen(String),

    /// Malformed envelope text
    #[error("malformed envelope: {0}")]
    Format(String),

    /// Malformed key structure inside an envelope
    #[error("malformed key structure: {0}")]
    Parse(String),

    #[error("cannot encode public key: {0}")]
    Encoding(String),

    #[error("key uses unsupported curve: {0}")]
    UnsupportedCurve(String),

    #[error("unsupported key type: {0}")]
    UnsupportedKeyType(String),

    #[error("unsupported envelope label {0:?} (only EC PRIVATE KEY and RSA PRIVATE KEY)")]
    UnsupportedLabel(String),
}

impl From<pem_rfc7468::Error> for Error {
    fn from(err: pem_rfc7468::Error) -> Self {
        Error::Format(err.to_string())
    }
}
