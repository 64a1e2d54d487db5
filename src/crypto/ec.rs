use der::{Decode, Encode};
use log::{debug, warn};
use p256::elliptic_curve::sec1::{FromEncodedPoint, ModulusSize, ToEncodedPoint};
use p256::elliptic_curve::{AffinePoint, CurveArithmetic, FieldBytes, FieldBytesSize, SecretKey};
use rand_core::CryptoRngCore;
use sec1::{EcParameters, EcPrivateKey};
use zeroize::{Zeroize, Zeroizing};

use super::{EcCurve, PublicKeyMaterial};
use crate::defaults::Defaults;
use crate::encoding::left_pad;
use crate::error::{Error, Result};

/// Generate a fresh key on `curve` and return it SEC1 (RFC 5915) DER encoded,
/// with the named curve and the public point filled in.
pub fn generate(curve: EcCurve, rng: &mut impl CryptoRngCore) -> Result<Zeroizing<Vec<u8>>> {
    match curve {
        EcCurve::P224 => generate_on::<p224::NistP224>(curve, rng),
        EcCurve::P256 => generate_on::<p256::NistP256>(curve, rng),
    }
}

/// Decode a SEC1 private key and re-derive its public point from the scalar.
pub fn public_from_sec1(der: &[u8]) -> Result<PublicKeyMaterial> {
    let key = EcPrivateKey::from_der(der).map_err(|e| Error::Parse(format!("EC private key: {e}")))?;

    let oid = key
        .parameters
        .and_then(|p| p.named_curve())
        .ok_or_else(|| Error::Parse("EC private key has no named curve".into()))?;
    let curve = EcCurve::from_oid(oid)?;

    let (x, y) = match curve {
        EcCurve::P224 => point_from_scalar::<p224::NistP224>(key.private_key, curve.field_width())?,
        EcCurve::P256 => point_from_scalar::<p256::NistP256>(key.private_key, curve.field_width())?,
    };

    // The embedded point is never trusted; only report a mismatch.
    if let Some(embedded) = key.public_key {
        let derived_len = 1 + x.len() + y.len();
        let same = embedded.len() == derived_len
            && embedded[0] == 0x04
            && embedded[1..1 + x.len()] == x[..]
            && embedded[1 + x.len()..] == y[..];
        if !same {
            warn!("embedded public key does not match the private scalar; using the derived point");
        }
    }

    debug!("derived {} public point", curve.name());
    Ok(PublicKeyMaterial::Ec { curve, x, y })
}

fn generate_on<C>(curve: EcCurve, rng: &mut impl CryptoRngCore) -> Result<Zeroizing<Vec<u8>>>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let secret = random_secret::<C>(rng)?;
    let scalar = Zeroizing::new(secret.to_bytes());
    let point = secret.public_key().to_encoded_point(false);

    let der = EcPrivateKey {
        private_key: &scalar,
        parameters: Some(EcParameters::NamedCurve(curve.oid())),
        public_key: Some(point.as_bytes()),
    }
    .to_der()
    .map_err(|e| Error::KeyGen(format!("encoding EC private key: {e}")))?;

    Ok(Zeroizing::new(der))
}

/// Rejection sampling: each draw is either a valid scalar in [1, n) or wiped and discarded.
fn random_secret<C>(rng: &mut impl CryptoRngCore) -> Result<SecretKey<C>>
where
    C: CurveArithmetic,
{
    let mut bytes = FieldBytes::<C>::default();
    for _ in 0..Defaults::SCALAR_DRAW_ATTEMPTS {
        rng.try_fill_bytes(&mut bytes)
            .map_err(|e| Error::Entropy(e.to_string()))?;
        let drawn = SecretKey::<C>::from_bytes(&bytes);
        bytes.zeroize();
        if let Ok(secret) = drawn {
            return Ok(secret);
        }
    }
    Err(Error::KeyGen(format!(
        "no valid scalar after {} draws",
        Defaults::SCALAR_DRAW_ATTEMPTS
    )))
}

/// `scalar` may carry redundant leading zeros or be shorter than `width`.
fn point_from_scalar<C>(scalar: &[u8], width: usize) -> Result<(Vec<u8>, Vec<u8>)>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let padded = Zeroizing::new(
        left_pad(scalar, width)
            .map_err(|_| Error::Parse(format!("EC private scalar longer than {width} bytes")))?,
    );
    let secret = SecretKey::<C>::from_slice(&padded)
        .map_err(|_| Error::Parse("EC private scalar out of range".into()))?;
    let point = secret.public_key().to_encoded_point(false);

    match (point.x(), point.y()) {
        (Some(x), Some(y)) => Ok((x.to_vec(), y.to_vec())),
        _ => Err(Error::Parse("public point is the identity".into())),
    }
}
