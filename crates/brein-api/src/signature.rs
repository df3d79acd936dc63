//! Request signing.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::BreinError;

type HmacSha256 = Hmac<Sha256>;

/// Value sent in the `signatureType` field of signed requests.
pub const SIGNATURE_TYPE: &str = "HmacSHA256";

/// Compute the base64 encoded HMAC-SHA256 of `message` keyed with `secret`.
pub fn generate_signature(message: &str, secret: &str) -> Result<String, BreinError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| BreinError::Signature(e.to_string()))?;
    mac.update(message.as_bytes());
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}
