use crate::algorithm::Algorithm;
use crate::error::{Error, Result};
use crate::keys::SecretKey;
use crate::limits::MAX_DECODED_SIGNATURE_SIZE;
use crate::utils::base64url;

use constant_time_eq::constant_time_eq;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// HS256 algorithm (HMAC with SHA-256)
pub struct HS256;

impl Algorithm for HS256 {
    fn name(&self) -> &'static str {
        "HS256"
    }

    fn sign(&self, signing_input: &[u8], key: &SecretKey<'_>) -> Result<Vec<u8>> {
        sign_hs256(signing_input, key.as_bytes())
    }

    fn verify(&self, signing_input: &[u8], signature: &str, key: &SecretKey<'_>) -> Result<bool> {
        let provided_signature = base64url::decode_bytes(signature, MAX_DECODED_SIGNATURE_SIZE)?;
        verify_hs256(signing_input, &provided_signature, key.as_bytes())
    }
}

/// Compute an HS256 MAC over the signing input
fn sign_hs256(signing_input: &[u8], secret: &[u8]) -> Result<Vec<u8>> {
    // HMAC accepts keys of any length; the error arm is unreachable in practice
    let mut mac = HmacSha256::new_from_slice(secret)
        .map_err(|e| Error::EncodingFailed(format!("HMAC key rejected: {e}")))?;
    mac.update(signing_input);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Verify HS256 signature with constant-time comparison
fn verify_hs256(signing_input: &[u8], provided_signature: &[u8], secret: &[u8]) -> Result<bool> {
    let mut mac = HmacSha256::new_from_slice(secret).map_err(|_| Error::SignatureInvalid)?;
    mac.update(signing_input);
    let expected_signature = mac.finalize().into_bytes();

    if provided_signature.len() != expected_signature.len() {
        return Ok(false);
    }

    Ok(constant_time_eq(provided_signature, &expected_signature))
}
