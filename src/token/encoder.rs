use crate::claims::ClaimSet;
use crate::error::{Error, Result};
use crate::keys::SecretKey;
use crate::limits::MAX_TOKEN_LENGTH;
use crate::token::TokenHeader;
use crate::utils::base64url;

/// Serialize and sign a token
///
/// Produces `base64url(header) "." base64url(claims) "." base64url(mac)` where
/// the MAC covers the first two segments joined by the dot.
pub fn encode_token(header: &TokenHeader, claims: &ClaimSet, key: &SecretKey<'_>) -> Result<String> {
    let algorithm = header
        .parse_algorithm()
        .map_err(|e| Error::EncodingFailed(e.to_string()))?;

    let header_b64 = base64url::encode(&header.to_json());
    let payload_b64 = base64url::encode(&claims.to_json()?);
    let signing_input = format!("{header_b64}.{payload_b64}");

    let signature = algorithm
        .implementation()
        .sign(signing_input.as_bytes(), key)?;
    let token = format!("{signing_input}.{}", base64url::encode_bytes(&signature));

    // Never issue a token this crate would refuse to decode
    if token.len() > MAX_TOKEN_LENGTH {
        return Err(Error::EncodingFailed(format!(
            "token is {} bytes (maximum: {} bytes)",
            token.len(),
            MAX_TOKEN_LENGTH
        )));
    }

    Ok(token)
}
