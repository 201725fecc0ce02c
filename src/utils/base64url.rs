//! Base64URL encoding/decoding per RFC 4648
//!
//! This module provides a thin wrapper around the `base64` crate with
//! size limit validation for security.

use crate::error::{Error, Result};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

/// Encode bytes to Base64URL string (no padding)
pub fn encode_bytes(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Encode string to Base64URL
pub fn encode(input: &str) -> String {
    encode_bytes(input.as_bytes())
}

/// Decode Base64URL string to bytes with maximum size limit
pub fn decode_bytes(input: &str, max_size: usize) -> Result<Vec<u8>> {
    let result = URL_SAFE_NO_PAD
        .decode(input)
        .map_err(|e| Error::FormatInvalidBase64(format!("Base64URL decode failed: {e}")))?;

    // Validate decoded size to prevent DoS attacks
    if result.len() > max_size {
        return Err(Error::FormatInvalidBase64(format!(
            "Decoded size exceeds limit: {} bytes (max: {})",
            result.len(),
            max_size
        )));
    }

    Ok(result)
}

/// Decode Base64URL string to UTF-8 string with size limit
pub fn decode_string(input: &str, max_size: usize) -> Result<String> {
    decode_bytes(input, max_size).and_then(|bytes| {
        String::from_utf8(bytes)
            .map_err(|e| Error::FormatInvalidBase64(format!("Invalid UTF-8: {e}")))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_bytes() {
        assert_eq!(encode_bytes(b""), "");
        assert_eq!(encode_bytes(b"f"), "Zg");
        assert_eq!(encode_bytes(b"fo"), "Zm8");
        assert_eq!(encode_bytes(b"foobar"), "Zm9vYmFy");
        assert_eq!(
            encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9"
        );
    }

    #[test]
    fn test_url_safe_characters() {
        // Base64URL uses - and _ instead of + and /
        let encoded = encode_bytes(&[0xfb, 0xff, 0xbf]);
        assert_eq!(encoded, "-_-_");
    }

    #[test]
    fn test_decode_invalid() {
        assert!(decode_bytes("!!!", 1000).is_err());
        // Standard base64 with padding (should fail for URL_SAFE_NO_PAD)
        assert!(decode_bytes("SGVsbG8=", 1000).is_err());
        // Standard alphabet characters are not Base64URL
        assert!(decode_bytes("+/+/", 1000).is_err());
        assert!(decode_bytes("A", 1000).is_err());
    }

    #[test]
    fn test_decode_valid() {
        let result = decode_bytes("SGVsbG8", 1000).unwrap();
        assert_eq!(result, b"Hello");
    }

    #[test]
    fn test_decode_with_limit() {
        assert_eq!(decode_bytes("SGVsbG8", 10).unwrap(), b"Hello");
        assert!(decode_bytes("SGVsbG8", 3).is_err());
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode_bytes("", 1000).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_decode_string() {
        assert_eq!(decode_string("SGVsbG8", 10).unwrap(), "Hello");
        assert!(decode_string("SGVsbG8", 3).is_err());
        // 0xff is not valid UTF-8
        assert!(matches!(
            decode_string("_w", 10),
            Err(Error::FormatInvalidBase64(_))
        ));
    }
}
