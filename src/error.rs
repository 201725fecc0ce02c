//! Errors for jwtutil

use thiserror::Error;

/// jwtutil Errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Token too large: {size} bytes (maximum: {max} bytes)")]
    TokenTooLarge { size: usize, max: usize },

    // ============================================================================
    // Format Errors
    // ============================================================================
    #[error("Invalid JWT format: expected three parts separated by '.'")]
    FormatInvalid,

    #[error("Base64URL decoding failed: {0}")]
    FormatInvalidBase64(String),

    #[error("JSON parsing failed: {0}")]
    FormatInvalidJson(String),

    #[error("Header is missing required field '{0}'")]
    HeaderMissingField(&'static str),

    #[error("Signature Base64URL string too large: {size} bytes (maximum: {max} bytes)")]
    SignatureB64TooLarge { size: usize, max: usize },

    // ============================================================================
    // Algorithm Errors
    // ============================================================================
    #[error("Algorithm '{0}' is not supported")]
    AlgorithmUnsupported(String),

    #[error("The 'none' algorithm is rejected for security reasons (RFC 8725)")]
    AlgorithmNoneRejected,

    // ============================================================================
    // Signature Errors
    // ============================================================================
    #[error("Signature verification failed")]
    SignatureInvalid,

    #[error("Token signature was not verified: no secret supplied")]
    TokenUnverified,

    // ============================================================================
    // Encoding Errors
    // ============================================================================
    #[error("Invalid claim value: {0}")]
    ClaimInvalidValue(String),

    #[error("Token encoding failed: {0}")]
    EncodingFailed(String),

    #[error("Secret is empty: refusing to sign a token")]
    SecretEmpty,

    // ============================================================================
    // Claim Errors
    // ============================================================================
    #[error("Claim '{claim}' is malformed: {reason}")]
    ClaimMalformed { claim: &'static str, reason: String },

    #[error("Token expired at {expired_at} (now: {now}, skew: {skew}s)")]
    TokenExpired {
        expired_at: i64,
        now: i64,
        skew: u64,
    },

    #[error("Token not valid until {not_before} (now: {now}, skew: {skew}s)")]
    TokenNotYetValid {
        not_before: i64,
        now: i64,
        skew: u64,
    },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Clock skew too large: {value} seconds (maximum: {max} seconds)")]
    ClockSkewTooLarge { value: u64, max: u64 },
}

impl Error {
    /// Whether the error means the token string itself is structurally unusable
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Error::TokenTooLarge { .. }
                | Error::FormatInvalid
                | Error::FormatInvalidBase64(_)
                | Error::FormatInvalidJson(_)
                | Error::HeaderMissingField(_)
                | Error::SignatureB64TooLarge { .. }
        )
    }
}

/// Result type alias for jwtutil operations
pub type Result<T> = std::result::Result<T, Error>;
