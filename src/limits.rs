//! Size limit constants for input validation

/// Maximum length for a JWT token string (64KB)
pub(crate) const MAX_TOKEN_LENGTH: usize = 64 * 1024;

// ============================================================================
// Decoded segment size limits
// ============================================================================

/// Maximum size for decoded JWT header JSON (8KB)
/// Headers are typically small (< 1KB), but we allow reasonable margin
pub(crate) const MAX_DECODED_HEADER_SIZE: usize = 8 * 1024;

/// Maximum size for decoded JWT claims JSON (64KB)
pub(crate) const MAX_DECODED_PAYLOAD_SIZE: usize = 64 * 1024;

/// Maximum size for decoded signature bytes (1KB)
/// HS256 signatures are 32 bytes; anything near this bound is garbage
pub(crate) const MAX_DECODED_SIGNATURE_SIZE: usize = 1024;

/// Maximum size for Base64URL-encoded signature string (1.5KB)
pub(crate) const MAX_SIGNATURE_B64_SIZE: usize = 1536;

// ============================================================================
// Header field size limits
// ============================================================================

/// Maximum length for algorithm (alg) field in JWT header (16 bytes)
pub(crate) const MAX_ALG_LENGTH: usize = 16;

// ============================================================================
// Validation bounds
// ============================================================================

/// Maximum clock skew tolerance (300 seconds = 5 minutes)
/// Prevents clock skew from effectively disabling expiration checks
pub(crate) const MAX_CLOCK_SKEW_SECONDS: u64 = 300;
