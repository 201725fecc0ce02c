use crate::error::Result;
use crate::keys::SecretKey;

/// Core algorithm trait that JWT signature algorithms implement
///
/// This trait defines the contract for signing and verification.
pub trait Algorithm {
    /// The algorithm identifier (e.g., "HS256")
    fn name(&self) -> &'static str;

    /// Compute the signature bytes over the signing input
    fn sign(&self, signing_input: &[u8], key: &SecretKey<'_>) -> Result<Vec<u8>>;

    /// Verify a signature
    ///
    /// Returns `Ok(false)` on a mismatch. An error is returned only when the
    /// signature segment cannot be decoded at all.
    ///
    /// # Arguments
    /// * `signing_input` - The data that was signed (header.payload), as received
    /// * `signature` - The Base64URL-encoded signature segment
    /// * `key` - The key to use for verification
    fn verify(&self, signing_input: &[u8], signature: &str, key: &SecretKey<'_>) -> Result<bool>;
}
