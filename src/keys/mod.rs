/// Shared secret for HMAC signing and verification
///
/// The key only borrows the caller's bytes for the duration of a single
/// encode or decode call. It is never copied, cloned into long-lived state,
/// or printed: the `Debug` output is redacted.
#[derive(Clone, Copy)]
pub struct SecretKey<'a> {
    secret: &'a [u8],
}

impl<'a> SecretKey<'a> {
    /// Wrap caller-provided secret bytes
    pub fn new(secret: &'a [u8]) -> Self {
        Self { secret }
    }

    /// Get the secret bytes
    pub fn as_bytes(&self) -> &'a [u8] {
        self.secret
    }

    /// An empty secret selects parse-only (unverified) mode on decode
    pub fn is_empty(&self) -> bool {
        self.secret.is_empty()
    }
}

impl std::fmt::Debug for SecretKey<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretKey")
            .field("len", &self.secret.len())
            .finish_non_exhaustive()
    }
}

impl<'a> From<&'a [u8]> for SecretKey<'a> {
    fn from(secret: &'a [u8]) -> Self {
        Self::new(secret)
    }
}

impl<'a> From<&'a str> for SecretKey<'a> {
    fn from(secret: &'a str) -> Self {
        Self::new(secret.as_bytes())
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for SecretKey<'a> {
    fn from(secret: &'a [u8; N]) -> Self {
        Self::new(secret)
    }
}
