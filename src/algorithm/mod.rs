//! Algorithm support for JWT signing and verification
mod traits;

pub mod hmac;

pub use hmac::HS256;
pub use traits::Algorithm;

use crate::error::{Error, Result};
use crate::limits::MAX_ALG_LENGTH;

/// Algorithm identifier from JWT header
///
/// HS256 is the only signing algorithm. Anything else a token header declares
/// is rejected before a signature is ever looked at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmId {
    /// HMAC with SHA-256
    HS256,
}

impl AlgorithmId {
    /// Parse algorithm string from JWT header
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        // Validate algorithm string length before parsing to prevent DoS
        if s.len() > MAX_ALG_LENGTH {
            return Err(Error::AlgorithmUnsupported(format!(
                "Algorithm string too long: {} bytes (maximum: {} bytes)",
                s.len(),
                MAX_ALG_LENGTH
            )));
        }

        match s {
            "none" => Err(Error::AlgorithmNoneRejected),
            "HS256" => Ok(AlgorithmId::HS256),
            _ => Err(Error::AlgorithmUnsupported(s.to_string())),
        }
    }

    /// Convert to string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            AlgorithmId::HS256 => "HS256",
        }
    }

    /// Get the signer/verifier implementing this algorithm
    pub fn implementation(&self) -> &'static (dyn Algorithm + Send + Sync) {
        match self {
            AlgorithmId::HS256 => &HS256,
        }
    }
}

impl std::fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl AsRef<str> for AlgorithmId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_from_str() {
        assert_eq!(AlgorithmId::from_str("HS256").unwrap(), AlgorithmId::HS256);

        assert!(matches!(
            AlgorithmId::from_str("none"),
            Err(Error::AlgorithmNoneRejected)
        ));

        for alg in ["HS384", "HS512", "RS256", "ES256", "hs256", "None", "NONE", ""] {
            assert!(
                matches!(
                    AlgorithmId::from_str(alg),
                    Err(Error::AlgorithmUnsupported(_))
                ),
                "{alg} must be unsupported"
            );
        }
    }

    #[test]
    fn test_algorithm_too_long() {
        let long = "HS256".repeat(10);
        assert!(matches!(
            AlgorithmId::from_str(&long),
            Err(Error::AlgorithmUnsupported(msg)) if msg.contains("too long")
        ));
    }

    #[test]
    fn test_algorithm_display() {
        assert_eq!(format!("{}", AlgorithmId::HS256), "HS256");
        assert_eq!(AlgorithmId::HS256.as_str(), "HS256");
        assert_eq!(AlgorithmId::HS256.implementation().name(), "HS256");
    }
}
