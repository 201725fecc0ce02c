//! Decode outcomes
//!
//! Every decode produces exactly one [`Verdict`]. The claims travel alongside
//! it whenever the token could be parsed, so a caller can inspect what an
//! untrusted token claims without mistaking it for a trusted one.

use crate::claims::ClaimSet;
use crate::error::{Error, Result};
use crate::token::TokenHeader;

/// Classification of a decode attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Signature verified and temporal claims in range
    Valid,
    /// Signature mismatch, or the header declares an algorithm other than HS256
    InvalidSignature,
    /// Signature verified, but `exp` has passed
    Expired,
    /// Signature verified, but `nbf` is still in the future
    NotYetValid,
    /// The token (or a temporal claim in it) is structurally unusable
    Malformed,
    /// No secret supplied: parsed only, signature not checked
    Unverified,
}

impl Verdict {
    /// Whether the signature was verified, i.e. the claims are authentic
    ///
    /// `Expired` and `NotYetValid` tokens carry authentic claims even though
    /// the token is not currently acceptable.
    pub fn is_authentic(&self) -> bool {
        matches!(
            self,
            Verdict::Valid | Verdict::Expired | Verdict::NotYetValid
        )
    }

    /// Map a decode error to its verdict
    pub fn from_error(error: &Error) -> Self {
        match error {
            Error::TokenTooLarge { .. }
            | Error::FormatInvalid
            | Error::FormatInvalidBase64(_)
            | Error::FormatInvalidJson(_)
            | Error::HeaderMissingField(_)
            | Error::SignatureB64TooLarge { .. }
            | Error::ClaimMalformed { .. }
            | Error::ClockSkewTooLarge { .. } => Verdict::Malformed,

            Error::AlgorithmUnsupported(_)
            | Error::AlgorithmNoneRejected
            | Error::SignatureInvalid => Verdict::InvalidSignature,

            Error::TokenExpired { .. } => Verdict::Expired,
            Error::TokenNotYetValid { .. } => Verdict::NotYetValid,
            Error::TokenUnverified => Verdict::Unverified,

            // Encode-side failures never come out of a decode
            Error::ClaimInvalidValue(_) | Error::EncodingFailed(_) | Error::SecretEmpty => {
                Verdict::Malformed
            }
        }
    }

    /// Convert to string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Verdict::Valid => "valid",
            Verdict::InvalidSignature => "invalid signature",
            Verdict::Expired => "expired",
            Verdict::NotYetValid => "not yet valid",
            Verdict::Malformed => "malformed",
            Verdict::Unverified => "unverified",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of decoding a token: claims, verdict and the error behind it
#[derive(Debug, Clone)]
pub struct Decoded {
    header: Option<TokenHeader>,
    claims: Option<ClaimSet>,
    verdict: Verdict,
    error: Option<Error>,
}

impl Decoded {
    pub(crate) fn valid(header: TokenHeader, claims: ClaimSet) -> Self {
        Self {
            header: Some(header),
            claims: Some(claims),
            verdict: Verdict::Valid,
            error: None,
        }
    }

    pub(crate) fn unverified(header: TokenHeader, claims: ClaimSet) -> Self {
        Self {
            header: Some(header),
            claims: Some(claims),
            verdict: Verdict::Unverified,
            error: None,
        }
    }

    /// A failed decode; structurally malformed tokens never surface claims
    pub(crate) fn rejected(parts: Option<(TokenHeader, ClaimSet)>, error: Error) -> Self {
        let parts = if error.is_malformed() { None } else { parts };
        let (header, claims) = parts.unzip();
        Self {
            header,
            claims,
            verdict: Verdict::from_error(&error),
            error: Some(error),
        }
    }

    /// The verdict
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// Whether the token is authentic and currently valid
    pub fn is_valid(&self) -> bool {
        self.verdict == Verdict::Valid
    }

    /// Decoded claims, absent only when the token could not be parsed
    pub fn claims(&self) -> Option<&ClaimSet> {
        self.claims.as_ref()
    }

    /// Decoded header, absent only when the token could not be parsed
    pub fn header(&self) -> Option<&TokenHeader> {
        self.header.as_ref()
    }

    /// The error behind a verdict other than `Valid`/`Unverified`
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Claims of a `Valid` token; every other verdict is an error
    pub fn into_trusted(self) -> Result<ClaimSet> {
        match (self.verdict, self.claims, self.error) {
            (Verdict::Valid, Some(claims), _) => Ok(claims),
            (_, _, Some(error)) => Err(error),
            _ => Err(Error::TokenUnverified),
        }
    }

    /// Split into claims, verdict and error
    pub fn into_parts(self) -> (Option<ClaimSet>, Verdict, Option<Error>) {
        (self.claims, self.verdict, self.error)
    }
}
