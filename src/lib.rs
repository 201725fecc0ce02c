//! # jwtutil - Issue and Inspect HS256 JSON Web Tokens
//!
//! **jwtutil** signs claim sets into compact JWTs and decodes them back,
//! reporting the claims together with a single [`Verdict`] on their validity.
//! It is built for callers that want to assert identity or authorization facts
//! between parties that share a secret but no session store.
//!
//! ## Quick Start
//!
//! ```
//! use jwtutil::{decode, encode, ClaimSet, Verdict};
//!
//! let claims = ClaimSet::from_json(r#"{"account":1234}"#)?;
//! let encoded = encode(b"besafe", &claims, None)?;
//!
//! let decoded = decode(encoded.token(), b"besafe");
//! assert_eq!(decoded.verdict(), Verdict::Valid);
//! assert_eq!(decoded.claims(), Some(&claims));
//! # Ok::<(), jwtutil::Error>(())
//! ```
//!
//! ## Decode Flow
//!
//! Decoding short-circuits on the first terminal outcome:
//!
//! ```text
//! token string
//!     │ ParsedToken::from_string()      ── fails ──► Malformed (no claims)
//!     ▼
//! ParsedToken (header + claims + wire-exact signing input)
//!     │ secret empty?                   ── yes ────► Unverified
//!     │ alg == HS256 and MAC matches?   ── no ─────► InvalidSignature
//!     ▼
//! authentic claims
//!     │ check_temporal()                ── exp ────► Expired
//!     │                                 ── nbf ────► NotYetValid
//!     ▼
//! Valid
//! ```
//!
//! Claims are returned for every verdict except `Malformed`. Only `Valid`,
//! `Expired` and `NotYetValid` claims are authentic; use
//! [`Decoded::into_trusted`] to get the claims of a `Valid` token or an error.
//!
//! ## Configuration
//!
//! The free functions [`encode`] and [`decode`] use a default [`TokenEngine`].
//! Configure one explicitly for clock skew, a pinned clock, or automatic `iat`:
//!
//! ```
//! use jwtutil::{TokenEngine, Validation};
//!
//! let engine = TokenEngine::new()
//!     .validate(Validation::new().clock_skew(30))
//!     .issued_at(true)
//!     .build()?;
//! # Ok::<(), jwtutil::Error>(())
//! ```
//!
//! ## Security
//!
//! ### Algorithm Confusion Prevention
//!
//! HS256 is the only algorithm. A token whose header declares anything else,
//! including `"none"`, is rejected as `InvalidSignature` before its signature
//! is looked at.
//!
//! ### Timing Attack Protection
//!
//! HMAC signature verification uses constant-time comparison via the [`constant_time_eq`](https://crates.io/crates/constant_time_eq)
//! crate, preventing timing-based key recovery attacks.
//!
//! ### Secrets
//!
//! Secrets are borrowed per call and never stored, logged or echoed.
//!
//! ## References
//!
//! - [RFC 7515](https://datatracker.ietf.org/doc/html/rfc7515): JSON Web Signature (JWS)
//! - [RFC 7519](https://datatracker.ietf.org/doc/html/rfc7519): JSON Web Token (JWT)
//! - [RFC 8725](https://datatracker.ietf.org/doc/html/rfc8725): JSON Web Signature Best Practices

// Core modules
pub mod error;
pub mod utils;

// Algorithm system
pub mod algorithm;
pub mod keys;

// Claims and validation
pub mod claims;

// Token types
pub mod token;

// Engine (main public API)
pub mod engine;
pub mod verdict;

pub(crate) mod limits;

// ============================================================================
// PUBLIC API
// ============================================================================

// Main operations
pub use engine::{decode, encode, Encoded, TokenEngine};
pub use verdict::{Decoded, Verdict};

// Configuration types
pub use claims::Validation;

// Supporting types for advanced usage
pub use algorithm::AlgorithmId;
pub use claims::{check_temporal, ClaimSet, ClaimValue, StandardClaims};
pub use error::{Error, Result};
pub use keys::SecretKey;
pub use token::{ParsedToken, TokenHeader};
