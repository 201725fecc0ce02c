//! Temporal claim validation
//!
//! Checks `exp` and `nbf` against the current time. Absent claims do not
//! constrain validity; present claims must be JSON numbers.

use crate::claims::{json_type, numeric_date, reserved, ClaimSet};
use crate::error::{Error, Result};
use crate::limits::MAX_CLOCK_SKEW_SECONDS;
use serde_json::Value;
use std::time::{SystemTime, UNIX_EPOCH};

/// Configuration for claims validation
#[derive(Debug, Clone)]
pub struct Validation {
    validate_exp: bool,
    validate_nbf: bool,
    clock_skew_seconds: u64,
    fixed_now: Option<i64>,
}

impl Default for Validation {
    fn default() -> Self {
        Self {
            validate_exp: true,
            validate_nbf: true,
            clock_skew_seconds: 0,
            fixed_now: None,
        }
    }
}

impl Validation {
    /// Create a new validation config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set clock skew tolerance
    ///
    /// # Security
    /// Clock skew is limited to prevent effectively disabling expiration checks.
    /// Maximum allowed value is 300 seconds (5 minutes).
    pub fn clock_skew(mut self, seconds: u64) -> Self {
        self.clock_skew_seconds = seconds;
        self
    }

    /// Disable expiration validation
    pub fn no_exp_validation(mut self) -> Self {
        self.validate_exp = false;
        self
    }

    /// Disable not-before validation
    pub fn no_nbf_validation(mut self) -> Self {
        self.validate_nbf = false;
        self
    }

    /// Validate against a fixed Unix timestamp instead of the system clock
    pub fn at(mut self, unix_seconds: i64) -> Self {
        self.fixed_now = Some(unix_seconds);
        self
    }

    /// Configured clock skew in seconds
    pub fn skew(&self) -> u64 {
        self.clock_skew_seconds
    }

    /// Reject configurations that would weaken validation
    pub fn check(&self) -> Result<()> {
        if self.clock_skew_seconds > MAX_CLOCK_SKEW_SECONDS {
            return Err(Error::ClockSkewTooLarge {
                value: self.clock_skew_seconds,
                max: MAX_CLOCK_SKEW_SECONDS,
            });
        }
        Ok(())
    }

    /// The time validation runs against
    pub fn now(&self) -> i64 {
        self.fixed_now.unwrap_or_else(current_timestamp)
    }

    /// Validate claims against [`Validation::now`]
    pub fn validate(&self, claims: &ClaimSet) -> Result<()> {
        check_temporal(claims, self.now(), self)
    }
}

/// Check `exp` and `nbf` against `now`
///
/// A token expires at `exp` itself: it is expired once `now >= exp`. It
/// becomes valid at `nbf` itself: it is not yet valid while `now < nbf`.
/// Clock skew widens both windows.
pub fn check_temporal(claims: &ClaimSet, now: i64, config: &Validation) -> Result<()> {
    config.check()?;

    let expiration = if config.validate_exp {
        temporal_claim(claims, reserved::EXPIRATION)?
    } else {
        None
    };
    let not_before = if config.validate_nbf {
        temporal_claim(claims, reserved::NOT_BEFORE)?
    } else {
        None
    };
    let skew = config.clock_skew_seconds;
    let skew_i64 = skew as i64;

    if let Some(exp) = expiration {
        if now >= exp.saturating_add(skew_i64) {
            return Err(Error::TokenExpired {
                expired_at: exp,
                now,
                skew,
            });
        }
    }

    if let Some(nbf) = not_before {
        if now < nbf.saturating_sub(skew_i64) {
            return Err(Error::TokenNotYetValid {
                not_before: nbf,
                now,
                skew,
            });
        }
    }

    Ok(())
}

/// Read a NumericDate claim, failing if it is present with the wrong type
fn temporal_claim(claims: &ClaimSet, name: &'static str) -> Result<Option<i64>> {
    match claims.get(name) {
        None => Ok(None),
        Some(Value::Number(number)) => Ok(Some(numeric_date(number))),
        Some(other) => Err(Error::ClaimMalformed {
            claim: name,
            reason: format!("expected a number, found {}", json_type(other)),
        }),
    }
}

/// Get current Unix timestamp
fn current_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_else(|_| std::time::Duration::from_secs(0))
        .as_secs() as i64
}
