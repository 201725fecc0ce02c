mod finite;
mod validator;

pub use validator::{check_temporal, Validation};

use crate::error::{Error, Result};
use serde::Serialize;
use serde_json::{Map, Value};

/// A single claim value: any JSON value
///
/// `serde_json::Value` is the tagged union (null, bool, number, string, array,
/// object). Its numbers can never hold NaN or infinity.
pub type ClaimValue = Value;

/// Reserved claim names defined in RFC 7519 Section 4.1
pub mod reserved {
    /// Issuer
    pub const ISSUER: &str = "iss";
    /// Subject
    pub const SUBJECT: &str = "sub";
    /// Audience
    pub const AUDIENCE: &str = "aud";
    /// Expiration Time
    pub const EXPIRATION: &str = "exp";
    /// Not Before
    pub const NOT_BEFORE: &str = "nbf";
    /// Issued At
    pub const ISSUED_AT: &str = "iat";
    /// JWT ID
    pub const JWT_ID: &str = "jti";
}

/// The `StandardClaims` trait defines the standard JWT claims.
///
/// Accessors are lenient: a claim of the wrong JSON type reads as absent.
/// Strict typing of `exp`/`nbf` happens in [`check_temporal`].
pub trait StandardClaims {
    /// Issuer (iss) - identifies the principal that issued the JWT
    fn issuer(&self) -> Option<&str>;
    /// Subject (sub) - identifies the principal that is the subject of the JWT
    fn subject(&self) -> Option<&str>;
    /// Audience (aud) - identifies the recipients that the JWT is intended for
    fn audience(&self) -> Option<&str>;
    /// Expiration Time (exp) - identifies the expiration time (seconds since Unix epoch)
    fn expiration(&self) -> Option<i64>;
    /// Not Before (nbf) - identifies the time before which the JWT MUST NOT be accepted
    fn not_before(&self) -> Option<i64>;
    /// Issued At (iat) - identifies the time at which the JWT was issued
    fn issued_at(&self) -> Option<i64>;
    /// JWT ID (jti) - provides a unique identifier for the JWT
    fn jwt_id(&self) -> Option<&str>;
}

/// The claims carried by a token
///
/// Claim names are unique. Unknown claims are kept verbatim, in insertion
/// order, and survive an encode/decode round trip unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClaimSet {
    claims: Map<String, ClaimValue>,
}

impl ClaimSet {
    /// Create an empty claim set
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a caller-supplied JSON object, e.g. `{"account":1234}`
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| Error::ClaimInvalidValue(format!("claims are not valid JSON: {e}")))?;
        Self::from_value(value)
    }

    /// Build a claim set from a JSON value, which must be an object
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(claims) => Ok(Self { claims }),
            other => Err(Error::ClaimInvalidValue(format!(
                "claims must be a JSON object, found {}",
                json_type(&other)
            ))),
        }
    }

    /// Insert or overwrite a claim from any serializable value
    ///
    /// Fails with [`Error::ClaimInvalidValue`] when the value has no JSON
    /// representation: NaN or an infinity anywhere inside it, or a map with
    /// non-string keys. The set is left unchanged on failure.
    pub fn set<T>(&mut self, name: impl Into<String>, value: &T) -> Result<Option<ClaimValue>>
    where
        T: Serialize + ?Sized,
    {
        let name = name.into();
        finite::check_finite(value)
            .map_err(|e| Error::ClaimInvalidValue(format!("claim '{name}': {e}")))?;
        let value = serde_json::to_value(value)
            .map_err(|e| Error::ClaimInvalidValue(format!("claim '{name}': {e}")))?;
        Ok(self.insert(name, value))
    }

    /// Insert or overwrite a numeric claim, rejecting NaN and infinities
    pub fn set_number(&mut self, name: impl Into<String>, value: f64) -> Result<Option<ClaimValue>> {
        let name = name.into();
        let number = serde_json::Number::from_f64(value).ok_or_else(|| {
            Error::ClaimInvalidValue(format!("claim '{name}': {value} is not a finite number"))
        })?;
        Ok(self.insert(name, Value::Number(number)))
    }

    /// Insert or overwrite a claim, returning the previous value
    pub fn insert(&mut self, name: impl Into<String>, value: ClaimValue) -> Option<ClaimValue> {
        self.claims.insert(name.into(), value)
    }

    /// Get a claim by name
    pub fn get(&self, name: &str) -> Option<&ClaimValue> {
        self.claims.get(name)
    }

    /// Check whether a claim is present
    pub fn contains(&self, name: &str) -> bool {
        self.claims.contains_key(name)
    }

    /// Remove a claim, keeping the order of the remaining ones
    pub fn remove(&mut self, name: &str) -> Option<ClaimValue> {
        self.claims.shift_remove(name)
    }

    /// Merge `other` into this set; on a name collision `other` wins
    pub fn merge(&mut self, other: ClaimSet) {
        for (name, value) in other.claims {
            self.claims.insert(name, value);
        }
    }

    /// Number of claims
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    /// Whether the set holds no claims
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Iterate claims in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ClaimValue)> {
        self.claims.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Claim names in lexicographic order, for stable display
    pub fn names_sorted(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.claims.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Compact JSON representation of the claims
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.claims).map_err(|e| Error::EncodingFailed(e.to_string()))
    }

    /// Borrow the underlying JSON object
    pub fn as_map(&self) -> &Map<String, ClaimValue> {
        &self.claims
    }

    /// Take the underlying JSON object
    pub fn into_map(self) -> Map<String, ClaimValue> {
        self.claims
    }

    fn string_claim(&self, name: &str) -> Option<&str> {
        self.claims.get(name).and_then(Value::as_str)
    }

    fn numeric_claim(&self, name: &str) -> Option<i64> {
        self.claims.get(name).and_then(|value| match value {
            Value::Number(number) => Some(numeric_date(number)),
            _ => None,
        })
    }
}

impl StandardClaims for ClaimSet {
    fn issuer(&self) -> Option<&str> {
        self.string_claim(reserved::ISSUER)
    }

    fn subject(&self) -> Option<&str> {
        self.string_claim(reserved::SUBJECT)
    }

    fn audience(&self) -> Option<&str> {
        self.string_claim(reserved::AUDIENCE)
    }

    fn expiration(&self) -> Option<i64> {
        self.numeric_claim(reserved::EXPIRATION)
    }

    fn not_before(&self) -> Option<i64> {
        self.numeric_claim(reserved::NOT_BEFORE)
    }

    fn issued_at(&self) -> Option<i64> {
        self.numeric_claim(reserved::ISSUED_AT)
    }

    fn jwt_id(&self) -> Option<&str> {
        self.string_claim(reserved::JWT_ID)
    }
}

impl From<Map<String, ClaimValue>> for ClaimSet {
    fn from(claims: Map<String, ClaimValue>) -> Self {
        Self { claims }
    }
}

impl<'a> IntoIterator for &'a ClaimSet {
    type Item = (&'a String, &'a ClaimValue);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.claims.iter()
    }
}

/// Convert a JSON number to whole Unix seconds
///
/// Fractional dates round up: for an integer `now`, `now >= x` holds exactly
/// when `now >= ceil(x)`, and likewise for `<`. Out-of-range values saturate.
pub(crate) fn numeric_date(number: &serde_json::Number) -> i64 {
    if let Some(value) = number.as_i64() {
        value
    } else if number.is_u64() {
        i64::MAX
    } else {
        number.as_f64().map_or(0, |value| value.ceil() as i64)
    }
}

pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
