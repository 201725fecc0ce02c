use crate::algorithm::AlgorithmId;
use crate::error::{Error, Result};
use miniserde::{Deserialize, Serialize};

/// Type value written into every issued header
pub const TOKEN_TYPE_JWT: &str = "JWT";

/// JWT header structure
///
/// Serializes as `{"alg":"HS256","typ":"JWT"}`, fields in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenHeader {
    /// Algorithm used for signing
    #[serde(rename = "alg")]
    algorithm: String,

    /// Token type (typically "JWT")
    #[serde(rename = "typ")]
    token_type: String,
}

/// Header as found on the wire, before required fields are checked
#[derive(Deserialize)]
struct RawHeader {
    #[serde(rename = "alg")]
    algorithm: Option<String>,

    #[serde(rename = "typ")]
    token_type: Option<String>,
}

impl TokenHeader {
    /// Header for an HS256-signed JWT
    pub fn hs256() -> Self {
        Self {
            algorithm: AlgorithmId::HS256.as_str().to_string(),
            token_type: TOKEN_TYPE_JWT.to_string(),
        }
    }

    /// Parse header JSON, requiring both `alg` and `typ`
    ///
    /// Unknown header fields (e.g. `kid`) are ignored.
    pub(crate) fn from_json(json: &str) -> Result<Self> {
        let raw: RawHeader = miniserde::json::from_str(json)
            .map_err(|e| Error::FormatInvalidJson(format!("Failed to parse header: {e}")))?;

        Ok(Self {
            algorithm: raw.algorithm.ok_or(Error::HeaderMissingField("alg"))?,
            token_type: raw.token_type.ok_or(Error::HeaderMissingField("typ"))?,
        })
    }

    /// Compact header JSON
    pub(crate) fn to_json(&self) -> String {
        miniserde::json::to_string(self)
    }

    /// Parse algorithm from header
    pub fn parse_algorithm(&self) -> Result<AlgorithmId> {
        AlgorithmId::from_str(&self.algorithm)
    }

    /// Get algorithm as string, exactly as declared
    pub fn algorithm_str(&self) -> &str {
        &self.algorithm
    }

    /// Get token type, exactly as declared
    pub fn token_type(&self) -> &str {
        &self.token_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hs256_header_json() {
        assert_eq!(
            TokenHeader::hs256().to_json(),
            r#"{"alg":"HS256","typ":"JWT"}"#
        );
    }

    #[test]
    fn test_parse_header() {
        let header = TokenHeader::from_json(r#"{"typ":"JWT","alg":"HS256","kid":"k1"}"#).unwrap();
        assert_eq!(header, TokenHeader::hs256());
        assert_eq!(header.parse_algorithm().unwrap(), AlgorithmId::HS256);
    }

    #[test]
    fn test_parse_header_keeps_foreign_algorithm() {
        let header = TokenHeader::from_json(r#"{"alg":"RS256","typ":"JWT"}"#).unwrap();
        assert_eq!(header.algorithm_str(), "RS256");
        assert!(matches!(
            header.parse_algorithm(),
            Err(Error::AlgorithmUnsupported(_))
        ));
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(
            TokenHeader::from_json(r#"{"typ":"JWT"}"#),
            Err(Error::HeaderMissingField("alg"))
        );
        assert_eq!(
            TokenHeader::from_json(r#"{"alg":"HS256"}"#),
            Err(Error::HeaderMissingField("typ"))
        );
    }

    #[test]
    fn test_invalid_header_json() {
        for json in ["not json", "[]", r#"{"alg":256,"typ":"JWT"}"#] {
            assert!(matches!(
                TokenHeader::from_json(json),
                Err(Error::FormatInvalidJson(_))
            ));
        }
    }
}
