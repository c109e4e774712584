//! Claim sets, default registered claims, and expiration resolution.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value, json};
use uuid::Uuid;

use crate::core::time_expression::parse_human_time;
use crate::error::JwtError;

/// Ordered mapping of claim name to JSON value.
pub type ClaimSet = Map<String, Value>;

/// Issuer used when the caller does not supply `iss`.
pub const DEFAULT_ISSUER: &str = "Core-Issuer";

/// Sole audience used when the caller does not supply `aud`.
pub const DEFAULT_AUDIENCE: &str = "Core-Audience";

/// Token lifetime used when the caller does not supply an expiration (15 minutes).
pub const DEFAULT_TTL_SECS: i64 = 15 * 60;

/// Build the default registered claims for a token signed at `now`.
///
/// `jti` is a fresh time-ordered UUID (v7) on every call. `exp` is not
/// included here; it is always set from the resolved expiration.
pub fn default_claims(now: i64) -> ClaimSet {
    let mut claims = ClaimSet::new();
    claims.insert("iss".to_string(), json!(DEFAULT_ISSUER));
    claims.insert("sub".to_string(), json!(""));
    claims.insert("aud".to_string(), json!([DEFAULT_AUDIENCE]));
    claims.insert("jti".to_string(), json!(Uuid::now_v7().to_string()));
    claims.insert("nbf".to_string(), json!(now));
    claims.insert("iat".to_string(), json!(now));
    claims
}

/// Assemble the final payload: defaults, then caller claims, then `exp`.
///
/// Caller claims replace defaults key by key (shallow merge). A caller
/// supplied `exp` is always overwritten by the resolved expiration.
pub fn assemble_claims(now: i64, exp: i64, claims: &ClaimSet) -> ClaimSet {
    let mut merged = default_claims(now);
    for (name, value) in claims {
        merged.insert(name.clone(), value.clone());
    }
    merged.insert("exp".to_string(), json!(exp));
    merged
}

/// When a token should expire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpirationSpec {
    /// Offset in seconds from the signing instant.
    Seconds(i64),
    /// Absolute instant; sub-second precision is truncated.
    At(DateTime<Utc>),
    /// Human time expression such as `"2 hours"`, offset from the signing instant.
    Expression(String),
}

impl ExpirationSpec {
    /// Resolve to an absolute Unix timestamp relative to `now`.
    ///
    /// # Errors
    ///
    /// Returns [`JwtError::InvalidTimeExpression`] for an unparseable
    /// expression and [`JwtError::ExpirationInPast`] when the resolved
    /// instant is at or before `now`.
    pub fn resolve(&self, now: i64) -> Result<i64, JwtError> {
        let exp = match self {
            Self::Seconds(offset) => now.saturating_add(*offset),
            Self::At(instant) => instant.timestamp(),
            Self::Expression(expression) => now.saturating_add(parse_human_time(expression)?),
        };

        if exp <= now {
            return Err(JwtError::ExpirationInPast { exp, now });
        }
        Ok(exp)
    }
}

impl Default for ExpirationSpec {
    fn default() -> Self {
        Self::Seconds(DEFAULT_TTL_SECS)
    }
}

impl From<i64> for ExpirationSpec {
    fn from(offset: i64) -> Self {
        Self::Seconds(offset)
    }
}

impl From<DateTime<Utc>> for ExpirationSpec {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::At(instant)
    }
}

impl From<&str> for ExpirationSpec {
    fn from(expression: &str) -> Self {
        Self::Expression(expression.to_string())
    }
}

impl From<String> for ExpirationSpec {
    fn from(expression: String) -> Self {
        Self::Expression(expression)
    }
}
