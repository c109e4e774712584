//! Handler for the `sign` subcommand.
//!
//! Builds a claim set from `--claims`, resolves `--expires`, and prints
//! the signed token on stdout.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use jwt_mint::{ClaimSet, ExpirationSpec, TokenSigner};
use serde_json::Value;

use crate::cli::SignArgs;
use crate::commands::input::{InputError, read_secret};

/// Execute the `sign` subcommand with the given arguments.
pub fn execute(args: &SignArgs) -> Result<()> {
    let secret = read_secret(&args.secret)?;
    let claims = parse_claims(&args.claims)?;
    let expiration = args
        .expires
        .as_deref()
        .map(parse_expiration)
        .unwrap_or_default();

    let token = TokenSigner::new()
        .sign(secret.as_bytes(), &claims, expiration)
        .context("could not sign token")?;
    println!("{token}");
    Ok(())
}

/// Parse `--claims` as a JSON object.
fn parse_claims(raw: &str) -> Result<ClaimSet, InputError> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(claims)) => Ok(claims),
        Ok(_) => Err(InputError::InvalidClaims {
            reason: "expected an object".to_string(),
        }),
        Err(e) => Err(InputError::InvalidClaims {
            reason: e.to_string(),
        }),
    }
}

/// Interpret `--expires`: integer seconds, then RFC 3339, then a human expression.
fn parse_expiration(raw: &str) -> ExpirationSpec {
    if let Ok(seconds) = raw.parse::<i64>() {
        return ExpirationSpec::Seconds(seconds);
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return ExpirationSpec::At(instant.with_timezone(&Utc));
    }
    ExpirationSpec::Expression(raw.to_string())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_parse_expiration_integer_is_relative_seconds() {
        assert_eq!(parse_expiration("3600"), ExpirationSpec::Seconds(3600));
        assert_eq!(parse_expiration("-5"), ExpirationSpec::Seconds(-5));
    }

    #[test]
    fn test_parse_expiration_rfc3339_is_absolute() {
        let expected = Utc.with_ymd_and_hms(2030, 1, 15, 14, 30, 0).unwrap();
        assert_eq!(
            parse_expiration("2030-01-15T15:30:00+01:00"),
            ExpirationSpec::At(expected)
        );
    }

    #[test]
    fn test_parse_expiration_falls_back_to_expression() {
        assert_eq!(
            parse_expiration("2 hours"),
            ExpirationSpec::Expression("2 hours".to_string())
        );
    }

    #[test]
    fn test_parse_claims_requires_object() {
        assert!(parse_claims(r#"{"role":"admin"}"#).is_ok());
        assert!(matches!(
            parse_claims("[1,2]"),
            Err(InputError::InvalidClaims { .. })
        ));
        assert!(matches!(
            parse_claims("{not json"),
            Err(InputError::InvalidClaims { .. })
        ));
    }
}
