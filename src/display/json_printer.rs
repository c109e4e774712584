//! JSON rendering for terminal output.

use anyhow::Result;
use jwt_mint::VerifiedToken;
use serde_json::{Value, json};

/// Print a JSON value with 2-space indentation.
pub fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Render a verified token as a single `{"header": .., "payload": ..}` document.
pub fn verified_json(verified: &VerifiedToken) -> Result<Value> {
    Ok(json!({
        "header": serde_json::to_value(&verified.header)?,
        "payload": verified.payload,
    }))
}

/// Print a verified token as machine-readable JSON.
pub fn print_verified_json(verified: &VerifiedToken) -> Result<()> {
    print_json(&verified_json(verified)?)
}

#[cfg(test)]
mod tests {
    use jwt_mint::{ClaimSet, VerifyOptions, sign, verify};

    use super::*;

    #[test]
    fn test_verified_json_has_header_and_payload() {
        let secret = "display-test-secret-that-is-long-enough";
        let mut claims = ClaimSet::new();
        claims.insert("sub".to_string(), json!("1234567890"));
        let token = sign(secret, &claims, "1 hour").unwrap();
        let verified = verify(&token, secret, &VerifyOptions::default()).unwrap();

        let doc = verified_json(&verified).unwrap();
        assert_eq!(doc["header"]["alg"], "HS256");
        assert_eq!(doc["header"]["typ"], "JWT");
        assert_eq!(doc["payload"]["sub"], "1234567890");
    }
}
