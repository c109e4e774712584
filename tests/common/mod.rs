//! Shared test fixtures and helper utilities.
//!
//! Not every integration test binary uses every helper.
#![allow(dead_code)]

use serde_json::Value;

/// HMAC secret long enough to pass the strength gate.
pub const TEST_SECRET: &str = "my-very-secure-secret-key-that-is-long-enough-for-hs256-algorithm";

/// A different valid secret, for signature mismatch tests.
pub const WRONG_SECRET: &str = "wrong-secret-key-that-is-also-long-enough-for-hs256";

/// A secret one byte short of the minimum.
pub const WEAK_SECRET: &str = "0123456789012345678901234567890";

/// A token with only two parts (missing signature).
pub const MALFORMED_TOKEN_TWO_PARTS: &str = "eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiIxMjM0NTY3ODkwIn0";

/// Current time in Unix seconds.
pub fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Unwrap a `json!` object literal into a claim set.
pub fn claims(value: Value) -> jwt_mint::ClaimSet {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

/// Create an HS256-signed token directly with `jsonwebtoken`, bypassing the signer.
pub fn create_hs256_token(secret: &str, claims: &Value) -> String {
    use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
    let header = Header::new(Algorithm::HS256);
    let key = EncodingKey::from_secret(secret.as_bytes());
    encode(&header, claims, &key).unwrap()
}
