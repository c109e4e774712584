//! Token codec: the boundary to the JWS encoding and MAC primitives.
//!
//! The signer and verifier never touch base64url, JSON encoding, or
//! HMAC directly. They go through [`TokenCodec`], whose default
//! implementation is backed by `jsonwebtoken`.

use jsonwebtoken::errors::Result as CodecResult;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, TokenData, Validation};

use crate::core::claims::ClaimSet;

/// The only signing algorithm this crate issues or accepts.
pub const ALGORITHM: Algorithm = Algorithm::HS256;

/// Value of the `typ` header parameter on issued tokens.
pub const TOKEN_TYPE: &str = "JWT";

/// Signs claim sets and verifies compact tokens with a shared secret.
pub trait TokenCodec {
    /// Sign `claims` under `header` with the raw `secret` bytes.
    fn encode(&self, header: &Header, claims: &ClaimSet, secret: &[u8]) -> CodecResult<String>;

    /// Verify `token` against `secret` and `validation`, returning header and claims.
    fn decode(
        &self,
        token: &str,
        secret: &[u8],
        validation: &Validation,
    ) -> CodecResult<TokenData<ClaimSet>>;
}

/// HMAC-SHA256 codec backed by `jsonwebtoken`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HmacCodec;

impl TokenCodec for HmacCodec {
    fn encode(&self, header: &Header, claims: &ClaimSet, secret: &[u8]) -> CodecResult<String> {
        jsonwebtoken::encode(header, claims, &EncodingKey::from_secret(secret))
    }

    fn decode(
        &self,
        token: &str,
        secret: &[u8],
        validation: &Validation,
    ) -> CodecResult<TokenData<ClaimSet>> {
        jsonwebtoken::decode::<ClaimSet>(token, &DecodingKey::from_secret(secret), validation)
    }
}

/// Header attached to every issued token: `{"alg":"HS256","typ":"JWT"}`.
pub fn token_header() -> Header {
    let mut header = Header::new(ALGORITHM);
    header.typ = Some(TOKEN_TYPE.to_string());
    header
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const SECRET: &[u8] = b"codec-test-secret-that-is-32-bytes!!";

    #[test]
    fn test_token_header_fields() {
        let header = token_header();
        assert_eq!(header.alg, Algorithm::HS256);
        assert_eq!(header.typ.as_deref(), Some("JWT"));
    }

    #[test]
    fn test_hmac_codec_encode_produces_three_segments() {
        let mut claims = ClaimSet::new();
        claims.insert("exp".to_string(), json!(i64::from(u32::MAX)));

        let token = HmacCodec.encode(&token_header(), &claims, SECRET).unwrap();
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_hmac_codec_decode_roundtrip() {
        let mut claims = ClaimSet::new();
        claims.insert("exp".to_string(), json!(i64::from(u32::MAX)));
        claims.insert("name".to_string(), json!("Test User"));

        let token = HmacCodec.encode(&token_header(), &claims, SECRET).unwrap();
        let mut validation = Validation::new(ALGORITHM);
        validation.validate_aud = false;

        let data = HmacCodec.decode(&token, SECRET, &validation).unwrap();
        assert_eq!(data.header.alg, Algorithm::HS256);
        assert_eq!(data.claims["name"], "Test User");
    }
}
