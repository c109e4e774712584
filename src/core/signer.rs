//! Token issuance.
//!
//! [`TokenSigner`] validates the secret, resolves the expiration,
//! assembles default and caller claims, and hands the result to the
//! token codec for HMAC-SHA256 signing.

use chrono::Utc;

use crate::core::claims::{ClaimSet, ExpirationSpec, assemble_claims};
use crate::core::codec::{HmacCodec, TokenCodec, token_header};
use crate::error::JwtError;

/// Minimum accepted HMAC secret length in bytes.
pub const MIN_SECRET_LEN: usize = 32;

/// Reject secrets shorter than [`MIN_SECRET_LEN`] bytes.
pub fn ensure_secret_strength(secret: &[u8]) -> Result<(), JwtError> {
    if secret.len() < MIN_SECRET_LEN {
        return Err(JwtError::SecretTooWeak {
            min_len: MIN_SECRET_LEN,
            actual_len: secret.len(),
        });
    }
    Ok(())
}

/// Issues signed tokens through a [`TokenCodec`].
#[derive(Debug, Clone, Default)]
pub struct TokenSigner<C = HmacCodec> {
    codec: C,
}

impl TokenSigner<HmacCodec> {
    /// Signer backed by the default HMAC codec.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: TokenCodec> TokenSigner<C> {
    /// Signer backed by a custom codec.
    pub fn with_codec(codec: C) -> Self {
        Self { codec }
    }

    /// Sign `claims` with `secret`, expiring per `expiration`.
    ///
    /// # Errors
    ///
    /// See [`TokenSigner::sign_at`].
    pub fn sign(
        &self,
        secret: impl AsRef<[u8]>,
        claims: &ClaimSet,
        expiration: impl Into<ExpirationSpec>,
    ) -> Result<String, JwtError> {
        self.sign_at(secret, claims, expiration, Utc::now().timestamp())
    }

    /// Sign `claims` as if the current time were `now` (Unix seconds).
    ///
    /// `nbf` and `iat` default to `now`, and relative expirations are
    /// offsets from it.
    ///
    /// # Errors
    ///
    /// - [`JwtError::SecretTooWeak`] if `secret` is shorter than 32 bytes.
    /// - [`JwtError::InvalidTimeExpression`] if a string expiration does not parse.
    /// - [`JwtError::ExpirationInPast`] if the expiration is not after `now`.
    /// - [`JwtError::SignFailure`] if the codec fails.
    pub fn sign_at(
        &self,
        secret: impl AsRef<[u8]>,
        claims: &ClaimSet,
        expiration: impl Into<ExpirationSpec>,
        now: i64,
    ) -> Result<String, JwtError> {
        let secret = secret.as_ref();
        ensure_secret_strength(secret)?;

        let exp = expiration.into().resolve(now)?;
        let payload = assemble_claims(now, exp, claims);

        let token = self
            .codec
            .encode(&token_header(), &payload, secret)
            .map_err(|source| {
                tracing::debug!(error = %source, "token codec failed while signing");
                JwtError::SignFailure { source }
            })?;

        tracing::debug!(
            jti = payload.get("jti").and_then(|v| v.as_str()).unwrap_or_default(),
            exp,
            "signed token"
        );
        Ok(token)
    }
}

/// Sign `claims` with the default HMAC codec.
///
/// # Errors
///
/// See [`TokenSigner::sign_at`].
pub fn sign(
    secret: impl AsRef<[u8]>,
    claims: &ClaimSet,
    expiration: impl Into<ExpirationSpec>,
) -> Result<String, JwtError> {
    TokenSigner::new().sign(secret, claims, expiration)
}
