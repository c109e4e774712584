//! Token verification.
//!
//! [`TokenVerifier`] asks the token codec to check structure, signature,
//! and temporal claims (HS256 only, no leeway), optionally pins issuer
//! and audience, and maps every codec failure onto exactly one
//! [`JwtError`] variant.

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Header, Validation};

use crate::core::claims::ClaimSet;
use crate::core::codec::{ALGORITHM, HmacCodec, TokenCodec};
use crate::core::sanitize_jwt_error;
use crate::error::JwtError;

/// Acceptable audience value(s).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Audience {
    /// The token's `aud` must equal or contain this value.
    One(String),
    /// The token's `aud` must equal or contain at least one of these values.
    AnyOf(Vec<String>),
}

impl Audience {
    fn values(&self) -> &[String] {
        match self {
            Self::One(value) => std::slice::from_ref(value),
            Self::AnyOf(values) => values,
        }
    }
}

impl From<&str> for Audience {
    fn from(value: &str) -> Self {
        Self::One(value.to_string())
    }
}

impl From<String> for Audience {
    fn from(value: String) -> Self {
        Self::One(value)
    }
}

impl From<Vec<String>> for Audience {
    fn from(values: Vec<String>) -> Self {
        Self::AnyOf(values)
    }
}

/// Extra claim constraints applied on top of signature and expiry checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyOptions {
    /// Required exact `iss` value.
    pub issuer: Option<String>,
    /// Required `aud` membership.
    pub audience: Option<Audience>,
}

impl VerifyOptions {
    /// Require `iss` to equal `issuer`.
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    /// Require `aud` to equal or contain `audience`.
    pub fn with_audience(mut self, audience: impl Into<Audience>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    /// Codec validation policy for these options.
    fn validation(&self) -> Validation {
        let mut validation = Validation::new(ALGORITHM);
        validation.leeway = 0;
        // exp == now is already expired
        validation.reject_tokens_expiring_in_less_than = 1;
        validation.validate_exp = true;
        validation.validate_nbf = true;

        if let Some(issuer) = &self.issuer {
            validation.set_issuer(&[issuer]);
        }
        match &self.audience {
            Some(audience) => validation.set_audience(audience.values()),
            None => validation.validate_aud = false,
        }
        validation
    }
}

/// A successfully verified token.
#[derive(Debug, Clone)]
pub struct VerifiedToken {
    /// Decoded JOSE header.
    pub header: Header,
    /// Decoded claim set.
    pub payload: ClaimSet,
}

/// Verifies tokens through a [`TokenCodec`].
#[derive(Debug, Clone, Default)]
pub struct TokenVerifier<C = HmacCodec> {
    codec: C,
}

impl TokenVerifier<HmacCodec> {
    /// Verifier backed by the default HMAC codec.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: TokenCodec> TokenVerifier<C> {
    /// Verifier backed by a custom codec.
    pub fn with_codec(codec: C) -> Self {
        Self { codec }
    }

    /// Verify `token` against `secret` and `options`.
    ///
    /// # Errors
    ///
    /// Returns one of [`JwtError::Expired`],
    /// [`JwtError::ClaimValidationFailed`], [`JwtError::InvalidSignature`],
    /// [`JwtError::Malformed`], or [`JwtError::VerificationFailed`].
    pub fn verify(
        &self,
        token: &str,
        secret: impl AsRef<[u8]>,
        options: &VerifyOptions,
    ) -> Result<VerifiedToken, JwtError> {
        let data = self
            .codec
            .decode(token, secret.as_ref(), &options.validation())
            .map_err(|e| {
                let err = map_codec_error(e.kind());
                tracing::debug!(key = err.key(), "token verification failed");
                err
            })?;

        tracing::debug!(
            jti = data.claims.get("jti").and_then(|v| v.as_str()).unwrap_or_default(),
            "verified token"
        );
        Ok(VerifiedToken {
            header: data.header,
            payload: data.claims,
        })
    }
}

/// Map a codec error onto the verification taxonomy.
fn map_codec_error(kind: &ErrorKind) -> JwtError {
    match kind {
        ErrorKind::ExpiredSignature => JwtError::Expired,
        ErrorKind::InvalidIssuer => JwtError::ClaimValidationFailed {
            reason: "unexpected issuer".to_string(),
        },
        ErrorKind::InvalidAudience => JwtError::ClaimValidationFailed {
            reason: "unexpected audience".to_string(),
        },
        ErrorKind::InvalidSubject => JwtError::ClaimValidationFailed {
            reason: "unexpected subject".to_string(),
        },
        ErrorKind::ImmatureSignature => JwtError::ClaimValidationFailed {
            reason: "token is not valid yet".to_string(),
        },
        ErrorKind::MissingRequiredClaim(claim) => JwtError::ClaimValidationFailed {
            reason: format!("missing required claim '{claim}'"),
        },
        ErrorKind::InvalidSignature => JwtError::InvalidSignature,
        ErrorKind::InvalidToken
        | ErrorKind::Base64(_)
        | ErrorKind::Json(_)
        | ErrorKind::Utf8(_) => JwtError::Malformed {
            reason: sanitize_jwt_error(kind),
        },
        _ => JwtError::VerificationFailed {
            reason: sanitize_jwt_error(kind),
        },
    }
}

/// Verify `token` with the default HMAC codec.
///
/// # Errors
///
/// See [`TokenVerifier::verify`].
pub fn verify(
    token: &str,
    secret: impl AsRef<[u8]>,
    options: &VerifyOptions,
) -> Result<VerifiedToken, JwtError> {
    TokenVerifier::new().verify(token, secret, options)
}
