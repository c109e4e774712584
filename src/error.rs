//! Domain error types for jwt-mint.
//!
//! Every failure the signer, verifier, or time-expression parser can
//! produce is a variant of [`JwtError`]. Each variant maps to a stable,
//! namespaced key (see [`JwtError::key`]) that callers can use for
//! localization or to pick a transport-level status code.

use thiserror::Error;

/// Coarse classification of a [`JwtError`].
///
/// Mapping a category onto HTTP status codes (or anything else) is left
/// to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The caller supplied unusable input (secret, expiration, expression).
    InvalidInput,
    /// The token codec failed unexpectedly.
    Internal,
    /// The presented token must not be trusted.
    Unauthorized,
}

/// Errors that can occur while parsing expirations, signing, or verifying.
#[derive(Debug, Error)]
pub enum JwtError {
    /// The HMAC secret is shorter than the minimum accepted length.
    #[error("secret is too weak: expected at least {min_len} bytes, got {actual_len}")]
    SecretTooWeak {
        /// Minimum accepted secret length in bytes.
        min_len: usize,
        /// Length of the rejected secret in bytes.
        actual_len: usize,
    },

    /// A human time expression could not be parsed.
    #[error("invalid time expression '{expression}': {reason}")]
    InvalidTimeExpression {
        /// The time expression that failed to parse.
        expression: String,
        /// Description of the parsing failure.
        reason: String,
    },

    /// The resolved expiration is not strictly after the signing instant.
    #[error("expiration {exp} is not after the current time {now}")]
    ExpirationInPast {
        /// Resolved expiration (Unix seconds).
        exp: i64,
        /// Signing instant (Unix seconds).
        now: i64,
    },

    /// The token codec failed while signing.
    #[error("failed to sign token")]
    SignFailure {
        /// Underlying codec failure.
        #[source]
        source: jsonwebtoken::errors::Error,
    },

    /// The token's `exp` claim has passed.
    #[error("token has expired")]
    Expired,

    /// A registered claim constraint (issuer, audience, not-before, ...) failed.
    #[error("claim validation failed: {reason}")]
    ClaimValidationFailed {
        /// Which constraint failed.
        reason: String,
    },

    /// The signature does not match the token contents and secret.
    #[error("signature verification failed")]
    InvalidSignature,

    /// The token is not a well-formed `header.payload.signature` string.
    #[error("malformed token: {reason}")]
    Malformed {
        /// Description of the structural problem.
        reason: String,
    },

    /// Verification failed for a reason not covered by a more specific variant.
    #[error("token verification failed: {reason}")]
    VerificationFailed {
        /// Sanitized description of the failure.
        reason: String,
    },
}

impl JwtError {
    /// Stable machine-readable key identifying the failure cause.
    pub fn key(&self) -> &'static str {
        match self {
            Self::SecretTooWeak { .. } => "jwt.error.secret_too_weak",
            Self::InvalidTimeExpression { .. } => "time_expression.error.invalid_time_expression",
            Self::ExpirationInPast { .. } => "jwt.error.expiration_passed",
            Self::SignFailure { .. } => "jwt.error.sign_error",
            Self::Expired => "jwt.error.expired",
            Self::ClaimValidationFailed { .. } => "jwt.error.claim_validation_failed",
            Self::InvalidSignature => "jwt.error.invalid_signature",
            Self::Malformed { .. } => "jwt.error.malformed",
            Self::VerificationFailed { .. } => "jwt.error.verification_failed",
        }
    }

    /// Classify the error for status-code mapping at the caller's boundary.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SecretTooWeak { .. }
            | Self::InvalidTimeExpression { .. }
            | Self::ExpirationInPast { .. } => ErrorCategory::InvalidInput,
            Self::SignFailure { .. } => ErrorCategory::Internal,
            Self::Expired
            | Self::ClaimValidationFailed { .. }
            | Self::InvalidSignature
            | Self::Malformed { .. }
            | Self::VerificationFailed { .. } => ErrorCategory::Unauthorized,
        }
    }

    /// Build an [`JwtError::InvalidTimeExpression`] for `expression`.
    pub(crate) fn invalid_time_expression(expression: &str, reason: impl Into<String>) -> Self {
        Self::InvalidTimeExpression {
            expression: expression.to_string(),
            reason: reason.into(),
        }
    }
}
