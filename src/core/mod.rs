//! Token minting and checking.
//!
//! [`claims`] builds the claim set and resolves expirations,
//! [`time_expression`] parses phrases like `2 hours ago`, [`signer`] and
//! [`verifier`] run HS256 tokens through the [`codec`] seam.

pub mod claims;
pub mod codec;
pub mod signer;
pub mod time_expression;
pub mod verifier;

use jsonwebtoken::errors::ErrorKind;

/// Turn a codec error kind into a short, user-safe reason.
///
/// Never forwards raw library messages, which may quote token or key
/// material.
pub(crate) fn sanitize_jwt_error(kind: &ErrorKind) -> String {
    match kind {
        ErrorKind::InvalidToken => "expected 'header.payload.signature' structure",
        ErrorKind::Base64(_) => "invalid base64url encoding",
        ErrorKind::Json(_) => "header or payload is not valid JSON",
        ErrorKind::Utf8(_) => "header or payload is not valid UTF-8",
        ErrorKind::InvalidAlgorithm => "token algorithm is not allowed",
        ErrorKind::MissingAlgorithm => "token does not declare an algorithm",
        ErrorKind::InvalidAlgorithmName => "unknown algorithm name",
        ErrorKind::InvalidKeyFormat => "key is not usable for this algorithm",
        _ => "token could not be verified",
    }
    .to_string()
}
