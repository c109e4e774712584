//! jwt-mint: issue and verify HS256 JSON Web Tokens.
//!
//! - [`sign`] / [`TokenSigner`] assemble default and caller claims,
//!   resolve an expiration given as seconds, an absolute instant, or a
//!   human expression, and sign with a shared secret of at least 32 bytes.
//! - [`verify`] / [`TokenVerifier`] check structure, signature, expiry,
//!   not-before and optional issuer/audience, reporting one typed
//!   [`JwtError`] per failure.
//! - [`parse_human_time`] turns `"2 hours ago"` into `-7200`.
//!
//! ```
//! use jwt_mint::{ClaimSet, VerifyOptions, sign, verify};
//!
//! let secret = "an-example-secret-that-is-at-least-32-bytes";
//! let mut claims = ClaimSet::new();
//! claims.insert("sub".into(), "user-123".into());
//!
//! let token = sign(secret, &claims, "2 hours").unwrap();
//! let verified = verify(&token, secret, &VerifyOptions::default()).unwrap();
//! assert_eq!(verified.payload["sub"], "user-123");
//! assert_eq!(verified.payload["iss"], "Core-Issuer");
//! ```

#![forbid(unsafe_code)]

pub mod core;
pub mod error;

pub use crate::core::claims::{
    ClaimSet, DEFAULT_AUDIENCE, DEFAULT_ISSUER, DEFAULT_TTL_SECS, ExpirationSpec,
};
pub use crate::core::codec::{HmacCodec, TokenCodec};
pub use crate::core::signer::{MIN_SECRET_LEN, TokenSigner, sign};
pub use crate::core::time_expression::{TimeExpression, TimeUnit, parse_human_time};
pub use crate::core::verifier::{Audience, TokenVerifier, VerifiedToken, VerifyOptions, verify};
pub use crate::error::{ErrorCategory, JwtError};
