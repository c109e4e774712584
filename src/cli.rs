//! CLI argument definitions for jwt-mint.
//!
//! Uses `clap` derive macros to define the command-line interface.
//! Each subcommand has its own argument struct for type-safe parsing.
//!
//! # Security
//!
//! `SignArgs` and `VerifyArgs` implement custom `Debug` to redact
//! sensitive fields (tokens and secrets) and prevent accidental leakage
//! through debug formatting, error chains, or logging.

use std::fmt;

use clap::{Args, Parser, Subcommand};
use zeroize::Zeroizing;

/// Issue and verify HS256 JSON Web Tokens with human-readable expirations.
#[derive(Debug, Parser)]
#[command(name = "jwt-mint")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log debug output to stderr (overrides RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sign a claim set and print the resulting token.
    Sign(SignArgs),

    /// Verify a token's signature, expiry, and optional issuer/audience.
    Verify(VerifyArgs),

    /// Convert a human time expression (e.g. "2 hours ago") to seconds.
    ParseTime(ParseTimeArgs),
}

/// Where to read the HMAC secret from.
#[derive(Args)]
pub struct SecretArgs {
    /// HMAC shared secret (at least 32 bytes).
    ///
    /// WARNING: Passing secrets via CLI arguments may expose them in shell
    /// history. Prefer using --secret-env instead.
    #[arg(long, value_name = "SECRET", value_parser = parse_zeroizing_string)]
    pub secret: Option<Zeroizing<String>>,

    /// Read the HMAC secret from the specified environment variable.
    #[arg(long, value_name = "VAR_NAME", conflicts_with = "secret")]
    pub secret_env: Option<String>,
}

/// Custom `Debug` that redacts the secret.
impl fmt::Debug for SecretArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretArgs")
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .field("secret_env", &self.secret_env)
            .finish()
    }
}

/// Arguments for the `sign` subcommand.
#[derive(Args)]
pub struct SignArgs {
    #[command(flatten)]
    pub secret: SecretArgs,

    /// Claims to embed, as a JSON object. Overrides default claims.
    #[arg(long, value_name = "JSON", default_value = "{}")]
    pub claims: String,

    /// Expiration: seconds from now ("3600"), an RFC 3339 timestamp,
    /// or a human expression ("2 hours"). Defaults to 15 minutes.
    #[arg(long, value_name = "EXPR", allow_hyphen_values = true)]
    pub expires: Option<String>,
}

/// Custom `Debug` that redacts the claim payload.
impl fmt::Debug for SignArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignArgs")
            .field("secret", &self.secret)
            .field("claims", &"[REDACTED]")
            .field("expires", &self.expires)
            .finish()
    }
}

/// Arguments for the `verify` subcommand.
#[derive(Args)]
pub struct VerifyArgs {
    /// The token to verify. If omitted, reads from stdin.
    pub token: Option<String>,

    /// Read the token from the specified environment variable.
    #[arg(long, value_name = "VAR_NAME")]
    pub token_env: Option<String>,

    #[command(flatten)]
    pub secret: SecretArgs,

    /// Require the `iss` claim to equal this value.
    #[arg(long, value_name = "ISSUER")]
    pub issuer: Option<String>,

    /// Require the `aud` claim to contain one of these values (repeatable).
    #[arg(long, value_name = "AUDIENCE")]
    pub audience: Vec<String>,

    /// Output raw JSON (machine-readable).
    #[arg(long)]
    pub json: bool,
}

/// Custom `Debug` that redacts token and secret fields.
impl fmt::Debug for VerifyArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerifyArgs")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("token_env", &self.token_env)
            .field("secret", &self.secret)
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("json", &self.json)
            .finish()
    }
}

/// Arguments for the `parse-time` subcommand.
#[derive(Debug, Args)]
pub struct ParseTimeArgs {
    /// The expression to convert, e.g. "30 mins ago" or "+1 day".
    #[arg(allow_hyphen_values = true)]
    pub expression: String,
}

/// Parse a string into a `Zeroizing<String>` for secure CLI arguments.
fn parse_zeroizing_string(s: &str) -> Result<Zeroizing<String>, std::convert::Infallible> {
    Ok(Zeroizing::new(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_args_debug_redacts_token_and_secret() {
        let cli = Cli::parse_from([
            "jwt-mint",
            "verify",
            "header.payload.sig",
            "--secret",
            "super-secret-value",
        ]);
        let debug_output = format!("{cli:?}");
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("header.payload.sig"));
        assert!(!debug_output.contains("super-secret-value"));
    }

    #[test]
    fn test_sign_args_debug_redacts_claims() {
        let cli = Cli::parse_from([
            "jwt-mint",
            "sign",
            "--secret-env",
            "JWT_SECRET",
            "--claims",
            r#"{"email":"someone@example.com"}"#,
        ]);
        let debug_output = format!("{cli:?}");
        assert!(!debug_output.contains("someone@example.com"));
        assert!(debug_output.contains("JWT_SECRET"));
    }

    #[test]
    fn test_parse_time_accepts_leading_minus() {
        let cli = Cli::parse_from(["jwt-mint", "parse-time", "-1 hour"]);
        match cli.command {
            Commands::ParseTime(args) => assert_eq!(args.expression, "-1 hour"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_verify_collects_repeated_audiences() {
        let cli = Cli::parse_from([
            "jwt-mint",
            "verify",
            "t",
            "--audience",
            "api",
            "--audience",
            "web",
        ]);
        match cli.command {
            Commands::Verify(args) => assert_eq!(args.audience, ["api", "web"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
