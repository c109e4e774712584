//! Reading tokens and secrets from arguments, environment, or stdin.

use std::io::{IsTerminal, Read};

use thiserror::Error;
use zeroize::Zeroizing;

use crate::cli::SecretArgs;

/// Maximum number of bytes read from stdin for a token.
const STDIN_MAX_BYTES: u64 = 64 * 1024;

/// Errors raised while collecting command input.
#[derive(Debug, Error)]
pub enum InputError {
    /// No token was provided via any input method.
    #[error("no token provided: pass a token as an argument, via --token-env, or through stdin")]
    NoTokenProvided,

    /// No secret was provided via any input method.
    #[error("no secret provided: pass --secret or --secret-env")]
    NoSecretProvided,

    /// The specified environment variable is not set.
    #[error("environment variable '{name}' is not set")]
    EnvVarNotFound {
        /// Name of the missing environment variable.
        name: String,
    },

    /// The environment variable name cannot exist.
    #[error("invalid environment variable name '{name}'")]
    InvalidEnvVarName {
        /// The rejected name.
        name: String,
    },

    /// The `--claims` argument is not a JSON object.
    #[error("claims must be a JSON object: {reason}")]
    InvalidClaims {
        /// Why the claims were rejected.
        reason: String,
    },

    /// Reading stdin failed.
    #[error("failed to read token from stdin")]
    Stdin(#[from] std::io::Error),
}

/// Reject names that `std::env::var` cannot look up.
fn validate_env_var_name(name: &str) -> Result<(), InputError> {
    if name.is_empty() || name.contains('=') || name.contains('\0') {
        return Err(InputError::InvalidEnvVarName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Read a non-empty environment variable.
fn read_env(name: &str) -> Result<Zeroizing<String>, InputError> {
    validate_env_var_name(name)?;
    std::env::var(name)
        .map(Zeroizing::new)
        .map_err(|_| InputError::EnvVarNotFound {
            name: name.to_string(),
        })
}

/// Resolve the HMAC secret from `--secret` or `--secret-env`.
pub fn read_secret(args: &SecretArgs) -> Result<Zeroizing<String>, InputError> {
    if let Some(secret) = &args.secret {
        return Ok(secret.clone());
    }
    match &args.secret_env {
        Some(name) => read_env(name),
        None => Err(InputError::NoSecretProvided),
    }
}

/// Resolve the token from the positional argument, `--token-env`, or stdin.
///
/// Surrounding whitespace is trimmed; an empty result counts as missing.
pub fn read_token(
    token: Option<&str>,
    token_env: Option<&str>,
) -> Result<Zeroizing<String>, InputError> {
    let raw = match (token, token_env) {
        (Some(token), _) => Zeroizing::new(token.to_string()),
        (None, Some(name)) => read_env(name)?,
        (None, None) => read_stdin()?,
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::NoTokenProvided);
    }
    Ok(Zeroizing::new(trimmed.to_string()))
}

fn read_stdin() -> Result<Zeroizing<String>, InputError> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(InputError::NoTokenProvided);
    }

    let mut buf = Zeroizing::new(String::new());
    stdin.lock().take(STDIN_MAX_BYTES).read_to_string(&mut buf)?;
    Ok(buf)
}
