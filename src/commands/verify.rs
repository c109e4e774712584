//! Handler for the `verify` subcommand.
//!
//! Verifies a token with a shared secret and optional issuer/audience
//! constraints, then prints its header, payload, and temporal status.

use anyhow::Result;
use jwt_mint::{Audience, TokenVerifier, VerifyOptions};

use crate::cli::VerifyArgs;
use crate::commands::input::{read_secret, read_token};
use crate::display::json_printer::{print_json, print_verified_json};
use crate::display::token_status::display_token_status;

/// Execute the `verify` subcommand with the given arguments.
pub fn execute(args: &VerifyArgs) -> Result<()> {
    let token = read_token(args.token.as_deref(), args.token_env.as_deref())?;
    let secret = read_secret(&args.secret)?;
    let options = verify_options(args);

    let verified = TokenVerifier::new().verify(&token, secret.as_bytes(), &options)?;

    if args.json {
        print_verified_json(&verified)?;
        return Ok(());
    }

    println!("--- Header ---");
    print_json(&serde_json::to_value(&verified.header)?)?;
    println!("--- Payload ---");
    print_json(&serde_json::Value::Object(verified.payload.clone()))?;
    println!("--- Token Status ---");
    display_token_status(&verified.payload, chrono::Utc::now().timestamp());
    Ok(())
}

/// Build verification constraints from `--issuer` / `--audience`.
fn verify_options(args: &VerifyArgs) -> VerifyOptions {
    let mut options = VerifyOptions::default();
    if let Some(issuer) = &args.issuer {
        options = options.with_issuer(issuer.as_str());
    }
    match args.audience.as_slice() {
        [] => {}
        [one] => options = options.with_audience(one.as_str()),
        many => options = options.with_audience(Audience::AnyOf(many.to_vec())),
    }
    options
}
