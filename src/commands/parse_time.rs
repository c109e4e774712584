//! Handler for the `parse-time` subcommand.
//!
//! Prints the signed number of seconds a human time expression
//! resolves to.

use anyhow::Result;
use jwt_mint::parse_human_time;

use crate::cli::ParseTimeArgs;

/// Execute the `parse-time` subcommand with the given arguments.
pub fn execute(args: &ParseTimeArgs) -> Result<()> {
    let seconds = parse_human_time(&args.expression)?;
    println!("{seconds}");
    Ok(())
}
