//! Token status display for temporal claims.
//!
//! Renders human-readable status lines for `iat`, `nbf`, and `exp` of a
//! token that has already passed verification.

use chrono::DateTime;
use jwt_mint::ClaimSet;

/// Format a Unix timestamp as RFC 3339, or the raw number if out of range.
fn format_timestamp(ts: i64) -> String {
    DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|| ts.to_string())
}

/// Format a duration in seconds as a compact `1d 2h 3m 4s` string.
pub fn format_duration(total: i64) -> String {
    let total = total.unsigned_abs();
    let (days, rem) = (total / 86_400, total % 86_400);
    let (hours, rem) = (rem / 3_600, rem % 3_600);
    let (minutes, seconds) = (rem / 60, rem % 60);

    let parts: Vec<String> = [(days, "d"), (hours, "h"), (minutes, "m")]
        .into_iter()
        .filter(|(n, _)| *n > 0)
        .map(|(n, unit)| format!("{n}{unit}"))
        .chain((seconds > 0 || total == 0).then(|| format!("{seconds}s")))
        .collect();
    parts.join(" ")
}

/// Build the status lines for `payload` evaluated at `now`.
pub fn status_lines(payload: &ClaimSet, now: i64) -> Vec<String> {
    let claim = |name: &str| payload.get(name).and_then(|v| v.as_i64());
    let mut lines = Vec::new();

    if let Some(iat) = claim("iat") {
        lines.push(format!("Issued at:  {}", format_timestamp(iat)));
    }
    if let Some(nbf) = claim("nbf") {
        lines.push(format!("Not before: {}", format_timestamp(nbf)));
    }
    if let Some(exp) = claim("exp") {
        lines.push(format!(
            "Expires:    {} (VALID, expires in {})",
            format_timestamp(exp),
            format_duration(exp.saturating_sub(now))
        ));
    }
    lines
}

/// Print the temporal status of a token's claims.
pub fn display_token_status(payload: &ClaimSet, now: i64) {
    for line in status_lines(payload, now) {
        println!("{line}");
    }
}
