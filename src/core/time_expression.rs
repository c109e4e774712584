//! Human-readable relative time expressions.
//!
//! Parses strings such as `"2 hours"`, `"+30 minutes"`, `"1 day ago"` or
//! `"5 seconds from now"` into a signed number of seconds. Exactly one
//! `<magnitude> <unit>` term is accepted; compound expressions like
//! `"1 hour 30 minutes"` are rejected rather than summed.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::JwtError;

/// Seconds in a year, averaged over leap years (365.25 days).
pub const SECONDS_PER_YEAR: i64 = 31_557_600;

/// Grammar: optional sign, optional space, magnitude, optional space,
/// unit word, optional ` ago` / ` from now`.
fn expression_regex() -> &'static Regex {
    static EXPRESSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"(?i)^([+-])? ?([0-9]+(?:\.[0-9]+)?) ?([a-z]+)(?: (ago|from now))?$").unwrap()
    });
    &EXPRESSION_REGEX
}

/// Explicit leading sign of an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Plus,
    Minus,
}

/// Trailing direction keyword of an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `ago`: the offset points into the past.
    Ago,
    /// `from now`: the offset points into the future.
    FromNow,
}

/// A unit of time accepted in an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Year,
}

impl TimeUnit {
    /// Length of one unit in seconds.
    pub const fn seconds(self) -> i64 {
        match self {
            Self::Second => 1,
            Self::Minute => 60,
            Self::Hour => 60 * 60,
            Self::Day => 60 * 60 * 24,
            Self::Week => 60 * 60 * 24 * 7,
            Self::Year => SECONDS_PER_YEAR,
        }
    }

    /// Look up a unit by name, abbreviation, or single letter (case-insensitive).
    pub fn from_token(token: &str) -> Option<Self> {
        let unit = match token.to_ascii_lowercase().as_str() {
            "s" | "sec" | "secs" | "second" | "seconds" => Self::Second,
            "m" | "min" | "mins" | "minute" | "minutes" => Self::Minute,
            "h" | "hr" | "hrs" | "hour" | "hours" => Self::Hour,
            "d" | "day" | "days" => Self::Day,
            "w" | "week" | "weeks" => Self::Week,
            "y" | "yr" | "yrs" | "year" | "years" => Self::Year,
            _ => return None,
        };
        Some(unit)
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Year => "year",
        };
        f.write_str(name)
    }
}

/// A parsed single-term time expression.
///
/// A leading sign and a direction keyword never appear together; the
/// parser rejects that combination.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeExpression {
    /// Leading `+` or `-`, if any.
    pub sign: Option<Sign>,
    /// Non-negative decimal magnitude.
    pub magnitude: f64,
    /// Unit the magnitude is expressed in.
    pub unit: TimeUnit,
    /// Trailing `ago` / `from now`, if any.
    pub direction: Option<Direction>,
    expression: String,
}

impl TimeExpression {
    /// Whether the expression points into the past.
    pub fn is_past(&self) -> bool {
        self.sign == Some(Sign::Minus) || self.direction == Some(Direction::Ago)
    }

    /// Resolve to a signed number of seconds.
    ///
    /// The magnitude is multiplied by the unit length and rounded to the
    /// nearest second (halves round up), then negated for past offsets.
    ///
    /// # Errors
    ///
    /// Returns [`JwtError::InvalidTimeExpression`] if the result does not
    /// fit in an `i64`.
    pub fn to_seconds(&self) -> Result<i64, JwtError> {
        let seconds = (self.magnitude * self.unit.seconds() as f64).round();
        if !seconds.is_finite() || seconds >= i64::MAX as f64 {
            return Err(JwtError::invalid_time_expression(
                &self.expression,
                "value is out of range",
            ));
        }

        let seconds = seconds as i64;
        Ok(if self.is_past() { -seconds } else { seconds })
    }
}

impl FromStr for TimeExpression {
    type Err = JwtError;

    fn from_str(expression: &str) -> Result<Self, Self::Err> {
        let caps = expression_regex().captures(expression).ok_or_else(|| {
            JwtError::invalid_time_expression(
                expression,
                "expected '[+|-]<number> <unit> [ago|from now]'",
            )
        })?;

        let sign = caps.get(1).map(|m| match m.as_str() {
            "-" => Sign::Minus,
            _ => Sign::Plus,
        });
        let direction = caps.get(4).map(|m| {
            if m.as_str().eq_ignore_ascii_case("ago") {
                Direction::Ago
            } else {
                Direction::FromNow
            }
        });

        if sign.is_some() && direction.is_some() {
            return Err(JwtError::invalid_time_expression(
                expression,
                "a leading sign cannot be combined with 'ago' or 'from now'",
            ));
        }

        let unit_token = &caps[3];
        let unit = TimeUnit::from_token(unit_token).ok_or_else(|| {
            JwtError::invalid_time_expression(expression, format!("unknown unit '{unit_token}'"))
        })?;

        let magnitude = caps[2]
            .parse::<f64>()
            .map_err(|e| JwtError::invalid_time_expression(expression, e.to_string()))?;

        Ok(Self {
            sign,
            magnitude,
            unit,
            direction,
            expression: expression.to_string(),
        })
    }
}

/// Convert a human-readable time expression into signed seconds.
///
/// ```
/// use jwt_mint::parse_human_time;
///
/// assert_eq!(parse_human_time("2 hours").unwrap(), 7200);
/// assert_eq!(parse_human_time("30 mins ago").unwrap(), -1800);
/// assert_eq!(parse_human_time("+1 day").unwrap(), 86400);
/// ```
///
/// # Errors
///
/// Returns [`JwtError::InvalidTimeExpression`] if the expression does not
/// match the grammar, names an unknown unit, or combines a leading sign
/// with `ago` / `from now`.
pub fn parse_human_time(expression: &str) -> Result<i64, JwtError> {
    expression.parse::<TimeExpression>()?.to_seconds()
}
