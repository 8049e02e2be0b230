// Uptime: elapsed seconds -> days / hours / minutes / seconds

use super::parse_key_values;
use crate::error::ParseError;
use crate::models::UptimeRecord;

const SECS_PER_DAY: u64 = 86_400;
const SECS_PER_HOUR: u64 = 3_600;
const SECS_PER_MINUTE: u64 = 60;

/// Decompose whole elapsed seconds. Negative input (a boot time in the
/// future, clock skew) is rejected.
pub fn parse_uptime(seconds: i64) -> Result<UptimeRecord, ParseError> {
    let total = u64::try_from(seconds)
        .map_err(|_| ParseError::InvalidInput(format!("negative uptime: {seconds}s")))?;

    let days = total / SECS_PER_DAY;
    let rem = total % SECS_PER_DAY;
    let hours = rem / SECS_PER_HOUR;
    let rem = rem % SECS_PER_HOUR;
    let minutes = rem / SECS_PER_MINUTE;
    let seconds = rem % SECS_PER_MINUTE;

    Ok(UptimeRecord {
        days,
        hours,
        minutes,
        seconds,
        total_seconds: total,
    })
}

/// First token of `/proc/uptime`, truncated to whole seconds.
pub fn elapsed_from_proc_uptime(text: &str) -> Result<i64, ParseError> {
    let token = text
        .split_whitespace()
        .next()
        .ok_or(ParseError::Tokenize { what: "uptime" })?;
    let secs: f64 = token.parse().map_err(|_| ParseError::InvalidNumber {
        field: "uptime".to_string(),
        value: token.to_string(),
    })?;
    if !secs.is_finite() {
        return Err(ParseError::InvalidNumber {
            field: "uptime".to_string(),
            value: token.to_string(),
        });
    }
    Ok(secs.trunc() as i64)
}

/// Integer value of one `kstat -p` statistic (`module:instance:name:stat<TAB>value`).
pub fn kstat_integer(text: &str, label: &str) -> Result<i64, ParseError> {
    let values = parse_key_values(text, &[label]);
    let value = values.require(label)?;
    value.parse().map_err(|_| ParseError::InvalidNumber {
        field: label.to_string(),
        value: value.to_string(),
    })
}
