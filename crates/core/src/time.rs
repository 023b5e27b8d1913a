use std::time::Duration;

use chrono::{DateTime, Local, Utc};

use crate::error::{Result, TracesumError};

/// `MM-DD-YYYYTHH:mm:ss.SSSZZ`, e.g. `02-26-2016T00:51:51.000+0000`.
const START_TS_FORMAT: &str = "%m-%d-%YT%H:%M:%S%.3f%z";
const INVALID_DATE: &str = "Invalid date";

/// Formats an epoch-microsecond timestamp for display, in UTC or the
/// local timezone.
pub fn format_start_ts(timestamp_us: i64, utc: bool) -> String {
    let Some(ts) = DateTime::<Utc>::from_timestamp_micros(timestamp_us) else {
        return INVALID_DATE.to_string();
    };
    if utc {
        ts.format(START_TS_FORMAT).to_string()
    } else {
        ts.with_timezone(&Local).format(START_TS_FORMAT).to_string()
    }
}

pub fn micros_to_millis(us: i64) -> f64 {
    us as f64 / 1000.0
}

pub fn parse_duration_str(input: &str) -> Result<Duration> {
    humantime::parse_duration(input)
        .map_err(|e| TracesumError::Parse(format!("invalid duration {input}: {e}")))
}
