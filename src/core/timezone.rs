use chrono::{DateTime, FixedOffset, Local, SecondsFormat};

use super::{AppError, Result};

/// Current time on the local clock, keeping its UTC offset.
///
/// The gateway uses the order timestamp for replay protection, so it carries
/// the merchant's offset rather than being normalized to UTC.
pub fn now() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}

/// Format a timestamp as ISO 8601 with a numeric offset, e.g.
/// `2016-12-21T14:13:56+01:00`
pub fn format_iso8601(time: &DateTime<FixedOffset>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// Parse an ISO 8601 timestamp received from the gateway.
///
/// Accepts RFC 3339 as well as offsets without a colon (`+0000`), which the
/// access token endpoint uses.
pub fn parse_iso8601(value: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f%z"))
        .map_err(|e| AppError::invalid_response(format!("Invalid timestamp '{}': {}", value, e)))
}
