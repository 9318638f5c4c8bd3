//! Codec for UTC timestamps.

use chrono::{DateTime, NaiveDate, SecondsFormat, TimeZone, Utc};
use stringable_types::{StringMarshaler, StringUnmarshaler, StringableError};

const NANOS_PER_SEC: u32 = 1_000_000_000;

/// Converts a `DateTime<Utc>`.
///
/// Renders RFC 3339 in UTC (`Z` suffix) with 0, 3, 6 or 9 fractional digits,
/// whichever is the shortest exact form. Accepts, in order:
///
/// - RFC 3339 with any offset, normalised to UTC;
/// - a calendar date `YYYY-MM-DD`, taken as midnight UTC;
/// - Unix seconds, optionally with up to nine fractional digits
///   (`678088800.123456789`).
pub struct Timestamp<'a>(&'a mut DateTime<Utc>);

impl<'a> Timestamp<'a> {
    /// Wrap `value`.
    pub fn new(value: &'a mut DateTime<Utc>) -> Self {
        Self(value)
    }
}

/// Parse any of the accepted timestamp forms.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, StringableError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    let midnight = is_calendar_date(s)
        .then(|| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
        .flatten()
        .and_then(|date| date.and_hms_opt(0, 0, 0));
    if let Some(midnight) = midnight {
        return Ok(Utc.from_utc_datetime(&midnight));
    }
    parse_unix(s).ok_or_else(|| {
        StringableError::invalid_value(
            "DateTime<Utc>",
            s,
            "expected RFC 3339, YYYY-MM-DD or Unix seconds",
        )
    })
}

/// `YYYY-MM-DD` with a four-digit year; `%Y` alone accepts any width.
fn is_calendar_date(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes[..4].iter().all(u8::is_ascii_digit)
}

fn parse_unix(s: &str) -> Option<DateTime<Utc>> {
    let (whole, fraction) = match s.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (s, None),
    };
    let secs: i64 = whole.parse().ok()?;
    let nanos: u32 = match fraction {
        None => 0,
        Some(fraction)
            if (1..=9).contains(&fraction.len())
                && fraction.bytes().all(|b| b.is_ascii_digit()) =>
        {
            format!("{fraction:0<9}").parse().ok()?
        }
        Some(_) => return None,
    };
    // The fraction extends away from zero, so negative instants borrow a second.
    if whole.starts_with('-') && nanos > 0 {
        DateTime::<Utc>::from_timestamp(secs.checked_sub(1)?, NANOS_PER_SEC - nanos)
    } else {
        DateTime::<Utc>::from_timestamp(secs, nanos)
    }
}

impl StringMarshaler for Timestamp<'_> {
    fn marshal_string(&self) -> Result<String, StringableError> {
        Ok(self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl StringUnmarshaler for Timestamp<'_> {
    fn unmarshal_string(&mut self, s: &str) -> Result<(), StringableError> {
        *self.0 = parse_timestamp(s)?;
        Ok(())
    }
}
