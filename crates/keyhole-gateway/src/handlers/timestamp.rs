use crate::error::{ApiError, Result};
use crate::model::TimestampResponse;
use axum::extract::Path;
use axum::Json;
use jiff::civil::Date;
use jiff::fmt::strtime;
use jiff::tz::TimeZone;
use jiff::Timestamp;

const UTC_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

pub async fn current_timestamp_handler() -> Result<Json<TimestampResponse>> {
    render(Timestamp::now())
}

pub async fn timestamp_handler(Path(input): Path<String>) -> Result<Json<TimestampResponse>> {
    let ts = parse_timestamp(&input).ok_or(ApiError::InvalidDate)?;
    render(ts)
}

/// Accepts unix milliseconds, RFC 3339 timestamps, and civil dates
/// (`YYYY-MM-DD`, taken as midnight UTC).
fn parse_timestamp(input: &str) -> Option<Timestamp> {
    if let Ok(ms) = input.parse::<i64>() {
        return Timestamp::from_millisecond(ms).ok();
    }

    if let Ok(ts) = input.parse::<Timestamp>() {
        return Some(ts);
    }

    input
        .parse::<Date>()
        .ok()
        .and_then(|date| date.to_zoned(TimeZone::UTC).ok())
        .map(|zoned| zoned.timestamp())
}

fn render(ts: Timestamp) -> Result<Json<TimestampResponse>> {
    let utc = strtime::format(UTC_FORMAT, &ts.to_zoned(TimeZone::UTC))
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(TimestampResponse {
        unix: ts.as_millisecond(),
        utc,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_milliseconds() {
        let ts = parse_timestamp("1451001600000").unwrap();
        assert_eq!(ts.as_millisecond(), 1_451_001_600_000);
    }

    #[test]
    fn negative_milliseconds_reach_before_the_epoch() {
        let ts = parse_timestamp("-5000").unwrap();
        assert_eq!(ts.as_millisecond(), -5000);
    }

    #[test]
    fn civil_date_is_midnight_utc() {
        let ts = parse_timestamp("2015-12-25").unwrap();
        assert_eq!(ts.as_millisecond(), 1_451_001_600_000);
    }

    #[test]
    fn rfc3339_timestamp() {
        let ts = parse_timestamp("2015-12-25T00:00:00Z").unwrap();
        assert_eq!(ts.as_millisecond(), 1_451_001_600_000);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_timestamp("this-is-not-a-date").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn gmt_rendering() {
        let ts = parse_timestamp("1451001600000").unwrap();
        let utc = strtime::format(UTC_FORMAT, &ts.to_zoned(TimeZone::UTC)).unwrap();
        assert_eq!(utc, "Fri, 25 Dec 2015 00:00:00 GMT");
    }
}
