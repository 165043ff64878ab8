//! GTFS service times are written H:M:S where the hour may exceed 23 for
//! service running past midnight, so they are parsed by hand into minutes
//! since the start of the service day instead of into a [`chrono::NaiveTime`].
use crate::schedule::schedule_error::ScheduleError;

/// converts a GTFS time string into minutes since midnight of the service day,
/// keeping seconds as a fraction of a minute.
///
/// an empty (or whitespace-only) string has no value and returns `None`. it is
/// never treated as midnight.
pub fn parse_minutes(time_str: &str) -> Result<Option<f64>, ScheduleError> {
    let trimmed = time_str.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let fields: Vec<&str> = trimmed.split(':').collect();
    let [hours, minutes, seconds] = fields.as_slice() else {
        return Err(ScheduleError::InvalidTime(time_str.to_string()));
    };
    let hours = parse_field(hours, time_str)?;
    let minutes = parse_field(minutes, time_str)?;
    let seconds = parse_field(seconds, time_str)?;
    Ok(Some(
        hours as f64 * 60.0 + minutes as f64 + seconds as f64 / 60.0,
    ))
}

/// helper for an optional raw time field as read from `stop_times.txt`.
pub fn parse_optional_minutes(time_str: Option<&str>) -> Result<Option<f64>, ScheduleError> {
    match time_str {
        None => Ok(None),
        Some(s) => parse_minutes(s),
    }
}

fn parse_field(field: &str, time_str: &str) -> Result<u32, ScheduleError> {
    field
        .trim()
        .parse::<u32>()
        .map_err(|_| ScheduleError::InvalidTime(time_str.to_string()))
}

#[cfg(test)]
mod test {
    use super::{parse_minutes, parse_optional_minutes};

    #[test]
    fn test_past_midnight() {
        let result = parse_minutes("25:30:00").expect("should parse");
        assert_eq!(result, Some(1530.0));
    }

    #[test]
    fn test_seconds_are_fractional() {
        let result = parse_minutes("08:15:30").expect("should parse");
        assert_eq!(result, Some(495.5));
    }

    #[test]
    fn test_empty_is_not_zero() {
        assert_eq!(parse_minutes("").expect("should parse"), None);
        assert_eq!(parse_minutes("   ").expect("should parse"), None);
        assert_eq!(parse_optional_minutes(None).expect("should parse"), None);
    }

    #[test]
    fn test_malformed() {
        assert!(parse_minutes("08:15").is_err());
        assert!(parse_minutes("aa:00:00").is_err());
        assert!(parse_minutes("08:15:00:00").is_err());
    }
}
