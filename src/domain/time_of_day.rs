//! Daily wall-clock instants written as `hh:mm`.

use crate::domain::error::TimeFormatError;
use chrono::{NaiveTime, Timelike};

/// Parses `h:mm` or `hh:mm` (24-hour clock) into a [`NaiveTime`].
pub fn parse_time_of_day(token: &str) -> Result<NaiveTime, TimeFormatError> {
    let mut parts = token.split(':');
    let (Some(hour), Some(minute), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(TimeFormatError::new(token, "expected hh:mm"));
    };

    let hour = parse_component(token, hour, "hour")?;
    let minute = parse_component(token, minute, "minute")?;

    if hour > 23 {
        return Err(TimeFormatError::new(token, "hour must be between 0 and 23"));
    }
    if minute > 59 {
        return Err(TimeFormatError::new(token, "minute must be between 0 and 59"));
    }

    NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| TimeFormatError::new(token, "not a valid time of day"))
}

fn parse_component(token: &str, part: &str, what: &str) -> Result<u32, TimeFormatError> {
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeFormatError::new(
            token,
            format!("{what} must be one or two digits"),
        ));
    }
    part.parse()
        .map_err(|_| TimeFormatError::new(token, format!("{what} is not a number")))
}

/// Renders a time the way it is written in a settings file.
pub fn format_time_of_day(time: NaiveTime) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn parses_zero_padded() {
        assert_eq!(parse_time_of_day("23:30").unwrap(), hm(23, 30));
        assert_eq!(parse_time_of_day("00:00").unwrap(), hm(0, 0));
    }

    #[test]
    fn parses_unpadded_hour() {
        assert_eq!(parse_time_of_day("9:05").unwrap(), hm(9, 5));
    }

    #[test]
    fn rejects_hour_24() {
        let err = parse_time_of_day("24:00").unwrap_err();
        assert_eq!(err.token, "24:00");
        assert_eq!(err.reason, "hour must be between 0 and 23");
    }

    #[test]
    fn rejects_minute_60() {
        let err = parse_time_of_day("12:60").unwrap_err();
        assert_eq!(err.reason, "minute must be between 0 and 59");
    }

    #[test]
    fn rejects_wrong_shape() {
        for token in ["", "12", "12:", ":30", "12:30:00", "ab:cd", "+1:30", "12h30", "123:00"] {
            assert!(parse_time_of_day(token).is_err(), "{token} should fail");
        }
    }

    #[test]
    fn formats_zero_padded() {
        assert_eq!(format_time_of_day(hm(7, 5)), "07:05");
    }

    proptest! {
        #[test]
        fn every_valid_time_parses(h in 0u32..24, m in 0u32..60) {
            prop_assert_eq!(parse_time_of_day(&format!("{h}:{m:02}")).unwrap(), hm(h, m));
            prop_assert_eq!(parse_time_of_day(&format!("{h:02}:{m:02}")).unwrap(), hm(h, m));
        }

        #[test]
        fn out_of_range_hour_fails(h in 24u32..100, m in 0u32..60) {
            let input = format!("{h}:{m:02}");
            prop_assert!(parse_time_of_day(&input).is_err());
        }
    }
}
