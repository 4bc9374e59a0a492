//! Text splitting shared by the `FromStr` impls of the date types.

use crate::consts::{DATE_SEPARATOR, TIME_SEPARATOR};
use crate::error::CalendarError;

/// `YYYY-MM-DD` parts plus an optional `HH:MM[:SS]` part.
pub(crate) struct DateTimeParts<'a> {
    pub year:  &'a str,
    pub month: &'a str,
    pub day:   &'a str,
    pub time:  Option<&'a str>,
}

/// Splits `s` into date and time components without interpreting them.
pub(crate) fn split_date_time(s: &str) -> Result<DateTimeParts<'_>, CalendarError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(CalendarError::EmptyInput);
    }

    let (date, time) = match trimmed.split_once(|c: char| c.is_whitespace() || c == 'T') {
        Some((date, time)) => (date, Some(time.trim())),
        None => (trimmed, None),
    };

    let parts: Vec<&str> = date.split(DATE_SEPARATOR).map(str::trim).collect();
    match parts[..] {
        [year, month, day] => Ok(DateTimeParts {
            year,
            month,
            day,
            time,
        }),
        _ => Err(CalendarError::InvalidFormat(format!(
            "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {date}"
        ))),
    }
}

/// Parses `HH:MM` or `HH:MM:SS`; a missing time is midnight.
pub(crate) fn parse_time(time: Option<&str>) -> Result<(u8, u8, u8), CalendarError> {
    let Some(time) = time else {
        return Ok((0, 0, 0));
    };
    let parts: Vec<&str> = time.split(TIME_SEPARATOR).map(str::trim).collect();
    match parts[..] {
        [hour, minute] => Ok((parse_u8(hour)?, parse_u8(minute)?, 0)),
        [hour, minute, second] => Ok((parse_u8(hour)?, parse_u8(minute)?, parse_u8(second)?)),
        _ => Err(CalendarError::InvalidFormat(format!(
            "Expected HH{TIME_SEPARATOR}MM{TIME_SEPARATOR}SS, found {time}"
        ))),
    }
}

pub(crate) fn parse_u16(s: &str) -> Result<u16, CalendarError> {
    s.parse::<u16>()
        .map_err(|_| CalendarError::InvalidFormat(s.to_owned()))
}

pub(crate) fn parse_u8(s: &str) -> Result<u8, CalendarError> {
    s.parse::<u8>()
        .map_err(|_| CalendarError::InvalidFormat(s.to_owned()))
}
