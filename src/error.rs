use crate::consts::{BASE_YEAR, MAX_YEAR, SOLAR_TERMS};

/// Error type for conversions, validated constructors and parsing.
///
/// Every variant except the two parse failures is a flavour of "out of
/// range"; see [`CalendarError::is_out_of_range`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Year outside the table, or a solar date whose lunar year would be.
    #[error("Year {0} is outside the supported range {BASE_YEAR}..{MAX_YEAR}")]
    YearOutOfRange(u16),

    /// Month number outside `1..=12`.
    #[error("Invalid month {month} in year {year}")]
    MonthOutOfRange { year: u16, month: u8 },

    /// Day is zero or past the end of its month.
    #[error("Invalid day {day} for month {year}-{month:02} (max {max})")]
    DayOutOfRange {
        year:  u16,
        month: u8,
        day:   u8,
        max:   u8,
    },

    /// A leap-month date named a month that is not that year's leap month.
    #[error("Lunar year {year} has no leap month after month {month}")]
    NotALeapMonth { year: u16, month: u8 },

    /// Time of day outside `00:00:00..=23:59:59`.
    #[error("Invalid time of day {hour:02}:{minute:02}:{second:02}")]
    TimeOutOfRange { hour: u8, minute: u8, second: u8 },

    /// Solar term index outside `0..24`.
    #[error("Solar term index {0} is outside 0..{SOLAR_TERMS}")]
    SolarTermOutOfRange(usize),

    /// Text could not be split into date components.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// Text was empty after trimming.
    #[error("Empty date string")]
    EmptyInput,
}

impl CalendarError {
    /// Returns `true` for every range violation, `false` for parse failures.
    pub const fn is_out_of_range(&self) -> bool {
        !matches!(self, Self::InvalidFormat(_) | Self::EmptyInput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_message() {
        let err = CalendarError::YearOutOfRange(2050);
        assert_eq!(
            err.to_string(),
            "Year 2050 is outside the supported range 1900..2050"
        );
    }

    #[test]
    fn test_day_message() {
        let err = CalendarError::DayOutOfRange {
            year:  1988,
            month: 2,
            day:   30,
            max:   29,
        };
        assert_eq!(err.to_string(), "Invalid day 30 for month 1988-02 (max 29)");
    }

    #[test]
    fn test_is_out_of_range() {
        assert!(CalendarError::YearOutOfRange(1899).is_out_of_range());
        assert!(CalendarError::SolarTermOutOfRange(24).is_out_of_range());
        assert!(CalendarError::NotALeapMonth { year: 1988, month: 2 }.is_out_of_range());
        assert!(!CalendarError::EmptyInput.is_out_of_range());
        assert!(!CalendarError::InvalidFormat("x".to_owned()).is_out_of_range());
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<CalendarError>();
    }
}
