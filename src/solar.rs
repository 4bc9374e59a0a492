use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DAYS_IN_MONTH, EPOCH_DAY, EPOCH_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, MAX_HOUR, MAX_MINUTE,
    MAX_MONTH, MIN_DAY,
};
use crate::error::CalendarError;
use crate::parse;
use crate::prelude::*;
use crate::year_info::is_gregorian_leap_year;

/// A civil Gregorian timestamp with second precision and no time zone.
///
/// Fields are private; every value is checked to be a real calendar date and
/// a valid time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(
    fmt = "{}年{:02}月{:02}日 {:2}时{:2}分{:2}秒",
    year,
    month,
    day,
    hour,
    minute,
    second
)]
#[serde(try_from = "RawSolarDate")]
pub struct SolarDate {
    year:   u16,
    month:  u8,
    day:    u8,
    hour:   u8,
    minute: u8,
    second: u8,
}

/// Unchecked mirror of [`SolarDate`] used for deserialization.
#[derive(Deserialize)]
struct RawSolarDate {
    year:   u16,
    month:  u8,
    day:    u8,
    #[serde(default)]
    hour:   u8,
    #[serde(default)]
    minute: u8,
    #[serde(default)]
    second: u8,
}

impl TryFrom<RawSolarDate> for SolarDate {
    type Error = CalendarError;

    fn try_from(raw: RawSolarDate) -> Result<Self, Self::Error> {
        Self::new(raw.year, raw.month, raw.day, raw.hour, raw.minute, raw.second)
    }
}

impl SolarDate {
    /// Creates a solar date, validating the calendar date and the time of day.
    ///
    /// # Errors
    /// Returns `CalendarError::MonthOutOfRange` or `CalendarError::DayOutOfRange`
    /// for an impossible date and `CalendarError::TimeOutOfRange` for an
    /// impossible time.
    pub fn new(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, CalendarError> {
        if month == 0 || month > MAX_MONTH {
            return Err(CalendarError::MonthOutOfRange { year, month });
        }
        let max = days_in_month(year, month);
        if day < MIN_DAY || day > max {
            return Err(CalendarError::DayOutOfRange {
                year,
                month,
                day,
                max,
            });
        }
        check_time(hour, minute, second)?;
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Creates a solar date at midnight.
    ///
    /// # Errors
    /// See [`SolarDate::new`].
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, CalendarError> {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Lunar New Year's Day of the first table year, 1900-01-31 00:00:00.
    pub const fn epoch() -> Self {
        Self {
            year:   crate::consts::BASE_YEAR,
            month:  EPOCH_MONTH,
            day:    EPOCH_DAY,
            hour:   0,
            minute: 0,
            second: 0,
        }
    }

    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    #[inline]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    #[inline]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    #[inline]
    pub const fn second(&self) -> u8 {
        self.second
    }

    /// Returns `(hour, minute, second)`.
    pub const fn time(&self) -> (u8, u8, u8) {
        (self.hour, self.minute, self.second)
    }

    /// Returns a copy with the time of day replaced.
    ///
    /// # Errors
    /// Returns `CalendarError::TimeOutOfRange` for an impossible time.
    pub fn with_time(self, hour: u8, minute: u8, second: u8) -> Result<Self, CalendarError> {
        check_time(hour, minute, second)?;
        Ok(Self {
            hour,
            minute,
            second,
            ..self
        })
    }

    /// Julian day number of the calendar date (time of day is ignored).
    pub fn julian_day(&self) -> i32 {
        let (y, m, d) = (
            i32::from(self.year),
            i32::from(self.month),
            i32::from(self.day),
        );
        (1461 * (y + 4800 + (m - 14) / 12)) / 4 + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
            - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
            + d
            - 32075
    }

    /// Midnight of the day with Julian day number `jdn`.
    ///
    /// Returns `None` if the year does not fit the supported representation.
    pub fn from_julian_day(jdn: i32) -> Option<Self> {
        let f = jdn + 1401 + (((4 * jdn + 274_277) / 146_097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
        Some(Self {
            year:   u16::try_from(year).ok()?,
            month:  u8::try_from(month).ok()?,
            day:    u8::try_from(day).ok()?,
            hour:   0,
            minute: 0,
            second: 0,
        })
    }

    /// Moves the date by `days`, keeping the time of day.
    ///
    /// Returns `None` if the result leaves the representable range.
    pub fn checked_add_days(self, days: i32) -> Option<Self> {
        let jdn = self.julian_day().checked_add(days)?;
        let moved = Self::from_julian_day(jdn)?;
        Some(Self {
            hour: self.hour,
            minute: self.minute,
            second: self.second,
            ..moved
        })
    }

    /// Whole days from `other` to `self`, ignoring the time of day.
    pub fn days_since(&self, other: &Self) -> i32 {
        self.julian_day() - other.julian_day()
    }

    /// ISO-8601 day of week, `1..=7` for Monday through Sunday.
    pub fn day_of_week(&self) -> u8 {
        // rem_euclid(7) is always in 0..7
        self.julian_day().rem_euclid(7) as u8 + 1
    }
}

/// Rejects times outside `00:00:00..=23:59:59`.
pub(crate) fn check_time(hour: u8, minute: u8, second: u8) -> Result<(), CalendarError> {
    if hour > MAX_HOUR || minute > MAX_MINUTE || second > MAX_MINUTE {
        return Err(CalendarError::TimeOutOfRange {
            hour,
            minute,
            second,
        });
    }
    Ok(())
}

/// Days in Gregorian `month` of `year`.
pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_gregorian_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

impl FromStr for SolarDate {
    type Err = CalendarError;

    /// Parses `YYYY-MM-DD`, optionally followed by `HH:MM[:SS]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = parse::split_date_time(s)?;
        let year = parse::parse_u16(parts.year)?;
        let month = parse::parse_u8(parts.month)?;
        let day = parse::parse_u8(parts.day)?;
        let (hour, minute, second) = parse::parse_time(parts.time)?;
        Self::new(year, month, day, hour, minute, second)
    }
}
