use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{LEAP_MARKER, LEAP_MARKER_ZH, MIN_DAY};
use crate::error::CalendarError;
use crate::labels::{day_label, month_label, year_label};
use crate::parse;
use crate::solar::check_time;
use crate::year_info::YearInfo;

/// A date in the Chinese lunar calendar with a pass-through time of day.
///
/// `month` is the ordinary month number `1..=12`. A leap month reuses the
/// number of the month it follows and sets `is_leap`. Dates order by
/// `(year, month, is_leap, day, time)`, so a leap month sorts right after its
/// base month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawLunarDate")]
pub struct LunarDate {
    year:    u16,
    month:   u8,
    is_leap: bool,
    day:     u8,
    hour:    u8,
    minute:  u8,
    second:  u8,
}

/// Unchecked mirror of [`LunarDate`] used for deserialization.
#[derive(Deserialize)]
struct RawLunarDate {
    year:    u16,
    month:   u8,
    #[serde(default)]
    is_leap: bool,
    day:     u8,
    #[serde(default)]
    hour:    u8,
    #[serde(default)]
    minute:  u8,
    #[serde(default)]
    second:  u8,
}

impl TryFrom<RawLunarDate> for LunarDate {
    type Error = CalendarError;

    fn try_from(raw: RawLunarDate) -> Result<Self, Self::Error> {
        Self::with_leap(
            raw.year,
            raw.month,
            raw.is_leap,
            raw.day,
            (raw.hour, raw.minute, raw.second),
        )
    }
}

impl LunarDate {
    /// Creates a date in ordinary month `month`.
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` outside the table,
    /// `CalendarError::MonthOutOfRange` / `CalendarError::DayOutOfRange` when
    /// the month or day does not exist in that year, and
    /// `CalendarError::TimeOutOfRange` for an impossible time.
    pub fn new(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, CalendarError> {
        Self::with_leap(year, month, false, day, (hour, minute, second))
    }

    /// Creates a date in the leap month that follows month `month`.
    ///
    /// # Errors
    /// As [`LunarDate::new`], plus `CalendarError::NotALeapMonth` if `year`
    /// has no leap month after `month`.
    pub fn new_leap(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, CalendarError> {
        Self::with_leap(year, month, true, day, (hour, minute, second))
    }

    /// Creates a date in month slot `(month, is_leap)`.
    ///
    /// # Errors
    /// See [`LunarDate::new`] and [`LunarDate::new_leap`].
    pub fn with_leap(
        year: u16,
        month: u8,
        is_leap: bool,
        day: u8,
        (hour, minute, second): (u8, u8, u8),
    ) -> Result<Self, CalendarError> {
        let max = YearInfo::new(year)?.slot_days(month, is_leap)?;
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
            is_leap,
            day,
            hour,
            minute,
            second,
        })
    }

    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// `true` if the date lies in the leap month following `month()`.
    #[inline]
    pub const fn is_leap(&self) -> bool {
        self.is_leap
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

    /// `true` on the last day of the lunar year (New Year's Eve).
    pub fn is_last_day_of_year(&self) -> bool {
        YearInfo::new(self.year)
            .ok()
            .and_then(|info| info.month_slots().last())
            .is_some_and(|slot| {
                slot.month == self.month && slot.is_leap == self.is_leap && slot.days == self.day
            })
    }
}

impl fmt::Display for LunarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", year_label(self.year))?;
        if self.is_leap {
            f.write_str(LEAP_MARKER_ZH)?;
        }
        write!(
            f,
            "{}{} {:2}时{:2}分{:2}秒",
            month_label(self.month),
            day_label(self.day),
            self.hour,
            self.minute,
            self.second
        )
    }
}

impl FromStr for LunarDate {
    type Err = CalendarError;

    /// Parses `YYYY-MM-DD` with an optional `HH:MM[:SS]`; a leap month is
    /// written with an `L` or `闰` before the month number (`1987-L6-01`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = parse::split_date_time(s)?;
        let year = parse::parse_u16(parts.year)?;
        let (is_leap, month) = match parts
            .month
            .strip_prefix(LEAP_MARKER)
            .or_else(|| parts.month.strip_prefix(LEAP_MARKER_ZH))
        {
            Some(rest) => (true, rest),
            None => (false, parts.month),
        };
        let month = parse::parse_u8(month)?;
        let day = parse::parse_u8(parts.day)?;
        let time = parse::parse_time(parts.time)?;
        Self::with_leap(year, month, is_leap, day, time)
    }
}
