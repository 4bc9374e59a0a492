//! Conversion between solar and lunar dates.
//!
//! Both directions count whole days from [`SolarDate::epoch`], lunar New
//! Year's Day of the first table year, and walk the year table one year and
//! then one month slot at a time. The time of day is carried over unchanged.

use crate::consts::BASE_YEAR;
use crate::error::CalendarError;
use crate::lunar::LunarDate;
use crate::solar::SolarDate;
use crate::year_info::YearInfo;

/// Converts a Gregorian date to the lunar calendar.
///
/// A day that lands exactly on a month boundary is day 1 of the following
/// slot, so the day after ordinary month `N` ends is day 1 of leap month `N`
/// when the year has one.
///
/// # Errors
/// Returns `CalendarError::YearOutOfRange` for dates before lunar New Year
/// 1900 (reported as year 1899) or whose lunar year is 2050 or later.
///
/// # Example
///
/// ```
/// use lunar_calendar::{solar_to_lunar, LunarDate, SolarDate};
///
/// let solar = SolarDate::new(1988, 3, 28, 9, 9, 9).unwrap();
/// let lunar = solar_to_lunar(&solar).unwrap();
/// assert_eq!(lunar, LunarDate::new(1988, 2, 11, 9, 9, 9).unwrap());
/// ```
pub fn solar_to_lunar(date: &SolarDate) -> Result<LunarDate, CalendarError> {
    let mut offset = date.days_since(&SolarDate::epoch());
    if offset < 0 {
        return Err(CalendarError::YearOutOfRange(BASE_YEAR - 1));
    }

    let mut year = BASE_YEAR;
    let info = loop {
        let info = YearInfo::new(year)?;
        let days = i32::from(info.year_days());
        if offset < days {
            break info;
        }
        offset -= days;
        year += 1;
    };

    for slot in info.month_slots() {
        let days = i32::from(slot.days);
        if offset < days {
            // offset < slot length <= 30
            let day = (offset + 1) as u8;
            return LunarDate::with_leap(year, slot.month, slot.is_leap, day, date.time());
        }
        offset -= days;
    }

    // not reached: the slots of a year add up to its year_days()
    Err(CalendarError::YearOutOfRange(year))
}

/// Converts a lunar date to the Gregorian calendar.
///
/// # Errors
/// `LunarDate` values are validated on construction, so this only fails if the
/// resulting Gregorian date cannot be represented.
///
/// # Example
///
/// ```
/// use lunar_calendar::{lunar_to_solar, LunarDate, SolarDate};
///
/// let lunar = LunarDate::new(1988, 2, 11, 9, 9, 9).unwrap();
/// let solar = lunar_to_solar(&lunar).unwrap();
/// assert_eq!(solar, SolarDate::new(1988, 3, 28, 9, 9, 9).unwrap());
/// ```
pub fn lunar_to_solar(date: &LunarDate) -> Result<SolarDate, CalendarError> {
    let mut offset = 0i32;
    for year in BASE_YEAR..date.year() {
        offset += i32::from(YearInfo::new(year)?.year_days());
    }

    // months before the target slot, the leap month counted once it is passed;
    // a leap-month target counts its ordinary base month too
    let target = (date.month(), date.is_leap());
    offset += YearInfo::new(date.year())?
        .month_slots()
        .take_while(|slot| (slot.month, slot.is_leap) < target)
        .map(|slot| i32::from(slot.days))
        .sum::<i32>();
    offset += i32::from(date.day()) - 1;

    let (hour, minute, second) = date.time();
    SolarDate::epoch()
        .checked_add_days(offset)
        .ok_or(CalendarError::YearOutOfRange(date.year()))?
        .with_time(hour, minute, second)
}

impl SolarDate {
    /// See [`solar_to_lunar`].
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` outside the table.
    pub fn to_lunar(&self) -> Result<LunarDate, CalendarError> {
        solar_to_lunar(self)
    }
}

impl LunarDate {
    /// See [`lunar_to_solar`].
    ///
    /// # Errors
    /// See [`lunar_to_solar`].
    pub fn to_solar(&self) -> Result<SolarDate, CalendarError> {
        lunar_to_solar(self)
    }
}

impl TryFrom<SolarDate> for LunarDate {
    type Error = CalendarError;

    fn try_from(value: SolarDate) -> Result<Self, Self::Error> {
        solar_to_lunar(&value)
    }
}

impl TryFrom<LunarDate> for SolarDate {
    type Error = CalendarError;

    fn try_from(value: LunarDate) -> Result<Self, Self::Error> {
        lunar_to_solar(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MAX_YEAR;

    fn solar(y: u16, m: u8, d: u8) -> SolarDate {
        SolarDate::from_ymd(y, m, d).unwrap()
    }

    fn lunar(y: u16, m: u8, d: u8) -> LunarDate {
        LunarDate::new(y, m, d, 0, 0, 0).unwrap()
    }

    fn leap(y: u16, m: u8, d: u8) -> LunarDate {
        LunarDate::new_leap(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_known_conversion_with_time() {
        let s = SolarDate::new(1988, 3, 28, 9, 9, 9).unwrap();
        let l = LunarDate::new(1988, 2, 11, 9, 9, 9).unwrap();
        assert_eq!(s.to_lunar(), Ok(l));
        assert_eq!(l.to_solar(), Ok(s));
    }

    #[test]
    fn test_known_conversions() {
        let dataset = [
            (solar(1900, 1, 31), lunar(1900, 1, 1)),
            (solar(2000, 1, 1), lunar(1999, 11, 25)),
            (solar(2000, 2, 5), lunar(2000, 1, 1)),
            (solar(2024, 2, 9), lunar(2023, 12, 30)),
            (solar(2024, 2, 10), lunar(2024, 1, 1)),
            (solar(2017, 7, 22), lunar(2017, 6, 29)),
            (solar(2017, 7, 23), leap(2017, 6, 1)),
            (solar(2017, 8, 22), lunar(2017, 7, 1)),
            (solar(2050, 1, 22), lunar(2049, 12, 29)),
        ];
        for (s, l) in dataset {
            assert_eq!(solar_to_lunar(&s), Ok(l), "{s}");
            assert_eq!(lunar_to_solar(&l), Ok(s), "{l}");
        }
    }

    #[test]
    fn test_leap_month_boundaries() {
        // 1987: 30-day month 6, then a 29-day leap month 6
        assert_eq!(solar(1987, 7, 25).to_lunar(), Ok(lunar(1987, 6, 30)));
        assert_eq!(solar(1987, 7, 26).to_lunar(), Ok(leap(1987, 6, 1)));
        assert_eq!(solar(1987, 8, 23).to_lunar(), Ok(leap(1987, 6, 29)));
        assert_eq!(solar(1987, 8, 24).to_lunar(), Ok(lunar(1987, 7, 1)));

        // 2023: leap month after month 2
        assert_eq!(solar(2023, 3, 22).to_lunar(), Ok(leap(2023, 2, 1)));
        assert_eq!(solar(2023, 4, 20).to_lunar(), Ok(lunar(2023, 3, 1)));
    }

    #[test]
    fn test_leap_and_ordinary_month_differ() {
        let ordinary = lunar(2020, 4, 1).to_solar().unwrap();
        let leap_month = leap(2020, 4, 1).to_solar().unwrap();
        assert_eq!(leap_month, solar(2020, 5, 23));
        assert_eq!(leap_month.days_since(&ordinary), 30);
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            solar(1900, 1, 30).to_lunar(),
            Err(CalendarError::YearOutOfRange(1899))
        );
        assert_eq!(
            solar(1899, 12, 31).to_lunar(),
            Err(CalendarError::YearOutOfRange(1899))
        );
        assert_eq!(
            solar(2050, 1, 23).to_lunar(),
            Err(CalendarError::YearOutOfRange(2050))
        );
        assert_eq!(
            solar(2050, 6, 1).to_lunar(),
            Err(CalendarError::YearOutOfRange(2050))
        );
    }

    #[test]
    fn test_try_from() {
        let l = LunarDate::try_from(solar(2024, 2, 10)).unwrap();
        assert_eq!(l, lunar(2024, 1, 1));
        let s = SolarDate::try_from(l).unwrap();
        assert_eq!(s, solar(2024, 2, 10));
    }

    #[test]
    fn test_round_trip_every_supported_day() {
        let first = SolarDate::new(1900, 1, 31, 13, 14, 15).unwrap();
        let mut date = first;
        let mut previous: Option<LunarDate> = None;
        let mut count = 0;
        while let Ok(l) = date.to_lunar() {
            assert_eq!(l.time(), (13, 14, 15));
            assert_eq!(l.to_solar(), Ok(date), "{date} -> {l}");
            if let Some(prev) = previous {
                assert!(prev < l, "{prev:?} !< {l:?}");
                if prev.year() == l.year() {
                    let next_slot = l.day() == 1;
                    assert!(next_slot || l.day() == prev.day() + 1);
                }
            }
            previous = Some(l);
            count += 1;
            date = date.checked_add_days(1).unwrap();
        }
        let total: i32 = (BASE_YEAR..MAX_YEAR)
            .map(|y| i32::from(YearInfo::new(y).unwrap().year_days()))
            .sum();
        assert_eq!(count, total);
        assert_eq!(date, SolarDate::new(2050, 1, 23, 13, 14, 15).unwrap());
    }
}
