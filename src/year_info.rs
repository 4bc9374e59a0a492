use crate::consts::{
    CENTURY_CYCLE, GREGORIAN_CYCLE, LEAP_LONG_BIT, LEAP_MONTH_MASK, LEAP_YEAR_CYCLE,
    LONG_MONTH_DAYS, MAX_MONTH, SHORT_MONTH_DAYS,
};
use crate::error::CalendarError;
use crate::table;

/// Bits 4-15 of a year word, one per ordinary month
const MONTH_BITS_MASK: u32 = 0xfff0;
/// Bit for month `m` is `MONTH_BIT_ORIGIN >> m`
const MONTH_BIT_ORIGIN: u32 = 0x1_0000;
/// Twelve short months
const BASE_YEAR_DAYS: u16 = 12 * SHORT_MONTH_DAYS as u16;

/// Month lengths and leap-month placement of one lunar year, decoded from the
/// year table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearInfo {
    year: u16,
    word: u32,
}

/// One month of a lunar year in calendar order.
///
/// A leap month repeats the number of the ordinary month it follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthSlot {
    pub month:   u8,
    pub is_leap: bool,
    pub days:    u8,
}

impl YearInfo {
    /// Decodes the table entry for `year`.
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` if the table has no entry for `year`.
    pub fn new(year: u16) -> Result<Self, CalendarError> {
        let word = table::lookup(year)?;
        Ok(Self { year, word })
    }

    #[inline]
    pub const fn year(self) -> u16 {
        self.year
    }

    /// The month followed by a leap month, or `0` if the year has none.
    pub const fn leap_month(self) -> u8 {
        (self.word & LEAP_MONTH_MASK) as u8
    }

    pub const fn has_leap_month(self) -> bool {
        self.leap_month() != 0
    }

    /// Length of the leap month, `0` if the year has none.
    pub const fn leap_month_days(self) -> u8 {
        if !self.has_leap_month() {
            0
        } else if self.word & LEAP_LONG_BIT != 0 {
            LONG_MONTH_DAYS
        } else {
            SHORT_MONTH_DAYS
        }
    }

    /// Length of ordinary month `month`.
    ///
    /// # Errors
    /// Returns `CalendarError::MonthOutOfRange` if `month` is not in `1..=12`.
    pub fn month_days(self, month: u8) -> Result<u8, CalendarError> {
        if month == 0 || month > MAX_MONTH {
            return Err(CalendarError::MonthOutOfRange {
                year: self.year,
                month,
            });
        }
        Ok(self.ordinary_days(month))
    }

    const fn ordinary_days(self, month: u8) -> u8 {
        debug_assert!(month != 0 && month <= MAX_MONTH);
        if self.word & (MONTH_BIT_ORIGIN >> month) != 0 {
            LONG_MONTH_DAYS
        } else {
            SHORT_MONTH_DAYS
        }
    }

    /// Length of the month slot `(month, is_leap)`.
    ///
    /// # Errors
    /// Returns `CalendarError::MonthOutOfRange` for a month outside `1..=12`
    /// and `CalendarError::NotALeapMonth` if `is_leap` is set for any month
    /// other than this year's leap month.
    pub fn slot_days(self, month: u8, is_leap: bool) -> Result<u8, CalendarError> {
        let days = self.month_days(month)?;
        if !is_leap {
            return Ok(days);
        }
        if month != self.leap_month() {
            return Err(CalendarError::NotALeapMonth {
                year: self.year,
                month,
            });
        }
        Ok(self.leap_month_days())
    }

    /// Total days in the year, leap month included.
    pub const fn year_days(self) -> u16 {
        BASE_YEAR_DAYS + (self.word & MONTH_BITS_MASK).count_ones() as u16
            + self.leap_month_days() as u16
    }

    /// Every month of the year in calendar order, the leap month (if any)
    /// placed right after its base month.
    pub fn month_slots(self) -> impl Iterator<Item = MonthSlot> {
        let leap = self.leap_month();
        (1..=MAX_MONTH).flat_map(move |month| {
            let ordinary = MonthSlot {
                month,
                is_leap: false,
                days: self.ordinary_days(month),
            };
            let inserted = (month == leap).then_some(MonthSlot {
                month,
                is_leap: true,
                days: self.leap_month_days(),
            });
            std::iter::once(ordinary).chain(inserted)
        })
    }
}

/// Gregorian leap year test.
pub const fn is_gregorian_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// The month followed by a leap month in lunar `year`, `0` if none.
///
/// # Errors
/// Returns `CalendarError::YearOutOfRange` outside the table.
pub fn leap_month(year: u16) -> Result<u8, CalendarError> {
    YearInfo::new(year).map(YearInfo::leap_month)
}

/// Length of the leap month of lunar `year`, `0` if none.
///
/// # Errors
/// Returns `CalendarError::YearOutOfRange` outside the table.
pub fn leap_month_days(year: u16) -> Result<u8, CalendarError> {
    YearInfo::new(year).map(YearInfo::leap_month_days)
}

/// Length of ordinary month `month` of lunar `year`.
///
/// # Errors
/// Returns `CalendarError::YearOutOfRange` outside the table and
/// `CalendarError::MonthOutOfRange` for a month outside `1..=12`.
pub fn month_days(year: u16, month: u8) -> Result<u8, CalendarError> {
    YearInfo::new(year)?.month_days(month)
}

/// Total days of lunar `year`.
///
/// # Errors
/// Returns `CalendarError::YearOutOfRange` outside the table.
pub fn year_days(year: u16) -> Result<u16, CalendarError> {
    YearInfo::new(year).map(YearInfo::year_days)
}
