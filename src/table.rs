//! Packed per-year lunar month lengths.
//!
//! One `u32` word per year from [`BASE_YEAR`] up to (excluding) [`MAX_YEAR`]:
//!
//! - bits 0-3: the month a leap month follows, `0` when the year has none
//! - bits 4-15: ordinary month lengths, month 1 at bit 15 down to month 12
//!   at bit 4 (set = 30 days, clear = 29)
//! - bit 16: length of the leap month, if any (set = 30 days, clear = 29)
//!
//! For example 2000 is `0x0c960`: months 1, 2, 5, 8, 10 and 11 are long, the
//! rest short, and there is no leap month.

use crate::consts::{BASE_YEAR, MAX_YEAR, TABLE_YEARS};
use crate::error::CalendarError;

#[rustfmt::skip]
static LUNAR_YEAR_TABLE: [u32; TABLE_YEARS] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, // 1900-1904
    0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, // 1905-1909
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, // 1910-1914
    0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, // 1915-1919
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, // 1920-1924
    0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, // 1925-1929
    0x06566, 0x0d4a0, 0x0ea50, 0x06e95, 0x05ad0, // 1930-1934
    0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, // 1935-1939
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, // 1940-1944
    0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, // 1945-1949
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5d0, // 1950-1954
    0x14573, 0x052d0, 0x0a9a8, 0x0e950, 0x06aa0, // 1955-1959
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, // 1960-1964
    0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, // 1965-1969
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, // 1970-1974
    0x0d250, 0x0d558, 0x0b540, 0x0b5a0, 0x195a6, // 1975-1979
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, // 1980-1984
    0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1985-1989
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, // 1990-1994
    0x06b58, 0x055c0, 0x0ab60, 0x096d5, 0x092e0, // 1995-1999
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, // 2000-2004
    0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2005-2009
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, // 2010-2014
    0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2015-2019
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, // 2020-2024
    0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2025-2029
    0x05aa0, 0x076a3, 0x096d0, 0x04bd7, 0x04ad0, // 2030-2034
    0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2035-2039
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, // 2040-2044
    0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2045-2049
];

/// Returns the packed word for `year`.
///
/// # Errors
/// Returns `CalendarError::YearOutOfRange` if `year` is outside `BASE_YEAR..MAX_YEAR`.
pub fn lookup(year: u16) -> Result<u32, CalendarError> {
    if !(BASE_YEAR..MAX_YEAR).contains(&year) {
        return Err(CalendarError::YearOutOfRange(year));
    }
    Ok(LUNAR_YEAR_TABLE[usize::from(year - BASE_YEAR)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_bounds() {
        assert_eq!(lookup(BASE_YEAR), Ok(0x04bd8));
        assert_eq!(lookup(MAX_YEAR - 1), Ok(0x0ada0));
        assert_eq!(
            lookup(BASE_YEAR - 1),
            Err(CalendarError::YearOutOfRange(1899))
        );
        assert_eq!(lookup(MAX_YEAR), Err(CalendarError::YearOutOfRange(2050)));
    }

    #[test]
    fn test_lookup_known_years() {
        assert_eq!(lookup(2000), Ok(0x0c960));
        // leap month after month 6, long
        assert_eq!(lookup(1987), Ok(0x0af46));
        assert_eq!(lookup(2017), Ok(0x15176));
    }

    #[test]
    fn test_no_stray_bits() {
        for year in BASE_YEAR..MAX_YEAR {
            let word = lookup(year).unwrap();
            assert_eq!(word >> 17, 0, "year {year} has bits above 16");
            let leap = word & 0xf;
            assert!(leap <= 12, "year {year} has leap month {leap}");
            if leap == 0 {
                assert_eq!(word & 0x1_0000, 0, "year {year} has a long leap month but no leap");
            }
        }
    }
}
