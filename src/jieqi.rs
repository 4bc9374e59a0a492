//! The 24 solar terms (节气) and their tabulated dates for every table year.
//!
//! Term `n` (0 = 小寒) falls in Gregorian month `n / 2 + 1` on day
//! `TERM_BASE_DAY[n] + offset`, where the offset digit is stored in a shared
//! row of `OFFSET_ROWS` and the row for each year is picked by a character of
//! `YEAR_ROW_INDEX` (row = character code minus `'0'`).

use serde::Serialize;

use crate::consts::{BASE_YEAR, SOLAR_TERM_MAX_YEAR, SOLAR_TERMS};
use crate::error::CalendarError;
use crate::solar::SolarDate;

/// Term names in calendar order, starting from 小寒 in early January.
pub const SOLAR_TERM_NAMES: [&str; SOLAR_TERMS] = [
    "小寒", "大寒", "立春", "雨水", "惊蛰", "春分",
    "清明", "谷雨", "立夏", "小满", "芒种", "夏至",
    "小暑", "大暑", "立秋", "处暑", "白露", "秋分",
    "寒露", "霜降", "立冬", "小雪", "大雪", "冬至",
];

/// Earliest day of month each term can fall on.
const TERM_BASE_DAY: [u8; SOLAR_TERMS] = [
    4, 19, 3, 18, 4, 19, 4, 19, 4, 20, 4, 20, 6, 22, 6, 22, 6, 22, 7, 22, 6, 21, 6, 21,
];

/// One character per year from `BASE_YEAR` up to `SOLAR_TERM_MAX_YEAR`; its
/// code minus `'0'` is a row of `OFFSET_ROWS`.
static YEAR_ROW_INDEX: &str = concat!(
    "0123415341536789:;<9:=<>:=1>?012@015@015@015AB78CD",
    "E8CD=1FD01GH01GH01IH01IJ0KLMN;LMBEOPDQRST0RUH0RVH0",
    "RWH0RWM0XYMNZ[MB\\]PT^_ST`_WH`_WH`_WM`_WM`aYMbc[Mde",
    "]Sfe]gfh_gih_Wih_WjhaWjka[jkl[jmn]ope]qph_qrh_sth_",
    "W",
);

/// Rows of 24 offset digits, one per term.
static OFFSET_ROWS: &str = concat!(
    "211122112122112121222211221122122222212222222221222122222232222222222222222233223232223232222222",
    "322222112122112121222211222122222222222222222222322222112122112121222111211122122222212221222221",
    "221122122222222222222222222223222232222232222222222222112122112121122111211122122122212221222221",
    "221122122222222222222221211122112122212221222211222122222232222232222222222222112122112121111111",
    "222222112121112121111111222222111121112121111111211122112122112121122111222212111121111121111111",
    "111122112122112121122111211122112122212221222221222211111121111121111111222111111121111111111111",
    "111122112121112121111111222111111111111111111111111122111121112121111111221122122222212221222221",
    "222111011111111111111111111122111121111121111111211122112122112121122211221111011111101111111111",
    "111112111121111121111111211122112122112221222211221111011111101111111110111111111121111111111111",
    "111122112121112121122111111011111121111111111111111011111111112111111111111011111111111111111111",
    "221111011111101110111110111011011111111111111111221111011011101110111110111011011111101111111111",
    "211111001011101110111110110011011111101111111111211111001011001010111110110011011111101111111110",
    "211111001011001010111100110011011011101110111110211111001011001010011100110011001011101110111110",
    "211111001010001010011000100011001011001010111110111111001010001010011000111111111111111111111111",
    "100011001011001010111100111111001010001010000000111111000010000010000000100011001011001010011100",
    "110011001011001110111110100011001010001010011000110011001011001010111110111100000010000000000000",
    "000011001010001010011000111100000000000000000000000011001010001010000000111000000000000000000000",
    "000011001010000010000000",
);

/// A solar term resolved to a concrete date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SolarTerm {
    pub index: usize,
    pub name:  &'static str,
    pub date:  SolarDate,
}

/// Name of solar term `index` (0 = 小寒 through 23 = 冬至).
///
/// # Errors
/// Returns `CalendarError::SolarTermOutOfRange` if `index >= 24`.
pub fn solar_term_name(index: usize) -> Result<&'static str, CalendarError> {
    SOLAR_TERM_NAMES
        .get(index)
        .copied()
        .ok_or(CalendarError::SolarTermOutOfRange(index))
}

/// Day of month on which solar term `index` falls in Gregorian `year`.
///
/// The term's month is `index / 2 + 1`.
///
/// # Errors
/// Returns `CalendarError::YearOutOfRange` outside the table and
/// `CalendarError::SolarTermOutOfRange` if `index >= 24`.
///
/// # Example
///
/// ```
/// use lunar_calendar::solar_term_date;
///
/// // 立夏 2014 fell on May 5
/// assert_eq!(Ok(5), solar_term_date(2014, 8));
/// ```
pub fn solar_term_date(year: u16, index: usize) -> Result<u8, CalendarError> {
    if !(BASE_YEAR..SOLAR_TERM_MAX_YEAR).contains(&year) {
        return Err(CalendarError::YearOutOfRange(year));
    }
    if index >= SOLAR_TERMS {
        return Err(CalendarError::SolarTermOutOfRange(index));
    }
    let row = usize::from(YEAR_ROW_INDEX.as_bytes()[usize::from(year - BASE_YEAR)] - b'0');
    let offset = OFFSET_ROWS.as_bytes()[row * SOLAR_TERMS + index] - b'0';
    Ok(TERM_BASE_DAY[index] + offset)
}

/// All 24 solar terms of Gregorian `year` in calendar order.
///
/// # Errors
/// Returns `CalendarError::YearOutOfRange` outside `1900..=2100`.
pub fn solar_terms(year: u16) -> Result<Vec<SolarTerm>, CalendarError> {
    (0..SOLAR_TERMS)
        .map(|index| {
            let day = solar_term_date(year, index)?;
            // two terms per month, in order
            let month = (index / 2 + 1) as u8;
            Ok(SolarTerm {
                index,
                name: SOLAR_TERM_NAMES[index],
                date: SolarDate::from_ymd(year, month, day)?,
            })
        })
        .collect()
}

impl SolarDate {
    /// Name of the solar term falling on this date, if any.
    ///
    /// Dates outside the table never carry a term.
    pub fn solar_term(&self) -> Option<&'static str> {
        let first = usize::from(self.month() - 1) * 2;
        (first..first + 2).find_map(|index| {
            solar_term_date(self.year(), index)
                .ok()
                .filter(|&day| day == self.day())
                .map(|_| SOLAR_TERM_NAMES[index])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_shapes() {
        assert_eq!(
            YEAR_ROW_INDEX.len(),
            usize::from(SOLAR_TERM_MAX_YEAR - BASE_YEAR)
        );
        assert_eq!(OFFSET_ROWS.len() % SOLAR_TERMS, 0);
        let rows = OFFSET_ROWS.len() / SOLAR_TERMS;
        for (i, b) in YEAR_ROW_INDEX.bytes().enumerate() {
            assert!(b >= b'0', "year {} has a bad row character", 1900 + i);
            assert!(usize::from(b - b'0') < rows, "year {} points past the offset rows", 1900 + i);
        }
        assert!(OFFSET_ROWS.bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn test_terms_2014() {
        let days: Vec<u8> = (0..24).map(|n| solar_term_date(2014, n).unwrap()).collect();
        assert_eq!(
            days,
            vec![5, 20, 4, 19, 6, 21, 5, 20, 5, 21, 6, 21, 7, 23, 7, 23, 8, 23, 8, 23, 7, 22, 7, 22]
        );
    }

    #[test]
    fn test_terms_2024() {
        let days: Vec<u8> = (0..24).map(|n| solar_term_date(2024, n).unwrap()).collect();
        assert_eq!(
            days,
            vec![6, 20, 4, 19, 5, 20, 4, 19, 5, 20, 5, 21, 6, 22, 7, 22, 7, 22, 8, 23, 7, 22, 6, 21]
        );
    }

    #[test]
    fn test_first_and_last_table_years() {
        assert_eq!(solar_term_date(1900, 0), Ok(6));
        assert_eq!(solar_term_date(1900, 19), Ok(24));
        assert_eq!(solar_term_date(2049, 23), Ok(21));
    }

    #[test]
    fn test_terms_past_lunar_table() {
        // lunar 2049 runs into January 2050, so 2050 needs term dates too
        assert_eq!(solar_term_date(2050, 0), Ok(5));
        assert_eq!(solar_term_date(2050, 2), Ok(3));
        assert_eq!(solar_term_date(2100, 23), Ok(22));
        assert!((BASE_YEAR..SOLAR_TERM_MAX_YEAR).all(|y| solar_terms(y).is_ok()));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            solar_term_date(1899, 0),
            Err(CalendarError::YearOutOfRange(1899))
        );
        assert_eq!(
            solar_term_date(2101, 0),
            Err(CalendarError::YearOutOfRange(2101))
        );
        assert_eq!(
            solar_term_date(2000, 24),
            Err(CalendarError::SolarTermOutOfRange(24))
        );
        assert_eq!(
            solar_term_name(24),
            Err(CalendarError::SolarTermOutOfRange(24))
        );
    }

    #[test]
    fn test_solar_terms_list() {
        let terms = solar_terms(2014).unwrap();
        assert_eq!(terms.len(), 24);
        assert_eq!(terms[2].name, "立春");
        assert_eq!(terms[2].date, SolarDate::from_ymd(2014, 2, 4).unwrap());
        assert_eq!(terms[23].name, "冬至");
        assert_eq!(terms[23].date, SolarDate::from_ymd(2014, 12, 22).unwrap());
        assert!(terms.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn test_solar_date_term() {
        let lixia = SolarDate::from_ymd(2014, 5, 5).unwrap();
        assert_eq!(lixia.solar_term(), Some("立夏"));
        let xiaoman = SolarDate::from_ymd(2014, 5, 21).unwrap();
        assert_eq!(xiaoman.solar_term(), Some("小满"));
        let plain = SolarDate::from_ymd(2014, 5, 6).unwrap();
        assert_eq!(plain.solar_term(), None);
        let outside = SolarDate::from_ymd(2101, 5, 5).unwrap();
        assert_eq!(outside.solar_term(), None);
    }
}
