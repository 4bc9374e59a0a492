//! Sexagenary (干支) naming of years, months, days and two-hour periods, and
//! the zodiac animal of a year.
//!
//! All cycle indices are 0-based: `0` is 甲子 and `59` is 癸亥.

use serde::Serialize;

use crate::consts::{BASE_YEAR, EPOCH_JDN};
use crate::error::CalendarError;
use crate::jieqi::solar_term_date;
use crate::prelude::*;
use crate::solar::SolarDate;

/// The ten heavenly stems.
pub const HEAVENLY_STEMS: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

/// The twelve earthly branches.
pub const EARTHLY_BRANCHES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

/// Zodiac animals in branch order, starting with the rat.
pub const ZODIAC_ANIMALS: [&str; 12] = [
    "鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪",
];

const CYCLE: u32 = 60;
/// 1900-01-31 was a 甲辰 day
const EPOCH_DAY_INDEX: i32 = 40;
/// 4 AD was a 甲子 year
const YEAR_CYCLE_ORIGIN: u16 = 4;
/// The month before 小寒 1900 was a 丙子 month: `(0 * 12 + 1 + 11) % 60`
const MONTH_INDEX_OFFSET: u32 = 11;

/// Stem and branch names of cycle position `index`.
pub fn stem_branch(index: u32) -> (&'static str, &'static str) {
    (
        HEAVENLY_STEMS[(index % 10) as usize],
        EARTHLY_BRANCHES[(index % 12) as usize],
    )
}

/// Combined name of cycle position `index`, e.g. `甲子`.
///
/// # Example
///
/// ```
/// use lunar_calendar::stem_branch_name;
///
/// assert_eq!("甲子", stem_branch_name(0));
/// assert_eq!("癸亥", stem_branch_name(59));
/// ```
pub fn stem_branch_name(index: u32) -> String {
    let (stem, branch) = stem_branch(index);
    stem.to_owned() + branch
}

/// Zodiac animal of lunar `year`.
///
/// # Example
///
/// ```
/// use lunar_calendar::zodiac_animal;
///
/// assert_eq!("鼠", zodiac_animal(1900));
/// assert_eq!("龙", zodiac_animal(1988));
/// ```
pub fn zodiac_animal(year: u16) -> &'static str {
    let idx = (i32::from(year) - i32::from(BASE_YEAR)).rem_euclid(12);
    ZODIAC_ANIMALS[idx as usize]
}

/// Two-hour period of `hour`, `0` (子, 23:00-00:59) through `11` (亥).
/// Hours past 23 wrap around the day.
pub const fn hour_bucket(hour: u8) -> u8 {
    ((hour % 24 + 1) / 2) % 12
}

/// Branch name of the two-hour period containing `hour`.
pub fn hour_branch(hour: u8) -> &'static str {
    EARTHLY_BRANCHES[usize::from(hour_bucket(hour))]
}

/// Cycle position of the day with Julian day number `jdn`.
pub fn day_index(jdn: i32) -> u32 {
    // rem_euclid keeps the result in 0..60
    (jdn - EPOCH_JDN + EPOCH_DAY_INDEX).rem_euclid(CYCLE as i32) as u32
}

/// Sexagenary names of a moment: year, month, day and two-hour period.
///
/// The year follows the lunar year (it changes at lunar New Year), the month
/// changes on the first solar term of each Gregorian month (立春, 惊蛰, ...),
/// the day runs continuously, and the hour stem follows the day stem. The 子
/// period starting at 23:00 is counted with the day it starts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[display(
    fmt = "{}年 {}月 {}日 {}时",
    "stem_branch_name(*year)",
    "stem_branch_name(*month)",
    "stem_branch_name(*day)",
    "stem_branch_name(*hour)"
)]
pub struct GanZhi {
    pub year:  u32,
    pub month: u32,
    pub day:   u32,
    pub hour:  u32,
}

impl GanZhi {
    /// Computes the four cycle positions of `date`.
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` when `date` is outside the
    /// lunar table.
    pub fn of(date: &SolarDate) -> Result<Self, CalendarError> {
        let lunar_year = date.to_lunar()?.year();
        let year = u32::from(lunar_year - YEAR_CYCLE_ORIGIN) % CYCLE;

        let first_term = solar_term_date(date.year(), usize::from(date.month() - 1) * 2)?;
        let months = u32::from(date.year() - BASE_YEAR) * 12
            + u32::from(date.month())
            + MONTH_INDEX_OFFSET
            + u32::from(date.day() >= first_term);
        let month = months % CYCLE;

        let day = day_index(date.julian_day());
        let hour = (day * 12 + u32::from(hour_bucket(date.hour()))) % CYCLE;

        Ok(Self {
            year,
            month,
            day,
            hour,
        })
    }

    pub fn year_name(&self) -> String {
        stem_branch_name(self.year)
    }

    pub fn month_name(&self) -> String {
        stem_branch_name(self.month)
    }

    pub fn day_name(&self) -> String {
        stem_branch_name(self.day)
    }

    pub fn hour_name(&self) -> String {
        stem_branch_name(self.hour)
    }
}

impl SolarDate {
    /// Sexagenary names of this moment; see [`GanZhi`].
    ///
    /// # Errors
    /// See [`GanZhi::of`].
    pub fn gan_zhi(&self) -> Result<GanZhi, CalendarError> {
        GanZhi::of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem_branch() {
        assert_eq!(stem_branch(0), ("甲", "子"));
        assert_eq!(stem_branch(36), ("庚", "子"));
        for (std, idx) in [("甲子", 0), ("庚寅", 26), ("癸亥", 59), ("甲子", 60)] {
            assert_eq!(std, stem_branch_name(idx));
        }
    }

    #[test]
    fn test_zodiac_animal() {
        assert_eq!(zodiac_animal(1900), "鼠");
        assert_eq!(zodiac_animal(1988), "龙");
        assert_eq!(zodiac_animal(2014), "马");
        assert_eq!(zodiac_animal(1899), "猪");
    }

    #[test]
    fn test_hour_buckets() {
        assert_eq!(hour_branch(23), "子");
        assert_eq!(hour_branch(0), "子");
        assert_eq!(hour_branch(1), "丑");
        assert_eq!(hour_branch(2), "丑");
        assert_eq!(hour_branch(3), "寅");
        assert_eq!(hour_branch(11), "午");
        assert_eq!(hour_branch(12), "午");
        assert_eq!(hour_branch(21), "亥");
        assert_eq!(hour_branch(22), "亥");
        assert_eq!(hour_bucket(24), hour_bucket(0));
        assert_eq!(hour_bucket(u8::MAX), 8);
    }

    #[test]
    fn test_day_index() {
        assert_eq!(day_index(EPOCH_JDN), 40);
        // 2000-01-01 was a 戊午 day
        assert_eq!(stem_branch_name(day_index(2_451_545)), "戊午");
    }

    #[test]
    fn test_gan_zhi_2014_05_01() {
        let gz = SolarDate::from_ymd(2014, 5, 1).unwrap().gan_zhi().unwrap();
        assert_eq!(gz.year_name(), "甲午");
        assert_eq!(gz.month_name(), "戊辰");
        assert_eq!(gz.day_name(), "壬申");
        // 壬 day: the 子 period is 庚子
        assert_eq!(gz.hour_name(), "庚子");
    }

    #[test]
    fn test_gan_zhi_2014_05_05() {
        // 立夏 falls on May 5, starting the 巳 month
        let gz = SolarDate::from_ymd(2014, 5, 5).unwrap().gan_zhi().unwrap();
        assert_eq!(gz.year_name(), "甲午");
        assert_eq!(gz.month_name(), "己巳");
        assert_eq!(gz.day_name(), "丙子");
    }

    #[test]
    fn test_gan_zhi_epoch() {
        let gz = GanZhi::of(&SolarDate::epoch()).unwrap();
        assert_eq!(gz.year_name(), "庚子");
        assert_eq!(gz.day_name(), "甲辰");
        assert_eq!(gz.to_string(), "庚子年 丁丑月 甲辰日 甲子时");
    }

    #[test]
    fn test_gan_zhi_last_supported_day() {
        // lunar 2049-12-29, before 立春 2050
        let gz = SolarDate::from_ymd(2050, 1, 22).unwrap().gan_zhi().unwrap();
        assert_eq!(gz.year_name(), "己巳");
        assert_eq!(gz.month_name(), "丁丑");
        assert_eq!(gz.day_name(), "壬寅");
        assert_eq!(gz.hour_name(), "庚子");
        assert!(SolarDate::from_ymd(2050, 1, 10).unwrap().gan_zhi().is_ok());
    }

    #[test]
    fn test_gan_zhi_out_of_range() {
        let early = SolarDate::from_ymd(1900, 1, 1).unwrap();
        assert_eq!(early.gan_zhi(), Err(CalendarError::YearOutOfRange(1899)));
    }
}
