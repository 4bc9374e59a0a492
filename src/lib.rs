//! Table-driven conversion between Gregorian dates and the Chinese lunar
//! calendar for lunar years 1900 through 2049.
//!
//! ```
//! use lunar_calendar::{LunarDate, SolarDate};
//!
//! let solar: SolarDate = "1988-03-28 09:09:09".parse().unwrap();
//! let lunar = solar.to_lunar().unwrap();
//! assert_eq!(lunar, LunarDate::new(1988, 2, 11, 9, 9, 9).unwrap());
//! assert_eq!(lunar.to_string(), "1988年二月十一  9时 9分 9秒");
//! assert_eq!(lunar.to_solar().unwrap(), solar);
//! ```

mod consts;
mod convert;
mod error;
mod festival;
mod ganzhi;
mod jieqi;
mod labels;
mod lunar;
mod parse;
mod prelude;
mod solar;
mod table;
mod year_info;

pub use consts::*;
pub use convert::{lunar_to_solar, solar_to_lunar};
pub use error::CalendarError;
pub use festival::{FestivalError, FestivalMap, NEW_YEARS_EVE_KEY, month_day_key};
pub use ganzhi::{
    EARTHLY_BRANCHES, GanZhi, HEAVENLY_STEMS, ZODIAC_ANIMALS, day_index, hour_branch,
    hour_bucket, stem_branch, stem_branch_name, zodiac_animal,
};
pub use jieqi::{SOLAR_TERM_NAMES, SolarTerm, solar_term_date, solar_term_name, solar_terms};
pub use labels::{MONTH_NAMES, day_label, month_label, year_label};
pub use lunar::LunarDate;
pub use solar::{SolarDate, days_in_month};
pub use year_info::{
    MonthSlot, YearInfo, is_gregorian_leap_year, leap_month, leap_month_days, month_days,
    year_days,
};
