/// First lunar year covered by the year table
pub const BASE_YEAR: u16 = 1900;

/// First lunar year past the end of the year table (exclusive bound)
pub const MAX_YEAR: u16 = 2050;

/// Number of years in the year table
pub const TABLE_YEARS: usize = (MAX_YEAR - BASE_YEAR) as usize;

/// Lunar New Year's Day of `BASE_YEAR` falls on this Gregorian month...
pub const EPOCH_MONTH: u8 = 1;
/// ...and day (1900-01-31)
pub const EPOCH_DAY: u8 = 31;
/// Julian day number of 1900-01-31
pub const EPOCH_JDN: i32 = 2_415_051;

/// Maximum valid month number, Gregorian or lunar
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Length of a short ("small") lunar month
pub const SHORT_MONTH_DAYS: u8 = 29;
/// Length of a long ("big") lunar month
pub const LONG_MONTH_DAYS: u8 = 30;

/// Bits 0-3 of a year word: the month a leap month follows, 0 if none
pub(crate) const LEAP_MONTH_MASK: u32 = 0xf;
/// Bit 16 of a year word: set when the leap month is long
pub(crate) const LEAP_LONG_BIT: u32 = 0x1_0000;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Last valid hour of the day
pub const MAX_HOUR: u8 = 23;
/// Last valid minute or second
pub const MAX_MINUTE: u8 = 59;

/// Number of solar terms in a year
pub const SOLAR_TERMS: usize = 24;
/// First Gregorian year past the solar-term table (exclusive upper bound)
pub const SOLAR_TERM_MAX_YEAR: u16 = 2101;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Time component separator
pub const TIME_SEPARATOR: char = ':';
/// Marker for a leap month in parsed lunar dates (`1987-L6-01`)
pub const LEAP_MARKER: char = 'L';
/// Marker for a leap month in rendered labels
pub const LEAP_MARKER_ZH: &str = "闰";
