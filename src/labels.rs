//! Chinese display names for lunar years, months and days.

/// Month names, `正` (first) through `腊` (twelfth).
pub const MONTH_NAMES: [&str; 12] = [
    "正", "二", "三", "四", "五", "六", "七", "八", "九", "十", "十一", "腊",
];

/// Tens prefix of a day name: `初` (1-9), `十` (11-19), `廿` (21-29), `卅`.
const DAY_TENS: [&str; 4] = ["初", "十", "廿", "卅"];

/// Units of a day name. Index 0 is only reached for day 0.
const DAY_UNITS: [&str; 10] = ["日", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// Year name, e.g. `1988年`.
pub fn year_label(year: u16) -> String {
    format!("{year}年")
}

/// Month name including `月`, e.g. `正月`, `十一月`, `腊月`.
///
/// Months wrap modulo 12, so `13` is `正月` again and `0` is `腊月`.
///
/// # Example
///
/// ```
/// use lunar_calendar::month_label;
///
/// assert_eq!("正月", month_label(1));
/// assert_eq!("腊月", month_label(12));
/// ```
pub fn month_label(month: u8) -> String {
    let idx = (i32::from(month) - 1).rem_euclid(12) as usize;
    format!("{}月", MONTH_NAMES[idx])
}

/// Day name: `初一` through `初十`, `十一` through `十九`, `二十`, `廿一`
/// through `廿九`, `三十`.
///
/// # Example
///
/// ```
/// use lunar_calendar::day_label;
///
/// assert_eq!("初十", day_label(10));
/// assert_eq!("廿五", day_label(25));
/// assert_eq!("三十", day_label(30));
/// ```
pub fn day_label(day: u8) -> String {
    match day {
        10 => "初十".to_owned(),
        20 => "二十".to_owned(),
        30 => "三十".to_owned(),
        _ => {
            let tens = DAY_TENS[usize::from(day / 10) % DAY_TENS.len()];
            tens.to_owned() + DAY_UNITS[usize::from(day % 10)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_label() {
        assert_eq!(year_label(1988), "1988年");
    }

    #[test]
    fn test_month_label() {
        for (std, m) in [
            ("正月", 1),
            ("二月", 2),
            ("十月", 10),
            ("十一月", 11),
            ("腊月", 12),
            ("正月", 13),
        ] {
            assert_eq!(std, month_label(m));
        }
    }

    #[test]
    fn test_day_label() {
        for (std, d) in [
            ("初一", 1),
            ("初九", 9),
            ("初十", 10),
            ("十一", 11),
            ("十九", 19),
            ("二十", 20),
            ("廿一", 21),
            ("廿九", 29),
            ("三十", 30),
        ] {
            assert_eq!(std, day_label(d));
        }
    }
}
