//! Subcommand implementations. Each prints one result as text or JSON.

use std::fmt;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use lunar_calendar::{FestivalMap, GanZhi, LunarDate, SolarDate, solar_terms, zodiac_animal};

/// ISO weekday names, Monday first.
const WEEKDAYS: [&str; 7] = ["一", "二", "三", "四", "五", "六", "日"];

/// Output settings shared by all subcommands.
pub struct Output {
    pub json:            bool,
    pub solar_festivals: FestivalMap,
    pub lunar_festivals: FestivalMap,
}

impl Output {
    fn print<T: Serialize>(&self, value: &T, text: impl FnOnce() -> String) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            println!("{}", text());
        }
        Ok(())
    }
}

pub fn to_lunar(out: &Output, date: SolarDate) -> Result<()> {
    info!(%date, "converting to lunar");
    let lunar = date
        .to_lunar()
        .with_context(|| format!("cannot convert {date}"))?;
    out.print(&lunar, || lunar.to_string())
}

pub fn to_solar(out: &Output, date: LunarDate) -> Result<()> {
    info!(%date, "converting to solar");
    let solar = date
        .to_solar()
        .with_context(|| format!("cannot convert {date}"))?;
    out.print(&solar, || solar.to_string())
}

pub fn info(out: &Output, date: SolarDate) -> Result<()> {
    let details = DateInfo::collect(out, date)?;
    out.print(&details, || details.to_string())
}

pub fn terms(out: &Output, year: u16) -> Result<()> {
    let terms = solar_terms(year).with_context(|| format!("no solar terms for {year}"))?;
    debug!(year, count = terms.len(), "resolved solar terms");
    out.print(&terms, || {
        terms
            .iter()
            .map(|t| format!("{:02}-{:02} {}", t.date.month(), t.date.day(), t.name))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

/// Every attribute of one Gregorian date.
#[derive(Debug, Serialize)]
struct DateInfo<'a> {
    solar:          SolarDate,
    weekday:        u8,
    lunar:          LunarDate,
    lunar_label:    String,
    gan_zhi:        GanZhi,
    gan_zhi_label:  String,
    zodiac:         &'static str,
    solar_term:     Option<&'static str>,
    solar_festival: Option<&'a str>,
    lunar_festival: Option<&'a str>,
}

impl<'a> DateInfo<'a> {
    fn collect(out: &'a Output, solar: SolarDate) -> Result<Self> {
        let lunar = solar
            .to_lunar()
            .with_context(|| format!("cannot convert {solar}"))?;
        let gan_zhi = solar.gan_zhi()?;
        Ok(Self {
            solar,
            weekday: solar.day_of_week(),
            lunar,
            lunar_label: lunar.to_string(),
            gan_zhi,
            gan_zhi_label: gan_zhi.to_string(),
            zodiac: zodiac_animal(lunar.year()),
            solar_term: solar.solar_term(),
            solar_festival: solar.festival(&out.solar_festivals),
            lunar_festival: lunar.festival(&out.lunar_festivals),
        })
    }
}

impl fmt::Display for DateInfo<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let weekday = WEEKDAYS[usize::from(self.weekday - 1) % WEEKDAYS.len()];
        writeln!(f, "公历 {} 星期{weekday}", self.solar)?;
        writeln!(f, "农历 {}", self.lunar_label)?;
        writeln!(f, "干支 {}", self.gan_zhi_label)?;
        write!(f, "生肖 {}", self.zodiac)?;
        if let Some(term) = self.solar_term {
            write!(f, "\n节气 {term}")?;
        }
        let festivals: Vec<&str> = [self.solar_festival, self.lunar_festival]
            .into_iter()
            .flatten()
            .collect();
        if !festivals.is_empty() {
            write!(f, "\n节日 {}", festivals.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output() -> Output {
        Output {
            json:            false,
            solar_festivals: FestivalMap::solar_defaults(),
            lunar_festivals: FestivalMap::lunar_defaults(),
        }
    }

    #[test]
    fn test_date_info_text() {
        let out = output();
        let date = SolarDate::new(1988, 3, 28, 9, 9, 9).unwrap();
        let text = DateInfo::collect(&out, date).unwrap().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "公历 1988年03月28日  9时 9分 9秒 星期一");
        assert_eq!(lines[1], "农历 1988年二月十一  9时 9分 9秒");
        assert_eq!(lines[3], "生肖 龙");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_date_info_festivals_and_term() {
        let out = output();
        // 2024-02-10 was lunar New Year's Day; 立春 fell on 02-04
        let info = DateInfo::collect(&out, SolarDate::from_ymd(2024, 2, 10).unwrap()).unwrap();
        assert_eq!(info.lunar_festival, Some("春节"));
        assert_eq!(info.solar_term, None);
        let term = DateInfo::collect(&out, SolarDate::from_ymd(2024, 2, 4).unwrap()).unwrap();
        assert_eq!(term.solar_term, Some("立春"));
        assert!(term.to_string().contains("节气 立春"));
    }

    #[test]
    fn test_date_info_january_2050() {
        let out = output();
        let info = DateInfo::collect(&out, SolarDate::from_ymd(2050, 1, 22).unwrap()).unwrap();
        assert_eq!(info.lunar.year(), 2049);
        assert_eq!(info.gan_zhi_label, "己巳年 丁丑月 壬寅日 庚子时");
        assert_eq!(info.lunar_festival, Some("除夕"));
    }

    #[test]
    fn test_date_info_out_of_range() {
        let out = output();
        assert!(DateInfo::collect(&out, SolarDate::from_ymd(1899, 6, 1).unwrap()).is_err());
    }

    #[test]
    fn test_date_info_json() {
        let out = output();
        let info = DateInfo::collect(&out, SolarDate::from_ymd(2024, 10, 1).unwrap()).unwrap();
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["solar_festival"], "国庆节");
        assert_eq!(json["zodiac"], "龙");
        assert_eq!(json["lunar"]["year"], 2024);
    }
}
