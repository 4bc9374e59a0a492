//! Festival names keyed by `MMDD`, for solar or lunar dates.
//!
//! Festival lists persist as plain text, one `MMDD name` pair per line.
//! Blank lines and lines starting with `#` are ignored.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize, Serializer};

use crate::lunar::LunarDate;
use crate::solar::SolarDate;

/// Key of the last day of the lunar year, whatever its day number.
pub const NEW_YEARS_EVE_KEY: &str = "0100";

const COMMENT_PREFIX: char = '#';

const SOLAR_FESTIVALS: [(&str, &str); 23] = [
    ("0101", "元旦"),
    ("0214", "情人节"),
    ("0308", "妇女节"),
    ("0312", "植树节"),
    ("0401", "愚人节"),
    ("0422", "地球日"),
    ("0501", "劳动节"),
    ("0504", "青年节"),
    ("0531", "无烟日"),
    ("0601", "儿童节"),
    ("0606", "爱眼日"),
    ("0701", "建党日"),
    ("0707", "抗战纪念日"),
    ("0801", "建军节"),
    ("0910", "教师节"),
    ("0918", "九·一八事变纪念日"),
    ("1001", "国庆节"),
    ("1031", "万圣节"),
    ("1111", "光棍节"),
    ("1201", "艾滋病日"),
    ("1213", "南京大屠杀纪念日"),
    ("1224", "平安夜"),
    ("1225", "圣诞节"),
];

const LUNAR_FESTIVALS: [(&str, &str); 11] = [
    ("0101", "春节"),
    ("0115", "元宵节"),
    ("0202", "龙抬头"),
    ("0505", "端午节"),
    ("0707", "七夕"),
    ("0715", "中元节"),
    ("0815", "中秋节"),
    ("0909", "重阳节"),
    ("1208", "腊八节"),
    ("1223", "小年"),
    (NEW_YEARS_EVE_KEY, "除夕"),
];

/// Error type for festival list I/O.
#[derive(Debug, thiserror::Error)]
pub enum FestivalError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A non-blank line without a name column.
    #[error("Malformed festival line {line}: {content:?}")]
    MalformedLine { line: usize, content: String },

    /// A key that is not four ASCII digits.
    #[error("Invalid festival key {0:?} (expected MMDD)")]
    InvalidKey(String),
}

/// Festival names keyed by `MMDD`.
///
/// Serializes as a plain map; deserialization checks every key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "BTreeMap<String, String>")]
pub struct FestivalMap {
    entries: BTreeMap<String, String>,
}

impl Serialize for FestivalMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

impl TryFrom<BTreeMap<String, String>> for FestivalMap {
    type Error = FestivalError;

    fn try_from(entries: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        for key in entries.keys() {
            check_key(key)?;
        }
        Ok(Self { entries })
    }
}

/// `MMDD` key of a month and day, zero-padded.
pub fn month_day_key(month: u8, day: u8) -> String {
    format!("{month:02}{day:02}")
}

fn check_key(key: &str) -> Result<(), FestivalError> {
    if key.len() == 4 && key.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(FestivalError::InvalidKey(key.to_owned()))
    }
}

impl FestivalMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in Gregorian holidays and observances.
    pub fn solar_defaults() -> Self {
        Self::from_static(&SOLAR_FESTIVALS)
    }

    /// Built-in lunar festivals, including New Year's Eve under
    /// [`NEW_YEARS_EVE_KEY`].
    pub fn lunar_defaults() -> Self {
        Self::from_static(&LUNAR_FESTIVALS)
    }

    fn from_static(pairs: &[(&str, &str)]) -> Self {
        let entries = pairs
            .iter()
            .map(|&(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Self { entries }
    }

    /// Adds or replaces a festival, returning the previous name.
    ///
    /// # Errors
    /// Returns `FestivalError::InvalidKey` unless `key` is four ASCII digits.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Option<String>, FestivalError> {
        let key = key.into();
        check_key(&key)?;
        Ok(self.entries.insert(key, name.into()))
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Reads a festival list from a text file.
    ///
    /// # Errors
    /// Returns `FestivalError::Io` if the file cannot be read and
    /// `FestivalError::MalformedLine` / `FestivalError::InvalidKey` for bad lines.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FestivalError> {
        let path = path.as_ref();
        let map = Self::read_from(BufReader::new(File::open(path)?))?;
        tracing::debug!(path = %path.display(), count = map.len(), "loaded festival list");
        Ok(map)
    }

    /// Parses a festival list. The name is everything after the first run of
    /// whitespace, so names may contain spaces.
    ///
    /// # Errors
    /// See [`FestivalMap::load`].
    pub fn read_from(reader: impl BufRead) -> Result<Self, FestivalError> {
        let mut map = Self::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX) {
                continue;
            }
            let Some((key, name)) = trimmed
                .split_once(char::is_whitespace)
                .map(|(k, v)| (k, v.trim()))
                .filter(|(_, v)| !v.is_empty())
            else {
                return Err(FestivalError::MalformedLine {
                    line:    idx + 1,
                    content: line,
                });
            };
            if let Some(previous) = map.insert(key, name)? {
                tracing::debug!(key, previous = %previous, name, "festival key repeated, keeping the last");
            }
        }
        Ok(map)
    }

    /// Writes the list to a text file in key order, replacing it.
    ///
    /// # Errors
    /// Returns `FestivalError::Io` on any write failure.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), FestivalError> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.flush()?;
        tracing::debug!(path = %path.display(), count = self.len(), "saved festival list");
        Ok(())
    }

    /// Writes one `MMDD name` line per entry, in key order.
    ///
    /// # Errors
    /// Returns `FestivalError::Io` on any write failure.
    pub fn write_to(&self, mut writer: impl Write) -> Result<(), FestivalError> {
        for (key, name) in self.iter() {
            writeln!(writer, "{key} {name}")?;
        }
        Ok(())
    }
}

impl SolarDate {
    /// Festival on this Gregorian month and day, if any.
    pub fn festival<'a>(&self, map: &'a FestivalMap) -> Option<&'a str> {
        map.get(&month_day_key(self.month(), self.day()))
    }
}

impl LunarDate {
    /// Festival on this lunar month and day, if any. The last day of the
    /// year also matches [`NEW_YEARS_EVE_KEY`]. Leap months have no festivals.
    pub fn festival<'a>(&self, map: &'a FestivalMap) -> Option<&'a str> {
        if self.is_leap() {
            return None;
        }
        map.get(&month_day_key(self.month(), self.day())).or_else(|| {
            self.is_last_day_of_year()
                .then(|| map.get(NEW_YEARS_EVE_KEY))
                .flatten()
        })
    }
}
