mod birthstone;
mod color;
mod consts;
mod pipeline;
mod prelude;
mod types;

pub use birthstone::{BIRTHSTONES, Birthstone, BirthstoneError, birthstone_for};
pub use color::{Color, ColorError};
pub use consts::*;
pub use pipeline::{ColorProfile, PipelineError, generate};
pub use types::{Day, Month, Year};

use crate::prelude::*;
use std::str::FromStr;
use types::days_from_civil;

/// A full calendar birth date, validated on construction. The text form is
/// the month-first `MM/DD/YYYY` format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:02}/{:02}/{:04}", "month.get()", "day.get()", "year.get()")]
pub struct BirthDate {
    year: types::Year,
    month: types::Month,
    day: types::Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0} (expected MM/DD/YYYY)")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {month:02}/{year:04}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl BirthDate {
    /// Creates a date from already-validated components.
    pub const fn new(year: types::Year, month: types::Month, day: types::Day) -> Self {
        Self { year, month, day }
    }

    /// Creates a date from raw month-first components, validating each.
    ///
    /// # Errors
    /// Returns the matching `ParseError` variant for the first invalid
    /// component (year checked before month, month before day).
    pub fn from_parts(month: u8, day: u8, year: u16) -> Result<Self, ParseError> {
        let year_t = types::Year::new(year)?;
        let month_t = types::Month::new(month)?;
        let day_t = types::Day::new(day, year, month)?;
        Ok(Self::new(year_t, month_t, day_t))
    }

    /// Returns the year as u16
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month as u8
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day of month as u8
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Proleptic Gregorian day number of this date (days since 1970-01-01,
    /// negative before it). Subtracting two day numbers gives an exact
    /// signed whole-day difference.
    pub const fn day_number(&self) -> i64 {
        days_from_civil(self.year.get(), self.month.get(), self.day.get())
    }

    /// Signed number of whole days from `other` to `self`.
    pub const fn days_since(&self, other: &Self) -> i64 {
        self.day_number() - other.day_number()
    }
}

impl FromStr for BirthDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        }

        // Non-numeric fields are format errors; range problems are caught
        // by the component constructors below.
        let month: u8 = parts[0]
            .parse()
            .map_err(|_| ParseError::InvalidFormat(trimmed.to_owned()))?;
        let day: u8 = parts[1]
            .parse()
            .map_err(|_| ParseError::InvalidFormat(trimmed.to_owned()))?;
        let year: u16 = parts[2]
            .parse()
            .map_err(|_| ParseError::InvalidFormat(trimmed.to_owned()))?;

        Self::from_parts(month, day, year)
    }
}

impl serde::Serialize for BirthDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for BirthDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_date() {
        let date = "07/17/2002".parse::<BirthDate>().unwrap();
        assert_eq!(date.year(), 2002);
        assert_eq!(date.month(), 7);
        assert_eq!(date.day(), 17);
    }

    #[test]
    fn test_parse_unpadded_fields() {
        let date = "7/17/2002".parse::<BirthDate>().unwrap();
        assert_eq!(date, "07/17/2002".parse::<BirthDate>().unwrap());
    }

    #[test]
    fn test_parse_with_whitespace() {
        let date = " 08 / 15 / 1991 ".parse::<BirthDate>().unwrap();
        assert_eq!(date.month(), 8);
        assert_eq!(date.day(), 15);
        assert_eq!(date.year(), 1991);
    }

    #[test]
    fn test_parse_empty() {
        let result = "".parse::<BirthDate>();
        assert!(matches!(result, Err(ParseError::EmptyInput)));

        let result = "   ".parse::<BirthDate>();
        assert!(matches!(result, Err(ParseError::EmptyInput)));
    }

    #[test]
    fn test_parse_wrong_field_count() {
        let result = "07/2002".parse::<BirthDate>();
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));

        let result = "07/17/2002/extra".parse::<BirthDate>();
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_non_numeric() {
        let result = "not-a-date".parse::<BirthDate>();
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));

        let result = "07/XX/2002".parse::<BirthDate>();
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));

        let result = "07/17/20O2".parse::<BirthDate>();
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_invalid_month() {
        let result = "13/01/2020".parse::<BirthDate>();
        assert!(matches!(result, Err(ParseError::InvalidMonth(13))));

        let result = "00/01/2020".parse::<BirthDate>();
        assert!(matches!(result, Err(ParseError::InvalidMonth(0))));
    }

    #[test]
    fn test_parse_invalid_day() {
        let result = "02/30/2020".parse::<BirthDate>();
        assert!(matches!(result, Err(ParseError::InvalidDay { .. })));

        let result = "04/31/2020".parse::<BirthDate>();
        assert!(matches!(
            result,
            Err(ParseError::InvalidDay {
                month: 4,
                day: 31,
                year: 2020
            })
        ));
    }

    #[test]
    fn test_parse_leap_day() {
        assert!("02/29/2020".parse::<BirthDate>().is_ok());
        assert!("02/29/2021".parse::<BirthDate>().is_err());
        assert!("02/29/1900".parse::<BirthDate>().is_err());
        assert!("02/29/2000".parse::<BirthDate>().is_ok());
    }

    #[test]
    fn test_parse_invalid_year() {
        let result = "07/17/0000".parse::<BirthDate>();
        assert!(matches!(result, Err(ParseError::InvalidYear(0))));
    }

    #[test]
    fn test_display_is_zero_padded() {
        let date = "7/3/0987".parse::<BirthDate>().unwrap();
        assert_eq!(date.to_string(), "07/03/0987");
    }

    #[test]
    fn test_day_number_matches_civil_count() {
        let date = "07/17/2002".parse::<BirthDate>().unwrap();
        assert_eq!(date.day_number(), 11885);
    }

    #[test]
    fn test_days_since_signed() {
        let base = "07/17/2002".parse::<BirthDate>().unwrap();
        let earlier = "01/01/2000".parse::<BirthDate>().unwrap();
        let later = "07/18/2002".parse::<BirthDate>().unwrap();

        assert_eq!(base.days_since(&base), 0);
        assert_eq!(earlier.days_since(&base), -928);
        assert_eq!(later.days_since(&base), 1);
    }

    #[test]
    fn test_ordering() {
        let a = "12/31/1999".parse::<BirthDate>().unwrap();
        let b = "01/01/2000".parse::<BirthDate>().unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_serde_string_format() {
        let date = "08/15/1991".parse::<BirthDate>().unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""08/15/1991""#);

        let parsed: BirthDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }

    #[test]
    fn test_serde_validation() {
        let result: Result<BirthDate, _> = serde_json::from_str(r#""13/01/2020""#);
        assert!(result.is_err());

        let result: Result<BirthDate, _> = serde_json::from_str(r#""02/30/2020""#);
        assert!(result.is_err());
    }
}
