//! BirthDate value object and birthday calendar arithmetic.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Wire format for birth dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern is valid"));

/// A calendar date of birth, with no time component.
///
/// # Example
///
/// ```
/// use assistant_bot::domain::BirthDate;
///
/// let date: BirthDate = "1990-05-17".parse().unwrap();
/// assert_eq!(date.to_string(), "1990-05-17");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// Parse a `YYYY-MM-DD` string.
    ///
    /// The shape is checked first so that inputs chrono would tolerate
    /// (such as `1990-5-7`) are still rejected.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` for malformed or impossible dates.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if !DATE_PATTERN.is_match(input) {
            return Err(ValidationError::InvalidDate(input.to_string()));
        }
        NaiveDate::parse_from_str(input, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate(input.to_string()))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The anniversary of this birth date in `year`.
    ///
    /// A Feb 29 birthday falls on Mar 1 in years without a leap day.
    pub fn anniversary_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
    }

    /// The first anniversary falling on or after `today`.
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        let this_year = self.anniversary_in(today.year())?;
        if this_year >= today {
            Some(this_year)
        } else {
            self.anniversary_in(today.year() + 1)
        }
    }

    /// Whole days from `today` until the next anniversary.
    pub fn days_until_next(&self, today: NaiveDate) -> Option<i64> {
        self.next_occurrence(today)
            .map(|next| (next - today).num_days())
    }
}

impl From<NaiveDate> for BirthDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for BirthDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for BirthDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BirthDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BirthDate::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_valid() {
        let date = BirthDate::parse("1990-05-17").unwrap();
        assert_eq!(date.date(), ymd(1990, 5, 17));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(BirthDate::parse("").is_err());
        assert!(BirthDate::parse("17.05.1990").is_err());
        assert!(BirthDate::parse("1990-5-17").is_err());
        assert!(BirthDate::parse("1990-05-17T00:00").is_err());
        assert!(BirthDate::parse("1990-13-01").is_err());
        assert!(BirthDate::parse("2023-02-29").is_err());
    }

    #[test]
    fn test_parse_accepts_leap_day() {
        assert!(BirthDate::parse("2000-02-29").is_ok());
    }

    #[test]
    fn test_next_occurrence_later_this_year() {
        let birthday = BirthDate::from(ymd(1990, 12, 25));
        assert_eq!(
            birthday.next_occurrence(ymd(2024, 12, 20)),
            Some(ymd(2024, 12, 25))
        );
    }

    #[test]
    fn test_next_occurrence_today() {
        let birthday = BirthDate::from(ymd(1990, 3, 4));
        assert_eq!(birthday.days_until_next(ymd(2024, 3, 4)), Some(0));
    }

    #[test]
    fn test_next_occurrence_wraps_year() {
        let birthday = BirthDate::from(ymd(1990, 1, 2));
        assert_eq!(
            birthday.next_occurrence(ymd(2024, 12, 30)),
            Some(ymd(2025, 1, 2))
        );
        assert_eq!(birthday.days_until_next(ymd(2024, 12, 30)), Some(3));
    }

    #[test]
    fn test_leap_day_shifts_to_march_first() {
        let birthday = BirthDate::from(ymd(2000, 2, 29));
        assert_eq!(birthday.anniversary_in(2023), Some(ymd(2023, 3, 1)));
        assert_eq!(birthday.anniversary_in(2024), Some(ymd(2024, 2, 29)));
    }

    #[test]
    fn test_leap_day_wraps_into_non_leap_year() {
        let birthday = BirthDate::from(ymd(2000, 2, 29));
        // 2024-03-10 is past the 2024 leap day, so the next one is 2025-03-01
        assert_eq!(
            birthday.next_occurrence(ymd(2024, 3, 10)),
            Some(ymd(2025, 3, 1))
        );
    }

    #[test]
    fn test_display_keeps_zero_padding() {
        let birthday = BirthDate::parse("2001-01-09").unwrap();
        assert_eq!(birthday.to_string(), "2001-01-09");
    }

    #[test]
    fn test_serialization() {
        let birthday = BirthDate::parse("1990-05-17").unwrap();
        assert_eq!(serde_json::to_string(&birthday).unwrap(), "\"1990-05-17\"");
    }
}
