//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Text format used for both input and display of birthdays.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// chrono alone accepts single-digit days and months and signed years.
static BIRTHDAY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile birthday regex")
});

/// A birthday that is known not to lie in the future.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use contact_assistant::domain::Birthday;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let birthday = Birthday::parse_as_of("15.03.1990", today).unwrap();
/// assert_eq!(birthday.to_string(), "15.03.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a `DD.MM.YYYY` birthday, checked against the local date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDateFormat` for malformed text or an
    /// impossible date, and `ValidationError::FutureBirthday` for a date
    /// after today.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        Self::parse_as_of(text, Local::now().date_naive())
    }

    /// Parse a `DD.MM.YYYY` birthday, checked against an explicit `today`.
    pub fn parse_as_of(text: &str, today: NaiveDate) -> Result<Self, ValidationError> {
        if !BIRTHDAY_REGEX.is_match(text) {
            return Err(ValidationError::InvalidDateFormat(text.to_string()));
        }

        let date = NaiveDate::parse_from_str(text, BIRTHDAY_FORMAT)
            .map_err(|_| ValidationError::InvalidDateFormat(text.to_string()))?;

        if date > today {
            return Err(ValidationError::FutureBirthday(text.to_string()));
        }

        Ok(Self(date))
    }

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The anniversary of this birthday in `year`.
    ///
    /// February 29 falls on March 1 in non-leap years.
    pub fn occurrence_in(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
            .unwrap_or(self.0)
    }

    /// The first anniversary on or after `today`.
    ///
    /// Once this year's anniversary has passed, next year's is returned, so a
    /// January birthday is still found when asked in late December.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let this_year = self.occurrence_in(today.year());
        if this_year >= today {
            this_year
        } else {
            self.occurrence_in(today.year() + 1)
        }
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
