//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Textual form every birthday is entered and stored in.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

static BIRTHDAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("Failed to compile birthday pattern")
});

/// A birth date entered as `DD.MM.YYYY`.
///
/// The text must match the pattern exactly (two-digit day and month,
/// four-digit year) and name a real calendar date, so `31.02.1990` is
/// rejected just like `1990-02-01`.
///
/// # Example
///
/// ```
/// use address_book_assistant::domain::Birthday;
///
/// let birthday = Birthday::new("15.03.1990").unwrap();
/// assert_eq!(birthday.as_str(), "15.03.1990");
/// assert!(Birthday::new("15.3.1990").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    text: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday, validating the format and the calendar date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text does not match
    /// `DD.MM.YYYY` or does not denote an existing date.
    pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();

        if !BIRTHDAY_PATTERN.is_match(&text) {
            return Err(ValidationError::InvalidBirthday(text));
        }

        match NaiveDate::parse_from_str(&text, BIRTHDAY_FORMAT) {
            Ok(date) => Ok(Self { text, date }),
            Err(_) => Err(ValidationError::InvalidBirthday(text)),
        }
    }

    /// Get the birthday as it was entered.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Get the parsed birth date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The first anniversary on or after `today`.
    ///
    /// Leap-day birthdays fall on February 28 in non-leap years. Returns
    /// `None` only when the anniversary lies outside chrono's date range.
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        let this_year = self.anniversary_in(today.year())?;
        if this_year >= today {
            return Some(this_year);
        }
        self.anniversary_in(today.year().checked_add(1)?)
    }

    fn anniversary_in(&self, year: i32) -> Option<NaiveDate> {
        let (month, day) = (self.date.month(), self.date.day());
        match NaiveDate::from_ymd_opt(year, month, day) {
            Some(date) => Some(date),
            None if month == 2 && day == 29 => NaiveDate::from_ymd_opt(year, 2, 28),
            None => None,
        }
    }
}

// Serde support - serialize as the entered text
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.text.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
