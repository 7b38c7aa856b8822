//! Birthday reminder service.
//!
//! Date arithmetic behind the "upcoming birthdays" query: finding the next
//! anniversary of each birthday and moving weekend dates to Monday.

use crate::models::Record;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;
use std::fmt;

/// Default length of the reminder window, in days.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Output format of congratulation dates.
pub const CONGRATULATION_FORMAT: &str = "%Y.%m.%d";

/// A contact whose birthday falls inside the reminder window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// Day to congratulate on, never a Saturday or Sunday
    #[serde(serialize_with = "serialize_congratulation_date")]
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    /// The congratulation date as `YYYY.MM.DD`.
    pub fn formatted_date(&self) -> String {
        self.congratulation_date
            .format(CONGRATULATION_FORMAT)
            .to_string()
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.formatted_date())
    }
}

fn serialize_congratulation_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(&date.format(CONGRATULATION_FORMAT))
}

/// Move a Saturday or Sunday to the following Monday.
pub fn congratulation_date(occurrence: NaiveDate) -> NaiveDate {
    match occurrence.weekday() {
        Weekday::Sat => occurrence + Duration::days(2),
        Weekday::Sun => occurrence + Duration::days(1),
        _ => occurrence,
    }
}

/// Collect the birthdays occurring in `[today, today + window_days)`.
///
/// Records without a birthday are skipped. Output keeps the order of
/// `records`.
pub fn upcoming_birthdays<'a, I>(
    records: I,
    today: NaiveDate,
    window_days: u32,
) -> Vec<UpcomingBirthday>
where
    I: IntoIterator<Item = &'a Record>,
{
    let window = i64::from(window_days);

    records
        .into_iter()
        .filter_map(|record| {
            let occurrence = record.birthday()?.next_occurrence(today)?;
            let days_until = (occurrence - today).num_days();
            if days_until >= window {
                return None;
            }
            Some(UpcomingBirthday {
                name: record.name().to_string(),
                congratulation_date: congratulation_date(occurrence),
            })
        })
        .collect()
}
