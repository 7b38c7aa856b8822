//! AddressBook model: the store of contact records keyed by name.

use crate::models::Record;
use crate::services::birthday_service::{self, UpcomingBirthday};
use chrono::NaiveDate;
use std::collections::HashMap;

/// All contacts of one user, keyed by name.
///
/// Iteration follows insertion order. Adding a record under a name that is
/// already present replaces that record in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record`, overwriting any record with the same name.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().to_string();
        if self.records.insert(key.clone(), record).is_none() {
            self.order.push(key);
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove and return the record for `name`, if present.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.remove(name)?;
        self.order.retain(|key| key != name);
        Some(removed)
    }

    /// Records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    /// One summary line per contact, in insertion order.
    pub fn all_contacts(&self) -> Vec<String> {
        self.records().map(Record::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts to congratulate within `window_days` of `today`.
    ///
    /// See [`birthday_service::upcoming_birthdays`] for the window and
    /// weekend rules.
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: u32) -> Vec<UpcomingBirthday> {
        birthday_service::upcoming_birthdays(self.records(), today, window_days)
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}
