//! Record model holding one contact's data.

use crate::domain::{Birthday, Name, PhoneNumber, ValidationError};
use crate::error::RecordError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact in the address book: a name, its phone numbers and an
/// optional birthday.
///
/// Phones keep the order they were added in. Duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create an empty record for `name`.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The stored birthday, if any.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `phone` and append it.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        self.phones.push(PhoneNumber::new(phone)?);
        Ok(())
    }

    /// Remove the first phone equal to `phone`.
    ///
    /// Returns whether a phone was removed.
    pub fn remove_phone(&mut self, phone: &str) -> bool {
        match self.position_of(phone) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// `new` is validated even when `old` is absent. Returns whether a phone
    /// was replaced.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool, ValidationError> {
        let replacement = PhoneNumber::new(new)?;
        match self.position_of(old) {
            Some(index) => {
                self.phones[index] = replacement;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Validate `date` and overwrite the birthday.
    pub fn set_birthday(&mut self, date: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(date)?);
        Ok(())
    }

    /// The stored birthday.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::BirthdayNotSet` when no birthday was set.
    pub fn get_birthday(&self) -> Result<&Birthday, RecordError> {
        self.birthday.as_ref().ok_or_else(|| RecordError::BirthdayNotSet {
            name: self.name.to_string(),
        })
    }

    fn position_of(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == phone)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(PhoneNumber::as_str).collect();
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            phones.join("; ")
        )
    }
}
