//! Command handlers.
//!
//! Each handler takes the positional arguments of one command and returns
//! either the text to print or a [`CommandError`]. Handlers never print and
//! never panic; the session turns errors into user messages.

use super::command::Command;
use crate::domain::Name;
use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record};
use chrono::NaiveDate;

/// Borrow the first `N` arguments, or fail with `MissingArgument`.
///
/// Extra arguments are ignored.
fn require<'a, const N: usize>(command: Command, args: &[&'a str]) -> CommandResult<[&'a str; N]> {
    match args.get(..N) {
        Some(head) => {
            let mut out = [""; N];
            out.copy_from_slice(head);
            Ok(out)
        }
        None => Err(CommandError::MissingArgument {
            usage: command.usage(),
        }),
    }
}

pub fn hello() -> String {
    "How can I help you?".to_string()
}

/// `add <name> <phone>`: create the contact if needed and append the phone.
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone] = require(Command::Add, args)?;

    match book.find_mut(name) {
        Some(record) => {
            record.add_phone(phone)?;
            Ok("Contact updated.".to_string())
        }
        None => {
            // Only stored once the phone is valid
            let mut record = Record::new(Name::new(name)?);
            record.add_phone(phone)?;
            book.add_record(record);
            Ok("Contact added.".to_string())
        }
    }
}

/// `phone <name>`: the contact summary.
pub fn show_phone(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let [name] = require(Command::Phone, args)?;
    book.find(name)
        .map(Record::to_string)
        .ok_or_else(|| CommandError::NameNotFound(name.to_string()))
}

/// `change <name> <old_phone> <new_phone>`.
pub fn change_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, old_phone, new_phone] = require(Command::Change, args)?;
    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::ContactDoesNotExist(name.to_string()))?;

    record.edit_phone(old_phone, new_phone)?;
    Ok("Contact updated.".to_string())
}

/// `remove-phone <name> <phone>`.
pub fn remove_phone(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone] = require(Command::RemovePhone, args)?;
    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::NameNotFound(name.to_string()))?;

    if record.remove_phone(phone) {
        Ok("Phone removed.".to_string())
    } else {
        Ok("Phone not found.".to_string())
    }
}

/// `delete <name>`.
pub fn delete_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name] = require(Command::Delete, args)?;
    book.delete(name)
        .map(|_| "Contact deleted.".to_string())
        .ok_or_else(|| CommandError::NameNotFound(name.to_string()))
}

/// `all`: one summary per line.
pub fn all_contacts(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts saved.".to_string();
    }
    book.all_contacts().join("\n")
}

/// `add-birthday <name> <DD.MM.YYYY>`: create the contact if needed and set
/// its birthday.
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, date] = require(Command::AddBirthday, args)?;

    match book.find_mut(name) {
        Some(record) => {
            record.set_birthday(date)?;
            Ok("Birthday updated.".to_string())
        }
        None => {
            let mut record = Record::new(Name::new(name)?);
            record.set_birthday(date)?;
            book.add_record(record);
            Ok("Birthday added.".to_string())
        }
    }
}

/// `show-birthday <name>`.
pub fn show_birthday(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let [name] = require(Command::ShowBirthday, args)?;
    let record = book
        .find(name)
        .ok_or_else(|| CommandError::NameNotFound(name.to_string()))?;

    Ok(record.get_birthday()?.to_string())
}

/// `birthdays`: contacts to congratulate within the window.
pub fn birthdays(book: &AddressBook, today: NaiveDate, window_days: u32) -> String {
    let upcoming = book.upcoming_birthdays(today, window_days);
    if upcoming.is_empty() {
        return "No upcoming birthdays.".to_string();
    }
    upcoming
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// `help`: the list of commands.
pub fn help() -> String {
    let mut lines = vec!["Available commands:".to_string()];
    for (_, usage) in Command::USAGE {
        lines.push(format!("  {}", usage));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    fn book_with_alice() -> AddressBook {
        let mut book = AddressBook::new();
        add_contact(&["Alice", "1234567890"], &mut book).unwrap();
        book
    }

    #[test]
    fn test_require_extracts_and_ignores_extra() {
        let [a, b] = require::<2>(Command::Add, &["x", "y", "z"]).unwrap();
        assert_eq!((a, b), ("x", "y"));
    }

    #[test]
    fn test_require_missing() {
        let err = require::<2>(Command::Add, &["x"]).unwrap_err();
        assert_eq!(
            err,
            CommandError::MissingArgument {
                usage: "add <name> <phone>"
            }
        );
    }

    #[test]
    fn test_add_contact_new_then_existing() {
        let mut book = AddressBook::new();
        assert_eq!(
            add_contact(&["Alice", "1234567890"], &mut book).unwrap(),
            "Contact added."
        );
        assert_eq!(
            add_contact(&["Alice", "0987654321"], &mut book).unwrap(),
            "Contact updated."
        );
        assert_eq!(book.find("Alice").unwrap().phones().len(), 2);
    }

    #[test]
    fn test_add_contact_invalid_phone_creates_nothing() {
        let mut book = AddressBook::new();
        let err = add_contact(&["Alice", "123"], &mut book).unwrap_err();
        assert_eq!(
            err,
            CommandError::Validation(ValidationError::InvalidPhone("123".to_string()))
        );
        assert!(book.is_empty());
    }

    #[test]
    fn test_show_phone() {
        let book = book_with_alice();
        assert_eq!(
            show_phone(&["Alice"], &book).unwrap(),
            "Contact name: Alice, phones: 1234567890"
        );
        assert_eq!(
            show_phone(&["Bob"], &book).unwrap_err(),
            CommandError::NameNotFound("Bob".to_string())
        );
    }

    #[test]
    fn test_change_contact() {
        let mut book = book_with_alice();
        assert_eq!(
            change_contact(&["Alice", "1234567890", "5555555555"], &mut book).unwrap(),
            "Contact updated."
        );
        let alice = book.find("Alice").unwrap();
        assert!(alice.find_phone("1234567890").is_none());
        assert!(alice.find_phone("5555555555").is_some());
    }

    #[test]
    fn test_change_unknown_contact() {
        let mut book = AddressBook::new();
        assert_eq!(
            change_contact(&["Bob", "1234567890", "5555555555"], &mut book).unwrap_err(),
            CommandError::ContactDoesNotExist("Bob".to_string())
        );
    }

    #[test]
    fn test_remove_phone_and_delete() {
        let mut book = book_with_alice();
        assert_eq!(
            remove_phone(&["Alice", "0000000000"], &mut book).unwrap(),
            "Phone not found."
        );
        assert_eq!(
            remove_phone(&["Alice", "1234567890"], &mut book).unwrap(),
            "Phone removed."
        );
        assert_eq!(
            delete_contact(&["Alice"], &mut book).unwrap(),
            "Contact deleted."
        );
        assert!(delete_contact(&["Alice"], &mut book).is_err());
    }

    #[test]
    fn test_add_birthday_invalid_date_creates_nothing() {
        let mut book = AddressBook::new();
        let err = add_birthday(&["Alice", "1990.03.15"], &mut book).unwrap_err();
        assert_eq!(err.user_message(), "Incorrect value");
        assert!(book.find("Alice").is_none());
    }

    #[test]
    fn test_birthday_handlers() {
        let mut book = AddressBook::new();
        assert_eq!(
            add_birthday(&["Alice", "15.03.1990"], &mut book).unwrap(),
            "Birthday added."
        );
        assert_eq!(
            add_birthday(&["Alice", "16.03.1990"], &mut book).unwrap(),
            "Birthday updated."
        );
        assert_eq!(show_birthday(&["Alice"], &book).unwrap(), "16.03.1990");
    }

    #[test]
    fn test_show_birthday_not_set() {
        let book = book_with_alice();
        let err = show_birthday(&["Alice"], &book).unwrap_err();
        assert_eq!(err.user_message(), "Birthday not set.");
    }

    #[test]
    fn test_all_contacts_empty_and_filled() {
        assert_eq!(all_contacts(&AddressBook::new()), "No contacts saved.");
        let mut book = book_with_alice();
        add_contact(&["Bob", "1111111111"], &mut book).unwrap();
        assert_eq!(
            all_contacts(&book),
            "Contact name: Alice, phones: 1234567890\nContact name: Bob, phones: 1111111111"
        );
    }

    #[test]
    fn test_help_lists_commands() {
        let text = help();
        assert!(text.contains("add-birthday <name> <DD.MM.YYYY>"));
        assert!(text.contains("close | exit"));
    }
}
