//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the values an address book
//! stores: contact names, phone numbers and birthdays. Each one validates at
//! construction time, so an invalid value can never be held by a record.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use name::Name;
pub use phone::PhoneNumber;
