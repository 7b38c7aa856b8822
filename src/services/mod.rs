//! Service layer.
//!
//! Business logic that works across records rather than on a single value.

pub mod birthday_service;

pub use birthday_service::{congratulation_date, UpcomingBirthday, DEFAULT_WINDOW_DAYS};
