//! Address Book Assistant - an interactive command-line contact manager.
//!
//! The assistant stores names, phone numbers and birthdays, answers lookups,
//! lists upcoming birthdays (moving weekend dates to Monday) and keeps the
//! whole address book in a snapshot file between sessions.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: The contact record and the address book
//! - **services**: Birthday reminder computation
//! - **repositories**: Loading and saving the address book
//! - **assistant**: Command parsing, handlers and the interactive loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod assistant;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;

pub use assistant::{run_repl, Flow, Reply, Session};
pub use config::Config;
pub use error::{CommandError, ConfigError, RecordError, StorageError};
pub use models::{AddressBook, Record};
pub use repositories::{AddressBookRepository, JsonFileRepository};
pub use services::UpcomingBirthday;
