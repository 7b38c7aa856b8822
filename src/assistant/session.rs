//! Interactive session state and the per-line step function.

use super::command::{parse_input, Command};
use super::handlers;
use crate::error::{CommandResult, StorageResult};
use crate::models::AddressBook;
use crate::repositories::AddressBookRepository;
use chrono::{Local, NaiveDate};
use tracing::{debug, error, warn};

/// What the loop should do after a line was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line
    Continue,
    /// Stop; `saved` tells whether the book reached the repository
    Exit { saved: bool },
}

/// Result of handling one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Text to print, possibly empty
    pub output: String,
    pub flow: Flow,
}

impl Reply {
    fn proceed(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            flow: Flow::Continue,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self.flow, Flow::Exit { .. })
    }
}

/// A running assistant: the address book plus where it is persisted.
pub struct Session<R: AddressBookRepository> {
    book: AddressBook,
    repository: R,
    window_days: u32,
}

impl<R: AddressBookRepository> Session<R> {
    /// Load the book from `repository` and start a session.
    pub fn open(repository: R, window_days: u32) -> StorageResult<Self> {
        let book = repository.load()?;
        Ok(Self {
            book,
            repository,
            window_days,
        })
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Handle one line using the local date for birthday reminders.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        self.handle_line_on(line, Local::now().date_naive())
    }

    /// Handle one line as if it were `today`.
    pub fn handle_line_on(&mut self, line: &str, today: NaiveDate) -> Reply {
        let Some((command, args)) = parse_input(line) else {
            return Reply::proceed("");
        };
        debug!(
            command = command.name(),
            args = args.len(),
            "Dispatching command"
        );

        let result: CommandResult<String> = match command {
            Command::Exit => return self.close(),
            Command::Hello => Ok(handlers::hello()),
            Command::Help => Ok(handlers::help()),
            Command::Add => handlers::add_contact(&args, &mut self.book),
            Command::Phone => handlers::show_phone(&args, &self.book),
            Command::Change => handlers::change_contact(&args, &mut self.book),
            Command::RemovePhone => handlers::remove_phone(&args, &mut self.book),
            Command::Delete => handlers::delete_contact(&args, &mut self.book),
            Command::All => Ok(handlers::all_contacts(&self.book)),
            Command::AddBirthday => handlers::add_birthday(&args, &mut self.book),
            Command::ShowBirthday => handlers::show_birthday(&args, &self.book),
            Command::Birthdays => Ok(handlers::birthdays(&self.book, today, self.window_days)),
            Command::Unknown(ref name) => {
                debug!(command = %name, "Unknown command");
                Ok("Invalid command.".to_string())
            }
        };

        match result {
            Ok(output) => Reply::proceed(output),
            Err(e) => {
                debug!(command = command.name(), "Command failed: {}", e);
                Reply::proceed(e.user_message())
            }
        }
    }

    fn close(&mut self) -> Reply {
        match self.repository.save(&self.book) {
            Ok(()) => Reply {
                output: "Good bye!".to_string(),
                flow: Flow::Exit { saved: true },
            },
            Err(e) => {
                error!("Failed to save address book: {}", e);
                warn!("{} contacts were not saved", self.book.len());
                Reply {
                    output: format!("Good bye!\nCould not save contacts: {}", e),
                    flow: Flow::Exit { saved: false },
                }
            }
        }
    }
}
