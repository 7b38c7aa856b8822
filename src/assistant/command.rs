//! Command names and line parsing.

use std::str::FromStr;

/// A command the assistant understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Phone,
    Change,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Delete,
    RemovePhone,
    Help,
    /// `close` or `exit`
    Exit,
    /// Anything else, kept as typed (lower-cased)
    Unknown(String),
}

impl Command {
    /// Every known command with its usage line, in help order.
    pub const USAGE: [(&'static str, &'static str); 12] = [
        ("hello", "hello"),
        ("add", "add <name> <phone>"),
        ("change", "change <name> <old_phone> <new_phone>"),
        ("phone", "phone <name>"),
        ("remove-phone", "remove-phone <name> <phone>"),
        ("delete", "delete <name>"),
        ("all", "all"),
        ("add-birthday", "add-birthday <name> <DD.MM.YYYY>"),
        ("show-birthday", "show-birthday <name>"),
        ("birthdays", "birthdays"),
        ("help", "help"),
        ("close", "close | exit"),
    ];

    /// Canonical name of the command.
    pub fn name(&self) -> &str {
        match self {
            Command::Hello => "hello",
            Command::Add => "add",
            Command::Phone => "phone",
            Command::Change => "change",
            Command::All => "all",
            Command::AddBirthday => "add-birthday",
            Command::ShowBirthday => "show-birthday",
            Command::Birthdays => "birthdays",
            Command::Delete => "delete",
            Command::RemovePhone => "remove-phone",
            Command::Help => "help",
            Command::Exit => "close",
            Command::Unknown(name) => name,
        }
    }

    /// Usage line shown for missing arguments.
    pub fn usage(&self) -> &'static str {
        let name = self.name();
        Self::USAGE
            .iter()
            .find(|(command, _)| *command == name)
            .map(|(_, usage)| *usage)
            .unwrap_or("help")
    }
}

impl FromStr for Command {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Ok(match name.as_str() {
            "hello" => Command::Hello,
            "add" => Command::Add,
            "phone" => Command::Phone,
            "change" => Command::Change,
            "all" => Command::All,
            "add-birthday" => Command::AddBirthday,
            "show-birthday" => Command::ShowBirthday,
            "birthdays" => Command::Birthdays,
            "delete" => Command::Delete,
            "remove-phone" => Command::RemovePhone,
            "help" => Command::Help,
            "close" | "exit" => Command::Exit,
            _ => Command::Unknown(name),
        })
    }
}

/// Split a line into a command and its positional arguments.
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(Command, Vec<&str>)> {
    let mut tokens = line.split_whitespace();
    let command = match tokens.next()?.parse::<Command>() {
        Ok(command) => command,
        Err(never) => match never {},
    };
    Some((command, tokens.collect()))
}
