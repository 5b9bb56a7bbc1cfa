//! Command parsing and dispatch for the interactive loop.
//!
//! Raw input lines are lowercased and whitespace-split into tokens, then
//! mapped onto a closed set of commands. Handlers orchestrate the address
//! book and produce user-facing text; every core error surfaces here as a
//! message, never as a panic.

pub mod handlers;

use std::fmt;

pub use handlers::dispatch;

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `hello`
    Hello,
    /// `add NAME PHONE`
    Add { name: String, phone: String },
    /// `change NAME PHONE` - replace the contact's first phone
    Change { name: String, phone: String },
    /// `phone NAME`
    Phone { name: String },
    /// `all`
    All,
    /// `add-birthday NAME DD.MM.YYYY`
    AddBirthday { name: String, date: String },
    /// `show-birthday NAME`
    ShowBirthday { name: String },
    /// `birthdays [DAYS]` - None means the configured default window
    Birthdays { days: Option<i64> },
    /// `close` / `exit` / `stop`
    Exit,
}

/// Why an input line did not yield a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line was blank.
    Empty,

    /// The first token is not a known command.
    Unknown,

    /// A known command is missing arguments; carries its usage line.
    Usage(&'static str),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Please enter a command."),
            Self::Unknown => write!(f, "Invalid command. Please try again."),
            Self::Usage(usage) => write!(f, "Usage: {}", usage),
        }
    }
}

impl std::error::Error for ParseError {}

impl Command {
    /// Parse one input line into a command.
    ///
    /// The whole line is lowercased before tokenizing, names included; a
    /// contact stored as `add Alice ...` is keyed as `alice`. This mirrors
    /// the assistant's original parsing and keeps lookups case-insensitive
    /// in practice.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let lowered = line.to_lowercase();
        let mut tokens = lowered.split_whitespace();

        let command = tokens.next().ok_or(ParseError::Empty)?;
        let args: Vec<&str> = tokens.collect();

        match command {
            "hello" => Ok(Self::Hello),
            "add" => match args.as_slice() {
                [name, phone, ..] => Ok(Self::Add {
                    name: name.to_string(),
                    phone: phone.to_string(),
                }),
                _ => Err(ParseError::Usage("add NAME PHONE")),
            },
            "change" => match args.as_slice() {
                [name, phone, ..] => Ok(Self::Change {
                    name: name.to_string(),
                    phone: phone.to_string(),
                }),
                _ => Err(ParseError::Usage("change NAME NEW_PHONE")),
            },
            "phone" => match args.as_slice() {
                [name, ..] => Ok(Self::Phone {
                    name: name.to_string(),
                }),
                _ => Err(ParseError::Usage("phone NAME")),
            },
            "all" => Ok(Self::All),
            "add-birthday" => match args.as_slice() {
                [name, date, ..] => Ok(Self::AddBirthday {
                    name: name.to_string(),
                    date: date.to_string(),
                }),
                _ => Err(ParseError::Usage("add-birthday NAME DD.MM.YYYY")),
            },
            "show-birthday" => match args.as_slice() {
                [name, ..] => Ok(Self::ShowBirthday {
                    name: name.to_string(),
                }),
                _ => Err(ParseError::Usage("show-birthday NAME")),
            },
            // A non-numeric (or negative) day count falls back to the
            // default window
            "birthdays" => Ok(Self::Birthdays {
                days: args
                    .first()
                    .filter(|arg| arg.bytes().all(|b| b.is_ascii_digit()))
                    .and_then(|arg| arg.parse::<i64>().ok()),
            }),
            "close" | "exit" | "stop" => Ok(Self::Exit),
            _ => Err(ParseError::Unknown),
        }
    }
}
