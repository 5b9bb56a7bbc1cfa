//! Command handlers: orchestrate the address book and format results.
//!
//! Each handler returns `BookResult<String>`; [`dispatch`] converts any
//! error into its display string so the loop always has something to print.
//! The core types never print themselves.

use super::Command;
use crate::domain::Phone;
use crate::error::{BookError, BookResult};
use crate::models::{AddressBook, Record};

/// Run one command against the book and render the outcome as text.
///
/// `default_window` is the configured day span used when `birthdays` is
/// given without an explicit count.
pub fn dispatch(book: &mut AddressBook, command: &Command, default_window: i64) -> String {
    let result = match command {
        Command::Hello => Ok("How can I help you?".to_string()),
        Command::Add { name, phone } => add_contact(book, name, phone),
        Command::Change { name, phone } => change_contact(book, name, phone),
        Command::Phone { name } => show_phone(book, name),
        Command::All => Ok(show_all(book)),
        Command::AddBirthday { name, date } => add_birthday(book, name, date),
        Command::ShowBirthday { name } => show_birthday(book, name),
        Command::Birthdays { days } => birthdays(book, days.unwrap_or(default_window)),
        Command::Exit => Ok("Good bye!".to_string()),
    };

    result.unwrap_or_else(|e| e.to_string())
}

/// `add NAME PHONE`: create the record if needed, then attach the phone.
///
/// The phone is validated before any mutation, so a bad number never
/// creates an empty contact.
fn add_contact(book: &mut AddressBook, name: &str, phone: &str) -> BookResult<String> {
    let phone = Phone::new(phone)?;

    match book.find_mut(name) {
        Some(record) => {
            record.add_phone(phone.as_str())?;
            Ok("Contact updated.".to_string())
        }
        None => {
            let mut record = Record::new(name);
            record.add_phone(phone.as_str())?;
            book.add_record(record);
            Ok("Contact added.".to_string())
        }
    }
}

/// `change NAME PHONE`: replace the contact's first phone number.
///
/// The replacement is validated here; `Record::edit_phone` itself writes
/// the value as-is.
fn change_contact(book: &mut AddressBook, name: &str, new_phone: &str) -> BookResult<String> {
    let new_phone = Phone::new(new_phone)?;

    let record = book
        .find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

    let Some(old_phone) = record.phones().first().map(|p| p.as_str().to_string()) else {
        return Ok("No phones to change.".to_string());
    };

    record.edit_phone(&old_phone, new_phone.as_str())?;
    Ok("Contact updated.".to_string())
}

/// `phone NAME`: list the contact's phone numbers.
fn show_phone(book: &AddressBook, name: &str) -> BookResult<String> {
    let record = book
        .find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

    Ok(record
        .phones()
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(", "))
}

/// `all`: one rendered line per contact.
fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "The contact list is empty.".to_string();
    }

    book.records()
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// `add-birthday NAME DATE`: set or overwrite the contact's birthday.
fn add_birthday(book: &mut AddressBook, name: &str, date: &str) -> BookResult<String> {
    let record = book
        .find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

    record.set_birthday(date)?;
    Ok("Birthday added/updated.".to_string())
}

/// `show-birthday NAME`: the contact's birthday, if any.
fn show_birthday(book: &AddressBook, name: &str) -> BookResult<String> {
    let record = book
        .find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

    Ok(match record.birthday() {
        Some(birthday) => format!("{}'s birthday: {}", record.name(), birthday),
        None => format!("No birthday set for {}.", record.name()),
    })
}

/// `birthdays [DAYS]`: upcoming congratulation dates within the window.
fn birthdays(book: &AddressBook, days: i64) -> BookResult<String> {
    let upcoming = book.upcoming_birthdays(days)?;

    if upcoming.is_empty() {
        return Ok("No upcoming birthdays found.".to_string());
    }

    Ok(upcoming
        .iter()
        .map(|entry| format!("{}: {}", entry.name, entry.birthday))
        .collect::<Vec<_>>()
        .join("\n"))
}
