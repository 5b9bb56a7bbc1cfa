//! Integration tests for the command layer's text contracts.
//!
//! Drives full lines through `Command::parse` + `dispatch`, the same path
//! the interactive loop takes.

use contact_assistant::commands::dispatch;
use contact_assistant::{AddressBook, Command, ParseError};

fn run(book: &mut AddressBook, line: &str) -> String {
    match Command::parse(line) {
        Ok(command) => dispatch(book, &command, 7),
        Err(e) => e.to_string(),
    }
}

#[test]
fn test_hello() {
    let mut book = AddressBook::new();
    assert_eq!(run(&mut book, "hello"), "How can I help you?");
}

#[test]
fn test_full_contact_session() {
    let mut book = AddressBook::new();

    assert_eq!(run(&mut book, "add alice 1111111111"), "Contact added.");
    assert_eq!(run(&mut book, "add alice 2222222222"), "Contact updated.");
    assert_eq!(run(&mut book, "phone alice"), "1111111111, 2222222222");

    assert_eq!(run(&mut book, "change alice 9998887776"), "Contact updated.");
    assert_eq!(run(&mut book, "phone alice"), "9998887776, 2222222222");

    assert_eq!(
        run(&mut book, "add-birthday alice 15.06.1990"),
        "Birthday added/updated."
    );
    assert_eq!(
        run(&mut book, "show-birthday alice"),
        "alice's birthday: 15.06.1990"
    );

    assert_eq!(
        run(&mut book, "all"),
        "Contact name: alice, phones: 9998887776; 2222222222, birthday: 15.06.1990"
    );
}

#[test]
fn test_errors_surface_as_text_not_panics() {
    let mut book = AddressBook::new();

    assert!(run(&mut book, "add alice 12ab").contains("Invalid phone number"));
    assert!(run(&mut book, "phone ghost").contains("Contact not found"));
    assert!(run(&mut book, "change ghost 1234567890").contains("Contact not found"));
    assert!(run(&mut book, "show-birthday ghost").contains("Contact not found"));

    run(&mut book, "add alice 1234567890");
    assert!(run(&mut book, "add-birthday alice 31.31.1990").contains("DD.MM.YYYY"));
    assert!(run(&mut book, "add-birthday alice 01.01.2999").contains("DD.MM.YYYY"));
}

#[test]
fn test_input_is_case_insensitive() {
    let mut book = AddressBook::new();
    run(&mut book, "ADD Alice 1111111111");
    // names are lowercased along with the command
    assert_eq!(run(&mut book, "phone alice"), "1111111111");
    assert_eq!(run(&mut book, "PHONE ALICE"), "1111111111");
}

#[test]
fn test_parse_failures_have_messages() {
    assert_eq!(Command::parse("").unwrap_err(), ParseError::Empty);
    assert_eq!(
        Command::parse("").unwrap_err().to_string(),
        "Please enter a command."
    );
    assert_eq!(
        Command::parse("nonsense").unwrap_err().to_string(),
        "Invalid command. Please try again."
    );
    assert_eq!(
        Command::parse("add alice").unwrap_err().to_string(),
        "Usage: add NAME PHONE"
    );
}

#[test]
fn test_birthdays_huge_day_count_does_not_crash() {
    let mut book = AddressBook::new();
    run(&mut book, "add alice 1111111111");
    run(&mut book, "add-birthday alice 01.01.1990");

    // a window beyond the calendar range behaves as unbounded, so the
    // next occurrence is always inside it
    let out = run(&mut book, "birthdays 9223372036854775807");
    assert!(out.starts_with("alice: "));
}

#[test]
fn test_birthdays_empty_book() {
    let mut book = AddressBook::new();
    assert_eq!(run(&mut book, "birthdays"), "No upcoming birthdays found.");
    // explicit window, same outcome on an empty book
    assert_eq!(run(&mut book, "birthdays 30"), "No upcoming birthdays found.");
}
