//! Data models for the address book.
//!
//! This module contains the record (one contact) and the address book (the
//! keyed collection of all records) together with the upcoming-birthdays
//! query result type.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, UpcomingBirthday};
pub use record::Record;
