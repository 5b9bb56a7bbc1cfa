//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the address book's scalar
//! fields: contact names, phone numbers, and birthdays. Phone and Birthday
//! validate at construction time so invalid data cannot be represented;
//! Name deliberately does not (see [`Name`]).

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use name::Name;
pub use phone::Phone;
