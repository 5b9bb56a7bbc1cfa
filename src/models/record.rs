//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, Phone};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One contact: a fixed name, an ordered list of distinct phone numbers,
/// and an optional birthday.
///
/// A record is created with a name only; phones and the birthday are
/// attached afterwards. The name never changes for the record's lifetime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    name: Name,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// All phone numbers, in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Validate `value` as a phone number and append it.
    ///
    /// # Errors
    ///
    /// `BookError::Validation` if the value is not a valid phone,
    /// `BookError::DuplicatePhone` if an equal number is already present.
    /// A failed add leaves the record unchanged.
    pub fn add_phone(&mut self, value: &str) -> BookResult<()> {
        let phone = Phone::new(value)?;

        if self.phones.contains(&phone) {
            return Err(BookError::DuplicatePhone(value.to_string()));
        }

        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone with a matching value. Absence is not an
    /// error: removing a number that is not there is a no-op.
    pub fn remove_phone(&mut self, value: &str) {
        if let Some(pos) = self.phones.iter().position(|p| p.as_str() == value) {
            self.phones.remove(pos);
        }
    }

    /// Replace the value of an existing phone in place.
    ///
    /// The new value is written as-is; callers validate it as a phone
    /// number beforehand (the command layer always does).
    ///
    /// # Errors
    ///
    /// `BookError::PhoneNotFound` if no phone matches `old_value`.
    pub fn edit_phone(&mut self, old_value: &str, new_value: &str) -> BookResult<()> {
        match self.phones.iter_mut().find(|p| p.as_str() == old_value) {
            Some(phone) => {
                phone.set_raw(new_value);
                Ok(())
            }
            None => Err(BookError::PhoneNotFound(old_value.to_string())),
        }
    }

    /// Find a phone by value.
    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    /// Parse `literal` as a birthday and set it, overwriting any existing
    /// one.
    ///
    /// # Errors
    ///
    /// The Birthday construction error on an invalid literal; the previous
    /// birthday is kept in that case.
    pub fn set_birthday(&mut self, literal: &str) -> BookResult<()> {
        self.birthday = Some(Birthday::new(literal)?);
        Ok(())
    }

    /// The contact's birthday, if set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }
}

/// Human-readable one-line rendering: name, semicolon-joined phones, and
/// the birthday when present.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
