//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// Both birthday failure modes (unparseable literal, future date) collapse
/// into the single `InvalidBirthday` variant so the user always sees the
/// same format hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// The provided birthday literal is invalid or lies in the future.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(phone) => {
                write!(f, "Invalid phone number '{}': must be exactly 10 digits", phone)
            }
            Self::InvalidBirthday(literal) => {
                write!(f, "Invalid birthday '{}': use DD.MM.YYYY", literal)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
