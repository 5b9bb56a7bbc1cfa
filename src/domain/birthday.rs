//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The display/parse format for birthday literals.
const DATE_FORMAT: &str = "%d.%m.%Y";

/// Exact shape of an accepted literal: two digits, dot, two digits, dot,
/// four digits.
static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("birthday pattern is valid"));

/// A contact's birthday, parsed from a `DD.MM.YYYY` literal.
///
/// Construction validates both the literal shape and the calendar date, and
/// rejects dates after today. Rendering is always canonical `DD.MM.YYYY`,
/// so a birthday round-trips exactly through display.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Birthday;
///
/// let birthday = Birthday::new("01.03.1995").unwrap();
/// assert_eq!(birthday.to_string(), "01.03.1995");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday from a `DD.MM.YYYY` literal, checked against
    /// the local calendar date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the literal does not
    /// match the pattern, names an impossible date, or lies after today.
    /// All three cases share one message.
    pub fn new(literal: &str) -> Result<Self, ValidationError> {
        Self::with_today(literal, Local::now().date_naive())
    }

    /// Like [`Birthday::new`] but with an explicit "today" for the
    /// future-date check.
    pub fn with_today(literal: &str, today: NaiveDate) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidBirthday(literal.to_string());

        if !DATE_PATTERN.is_match(literal) {
            return Err(invalid());
        }

        let date = NaiveDate::parse_from_str(literal, DATE_FORMAT).map_err(|_| invalid())?;

        if date > today {
            return Err(invalid());
        }

        Ok(Self(date))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

// Serde support - serialize as the canonical literal
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from the literal with full validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(&s).map_err(serde::de::Error::custom)
    }
}

// Display support - canonical DD.MM.YYYY
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
