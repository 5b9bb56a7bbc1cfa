//! AddressBook model: the keyed collection of all records.

use crate::error::{BookError, BookResult};
use crate::models::Record;
use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One row of the upcoming-birthdays report: the contact's name and the
/// weekend-adjusted congratulation date, rendered `DD.MM.YYYY`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub birthday: String,
}

/// The address book: records keyed by name, keys unique.
///
/// Iteration order is not semantically significant; callers must not rely
/// on it beyond being deterministic for a given set of keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record keyed by its name, replacing any record already
    /// stored under that name. Whether a replacement means "update" or
    /// "conflict" is the calling handler's policy, not the book's.
    ///
    /// Returns the replaced record, if any.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        self.records
            .insert(record.name().as_str().to_string(), record)
    }

    /// Look up a record by name. Never fails.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Mutable lookup for in-place edits.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record stored under `name`. Absence is not an error.
    ///
    /// Returns the removed record, if any.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.records.remove(name)
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over all records.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Contacts whose next birthday occurrence, after weekend adjustment,
    /// falls within `[today, today + days]`, using the local calendar date
    /// as today.
    pub fn upcoming_birthdays(&self, days: i64) -> BookResult<Vec<UpcomingBirthday>> {
        self.upcoming_birthdays_on(Local::now().date_naive(), days)
    }

    /// Like [`AddressBook::upcoming_birthdays`] with an explicit today.
    ///
    /// For every record with a birthday: take this year's occurrence of the
    /// month/day, roll to next year if it has already passed, then shift
    /// Saturday occurrences by +2 days and Sunday occurrences by +1 day so
    /// the congratulation date lands on a weekday. The shift can push a
    /// date past the window boundary; such contacts are excluded. A day
    /// count too large to represent on the calendar is treated as an
    /// unbounded window.
    ///
    /// # Errors
    ///
    /// `BookError::NoOccurrence` when a Feb 29 birthday has no occurrence
    /// in the target year. Fail-fast, not rolled to Mar 1.
    pub fn upcoming_birthdays_on(
        &self,
        today: NaiveDate,
        days: i64,
    ) -> BookResult<Vec<UpcomingBirthday>> {
        // A day count too large for the calendar means no upper bound
        let window_end = Duration::try_days(days)
            .and_then(|span| today.checked_add_signed(span))
            .unwrap_or(NaiveDate::MAX);

        let mut upcoming = Vec::new();

        for record in self.records.values() {
            let Some(birthday) = record.birthday() else {
                continue;
            };

            let mut occurrence = Self::occurrence_in(birthday.date(), today.year())?;
            if occurrence < today {
                occurrence = Self::occurrence_in(birthday.date(), today.year() + 1)?;
            }
            let adjusted = Self::adjust_for_weekend(occurrence);

            if today <= adjusted && adjusted <= window_end {
                upcoming.push(UpcomingBirthday {
                    name: record.name().as_str().to_string(),
                    birthday: adjusted.format("%d.%m.%Y").to_string(),
                });
            }
        }

        Ok(upcoming)
    }

    /// The birthday's occurrence in `year`, or `NoOccurrence` for Feb 29
    /// outside leap years.
    fn occurrence_in(birthday: NaiveDate, year: i32) -> BookResult<NaiveDate> {
        birthday.with_year(year).ok_or(BookError::NoOccurrence {
            date: birthday.format("%d.%m.%Y").to_string(),
            year,
        })
    }

    /// Shift Saturday +2 and Sunday +1 to the following Monday.
    fn adjust_for_weekend(date: NaiveDate) -> NaiveDate {
        match date.weekday() {
            Weekday::Sat => date + Duration::days(2),
            Weekday::Sun => date + Duration::days(1),
            _ => date,
        }
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record_with_birthday(name: &str, literal: &str) -> Record {
        let mut record = Record::new(name);
        record.set_birthday(literal).unwrap();
        record
    }

    #[test]
    fn test_add_record_replaces_same_name() {
        let mut book = AddressBook::new();
        let mut first = Record::new("alice");
        first.add_phone("1111111111").unwrap();
        book.add_record(first);

        let replaced = book.add_record(Record::new("alice"));
        assert!(replaced.is_some());
        assert_eq!(book.len(), 1);
        assert!(book.find("alice").unwrap().phones().is_empty());
    }

    #[test]
    fn test_find_absent_returns_none() {
        let book = AddressBook::new();
        assert!(book.find("ghost").is_none());
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("alice"));
        assert!(book.delete("ghost").is_none());
        assert_eq!(book.len(), 1);
        assert!(book.delete("alice").is_some());
        assert!(book.delete("alice").is_none());
        assert!(book.is_empty());
    }

    #[test]
    fn test_upcoming_includes_weekday_birthday_in_window() {
        // 2024-06-10 is a Monday, 2024-06-12 a Wednesday.
        let mut book = AddressBook::new();
        book.add_record(record_with_birthday("alice", "12.06.1990"));

        let upcoming = book.upcoming_birthdays_on(day(2024, 6, 10), 7).unwrap();
        assert_eq!(
            upcoming,
            vec![UpcomingBirthday {
                name: "alice".to_string(),
                birthday: "12.06.2024".to_string(),
            }]
        );
    }

    #[test]
    fn test_upcoming_shifts_saturday_to_monday() {
        // 2024-06-15 is a Saturday; shifted to Monday the 17th, still inside
        // the inclusive [10th, 17th] window.
        let mut book = AddressBook::new();
        book.add_record(record_with_birthday("bob", "15.06.1985"));

        let upcoming = book.upcoming_birthdays_on(day(2024, 6, 10), 7).unwrap();
        assert_eq!(upcoming[0].birthday, "17.06.2024");
    }

    #[test]
    fn test_upcoming_shifts_sunday_to_monday() {
        // 2024-06-16 is a Sunday; shifted to Monday the 17th.
        let mut book = AddressBook::new();
        book.add_record(record_with_birthday("carol", "16.06.1970"));

        let upcoming = book.upcoming_birthdays_on(day(2024, 6, 10), 7).unwrap();
        assert_eq!(upcoming[0].birthday, "17.06.2024");
    }

    #[test]
    fn test_weekend_shift_can_leave_window() {
        // Window [Mon 10th, Sat 15th]: the Saturday occurrence shifts to
        // Monday the 17th, past the boundary, and drops out.
        let mut book = AddressBook::new();
        book.add_record(record_with_birthday("bob", "15.06.1985"));

        let upcoming = book.upcoming_birthdays_on(day(2024, 6, 10), 5).unwrap();
        assert!(upcoming.is_empty());
    }

    #[test]
    fn test_passed_birthday_rolls_to_next_year() {
        // June 1st already passed; next occurrence is 2025-06-02... only
        // included if the window reaches it, which 7 days does not.
        let mut book = AddressBook::new();
        book.add_record(record_with_birthday("dan", "01.06.1999"));

        let upcoming = book.upcoming_birthdays_on(day(2024, 6, 10), 7).unwrap();
        assert!(upcoming.is_empty());

        // A window long enough to span the year boundary picks it up.
        let upcoming = book.upcoming_birthdays_on(day(2024, 6, 10), 366).unwrap();
        assert_eq!(upcoming[0].birthday, "02.06.2025"); // 2025-06-01 is a Sunday
    }

    #[test]
    fn test_todays_birthday_is_included() {
        let mut book = AddressBook::new();
        book.add_record(record_with_birthday("eve", "10.06.2000"));

        let upcoming = book.upcoming_birthdays_on(day(2024, 6, 10), 7).unwrap();
        assert_eq!(upcoming[0].birthday, "10.06.2024");
    }

    #[test]
    fn test_record_without_birthday_never_appears() {
        let mut book = AddressBook::new();
        let mut record = Record::new("frank");
        record.add_phone("1234567890").unwrap();
        book.add_record(record);

        let upcoming = book.upcoming_birthdays_on(day(2024, 6, 10), 3650).unwrap();
        assert!(upcoming.is_empty());
    }

    #[test]
    fn test_feb29_fails_fast_in_non_leap_year() {
        let mut book = AddressBook::new();
        book.add_record(record_with_birthday("leap", "29.02.2020"));

        let err = book
            .upcoming_birthdays_on(day(2023, 2, 1), 60)
            .unwrap_err();
        assert!(matches!(err, BookError::NoOccurrence { year: 2023, .. }));

        // In a leap year the occurrence resolves normally.
        // 2024-02-29 is a Thursday.
        let upcoming = book.upcoming_birthdays_on(day(2024, 2, 26), 7).unwrap();
        assert_eq!(upcoming[0].birthday, "29.02.2024");
    }

    #[test]
    fn test_huge_window_is_unbounded_not_a_panic() {
        let mut book = AddressBook::new();
        book.add_record(record_with_birthday("alice", "12.06.1990"));

        let upcoming = book
            .upcoming_birthdays_on(day(2024, 6, 10), i64::MAX)
            .unwrap();
        assert_eq!(upcoming.len(), 1);
    }

    #[test]
    fn test_negative_window_is_empty() {
        let mut book = AddressBook::new();
        book.add_record(record_with_birthday("eve", "10.06.2000"));

        let upcoming = book.upcoming_birthdays_on(day(2024, 6, 10), -1).unwrap();
        assert!(upcoming.is_empty());
    }

    #[test]
    fn test_book_serialization_roundtrip() {
        let mut book = AddressBook::new();
        let mut alice = Record::new("alice");
        alice.add_phone("1111111111").unwrap();
        alice.add_phone("2222222222").unwrap();
        alice.set_birthday("01.01.1990").unwrap();
        book.add_record(alice);
        book.add_record(Record::new("bob"));

        let json = serde_json::to_string(&book).unwrap();
        let back: AddressBook = serde_json::from_str(&json).unwrap();
        assert_eq!(back, book);
    }
}
