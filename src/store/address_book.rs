//! Name-keyed collection of contact records.

use crate::domain::ContactName;
use crate::models::Record;
use chrono::{Datelike, Days, NaiveDate};
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use tracing::debug;

/// Default length of the upcoming-birthdays window, in days.
pub const DEFAULT_WINDOW_DAYS: u64 = 7;

/// The address book: at most one record per (case-sensitive) name.
///
/// Records are kept in insertion order, which is the order `render_all`
/// and `iter` expose. Replacing a record keeps its original position.
/// Name lookups go through an index of positions kept beside the records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,

    /// Name -> position in `records`
    index: HashMap<String, usize>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a book from records, rejecting repeated names.
    ///
    /// On failure returns the first name that appears twice.
    pub fn try_from_records(records: Vec<Record>) -> Result<Self, ContactName> {
        let mut book = Self::new();
        book.records.reserve(records.len());
        book.index.reserve(records.len());
        for record in records {
            if book.position(record.name().as_str()).is_some() {
                return Err(record.name().clone());
            }
            book.push(record);
        }
        Ok(book)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    fn push(&mut self, record: Record) {
        self.index
            .insert(record.name().as_str().to_string(), self.records.len());
        self.records.push(record);
    }

    /// Insert a record, replacing any record with the same name.
    pub fn add(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(index) => {
                debug!(name = %record.name(), "replacing existing record");
                self.records[index] = record;
            }
            None => {
                debug!(name = %record.name(), "adding new record");
                self.push(record);
            }
        }
    }

    /// Exact-match lookup by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(self.position(name)?)
    }

    /// Exact-match lookup by name, for mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        let index = self.position(name)?;
        self.records.get_mut(index)
    }

    /// Remove the record with this name. Absent names are ignored.
    ///
    /// Returns `true` if a record was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let Some(removed) = self.index.remove(name) else {
            return false;
        };
        self.records.remove(removed);
        // Records after the removed one each moved down a slot.
        for position in self.index.values_mut() {
            if *position > removed {
                *position -= 1;
            }
        }
        debug!(name, "removed record");
        true
    }

    /// Records whose birthday falls within the next seven days of `reference`.
    pub fn upcoming_birthdays(&self, reference: NaiveDate) -> Vec<&Record> {
        self.upcoming_birthdays_within(reference, DEFAULT_WINDOW_DAYS)
    }

    /// Records whose birthday, moved into the reference year, lies in
    /// `[reference, reference + days]`.
    ///
    /// The birthday is only compared within the reference year, so a
    /// January birthday is never matched from a late-December reference.
    /// A 29 February birthday has no date in a non-leap year and is skipped.
    pub fn upcoming_birthdays_within(&self, reference: NaiveDate, days: u64) -> Vec<&Record> {
        let window_end = reference
            .checked_add_days(Days::new(days))
            .unwrap_or(NaiveDate::MAX);

        self.records
            .iter()
            .filter(|record| {
                let Some(birthday) = record.birthday() else {
                    return false;
                };
                match birthday.in_year(reference.year()) {
                    Some(date) => reference <= date && date <= window_end,
                    None => {
                        debug!(
                            name = %record.name(),
                            year = reference.year(),
                            "skipping leap-day birthday in non-leap year"
                        );
                        false
                    }
                }
            })
            .collect()
    }

    /// All record descriptions, one per line, in insertion order.
    pub fn render_all(&self) -> String {
        self.records
            .iter()
            .map(Record::describe)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// The index is derived from `records`, so only the records are written.
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.records.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32, month: u32, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn record_with_birthday(name: &str, birthday: &str) -> Record {
        let mut record = Record::new(name).unwrap();
        record.set_birthday(birthday).unwrap();
        record
    }

    fn names<'a>(records: &[&'a Record]) -> Vec<&'a str> {
        records.iter().map(|r| r.name().as_str()).collect()
    }

    #[test]
    fn test_add_and_find() {
        let mut book = AddressBook::new();
        let mut record = Record::new("Ann").unwrap();
        record.add_phone("0501234567").unwrap();
        book.add(record);

        let found = book.find("Ann").unwrap();
        assert_eq!(found.phones_line(), "0501234567");
        assert!(found.birthday().is_none());
        assert!(book.find("ann").is_none());
        assert!(book.find("An").is_none());
    }

    #[test]
    fn test_add_replaces_whole_record_in_place() {
        let mut book = AddressBook::new();
        let mut first = Record::new("Ann").unwrap();
        first.add_phone("0501234567").unwrap();
        book.add(first);
        book.add(Record::new("Bob").unwrap());

        book.add(Record::new("Ann").unwrap());

        assert_eq!(book.len(), 2);
        assert!(book.find("Ann").unwrap().phones().is_empty());
        assert_eq!(book.iter().next().unwrap().name().as_str(), "Ann");
    }

    #[test]
    fn test_find_mut_appends_phone() {
        let mut book = AddressBook::new();
        book.add(Record::new("Ann").unwrap());
        book.find_mut("Ann").unwrap().add_phone("0501234567").unwrap();
        book.find_mut("Ann").unwrap().add_phone("0501234567").unwrap();
        assert_eq!(book.find("Ann").unwrap().phones().len(), 2);
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut book = AddressBook::new();
        book.add(Record::new("Ann").unwrap());
        book.add(Record::new("Bob").unwrap());

        assert!(!book.remove("Carol"));
        assert_eq!(book.len(), 2);

        assert!(book.remove("Ann"));
        assert_eq!(book.len(), 1);
        assert!(book.find("Ann").is_none());
    }

    #[test]
    fn test_lookups_follow_records_after_removal() {
        let mut book = AddressBook::new();
        let contacts = [
            ("Ann", "0501111111"),
            ("Bob", "0502222222"),
            ("Cid", "0503333333"),
        ];
        for (name, phone) in contacts {
            let mut record = Record::new(name).unwrap();
            record.add_phone(phone).unwrap();
            book.add(record);
        }

        assert!(book.remove("Ann"));
        assert_eq!(book.find("Bob").unwrap().phones_line(), "0502222222");
        assert_eq!(book.find("Cid").unwrap().phones_line(), "0503333333");

        book.find_mut("Cid").unwrap().add_phone("0504444444").unwrap();
        assert_eq!(
            book.find("Cid").unwrap().phones_line(),
            "0503333333, 0504444444"
        );

        book.add(Record::new("Ann").unwrap());
        let order: Vec<&str> = book.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(order, vec!["Bob", "Cid", "Ann"]);
        assert!(book.find("Ann").unwrap().phones().is_empty());
    }

    #[test]
    fn test_large_book_lookups() {
        let records: Vec<Record> = (0..5_000)
            .map(|i| Record::new(&format!("Contact {i}")).unwrap())
            .collect();
        let mut book = AddressBook::try_from_records(records).unwrap();
        assert_eq!(book.len(), 5_000);

        assert!(book.remove("Contact 0"));
        for i in 1..5_000 {
            let name = format!("Contact {i}");
            assert_eq!(book.find(&name).unwrap().name().as_str(), name);
        }
        assert!(book.find("Contact 0").is_none());
    }

    #[test]
    fn test_upcoming_birthdays_window() {
        let mut book = AddressBook::new();
        book.add(record_with_birthday("Bob", "20.06.1990"));

        assert_eq!(names(&book.upcoming_birthdays(date(18, 6, 2024))), vec!["Bob"]);
        assert!(book.upcoming_birthdays(date(25, 6, 2024)).is_empty());
    }

    #[test]
    fn test_upcoming_birthdays_bounds_are_inclusive() {
        let mut book = AddressBook::new();
        book.add(record_with_birthday("Today", "10.03.1985"));
        book.add(record_with_birthday("LastDay", "17.03.1970"));
        book.add(record_with_birthday("TooLate", "18.03.1970"));
        book.add(record_with_birthday("Yesterday", "09.03.2001"));
        book.add(Record::new("NoBirthday").unwrap());

        let upcoming = book.upcoming_birthdays(date(10, 3, 2024));
        assert_eq!(names(&upcoming), vec!["Today", "LastDay"]);
    }

    #[test]
    fn test_upcoming_birthdays_ignores_year_wraparound() {
        let mut book = AddressBook::new();
        book.add(record_with_birthday("NewYear", "02.01.1990"));
        assert!(book.upcoming_birthdays(date(29, 12, 2024)).is_empty());
    }

    #[test]
    fn test_upcoming_birthdays_skips_leap_day_in_common_year() {
        let mut book = AddressBook::new();
        book.add(record_with_birthday("Leap", "29.02.2000"));
        book.add(record_with_birthday("March", "01.03.1999"));

        assert_eq!(names(&book.upcoming_birthdays(date(26, 2, 2023))), vec!["March"]);
        assert_eq!(
            names(&book.upcoming_birthdays(date(26, 2, 2024))),
            vec!["Leap", "March"]
        );
    }

    #[test]
    fn test_upcoming_birthdays_custom_window() {
        let mut book = AddressBook::new();
        book.add(record_with_birthday("Bob", "20.06.1990"));
        assert!(book.upcoming_birthdays_within(date(18, 6, 2024), 1).is_empty());
        assert_eq!(book.upcoming_birthdays_within(date(20, 6, 2024), 0).len(), 1);
    }

    #[test]
    fn test_render_all() {
        let mut book = AddressBook::new();
        assert_eq!(book.render_all(), "");

        let mut ann = Record::new("Ann").unwrap();
        ann.add_phone("0501234567").unwrap();
        book.add(ann);
        book.add(record_with_birthday("Bob", "20.06.1990"));

        assert_eq!(
            book.render_all(),
            "Contact name: Ann, phones: 0501234567, birthday: Not set\n\
             Contact name: Bob, phones: , birthday: 20.06.1990"
        );
    }

    #[test]
    fn test_try_from_records_rejects_duplicates() {
        let records = vec![
            Record::new("Ann").unwrap(),
            Record::new("Bob").unwrap(),
            Record::new("Ann").unwrap(),
        ];
        let err = AddressBook::try_from_records(records).unwrap_err();
        assert_eq!(err.as_str(), "Ann");
    }

    #[test]
    fn test_serializes_as_array() {
        let mut book = AddressBook::new();
        book.add(Record::new("Ann").unwrap());
        let json = serde_json::to_string(&book).unwrap();
        assert_eq!(json, r#"[{"name":"Ann","phones":[]}]"#);
    }
}
