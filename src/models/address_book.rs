//! AddressBook model: every record, keyed by contact name.

use super::record::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// Default length of the upcoming-birthdays window, in days.
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: u32 = 7;

/// A birthday falling inside the upcoming window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Name of the contact
    pub name: String,

    /// Date the birthday is celebrated on
    pub date: NaiveDate,
}

/// The contact directory.
///
/// Records are keyed by the string value of their name, and every key
/// always equals the name of the record stored under it. The map is only
/// reachable through the methods below. Iteration is in ascending name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any record with the same name.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if self.records.insert(key, record).is_some() {
            tracing::debug!("Existing record replaced");
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Mutable access to a record. The name of a record cannot change, so the
    /// key invariant holds.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove a record. Deleting an absent name is a no-op.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.remove(name);
        if removed.is_some() {
            tracing::debug!(name, "Record deleted");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Contacts whose next birthday is between `today` and `today + window_days`,
    /// both inclusive, ordered by date and then by name.
    ///
    /// A birthday already past this year counts with next year's date, and
    /// February 29 is celebrated on March 1 in non-leap years.
    pub fn get_upcoming_birthdays(
        &self,
        today: NaiveDate,
        window_days: u32,
    ) -> Vec<UpcomingBirthday> {
        let window = i64::from(window_days);

        let mut upcoming: Vec<UpcomingBirthday> = self
            .records
            .values()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let date = birthday.next_occurrence(today);
                let delta = (date - today).num_days();
                (0..=window).contains(&delta).then(|| UpcomingBirthday {
                    name: record.name().as_str().to_string(),
                    date,
                })
            })
            .collect();

        upcoming.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.name.cmp(&b.name)));
        upcoming
    }
}

// Stored as a list of records; keys are rebuilt from names on load.
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.records.values())
    }
}

impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records: Vec<Record> = Vec::deserialize(deserializer)?;
        let mut book = AddressBook::new();
        for record in records {
            book.add_record(record);
        }
        Ok(book)
    }
}
