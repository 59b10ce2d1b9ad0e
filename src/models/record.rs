//! Record model representing one contact in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: a name, an ordered list of phone numbers and an optional birthday.
///
/// Phone numbers may repeat; the list keeps insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: ContactName,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phone numbers.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the name is blank or the birthday
    /// is malformed or in the future.
    pub fn new(name: &str, birthday: Option<&str>) -> Result<Self, ValidationError> {
        let name = ContactName::new(name)?;
        let birthday = birthday.map(Birthday::parse).transpose()?;

        Ok(Self {
            name,
            phones: Vec::new(),
            birthday,
        })
    }

    /// Create a record from an already validated name.
    pub fn with_name(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn set_birthday(&mut self, birthday: Birthday) {
        tracing::debug!(name = %self.name, %birthday, "Birthday set");
        self.birthday = Some(birthday);
    }

    /// Validate and append a phone number.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(phone)?;
        tracing::debug!(name = %self.name, %phone, "Phone added");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone equal to `phone`. Removing an absent number is a no-op.
    pub fn remove_phone(&mut self, phone: &str) {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != phone);
        tracing::debug!(
            name = %self.name,
            phone,
            removed = before - self.phones.len(),
            "Phone removed"
        );
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// `new` is validated even when `old` is absent. Returns whether a
    /// replacement took place; a missing `old` leaves the record unchanged.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool, ValidationError> {
        let new = PhoneNumber::new(new)?;

        match self.phones.iter_mut().find(|p| p.as_str() == old) {
            Some(slot) => {
                tracing::debug!(name = %self.name, old, %new, "Phone changed");
                *slot = new;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Phones joined with `"; "` in list order.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.phones_display()
        )
    }
}
