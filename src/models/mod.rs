//! Data models for the contact directory.
//!
//! A `Record` holds one contact; the `AddressBook` owns every record
//! keyed by contact name.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, UpcomingBirthday, DEFAULT_BIRTHDAY_WINDOW_DAYS};
pub use record::Record;
