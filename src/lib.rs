//! Contact Assistant - an interactive command-line contact book.
//!
//! This library keeps contacts (a name, phone numbers and an optional
//! birthday) in memory, answers queries such as upcoming birthdays, and
//! stores the whole book in a JSON file between sessions.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects for names, phones and birthdays
//! - **models**: The contact record and the address book
//! - **repositories**: Loading and saving the address book
//! - **assistant**: Command parsing, handlers and the prompt loop
//! - **clock**: Source of the current date
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling

pub mod assistant;
pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;

pub use assistant::{run_session, Assistant, Command, Reply, SessionState};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError, SessionError, StorageError};
pub use models::{AddressBook, Record, UpcomingBirthday};
pub use repositories::{AddressBookRepository, JsonFileRepository};
