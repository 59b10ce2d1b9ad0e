//! Source of "today" for birthday validation and lookups.

use chrono::{Local, NaiveDate};

/// Provides the current calendar date.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// The local date of the machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to one date, for tests and reproducible runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
