use contact_assistant::error::{StorageError, StorageResult};
use contact_assistant::models::AddressBook;
use contact_assistant::repositories::AddressBookRepository;
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Mock address book repository for testing.
///
/// Keeps the saved book in memory, can be told to fail on save, and
/// tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockAddressBookRepository {
    stored: Arc<Mutex<Option<AddressBook>>>,
    fail_on_save: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockAddressBookRepository {
    /// Create a new empty MockAddressBookRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent save fail.
    pub fn fail_saves(&self) {
        *self.fail_on_save.lock().unwrap() = true;
    }

    /// The last successfully saved book, if any.
    pub fn stored(&self) -> Option<AddressBook> {
        self.stored.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn increment_call_count(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl AddressBookRepository for MockAddressBookRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        self.increment_call_count("load");
        Ok(self.stored.lock().unwrap().clone().unwrap_or_default())
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        self.increment_call_count("save");

        if *self.fail_on_save.lock().unwrap() {
            return Err(StorageError::Io {
                path: PathBuf::from("mock.json"),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only store"),
            });
        }

        *self.stored.lock().unwrap() = Some(book.clone());
        Ok(())
    }
}
