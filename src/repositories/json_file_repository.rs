use crate::error::{StorageError, StorageResult};
use crate::models::AddressBook;
use crate::repositories::traits::AddressBookRepository;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Address book repository backed by a single JSON file.
///
/// Saving writes a temporary file next to the target and renames it into
/// place, so the stored file is either the old book or the new one.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository for the file at `path`. The file need not exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn serialization_error(&self, source: serde_json::Error) -> StorageError {
        StorageError::Serialization {
            path: self.path.clone(),
            source,
        }
    }

    /// Directory the temporary file is created in (same filesystem as the target).
    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }
}

impl AddressBookRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "No address book file, starting empty");
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let book: AddressBook = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| self.serialization_error(e))?;

        tracing::info!(
            path = %self.path.display(),
            contacts = book.len(),
            "Address book loaded"
        );
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let mut temp = NamedTempFile::new_in(self.parent_dir()).map_err(|e| self.io_error(e))?;

        {
            let mut writer = BufWriter::new(temp.as_file_mut());
            serde_json::to_writer_pretty(&mut writer, book)
                .map_err(|e| self.serialization_error(e))?;
            writer.flush().map_err(|e| self.io_error(e))?;
        }
        temp.as_file().sync_all().map_err(|e| self.io_error(e))?;

        temp.persist(&self.path)
            .map_err(|source| StorageError::Persist {
                path: self.path.clone(),
                source,
            })?;

        tracing::info!(
            path = %self.path.display(),
            contacts = book.len(),
            "Address book saved"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;
    use std::fs;

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("missing.json"));

        let book = repo.load().unwrap();
        assert!(book.is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("book.json"));

        let mut book = AddressBook::new();
        let mut record = Record::new("Alice", Some("01.01.2000")).unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_phone("1234567890").unwrap();
        book.add_record(record);

        repo.save(&book).unwrap();
        assert_eq!(repo.load().unwrap(), book);
    }

    #[test]
    fn test_save_replaces_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("book.json"));

        let mut book = AddressBook::new();
        book.add_record(Record::new("Alice", None).unwrap());
        repo.save(&book).unwrap();

        book.delete("Alice");
        repo.save(&book).unwrap();

        assert!(repo.load().unwrap().is_empty());
        let leftovers = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1, "temporary files should not be left behind");
    }

    #[test]
    fn test_load_corrupt_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.json");
        fs::write(&path, "not json").unwrap();

        let result = JsonFileRepository::new(&path).load();
        assert!(matches!(result, Err(StorageError::Serialization { .. })));
    }

    #[test]
    fn test_load_invalid_phone_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.json");
        fs::write(&path, r#"[{"name":"Alice","phones":["12"]}]"#).unwrap();

        let result = JsonFileRepository::new(&path).load();
        assert!(matches!(result, Err(StorageError::Serialization { .. })));
    }

    #[test]
    fn test_load_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();

        let result = JsonFileRepository::new(dir.path()).load();
        assert!(result.is_err());
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("nope").join("book.json"));

        let result = repo.save(&AddressBook::new());
        assert!(matches!(result, Err(StorageError::Io { .. })));
    }
}
