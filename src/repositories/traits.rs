use crate::error::StorageResult;
use crate::models::AddressBook;

/// Repository for persisting the whole address book.
///
/// The book is always loaded and saved as a single unit; there are no
/// partial updates.
pub trait AddressBookRepository {
    /// Load the stored address book. A store that does not exist yet yields
    /// an empty book.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Replace the stored address book with `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
