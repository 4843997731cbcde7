use crate::error::StorageResult;
use crate::store::AddressBook;

/// Repository for persisting the address book between sessions.
///
/// Provides abstraction over where the book is kept, enabling different
/// implementations (JSON file, in-memory mock).
pub trait BookRepository {
    /// Load the saved book, or an empty one if nothing was saved yet.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Replace the saved state with the whole book.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
