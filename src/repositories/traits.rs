use crate::error::StorageResult;
use crate::models::AddressBook;

/// Repository for persisting the address book.
///
/// The whole book is loaded once when a session starts and saved once when
/// it ends, so implementations deal in complete snapshots.
pub trait AddressBookRepository {
    /// Load the stored book, or an empty one if nothing was saved yet.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Replace the stored book with `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
