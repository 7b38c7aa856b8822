use address_book_assistant::error::{StorageError, StorageResult};
use address_book_assistant::models::AddressBook;
use address_book_assistant::repositories::AddressBookRepository;
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

/// Mock address book repository for testing.
///
/// Keeps the saved book in memory, can be told to fail saves, and tracks
/// method calls for verification. Clones share state, so a test can keep a
/// handle after moving the repository into a session.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockAddressBookRepository {
    stored: Arc<Mutex<Option<AddressBook>>>,
    fail_saves: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockAddressBookRepository {
    /// Create a repository with nothing saved yet.
    pub fn new() -> Self {
        Self {
            stored: Arc::new(Mutex::new(None)),
            fail_saves: Arc::new(Mutex::new(false)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Create a repository that already holds `book`.
    pub fn with_book(book: AddressBook) -> Self {
        let repo = Self::new();
        *repo.stored.lock().unwrap() = Some(book);
        repo
    }

    /// Make every following save fail with an I/O error.
    pub fn fail_saves(&self) {
        *self.fail_saves.lock().unwrap() = true;
    }

    /// The last saved book, if any.
    pub fn stored(&self) -> Option<AddressBook> {
        self.stored.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockAddressBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressBookRepository for MockAddressBookRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        self.track_call("load");
        Ok(self.stored.lock().unwrap().clone().unwrap_or_default())
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        self.track_call("save");

        if *self.fail_saves.lock().unwrap() {
            return Err(StorageError::Io {
                path: "mock".to_string(),
                source: io::Error::new(io::ErrorKind::Other, "disk full"),
            });
        }

        *self.stored.lock().unwrap() = Some(book.clone());
        Ok(())
    }
}
