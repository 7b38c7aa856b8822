use super::traits::AddressBookRepository;
use crate::error::{StorageError, StorageResult};
use crate::models::{AddressBook, Record};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Snapshot layout version written by this build.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize)]
struct SnapshotRef<'a> {
    version: u32,
    contacts: Vec<&'a Record>,
}

#[derive(Deserialize)]
struct Snapshot {
    version: u32,
    #[serde(default)]
    contacts: Vec<Record>,
}

/// Address book repository backed by a JSON snapshot file.
///
/// Saving writes a sibling `.tmp` file and renames it over the target, so an
/// interrupted save leaves the previous snapshot intact.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, path: &Path, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

impl AddressBookRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No address book at {}, starting empty", self.path.display());
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(self.io_error(&self.path, e)),
        };

        let snapshot: Snapshot = serde_json::from_slice(&bytes)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(StorageError::UnsupportedVersion {
                found: snapshot.version,
                expected: SNAPSHOT_VERSION,
            });
        }

        let book: AddressBook = snapshot.contacts.into_iter().collect();
        info!(
            "Loaded {} contacts from {}",
            book.len(),
            self.path.display()
        );
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let snapshot = SnapshotRef {
            version: SNAPSHOT_VERSION,
            contacts: book.records().collect(),
        };
        let json = serde_json::to_vec_pretty(&snapshot)?;

        let temp = self.temp_path();
        debug!("Writing snapshot to {}", temp.display());
        fs::write(&temp, json).map_err(|e| self.io_error(&temp, e))?;
        let path = &self.path;
        fs::rename(&temp, path).map_err(|e| self.io_error(path, e))?;

        info!("Saved {} contacts to {}", book.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Name;

    #[test]
    fn test_temp_path_is_sibling() {
        let repo = JsonFileRepository::new("/data/addressbook.pkl");
        assert_eq!(repo.temp_path(), PathBuf::from("/data/addressbook.pkl.tmp"));
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("missing.pkl"));
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_snapshot_layout() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("book.pkl"));

        let mut record = Record::new(Name::new("Alice").unwrap());
        record.add_phone("1234567890").unwrap();
        record.set_birthday("15.03.1990").unwrap();
        let book: AddressBook = std::iter::once(record).collect();
        repo.save(&book).unwrap();

        let bytes = fs::read(repo.path()).unwrap();
        let raw: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            raw,
            serde_json::json!({
                "version": 1,
                "contacts": [
                    {"name": "Alice", "phones": ["1234567890"], "birthday": "15.03.1990"}
                ]
            })
        );
        assert!(!repo.temp_path().exists());
    }

    #[test]
    fn test_unsupported_version() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.pkl");
        fs::write(&path, r#"{"version": 2, "contacts": []}"#).unwrap();

        let result = JsonFileRepository::new(path).load();
        assert!(matches!(
            result,
            Err(StorageError::UnsupportedVersion { found: 2, .. })
        ));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.pkl");
        fs::write(&path, b"\x80\x04pickle").unwrap();

        let result = JsonFileRepository::new(path).load();
        assert!(matches!(result, Err(StorageError::Serialization(_))));
    }
}
