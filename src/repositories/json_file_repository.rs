use crate::error::{StorageError, StorageResult};
use crate::models::Record;
use crate::repositories::traits::BookRepository;
use crate::store::AddressBook;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Address book repository backed by a single JSON file.
///
/// The whole book is written on every save; the file is replaced atomically
/// by writing a sibling temp file and renaming it over the target.
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

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl BookRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no saved address book, starting empty");
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let records: Vec<Record> = serde_json::from_str(&data)?;
        let book = AddressBook::try_from_records(records)
            .map_err(|name| StorageError::DuplicateName(name.into_inner()))?;

        info!(
            path = %self.path.display(),
            contacts = book.len(),
            "loaded address book"
        );
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(book)?;
        let temp = self.temp_path();

        debug!(path = %temp.display(), "writing address book");
        fs::write(&temp, json).map_err(|e| self.io_error(e))?;
        fs::rename(&temp, &self.path).map_err(|e| self.io_error(e))?;

        info!(
            path = %self.path.display(),
            contacts = book.len(),
            "saved address book"
        );
        Ok(())
    }
}
