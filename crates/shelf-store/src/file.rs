//! JSON file catalog backend.
//!
//! On-disk format is a single JSON array of book objects, pretty-printed
//! with a four-space indent:
//!
//! ```text
//! [
//!     {
//!         "title": "The Hobbit",
//!         "author": "J.R.R. Tolkien",
//!         "genre": "Fantasy",
//!         "year": 1937,
//!         "read": false
//!     }
//! ]
//! ```

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use shelf_types::Book;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::config::{LoadPolicy, StoreConfig};
use crate::error::{StoreError, StoreResult};
use crate::traits::CatalogStore;

const INDENT: &[u8] = b"    ";

/// Catalog store backed by one JSON file.
///
/// The file is opened only for the duration of a single load or save. Saves
/// write a sibling temporary file and rename it over the catalog, so a crash
/// mid-write leaves the previous catalog in place.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    config: StoreConfig,
}

impl JsonFileStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Lenient store at the given path.
    pub fn at(path: impl AsRef<Path>) -> Self {
        Self::new(StoreConfig::at(path.as_ref()))
    }

    /// Location of the catalog file.
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Returns `true` if the catalog file currently exists.
    pub fn exists(&self) -> bool {
        self.config.path.is_file()
    }

    fn corrupt(&self, reason: String) -> StoreResult<Vec<Book>> {
        match self.config.load_policy {
            LoadPolicy::Lenient => {
                warn!(
                    path = %self.config.path.display(),
                    error = %reason,
                    "catalog file is unparsable; loading empty collection"
                );
                Ok(Vec::new())
            }
            LoadPolicy::Strict => Err(StoreError::Corrupt {
                path: self.config.path.clone(),
                reason,
            }),
        }
    }
}

impl CatalogStore for JsonFileStore {
    fn load(&self) -> StoreResult<Vec<Book>> {
        let path = &self.config.path;
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no catalog file; starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_slice::<Vec<Book>>(&bytes) {
            Ok(books) => {
                debug!(path = %path.display(), count = books.len(), "catalog loaded");
                Ok(books)
            }
            Err(e) => self.corrupt(e.to_string()),
        }
    }

    fn save(&self, books: &[Book]) -> StoreResult<()> {
        let path = &self.config.path;
        // A symlinked catalog stays a symlink: the rename lands on its target.
        let target = resolve_symlink(path);
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        // The temp file is created 0600; keep the existing catalog's mode.
        if let Ok(meta) = fs::metadata(&target) {
            tmp.as_file().set_permissions(meta.permissions())?;
        }
        {
            let mut writer = BufWriter::new(tmp.as_file_mut());
            let mut ser =
                serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(INDENT));
            books
                .serialize(&mut ser)
                .map_err(|e| StoreError::Serialization(e.to_string()))?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }
        tmp.as_file().sync_all()?;

        tmp.persist(&target).map_err(|e| StoreError::Persist {
            path: target.clone(),
            source: e.error,
        })?;

        debug!(path = %path.display(), count = books.len(), "catalog saved");
        Ok(())
    }
}

fn resolve_symlink(path: &Path) -> PathBuf {
    let is_link = fs::symlink_metadata(path)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false);
    if is_link {
        if let Ok(resolved) = fs::canonicalize(path) {
            return resolved;
        }
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Book> {
        vec![
            Book::new("The Hobbit", "J.R.R. Tolkien", "Fantasy", 1937, true),
            Book::new("Dune", "Frank Herbert", "Science Fiction", 1965, false),
        ]
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::at(dir.path().join("books.json"));
        assert!(!store.exists());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn missing_file_loads_empty_even_when_strict() {
        let dir = tempfile::tempdir().unwrap();
        let config =
            StoreConfig::at(dir.path().join("books.json")).with_load_policy(LoadPolicy::Strict);
        let store = JsonFileStore::new(config);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::at(dir.path().join("books.json"));

        store.save(&sample()).unwrap();
        assert!(store.exists());
        assert_eq!(store.load().unwrap(), sample());
    }

    #[test]
    fn save_of_fresh_load_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::at(dir.path().join("books.json"));
        store.save(&sample()).unwrap();
        let first = fs::read(store.path()).unwrap();

        let loaded = store.load().unwrap();
        store.save(&loaded).unwrap();
        let second = fs::read(store.path()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn save_uses_four_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::at(dir.path().join("books.json"));
        store.save(&sample()[..1]).unwrap();

        let text = fs::read_to_string(store.path()).unwrap();
        let expected = "[\n    {\n        \"title\": \"The Hobbit\",\n        \"author\": \"J.R.R. Tolkien\",\n        \"genre\": \"Fantasy\",\n        \"year\": 1937,\n        \"read\": true\n    }\n]\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn save_replaces_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::at(dir.path().join("books.json"));
        store.save(&sample()).unwrap();
        store.save(&[]).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::at(dir.path().join("nested").join("deeper").join("books.json"));
        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap().len(), 2);
    }

    #[test]
    fn corrupt_file_loads_empty_when_lenient() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books.json");
        fs::write(&path, b"{ not json").unwrap();

        let store = JsonFileStore::at(&path);
        assert!(store.load().unwrap().is_empty());
        // The corrupt file is left untouched until the next save.
        assert_eq!(fs::read(&path).unwrap(), b"{ not json");
    }

    #[test]
    fn corrupt_file_is_an_error_when_strict() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books.json");
        fs::write(&path, b"[{\"title\": 1}]").unwrap();

        let store = JsonFileStore::new(StoreConfig::at(&path).with_load_policy(LoadPolicy::Strict));
        let err = store.load().unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[test]
    fn wrong_shape_is_treated_as_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books.json");
        fs::write(&path, br#"{"title": "not a list"}"#).unwrap();

        assert!(JsonFileStore::at(&path).load().unwrap().is_empty());
    }

    #[test]
    fn empty_file_is_treated_as_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books.json");
        fs::write(&path, b"").unwrap();

        assert!(JsonFileStore::at(&path).load().unwrap().is_empty());
        let strict = JsonFileStore::new(StoreConfig::at(&path).with_load_policy(LoadPolicy::Strict));
        assert!(strict.load().is_err());
    }

    #[test]
    fn loads_file_written_by_other_tools() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books.json");
        fs::write(
            &path,
            r#"[{"title": "Emma", "author": "Jane Austen", "genre": "Novel", "year": 1815, "read": true},
                {"author": "Homer", "title": "Odyssey", "year": 0, "genre": "Epic"}]"#,
        )
        .unwrap();

        let books = JsonFileStore::at(&path).load().unwrap();
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].title, "Emma");
        assert!(books[0].read);
        assert_eq!(books[1].year, 0);
        assert!(!books[1].read);
    }

    #[test]
    fn float_year_written_by_other_tools_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books.json");
        fs::write(
            &path,
            r#"[{"title": "The Hobbit", "author": "J.R.R. Tolkien", "genre": "Fantasy", "year": 1937.0, "read": false}]"#,
        )
        .unwrap();

        let strict = JsonFileStore::new(StoreConfig::at(&path).with_load_policy(LoadPolicy::Strict));
        let books = strict.load().unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].year, 1937);
    }

    #[test]
    fn failed_save_reports_error_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        // A non-empty directory cannot be replaced by a rename.
        let path = dir.path().join("books.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), b"x").unwrap();

        let store = JsonFileStore::at(&path);
        let err = store.save(&sample()).unwrap_err();
        assert!(matches!(err, StoreError::Persist { .. }));

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(leftovers, vec![std::ffi::OsString::from("books.json")]);
    }

    #[cfg(unix)]
    #[test]
    fn save_keeps_existing_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books.json");
        fs::write(&path, b"[]").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        JsonFileStore::at(&path).save(&sample()).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }

    #[cfg(unix)]
    #[test]
    fn save_through_symlink_updates_target() {
        let dir = tempfile::tempdir().unwrap();
        let real = dir.path().join("real.json");
        let link = dir.path().join("books.json");
        fs::write(&real, b"[]").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let store = JsonFileStore::at(&link);
        store.save(&sample()).unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(JsonFileStore::at(&real).load().unwrap(), sample());
        assert_eq!(store.load().unwrap(), sample());
    }
}
