//! # Database Builder
//!
//! Fluent configuration for opening a reader:
//!
//! ```ignore
//! use multibase::Database;
//!
//! let db = Database::builder()
//!     .path("./accounting.dbs")
//!     .trim_char_padding(false)
//!     .open()?;
//! ```
//!
//! `preload_schema(false)` defers catalog discovery; the caller must then
//! run `load_schema()` before any table can be read.

use super::database::Database;
use crate::storage::ReadOptions;
use eyre::{bail, ensure, Result};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct DatabaseBuilder {
    path: Option<PathBuf>,
    preload_schema: bool,
    trim_char_padding: bool,
}

impl DatabaseBuilder {
    pub(crate) fn new() -> Self {
        Self {
            path: None,
            preload_schema: true,
            trim_char_padding: true,
        }
    }

    /// Sets the database directory.
    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Whether to discover the schema during `open` (default: true).
    pub fn preload_schema(mut self, preload: bool) -> Self {
        self.preload_schema = preload;
        self
    }

    /// Whether Char fields lose their trailing padding (default: true).
    pub fn trim_char_padding(mut self, trim: bool) -> Self {
        self.trim_char_padding = trim;
        self
    }

    /// Validates the directory and opens the reader.
    pub fn open(self) -> Result<Database> {
        let Some(path) = self.path else {
            bail!("no database path configured");
        };
        ensure!(
            path.is_dir(),
            "database path '{}' is not a directory",
            path.display()
        );

        let options = ReadOptions {
            trim_char_padding: self.trim_char_padding,
        };
        let mut database = Database::new(path, options);
        if self.preload_schema {
            database.load_schema()?;
        }
        Ok(database)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_rejects_paths_that_are_not_directories() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("not_a_dir");
        std::fs::write(&file_path, b"x").unwrap();

        let err = Database::builder().path(&file_path).open().unwrap_err();
        assert!(err.to_string().contains("is not a directory"));
    }

    #[test]
    fn open_without_a_path_is_an_error() {
        let err = Database::builder().open().unwrap_err();
        assert!(err.to_string().contains("no database path"));
    }

    #[test]
    fn deferred_schema_open_succeeds_on_any_directory() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::builder()
            .path(dir.path())
            .preload_schema(false)
            .open()
            .unwrap();
        assert_eq!(db.root(), dir.path());
    }
}
