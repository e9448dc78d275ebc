//! # Database Reader
//!
//! The public entry point. A `Database` wraps one database directory, the
//! read options it was configured with, and the catalog discovered from
//! the directory's system tables.
//!
//! ## Lifecycle
//!
//! The catalog is built once, eagerly by `Database::open` or on the
//! first explicit `load_schema` call when the builder was told not to
//! preload, and is read-only afterwards. `load_schema` replaces the
//! whole catalog; there is no incremental refresh. Reads before the
//! schema exists fail with a per-call error rather than poisoning the
//! reader.

use crate::records::Row;
use crate::schema::{bootstrap, Catalog};
use crate::storage::{self, ReadOptions};
use eyre::{bail, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::builder::DatabaseBuilder;

#[derive(Debug)]
pub struct Database {
    root: PathBuf,
    options: ReadOptions,
    catalog: Option<Catalog>,
}

impl Database {
    /// Starts configuring a reader.
    pub fn builder() -> DatabaseBuilder {
        DatabaseBuilder::new()
    }

    /// Opens a database directory with default settings: schema discovery
    /// runs immediately and Char padding is trimmed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::builder().path(path).open()
    }

    pub(crate) fn new(root: PathBuf, options: ReadOptions) -> Self {
        Self {
            root,
            options,
            catalog: None,
        }
    }

    /// The database directory this reader was opened on.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Discovers the schema from the catalog tables, replacing any
    /// previously loaded catalog wholesale.
    pub fn load_schema(&mut self) -> Result<()> {
        let catalog = bootstrap::discover(&self.root)?;
        debug!(
            root = %self.root.display(),
            tables = catalog.len(),
            "schema loaded"
        );
        self.catalog = Some(catalog);
        Ok(())
    }

    /// The discovered catalog. Fails if the schema has not been loaded.
    pub fn catalog(&self) -> Result<&Catalog> {
        match &self.catalog {
            Some(catalog) => Ok(catalog),
            None => bail!("schema has not been loaded; call load_schema() first"),
        }
    }

    /// Sorted names of every discoverable table.
    pub fn table_names(&self) -> Result<Vec<&str>> {
        Ok(self.catalog()?.table_names())
    }

    /// Reads a table's rows in on-disk order, using this reader's options.
    pub fn read_table(&self, name: &str) -> Result<Vec<Row>> {
        self.read_table_with(name, &self.options)
    }

    /// Reads a table's rows with explicit per-call options.
    pub fn read_table_with(&self, name: &str, options: &ReadOptions) -> Result<Vec<Row>> {
        let table = self.catalog()?.resolve_table(name)?;
        storage::read_rows(&self.root.join(table.file_name()), table, options)
    }
}
