//! # Catalog Module
//!
//! The catalog maps table names to their definitions. It starts life
//! seeded with the two compiled-in system-table layouts and is replaced
//! wholesale by discovery; after that it is never mutated, so lookups can
//! be handed out freely.

use super::system_tables;
use super::table::TableDef;
use eyre::Result;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Catalog {
    tables: HashMap<String, TableDef>,
}

impl Catalog {
    /// Creates a catalog holding only the compiled-in system-table
    /// layouts: enough to decode `systables` and `syscolumns`, nothing
    /// else.
    pub fn bootstrap() -> Self {
        let mut tables = HashMap::new();

        let systables = system_tables::systables_def();
        tables.insert(systables.name().to_string(), systables);

        let syscolumns = system_tables::syscolumns_def();
        tables.insert(syscolumns.name().to_string(), syscolumns);

        Self { tables }
    }

    /// Inserts a table definition, replacing any previous one of the same
    /// name (discovered definitions replace the bootstrap seeds this way).
    pub fn insert(&mut self, table: TableDef) {
        self.tables.insert(table.name().to_string(), table);
    }

    pub fn contains_table(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    pub fn get_table(&self, name: &str) -> Option<&TableDef> {
        self.tables.get(name)
    }

    /// Looks a table up, failing with the table's name if it is unknown.
    pub fn resolve_table(&self, name: &str) -> Result<&TableDef> {
        self.tables
            .get(name)
            .ok_or_else(|| eyre::eyre!("table '{}' not found in catalog", name))
    }

    /// Table names in sorted order.
    pub fn table_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn tables(&self) -> impl Iterator<Item = &TableDef> {
        self.tables.values()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
