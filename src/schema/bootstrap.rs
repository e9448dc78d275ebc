//! # Catalog Discovery
//!
//! The schema of every table lives inside the database itself, in the
//! `systables` and `syscolumns` catalog tables, which are themselves
//! ordinary `.dat` files. Reading them requires a schema, so discovery is
//! a two-phase protocol:
//!
//! 1. Decode the two catalog files using the compiled-in layouts from
//!    [`super::system_tables`].
//! 2. Join the results on table id and publish the full catalog,
//!    replacing the compiled-in seeds with the discovered definitions.
//!
//! The join is permissive: a `systables` row whose id has no `syscolumns`
//! entries describes a table that cannot be decoded, so it is skipped with
//! a warning instead of failing the whole database. One column with an
//! exotic type code likewise survives discovery untouched; it only errors
//! if its table is actually read.
//!
//! `discover` is a pure build-then-publish function. Re-running it yields
//! a fresh catalog; nothing is merged or refreshed in place.

use super::catalog::Catalog;
use super::system_tables::{self, SYSCOLUMNS, SYSTABLES};
use super::table::{ColumnDef, TableDef};
use crate::records::Row;
use crate::storage::{read_rows, ReadOptions};
use eyre::{Result, WrapErr};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

/// Reads the catalog tables under `root` and builds the full schema map.
pub fn discover(root: &Path) -> Result<Catalog> {
    let seed = Catalog::bootstrap();

    // Catalog text columns are always trimmed: a padded table name would
    // never match a lookup, whatever the caller's read options say.
    let options = ReadOptions {
        trim_char_padding: true,
    };

    let table_rows = read_catalog_table(root, &seed, SYSTABLES, &options)?;
    let column_rows = read_catalog_table(root, &seed, SYSCOLUMNS, &options)?;

    let mut columns_by_table = group_columns(&column_rows)?;

    let mut catalog = seed;
    for row in &table_rows {
        let tabname = row.get_text("tabname")?;
        let tabid = row.get_int("tabid")?;
        let dirpath = row.get_text("dirpath")?;

        match columns_by_table.remove(&tabid) {
            Some(columns) => {
                catalog.insert(TableDef::new(
                    tabname,
                    system_tables::table_file_name(dirpath),
                    tabid as u32,
                    columns,
                ));
            }
            None => {
                warn!(
                    table = tabname,
                    tabid, "table has no column definitions, skipping"
                );
            }
        }
    }

    debug!(tables = catalog.len(), "catalog discovered");
    Ok(catalog)
}

fn read_catalog_table(
    root: &Path,
    seed: &Catalog,
    name: &str,
    options: &ReadOptions,
) -> Result<Vec<Row>> {
    let def = seed.resolve_table(name)?;
    read_rows(&root.join(def.file_name()), def, options)
        .wrap_err_with(|| format!("cannot read the '{}' catalog table", name))
}

/// Groups `syscolumns` rows into per-table column lists, keyed by the
/// owning table id.
fn group_columns(rows: &[Row]) -> Result<HashMap<i64, Vec<ColumnDef>>> {
    let mut grouped: HashMap<i64, Vec<ColumnDef>> = HashMap::new();
    for row in rows {
        let colname = row.get_text("colname")?;
        let tabid = row.get_int("tabid")?;
        let colno = row.get_int("colno")? as i16;
        let coltype = row.get_int("coltype")? as i16;
        let collength = row.get_int("collength")? as i16;

        grouped
            .entry(tabid)
            .or_default()
            .push(ColumnDef::from_catalog(colname, colno, coltype, collength));
    }
    Ok(grouped)
}
