//! # mbdump - MultiBase Directory Inspector
//!
//! Binary entry point for inspecting a MultiBase database directory.
//!
//! ## Usage
//!
//! ```bash
//! # List the discoverable tables
//! mbdump ./accounting.dbs
//!
//! # Print the discovered schema
//! mbdump --schema ./accounting.dbs
//!
//! # Dump tables as JSON
//! mbdump ./accounting.dbs orders customers
//!
//! # Keep Char padding intact
//! mbdump --no-trim ./accounting.dbs orders
//! ```

use eyre::{bail, Result};
use multibase::{Database, Row, Value};
use serde_json::json;
use std::env;
use std::path::PathBuf;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    let mut show_schema = false;
    let mut trim = true;
    let mut db_path: Option<PathBuf> = None;
    let mut tables: Vec<String> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--version" | "-v" => {
                println!("mbdump {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            "--schema" | "-s" => {
                show_schema = true;
            }
            "--no-trim" => {
                trim = false;
            }
            arg if arg.starts_with('-') => {
                bail!("Unknown option: {}", arg);
            }
            arg => {
                if db_path.is_none() {
                    db_path = Some(PathBuf::from(arg));
                } else {
                    tables.push(arg.to_string());
                }
            }
        }
        i += 1;
    }

    let Some(db_path) = db_path else {
        print_usage();
        bail!("No database directory given");
    };

    let db = Database::builder()
        .path(&db_path)
        .trim_char_padding(trim)
        .open()?;

    if show_schema {
        print_schema(&db)?;
        return Ok(());
    }

    if tables.is_empty() {
        println!("{}", serde_json::to_string_pretty(&db.table_names()?)?);
        return Ok(());
    }

    for name in &tables {
        let rows = db.read_table(name)?;
        let dumped: Vec<serde_json::Value> = rows.iter().map(row_to_json).collect();
        println!("{}", serde_json::to_string_pretty(&dumped)?);
    }

    Ok(())
}

fn print_schema(db: &Database) -> Result<()> {
    let mut schema = serde_json::Map::new();
    for name in db.table_names()? {
        let table = db.catalog()?.resolve_table(name)?;
        let columns: Vec<serde_json::Value> = table
            .columns()
            .iter()
            .map(|col| {
                json!({
                    "name": col.name(),
                    "colno": col.colno(),
                    "type_code": col.type_code(),
                    "length": col.length(),
                })
            })
            .collect();
        schema.insert(
            name.to_string(),
            json!({
                "file": table.file_name(),
                "columns": columns,
            }),
        );
    }
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

fn row_to_json(row: &Row) -> serde_json::Value {
    let mut object = serde_json::Map::new();
    for (name, value) in row.iter() {
        object.insert(name.to_string(), value_to_json(value));
    }
    serde_json::Value::Object(object)
}

fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Int(i) => json!(i),
        Value::Text(s) => json!(s),
        // Decimals stay textual so the exact digit string survives.
        Value::Decimal(d) => json!(d),
        Value::Date(d) => json!(d.to_string()),
        Value::Time(t) => json!(t.to_string()),
    }
}

fn print_usage() {
    println!("mbdump - inspect a MultiBase database directory");
    println!();
    println!("USAGE:");
    println!("    mbdump [OPTIONS] <DIR> [TABLE...]");
    println!();
    println!("ARGS:");
    println!("    <DIR>       Database directory (holds the .dat files)");
    println!("    [TABLE...]  Tables to dump as JSON; none lists table names");
    println!();
    println!("OPTIONS:");
    println!("    -s, --schema     Print the discovered schema and exit");
    println!("        --no-trim    Keep Char field padding");
    println!("    -h, --help       Show this help");
    println!("    -v, --version    Show version");
}
