//! # Public Reader API
//!
//! `Database` and its builder: the surface applications use to open a
//! directory, inspect the discovered schema, and read tables.

mod builder;
#[allow(clippy::module_inception)]
mod database;

pub use builder::DatabaseBuilder;
pub use database::Database;
