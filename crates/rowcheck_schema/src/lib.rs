//! Table schemas, schema families, and pure record checks for rowcheck.
//!
//! This crate provides:
//! - [`Schema`] - Fields, defaults, column types, and required fields of one table
//! - [`SchemaFamily`] - A set of schemas plus their declared relationships
//! - [`get_schema`] - Registry lookup by table name
//! - [`get_prop`] / [`get_props`] - Field reads against a schema
//! - [`check_new`] / [`check_update`] - Write-time required-field checks
//! - [`check_parent_hood`] / [`check_sibling_hood`] - Relationship checks
//!
//! Everything here is pure: no I/O, no logging, no interior mutability.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod access;
#[cfg(feature = "serde")]
pub mod def;
pub mod family;
pub mod registry;
pub mod relation;
pub mod schema;
pub mod write;

pub use access::{get_prop, get_props};
#[cfg(feature = "serde")]
pub use def::{SchemaDef, SchemaFamilyDef};
pub use family::{PeerGroup, SchemaFamily, SchemaMap};
pub use registry::get_schema;
pub use relation::{check_parent_hood, check_sibling_hood};
pub use schema::Schema;
pub use write::{BLANK_FIELD_MESSAGE, check_new, check_new_with, check_update, check_update_with};
