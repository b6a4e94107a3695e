//! rowcheck - Schema-driven record checks for CRUD editing interfaces
//!
//! This crate re-exports all layers of the rowcheck system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: rowcheck_checks     — Frozen check bundles, provider context
//! Layer 1: rowcheck_schema     — Schemas, families, pure record checks
//! Layer 0: rowcheck_foundation — Core types (Value, DataRow, Error)
//! ```

pub use rowcheck_checks as checks;
pub use rowcheck_foundation as foundation;
pub use rowcheck_schema as schema;

pub use rowcheck_checks::{
    CheckConfig, FamilyChecks, SchemaCheckContext, SchemaChecks, Unconfigured,
    make_schema_family_checks,
};
pub use rowcheck_foundation::{ColumnType, DataRow, Error, ErrorKind, Result, Value};
pub use rowcheck_schema::{PeerGroup, Schema, SchemaFamily, SchemaMap};
