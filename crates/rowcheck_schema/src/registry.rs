//! Registry lookup by table name.

use rowcheck_foundation::{Error, Result};

use crate::family::SchemaMap;
use crate::schema::Schema;

/// Resolves a table name to its schema.
///
/// # Errors
///
/// Returns [`ErrorKind::UnknownTable`](rowcheck_foundation::ErrorKind::UnknownTable)
/// listing every registered table if `table` is not in the map.
pub fn get_schema<'a>(map: &'a SchemaMap, table: &str) -> Result<&'a Schema> {
    map.get(table)
        .ok_or_else(|| Error::unknown_table(table, map.keys().cloned()))
}
