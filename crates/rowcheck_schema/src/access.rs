//! Field reads against a table schema.

use rowcheck_foundation::{DataRow, Error, Result, Value};

use crate::family::SchemaFamily;
use crate::registry::get_schema;

/// Reads one field of a row in the context of a table schema.
///
/// With `ignore_defaults`, a nullish row value falls back to the schema
/// default. Otherwise the raw value is returned, or [`Value::Nil`] when
/// the row lacks the field. Falsy values such as `0` and `""` are kept.
///
/// # Errors
///
/// Returns an error if the table is not registered or the field has no
/// declared default in its schema.
pub fn get_prop(
    family: &SchemaFamily,
    table: &str,
    prop: &str,
    row: &DataRow,
    ignore_defaults: bool,
) -> Result<Value> {
    let schema = get_schema(&family.map, table)?;
    let default = schema
        .default_for(prop)
        .ok_or_else(|| Error::unknown_field(&schema.name, prop))?;

    let value = match row.get_present(prop) {
        Some(v) => v.clone(),
        None if ignore_defaults => default.clone(),
        None => Value::Nil,
    };
    Ok(value)
}

/// Reads several fields of one row, failing on the first bad field.
///
/// The returned row holds every requested field and nothing else.
///
/// # Errors
///
/// Returns the first error [`get_prop`] reports; no partial row is
/// produced.
pub fn get_props<S: AsRef<str>>(
    family: &SchemaFamily,
    table: &str,
    props: &[S],
    row: &DataRow,
    ignore_defaults: bool,
) -> Result<DataRow> {
    let mut out = DataRow::new();
    for prop in props {
        let prop = prop.as_ref();
        let value = get_prop(family, table, prop, row, ignore_defaults)?;
        out.insert(prop, value);
    }
    Ok(out)
}
