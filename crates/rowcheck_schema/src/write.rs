//! Write-time checks for records being created or updated.
//!
//! Required fields are checked against the record as supplied, never
//! against the defaulted result, so a required field is not satisfied by
//! its own default. Every offending field is reported at once.

use im::OrdMap;
use rowcheck_foundation::{DataRow, Error, Result};

use crate::schema::Schema;

/// Per-field message for a required field that is missing or blank.
pub const BLANK_FIELD_MESSAGE: &str = "Can't be empty";

/// Checks a record about to be created.
///
/// Equivalent to [`check_new_with`] using [`BLANK_FIELD_MESSAGE`].
///
/// # Errors
///
/// Returns a column writing error if any required field is nullish or
/// blank in `record`.
pub fn check_new(schema: &Schema, record: &DataRow, ignore_defaults: bool) -> Result<DataRow> {
    check_new_with(schema, record, ignore_defaults, BLANK_FIELD_MESSAGE)
}

/// Checks a record about to be created, using `blank_message` per field.
///
/// Unless `ignore_defaults` is set, the returned row holds every known
/// field, taking the record's value when present and the default
/// otherwise, plus any other fields of the record. With
/// `ignore_defaults`, the returned row is the record unchanged.
///
/// # Errors
///
/// Returns a column writing error if any required field is nullish or
/// blank in `record`.
pub fn check_new_with(
    schema: &Schema,
    record: &DataRow,
    ignore_defaults: bool,
    blank_message: &str,
) -> Result<DataRow> {
    let missing = blank_fields(schema.required_fields.iter(), record, blank_message);
    if !missing.is_empty() {
        return Err(Error::column_writing(
            format!(
                "When adding a new record, schema '{}' requires non-empty values for fields",
                schema.name
            ),
            missing,
        ));
    }

    if ignore_defaults {
        return Ok(record.clone());
    }

    let mut out = record.clone();
    for (field, default) in schema.defaults.iter() {
        if record.get_present(field).is_none() {
            out.insert(field.as_str(), default.clone());
        }
    }
    Ok(out)
}

/// Checks a partial record about to be applied as an update.
///
/// Equivalent to [`check_update_with`] using [`BLANK_FIELD_MESSAGE`].
///
/// # Errors
///
/// Returns a column writing error if a required field present in `record`
/// is nullish or blank.
pub fn check_update(schema: &Schema, record: &DataRow, ignore_defaults: bool) -> Result<DataRow> {
    check_update_with(schema, record, ignore_defaults, BLANK_FIELD_MESSAGE)
}

/// Checks a partial record about to be applied as an update, using
/// `blank_message` per field.
///
/// Only fields present in `record` are touched. A required field absent
/// from `record` is not being updated and is exempt. Unless
/// `ignore_defaults` is set, nullish values are replaced by their
/// defaults in the returned row.
///
/// # Errors
///
/// Returns a column writing error if a required field present in `record`
/// is nullish or blank.
pub fn check_update_with(
    schema: &Schema,
    record: &DataRow,
    ignore_defaults: bool,
    blank_message: &str,
) -> Result<DataRow> {
    let touched = schema
        .required_fields
        .iter()
        .filter(|field| record.contains(field));
    let empty_but_required = blank_fields(touched, record, blank_message);
    if !empty_but_required.is_empty() {
        return Err(Error::column_writing(
            format!(
                "When updating a record, schema '{}' requires non-empty values for fields",
                schema.name
            ),
            empty_but_required,
        ));
    }

    if ignore_defaults {
        return Ok(record.clone());
    }

    let mut out = record.clone();
    for field in record.fields() {
        if record.get_present(field).is_none() {
            if let Some(default) = schema.default_for(field) {
                out.insert(field, default.clone());
            }
        }
    }
    Ok(out)
}

fn blank_fields<'a>(
    fields: impl Iterator<Item = &'a String>,
    record: &DataRow,
    blank_message: &str,
) -> OrdMap<String, String> {
    fields
        .filter(|field| record.is_blank(field))
        .map(|field| (field.clone(), blank_message.to_string()))
        .collect()
}
