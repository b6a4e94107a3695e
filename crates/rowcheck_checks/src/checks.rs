//! The check operations exposed to UI code.

use rowcheck_foundation::{DataRow, Result, Value};

/// The fixed set of schema checks a UI component may call.
///
/// Components never reach into schema internals; this trait is the whole
/// contract. Implementations must be pure: the same inputs always produce
/// the same outcome.
pub trait SchemaChecks: Send + Sync {
    /// Returns `Ok(true)` if the table is registered.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is unknown.
    fn verify_table(&self, table: &str) -> Result<bool>;

    /// Returns the primary key value of a row.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is unknown or the key is absent, not
    /// text, or blank.
    fn pk(&self, table: &str, row: &DataRow) -> Result<String>;

    /// Returns the primary key field name of a table.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is unknown.
    fn pk_field(&self, table: &str) -> Result<String>;

    /// Returns the declared `parents` list of a table, empty if undeclared.
    fn parents(&self, table: &str) -> Vec<String>;

    /// Reads one field of a row.
    ///
    /// # Errors
    ///
    /// Returns an error if the table or field is unknown.
    fn prop(&self, table: &str, prop: &str, row: &DataRow, ignore_defaults: bool)
    -> Result<Value>;

    /// Reads several fields of a row, failing on the first bad field.
    ///
    /// # Errors
    ///
    /// Returns an error if the table or any field is unknown.
    fn props(
        &self,
        table: &str,
        props: &[&str],
        row: &DataRow,
        ignore_defaults: bool,
    ) -> Result<DataRow>;

    /// Checks a record about to be created.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is unknown or required fields are
    /// missing or blank.
    fn check_new(&self, table: &str, record: &DataRow, ignore_defaults: bool) -> Result<DataRow>;

    /// Checks a partial record about to be applied as an update.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is unknown or required fields present
    /// in the record are blank.
    fn check_update(
        &self,
        table: &str,
        record: &DataRow,
        ignore_defaults: bool,
    ) -> Result<DataRow>;

    /// Checks that `parent` declares ownership of `child`.
    ///
    /// # Errors
    ///
    /// Returns an error if either table is unknown or ownership is not
    /// declared.
    fn check_parent_hood(&self, parent: &str, child: &str) -> Result<()>;

    /// Checks that two distinct tables share a sibling group.
    ///
    /// # Errors
    ///
    /// Returns an error if either table is unknown, the tables are equal,
    /// or they are not siblings.
    fn check_sibling_hood(&self, table1: &str, table2: &str) -> Result<()>;
}
