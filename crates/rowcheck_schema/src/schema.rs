//! Schema definitions for tables.
//!
//! A schema names a table, its primary key, the default and column type of
//! every known field, and which fields must be non-empty on write.

use im::{OrdMap, OrdSet};
use rowcheck_foundation::{ColumnType, Value};

/// Schema definition for one table.
///
/// A field is *known* iff it has a declared default, even when that
/// default is never used. Required fields are expected, but not enforced,
/// to be known fields.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    /// Table name (e.g., `order`, `line_item`).
    pub name: String,
    /// Primary key field name.
    pub pk: String,
    /// Fields that must be non-empty when written.
    pub required_fields: OrdSet<String>,
    /// Default value per known field.
    pub defaults: OrdMap<String, Value>,
    /// Declared column type per field.
    pub types: OrdMap<String, ColumnType>,
}

impl Schema {
    /// Creates a schema with no fields.
    #[must_use]
    pub fn new(name: impl Into<String>, pk: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pk: pk.into(),
            required_fields: OrdSet::new(),
            defaults: OrdMap::new(),
            types: OrdMap::new(),
        }
    }

    /// Adds a known field with its column type and default.
    #[must_use]
    pub fn with_field(
        mut self,
        name: impl Into<String>,
        ty: ColumnType,
        default: impl Into<Value>,
    ) -> Self {
        let name = name.into();
        self.types.insert(name.clone(), ty);
        self.defaults.insert(name, default.into());
        self
    }

    /// Adds a known field with a default but no declared type.
    #[must_use]
    pub fn with_default(mut self, name: impl Into<String>, default: impl Into<Value>) -> Self {
        self.defaults.insert(name.into(), default.into());
        self
    }

    /// Marks a field as required.
    #[must_use]
    pub fn with_required(mut self, name: impl Into<String>) -> Self {
        self.required_fields.insert(name.into());
        self
    }

    /// Returns true if the field has a declared default.
    #[must_use]
    pub fn is_known(&self, field: &str) -> bool {
        self.defaults.contains_key(field)
    }

    /// Returns true if the field must be non-empty on write.
    #[must_use]
    pub fn is_required(&self, field: &str) -> bool {
        self.required_fields.contains(field)
    }

    /// Returns the declared default of a field.
    #[must_use]
    pub fn default_for(&self, field: &str) -> Option<&Value> {
        self.defaults.get(field)
    }

    /// Returns the declared column type of a field.
    #[must_use]
    pub fn column_type(&self, field: &str) -> Option<ColumnType> {
        self.types.get(field).copied()
    }

    /// Returns an iterator over known field names.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.defaults.keys().map(String::as_str)
    }
}
