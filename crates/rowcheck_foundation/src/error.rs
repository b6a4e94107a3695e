//! Error types for schema lookups and record checks.
//!
//! Uses `thiserror` for ergonomic error definition. Every check returns
//! these as `Err` values; nothing in the public API panics.

use std::fmt;

use im::OrdMap;
use thiserror::Error;

/// Message returned by every check when no schema family was provided.
pub const NOT_CONFIGURED_MESSAGE: &str =
    "Not implemented, please make sure SchemaCheckProvider is used";

/// Result type for schema checks.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for schema checks.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an unknown table error listing the tables that do exist.
    #[must_use]
    pub fn unknown_table<I, S>(table: impl Into<String>, available: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(ErrorKind::UnknownTable {
            table: table.into(),
            available: available.into_iter().map(Into::into).collect(),
        })
    }

    /// Creates the error reported when verifying an unregistered table.
    #[must_use]
    pub fn table_not_found(table: impl Into<String>) -> Self {
        Self::new(ErrorKind::TableNotFound(table.into()))
    }

    /// Creates an unknown field error.
    #[must_use]
    pub fn unknown_field(schema: impl Into<String>, field: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownField {
            schema: schema.into(),
            field: field.into(),
        })
    }

    /// Creates a primary key error.
    #[must_use]
    pub fn primary_key(field: impl Into<String>, problem: PrimaryKeyProblem) -> Self {
        Self::new(ErrorKind::MissingPrimaryKey {
            field: field.into(),
            problem,
        })
    }

    /// Creates the error for a primary key read as blank for display.
    #[must_use]
    pub fn blank_primary_key() -> Self {
        Self::new(ErrorKind::BlankPrimaryKey)
    }

    /// Creates a column writing error from the offending fields.
    #[must_use]
    pub fn column_writing(message: impl Into<String>, fields: OrdMap<String, String>) -> Self {
        Self::new(ErrorKind::ColumnWriting {
            message: message.into(),
            fields,
        })
    }

    /// Creates a relationship error.
    #[must_use]
    pub fn relationship(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Relationship(message.into()))
    }

    /// Creates the error returned when no schema family was provided.
    #[must_use]
    pub fn not_configured() -> Self {
        Self::new(ErrorKind::NotConfigured)
    }

    /// Returns the per-field messages of a column writing error.
    #[must_use]
    pub fn fields(&self) -> Option<&OrdMap<String, String>> {
        match &self.kind {
            ErrorKind::ColumnWriting { fields, .. } => Some(fields),
            _ => None,
        }
    }

    /// Returns true if this is the unconfigured-provider error.
    #[must_use]
    pub fn is_not_configured(&self) -> bool {
        matches!(self.kind, ErrorKind::NotConfigured)
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// The table name is not registered.
    #[error(
        "Schema '{table}' does not exist. Currently available schemas are: {}",
        .available.join(", ")
    )]
    UnknownTable {
        /// The table that was requested.
        table: String,
        /// Every registered table name.
        available: Vec<String>,
    },

    /// The table is not registered, as reported by table verification.
    #[error("Schema table '{0}' does not exist")]
    TableNotFound(String),

    /// The field has no declared default in the table's schema.
    #[error("Schema '{schema}' does not have a field called '{field}'")]
    UnknownField {
        /// The schema that was queried.
        schema: String,
        /// The field that was not found.
        field: String,
    },

    /// The primary key is absent from a record or unusable.
    #[error("Primary key field '{field}' {problem}")]
    MissingPrimaryKey {
        /// The primary key field name.
        field: String,
        /// What is wrong with it.
        problem: PrimaryKeyProblem,
    },

    /// A primary key resolved to blank text.
    #[error("Primary key is empty")]
    BlankPrimaryKey,

    /// One or more columns cannot be written.
    #[error("{message}")]
    ColumnWriting {
        /// Summary of the failed write.
        message: String,
        /// Field name to per-field message.
        fields: OrdMap<String, String>,
    },

    /// A declared relationship between tables is absent or not allowed.
    #[error("{0}")]
    Relationship(String),

    /// No schema family was provided.
    #[error("{}", NOT_CONFIGURED_MESSAGE)]
    NotConfigured,

    /// A serialized schema definition is malformed.
    #[error("invalid schema definition: {0}")]
    InvalidDefinition(String),
}

/// What is wrong with a record's primary key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrimaryKeyProblem {
    /// The field is not present in the record.
    Absent,
    /// The field holds a non-text value. Rendered like [`Blank`](Self::Blank).
    NotText,
    /// The field is nil or whitespace only.
    Blank,
}

impl fmt::Display for PrimaryKeyProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => write!(f, "not found in data"),
            Self::NotText | Self::Blank => write!(f, "is empty"),
        }
    }
}
