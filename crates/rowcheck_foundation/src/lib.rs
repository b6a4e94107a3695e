//! Core values, column types, rows, and errors for rowcheck.
//!
//! This crate provides:
//! - [`Value`] - A single field value (number, text, or nil)
//! - [`ColumnType`] - Declared column types for schema fields
//! - [`DataRow`] - One record instance, keyed by field name
//! - [`Error`] - The error taxonomy shared by every check

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod row;
pub mod types;
pub mod value;

pub use error::{Error, ErrorKind, NOT_CONFIGURED_MESSAGE, PrimaryKeyProblem, Result};
pub use row::DataRow;
pub use types::ColumnType;
pub use value::Value;
