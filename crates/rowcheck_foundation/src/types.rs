//! Column types declared by table schemas.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind};

/// Declared storage type of a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum ColumnType {
    /// Signed integer.
    Integer,
    /// UTF-8 text.
    Text,
    /// Floating point.
    Real,
    /// Opaque bytes.
    Blob,
}

impl ColumnType {
    /// All column types, in declaration order.
    pub const ALL: [ColumnType; 4] = [Self::Integer, Self::Text, Self::Real, Self::Blob];

    /// Returns the canonical upper-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::Text => "TEXT",
            Self::Real => "REAL",
            Self::Blob => "BLOB",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<ColumnType> for String {
    fn from(ty: ColumnType) -> Self {
        ty.name().to_string()
    }
}

impl TryFrom<String> for ColumnType {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl FromStr for ColumnType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                Error::new(ErrorKind::InvalidDefinition(format!(
                    "unknown column type: {s}"
                )))
            })
    }
}
