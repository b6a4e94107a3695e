//! Schema families: schemas plus the relationships declared between them.

use std::fmt;
use std::sync::Arc;

use im::{OrdMap, Vector};

use crate::schema::Schema;

/// Table name to schema.
pub type SchemaMap = OrdMap<String, Schema>;

/// A sibling group handle with identity semantics.
///
/// Two handles are equal iff one was cloned from the other (or both from a
/// common original). Groups created by separate calls to [`PeerGroup::new`]
/// are different groups even when their labels match.
#[derive(Clone)]
pub struct PeerGroup(Arc<str>);

impl PeerGroup {
    /// Creates a new, distinct group.
    #[must_use]
    pub fn new(label: impl AsRef<str>) -> Self {
        Self(Arc::from(label.as_ref()))
    }

    /// Returns the group's label (for display only).
    #[must_use]
    pub fn label(&self) -> &str {
        &self.0
    }
}

impl PartialEq for PeerGroup {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for PeerGroup {}

impl fmt::Debug for PeerGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PeerGroup({:?} @ {:p})", self.label(), Arc::as_ptr(&self.0))
    }
}

/// A set of table schemas plus their declared relationships.
///
/// `children` and `parents` are looked up independently and need not be
/// symmetric. Sibling sets are formed by tables sharing one [`PeerGroup`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SchemaFamily {
    /// Registered schemas by table name.
    pub map: SchemaMap,
    /// Table to declared child tables.
    pub children: OrdMap<String, Vector<String>>,
    /// Table to declared parent-relationship tables.
    pub parents: OrdMap<String, Vector<String>>,
    /// Table to sibling group.
    pub peers: OrdMap<String, PeerGroup>,
}

impl SchemaFamily {
    /// Creates an empty family.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a schema under its own name, replacing any previous one.
    #[must_use]
    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.map.insert(schema.name.clone(), schema);
        self
    }

    /// Sets the `parents` entry of a table.
    #[must_use]
    pub fn with_parents<I, S>(mut self, table: impl Into<String>, tables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parents
            .insert(table.into(), tables.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the `children` entry of a table.
    #[must_use]
    pub fn with_children<I, S>(mut self, table: impl Into<String>, tables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.children
            .insert(table.into(), tables.into_iter().map(Into::into).collect());
        self
    }

    /// Places every listed table in `group`.
    #[must_use]
    pub fn with_peers<I, S>(mut self, group: &PeerGroup, tables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for table in tables {
            self.peers.insert(table.into(), group.clone());
        }
        self
    }

    /// Returns true if the table is registered.
    #[must_use]
    pub fn contains(&self, table: &str) -> bool {
        self.map.contains_key(table)
    }

    /// Returns the `parents` entry of a table, empty when undeclared.
    #[must_use]
    pub fn parents_of(&self, table: &str) -> Vector<String> {
        self.parents.get(table).cloned().unwrap_or_default()
    }

    /// Returns the `children` entry of a table, empty when undeclared.
    #[must_use]
    pub fn children_of(&self, table: &str) -> Vector<String> {
        self.children.get(table).cloned().unwrap_or_default()
    }

    /// Returns the sibling group of a table.
    #[must_use]
    pub fn peer_group(&self, table: &str) -> Option<&PeerGroup> {
        self.peers.get(table)
    }

    /// Returns registered table names in order.
    pub fn tables(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }
}
