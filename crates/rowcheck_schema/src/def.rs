//! Serializable schema family definitions.
//!
//! Peer groups have identity semantics and cannot be written out directly,
//! so a definition names each table's group by label. Tables sharing a
//! label are placed in one [`PeerGroup`] when the definition is loaded.

use std::collections::BTreeMap;

use im::{OrdMap, OrdSet, Vector};
use rowcheck_foundation::{ColumnType, Error, ErrorKind, Result, Value};
use serde::{Deserialize, Serialize};

use crate::family::{PeerGroup, SchemaFamily};
use crate::schema::Schema;

/// Plain description of one table schema.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaDef {
    /// Table name.
    pub name: String,
    /// Primary key field name.
    pub pk: String,
    /// Fields that must be non-empty when written.
    #[serde(default)]
    pub required_fields: Vec<String>,
    /// Default value per known field.
    #[serde(default)]
    pub defaults: BTreeMap<String, Value>,
    /// Declared column type per field.
    #[serde(default)]
    pub types: BTreeMap<String, ColumnType>,
}

/// Plain description of a schema family.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaFamilyDef {
    /// Table name to schema.
    pub map: BTreeMap<String, SchemaDef>,
    /// Table to declared child tables.
    #[serde(default)]
    pub children: BTreeMap<String, Vec<String>>,
    /// Table to declared parent-relationship tables.
    #[serde(default)]
    pub parents: BTreeMap<String, Vec<String>>,
    /// Table to sibling group label.
    #[serde(default)]
    pub peers: BTreeMap<String, String>,
}

impl From<SchemaDef> for Schema {
    fn from(def: SchemaDef) -> Self {
        Self {
            name: def.name,
            pk: def.pk,
            required_fields: def.required_fields.into_iter().collect::<OrdSet<_>>(),
            defaults: def.defaults.into_iter().collect::<OrdMap<_, _>>(),
            types: def.types.into_iter().collect::<OrdMap<_, _>>(),
        }
    }
}

impl From<&Schema> for SchemaDef {
    fn from(schema: &Schema) -> Self {
        Self {
            name: schema.name.clone(),
            pk: schema.pk.clone(),
            required_fields: schema.required_fields.iter().cloned().collect(),
            defaults: schema
                .defaults
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            types: schema.types.iter().map(|(k, v)| (k.clone(), *v)).collect(),
        }
    }
}

impl TryFrom<SchemaFamilyDef> for SchemaFamily {
    type Error = Error;

    fn try_from(def: SchemaFamilyDef) -> Result<Self> {
        let mut map = OrdMap::new();
        for (table, schema) in def.map {
            if schema.name != table {
                return Err(Error::new(ErrorKind::InvalidDefinition(format!(
                    "schema '{}' is registered under table '{table}'",
                    schema.name
                ))));
            }
            if schema.pk.trim().is_empty() {
                return Err(Error::new(ErrorKind::InvalidDefinition(format!(
                    "schema '{table}' has no primary key"
                ))));
            }
            map.insert(table, Schema::from(schema));
        }

        let mut groups: BTreeMap<String, PeerGroup> = BTreeMap::new();
        let mut peers = OrdMap::new();
        for (table, label) in def.peers {
            let group = groups
                .entry(label)
                .or_insert_with_key(|label| PeerGroup::new(label))
                .clone();
            peers.insert(table, group);
        }

        Ok(Self {
            map,
            children: lists(def.children),
            parents: lists(def.parents),
            peers,
        })
    }
}

impl From<&SchemaFamily> for SchemaFamilyDef {
    fn from(family: &SchemaFamily) -> Self {
        Self {
            map: family
                .map
                .iter()
                .map(|(k, v)| (k.clone(), SchemaDef::from(v)))
                .collect(),
            children: unlist(&family.children),
            parents: unlist(&family.parents),
            peers: family
                .peers
                .iter()
                .map(|(k, g)| (k.clone(), g.label().to_string()))
                .collect(),
        }
    }
}

fn lists(m: BTreeMap<String, Vec<String>>) -> OrdMap<String, Vector<String>> {
    m.into_iter()
        .map(|(k, v)| (k, v.into_iter().collect()))
        .collect()
}

fn unlist(m: &OrdMap<String, Vector<String>>) -> BTreeMap<String, Vec<String>> {
    m.iter()
        .map(|(k, v)| (k.clone(), v.iter().cloned().collect()))
        .collect()
}

impl SchemaFamily {
    /// Loads a family from its JSON definition.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or describes an
    /// inconsistent family.
    pub fn from_json(json: &str) -> Result<Self> {
        let def: SchemaFamilyDef = serde_json::from_str(json)
            .map_err(|e| Error::new(ErrorKind::InvalidDefinition(e.to_string())))?;
        Self::try_from(def)
    }

    /// Writes the family's definition as JSON.
    ///
    /// Peer groups are written by label, so distinct groups sharing a label
    /// are merged when the JSON is loaded again.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&SchemaFamilyDef::from(self))
            .map_err(|e| Error::new(ErrorKind::InvalidDefinition(e.to_string())))
    }
}
