//! Check bundles bound to a frozen schema family.

use rowcheck_foundation::{DataRow, Error, PrimaryKeyProblem, Result, Value};
use rowcheck_schema::{
    SchemaFamily, check_new_with, check_parent_hood, check_sibling_hood, check_update_with,
    get_prop, get_props, get_schema,
};
use tracing::debug;

use crate::checks::SchemaChecks;
use crate::config::CheckConfig;

/// A check bundle bound to a private copy of a schema family.
///
/// The family is cloned into persistent maps when the bundle is built, so
/// later changes to the caller's family never affect validation.
#[derive(Clone, Debug)]
pub struct FamilyChecks {
    family: SchemaFamily,
    config: CheckConfig,
}

impl FamilyChecks {
    /// Freezes a copy of `family` with the default configuration.
    #[must_use]
    pub fn new(family: &SchemaFamily) -> Self {
        Self::with_config(family, CheckConfig::default())
    }

    /// Freezes a copy of `family` with the given configuration.
    #[must_use]
    pub fn with_config(family: &SchemaFamily, config: CheckConfig) -> Self {
        debug!(
            tables = family.map.len(),
            peers = family.peers.len(),
            "froze schema family"
        );
        Self {
            family: family.clone(),
            config,
        }
    }

    /// Returns the frozen family.
    #[must_use]
    pub fn family(&self) -> &SchemaFamily {
        &self.family
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &CheckConfig {
        &self.config
    }
}

/// Freezes a copy of `family` into a check bundle.
#[must_use]
pub fn make_schema_family_checks(family: &SchemaFamily) -> FamilyChecks {
    FamilyChecks::new(family)
}

impl SchemaChecks for FamilyChecks {
    fn verify_table(&self, table: &str) -> Result<bool> {
        if self.family.contains(table) {
            Ok(true)
        } else {
            Err(Error::table_not_found(table))
        }
    }

    fn pk(&self, table: &str, row: &DataRow) -> Result<String> {
        let schema = get_schema(&self.family.map, table)?;
        let field = schema.pk.as_str();
        match row.get(field) {
            None => Err(Error::primary_key(field, PrimaryKeyProblem::Absent)),
            Some(Value::Text(s)) if !s.trim().is_empty() => Ok(s.to_string()),
            Some(Value::Int(_) | Value::Float(_)) => {
                Err(Error::primary_key(field, PrimaryKeyProblem::NotText))
            }
            Some(_) => Err(Error::primary_key(field, PrimaryKeyProblem::Blank)),
        }
    }

    fn pk_field(&self, table: &str) -> Result<String> {
        get_schema(&self.family.map, table).map(|schema| schema.pk.clone())
    }

    fn parents(&self, table: &str) -> Vec<String> {
        self.family.parents_of(table).into_iter().collect()
    }

    fn prop(
        &self,
        table: &str,
        prop: &str,
        row: &DataRow,
        ignore_defaults: bool,
    ) -> Result<Value> {
        get_prop(&self.family, table, prop, row, ignore_defaults)
    }

    fn props(
        &self,
        table: &str,
        props: &[&str],
        row: &DataRow,
        ignore_defaults: bool,
    ) -> Result<DataRow> {
        get_props(&self.family, table, props, row, ignore_defaults)
    }

    fn check_new(&self, table: &str, record: &DataRow, ignore_defaults: bool) -> Result<DataRow> {
        let schema = get_schema(&self.family.map, table)?;
        check_new_with(schema, record, ignore_defaults, &self.config.blank_message)
    }

    fn check_update(
        &self,
        table: &str,
        record: &DataRow,
        ignore_defaults: bool,
    ) -> Result<DataRow> {
        let schema = get_schema(&self.family.map, table)?;
        check_update_with(schema, record, ignore_defaults, &self.config.blank_message)
    }

    fn check_parent_hood(&self, parent: &str, child: &str) -> Result<()> {
        check_parent_hood(&self.family, parent, child)
    }

    fn check_sibling_hood(&self, table1: &str, table2: &str) -> Result<()> {
        check_sibling_hood(&self.family, table1, table2)
    }
}
