//! The check bundle used when no schema family was provided.

use rowcheck_foundation::{DataRow, Error, Result, Value};
use tracing::debug;

use crate::checks::SchemaChecks;

/// Check bundle for components rendered outside a configured scope.
///
/// Every operation fails with the not-configured error, except
/// [`parents`](SchemaChecks::parents), which returns an empty list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Unconfigured;

fn not_configured<T>(operation: &'static str) -> Result<T> {
    debug!(operation, "schema check called without a schema family");
    Err(Error::not_configured())
}

impl SchemaChecks for Unconfigured {
    fn verify_table(&self, _table: &str) -> Result<bool> {
        not_configured("verify_table")
    }

    fn pk(&self, _table: &str, _row: &DataRow) -> Result<String> {
        not_configured("pk")
    }

    fn pk_field(&self, _table: &str) -> Result<String> {
        not_configured("pk_field")
    }

    fn parents(&self, _table: &str) -> Vec<String> {
        Vec::new()
    }

    fn prop(
        &self,
        _table: &str,
        _prop: &str,
        _row: &DataRow,
        _ignore_defaults: bool,
    ) -> Result<Value> {
        not_configured("prop")
    }

    fn props(
        &self,
        _table: &str,
        _props: &[&str],
        _row: &DataRow,
        _ignore_defaults: bool,
    ) -> Result<DataRow> {
        not_configured("props")
    }

    fn check_new(
        &self,
        _table: &str,
        _record: &DataRow,
        _ignore_defaults: bool,
    ) -> Result<DataRow> {
        not_configured("check_new")
    }

    fn check_update(
        &self,
        _table: &str,
        _record: &DataRow,
        _ignore_defaults: bool,
    ) -> Result<DataRow> {
        not_configured("check_update")
    }

    fn check_parent_hood(&self, _parent: &str, _child: &str) -> Result<()> {
        not_configured("check_parent_hood")
    }

    fn check_sibling_hood(&self, _table1: &str, _table2: &str) -> Result<()> {
        not_configured("check_sibling_hood")
    }
}
