//! Relationship checks between two tables of a family.

use rowcheck_foundation::{Error, Result};

use crate::family::SchemaFamily;
use crate::registry::get_schema;

/// Checks that `parent` declares ownership of `child`.
///
/// Ownership holds iff `child` appears in the `parents` entry of `parent`;
/// an undeclared entry is an empty list.
///
/// # Errors
///
/// Returns an error if either table is not registered (parent first) or
/// the ownership is not declared.
pub fn check_parent_hood(family: &SchemaFamily, parent: &str, child: &str) -> Result<()> {
    get_schema(&family.map, parent)?;
    get_schema(&family.map, child)?;

    let owns = family
        .parents
        .get(parent)
        .is_some_and(|children| children.iter().any(|c| c == child));
    if !owns {
        return Err(Error::relationship(format!(
            "Parent schema '{parent}' does not own child schema '{child}'"
        )));
    }
    Ok(())
}

/// Checks that two distinct tables share a sibling group.
///
/// A table is never its own sibling. Two tables that both lack a group are
/// siblings; a grouped table is never a sibling of an ungrouped one.
///
/// # Errors
///
/// Returns an error if either table is not registered, the tables are the
/// same, or their [`PeerGroup`](crate::PeerGroup)s differ.
pub fn check_sibling_hood(family: &SchemaFamily, table1: &str, table2: &str) -> Result<()> {
    get_schema(&family.map, table1)?;
    get_schema(&family.map, table2)?;

    if table1 == table2 {
        return Err(Error::relationship(format!(
            "Schema relationship '{table1} -> {table2}' is not allowed"
        )));
    }

    match (family.peer_group(table1), family.peer_group(table2)) {
        (None, None) => Ok(()),
        (Some(a), Some(b)) if a == b => Ok(()),
        _ => Err(Error::relationship(format!(
            "Schema relationship '{table1} -> {table2}' is not found"
        ))),
    }
}
