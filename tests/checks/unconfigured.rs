//! Integration tests for the unconfigured sentinel

use rowcheck_checks::{SchemaCheckContext, SchemaChecks, Unconfigured};
use rowcheck_foundation::{DataRow, NOT_CONFIGURED_MESSAGE};

#[test]
fn sentinel_rejects_every_check_but_parents() {
    let checks: &dyn SchemaChecks = &Unconfigured;
    let row = DataRow::new();

    let results = [
        checks.verify_table("t").map(|_| ()),
        checks.pk("t", &row).map(|_| ()),
        checks.pk_field("t").map(|_| ()),
        checks.prop("t", "a", &row, true).map(|_| ()),
        checks.props("t", &["a"], &row, true).map(|_| ()),
        checks.check_new("t", &row, true).map(|_| ()),
        checks.check_update("t", &row, true).map(|_| ()),
        checks.check_parent_hood("a", "b"),
        checks.check_sibling_hood("a", "b"),
    ];
    for result in results {
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), NOT_CONFIGURED_MESSAGE);
    }
    assert!(checks.parents("t").is_empty());
}

#[test]
fn default_context_uses_sentinel() {
    let ctx = SchemaCheckContext::default();
    assert!(!ctx.is_configured());
    assert!(ctx.checks().check_new("t", &DataRow::new(), false).unwrap_err().is_not_configured());
    assert!(ctx.checks().parents("t").is_empty());
}
