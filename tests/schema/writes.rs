//! Integration tests for write-time checks

use rowcheck_foundation::{DataRow, ErrorKind, Value};
use rowcheck_schema::{BLANK_FIELD_MESSAGE, Schema, check_new, check_update, get_schema};

use crate::fixtures::shop;

fn line_item() -> Schema {
    get_schema(&shop().map, "line_item").unwrap().clone()
}

// =============================================================================
// New Records
// =============================================================================

#[test]
fn new_record_missing_required_field() {
    let schema = Schema::new("person", "id").with_required("name");
    let err = check_new(&schema, &DataRow::new(), false).unwrap_err();
    assert_eq!(
        err.fields().and_then(|f| f.get("name")).map(String::as_str),
        Some("Can't be empty")
    );
}

#[test]
fn new_record_with_required_field_gets_defaults() {
    let schema = Schema::new("person", "id")
        .with_default("age", 0)
        .with_required("name");
    let row = check_new(&schema, &DataRow::new().with("name", "x"), false).unwrap();
    assert_eq!(row.get("name"), Some(&Value::text("x")));
    assert_eq!(row.get("age"), Some(&Value::Int(0)));
}

#[test]
fn new_record_aggregates_all_violations() {
    let record = DataRow::new().with("sku", " ");
    let err = check_new(&line_item(), &record, false).unwrap_err();
    let fields = err.fields().unwrap();
    assert_eq!(fields.len(), 2);
    assert!(fields.values().all(|m| m == BLANK_FIELD_MESSAGE));
}

#[test]
fn new_record_default_never_satisfies_requirement() {
    // qty has a default of 1, but it is still required in the record itself.
    let record = DataRow::new().with("sku", "A-1");
    let err = check_new(&line_item(), &record, false).unwrap_err();
    assert_eq!(
        err.fields().map(|f| f.keys().cloned().collect::<Vec<_>>()),
        Some(vec!["qty".to_string()])
    );
}

#[test]
fn new_record_ignoring_defaults_is_verbatim() {
    let record = DataRow::new().with("sku", "A-1").with("qty", 2);
    let row = check_new(&line_item(), &record, true).unwrap();
    assert_eq!(row, record);
}

#[test]
fn new_record_is_all_or_nothing() {
    let record = DataRow::new().with("qty", 3);
    assert!(matches!(
        check_new(&line_item(), &record, false).unwrap_err().kind,
        ErrorKind::ColumnWriting { .. }
    ));
}

// =============================================================================
// Updates
// =============================================================================

#[test]
fn update_without_required_keys_passes() {
    let schema = Schema::new("person", "id").with_required("name");
    let row = check_update(&schema, &DataRow::new().with("age", "5"), false).unwrap();
    assert_eq!(row.get("age"), Some(&Value::text("5")));
    assert!(!row.contains("name"));
}

#[test]
fn update_with_blank_required_key_fails() {
    let schema = Schema::new("person", "id").with_required("name");
    let err = check_update(&schema, &DataRow::new().with("name", "  "), false).unwrap_err();
    assert!(err.fields().is_some_and(|f| f.contains_key("name")));
}

#[test]
fn update_leaves_untouched_fields_alone() {
    let record = DataRow::new().with("note", Value::Nil);
    let row = check_update(&line_item(), &record, false).unwrap();
    assert_eq!(row.len(), 1);
    assert_eq!(row.get("note"), Some(&Value::Nil));
}

#[test]
fn update_replaces_nil_with_default() {
    let record = DataRow::new().with("sku", "B-2").with("id", Value::Nil);
    let row = check_update(&line_item(), &record, false).unwrap();
    assert_eq!(row.get("id"), Some(&Value::text("")));
    assert!(!row.contains("qty"));
}

#[test]
fn update_numeric_zero_is_not_blank() {
    let row = check_update(&line_item(), &DataRow::new().with("qty", 0), true).unwrap();
    assert_eq!(row.get("qty"), Some(&Value::Int(0)));
}
