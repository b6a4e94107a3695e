//! End-to-end record editing through the provider context
//!
//! Mirrors how a form would use the bundle: resolve a key, read fields,
//! validate a create, then validate a partial update.

use rowcheck::{CheckConfig, ColumnType, DataRow, PeerGroup, Schema, SchemaCheckContext, SchemaFamily, Value};

fn library() -> SchemaFamily {
    let shelf = PeerGroup::new("shelf");
    SchemaFamily::new()
        .with_schema(
            Schema::new("book", "isbn")
                .with_field("isbn", ColumnType::Text, "")
                .with_field("title", ColumnType::Text, "")
                .with_field("pages", ColumnType::Integer, 0)
                .with_field("rating", ColumnType::Real, 0.0)
                .with_required("isbn")
                .with_required("title"),
        )
        .with_schema(
            Schema::new("chapter", "id")
                .with_field("id", ColumnType::Text, "")
                .with_field("heading", ColumnType::Text, "")
                .with_required("heading"),
        )
        .with_schema(Schema::new("magazine", "issn").with_field("issn", ColumnType::Text, ""))
        .with_parents("book", ["chapter"])
        .with_peers(&shelf, ["book", "magazine"])
}

#[test]
fn create_then_update_a_book() {
    let ctx = SchemaCheckContext::provide(&library());
    let checks = ctx.checks();

    // Form state as the user types.
    let draft = DataRow::new().with("isbn", "978-0").with("title", "  ");
    let err = checks.check_new("book", &draft, false).unwrap_err();
    assert_eq!(err.fields().map(|f| f.len()), Some(1));

    let draft = draft.with("title", "Dune");
    let record = checks.check_new("book", &draft, false).unwrap();
    assert_eq!(record.get("pages"), Some(&Value::Int(0)));
    assert_eq!(checks.pk("book", &record).unwrap(), "978-0");

    // Only the edited field is sent with an update.
    let patch = DataRow::new().with("rating", 4.5);
    let patched = checks.check_update("book", &patch, false).unwrap();
    assert_eq!(patched.len(), 1);

    let bad_patch = DataRow::new().with("title", "");
    assert!(checks.check_update("book", &bad_patch, false).is_err());
}

#[test]
fn nested_editor_checks_relationships() {
    let ctx = SchemaCheckContext::provide(&library());
    let checks = ctx.checks();

    for child in checks.parents("book") {
        assert!(checks.check_parent_hood("book", &child).is_ok());
        assert!(checks.verify_table(&child).unwrap());
    }
    assert!(checks.check_sibling_hood("book", "magazine").is_ok());
    assert!(checks.check_sibling_hood("book", "chapter").is_err());
}

#[test]
fn display_reads_with_configured_defaults() {
    let ctx = SchemaCheckContext::provide_with(
        &library(),
        CheckConfig::new().with_ignore_defaults(true),
    );
    let row = DataRow::new().with("isbn", "1").with("title", "Emma");
    let view = ctx.props_view("book", &["title", "pages"], &row, true);
    let props = view.props.unwrap();
    assert_eq!(props.get("title"), Some(&Value::text("Emma")));
    assert_eq!(props.get("pages"), Some(&Value::Int(0)));
    assert_eq!(ctx.pk_view("book", &row, true).pk.as_deref(), Some("1"));
}
