//! Integration tests for the provider context and its view helpers

use rowcheck_checks::{CheckConfig, SchemaCheckContext};
use rowcheck_foundation::{ColumnType, DataRow, ErrorKind, Value};
use rowcheck_schema::{Schema, SchemaFamily};

fn family() -> SchemaFamily {
    SchemaFamily::new().with_schema(
        Schema::new("contact", "id")
            .with_field("id", ColumnType::Text, "")
            .with_field("name", ColumnType::Text, "")
            .with_field("phone", ColumnType::Text, "n/a")
            .with_required("name"),
    )
}

/// Renders one field the way a display component would.
fn render_piece(ctx: &SchemaCheckContext, table: &str, col: &str, row: &DataRow) -> String {
    match ctx.checks().prop(table, col, row, false) {
        Ok(value) => value.display_string(),
        Err(err) => format!("error: {err}"),
    }
}

#[test]
fn component_renders_value_or_error() {
    let ctx = SchemaCheckContext::provide(&family());
    let row = DataRow::new().with("name", "Grace");
    assert_eq!(render_piece(&ctx, "contact", "name", &row), "Grace");
    assert!(render_piece(&ctx, "contact", "email", &row).starts_with("error: Schema 'contact'"));

    let unscoped = SchemaCheckContext::default();
    assert!(render_piece(&unscoped, "contact", "name", &row).contains("SchemaCheckProvider"));
}

#[test]
fn context_is_threaded_by_clone() {
    let root = SchemaCheckContext::provide(&family());
    let children: Vec<SchemaCheckContext> = (0..3).map(|_| root.clone()).collect();
    for child in &children {
        assert_eq!(child.checks().pk_field("contact").unwrap(), "id");
    }
}

#[test]
fn provider_freezes_the_family() {
    let mut family = family();
    let ctx = SchemaCheckContext::provide(&family);
    family.map.remove("contact");
    assert_eq!(ctx.checks().verify_table("contact"), Ok(true));
}

#[test]
fn props_view_respects_config() {
    let plain = SchemaCheckContext::provide(&family());
    let view = plain.props_view("contact", &["phone"], &DataRow::new(), true);
    assert_eq!(view.props.unwrap().get("phone"), Some(&Value::Nil));

    let defaulted = SchemaCheckContext::provide_with(
        &family(),
        CheckConfig::new().with_ignore_defaults(true),
    );
    let view = defaulted.props_view("contact", &["phone"], &DataRow::new(), true);
    assert_eq!(view.props.unwrap().get("phone"), Some(&Value::text("n/a")));
}

#[test]
fn props_view_error() {
    let ctx = SchemaCheckContext::provide(&family());
    let view = ctx.props_view("contact", &["name", "fax"], &DataRow::new(), true);
    assert!(view.has_error());
    assert!(view.props.is_none());
    assert!(matches!(
        view.error.map(|e| e.kind),
        Some(ErrorKind::UnknownField { .. })
    ));
}

#[test]
fn pk_view() {
    let ctx = SchemaCheckContext::provide(&family());
    let ok = ctx.pk_view("contact", &DataRow::new().with("id", "c-9"), true);
    assert_eq!(ok.pk.as_deref(), Some("c-9"));

    let missing = ctx.pk_view("contact", &DataRow::new(), true);
    assert!(missing.has_error());
    assert!(missing.pk.is_none());

    let disabled = ctx.pk_view("contact", &DataRow::new(), false);
    assert!(!disabled.has_error());
    assert!(disabled.pk.is_none());
}

#[test]
fn configured_blank_message_reaches_bundle() {
    let ctx = SchemaCheckContext::provide_with(
        &family(),
        CheckConfig::new().with_blank_message("Please fill in"),
    );
    let err = ctx
        .checks()
        .check_new("contact", &DataRow::new(), false)
        .unwrap_err();
    assert_eq!(
        err.fields().and_then(|f| f.get("name")).map(String::as_str),
        Some("Please fill in")
    );
    assert_eq!(ctx.config().blank_message, "Please fill in");
}
