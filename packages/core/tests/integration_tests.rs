//! Integration tests for content migration

use puckblocks_core::{
    is_puck_data, looks_like_html, migrate, migrate_value, normalize, IdError, IdSource,
    MigrateError, Migration, MigrationKind, Migrator, PuckData,
};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Hands out `uuid-1`, `uuid-2`, ...
#[derive(Default)]
struct SequentialIds(AtomicUsize);

impl IdSource for SequentialIds {
    fn next_id(&self) -> Result<String, IdError> {
        let n = self.0.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(format!("uuid-{}", n))
    }
}

struct FixedId;

impl IdSource for FixedId {
    fn next_id(&self) -> Result<String, IdError> {
        Ok("mock-uuid-1234".to_string())
    }
}

struct FailingIds;

impl IdSource for FailingIds {
    fn next_id(&self) -> Result<String, IdError> {
        Err(IdError::Generation("UUID generation failed".to_string()))
    }
}

fn only_item(doc: &PuckData) -> Value {
    assert_eq!(doc.len(), 1);
    doc.content()[0].clone()
}

#[test]
fn test_migrate_plain_text() {
    let migrator = Migrator::with_id_source(FixedId);

    let doc = migrator
        .migrate("Hello World", "Text")
        .document()
        .expect("Text migration should produce a document");

    assert!(is_puck_data(&doc.clone().into_value()));
    assert_eq!(
        only_item(&doc),
        json!({ "type": "Text", "props": { "id": "Text-mock-uuid-1234", "text": "Hello World" } })
    );
    assert_eq!(doc.root(), &json!({ "props": {} }));
    assert_eq!(doc.zones(), &json!({}));
}

#[test]
fn test_migrate_text_keeps_content_verbatim() {
    let migrator = Migrator::with_id_source(FixedId);
    for text in ["", "Hello! @#$%^&*()_+ 世界 🌍", "Line 1\nLine 2\nLine 3"] {
        let doc = migrator.migrate(text, "Text").document().unwrap();
        assert_eq!(only_item(&doc)["props"]["text"], json!(text));
    }
}

#[test]
fn test_migrate_html() {
    let migrator = Migrator::with_id_source(FixedId);
    let html = "<p>Hello <strong>World</strong></p>";

    let doc = migrator.migrate(html, "Html").document().unwrap();

    assert_eq!(
        only_item(&doc),
        json!({ "type": "HTML", "props": { "id": "HTML-mock-uuid-1234", "content": html } })
    );
}

#[test]
fn test_migrate_html_keeps_markup_verbatim() {
    let migrator = Migrator::with_id_source(FixedId);
    for html in [
        "<div style=\"color: red;\"><script>alert(\"test\")</script></div>",
        "<div><p>Unclosed tags<span>",
        "\n  <div class=\"container\">\n    <h1>Title</h1>\n  </div>\n",
    ] {
        let doc = migrator.migrate(html, "Html").document().unwrap();
        assert_eq!(only_item(&doc)["props"]["content"], json!(html));
    }
}

#[test]
fn test_unsupported_types_pass_through() {
    for component_type in ["UnsupportedComponent", "", "text", "TEXT", "HTML"] {
        assert_eq!(
            migrate("Some content", component_type),
            Migration::Passthrough("Some content".to_string())
        );
    }
}

#[test]
fn test_migrate_value_contract_violations() {
    assert_eq!(
        migrate_value(&json!(123), &json!("Text")),
        Err(MigrateError::ContentNotString)
    );
    assert_eq!(
        migrate_value(&Value::Null, &json!("Text")),
        Err(MigrateError::ContentNotString)
    );
    assert_eq!(
        migrate_value(&json!("Valid content"), &json!(123)),
        Err(MigrateError::ComponentTypeNotString)
    );
    assert_eq!(
        migrate_value(&json!("Valid content"), &Value::Null),
        Err(MigrateError::ComponentTypeNotString)
    );

    assert_eq!(MigrateError::ContentNotString.to_string(), "Content must be a string");
    assert_eq!(
        MigrateError::ComponentTypeNotString.to_string(),
        "Component type must be a string"
    );
}

#[test]
fn test_migrate_value_unknown_type_passes_through() {
    let result = migrate_value(&json!("x"), &json!("UnknownType")).unwrap();
    assert_eq!(result.into_value(), json!("x"));
}

#[test]
fn test_id_failure_falls_back_to_original_content() {
    let migrator = Migrator::with_id_source(FailingIds);
    assert_eq!(
        migrator.migrate("Test content", "Text"),
        Migration::Passthrough("Test content".to_string())
    );
}

#[test]
fn test_ids_are_unique_per_migration() {
    let migrator = Migrator::with_id_source(SequentialIds::default());

    let first = migrator.migrate("Content 1", "Text").document().unwrap();
    let second = migrator.migrate("Content 2", "Text").document().unwrap();
    let third = migrator.migrate("<p>Content 3</p>", "Html").document().unwrap();

    assert_eq!(first.ids(), vec!["Text-uuid-1".to_string()]);
    assert_eq!(second.ids(), vec!["Text-uuid-2".to_string()]);
    assert_eq!(third.ids(), vec!["HTML-uuid-3".to_string()]);
}

#[test]
fn test_default_ids_differ_for_identical_content() {
    let first = migrate("same", "Text").document().unwrap();
    let second = migrate("same", "Text").document().unwrap();
    assert_ne!(first.ids(), second.ids());
}

#[test]
fn test_html_detection() {
    assert!(looks_like_html("<h1>Hi</h1>"));
    assert!(looks_like_html("before <br/> after"));
    assert!(looks_like_html("a <b> c"));
    assert!(!looks_like_html("Hello World"));
    assert!(!looks_like_html("1 < 2 > 0"));
    assert!(!looks_like_html("</p>"));
    assert!(!looks_like_html("<>"));
}

#[test]
fn test_normalize_absent_and_null() {
    let empty = json!({ "content": [], "root": { "props": {} }, "zones": {} });
    assert_eq!(normalize(None).into_value(), empty);
    assert_eq!(normalize(Some(Value::Null)).into_value(), empty);
}

#[test]
fn test_normalize_unexpected_values() {
    let empty = PuckData::empty();
    for value in [json!(42), json!(true), json!([1, 2]), json!({ "content": [] })] {
        assert_eq!(normalize(Some(value)), empty);
    }
}

#[test]
fn test_normalize_valid_document_is_unchanged() {
    let value = json!({
        "content": [{ "type": "Text", "props": { "id": "text-1", "text": "Hello" } }],
        "root": { "props": { "title": "Page Title" } },
        "zones": { "main": ["text-1"] },
        "extra": true
    });
    assert_eq!(normalize(Some(value.clone())).into_value(), value);
}

#[test]
fn test_normalize_plain_string() {
    let doc = Migrator::with_id_source(FixedId).normalize(Some(json!("Hello World")));
    assert_eq!(
        only_item(&doc),
        json!({ "type": "Text", "props": { "id": "Text-mock-uuid-1234", "text": "Hello World" } })
    );
}

#[test]
fn test_normalize_html_string() {
    let doc = normalize(Some(json!("<h1>Hi</h1>")));
    let item = only_item(&doc);
    assert_eq!(item["type"], json!("HTML"));
    assert_eq!(item["props"]["content"], json!("<h1>Hi</h1>"));
    assert!(item["props"]["id"].as_str().unwrap().starts_with("HTML-"));
}

#[test]
fn test_normalize_string_with_failing_ids_is_empty() {
    let doc = Migrator::with_id_source(FailingIds).normalize(Some(json!("Hello")));
    assert_eq!(doc, PuckData::empty());
}

#[test]
fn test_migration_kind_metadata() {
    assert_eq!(MigrationKind::from_tag("Html"), Some(MigrationKind::Html));
    assert_eq!(MigrationKind::Html.component_name(), "HTML");
    assert_eq!(MigrationKind::Html.payload_key(), "content");
    assert_eq!(MigrationKind::Text.payload_key(), "text");
    assert_eq!(MigrationKind::from_tag("Image"), None);
}
