use crate::*;
use serde_json::json;
use std::sync::Arc;

fn text_render(props: &Props) -> VNode {
    let text = props.get("text").and_then(|v| v.as_str()).unwrap_or_default();
    VNode::element("p").with_child(VNode::text(text))
}

fn text_config() -> ComponentConfig {
    let mut config = ComponentConfig::new();
    config.insert("text".to_string(), FieldConfig::text());
    config.insert("fontSize".to_string(), FieldConfig::number());
    config
}

// Validity

#[test]
fn test_empty_document_is_valid() {
    let value = json!({ "content": [], "root": { "props": {} }, "zones": {} });
    assert_eq!(validate(&value), Validity::Valid);
    assert!(is_puck_data(&value));
}

#[test]
fn test_document_with_content_and_zones_is_valid() {
    let value = json!({
        "content": [
            { "type": "Text", "props": { "id": "text-1", "text": "Hello" } },
            { "type": "HTML", "props": { "id": "html-1", "content": "<p>World</p>" } }
        ],
        "root": { "props": { "title": "Complex Page", "metadata": { "author": "Test Author" } } },
        "zones": { "header": ["text-1"], "content": ["html-1"], "footer": [] }
    });
    assert!(is_puck_data(&value));
}

#[test]
fn test_extra_keys_do_not_affect_validity() {
    let value = json!({
        "content": [],
        "root": { "props": {} },
        "zones": {},
        "extraProperty": "should not affect validation"
    });
    assert!(is_puck_data(&value));
}

#[test]
fn test_non_objects_are_invalid() {
    for value in [json!(null), json!("string"), json!(123), json!(true), json!([]), json!([1, 2, 3])] {
        let validity = validate(&value);
        assert!(!validity.is_valid(), "{} should be invalid", value);
        assert!(matches!(
            validity.reasons(),
            [InvalidReason::NotAnObject { .. }]
        ));
    }
}

#[test]
fn test_missing_keys_are_reported() {
    assert_eq!(
        validate(&json!({})),
        Validity::Invalid(vec![
            InvalidReason::MissingKey("content"),
            InvalidReason::MissingKey("root"),
            InvalidReason::MissingKey("zones"),
        ])
    );
    assert_eq!(
        validate(&json!({ "content": [], "root": {} })),
        Validity::Invalid(vec![InvalidReason::MissingKey("zones")])
    );
    assert_eq!(
        validate(&json!({ "root": {}, "zones": {} })),
        Validity::Invalid(vec![InvalidReason::MissingKey("content")])
    );
}

#[test]
fn test_content_must_be_an_array() {
    let not_array = json!({ "content": "not an array", "root": { "props": {} }, "zones": {} });
    assert_eq!(
        validate(&not_array),
        Validity::Invalid(vec![InvalidReason::ContentNotArray { found: "string" }])
    );

    let null_content = json!({ "content": null, "root": { "props": {} }, "zones": {} });
    assert!(!is_puck_data(&null_content));
}

#[test]
fn test_invalid_reason_display() {
    assert_eq!(
        InvalidReason::MissingKey("zones").to_string(),
        "missing required key `zones`"
    );
    assert_eq!(
        InvalidReason::ContentNotArray { found: "null" }.to_string(),
        "`content` must be an array, found null"
    );
}

// Document

#[test]
fn test_empty_document_shape() {
    let doc = PuckData::empty();
    assert_eq!(
        doc.into_value(),
        json!({ "content": [], "root": { "props": {} }, "zones": {} })
    );
}

#[test]
fn test_document_round_trips_unchanged() {
    let value = json!({
        "content": [{ "type": "Text", "props": { "id": "a", "text": "Hi" } }],
        "root": { "props": { "nested": { "deep": { "very": "deeply" } } } },
        "zones": { "main": ["a"] },
        "version": 3
    });
    let doc = PuckData::try_from(value.clone()).unwrap();
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.ids(), vec!["a".to_string()]);
    assert_eq!(doc.zones(), &json!({ "main": ["a"] }));
    assert_eq!(doc.into_value(), value);
}

#[test]
fn test_document_try_from_rejects_invalid() {
    let err = PuckData::try_from(json!({ "content": {} })).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("`content` must be an array"));
    assert!(message.contains("missing required key `root`"));
}

#[test]
fn test_document_deserializes_through_validation() {
    let doc: PuckData =
        serde_json::from_str(r#"{"content":[],"root":{"props":{}},"zones":{}}"#).unwrap();
    assert!(doc.is_empty());

    let err = serde_json::from_str::<PuckData>(r#"{"content":[]}"#);
    assert!(err.is_err());
}

#[test]
fn test_items_decode_lazily() {
    let doc = PuckData::try_from(json!({
        "content": [
            { "type": "Text", "props": { "id": "t1", "text": "ok" } },
            42
        ],
        "root": {},
        "zones": {}
    }))
    .unwrap();

    let items: Vec<_> = doc.items().collect();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].as_ref().unwrap().component_type, "Text");
    assert!(items[1].is_err());
}

#[test]
fn test_push_appends_in_order() {
    let mut doc = PuckData::empty();
    doc.push(ContentItem::new("Text", "t1").with_prop("text", "one"));
    doc.push(ContentItem::new("Text", "t2").with_prop("text", "two"));
    assert_eq!(doc.ids(), vec!["t1".to_string(), "t2".to_string()]);
}

// Fields

#[test]
fn test_field_config_serializes_in_editor_shape() {
    let field = FieldConfig::radio(vec![
        FieldOption::new("16", 16),
        FieldOption::new("Bold", "bold"),
    ])
    .with_default(20);

    assert_eq!(
        serde_json::to_value(&field).unwrap(),
        json!({
            "type": "radio",
            "options": [
                { "label": "16", "value": 16 },
                { "label": "Bold", "value": "bold" }
            ],
            "default": 20
        })
    );
}

#[test]
fn test_field_config_parses_all_types() {
    for (raw, expected) in [
        ("text", FieldType::Text),
        ("radio", FieldType::Radio),
        ("select", FieldType::Select),
        ("number", FieldType::Number),
        ("custom", FieldType::Custom),
    ] {
        let field: FieldConfig = serde_json::from_value(json!({ "type": raw })).unwrap();
        assert_eq!(field.field_type, expected);
        assert!(field.options.is_none());
    }
}

// Compilation

#[test]
fn test_compile_simple_component() {
    let descriptor = ComponentDescriptor::new("Text", text_config(), text_render);
    let render = descriptor.render.clone();

    let registry = compile_component(descriptor);

    assert_eq!(registry.len(), 1);
    let compiled = registry.get("Text").expect("Text should be registered");
    assert_eq!(compiled.fields, text_config());
    assert!(Arc::ptr_eq(&compiled.render, &render));
}

#[test]
fn test_compiled_render_is_callable_with_props() {
    let registry = compile_component(ComponentDescriptor::new("Text", text_config(), text_render));
    let mut props = Props::new();
    props.insert("text".to_string(), json!("Hello World"));

    let node = registry.get("Text").unwrap().render(&props);
    assert_eq!(node.tag(), Some("p"));
    assert_eq!(node.children(), &[VNode::text("Hello World")]);
}

#[test]
fn test_compile_keeps_name_verbatim() {
    for name in ["My-Special_Component123", "A"] {
        let registry = compile_component(ComponentDescriptor::new(name, ComponentConfig::new(), text_render));
        assert!(registry.contains(name));
        assert!(registry.get(name).unwrap().fields.is_empty());
    }
}

#[test]
fn test_merge_is_last_write_wins() {
    let first = compile_component(ComponentDescriptor::new("Text", text_config(), text_render));
    let second = compile_component(ComponentDescriptor::new("Text", ComponentConfig::new(), |_: &Props| {
        VNode::element("span")
    }));

    let registry = ComponentRegistry::from_fragments([first, second]);

    assert_eq!(registry.len(), 1);
    let compiled = registry.get("Text").unwrap();
    assert!(compiled.fields.is_empty());
    assert_eq!(compiled.render(&Props::new()).tag(), Some("span"));
}

#[test]
fn test_try_merge_rejects_duplicates() {
    let mut registry = compile_component(ComponentDescriptor::new("Text", text_config(), text_render));
    let duplicate = compile_component(ComponentDescriptor::new("Text", ComponentConfig::new(), text_render));

    let err = registry.try_merge(duplicate).unwrap_err();
    assert_eq!(
        err,
        RegistryError::DuplicateComponent {
            name: "Text".to_string()
        }
    );
    assert_eq!(registry.get("Text").unwrap().fields, text_config());

    let other = compile_component(ComponentDescriptor::new("Other", ComponentConfig::new(), text_render));
    registry.try_merge(other).unwrap();
    assert_eq!(registry.names().collect::<Vec<_>>(), vec!["Other", "Text"]);
}

#[test]
fn test_registry_serializes_fields_only() {
    let registry = compile_component(ComponentDescriptor::new("Text", text_config(), text_render));
    assert_eq!(
        serde_json::to_value(&registry).unwrap(),
        json!({
            "Text": {
                "fields": {
                    "fontSize": { "type": "number" },
                    "text": { "type": "text" }
                }
            }
        })
    );
}

// VNode

#[test]
fn test_vnode_builders_ignore_non_elements() {
    let node = VNode::text("x").with_attr("id", "a").with_child(VNode::text("y"));
    assert_eq!(node, VNode::text("x"));
    assert_eq!(node.attr("id"), None);

    let el = VNode::element("img").with_attr("src", "a.png").with_style("max-width", "100%");
    assert_eq!(el.attr("src"), Some("a.png"));
    assert_eq!(el.style("max-width"), Some("100%"));
}

// Ids

#[test]
fn test_component_id_prefix() {
    let id = component_id("Text", &UuidSource).unwrap();
    assert!(id.starts_with("Text-"));
    assert_eq!(id.len(), "Text-".len() + 36);
}
