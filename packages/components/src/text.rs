//! Paragraph of plain text with optional weight and size.

use crate::props::{css_length, str_prop};
use puckblocks_core::{ComponentConfig, ComponentDescriptor, FieldConfig, FieldOption, Props, VNode};

pub const NAME: &str = "Text";

pub fn config() -> ComponentConfig {
    let mut config = ComponentConfig::new();
    config.insert("text".to_string(), FieldConfig::text());
    config.insert(
        "fontWeight".to_string(),
        FieldConfig::radio(vec![
            FieldOption::new("Normal", "normal"),
            FieldOption::new("Bold", "bold"),
        ]),
    );
    config.insert(
        "fontSize".to_string(),
        FieldConfig::radio(vec![
            FieldOption::new("16", 16),
            FieldOption::new("20", 20),
            FieldOption::new("24", 24),
        ]),
    );
    config
}

pub fn render(props: &Props) -> VNode {
    let mut paragraph = VNode::element("p");

    if let Some(weight) = str_prop(props, "fontWeight").filter(|w| !w.is_empty()) {
        paragraph = paragraph.with_style("font-weight", weight);
    }
    if let Some(size) = css_length(props, "fontSize") {
        paragraph = paragraph.with_style("font-size", size);
    }

    match str_prop(props, "text") {
        Some(text) if !text.is_empty() => paragraph.with_child(VNode::text(text)),
        _ => paragraph,
    }
}

pub fn descriptor() -> ComponentDescriptor {
    ComponentDescriptor::new(NAME, config(), render)
}
