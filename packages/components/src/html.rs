//! Raw HTML block. Markup is inserted as-is; sanitizing it is the caller's
//! business.

use crate::props::str_prop;
use puckblocks_core::{ComponentConfig, ComponentDescriptor, FieldConfig, Props, VNode};

pub const NAME: &str = "HTML";

pub fn config() -> ComponentConfig {
    let mut config = ComponentConfig::new();
    config.insert(
        "content".to_string(),
        FieldConfig::text().with_label("HTML Content").with_default(""),
    );
    config
}

pub fn render(props: &Props) -> VNode {
    markup_block(str_prop(props, "content"))
}

/// `<div style="margin: 1em 0"><div>{markup}</div></div>`, inner div only
/// when there is markup.
pub(crate) fn markup_block(markup: Option<&str>) -> VNode {
    let container = VNode::element("div").with_style("margin", "1em 0");
    match markup {
        Some(markup) if !markup.is_empty() => {
            container.with_child(VNode::element("div").with_child(VNode::raw(markup)))
        }
        _ => container,
    }
}

pub fn descriptor() -> ComponentDescriptor {
    ComponentDescriptor::new(NAME, config(), render)
}
