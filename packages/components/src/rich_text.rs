//! Rich text block. Content is HTML produced by the host's rich text editor
//! widget and renders exactly like the HTML block.

use crate::html::markup_block;
use crate::props::str_prop;
use puckblocks_core::{ComponentConfig, ComponentDescriptor, FieldConfig, Props, VNode};

pub const NAME: &str = "RichText";

pub fn config() -> ComponentConfig {
    let mut config = ComponentConfig::new();
    config.insert("content".to_string(), FieldConfig::custom());
    config
}

pub fn render(props: &Props) -> VNode {
    markup_block(str_prop(props, "content"))
}

pub fn descriptor() -> ComponentDescriptor {
    ComponentDescriptor::new(NAME, config(), render)
}
