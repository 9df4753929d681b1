//! Centered image. The URL is picked by a host-side upload widget, so the
//! field is `custom`.

use crate::props::str_prop;
use puckblocks_core::{ComponentConfig, ComponentDescriptor, FieldConfig, Props, VNode};

pub const NAME: &str = "Image";

pub fn config() -> ComponentConfig {
    let mut config = ComponentConfig::new();
    config.insert("imageUrl".to_string(), FieldConfig::custom());
    config
}

pub fn render(props: &Props) -> VNode {
    let container = VNode::element("div")
        .with_style("text-align", "center")
        .with_style("margin", "1em 0");

    match str_prop(props, "imageUrl") {
        Some(url) if !url.is_empty() => container.with_child(
            VNode::element("img")
                .with_attr("src", url)
                .with_attr("alt", "Rendered")
                .with_style("max-width", "100%")
                .with_style("max-height", "400px")
                .with_style("border-radius", "8px"),
        ),
        _ => container,
    }
}

pub fn descriptor() -> ComponentDescriptor {
    ComponentDescriptor::new(NAME, config(), render)
}
