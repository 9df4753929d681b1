//! Markdown block with TeX math.
//!
//! `$...$` and `$$...$$` become `<span class="math math-inline">` and
//! `<span class="math math-display">`, ready for client-side typesetting.
//! Raw HTML in the formula passes through and single newlines become `<br />`.

use crate::props::{css_length, str_prop};
use puckblocks_core::{ComponentConfig, ComponentDescriptor, FieldConfig, FieldOption, Props, VNode};
use pulldown_cmark::{html, Event, Options, Parser};
use tracing::debug;

pub const NAME: &str = "Latex";

const DEFAULT_FONT_SIZE: &str = "20px";

pub fn config() -> ComponentConfig {
    let mut config = ComponentConfig::new();
    config.insert("formula".to_string(), FieldConfig::text());
    config.insert(
        "display".to_string(),
        FieldConfig::radio(vec![
            FieldOption::new("Inline", "inline"),
            FieldOption::new("Block", "block"),
        ])
        .with_default("block"),
    );
    config.insert(
        "fontSize".to_string(),
        FieldConfig::radio(vec![
            FieldOption::new("16", 16),
            FieldOption::new("20", 20),
            FieldOption::new("24", 24),
        ])
        .with_default(20),
    );
    config
}

/// Render Markdown with math extensions to HTML
pub fn markdown_to_html(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_MATH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let events = Parser::new_ext(source, options).map(|event| match event {
        Event::SoftBreak => Event::HardBreak,
        other => other,
    });

    let mut output = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut output, events);
    output
}

pub fn render(props: &Props) -> VNode {
    let formula = str_prop(props, "formula").unwrap_or_default();
    let font_size = css_length(props, "fontSize").unwrap_or_else(|| DEFAULT_FONT_SIZE.to_string());
    debug!(len = formula.len(), "Rendering latex block");

    VNode::element("div")
        .with_attr("class", "markdown-latex")
        .with_style("font-size", font_size)
        .with_child(VNode::raw(markdown_to_html(formula)))
}

pub fn descriptor() -> ComponentDescriptor {
    ComponentDescriptor::new(NAME, config(), render)
}
