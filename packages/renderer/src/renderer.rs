use puckblocks_core::{normalize, ComponentRegistry, PuckData, VNode};
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// Errors that can occur during HTML rendering (strict mode only)
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("No component registered for type '{component_type}' (item {index})")]
    UnknownComponent { component_type: String, index: usize },

    #[error("Invalid content item at index {index}: {message}")]
    InvalidItem { index: usize, message: String },
}

/// Options for HTML rendering
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
    /// Wrap the output in a complete HTML page
    pub full_page: bool,
    /// Page title, used with `full_page`
    pub title: String,
    /// Fail on unknown components and malformed items instead of emitting a comment
    pub strict: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
            full_page: false,
            title: "puckblocks".to_string(),
            strict: false,
        }
    }
}

struct Context {
    options: RenderOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: RenderOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Render every content item of `doc` through `registry`, in order.
#[instrument(skip(doc, registry, options), fields(items = doc.len(), full_page = options.full_page))]
pub fn render_document(
    doc: &PuckData,
    registry: &ComponentRegistry,
    options: RenderOptions,
) -> Result<String, RenderError> {
    let mut ctx = Context::new(options);

    if ctx.options.full_page {
        open_page(&mut ctx);
    }

    for (index, item) in doc.items().enumerate() {
        let item = match item {
            Ok(item) => item,
            Err(err) => {
                if ctx.options.strict {
                    return Err(RenderError::InvalidItem {
                        index,
                        message: err.to_string(),
                    });
                }
                warn!(index, error = %err, "Skipping malformed content item");
                render_node(&VNode::comment(format!("invalid content item {}", index)), &mut ctx);
                continue;
            }
        };

        match registry.get(&item.component_type) {
            Some(component) => {
                debug!(index, component = %item.component_type, "Rendering content item");
                render_node(&component.render(&item.props), &mut ctx);
            }
            None if ctx.options.strict => {
                return Err(RenderError::UnknownComponent {
                    component_type: item.component_type,
                    index,
                });
            }
            None => {
                warn!(index, component = %item.component_type, "No component registered for content item");
                render_node(
                    &VNode::comment(format!("unknown component: {}", item.component_type)),
                    &mut ctx,
                );
            }
        }
    }

    if ctx.options.full_page {
        close_page(&mut ctx);
    }

    Ok(ctx.get_output())
}

/// Normalize raw input first (absent input renders the empty document).
pub fn render_input(
    input: Option<Value>,
    registry: &ComponentRegistry,
    options: RenderOptions,
) -> Result<String, RenderError> {
    render_document(&normalize(input), registry, options)
}

/// Render a bare list of nodes, no page wrapper
pub fn render_nodes(nodes: &[VNode], options: RenderOptions) -> String {
    let mut ctx = Context::new(options);
    for node in nodes {
        render_node(node, &mut ctx);
    }
    ctx.get_output()
}

fn open_page(ctx: &mut Context) {
    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html>");
    ctx.indent();

    ctx.add_line("<head>");
    ctx.indent();
    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    let title = format!("<title>{}</title>", escape_html(&ctx.options.title));
    ctx.add_line(&title);
    ctx.dedent();
    ctx.add_line("</head>");

    ctx.add_line("<body>");
    ctx.indent();
}

fn close_page(ctx: &mut Context) {
    ctx.dedent();
    ctx.add_line("</body>");
    ctx.dedent();
    ctx.add_line("</html>");
}

fn render_node(node: &VNode, ctx: &mut Context) {
    match node {
        VNode::Element {
            tag,
            attributes,
            styles,
            children,
        } => render_element(tag, attributes, styles, children, ctx),
        VNode::Text { content } => ctx.add(&escape_html(content)),
        VNode::Raw { html } => {
            if html.is_empty() {
                return;
            }
            if ctx.options.pretty {
                ctx.add_indent();
            }
            ctx.add(html);
            if ctx.options.pretty && !html.ends_with('\n') {
                ctx.add("\n");
            }
        }
        VNode::Comment { content } => {
            ctx.add_line(&format!("<!-- {} -->", escape_comment(content)));
        }
    }
}

fn render_element(
    tag: &str,
    attributes: &BTreeMap<String, String>,
    styles: &BTreeMap<String, String>,
    children: &[VNode],
    ctx: &mut Context,
) {
    // Opening tag
    if ctx.options.pretty {
        ctx.add_indent();
    }
    ctx.add(&format!("<{}", tag));

    for (name, value) in attributes {
        ctx.add(&format!(" {}=\"{}\"", name, escape_html(value)));
    }

    if !styles.is_empty() {
        let declarations: Vec<String> = styles
            .iter()
            .map(|(key, value)| format!("{}: {}", key, value))
            .collect();
        ctx.add(&format!(" style=\"{}\"", escape_html(&declarations.join("; "))));
    }

    // Self-closing tags
    if children.is_empty() && is_self_closing(tag) {
        ctx.add(" />");
        if ctx.options.pretty {
            ctx.add("\n");
        }
        return;
    }

    ctx.add(">");

    let block = ctx.options.pretty && has_block_children(children);
    if !children.is_empty() {
        if block {
            ctx.add("\n");
        }
        ctx.indent();

        for child in children {
            render_node(child, ctx);
        }

        ctx.dedent();
        if block {
            ctx.add_indent();
        }
    }

    // Closing tag
    ctx.add(&format!("</{}>", tag));
    if ctx.options.pretty {
        ctx.add("\n");
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Comment bodies can't contain `-`, `<` or `>` at all, so no sequence
/// inside them can open, close or nest a comment.
fn escape_comment(text: &str) -> String {
    text.replace('-', "&#45;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn is_self_closing(tag: &str) -> bool {
    matches!(
        tag,
        "img"
            | "input"
            | "br"
            | "hr"
            | "meta"
            | "link"
            | "area"
            | "base"
            | "col"
            | "embed"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

fn has_block_children(children: &[VNode]) -> bool {
    children
        .iter()
        .any(|child| !matches!(child, VNode::Text { .. }))
}
