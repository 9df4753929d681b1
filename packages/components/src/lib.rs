//! # Built-in blocks
//!
//! | name     | payload prop | renders as                          |
//! |----------|--------------|-------------------------------------|
//! | Text     | `text`       | styled paragraph                    |
//! | Image    | `imageUrl`   | centered image                      |
//! | HTML     | `content`    | raw markup                          |
//! | Latex    | `formula`    | Markdown with math spans            |
//! | RichText | `content`    | raw markup from a rich text editor  |
//!
//! Each block module exposes `NAME`, `config()`, `render()` and
//! `descriptor()`; [`default_registry`] compiles all of them.

pub mod html;
pub mod image;
pub mod latex;
mod props;
pub mod rich_text;
pub mod text;

use puckblocks_core::{compile_component, ComponentDescriptor, ComponentRegistry};

/// Descriptors of every built-in block
pub fn descriptors() -> Vec<ComponentDescriptor> {
    vec![
        text::descriptor(),
        latex::descriptor(),
        image::descriptor(),
        html::descriptor(),
        rich_text::descriptor(),
    ]
}

/// Registry of every built-in block, keyed by component name
pub fn default_registry() -> ComponentRegistry {
    ComponentRegistry::from_fragments(descriptors().into_iter().map(compile_component))
}
