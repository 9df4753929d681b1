//! # puckblocks core
//!
//! Data model and pure transformations shared by every puckblocks crate.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ raw input: JSON value | string | nothing    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ migrate: classify + normalize               │
//! │  - valid document  → returned as-is         │
//! │  - HTML string     → single HTML item       │
//! │  - plain string    → single Text item       │
//! │  - anything else   → empty document         │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ PuckData + ComponentRegistry → host editor  │
//! │ (or puckblocks-renderer for static HTML)    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use puckblocks_core::{normalize, compile_component, ComponentDescriptor};
//!
//! let doc = normalize(Some(serde_json::json!("<h1>Hi</h1>")));
//! assert_eq!(doc.len(), 1);
//!
//! let registry = compile_component(ComponentDescriptor::new("Text", config, render));
//! ```

mod compile;
mod document;
mod errors;
mod field;
mod ids;
mod migrate;
mod validity;
mod vdom;

pub use compile::{compile_component, CompiledComponent, ComponentDescriptor, ComponentRegistry, RenderFn};
pub use document::{ContentItem, Props, PuckData};
pub use errors::{DocumentError, IdError, MigrateError, RegistryError};
pub use field::{ComponentConfig, FieldConfig, FieldOption, FieldType, OptionValue};
pub use ids::{component_id, IdSource, UuidSource};
pub use migrate::{
    looks_like_html, migrate, migrate_value, normalize, Migration, MigrationKind, Migrator,
};
pub use validity::{is_puck_data, validate, InvalidReason, Validity};
pub use vdom::VNode;

#[cfg(test)]
mod tests;
