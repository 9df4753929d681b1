//! # Content migration
//!
//! Turns legacy page content into a [`PuckData`] document.
//!
//! ```text
//! normalize(input)
//!   nothing / null        → empty document
//!   valid document        → returned as-is
//!   string with a tag     → migrate(s, Html)  → single HTML item
//!   other string          → migrate(s, Text)  → single Text item
//!   anything else         → warning, empty document
//! ```
//!
//! The lower-level [`migrate`] never fails for string arguments: an unknown
//! component type or a failed id generation degrades to returning the input
//! string unchanged.

use crate::document::{ContentItem, PuckData};
use crate::errors::{IdError, MigrateError};
use crate::ids::{component_id, IdSource, UuidSource};
use crate::validity::json_kind;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::{debug, error, warn};

/// An opening tag: `<` followed by a letter, up to the next `>`.
static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[a-zA-Z][^>]*>").unwrap());

/// Heuristic HTML detection.
///
/// Matches any `<letter...>` sequence, so `"a <b> c"` counts as HTML while
/// `"1 < 2 > 0"` does not. Misclassification either way is accepted.
pub fn looks_like_html(content: &str) -> bool {
    HTML_TAG.is_match(content)
}

/// Component types a raw string can be migrated into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MigrationKind {
    Text,
    Html,
}

impl MigrationKind {
    /// Parse a migration tag. Tags are case-sensitive.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Text" => Some(MigrationKind::Text),
            "Html" => Some(MigrationKind::Html),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            MigrationKind::Text => "Text",
            MigrationKind::Html => "Html",
        }
    }

    /// Registered name of the component the item is rendered by
    pub fn component_name(self) -> &'static str {
        match self {
            MigrationKind::Text => "Text",
            MigrationKind::Html => "HTML",
        }
    }

    /// Prop holding the migrated string
    pub fn payload_key(self) -> &'static str {
        match self {
            MigrationKind::Text => "text",
            MigrationKind::Html => "content",
        }
    }
}

/// Result of [`migrate`]: a document, or the original string when no
/// migration could be applied.
#[derive(Debug, Clone, PartialEq)]
pub enum Migration {
    Document(PuckData),
    Passthrough(String),
}

impl Migration {
    pub fn is_document(&self) -> bool {
        matches!(self, Migration::Document(_))
    }

    pub fn document(self) -> Option<PuckData> {
        match self {
            Migration::Document(doc) => Some(doc),
            Migration::Passthrough(_) => None,
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Migration::Document(doc) => doc.into_value(),
            Migration::Passthrough(content) => Value::String(content),
        }
    }
}

/// Migrator bound to an id source
#[derive(Debug, Clone, Default)]
pub struct Migrator<I = UuidSource> {
    ids: I,
}

impl Migrator<UuidSource> {
    pub fn new() -> Self {
        Self { ids: UuidSource }
    }
}

impl<I: IdSource> Migrator<I> {
    pub fn with_id_source(ids: I) -> Self {
        Self { ids }
    }

    /// Migrate a string into a single-item document of `component_type`.
    pub fn migrate(&self, content: &str, component_type: &str) -> Migration {
        let Some(kind) = MigrationKind::from_tag(component_type) else {
            warn!(
                "No migration available for component type: {}",
                component_type
            );
            return Migration::Passthrough(content.to_string());
        };

        match self.migrate_as(content, kind) {
            Ok(doc) => Migration::Document(doc),
            Err(err) => {
                error!(
                    error = %err,
                    "Migration failed for component type \"{}\"", component_type
                );
                Migration::Passthrough(content.to_string())
            }
        }
    }

    /// JSON-level entry point; both arguments must be strings.
    pub fn migrate_value(
        &self,
        content: &Value,
        component_type: &Value,
    ) -> Result<Migration, MigrateError> {
        let content = content.as_str().ok_or(MigrateError::ContentNotString)?;
        let component_type = component_type
            .as_str()
            .ok_or(MigrateError::ComponentTypeNotString)?;
        Ok(self.migrate(content, component_type))
    }

    /// Classify `input` and produce a canonical document.
    pub fn normalize(&self, input: Option<Value>) -> PuckData {
        let value = match input {
            None | Some(Value::Null) => return PuckData::empty(),
            Some(value) => value,
        };

        match value {
            Value::String(content) => self.normalize_str(&content),
            other => {
                let kind = json_kind(&other);
                match PuckData::try_from(other) {
                    Ok(doc) => doc,
                    Err(err) => {
                        warn!(kind, error = %err, "Unrecognized page data, using empty document");
                        PuckData::empty()
                    }
                }
            }
        }
    }

    /// Normalize a raw string: HTML-looking strings become an HTML item,
    /// everything else a Text item.
    pub fn normalize_str(&self, content: &str) -> PuckData {
        let kind = if looks_like_html(content) {
            MigrationKind::Html
        } else {
            MigrationKind::Text
        };
        debug!(kind = kind.tag(), len = content.len(), "Normalizing string content");

        match self.migrate_as(content, kind) {
            Ok(doc) => doc,
            Err(err) => {
                warn!(
                    error = %err,
                    "Migration failed for component type \"{}\", using empty document",
                    kind.tag()
                );
                PuckData::empty()
            }
        }
    }

    fn migrate_as(&self, content: &str, kind: MigrationKind) -> Result<PuckData, IdError> {
        let name = kind.component_name();
        let id = component_id(name, &self.ids)?;
        let item = ContentItem::new(name, id).with_prop(kind.payload_key(), content);
        Ok(PuckData::with_item(item))
    }
}

pub fn migrate(content: &str, component_type: &str) -> Migration {
    Migrator::new().migrate(content, component_type)
}

pub fn migrate_value(content: &Value, component_type: &Value) -> Result<Migration, MigrateError> {
    Migrator::new().migrate_value(content, component_type)
}

pub fn normalize(input: Option<Value>) -> PuckData {
    Migrator::new().normalize(input)
}
