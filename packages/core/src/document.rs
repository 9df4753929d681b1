//! # Canonical Document
//!
//! `PuckData` is the renderer-ready page structure handed to the host editor:
//!
//! ```text
//! {
//!   "content": [ { "type": "Text", "props": { "id": "Text-…", "text": "…" } } ],
//!   "root":    { "props": {} },
//!   "zones":   { "<zone>": ["<item id>", …] }
//! }
//! ```
//!
//! The document is kept as the JSON object it arrived as, so a value that
//! passes [`validate`](crate::validate) round-trips untouched (extra keys
//! included). Items are decoded into [`ContentItem`] on demand.

use crate::errors::DocumentError;
use crate::validity::{
    json_kind, validate, InvalidReason, Validity, CONTENT_KEY, ROOT_KEY, ZONES_KEY,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Property bag of a content item
pub type Props = Map<String, Value>;

static NULL: Value = Value::Null;

/// One renderable block of a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    #[serde(rename = "type")]
    pub component_type: String,

    #[serde(default)]
    pub props: Props,
}

impl ContentItem {
    pub fn new(component_type: impl Into<String>, id: impl Into<String>) -> Self {
        let mut props = Props::new();
        props.insert("id".to_string(), Value::String(id.into()));
        Self {
            component_type: component_type.into(),
            props,
        }
    }

    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.props.get("id").and_then(Value::as_str)
    }

    pub fn into_value(self) -> Value {
        json!({
            "type": self.component_type,
            "props": Value::Object(self.props),
        })
    }
}

/// Canonical page document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct PuckData(Map<String, Value>);

impl PuckData {
    /// `{ content: [], root: { props: {} }, zones: {} }`
    pub fn empty() -> Self {
        let mut fields = Map::new();
        fields.insert(CONTENT_KEY.to_string(), Value::Array(Vec::new()));
        fields.insert(ROOT_KEY.to_string(), json!({ "props": {} }));
        fields.insert(ZONES_KEY.to_string(), Value::Object(Map::new()));
        Self(fields)
    }

    /// Empty document holding exactly one item
    pub fn with_item(item: ContentItem) -> Self {
        let mut doc = Self::empty();
        doc.push(item);
        doc
    }

    pub fn from_json(source: &str) -> Result<Self, DocumentError> {
        let value: Value = serde_json::from_str(source)?;
        Self::try_from(value)
    }

    /// Raw content entries, in rendering order
    pub fn content(&self) -> &[Value] {
        self.0
            .get(CONTENT_KEY)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.content().len()
    }

    pub fn is_empty(&self) -> bool {
        self.content().is_empty()
    }

    /// Decode each entry of `content` into a typed item
    pub fn items(&self) -> impl Iterator<Item = Result<ContentItem, serde_json::Error>> + '_ {
        self.content()
            .iter()
            .map(|entry| ContentItem::deserialize(entry))
    }

    /// Ids of every well-formed item
    pub fn ids(&self) -> Vec<String> {
        self.items()
            .filter_map(Result::ok)
            .filter_map(|item| item.id().map(str::to_string))
            .collect()
    }

    pub fn root(&self) -> &Value {
        self.0.get(ROOT_KEY).unwrap_or(&NULL)
    }

    pub fn zones(&self) -> &Value {
        self.0.get(ZONES_KEY).unwrap_or(&NULL)
    }

    /// Append an item to `content`
    pub fn push(&mut self, item: ContentItem) {
        let entry = item.into_value();
        match self.0.get_mut(CONTENT_KEY) {
            Some(Value::Array(content)) => content.push(entry),
            _ => {
                self.0
                    .insert(CONTENT_KEY.to_string(), Value::Array(vec![entry]));
            }
        }
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(&self.0)?)
    }
}

impl Default for PuckData {
    fn default() -> Self {
        Self::empty()
    }
}

impl TryFrom<Value> for PuckData {
    type Error = DocumentError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        if let Validity::Invalid(reasons) = validate(&value) {
            return Err(DocumentError::Invalid(reasons));
        }
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(DocumentError::Invalid(vec![InvalidReason::NotAnObject {
                found: json_kind(&other),
            }])),
        }
    }
}

impl From<PuckData> for Value {
    fn from(doc: PuckData) -> Self {
        doc.into_value()
    }
}
