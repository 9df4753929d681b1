//! Structural validation of canonical documents.
//!
//! A value is a canonical document iff it is an object carrying `content`,
//! `root` and `zones`, with `content` being an array. Nothing else is
//! inspected: extra keys, item shapes and zone references are left to the
//! host editor.

use serde_json::Value;
use std::fmt;

pub(crate) const CONTENT_KEY: &str = "content";
pub(crate) const ROOT_KEY: &str = "root";
pub(crate) const ZONES_KEY: &str = "zones";

const REQUIRED_KEYS: [&str; 3] = [CONTENT_KEY, ROOT_KEY, ZONES_KEY];

/// Why a value failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    NotAnObject { found: &'static str },
    MissingKey(&'static str),
    ContentNotArray { found: &'static str },
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::NotAnObject { found } => write!(f, "expected an object, found {}", found),
            InvalidReason::MissingKey(key) => write!(f, "missing required key `{}`", key),
            InvalidReason::ContentNotArray { found } => {
                write!(f, "`content` must be an array, found {}", found)
            }
        }
    }
}

/// Outcome of [`validate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validity {
    Valid,
    Invalid(Vec<InvalidReason>),
}

impl Validity {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid)
    }

    pub fn reasons(&self) -> &[InvalidReason] {
        match self {
            Validity::Valid => &[],
            Validity::Invalid(reasons) => reasons,
        }
    }
}

/// Check the canonical document shape, collecting every violation found.
pub fn validate(value: &Value) -> Validity {
    let Some(object) = value.as_object() else {
        return Validity::Invalid(vec![InvalidReason::NotAnObject {
            found: json_kind(value),
        }]);
    };

    let mut reasons: Vec<InvalidReason> = REQUIRED_KEYS
        .iter()
        .filter(|key| !object.contains_key(**key))
        .map(|key| InvalidReason::MissingKey(*key))
        .collect();

    if let Some(content) = object.get(CONTENT_KEY) {
        if !content.is_array() {
            reasons.push(InvalidReason::ContentNotArray {
                found: json_kind(content),
            });
        }
    }

    if reasons.is_empty() {
        Validity::Valid
    } else {
        Validity::Invalid(reasons)
    }
}

pub fn is_puck_data(value: &Value) -> bool {
    validate(value).is_valid()
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
