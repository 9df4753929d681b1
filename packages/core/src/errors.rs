//! Error types for the core crate

use crate::validity::InvalidReason;
use thiserror::Error;

/// Contract violations on the JSON-level migration entry point.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MigrateError {
    #[error("Content must be a string")]
    ContentNotString,

    #[error("Component type must be a string")]
    ComponentTypeNotString,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    #[error("ID generation failed: {0}")]
    Generation(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Component '{name}' is already registered")]
    DuplicateComponent { name: String },
}

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Invalid document: {}", format_reasons(.0))]
    Invalid(Vec<InvalidReason>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn format_reasons(reasons: &[InvalidReason]) -> String {
    reasons
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
