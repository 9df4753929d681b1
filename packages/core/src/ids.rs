use crate::errors::IdError;
use uuid::Uuid;

/// Source of fresh, globally unique id tokens.
///
/// Every call must yield a new token; ids are never cached across calls.
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> Result<String, IdError>;
}

/// Random (v4) UUIDs
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidSource;

impl IdSource for UuidSource {
    fn next_id(&self) -> Result<String, IdError> {
        Ok(Uuid::new_v4().to_string())
    }
}

impl<T: IdSource + ?Sized> IdSource for &T {
    fn next_id(&self) -> Result<String, IdError> {
        (**self).next_id()
    }
}

/// `<component>-<fresh id>`
pub fn component_id(component: &str, ids: &dyn IdSource) -> Result<String, IdError> {
    Ok(format!("{}-{}", component, ids.next_id()?))
}
