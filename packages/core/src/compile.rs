//! # Component compilation
//!
//! A component is declared once as a [`ComponentDescriptor`] (name, field
//! schema, render function) and compiled into a one-entry
//! [`ComponentRegistry`]. Fragments are folded into the registry the host
//! editor consumes:
//!
//! ```text
//! { "Text": { fields: {...}, render }, "Image": { fields: {...}, render }, ... }
//! ```

use crate::document::Props;
use crate::errors::RegistryError;
use crate::field::ComponentConfig;
use crate::vdom::VNode;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// Renders a content item's props into a virtual DOM tree
pub type RenderFn = Arc<dyn Fn(&Props) -> VNode + Send + Sync>;

/// Pre-compilation definition of a block type
#[derive(Clone)]
pub struct ComponentDescriptor {
    pub name: String,
    pub config: ComponentConfig,
    pub render: RenderFn,
}

impl ComponentDescriptor {
    pub fn new<F>(name: impl Into<String>, config: ComponentConfig, render: F) -> Self
    where
        F: Fn(&Props) -> VNode + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            config,
            render: Arc::new(render),
        }
    }
}

impl fmt::Debug for ComponentDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentDescriptor")
            .field("name", &self.name)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Registry entry: field schema plus render function
#[derive(Clone)]
pub struct CompiledComponent {
    pub fields: ComponentConfig,
    pub render: RenderFn,
}

impl CompiledComponent {
    pub fn render(&self, props: &Props) -> VNode {
        (self.render)(props)
    }
}

impl fmt::Debug for CompiledComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledComponent")
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}

/// Component name → compiled component
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    components: BTreeMap<String, CompiledComponent>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold fragments in order; later names overwrite earlier ones.
    pub fn from_fragments(fragments: impl IntoIterator<Item = ComponentRegistry>) -> Self {
        let mut registry = Self::new();
        for fragment in fragments {
            registry.merge(fragment);
        }
        registry
    }

    pub fn get(&self, name: &str) -> Option<&CompiledComponent> {
        self.components.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CompiledComponent)> {
        self.components.iter().map(|(name, c)| (name.as_str(), c))
    }

    pub fn insert(
        &mut self,
        name: impl Into<String>,
        component: CompiledComponent,
    ) -> Option<CompiledComponent> {
        self.components.insert(name.into(), component)
    }

    /// Last-write-wins merge. Collisions are logged, never rejected.
    pub fn merge(&mut self, other: ComponentRegistry) {
        for (name, component) in other.components {
            if self.components.contains_key(&name) {
                warn!(component = %name, "Component registered twice, keeping the later definition");
            }
            self.components.insert(name, component);
        }
    }

    /// Strict merge: fails without modifying `self` if any name collides.
    pub fn try_merge(&mut self, other: ComponentRegistry) -> Result<(), RegistryError> {
        if let Some(name) = other.names().find(|name| self.contains(name)) {
            return Err(RegistryError::DuplicateComponent {
                name: name.to_string(),
            });
        }
        self.components.extend(other.components);
        Ok(())
    }
}

/// Serializes as `{ "<name>": { "fields": { ... } } }`; render functions are
/// host-side code and are left out.
impl Serialize for ComponentRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(serde::Serialize)]
        struct Entry<'a> {
            fields: &'a ComponentConfig,
        }

        let mut map = serializer.serialize_map(Some(self.components.len()))?;
        for (name, component) in &self.components {
            map.serialize_entry(name, &Entry { fields: &component.fields })?;
        }
        map.end()
    }
}

/// Compile a descriptor into a one-entry registry fragment.
///
/// `config` and `render` are moved into the entry as-is; the compiled render
/// function is the same `Arc` as the descriptor's.
pub fn compile_component(descriptor: ComponentDescriptor) -> ComponentRegistry {
    let ComponentDescriptor {
        name,
        config,
        render,
    } = descriptor;

    let mut registry = ComponentRegistry::new();
    registry.insert(
        name,
        CompiledComponent {
            fields: config,
            render,
        },
    );
    registry
}
