//! Component context threaded down a render tree.
//!
//! A [`ComponentContext`] is immutable. Nesting levels derive a child
//! context with [`ComponentContext::extend`]; the parent stays valid and
//! unchanged for its other subtrees.

use std::sync::Arc;

use indexmap::IndexMap;

use super::component::Implementation;

/// Name-to-implementation mapping.
pub type ComponentMap = IndexMap<String, Implementation>;

/// Function form of context additions: computes the child's entries from
/// the parent's.
pub type DeriveFn = Arc<dyn Fn(&ComponentMap) -> ComponentMap + Send + Sync>;

/// Overrides supplied at one nesting level.
#[derive(Clone)]
pub enum ContextAdditions {
    /// Entries shallow-merged over the parent; these win on collision.
    Map(ComponentMap),
    /// Computes the complete child mapping from the parent mapping.
    Derive(DeriveFn),
}

impl ContextAdditions {
    /// Function-form additions.
    #[must_use]
    pub fn derive<F>(f: F) -> Self
    where
        F: Fn(&ComponentMap) -> ComponentMap + Send + Sync + 'static,
    {
        Self::Derive(Arc::new(f))
    }
}

impl From<ComponentMap> for ContextAdditions {
    fn from(map: ComponentMap) -> Self {
        Self::Map(map)
    }
}

impl std::fmt::Debug for ContextAdditions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Map(map) => f.debug_tuple("Map").field(map).finish(),
            Self::Derive(_) => f.write_str("Derive(..)"),
        }
    }
}

/// Ambient component overrides for one subtree.
///
/// Cloning is cheap and shares the underlying map.
#[derive(Debug, Clone, Default)]
pub struct ComponentContext {
    components: Arc<ComponentMap>,
}

impl ComponentContext {
    /// An empty root context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A root context holding `components`.
    #[must_use]
    pub fn from_map(components: ComponentMap) -> Self {
        Self {
            components: Arc::new(components),
        }
    }

    /// Looks up a name in this context only.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Implementation> {
        self.components.get(name)
    }

    /// Returns `true` if `name` has an entry.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// The underlying mapping.
    #[must_use]
    pub fn as_map(&self) -> &ComponentMap {
        &self.components
    }

    /// Derives a child context. `self` is not modified.
    ///
    /// Map additions are merged over this context's entries. Function
    /// additions receive this context's mapping and return the child's.
    #[must_use]
    pub fn extend(&self, additions: &ContextAdditions) -> Self {
        match additions {
            ContextAdditions::Map(map) if map.is_empty() => self.clone(),
            ContextAdditions::Map(map) => {
                let mut merged = (*self.components).clone();
                for (name, implementation) in map {
                    merged.insert(name.clone(), implementation.clone());
                }
                Self::from_map(merged)
            }
            ContextAdditions::Derive(derive) => Self::from_map(derive(&self.components)),
        }
    }

    /// Convenience for extending with a single entry.
    #[must_use]
    pub fn with(&self, name: impl Into<String>, implementation: Implementation) -> Self {
        let mut map = ComponentMap::new();
        map.insert(name.into(), implementation);
        self.extend(&ContextAdditions::Map(map))
    }
}

/// Free-function form of [`ComponentContext::extend`].
#[must_use]
pub fn extend_context(parent: &ComponentContext, additions: &ContextAdditions) -> ComponentContext {
    parent.extend(additions)
}
