//! Renderer configuration schema.
//!
//! ```yaml
//! fallback: passthrough      # passthrough | container | strict
//! components:
//!   inlineCode: kbd          # shorthand: render as this tag
//!   Note:
//!     tag: aside
//!     class: admonition
//!     attrs:
//!       role: note
//!   li.a:                    # scoped: links inside list items
//!     tag: a
//!     class: external
//! pager:
//!   previous_label: Previous
//!   next_label: Next
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::render::{
    ComponentContext, ComponentMap, ComponentRenderer, FallbackPolicy, Implementation, Props,
    TagComponent,
};

/// Tag value that renders a component as a bare fragment.
pub const FRAGMENT_TAG: &str = "fragment";

/// Top-level renderer configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RendererConfig {
    /// Behaviour for names that resolve to nothing.
    #[serde(default)]
    pub fallback: FallbackPolicy,

    /// Root-level component overrides.
    #[serde(default)]
    pub components: IndexMap<String, ComponentSpec>,

    /// Previous/next navigation settings.
    #[serde(default)]
    pub pager: PagerConfig,
}

impl RendererConfig {
    /// Builds the root context from the configured overrides.
    #[must_use]
    pub fn build_context(&self) -> ComponentContext {
        ComponentContext::from_map(component_map(&self.components))
    }

    /// Builds a renderer with the configured fallback policy.
    #[must_use]
    pub fn build_renderer(&self) -> ComponentRenderer {
        ComponentRenderer::new().with_fallback(self.fallback)
    }
}

/// Declarative component override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComponentSpec {
    /// Render as this tag.
    Tag(String),
    /// Render as a tag with default class and attributes.
    Element {
        /// Element tag, or [`FRAGMENT_TAG`].
        tag: String,
        /// Default `class` attribute.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        class: Option<String>,
        /// Default attributes; explicit properties override them.
        #[serde(default, skip_serializing_if = "Props::is_empty")]
        attrs: Props,
    },
}

impl ComponentSpec {
    /// The configured tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::Tag(tag) | Self::Element { tag, .. } => tag,
        }
    }

    /// The configured class, if any.
    #[must_use]
    pub fn class(&self) -> Option<&str> {
        match self {
            Self::Tag(_) => None,
            Self::Element { class, .. } => class.as_deref(),
        }
    }

    /// The configured default attributes.
    #[must_use]
    pub fn attrs(&self) -> Option<&Props> {
        match self {
            Self::Tag(_) => None,
            Self::Element { attrs, .. } => Some(attrs),
        }
    }

    /// Converts this override into a registry entry.
    #[must_use]
    pub fn to_implementation(&self) -> Implementation {
        if self.tag() == FRAGMENT_TAG {
            return Implementation::Fragment;
        }

        match self {
            Self::Tag(tag) => Implementation::Tag(tag.clone()),
            Self::Element { tag, class, attrs } => {
                if class.is_none() && attrs.is_empty() {
                    return Implementation::Tag(tag.clone());
                }
                let mut component = TagComponent::new(tag.clone());
                if let Some(class) = class {
                    component = component.with_class(class.clone());
                }
                for (key, value) in attrs {
                    component = component.with_attr(key.clone(), value.clone());
                }
                component.into()
            }
        }
    }
}

/// Converts declarative specs into a registry mapping.
#[must_use]
pub fn component_map(specs: &IndexMap<String, ComponentSpec>) -> ComponentMap {
    specs
        .iter()
        .map(|(name, spec)| (name.clone(), spec.to_implementation()))
        .collect()
}

/// Previous/next navigation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PagerConfig {
    /// Render the pager at all.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Sub-label above the previous page title.
    #[serde(default = "default_previous_label")]
    pub previous_label: String,

    /// Sub-label above the next page title.
    #[serde(default = "default_next_label")]
    pub next_label: String,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            previous_label: default_previous_label(),
            next_label: default_next_label(),
        }
    }
}

const fn default_true() -> bool {
    true
}

fn default_previous_label() -> String {
    "Previous".to_string()
}

fn default_next_label() -> String {
    "Next".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_full_config() {
        let yaml = r"
fallback: container
components:
  inlineCode: kbd
  Note:
    tag: aside
    class: admonition
    attrs:
      role: note
pager:
  previous_label: Назад
";
        let config: RendererConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.fallback, FallbackPolicy::Container);
        assert_eq!(config.components.len(), 2);
        assert_eq!(config.components["inlineCode"], ComponentSpec::Tag("kbd".into()));
        assert_eq!(config.components["Note"].tag(), "aside");
        assert_eq!(config.components["Note"].class(), Some("admonition"));
        assert_eq!(config.pager.previous_label, "Назад");
        assert_eq!(config.pager.next_label, "Next");
        assert!(config.pager.enabled);
    }

    #[test]
    fn test_defaults() {
        let config: RendererConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, RendererConfig::default());
        assert_eq!(config.fallback, FallbackPolicy::Passthrough);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<RendererConfig, _> = serde_yaml::from_str("fallbak: strict\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_shorthand_to_tag() {
        let imp = ComponentSpec::Tag("kbd".into()).to_implementation();
        assert_eq!(imp, Implementation::Tag("kbd".into()));
    }

    #[test]
    fn test_fragment_tag() {
        let imp = ComponentSpec::Tag(FRAGMENT_TAG.into()).to_implementation();
        assert_eq!(imp, Implementation::Fragment);
    }

    #[test]
    fn test_plain_element_is_tag() {
        let spec = ComponentSpec::Element {
            tag: "em".into(),
            class: None,
            attrs: Props::new(),
        };
        assert_eq!(spec.to_implementation(), Implementation::Tag("em".into()));
    }

    #[test]
    fn test_element_with_defaults() {
        let spec = ComponentSpec::Element {
            tag: "aside".into(),
            class: Some("note".into()),
            attrs: Props::new().with("role", "note"),
        };
        let imp = spec.to_implementation();
        let defaults = imp.default_props().unwrap();
        assert_eq!(defaults.get("className"), Some(&json!("note")));
        assert_eq!(defaults.get("role"), Some(&json!("note")));
    }

    #[test]
    fn test_build_context_and_renderer() {
        let yaml = "fallback: strict\ncomponents:\n  h1: h2\n";
        let config: RendererConfig = serde_yaml::from_str(yaml).unwrap();
        let context = config.build_context();
        assert_eq!(context.get("h1"), Some(&Implementation::Tag("h2".into())));
        assert_eq!(config.build_renderer().fallback(), FallbackPolicy::Strict);
    }
}
