//! Component handlers and registry entries.
//!
//! A name in the content tree resolves to an [`Implementation`]. Custom
//! handlers implement [`Component`]; tag aliases, fragments, and the
//! fallback behaviours are explicit variants rather than implicit lookups.

use std::fmt;
use std::sync::Arc;

use super::node::Node;
use super::props::Props;

/// A renderable component.
///
/// Implementations must be pure: the same props and children always
/// build an equivalent node.
pub trait Component: Send + Sync {
    /// Builds the node for this component.
    fn build(&self, props: &Props, children: Vec<Node>) -> Node;

    /// Properties the component contributes before explicit ones are
    /// applied. Explicit request properties win on collision.
    fn default_props(&self) -> Option<&Props> {
        None
    }
}

/// Adapter turning a closure into a [`Component`].
pub struct FnComponent<F>(pub F);

impl<F> Component for FnComponent<F>
where
    F: Fn(&Props, Vec<Node>) -> Node + Send + Sync,
{
    fn build(&self, props: &Props, children: Vec<Node>) -> Node {
        (self.0)(props, children)
    }
}

/// Renders as a fixed element tag with optional default attributes.
///
/// Declarative overrides from the renderer configuration use this.
#[derive(Debug, Clone, PartialEq)]
pub struct TagComponent {
    tag: String,
    defaults: Props,
}

impl TagComponent {
    /// Creates a tag component with no default attributes.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            defaults: Props::new(),
        }
    }

    /// Sets a default `class` attribute.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.defaults.insert("className", class.into());
        self
    }

    /// Sets a default attribute.
    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.defaults.insert(key, value);
        self
    }

    /// The element tag this component renders as.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl Component for TagComponent {
    fn build(&self, props: &Props, children: Vec<Node>) -> Node {
        Node::element(self.tag.clone(), props.clone(), children)
    }

    fn default_props(&self) -> Option<&Props> {
        if self.defaults.is_empty() {
            None
        } else {
            Some(&self.defaults)
        }
    }
}

/// What a component name resolves to.
#[derive(Clone)]
pub enum Implementation {
    /// A custom handler.
    Component(Arc<dyn Component>),
    /// A plain element with this tag.
    Tag(String),
    /// Children only, no wrapping element. Used by the layout wrapper.
    Fragment,
    /// Unresolved name rendered as its children, unchanged.
    Passthrough,
    /// Unresolved name rendered as a generic container that records the
    /// original name in `data-component`.
    Container(String),
}

impl Implementation {
    /// Wraps a [`Component`].
    #[must_use]
    pub fn component(component: impl Component + 'static) -> Self {
        Self::Component(Arc::new(component))
    }

    /// Wraps a closure as a component.
    #[must_use]
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&Props, Vec<Node>) -> Node + Send + Sync + 'static,
    {
        Self::component(FnComponent(f))
    }

    /// Properties this implementation contributes beneath explicit ones.
    #[must_use]
    pub fn default_props(&self) -> Option<&Props> {
        match self {
            Self::Component(c) => c.default_props(),
            _ => None,
        }
    }

    /// Returns `true` for the fallback variants.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Passthrough | Self::Container(_))
    }

    /// Constructs the node for this implementation.
    ///
    /// `props` must already be merged; `key` is attached to the result
    /// when it is an element.
    #[must_use]
    pub fn build(&self, props: &Props, key: Option<String>, children: Vec<Node>) -> Node {
        match self {
            Self::Component(c) => c.build(props, children).with_key(key),
            Self::Tag(tag) => Node::Element {
                tag: tag.clone(),
                key,
                props: props.clone(),
                children,
            },
            Self::Fragment | Self::Passthrough => Node::fragment(children),
            Self::Container(name) => Node::Element {
                tag: "div".to_string(),
                key,
                props: props.clone().with("data-component", name.clone()),
                children,
            },
        }
    }
}

impl fmt::Debug for Implementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Component(c) => write!(f, "Component({:p})", Arc::as_ptr(c).cast::<()>()),
            Self::Tag(tag) => f.debug_tuple("Tag").field(tag).finish(),
            Self::Fragment => f.write_str("Fragment"),
            Self::Passthrough => f.write_str("Passthrough"),
            Self::Container(name) => f.debug_tuple("Container").field(name).finish(),
        }
    }
}

/// Handlers compare by identity; everything else by value.
impl PartialEq for Implementation {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Component(a), Self::Component(b)) => Arc::ptr_eq(a, b),
            (Self::Tag(a), Self::Tag(b)) | (Self::Container(a), Self::Container(b)) => a == b,
            (Self::Fragment, Self::Fragment) | (Self::Passthrough, Self::Passthrough) => true,
            _ => false,
        }
    }
}

impl From<TagComponent> for Implementation {
    fn from(component: TagComponent) -> Self {
        Self::component(component)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_builds_element_with_key() {
        let node = Implementation::Tag("code".to_string()).build(
            &Props::new(),
            Some("k1".to_string()),
            vec!["x".into()],
        );
        assert_eq!(
            node,
            Node::Element {
                tag: "code".to_string(),
                key: Some("k1".to_string()),
                props: Props::new(),
                children: vec![Node::text("x")],
            }
        );
    }

    #[test]
    fn test_passthrough_returns_children_unchanged() {
        let children = vec![Node::text("child"), Node::element("br", Props::new(), vec![])];
        let node = Implementation::Passthrough.build(&Props::new(), None, children.clone());
        assert_eq!(node, Node::fragment(children));
    }

    #[test]
    fn test_passthrough_drops_key() {
        let node = Implementation::Passthrough.build(&Props::new(), Some("k".into()), vec![]);
        assert_eq!(node, Node::fragment(vec![]));
    }

    #[test]
    fn test_container_records_name() {
        let node = Implementation::Container("Callout".to_string()).build(&Props::new(), None, vec![]);
        let Node::Element { tag, props, .. } = node else {
            panic!("expected element");
        };
        assert_eq!(tag, "div");
        assert_eq!(props.get_str("data-component"), Some("Callout"));
    }

    #[test]
    fn test_fn_component() {
        let bold = Implementation::from_fn(|props, children| {
            let mut children = children;
            if let Some(text) = props.get_str("text") {
                children.insert(0, Node::text(text));
            }
            Node::element("strong", Props::new(), children)
        });
        let node = bold.build(&Props::new().with("text", "hi"), None, vec![]);
        assert_eq!(node.tag(), Some("strong"));
        assert_eq!(node.text_content(), "hi");
    }

    #[test]
    fn test_tag_component_defaults() {
        let note = TagComponent::new("aside").with_class("note").with_attr("role", "note");
        let defaults = note.default_props().unwrap();
        assert_eq!(defaults.get_str("className"), Some("note"));
        assert_eq!(defaults.get_str("role"), Some("note"));
        assert_eq!(note.tag(), "aside");
    }

    #[test]
    fn test_tag_component_without_defaults() {
        assert!(TagComponent::new("em").default_props().is_none());
    }

    #[test]
    fn test_component_equality_is_identity() {
        let a = Implementation::component(TagComponent::new("b"));
        let b = Implementation::component(TagComponent::new("b"));
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
        assert_eq!(Implementation::Fragment, Implementation::Fragment);
        assert_ne!(Implementation::Fragment, Implementation::Passthrough);
    }

    #[test]
    fn test_is_fallback() {
        assert!(Implementation::Passthrough.is_fallback());
        assert!(Implementation::Container("x".into()).is_fallback());
        assert!(!Implementation::Fragment.is_fallback());
        assert!(!Implementation::Tag("p".into()).is_fallback());
    }
}
