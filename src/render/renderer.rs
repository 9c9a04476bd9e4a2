//! Name resolution and tree rendering.
//!
//! Resolution order for a name `n` requested under parent `p`:
//! 1. context entry `p.n` (scoped override)
//! 2. context entry `n`
//! 3. renderer default for `n` (`inlineCode`, `wrapper`, ...)
//! 4. intrinsic HTML element `n`
//! 5. the configured [`FallbackPolicy`]
//!
//! A miss never aborts rendering unless the policy is `Strict`.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::component::Implementation;
use super::context::{ComponentContext, ComponentMap, ContextAdditions};
use super::node::Node;
use super::props::{Props, merge_properties};
use crate::error::RenderError;

/// HTML element names rendered as themselves when nothing overrides them.
///
/// `script` and `style` are absent; they go through the fallback policy.
pub const INTRINSIC_TAGS: &[&str] = &[
    "a", "abbr", "address", "area", "article", "aside", "audio", "b", "base", "bdi", "bdo",
    "blockquote", "body", "br", "button", "canvas", "caption", "cite", "code", "col", "colgroup",
    "data", "datalist", "dd", "del", "details", "dfn", "dialog", "div", "dl", "dt", "em", "embed",
    "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6",
    "head", "header", "hgroup", "hr", "html", "i", "iframe", "img", "input", "ins", "kbd", "label",
    "legend", "li", "link", "main", "map", "mark", "math", "menu", "meta", "meter", "nav",
    "noscript", "object", "ol", "optgroup", "option", "output", "p", "picture", "pre", "progress",
    "q", "rp", "rt", "ruby", "s", "samp", "search", "section", "select", "slot", "small", "source",
    "span", "strong", "sub", "summary", "sup", "svg", "table", "tbody", "td", "template",
    "textarea", "tfoot", "th", "thead", "time", "title", "tr", "track", "u", "ul", "var", "video",
    "wbr",
];

/// Returns `true` if `name` is a standard HTML element or a custom
/// element name (lowercase, starting with a letter, containing `-`).
#[must_use]
pub fn is_intrinsic(name: &str) -> bool {
    INTRINSIC_TAGS.contains(&name) || is_custom_element(name)
}

fn is_custom_element(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_lowercase())
        && name.contains('-')
        && !name.ends_with('-')
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// What happens when a name resolves to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FallbackPolicy {
    /// Render the children unchanged.
    #[default]
    Passthrough,
    /// Wrap the children in a `div` tagged with the original name.
    Container,
    /// Fail with [`RenderError::UnresolvedComponent`].
    Strict,
}

/// A node to render: a component name with properties and children.
#[derive(Debug, Clone, Default)]
pub struct RenderRequest {
    /// Component name.
    pub name: String,
    /// Explicit properties.
    pub props: Props,
    /// Stable identity.
    pub key: Option<String>,
    /// Children, rendered before the parent is built.
    pub children: Vec<Child>,
    /// Overrides applied to this request and its subtree.
    pub components: Option<ContextAdditions>,
}

/// A child of a [`RenderRequest`].
#[derive(Debug, Clone)]
pub enum Child {
    /// Literal text.
    Text(String),
    /// A nested request.
    Request(RenderRequest),
}

impl RenderRequest {
    /// Creates a request with no properties or children.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets a property.
    #[must_use]
    pub fn prop(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.props.insert(key, value);
        self
    }

    /// Sets the key.
    #[must_use]
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Appends a text child.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Child::Text(text.into()));
        self
    }

    /// Appends a nested request.
    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        self.children.push(Child::Request(child));
        self
    }

    /// Attaches context additions for this subtree.
    #[must_use]
    pub fn components(mut self, additions: impl Into<ContextAdditions>) -> Self {
        self.components = Some(additions.into());
        self
    }
}

/// Resolves component names and renders request trees.
///
/// Holds only configuration; every render pass receives its own context,
/// so one renderer can serve independent pages concurrently.
#[derive(Debug, Clone)]
pub struct ComponentRenderer {
    defaults: ComponentMap,
    fallback: FallbackPolicy,
}

impl Default for ComponentRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentRenderer {
    /// Creates a renderer with the conventional defaults and the
    /// passthrough fallback.
    #[must_use]
    pub fn new() -> Self {
        let mut defaults = ComponentMap::new();
        defaults.insert("inlineCode".to_string(), Implementation::Tag("code".to_string()));
        defaults.insert("wrapper".to_string(), Implementation::Fragment);
        Self {
            defaults,
            fallback: FallbackPolicy::default(),
        }
    }

    /// Sets the fallback policy.
    #[must_use]
    pub const fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    /// Registers or replaces a default implementation.
    #[must_use]
    pub fn with_default(mut self, name: impl Into<String>, implementation: Implementation) -> Self {
        self.defaults.insert(name.into(), implementation);
        self
    }

    /// The active fallback policy.
    #[must_use]
    pub const fn fallback(&self) -> FallbackPolicy {
        self.fallback
    }

    /// Resolves `name` against `context`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::UnresolvedComponent`] only under
    /// [`FallbackPolicy::Strict`].
    pub fn resolve(
        &self,
        name: &str,
        context: &ComponentContext,
    ) -> Result<Implementation, RenderError> {
        self.resolve_scoped(name, None, context)
    }

    /// Resolves `name` as a child of `parent`, consulting the scoped
    /// `parent.name` override first.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::UnresolvedComponent`] only under
    /// [`FallbackPolicy::Strict`].
    pub fn resolve_scoped(
        &self,
        name: &str,
        parent: Option<&str>,
        context: &ComponentContext,
    ) -> Result<Implementation, RenderError> {
        if let Some(parent) = parent {
            let scoped = format!("{parent}.{name}");
            if let Some(found) = context.get(&scoped) {
                trace!(component = name, key = %scoped, "resolved scoped override");
                return Ok(found.clone());
            }
        }

        if let Some(found) = context.get(name) {
            trace!(component = name, "resolved from context");
            return Ok(found.clone());
        }

        if let Some(found) = self.defaults.get(name) {
            trace!(component = name, "resolved to default");
            return Ok(found.clone());
        }

        if is_intrinsic(name) {
            return Ok(Implementation::Tag(name.to_string()));
        }

        let suggestion = self.suggest(name, context);
        match &suggestion {
            Some(close) => warn!(component = name, suggestion = %close, "unresolved component"),
            None => debug!(component = name, policy = ?self.fallback, "unresolved component"),
        }

        match self.fallback {
            FallbackPolicy::Passthrough => Ok(Implementation::Passthrough),
            FallbackPolicy::Container => Ok(Implementation::Container(name.to_string())),
            FallbackPolicy::Strict => Err(RenderError::UnresolvedComponent {
                name: name.to_string(),
                suggestion,
            }),
        }
    }

    /// Renders one component from already-built children.
    ///
    /// A string `key` property becomes the node's identity instead of an
    /// attribute. Reserved meta-properties are stripped.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::UnresolvedComponent`] only under
    /// [`FallbackPolicy::Strict`].
    pub fn render(
        &self,
        name: &str,
        props: &Props,
        children: Vec<Node>,
        context: &ComponentContext,
    ) -> Result<Node, RenderError> {
        let mut explicit = props.without_reserved();
        let key = explicit.take_key();
        let parent = props.get_str("parentName");
        let implementation = self.resolve_scoped(name, parent, context)?;
        Ok(Self::build(&implementation, &explicit, key, children))
    }

    /// Renders a request tree.
    ///
    /// A `key` property takes precedence over the request's own key.
    /// Each request's `components` extend the context for itself and its
    /// descendants; siblings and ancestors never see them. Children are
    /// resolved with the request's name as their parent.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::UnresolvedComponent`] only under
    /// [`FallbackPolicy::Strict`].
    pub fn render_tree(
        &self,
        request: &RenderRequest,
        context: &ComponentContext,
    ) -> Result<Node, RenderError> {
        self.render_request(request, None, context)
    }

    fn render_request(
        &self,
        request: &RenderRequest,
        parent: Option<&str>,
        context: &ComponentContext,
    ) -> Result<Node, RenderError> {
        let extended;
        let context = match &request.components {
            Some(additions) => {
                extended = context.extend(additions);
                &extended
            }
            None => context,
        };

        let parent = request.props.get_str("parentName").or(parent);
        let implementation = self.resolve_scoped(&request.name, parent, context)?;

        let children = request
            .children
            .iter()
            .map(|child| match child {
                Child::Text(text) => Ok(Node::text(text.clone())),
                Child::Request(nested) => {
                    self.render_request(nested, Some(request.name.as_str()), context)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut explicit = request.props.without_reserved();
        let key = explicit.take_key().or_else(|| request.key.clone());
        Ok(Self::build(&implementation, &explicit, key, children))
    }

    fn build(
        implementation: &Implementation,
        explicit: &Props,
        key: Option<String>,
        children: Vec<Node>,
    ) -> Node {
        let defaults = implementation.default_props().map(Props::forwardable);
        let merged = merge_properties(defaults.as_ref(), Some(explicit));
        implementation.build(&merged, key, children)
    }

    fn suggest(&self, name: &str, context: &ComponentContext) -> Option<String> {
        context
            .names()
            .chain(self.defaults.keys().map(String::as_str))
            .filter(|candidate| !candidate.contains('.'))
            .map(|candidate| (candidate, strsim::damerau_levenshtein(name, candidate)))
            .filter(|(_, dist)| *dist > 0 && *dist <= 2)
            .min_by_key(|(_, dist)| *dist)
            .map(|(candidate, _)| candidate.to_string())
    }
}
