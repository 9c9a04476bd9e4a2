//! Rendered output tree.
//!
//! [`Node`] is the construction primitive every component builds on:
//! "an element of type T with properties P and children C", plus text
//! leaves and fragments that contribute only their children.

use serde::Serialize;

use super::props::Props;

/// A node in the rendered document tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    /// A named element with properties and children.
    Element {
        /// Element tag (e.g. `h1`, `a`, `iframe`).
        tag: String,
        /// Stable identity supplied by the content tree, if any.
        #[serde(skip_serializing_if = "Option::is_none")]
        key: Option<String>,
        /// Element properties.
        #[serde(skip_serializing_if = "Props::is_empty")]
        props: Props,
        /// Child nodes.
        #[serde(skip_serializing_if = "Vec::is_empty")]
        children: Vec<Self>,
    },
    /// A text leaf.
    Text {
        /// The text content, unescaped.
        text: String,
    },
    /// Children without a wrapping element.
    Fragment {
        /// Child nodes.
        children: Vec<Self>,
    },
}

impl Node {
    /// Builds an element node.
    #[must_use]
    pub fn element(tag: impl Into<String>, props: Props, children: Vec<Self>) -> Self {
        Self::Element {
            tag: tag.into(),
            key: None,
            props,
            children,
        }
    }

    /// Builds a text node.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Builds a fragment node.
    #[must_use]
    pub const fn fragment(children: Vec<Self>) -> Self {
        Self::Fragment { children }
    }

    /// Attaches a key to an element. Text and fragments carry no identity
    /// and are returned unchanged.
    #[must_use]
    pub fn with_key(self, key: Option<String>) -> Self {
        match self {
            Self::Element {
                tag,
                key: existing,
                props,
                children,
            } => Self::Element {
                tag,
                key: key.or(existing),
                props,
                children,
            },
            other => other,
        }
    }

    /// Returns the element tag, if this is an element.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    /// Returns the children of an element or fragment.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Element { children, .. } | Self::Fragment { children } => children,
            Self::Text { .. } => &[],
        }
    }

    /// Concatenated text content of this node and all descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text { text } => out.push_str(text),
            Self::Element { children, .. } | Self::Fragment { children } => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Depth-first search for all elements with the given tag.
    #[must_use]
    pub fn find_all<'a>(&'a self, tag: &str) -> Vec<&'a Self> {
        let mut found = Vec::new();
        self.walk(&mut |node| {
            if node.tag() == Some(tag) {
                found.push(node);
            }
        });
        found
    }

    fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Self)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::text(text)
    }
}
