//! Page descriptors supplied by the upstream build pipeline.
//!
//! A descriptor carries page metadata (title, slug, permalink,
//! frontmatter, previous/next links) and the compiled content tree.
//! YAML and JSON are both accepted:
//!
//! ```yaml
//! id: gradle/buildSrc
//! title: buildSrc
//! permalink: /learning/gradle/buildSrc
//! frontmatter:
//!   sidebar_position: 5
//! next:
//!   title: Composite builds
//!   permalink: /learning/gradle/composite-build
//! body:
//!   - type: h1
//!     props: { id: buildsrc }
//!     children: [buildSrc]
//! ```

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::schema::{ComponentSpec, component_map};
use crate::error::{PageError, PagesmithError};
use crate::render::{Child, ContextAdditions, Props, RenderRequest};

/// Metadata and content for one documentation page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageDescriptor {
    /// Document identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Page title.
    pub title: String,

    /// Short description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Opaque slug.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Opaque permalink.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,

    /// Link to the page source for editing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_url: Option<String>,

    /// Page tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Arbitrary frontmatter key/value pairs.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub frontmatter: IndexMap<String, Value>,

    /// Previous page in the sidebar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<NavLink>,

    /// Next page in the sidebar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<NavLink>,

    /// Page-level component overrides.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub components: IndexMap<String, ComponentSpec>,

    /// Compiled content tree.
    #[serde(default)]
    pub body: Vec<ContentNode>,
}

impl PageDescriptor {
    /// The `sidebar_position` frontmatter value, when it is an integer.
    #[must_use]
    pub fn sidebar_position(&self) -> Option<i64> {
        self.frontmatter.get("sidebar_position").and_then(Value::as_i64)
    }

    /// Text of the first `h1` in the body, falling back to the title.
    #[must_use]
    pub fn content_title(&self) -> String {
        self.body
            .iter()
            .find_map(|node| node.find_first("h1"))
            .map_or_else(|| self.title.clone(), ContentElement::text_content)
    }

    /// Page-level overrides as context additions.
    #[must_use]
    pub fn context_additions(&self) -> Option<ContextAdditions> {
        if self.components.is_empty() {
            None
        } else {
            Some(ContextAdditions::Map(component_map(&self.components)))
        }
    }
}

/// A `{title, permalink}` navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavLink {
    /// Link label.
    pub title: String,
    /// Link target.
    pub permalink: String,
}

/// A node in the compiled content tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentNode {
    /// Literal text.
    Text(String),
    /// A component or element reference.
    Element(ContentElement),
}

/// A component or element reference in the content tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContentElement {
    /// Component name.
    #[serde(rename = "type")]
    pub kind: String,

    /// Explicit properties.
    #[serde(default, skip_serializing_if = "Props::is_empty")]
    pub props: Props,

    /// Stable identity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Overrides for this element's subtree.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub components: IndexMap<String, ComponentSpec>,

    /// Child nodes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ContentNode>,
}

impl ContentNode {
    /// Converts to a render child.
    #[must_use]
    pub fn to_child(&self) -> Child {
        match self {
            Self::Text(text) => Child::Text(text.clone()),
            Self::Element(element) => Child::Request(element.to_request()),
        }
    }

    /// Depth-first search for the first element named `kind`.
    #[must_use]
    pub fn find_first(&self, kind: &str) -> Option<&ContentElement> {
        match self {
            Self::Text(_) => None,
            Self::Element(element) if element.kind == kind => Some(element),
            Self::Element(element) => element.children.iter().find_map(|c| c.find_first(kind)),
        }
    }
}

impl ContentElement {
    /// Converts to a render request, recursively.
    #[must_use]
    pub fn to_request(&self) -> RenderRequest {
        RenderRequest {
            name: self.kind.clone(),
            props: self.props.clone(),
            key: self.key.clone(),
            children: self.children.iter().map(ContentNode::to_child).collect(),
            components: if self.components.is_empty() {
                None
            } else {
                Some(ContextAdditions::Map(component_map(&self.components)))
            },
        }
    }

    /// Concatenated text of all descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }
}

fn collect_text(nodes: &[ContentNode], out: &mut String) {
    for node in nodes {
        match node {
            ContentNode::Text(text) => out.push_str(text),
            ContentNode::Element(element) => collect_text(&element.children, out),
        }
    }
}

/// Page file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageFormat {
    /// YAML (also the default for unknown extensions).
    Yaml,
    /// JSON.
    Json,
}

impl PageFormat {
    /// Picks the format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Loads a page descriptor from disk.
///
/// # Errors
///
/// Returns [`PageError::MissingFile`] if the file does not exist,
/// [`PageError::Parse`] if it cannot be parsed, or an I/O error.
pub fn load_page(path: &Path) -> Result<PageDescriptor, PagesmithError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PagesmithError::Page(PageError::MissingFile {
                path: path.to_path_buf(),
            })
        } else {
            PagesmithError::Io(e)
        }
    })?;

    Ok(parse_page(&content, PageFormat::from_path(path), path)?)
}

/// Parses page descriptor text. `path` is used for error messages only.
///
/// # Errors
///
/// Returns [`PageError::Parse`] if the text is not a valid descriptor.
pub fn parse_page(content: &str, format: PageFormat, path: &Path) -> Result<PageDescriptor, PageError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let parse_err = |message: String| PageError::Parse {
        path: path.to_path_buf(),
        message,
    };

    match format {
        PageFormat::Yaml => serde_yaml::from_str(content).map_err(|e| parse_err(e.to_string())),
        PageFormat::Json => serde_json::from_str(content).map_err(|e| parse_err(e.to_string())),
    }
}
