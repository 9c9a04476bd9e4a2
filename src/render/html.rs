//! HTML serialization of rendered trees.

use std::fmt::Write as _;

use serde_json::Value;
use tracing::debug;

use super::node::Node;

/// Elements that never have a closing tag.
pub(crate) const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Serializes a node tree to an HTML fragment.
#[must_use]
pub fn to_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Text { text } => out.push_str(&escape_text(text)),
        Node::Fragment { children } => {
            for child in children {
                write_node(out, child);
            }
        }
        Node::Element { tag, children, .. } if !is_valid_tag_name(tag) => {
            debug!(tag = %tag, "invalid tag name, rendering children only");
            for child in children {
                write_node(out, child);
            }
        }
        Node::Element {
            tag,
            props,
            children,
            ..
        } => {
            out.push('<');
            out.push_str(tag);
            for (name, value) in props.iter() {
                write_attribute(out, name, value);
            }
            out.push('>');

            if VOID_ELEMENTS.contains(&tag.as_str()) {
                return;
            }

            for child in children {
                write_node(out, child);
            }
            let _ = write!(out, "</{tag}>");
        }
    }
}

fn write_attribute(out: &mut String, name: &str, value: &Value) {
    let name = attribute_name(name);
    if !is_valid_attribute_name(name) {
        debug!(attribute = %name, "skipping invalid attribute name");
        return;
    }
    match value {
        Value::Null | Value::Bool(false) => {}
        Value::Bool(true) => {
            let _ = write!(out, " {name}");
        }
        Value::String(s) => {
            let _ = write!(out, " {name}=\"{}\"", escape_attribute(s));
        }
        Value::Number(n) => {
            let _ = write!(out, " {name}=\"{n}\"");
        }
        Value::Array(_) | Value::Object(_) => {
            let _ = write!(out, " {name}=\"{}\"", escape_attribute(&value.to_string()));
        }
    }
}

/// Maps component-style property names to HTML attribute names.
fn attribute_name(name: &str) -> &str {
    match name {
        "className" => "class",
        "htmlFor" => "for",
        "allowFullScreen" => "allowfullscreen",
        "frameBorder" => "frameborder",
        other => other,
    }
}

/// Returns `true` for `[A-Za-z][A-Za-z0-9-]*`.
#[must_use]
pub fn is_valid_tag_name(tag: &str) -> bool {
    let mut chars = tag.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Returns `true` for `[A-Za-z_:][-A-Za-z0-9_:.]*`.
#[must_use]
pub fn is_valid_attribute_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == ':')
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'))
}

/// Escapes text content.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    out
}

/// Escapes an attribute value for use inside double quotes.
#[must_use]
pub fn escape_attribute(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
