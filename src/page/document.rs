//! Full-page rendering.
//!
//! The body is rendered inside the `wrapper` component (a fragment unless
//! overridden), followed by the previous/next pager.

use serde::Serialize;
use tracing::{debug, info};

use super::descriptor::{ContentNode, NavLink, PageDescriptor};
use super::toc::{TocEntry, anchor_headings};
use crate::config::schema::PagerConfig;
use crate::error::RenderError;
use crate::render::html::to_html;
use crate::render::{Child, ComponentContext, ComponentRenderer, Node, RenderRequest};

/// A rendered page.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedPage {
    /// Page title from metadata.
    pub title: String,
    /// First `h1` text, or the title.
    pub content_title: String,
    /// Site-absolute permalink, if supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,
    /// Sidebar ordering hint from frontmatter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidebar_position: Option<i64>,
    /// Table of contents.
    pub toc: Vec<TocEntry>,
    /// Rendered tree.
    pub tree: Node,
    /// Serialized HTML.
    pub html: String,
}

/// Renders a page.
///
/// Page-level overrides extend `context` for this page only. Headings
/// listed in the table of contents are rendered with their anchor ids.
///
/// # Errors
///
/// Returns [`RenderError`] only when the renderer's fallback policy is
/// strict and a component cannot be resolved.
pub fn render_page(
    page: &PageDescriptor,
    renderer: &ComponentRenderer,
    context: &ComponentContext,
    pager: &PagerConfig,
) -> Result<RenderedPage, RenderError> {
    let mut body = page.body.clone();
    let toc = anchor_headings(&mut body);

    let mut wrapper = RenderRequest::new("wrapper");
    wrapper.children = body.iter().map(ContentNode::to_child).collect();
    if !toc.is_empty() {
        let toc_value = serde_json::to_value(&toc).unwrap_or_default();
        wrapper = wrapper.prop("toc", toc_value);
    }
    wrapper.components = page.context_additions();

    let mut children = vec![renderer.render_tree(&wrapper, context)?];

    if pager.enabled {
        if let Some(nav) = pager_request(page, pager) {
            let page_context = page
                .context_additions()
                .map_or_else(|| context.clone(), |additions| context.extend(&additions));
            children.push(renderer.render_tree(&nav, &page_context)?);
        }
    }

    let tree = Node::fragment(children);
    let html = to_html(&tree);

    debug!(toc_entries = toc.len(), bytes = html.len(), "rendered page body");
    info!(title = %page.title, permalink = ?page.permalink, "rendered page");

    Ok(RenderedPage {
        title: page.title.clone(),
        content_title: page.content_title(),
        permalink: page.permalink.clone(),
        sidebar_position: page.sidebar_position(),
        toc,
        tree,
        html,
    })
}

/// Builds the previous/next navigation request, or `None` when the page
/// has neither link.
fn pager_request(page: &PageDescriptor, pager: &PagerConfig) -> Option<RenderRequest> {
    if page.previous.is_none() && page.next.is_none() {
        return None;
    }

    let mut nav = RenderRequest::new("nav")
        .prop("className", "pagination-nav")
        .prop("aria-label", "Docs pages navigation");

    if let Some(ref previous) = page.previous {
        nav = nav.child(pager_link(previous, &pager.previous_label, "prev"));
    }
    if let Some(ref next) = page.next {
        nav = nav.child(pager_link(next, &pager.next_label, "next"));
    }

    Some(nav)
}

fn pager_link(link: &NavLink, label: &str, direction: &str) -> RenderRequest {
    let mut anchor = RenderRequest::new("a")
        .prop(
            "className",
            format!("pagination-nav__link pagination-nav__link--{direction}"),
        )
        .prop("href", link.permalink.clone());
    anchor.children = vec![
        Child::Request(
            RenderRequest::new("div")
                .prop("className", "pagination-nav__sublabel")
                .text(label),
        ),
        Child::Request(
            RenderRequest::new("div")
                .prop("className", "pagination-nav__label")
                .text(link.title.clone()),
        ),
    ];
    anchor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::descriptor::{PageFormat, parse_page};
    use crate::render::{FallbackPolicy, Implementation};
    use std::path::Path;

    fn page(yaml: &str) -> PageDescriptor {
        parse_page(yaml, PageFormat::Yaml, Path::new("page.yaml")).unwrap()
    }

    const PAGE: &str = r"
title: buildSrc
permalink: /learning/gradle/buildSrc
frontmatter:
  sidebar_position: 5
previous:
  title: Updating versions
  permalink: /learning/gradle/updating-versions
next:
  title: Composite builds
  permalink: /learning/gradle/composite-build
body:
  - type: h1
    props: { id: buildsrc }
    children: [buildSrc]
  - type: h2
    children: [Links]
  - type: p
    children: [See, ' ', { type: inlineCode, children: [buildSrc] }]
";

    #[test]
    fn test_render_page_basic() {
        let rendered = render_page(
            &page(PAGE),
            &ComponentRenderer::new(),
            &ComponentContext::new(),
            &PagerConfig::default(),
        )
        .unwrap();

        assert_eq!(rendered.title, "buildSrc");
        assert_eq!(rendered.content_title, "buildSrc");
        assert_eq!(rendered.sidebar_position, Some(5));
        assert_eq!(rendered.toc.len(), 1);
        assert_eq!(rendered.toc[0].id, "links");
        assert!(rendered.html.starts_with(
            r#"<h1 id="buildsrc">buildSrc</h1><h2 id="links">Links</h2>"#
        ));
        assert!(rendered.html.contains("<p>See <code>buildSrc</code></p>"));
    }

    #[test]
    fn test_pager_links() {
        let rendered = render_page(
            &page(PAGE),
            &ComponentRenderer::new(),
            &ComponentContext::new(),
            &PagerConfig::default(),
        )
        .unwrap();

        assert!(rendered.html.contains(
            r#"<nav class="pagination-nav" aria-label="Docs pages navigation">"#
        ));
        assert!(rendered.html.contains(
            r#"<a class="pagination-nav__link pagination-nav__link--prev" href="/learning/gradle/updating-versions"><div class="pagination-nav__sublabel">Previous</div><div class="pagination-nav__label">Updating versions</div></a>"#
        ));
        assert!(rendered.html.contains("pagination-nav__link--next"));
        assert!(rendered.html.ends_with("</nav>"));
    }

    #[test]
    fn test_pager_disabled() {
        let pager = PagerConfig {
            enabled: false,
            ..PagerConfig::default()
        };
        let rendered = render_page(
            &page(PAGE),
            &ComponentRenderer::new(),
            &ComponentContext::new(),
            &pager,
        )
        .unwrap();
        assert!(!rendered.html.contains("<nav"));
    }

    #[test]
    fn test_no_pager_without_links() {
        let rendered = render_page(
            &page("title: Solo\nbody: [hello]\n"),
            &ComponentRenderer::new(),
            &ComponentContext::new(),
            &PagerConfig::default(),
        )
        .unwrap();
        assert_eq!(rendered.html, "hello");
    }

    #[test]
    fn test_page_components_override_root_context() {
        let yaml = "title: T\ncomponents:\n  inlineCode: kbd\nbody:\n  - type: inlineCode\n    children: [x]\n";
        let root = ComponentContext::new().with("inlineCode", Implementation::Tag("samp".into()));
        let rendered = render_page(
            &page(yaml),
            &ComponentRenderer::new(),
            &root,
            &PagerConfig::default(),
        )
        .unwrap();
        assert_eq!(rendered.html, "<kbd>x</kbd>");
        assert_eq!(root.get("inlineCode"), Some(&Implementation::Tag("samp".into())));
    }

    #[test]
    fn test_wrapper_override_receives_toc() {
        let context = ComponentContext::new().with(
            "wrapper",
            Implementation::from_fn(|props, children| {
                let entries = props
                    .get("toc")
                    .and_then(serde_json::Value::as_array)
                    .map_or(0, Vec::len);
                let mut kids = vec![Node::text(format!("[{entries}]"))];
                kids.extend(children);
                Node::element("article", crate::render::Props::new(), kids)
            }),
        );
        let rendered = render_page(
            &page(PAGE),
            &ComponentRenderer::new(),
            &context,
            &PagerConfig::default(),
        )
        .unwrap();
        assert!(rendered.html.starts_with("<article>[1]<h1"));
    }

    #[test]
    fn test_strict_unknown_component_fails() {
        let renderer = ComponentRenderer::new().with_fallback(FallbackPolicy::Strict);
        let result = render_page(
            &page("title: T\nbody:\n  - type: Mystery\n"),
            &renderer,
            &ComponentContext::new(),
            &PagerConfig::default(),
        );
        assert!(result.is_err());
    }
}
