mod common;

use pagesmith::config::load_config;
use pagesmith::page::{PageDescriptor, load_page, render_page};
use pagesmith::render::{
    ComponentContext, ComponentRenderer, FallbackPolicy, Implementation, Node, Props,
};

fn buildsrc() -> PageDescriptor {
    load_page(&common::fixture_path("buildsrc.yaml")).expect("fixture should load")
}

#[test]
fn buildsrc_page_exposes_heading_media_and_links() {
    let config = pagesmith::config::RendererConfig::default();
    let rendered = render_page(
        &buildsrc(),
        &config.build_renderer(),
        &config.build_context(),
        &config.pager,
    )
    .unwrap();

    assert_eq!(rendered.content_title, "buildSrc");
    assert_eq!(rendered.sidebar_position, Some(5));
    assert_eq!(
        rendered.permalink.as_deref(),
        Some("/learning/gradle/buildSrc")
    );
    assert!(rendered.toc.is_empty());

    let headings = rendered.tree.find_all("h1");
    assert_eq!(headings.len(), 1);
    assert_eq!(headings[0].text_content(), "buildSrc");

    let iframes = rendered.tree.find_all("iframe");
    assert_eq!(iframes.len(), 1);
    let Node::Element { props, .. } = iframes[0] else {
        panic!("iframe should be an element");
    };
    assert_eq!(props.get_str("width"), Some("675"));
    assert_eq!(props.get_str("height"), Some("380"));
    assert_eq!(props.get("allowfullscreen"), Some(&serde_json::json!(true)));
    assert!(!props.contains_key("parentName"));

    // Three content links plus previous/next
    assert_eq!(rendered.tree.find_all("a").len(), 5);
    assert_eq!(rendered.tree.find_all("br").len(), 2);

    assert!(rendered.html.starts_with(
        r#"<h1 id="buildsrc">buildSrc</h1><iframe src="//www.youtube.com/embed/QqqYzaOzq3A?list=PL6yFiPOVXVUi90sQ66dtmuXP-1-TeHwl5" frameborder="0" allowfullscreen width="675" height="380"></iframe><br><br><ul><li><a href="https://"#
    ));
    assert!(rendered.html.contains(">Обновление версий</div>"));
    assert!(!rendered.html.contains("parentName"));
}

#[test]
fn config_overrides_apply_to_scoped_links_only() {
    let config = load_config(&common::fixture_path("overrides.yaml")).unwrap();
    let rendered = render_page(
        &buildsrc(),
        &config.build_renderer(),
        &config.build_context(),
        &config.pager,
    )
    .unwrap();

    assert_eq!(
        rendered
            .html
            .matches(r#"<a class="external" target="_blank" rel="noopener" href="https://"#)
            .count(),
        3
    );
    // Pager links sit under `nav`, not `li`, so keep their own classes
    assert!(rendered.html.contains("pagination-nav__link--prev"));
    assert!(rendered.html.contains(r#"<iframe class="video" src="#));
    assert!(rendered.html.contains(">Назад</div>"));
    assert!(rendered.html.contains(">Далее</div>"));
}

#[test]
fn unknown_component_degrades_to_children() {
    let page = load_page(&common::fixture_path("unknown_component.yaml")).unwrap();
    let rendered = render_page(
        &page,
        &ComponentRenderer::new(),
        &ComponentContext::new(),
        &Default::default(),
    )
    .unwrap();
    assert_eq!(
        rendered.html,
        "<h1>Callouts</h1><p>Inside an unregistered component</p>"
    );
}

#[test]
fn unknown_component_as_container() {
    let page = load_page(&common::fixture_path("unknown_component.yaml")).unwrap();
    let renderer = ComponentRenderer::new().with_fallback(FallbackPolicy::Container);
    let rendered = render_page(&page, &renderer, &ComponentContext::new(), &Default::default())
        .unwrap();
    assert!(rendered.html.contains(
        r#"<div kind="note" data-component="Admonition"><p>Inside an unregistered component</p></div>"#
    ));
}

#[test]
fn unknown_component_strict_fails() {
    let page = load_page(&common::fixture_path("unknown_component.yaml")).unwrap();
    let renderer = ComponentRenderer::new().with_fallback(FallbackPolicy::Strict);
    let err = render_page(&page, &renderer, &ComponentContext::new(), &Default::default())
        .unwrap_err();
    assert!(err.to_string().contains("Admonition"));
}

#[test]
fn custom_component_receives_props_and_rendered_children() {
    let page = load_page(&common::fixture_path("unknown_component.yaml")).unwrap();
    let admonition = Implementation::from_fn(|props, children| {
        let kind = props.get_str("kind").unwrap_or("info").to_string();
        Node::element(
            "aside",
            Props::new().with("className", format!("admonition admonition-{kind}")),
            children,
        )
    });
    let context = ComponentContext::new().with("Admonition", admonition);
    let rendered = render_page(
        &page,
        &ComponentRenderer::new(),
        &context,
        &Default::default(),
    )
    .unwrap();
    assert!(rendered.html.ends_with(
        r#"<aside class="admonition admonition-note"><p>Inside an unregistered component</p></aside>"#
    ));
}

#[test]
fn pages_render_independently_across_threads() {
    let page = buildsrc();
    let renderer = ComponentRenderer::new();
    let context = ComponentContext::new().with("h1", Implementation::Tag("h2".into()));

    let outputs: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    render_page(&page, &renderer, &context, &Default::default())
                        .unwrap()
                        .html
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(outputs.windows(2).all(|w| w[0] == w[1]));
    assert!(outputs[0].starts_with(r#"<h2 id="buildsrc">"#));
}

fn render_yaml(yaml: &str) -> pagesmith::page::RenderedPage {
    let page = pagesmith::page::parse_page(
        yaml,
        pagesmith::page::PageFormat::Yaml,
        std::path::Path::new("inline.yaml"),
    )
    .unwrap();
    render_page(
        &page,
        &ComponentRenderer::new(),
        &ComponentContext::new(),
        &Default::default(),
    )
    .unwrap()
}

#[test]
fn key_prop_becomes_identity_not_attribute() {
    let rendered = render_yaml(
        "title: Keys\nbody:\n  - type: ul\n    children:\n      - type: li\n        props: { key: k1 }\n        children: [x]\n",
    );
    assert_eq!(rendered.html, "<ul><li>x</li></ul>");
    let items = rendered.tree.find_all("li");
    assert!(matches!(items[0], Node::Element { key: Some(k), .. } if k == "k1"));
}

#[test]
fn toc_anchors_exist_in_rendered_html() {
    let rendered = render_yaml(
        "title: Anchors\nbody:\n  - type: h2\n    children: [Links]\n  - type: h2\n    children: [Links]\n  - type: h3\n    props: { id: custom }\n    children: [Own]\n",
    );
    for entry in &rendered.toc {
        assert!(
            rendered.html.contains(&format!(r#"id="{}""#, entry.id)),
            "missing anchor {} in {}",
            entry.id,
            rendered.html
        );
    }
    assert_eq!(
        rendered.html,
        r#"<h2 id="links">Links</h2><h2 id="links-1">Links</h2><h3 id="custom">Own</h3>"#
    );
}

#[test]
fn uncommon_html_elements_render_as_themselves() {
    let rendered = render_yaml(
        "title: Media\nbody:\n  - type: embed\n    props: { src: /a.swf }\n  - type: audio\n    props: { src: /a.mp3, controls: true }\n  - type: cite\n    children: [Book]\n",
    );
    assert_eq!(
        rendered.html,
        r#"<embed src="/a.swf"><audio src="/a.mp3" controls></audio><cite>Book</cite>"#
    );
}

#[test]
fn configured_defaults_never_leak_meta_properties() {
    let config = pagesmith::config::parse_config(
        "components:\n  Note:\n    tag: aside\n    attrs:\n      key: x\n      mdxType: y\n      role: note\n",
        std::path::Path::new("inline.yaml"),
    )
    .unwrap();
    let page = pagesmith::page::parse_page(
        "title: T\nbody:\n  - type: Note\n    children: [hi]\n",
        pagesmith::page::PageFormat::Yaml,
        std::path::Path::new("inline.yaml"),
    )
    .unwrap();
    let rendered = render_page(
        &page,
        &config.build_renderer(),
        &config.build_context(),
        &config.pager,
    )
    .unwrap();
    assert_eq!(rendered.html, r#"<aside role="note">hi</aside>"#);
}

#[test]
fn malformed_attribute_names_are_dropped() {
    let rendered = render_yaml(
        "title: T\nbody:\n  - type: p\n    props: { 'x\"><script>alert(1)</script': y }\n    children: [z]\n",
    );
    assert_eq!(rendered.html, "<p>z</p>");
}
