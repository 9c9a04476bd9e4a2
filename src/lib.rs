//! `pagesmith` - component renderer for pre-compiled documentation pages
//!
//! Content trees reference components by name. The renderer resolves each
//! name against an immutable context of overrides threaded down the tree,
//! falls back to conventional defaults, and never aborts on an unknown
//! name unless configured to.
//!
//! ```
//! use pagesmith::render::{ComponentContext, ComponentRenderer, Implementation, Props};
//! use pagesmith::render::html::to_html;
//!
//! let renderer = ComponentRenderer::new();
//! let context = ComponentContext::new().with("note", Implementation::Tag("strong".into()));
//! let node = renderer
//!     .render("note", &Props::new(), vec!["hi".into()], &context)
//!     .unwrap();
//! assert_eq!(to_html(&node), "<strong>hi</strong>");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
pub mod page;
pub mod render;
