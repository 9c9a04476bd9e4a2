//! Component rendering.
//!
//! Content trees name components by string. The [`ComponentRenderer`]
//! resolves each name against an immutable [`ComponentContext`] threaded
//! down the tree, merges properties, and builds [`Node`]s that
//! [`html::to_html`] serializes.

pub mod component;
pub mod context;
pub mod html;
pub mod node;
pub mod props;
pub mod renderer;

pub use component::{Component, FnComponent, Implementation, TagComponent};
pub use context::{ComponentContext, ComponentMap, ContextAdditions, extend_context};
pub use node::Node;
pub use props::{Props, merge_properties};
pub use renderer::{Child, ComponentRenderer, FallbackPolicy, RenderRequest};
