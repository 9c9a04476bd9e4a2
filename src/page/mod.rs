//! Documentation pages.
//!
//! Loads page descriptors produced upstream, extracts the table of
//! contents, and renders the body plus previous/next navigation.

pub mod descriptor;
pub mod document;
pub mod toc;

pub use descriptor::{
    ContentElement, ContentNode, NavLink, PageDescriptor, PageFormat, load_page, parse_page,
};
pub use document::{RenderedPage, render_page};
pub use toc::{Slugger, TocEntry, anchor_headings, extract_toc, slugify};
