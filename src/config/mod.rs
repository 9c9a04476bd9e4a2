//! Renderer configuration.
//!
//! Loads and validates `pagesmith` configuration files: the fallback
//! policy, declarative component overrides, and pager labels.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{MAX_CONFIG_SIZE, load_config, parse_config};
pub use schema::{ComponentSpec, FRAGMENT_TAG, PagerConfig, RendererConfig, component_map};
pub use validation::{ValidationResult, Validator};
