//! Configuration and page validation.
//!
//! Validation collects ALL issues rather than stopping at the first one.
//! Rendering never needs a validated page; this exists so authoring
//! mistakes surface in `pagesmith validate` instead of as silently
//! passed-through components.

use indexmap::IndexMap;

use crate::config::schema::{ComponentSpec, FRAGMENT_TAG, RendererConfig};
use crate::error::{Severity, ValidationIssue};
use crate::page::{ContentNode, PageDescriptor};
use crate::render::html::is_valid_tag_name;
use crate::render::props::RESERVED_PROPS;

// ============================================================================
// Public API
// ============================================================================

/// Result of validation.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Validation errors (prevent loading).
    pub errors: Vec<ValidationIssue>,

    /// Validation warnings (informational).
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Returns `true` if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns `true` if validation passed (no errors).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validator for renderer configurations and page descriptors.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<ValidationIssue>,
    warnings: Vec<ValidationIssue>,
}

impl Validator {
    /// Creates a new validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a renderer configuration.
    pub fn validate_config(&mut self, config: &RendererConfig) -> ValidationResult {
        self.errors.clear();
        self.warnings.clear();

        self.validate_components("components", &config.components);

        if config.pager.enabled {
            if config.pager.previous_label.trim().is_empty() {
                self.add_error("pager.previous_label", "Label cannot be empty");
            }
            if config.pager.next_label.trim().is_empty() {
                self.add_error("pager.next_label", "Label cannot be empty");
            }
        }

        self.finish()
    }

    /// Validates a page descriptor.
    pub fn validate_page(&mut self, page: &PageDescriptor) -> ValidationResult {
        self.errors.clear();
        self.warnings.clear();

        if page.title.trim().is_empty() {
            self.add_error("title", "Page title is required and cannot be empty");
        }

        if let Some(ref permalink) = page.permalink {
            if !permalink.starts_with('/') {
                self.add_warning("permalink", "Permalink should be site-absolute (start with '/')");
            }
        }

        if let Some(position) = page.frontmatter.get("sidebar_position") {
            if !position.is_number() {
                self.add_warning("frontmatter.sidebar_position", "Expected a number");
            }
        }

        for (field, link) in [("previous", &page.previous), ("next", &page.next)] {
            if let Some(link) = link {
                if link.title.trim().is_empty() {
                    self.add_error(&format!("{field}.title"), "Navigation title cannot be empty");
                }
                if link.permalink.trim().is_empty() {
                    self.add_error(
                        &format!("{field}.permalink"),
                        "Navigation permalink cannot be empty",
                    );
                }
            }
        }

        self.validate_components("components", &page.components);

        if page.body.is_empty() {
            self.add_warning("body", "Page has no content");
        }
        for (i, node) in page.body.iter().enumerate() {
            self.validate_content(&format!("body[{i}]"), node);
        }

        self.finish()
    }

    /// Validates only the component overrides a page carries, at page
    /// level and on any content element.
    /// The `render` command refuses pages with errors here.
    pub fn validate_page_overrides(&mut self, page: &PageDescriptor) -> ValidationResult {
        self.errors.clear();
        self.warnings.clear();

        self.validate_components("components", &page.components);
        for (i, node) in page.body.iter().enumerate() {
            self.validate_content_overrides(&format!("body[{i}]"), node);
        }

        self.finish()
    }

    fn validate_content_overrides(&mut self, path: &str, node: &ContentNode) {
        let ContentNode::Element(element) = node else {
            return;
        };
        self.validate_components(&format!("{path}.components"), &element.components);
        for (i, child) in element.children.iter().enumerate() {
            self.validate_content_overrides(&format!("{path}.children[{i}]"), child);
        }
    }

    // ========================================================================
    // Components
    // ========================================================================

    fn validate_components(&mut self, path: &str, specs: &IndexMap<String, ComponentSpec>) {
        for (name, spec) in specs {
            let entry = format!("{path}.{name}");

            if !is_valid_component_name(name) {
                self.add_error(
                    &entry,
                    "Component name must be non-empty, without whitespace, and scoped names must look like 'parent.child'",
                );
            }

            let tag = spec.tag();
            if tag != FRAGMENT_TAG && !is_valid_tag_name(tag) {
                self.add_error(
                    &format!("{entry}.tag"),
                    "Tag must start with a letter and contain only letters, digits, or '-'",
                );
            }

            if spec.class().is_some_and(|c| c.trim().is_empty()) {
                self.add_warning(&format!("{entry}.class"), "Class is empty");
            }

            if let Some(attrs) = spec.attrs() {
                for (key, _) in attrs {
                    if RESERVED_PROPS.contains(&key.as_str()) || key == "key" {
                        self.add_warning(
                            &format!("{entry}.attrs.{key}"),
                            "Reserved property is ignored at render time",
                        );
                    }
                }
            }
        }
    }

    // ========================================================================
    // Content
    // ========================================================================

    fn validate_content(&mut self, path: &str, node: &ContentNode) {
        let ContentNode::Element(element) = node else {
            return;
        };

        if element.kind.trim().is_empty() {
            self.add_error(&format!("{path}.type"), "Element type cannot be empty");
        }

        self.validate_components(&format!("{path}.components"), &element.components);

        for (i, child) in element.children.iter().enumerate() {
            self.validate_content(&format!("{path}.children[{i}]"), child);
        }
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn finish(&mut self) -> ValidationResult {
        ValidationResult {
            errors: std::mem::take(&mut self.errors),
            warnings: std::mem::take(&mut self.warnings),
        }
    }

    /// Adds an error to the collection.
    fn add_error(&mut self, path: &str, message: &str) {
        self.errors.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            severity: Severity::Error,
        });
    }

    /// Adds a warning to the collection.
    fn add_warning(&mut self, path: &str, message: &str) {
        self.warnings.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            severity: Severity::Warning,
        });
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn is_valid_component_name(name: &str) -> bool {
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        return false;
    }
    match name.split_once('.') {
        Some((parent, child)) => !parent.is_empty() && !child.is_empty() && !child.contains('.'),
        None => true,
    }
}
