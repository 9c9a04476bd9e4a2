//! Error types for `pagesmith`
//!
//! Rendering itself degrades gracefully, so most of this hierarchy covers
//! loading pages and renderer configuration from disk.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `pagesmith` CLI operations.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Configuration error (invalid YAML, validation failure)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Render error (unresolved component under the strict policy)
    pub const RENDER_ERROR: i32 = 4;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `pagesmith` operations.
#[derive(Debug, Error)]
pub enum PagesmithError {
    /// Renderer configuration loading or validation error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Page descriptor loading error
    #[error(transparent)]
    Page(#[from] PageError),

    /// Rendering error
    #[error(transparent)]
    Render(#[from] RenderError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PagesmithError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Page(PageError::Parse { .. }) => ExitCode::CONFIG_ERROR,
            Self::Page(PageError::MissingFile { .. }) | Self::Io(_) => ExitCode::IO_ERROR,
            Self::Render(_) => ExitCode::RENDER_ERROR,
            Self::Json(_) => ExitCode::ERROR,
        }
    }
}

// ============================================================================
// Render Errors
// ============================================================================

/// Errors raised while rendering a component tree.
///
/// Only produced when the renderer runs with
/// [`FallbackPolicy::Strict`](crate::render::FallbackPolicy::Strict);
/// every other policy substitutes a fallback instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// No override, default, or intrinsic element matched the name
    #[error("unresolved component '{name}'{}", suggestion_suffix(.suggestion.as_deref()))]
    UnresolvedComponent {
        /// The component name as it appeared in the content tree
        name: String,
        /// Closest registered name, if any is similar enough
        suggestion: Option<String>,
    },
}

fn suggestion_suffix(suggestion: Option<&str>) -> String {
    suggestion.map_or_else(String::new, |s| format!(" (did you mean '{s}'?)"))
}

// ============================================================================
// Page Errors
// ============================================================================

/// Errors loading a page descriptor.
#[derive(Debug, Error)]
pub enum PageError {
    /// Page file does not exist
    #[error("page not found: {path}")]
    MissingFile {
        /// Path to the missing page
        path: PathBuf,
    },

    /// Page file could not be parsed
    #[error("parse error in {path}: {message}")]
    Parse {
        /// Path to the page file
        path: PathBuf,
        /// Error message from the parser
        message: String,
    },
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Renderer configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing failed
    #[error("parse error in {path}: {message}")]
    ParseError {
        /// Path to the configuration file
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// Configuration validation failed
    #[error("validation failed for {path}: {}", join_issues(.errors))]
    ValidationError {
        /// Path to the configuration file
        path: String,
        /// List of validation issues found
        errors: Vec<ValidationIssue>,
    },

    /// Referenced configuration file not found
    #[error("file not found: {path}")]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },

    /// Field has an invalid value
    #[error("invalid value for '{field}': got '{value}', expected {expected}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The actual value provided
        value: String,
        /// Description of what was expected
        expected: String,
    },
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

// ============================================================================
// Validation Types
// ============================================================================

/// A single validation issue found during configuration validation.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Path to the problematic field (e.g., "components.note.tag")
    pub path: String,
    /// Description of the validation issue
    pub message: String,
    /// Severity level of the issue
    pub severity: Severity,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {} at {}", prefix, self.message, self.path)
    }
}

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Error - validation failure that prevents configuration from being used
    Error,
    /// Warning - potential issue that does not prevent configuration loading
    Warning,
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `pagesmith` operations.
pub type Result<T> = std::result::Result<T, PagesmithError>;

// ============================================================================
// Tests
// ============================================================================
