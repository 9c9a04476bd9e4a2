//! Configuration loader.
//!
//! Reads a renderer configuration file, parses it, and validates it.
//! Validation collects every issue before failing.

use std::path::Path;

use tracing::{debug, warn};

use crate::config::schema::RendererConfig;
use crate::config::validation::Validator;
use crate::error::ConfigError;

/// Maximum configuration file size in bytes.
pub const MAX_CONFIG_SIZE: u64 = 1024 * 1024;

/// Loads and validates a renderer configuration file.
///
/// Warnings are logged; errors fail the load.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The file exceeds [`MAX_CONFIG_SIZE`]
/// - YAML parsing fails
/// - Validation fails
pub fn load_config(path: &Path) -> Result<RendererConfig, ConfigError> {
    let metadata = std::fs::metadata(path).map_err(|_| ConfigError::MissingFile {
        path: path.to_path_buf(),
    })?;

    if metadata.len() > MAX_CONFIG_SIZE {
        return Err(ConfigError::InvalidValue {
            field: "file_size".to_string(),
            value: format!("{} bytes", metadata.len()),
            expected: format!("at most {MAX_CONFIG_SIZE} bytes"),
        });
    }

    let raw_content = std::fs::read_to_string(path).map_err(|_| ConfigError::MissingFile {
        path: path.to_path_buf(),
    })?;

    let config = parse_config(&raw_content, path)?;
    debug!(
        path = %path.display(),
        components = config.components.len(),
        fallback = ?config.fallback,
        "loaded renderer configuration"
    );
    Ok(config)
}

/// Parses and validates configuration text. `path` is used for error
/// messages only.
///
/// # Errors
///
/// Returns [`ConfigError::ParseError`] for malformed or empty input and
/// [`ConfigError::ValidationError`] when validation finds errors.
pub fn parse_config(content: &str, path: &Path) -> Result<RendererConfig, ConfigError> {
    // Handle UTF-8 BOM
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    if content.trim().is_empty() {
        return Err(ConfigError::ParseError {
            path: path.to_path_buf(),
            line: None,
            message: "Configuration file is empty".to_string(),
        });
    }

    let config: RendererConfig =
        serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            line: e.location().map(|l| l.line()),
            message: e.to_string(),
        })?;

    let result = Validator::new().validate_config(&config);
    for warning in &result.warnings {
        warn!(path = %path.display(), "{warning}");
    }

    if result.has_errors() {
        return Err(ConfigError::ValidationError {
            path: path.display().to_string(),
            errors: result.errors,
        });
    }

    Ok(config)
}
