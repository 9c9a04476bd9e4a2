//! `render` command handler.

use std::fs;

use tracing::{info, warn};

use crate::cli::args::{RenderArgs, RenderFormat};
use crate::config::{RendererConfig, Validator, load_config};
use crate::error::{ConfigError, PagesmithError};
use crate::page::{load_page, render_page};

/// Render a page descriptor to HTML or JSON.
///
/// # Errors
///
/// Returns an error if the configuration or page cannot be loaded, if
/// the page carries malformed component overrides, if rendering fails under the strict fallback policy, or if the output
/// cannot be written.
pub fn run(args: &RenderArgs) -> Result<(), PagesmithError> {
    let config = match args.config {
        Some(ref path) => load_config(path)?,
        None => RendererConfig::default(),
    };

    let mut renderer = config.build_renderer();
    if let Some(fallback) = args.fallback {
        renderer = renderer.with_fallback(fallback);
    }
    let context = config.build_context();

    let mut pager = config.pager.clone();
    if args.no_pager {
        pager.enabled = false;
    }

    let page = load_page(&args.page)?;
    let overrides = Validator::new().validate_page_overrides(&page);
    for warning in &overrides.warnings {
        warn!(page = %args.page.display(), "{warning}");
    }
    if overrides.has_errors() {
        return Err(ConfigError::ValidationError {
            path: args.page.display().to_string(),
            errors: overrides.errors,
        }
        .into());
    }

    info!(
        page = %args.page.display(),
        fallback = ?renderer.fallback(),
        overrides = context.len(),
        "rendering page"
    );

    let rendered = render_page(&page, &renderer, &context, &pager)?;

    let output = match args.format {
        RenderFormat::Html => rendered.html,
        RenderFormat::Json => serde_json::to_string_pretty(&rendered)?,
    };

    match args.output {
        Some(ref path) => {
            fs::write(path, format!("{output}\n"))?;
            info!(output = %path.display(), "wrote rendered page");
        }
        None => println!("{output}"),
    }

    Ok(())
}
