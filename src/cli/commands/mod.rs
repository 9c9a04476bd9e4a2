//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod render;
pub mod validate;
pub mod version;

use crate::cli::args::{Cli, Commands};
use crate::error::PagesmithError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub fn dispatch(cli: Cli) -> Result<(), PagesmithError> {
    match cli.command {
        Commands::Render(args) => render::run(&args),
        Commands::Validate(args) => validate::run(&args),
        Commands::Version(args) => {
            version::run(&args);
            Ok(())
        }
    }
}
