//! CLI argument definitions
//!
//! All Clap derive structs for `pagesmith` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::render::FallbackPolicy;

// ============================================================================
// Root CLI
// ============================================================================

/// Render pre-compiled documentation pages to HTML.
#[derive(Parser, Debug)]
#[command(name = "pagesmith", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Emit logs as JSON.
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "PAGESMITH_COLOR")]
    pub color: ColorChoice,
}

// ============================================================================
// Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a page descriptor to HTML.
    Render(RenderArgs),

    /// Validate page descriptors and renderer configuration.
    Validate(ValidateArgs),

    /// Display version information.
    Version(VersionArgs),
}

/// Arguments for `render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Page descriptor (YAML or JSON).
    pub page: PathBuf,

    /// Renderer configuration file.
    #[arg(short, long, env = "PAGESMITH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write output here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, default_value = "html")]
    pub format: RenderFormat,

    /// Override the configured fallback policy.
    #[arg(long, env = "PAGESMITH_FALLBACK")]
    pub fallback: Option<FallbackPolicy>,

    /// Omit the previous/next pager.
    #[arg(long)]
    pub no_pager: bool,
}

/// Arguments for `validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Page descriptors to validate.
    pub pages: Vec<PathBuf>,

    /// Renderer configuration file to validate.
    #[arg(short, long, env = "PAGESMITH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,

    /// Enable strict validation (warnings become errors).
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Output format for `render`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RenderFormat {
    /// HTML fragment.
    #[default]
    Html,
    /// JSON with metadata, table of contents, tree, and HTML.
    Json,
}

// ============================================================================
// Tests
// ============================================================================
