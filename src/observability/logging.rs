//! Logging setup for the `pagesmith` binary.
//!
//! Logs go to stderr so rendered HTML on stdout stays clean. Verbosity
//! flags raise the level of this crate's own events only; dependencies
//! stay at `warn`. `PAGESMITH_LOG_LEVEL` replaces the computed filter
//! entirely.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

use crate::cli::args::{Cli, ColorChoice};

/// Environment variable that overrides the verbosity flags.
pub const LOG_LEVEL_ENV: &str = "PAGESMITH_LOG_LEVEL";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable format with optional ANSI colors.
    #[default]
    Human,
    /// Newline-delimited JSON for machine consumption.
    Json,
}

/// Everything [`init_logging`] needs, gathered from the global flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogOptions {
    /// Output format.
    pub format: LogFormat,
    /// Count of `-v` flags.
    pub verbosity: u8,
    /// `--quiet`: errors only.
    pub quiet: bool,
    /// Color choice for human output.
    pub color: ColorChoice,
}

impl LogOptions {
    /// Reads the global logging flags.
    #[must_use]
    pub const fn from_cli(cli: &Cli) -> Self {
        Self {
            format: if cli.log_json {
                LogFormat::Json
            } else {
                LogFormat::Human
            },
            verbosity: cli.verbose,
            quiet: cli.quiet,
            color: cli.color,
        }
    }

    /// Filter directive used when `PAGESMITH_LOG_LEVEL` is unset.
    ///
    /// Quiet wins over any `-v`. Otherwise 0 → `warn`, 1 → `info`,
    /// 2 → `debug`, 3+ → `trace` for `pagesmith` events.
    #[must_use]
    pub fn directive(&self) -> String {
        if self.quiet {
            return "error".to_string();
        }
        match self.verbosity {
            0 => "warn".to_string(),
            1 => "warn,pagesmith=info".to_string(),
            2 => "warn,pagesmith=debug".to_string(),
            _ => "warn,pagesmith=trace".to_string(),
        }
    }
}

/// Decides whether human output gets ANSI colors.
///
/// `Auto` colors only a terminal and honours `NO_COLOR`.
#[must_use]
pub const fn use_ansi(color: ColorChoice, stderr_is_terminal: bool, no_color_set: bool) -> bool {
    match color {
        ColorChoice::Auto => stderr_is_terminal && !no_color_set,
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    }
}

/// Installs the global subscriber on stderr.
///
/// Uses `try_init`, so a second call (tests, embedding) is a no-op.
pub fn init_logging(options: &LogOptions) {
    let filter = EnvFilter::try_from_env(LOG_LEVEL_ENV)
        .unwrap_or_else(|_| EnvFilter::new(options.directive()));
    let show_target = options.verbosity >= 2;

    match options.format {
        LogFormat::Human => {
            let ansi = use_ansi(
                options.color,
                std::io::stderr().is_terminal(),
                std::env::var_os("NO_COLOR").is_some(),
            );
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(ansi)
                .with_target(show_target)
                .with_writer(std::io::stderr)
                .try_init();
        }
        LogFormat::Json => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .json()
                .with_current_span(false)
                .with_target(show_target)
                .with_writer(std::io::stderr)
                .try_init();
        }
    }
}
