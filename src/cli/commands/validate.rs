//! `validate` command handler.
//!
//! Checks page descriptors and, optionally, a renderer configuration.
//! Every file is checked; the command fails at the end if any had
//! errors (or warnings, with `--strict`).

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::config::{RendererConfig, ValidationResult, Validator};
use crate::error::{ConfigError, PagesmithError, Severity, ValidationIssue};
use crate::page::load_page;

/// Validation outcome for one file.
#[derive(Debug, Serialize)]
struct FileReport {
    path: PathBuf,
    valid: bool,
    errors: Vec<String>,
    warnings: Vec<String>,
}

/// Totals across all files.
#[derive(Debug, Serialize)]
struct Summary {
    files: usize,
    errors: usize,
    warnings: usize,
}

/// Execute `validate`.
///
/// # Errors
///
/// Returns [`ConfigError::ValidationError`] if any file has errors, or
/// warnings in strict mode.
pub fn run(args: &ValidateArgs) -> Result<(), PagesmithError> {
    let mut reports = Vec::new();

    if let Some(ref path) = args.config {
        reports.push(check_config(path, args.strict));
    }
    for path in &args.pages {
        reports.push(check_page(path, args.strict));
    }

    let summary = Summary {
        files: reports.len(),
        errors: reports.iter().map(|r| r.errors.len()).sum(),
        warnings: reports.iter().map(|r| r.warnings.len()).sum(),
    };

    match args.format {
        OutputFormat::Human => print_human(&reports, &summary),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "files": reports,
                "summary": summary,
            }))?
        ),
    }

    let failed: Vec<ValidationIssue> = reports
        .iter()
        .filter(|r| !r.valid)
        .map(|r| ValidationIssue {
            path: r.path.display().to_string(),
            message: format!("{} error(s), {} warning(s)", r.errors.len(), r.warnings.len()),
            severity: Severity::Error,
        })
        .collect();

    if failed.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError {
            path: format!("{} file(s)", failed.len()),
            errors: failed,
        }
        .into())
    }
}

fn check_config(path: &Path, strict: bool) -> FileReport {
    let parsed = fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|text| {
            let text = text.strip_prefix('\u{feff}').unwrap_or(&text).to_string();
            serde_yaml::from_str::<RendererConfig>(&text).map_err(|e| e.to_string())
        });

    match parsed {
        Ok(config) => report(path, &Validator::new().validate_config(&config), strict),
        Err(message) => failed_report(path, message),
    }
}

fn check_page(path: &Path, strict: bool) -> FileReport {
    match load_page(path) {
        Ok(page) => report(path, &Validator::new().validate_page(&page), strict),
        Err(e) => failed_report(path, e.to_string()),
    }
}

fn report(path: &Path, result: &ValidationResult, strict: bool) -> FileReport {
    FileReport {
        path: path.to_path_buf(),
        valid: result.is_valid() && !(strict && !result.warnings.is_empty()),
        errors: result.errors.iter().map(ToString::to_string).collect(),
        warnings: result.warnings.iter().map(ToString::to_string).collect(),
    }
}

fn failed_report(path: &Path, message: String) -> FileReport {
    FileReport {
        path: path.to_path_buf(),
        valid: false,
        errors: vec![message],
        warnings: Vec::new(),
    }
}

fn print_human(reports: &[FileReport], summary: &Summary) {
    for report in reports {
        let status = if report.valid { "ok" } else { "FAILED" };
        println!("{}: {status}", report.path.display());
        for line in report.errors.iter().chain(&report.warnings) {
            println!("  {line}");
        }
    }
    println!(
        "\n{} file(s), {} error(s), {} warning(s)",
        summary.files, summary.errors, summary.warnings
    );
}
