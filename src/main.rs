//! `pagesmith` - render pre-compiled documentation pages to HTML

use clap::Parser;

use pagesmith::cli::args::Cli;
use pagesmith::cli::commands;
use pagesmith::error::ExitCode;
use pagesmith::observability::{LogOptions, init_logging};

fn main() {
    let cli = Cli::parse();

    init_logging(&LogOptions::from_cli(&cli));

    match commands::dispatch(cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
