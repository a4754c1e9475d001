//! blockpatch CLI
//!
//! Inserts lines at, or replaces spans between, literal markers in text files.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use commands::replace::ReplacementSource;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)?;
    tracing::debug!("Verbose mode enabled");

    execute_command(cli.command)
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::InsertLine {
            file,
            marker,
            line,
            regex,
            flags,
        } => commands::run_insert_line(&file, &marker, &line, regex, &flags).map(drop),
        Commands::ReplaceSpan {
            file,
            start,
            end,
            text,
            text_file,
            include_end,
            regex,
            flags,
        } => {
            let replacement = match (&text, &text_file) {
                (_, Some(path)) => ReplacementSource::File(path),
                (Some(text), None) => ReplacementSource::Inline(text),
                // clap enforces one of the two
                (None, None) => ReplacementSource::Inline(""),
            };
            commands::run_replace_span(&file, &start, &end, replacement, include_end, regex, &flags)
                .map(drop)
        }
        Commands::Apply { plan, flags } => commands::run_apply(&plan, &flags).map(drop),
    }
}
