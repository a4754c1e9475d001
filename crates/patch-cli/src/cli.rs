//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// blockpatch - edit text files around literal markers
#[derive(Parser, Debug)]
#[command(name = "blockpatch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every editing command
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct EditFlags {
    /// Print the diff instead of writing the file
    #[arg(long)]
    pub dry_run: bool,

    /// Skip fsync before the file is swapped into place
    #[arg(long)]
    pub no_fsync: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Insert a line before the first line containing a marker
    ///
    /// Examples:
    ///   blockpatch insert-line src/App.tsx --marker V001 --line 'const sampleSales = ['
    ///   blockpatch insert-line notes.md --marker '^## ' --regex --line '<!-- toc -->'
    InsertLine {
        /// File to edit in place
        file: PathBuf,

        /// Substring (or regex with --regex) identifying the anchor line
        #[arg(short, long, allow_hyphen_values = true)]
        marker: String,

        /// Line to insert before the anchor
        #[arg(short, long, allow_hyphen_values = true)]
        line: String,

        /// Interpret the marker as a regular expression
        #[arg(long)]
        regex: bool,

        #[command(flatten)]
        flags: EditFlags,
    },

    /// Replace the text between a start marker and the next end marker
    ///
    /// The span starts at the first byte of the start marker and stops
    /// before the end marker, which is kept unless --include-end is given.
    ReplaceSpan {
        /// File to edit in place
        file: PathBuf,

        /// Marker opening the span
        #[arg(short, long, allow_hyphen_values = true)]
        start: String,

        /// Marker closing the span, searched from the start marker onward
        #[arg(short, long, allow_hyphen_values = true)]
        end: String,

        /// Replacement text
        #[arg(
            short,
            long,
            allow_hyphen_values = true,
            conflicts_with = "text_file",
            required_unless_present = "text_file"
        )]
        text: Option<String>,

        /// Read the replacement text from a file
        #[arg(long)]
        text_file: Option<PathBuf>,

        /// Replace the end marker as well
        #[arg(long)]
        include_end: bool,

        /// Interpret both markers as regular expressions
        #[arg(long)]
        regex: bool,

        #[command(flatten)]
        flags: EditFlags,
    },

    /// Run every step of a patch plan (.toml, .json, .yaml)
    Apply {
        /// Plan file; relative step paths resolve against its directory
        plan: PathBuf,

        #[command(flatten)]
        flags: EditFlags,
    },
}
