//! Command implementations for the blockpatch CLI

pub mod apply;
pub mod insert;
pub mod replace;

use colored::Colorize;
use patch_core::{PatchOptions, PatchReport};

use crate::cli::EditFlags;

pub use apply::run_apply;
pub use insert::run_insert_line;
pub use replace::run_replace_span;

impl EditFlags {
    pub fn options(&self) -> PatchOptions {
        let mut options = PatchOptions {
            dry_run: self.dry_run,
            ..Default::default()
        };
        options.robustness.enable_fsync = !self.no_fsync;
        options
    }
}

/// Print a one-line summary of a report, followed by its diff on dry runs.
pub(crate) fn print_report(report: &PatchReport) {
    let verb = if report.written {
        "patched".green().bold()
    } else {
        "would patch".yellow().bold()
    };
    println!(
        "{} {} ({} at {}, {})",
        verb,
        report.path.display(),
        report.op,
        report.location,
        report.stat
    );

    if let Some(diff) = &report.diff {
        for line in diff.lines() {
            if line.starts_with("+++") || line.starts_with("---") {
                println!("{}", line.bold());
            } else if line.starts_with('+') {
                println!("{}", line.green());
            } else if line.starts_with('-') {
                println!("{}", line.red());
            } else if line.starts_with("@@") {
                println!("{}", line.cyan());
            } else {
                println!("{line}");
            }
        }
    }
}
