//! insert-line command

use std::path::Path;

use patch_core::{Marker, PatchOp, PatchReport, Patcher};

use crate::cli::EditFlags;
use crate::error::Result;

use super::print_report;

pub fn run_insert_line(
    file: &Path,
    marker: &str,
    line: &str,
    regex: bool,
    flags: &EditFlags,
) -> Result<PatchReport> {
    let op = PatchOp::InsertLine {
        marker: Marker::parse(marker, regex)?,
        line: line.to_string(),
    };

    let report = Patcher::new(flags.options()).patch_file(file, &op)?;
    print_report(&report);
    Ok(report)
}
