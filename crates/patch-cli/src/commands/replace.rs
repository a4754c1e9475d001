//! replace-span command

use std::path::Path;

use patch_core::{EndBound, Marker, PatchOp, PatchReport, Patcher};

use crate::cli::EditFlags;
use crate::error::Result;

use super::print_report;

/// Where the replacement text comes from.
#[derive(Debug, Clone, Copy)]
pub enum ReplacementSource<'a> {
    Inline(&'a str),
    File(&'a Path),
}

impl ReplacementSource<'_> {
    fn load(self) -> Result<String> {
        Ok(match self {
            Self::Inline(text) => text.to_string(),
            Self::File(path) => patch_fs::io::read_text(path)?,
        })
    }
}

pub fn run_replace_span(
    file: &Path,
    start: &str,
    end: &str,
    replacement: ReplacementSource<'_>,
    include_end: bool,
    regex: bool,
    flags: &EditFlags,
) -> Result<PatchReport> {
    let op = PatchOp::ReplaceSpan {
        start: Marker::parse(start, regex)?,
        end: Marker::parse(end, regex)?,
        replacement: replacement.load()?,
        end_bound: if include_end {
            EndBound::Inclusive
        } else {
            EndBound::Exclusive
        },
    };

    let report = Patcher::new(flags.options()).patch_file(file, &op)?;
    print_report(&report);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn flags(dry_run: bool) -> EditFlags {
        EditFlags {
            dry_run,
            no_fsync: true,
        }
    }

    #[test]
    fn replaces_with_inline_text() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("App.tsx");
        std::fs::write(&path, "AAAxxxBBByyy").unwrap();

        run_replace_span(
            &path,
            "xxx",
            "yyy",
            ReplacementSource::Inline("ZZZ"),
            false,
            false,
            &flags(false),
        )
        .unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "AAAZZZyyy");
    }

    #[test]
    fn replaces_with_file_text_through_end() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("App.tsx");
        let block = dir.path().join("block.txt");
        std::fs::write(&path, "AAAxxxBBByyyCCC").unwrap();
        std::fs::write(&block, "ZZZ").unwrap();

        run_replace_span(
            &path,
            "xxx",
            "yyy",
            ReplacementSource::File(&block),
            true,
            false,
            &flags(false),
        )
        .unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "AAAZZZCCC");
    }

    #[test]
    fn dry_run_does_not_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("App.tsx");
        std::fs::write(&path, "AAAxxxBBByyy").unwrap();

        let report = run_replace_span(
            &path,
            "xxx",
            "yyy",
            ReplacementSource::Inline("ZZZ"),
            false,
            false,
            &flags(true),
        )
        .unwrap();

        assert!(!report.written);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "AAAxxxBBByyy");
    }

    #[test]
    fn missing_replacement_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("App.tsx");
        std::fs::write(&path, "AAAxxxBBByyy").unwrap();

        let result = run_replace_span(
            &path,
            "xxx",
            "yyy",
            ReplacementSource::File(&dir.path().join("nope.txt")),
            false,
            false,
            &flags(false),
        );

        assert!(result.is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "AAAxxxBBByyy");
    }
}
