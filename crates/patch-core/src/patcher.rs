//! File-level patching: read, locate, transform, write.

use std::fmt;
use std::ops::Range;
use std::path::{Path, PathBuf};

use patch_fs::{RobustnessConfig, content_digest, io};

use crate::diff::{DiffStat, unified_diff};
use crate::error::Result;
use crate::insert::insert_line_before;
use crate::marker::Marker;
use crate::span::{EndBound, replace_span};

/// Where an edit landed in the original document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// Zero-based index of the inserted line in the output.
    Line(usize),
    /// Byte range of the input that was replaced.
    Span(Range<usize>),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line(index) => write!(f, "line {}", index + 1),
            Self::Span(range) => write!(f, "bytes {}..{}", range.start, range.end),
        }
    }
}

/// The outcome of an in-memory edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patched {
    pub content: String,
    pub location: Location,
}

/// A single marker-based edit.
#[derive(Debug, Clone)]
pub enum PatchOp {
    InsertLine {
        marker: Marker,
        line: String,
    },
    ReplaceSpan {
        start: Marker,
        end: Marker,
        replacement: String,
        end_bound: EndBound,
    },
}

impl PatchOp {
    pub fn insert_line(marker: impl Into<Marker>, line: impl Into<String>) -> Self {
        Self::InsertLine {
            marker: marker.into(),
            line: line.into(),
        }
    }

    pub fn replace_span(
        start: impl Into<Marker>,
        end: impl Into<Marker>,
        replacement: impl Into<String>,
    ) -> Self {
        Self::ReplaceSpan {
            start: start.into(),
            end: end.into(),
            replacement: replacement.into(),
            end_bound: EndBound::Exclusive,
        }
    }

    /// Extend a span replacement through the end marker.
    pub fn through_end(mut self) -> Self {
        if let Self::ReplaceSpan { end_bound, .. } = &mut self {
            *end_bound = EndBound::Inclusive;
        }
        self
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::InsertLine { .. } => "insert-line",
            Self::ReplaceSpan { .. } => "replace-span",
        }
    }

    pub fn apply(&self, text: &str) -> Result<Patched> {
        match self {
            Self::InsertLine { marker, line } => insert_line_before(text, marker, line),
            Self::ReplaceSpan {
                start,
                end,
                replacement,
                end_bound,
            } => replace_span(text, start, end, replacement, *end_bound),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PatchOptions {
    /// Compute the edit and its diff without writing anything.
    pub dry_run: bool,
    pub robustness: RobustnessConfig,
}

impl PatchOptions {
    pub fn dry_run() -> Self {
        Self {
            dry_run: true,
            ..Default::default()
        }
    }
}

/// What happened to one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchReport {
    pub path: PathBuf,
    pub op: &'static str,
    pub location: Location,
    pub digest_before: String,
    pub digest_after: String,
    pub stat: DiffStat,
    pub written: bool,
    /// Unified diff, only produced for dry runs.
    pub diff: Option<String>,
}

impl PatchReport {
    pub fn changed(&self) -> bool {
        self.digest_before != self.digest_after
    }
}

/// Applies [`PatchOp`]s to files on disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct Patcher {
    options: PatchOptions,
}

impl Patcher {
    pub fn new(options: PatchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PatchOptions {
        &self.options
    }

    /// Read `path`, apply `op`, and write the result back.
    ///
    /// The document is fully read before any search. If the marker search
    /// fails nothing is written and the file is left byte-identical.
    pub fn patch_file(&self, path: &Path, op: &PatchOp) -> Result<PatchReport> {
        let original = io::read_text(path)?;
        let (report, _) = self.patch_content(path, &original, op)?;
        Ok(report)
    }

    /// Apply `op` to `original`, which is the current content of `path`.
    ///
    /// Returns the report and the new content. Writes to `path` unless this
    /// is a dry run.
    pub(crate) fn patch_content(
        &self,
        path: &Path,
        original: &str,
        op: &PatchOp,
    ) -> Result<(PatchReport, String)> {
        let patched = op.apply(original)?;

        let diff = self
            .options
            .dry_run
            .then(|| unified_diff(path, original, &patched.content));

        if !self.options.dry_run {
            io::write_atomic(
                path,
                patched.content.as_bytes(),
                self.options.robustness,
            )?;
        }

        let report = PatchReport {
            path: path.to_path_buf(),
            op: op.kind(),
            location: patched.location,
            digest_before: content_digest(original),
            digest_after: content_digest(&patched.content),
            stat: DiffStat::compute(original, &patched.content),
            written: !self.options.dry_run,
            diff,
        };

        tracing::info!(
            path = %report.path.display(),
            op = report.op,
            location = %report.location,
            stat = %report.stat,
            written = report.written,
            "patched"
        );

        Ok((report, patched.content))
    }
}

/// Shorthand for `Patcher::new(*options).patch_file(path, op)`.
pub fn patch_file(path: &Path, op: &PatchOp, options: &PatchOptions) -> Result<PatchReport> {
    Patcher::new(*options).patch_file(path, op)
}
