//! Patch plans: ordered lists of edits loaded from a file.
//!
//! ```toml
//! [[step]]
//! path = "src/App.tsx"
//! op = "insert-line"
//! marker = "V001"
//! line = "const sampleSales: SaleRecord[] = ["
//!
//! [[step]]
//! path = "src/App.tsx"
//! op = "replace-span"
//! start = "const sampleSales: SaleRecord[] = ["
//! end = "\nconst samplePurchases"
//! replacement = "..."
//! ```
//!
//! Relative step paths are resolved against the plan file's directory.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::marker::Marker;
use crate::patcher::{PatchOp, PatchReport, Patcher};
use crate::span::EndBound;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchPlan {
    #[serde(rename = "step", alias = "steps", default)]
    pub steps: Vec<PlanStep>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlanStep {
    /// Target file, relative to the plan's directory unless absolute.
    pub path: PathBuf,
    /// Treat every marker of this step as a regular expression.
    #[serde(default)]
    pub regex: bool,
    #[serde(flatten)]
    pub action: StepAction,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum StepAction {
    InsertLine {
        marker: String,
        line: String,
    },
    ReplaceSpan {
        start: String,
        end: String,
        replacement: String,
        #[serde(default)]
        include_end: bool,
    },
}

impl PlanStep {
    pub fn to_op(&self) -> Result<PatchOp> {
        Ok(match &self.action {
            StepAction::InsertLine { marker, line } => PatchOp::InsertLine {
                marker: Marker::parse(marker, self.regex)?,
                line: line.clone(),
            },
            StepAction::ReplaceSpan {
                start,
                end,
                replacement,
                include_end,
            } => PatchOp::ReplaceSpan {
                start: Marker::parse(start, self.regex)?,
                end: Marker::parse(end, self.regex)?,
                replacement: replacement.clone(),
                end_bound: if *include_end {
                    EndBound::Inclusive
                } else {
                    EndBound::Exclusive
                },
            },
        })
    }
}

impl PatchPlan {
    /// Load a plan from a `.toml`, `.json`, `.yaml` or `.yml` file.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(patch_fs::config::load(path)?)
    }

    /// Run every step in order against files under `base_dir`.
    ///
    /// The first failing step aborts the run; steps before it keep their
    /// effect. On a dry run nothing is written, but each step's output is
    /// staged so later steps on the same file build on it.
    pub fn run(&self, base_dir: &Path, patcher: &Patcher) -> Result<Vec<PatchReport>> {
        let mut staged: HashMap<PathBuf, String> = HashMap::new();
        let mut reports = Vec::with_capacity(self.steps.len());

        for (index, step) in self.steps.iter().enumerate() {
            let path = base_dir.join(&step.path);
            let wrap = |source: Error| Error::Step {
                index: index + 1,
                path: path.clone(),
                source: Box::new(source),
            };

            let op = step.to_op().map_err(wrap)?;
            let original = match staged.get(&path) {
                Some(content) => content.clone(),
                None => patch_fs::io::read_text(&path).map_err(|e| wrap(e.into()))?,
            };

            tracing::debug!(step = index + 1, path = %path.display(), op = op.kind(), "running plan step");
            let (report, content) = patcher
                .patch_content(&path, &original, &op)
                .map_err(wrap)?;

            if patcher.options().dry_run {
                staged.insert(path, content);
            }
            reports.push(report);
        }

        Ok(reports)
    }

    /// Load the plan at `path` and run it relative to its own directory.
    pub fn run_file(path: &Path, patcher: &Patcher) -> Result<Vec<PatchReport>> {
        let plan = Self::load(path)?;
        let base_dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        tracing::info!(plan = %path.display(), steps = plan.steps.len(), "running patch plan");
        plan.run(base_dir, patcher)
    }
}
