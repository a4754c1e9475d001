//! apply command

use std::path::Path;

use colored::Colorize;
use patch_core::{PatchPlan, PatchReport, Patcher};

use crate::cli::EditFlags;
use crate::error::Result;

use super::print_report;

pub fn run_apply(plan: &Path, flags: &EditFlags) -> Result<Vec<PatchReport>> {
    let reports = PatchPlan::run_file(plan, &Patcher::new(flags.options()))?;

    for report in &reports {
        print_report(report);
    }

    let label = if flags.dry_run { "planned" } else { "applied" };
    println!(
        "{} {} step(s) from {}",
        label.bold(),
        reports.len(),
        plan.display()
    );
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn applies_plan_relative_to_its_directory() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("a.txt"), "AAAxxxBBByyy").unwrap();
        let plan = dir.path().join("plan.toml");
        std::fs::write(
            &plan,
            "[[step]]\npath = \"a.txt\"\nop = \"replace-span\"\nstart = \"xxx\"\nend = \"yyy\"\nreplacement = \"ZZZ\"\n",
        )
        .unwrap();

        let flags = EditFlags {
            dry_run: false,
            no_fsync: true,
        };
        let reports = run_apply(&plan, &flags).unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(
            std::fs::read_to_string(dir.path().join("a.txt")).unwrap(),
            "AAAZZZyyy"
        );
    }
}
