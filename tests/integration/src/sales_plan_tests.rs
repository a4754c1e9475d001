//! Replays the sample-sales plan shipped under `demos/sales-app` against a
//! scratch copy of its fixture.

use std::fs;
use std::path::{Path, PathBuf};

use patch_core::{Location, PatchOp, PatchOptions, PatchPlan, Patcher, patch_file};
use patch_fs::{content_digest, file_digest};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn demo_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/sales-app")
}

/// Copy the demo plan and the unpatched App.tsx into a temp dir.
fn scratch_copy() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("src")).unwrap();
    fs::copy(
        demo_dir().join("src/App.tsx"),
        temp.path().join("src/App.tsx"),
    )
    .unwrap();
    fs::copy(
        demo_dir().join("sample_sales.toml"),
        temp.path().join("sample_sales.toml"),
    )
    .unwrap();
    temp
}

fn expected() -> String {
    fs::read_to_string(demo_dir().join("expected/App.tsx")).unwrap()
}

#[test]
fn plan_produces_expected_app() {
    let temp = scratch_copy();

    let reports =
        PatchPlan::run_file(&temp.path().join("sample_sales.toml"), &Patcher::default()).unwrap();

    assert_eq!(reports.len(), 3);
    assert_eq!(reports[0].location, Location::Line(3));
    assert!(reports.iter().all(|r| r.written && r.changed()));
    assert_eq!(
        fs::read_to_string(temp.path().join("src/App.tsx")).unwrap(),
        expected()
    );
}

#[test]
fn dry_run_predicts_final_digest_without_writing() {
    let temp = scratch_copy();
    let app = temp.path().join("src/App.tsx");
    let before = file_digest(&app).unwrap();

    let reports = PatchPlan::run_file(
        &temp.path().join("sample_sales.toml"),
        &Patcher::new(PatchOptions::dry_run()),
    )
    .unwrap();

    assert_eq!(file_digest(&app).unwrap(), before);
    assert_eq!(reports[0].digest_before, before);
    assert_eq!(
        reports.last().unwrap().digest_after,
        content_digest(&expected())
    );
}

#[test]
fn steps_by_hand_match_plan() {
    let temp = scratch_copy();
    let app = temp.path().join("src/App.tsx");
    let plan = PatchPlan::load(&temp.path().join("sample_sales.toml")).unwrap();
    let options = PatchOptions::default();

    for step in &plan.steps {
        patch_file(&app, &step.to_op().unwrap(), &options).unwrap();
    }

    assert_eq!(fs::read_to_string(&app).unwrap(), expected());
}

#[test]
fn replace_without_inserted_header_fails_cleanly() {
    let temp = scratch_copy();
    let app = temp.path().join("src/App.tsx");
    let before = fs::read_to_string(&app).unwrap();

    // The header only exists after the insert-line step has run.
    let err = patch_file(
        &app,
        &PatchOp::replace_span(
            "const sampleSales: SaleRecord[] = [",
            "\nconst samplePurchases",
            "",
        ),
        &PatchOptions::default(),
    )
    .unwrap_err();

    assert!(err.is_marker_not_found());
    assert_eq!(fs::read_to_string(&app).unwrap(), before);
}
