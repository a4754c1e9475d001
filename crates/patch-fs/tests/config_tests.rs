use assert_fs::prelude::*;
use patch_fs::{Error, config};
use predicates::prelude::*;
use rstest::rstest;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq)]
struct Sample {
    name: String,
    count: u32,
}

#[rstest]
#[case("sample.toml", "name = \"sales\"\ncount = 3\n")]
#[case("sample.json", r#"{"name": "sales", "count": 3}"#)]
#[case("sample.yaml", "name: sales\ncount: 3\n")]
#[case("sample.YML", "name: sales\ncount: 3\n")]
fn loads_by_extension(#[case] file: &str, #[case] body: &str) {
    let temp = assert_fs::TempDir::new().unwrap();
    let child = temp.child(file);
    child.write_str(body).unwrap();

    let loaded: Sample = config::load(child.path()).unwrap();

    assert_eq!(
        loaded,
        Sample {
            name: "sales".into(),
            count: 3
        }
    );
}

#[test]
fn unsupported_extension_is_rejected_without_reading() {
    let temp = assert_fs::TempDir::new().unwrap();
    let missing = temp.child("plan.ini");

    let err = config::load::<Sample>(missing.path()).unwrap_err();

    assert!(matches!(err, Error::UnsupportedFormat { ref extension } if extension == "ini"));
    missing.assert(predicate::path::missing());
}

#[test]
fn parse_error_names_format_and_path() {
    let temp = assert_fs::TempDir::new().unwrap();
    let child = temp.child("broken.toml");
    child.write_str("name = \n").unwrap();

    let err = config::load::<Sample>(child.path()).unwrap_err();
    let message = err.to_string();

    assert!(message.contains("TOML"));
    assert!(message.contains("broken.toml"));
}
