use std::fs;
use std::path::Path;
use std::process::Command;

use interface_jc::{compute_interface_jc, compute_interface_jc_with, EstimatorConfig, JcError};
use tempfile::TempDir;

fn write_csv(dir: &Path, name: &str, rows: &[(f64, f64, f64)]) {
    let mut body = String::from("position,current,voltage\n");
    for (position, current, voltage) in rows {
        body.push_str(&format!("{position},{current},{voltage}\n"));
    }
    fs::write(dir.join(name), body).unwrap();
}

fn two_interface_dir() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_csv(tmp.path(), "A.csv", &[(0.0, 1.0, 2e-6), (1.0, 3.0, 0.0)]);
    write_csv(tmp.path(), "B.csv", &[(0.0, 5.0, 1e-7)]);
    tmp
}

fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_interface-jc"))
        .args(args)
        .output()
        .expect("failed to launch interface-jc")
}

#[test]
fn reference_directory_yields_expected_mapping() {
    let tmp = two_interface_dir();
    let report = compute_interface_jc(tmp.path()).unwrap();

    assert_eq!(report.len(), 2);
    assert_eq!(report.get("A"), Some(1.0));
    assert_eq!(report.get("B"), Some(0.0));
}

#[test]
fn one_entry_per_csv_file_only() {
    let tmp = two_interface_dir();
    fs::write(tmp.path().join("README.md"), "not a table").unwrap();
    fs::write(tmp.path().join("C.CSV"), "garbage").unwrap();

    let report = compute_interface_jc(tmp.path()).unwrap();
    assert_eq!(report.interface_ids(), vec!["A", "B"]);
}

#[test]
fn doubled_suffix_keeps_inner_csv() {
    let tmp = TempDir::new().unwrap();
    write_csv(tmp.path(), "run.csv.csv", &[(0.0, 4.0, 1.0)]);

    let report = compute_interface_jc(tmp.path()).unwrap();
    assert_eq!(report.get("run.csv"), Some(4.0));
    assert_eq!(report.get("run"), None);
}

#[test]
fn threshold_boundary_does_not_qualify() {
    let tmp = TempDir::new().unwrap();
    write_csv(tmp.path(), "edge.csv", &[(0.0, 9.0, 1e-6)]);

    let report = compute_interface_jc(tmp.path()).unwrap();
    assert_eq!(report.get("edge"), Some(0.0));
}

#[test]
fn repeated_runs_are_identical() {
    let tmp = two_interface_dir();
    write_csv(
        tmp.path(),
        "C.csv",
        &[(0.0, 1.5, 3e-6), (0.5, 2.5, 4e-6), (1.0, 100.0, 0.0)],
    );

    let first = compute_interface_jc(tmp.path()).unwrap();
    let second = compute_interface_jc(tmp.path()).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.get("C"), Some(2.0));
}

#[test]
fn custom_threshold_changes_subset() {
    let tmp = two_interface_dir();
    let config = EstimatorConfig::with_threshold(1e-8);

    let report = compute_interface_jc_with(tmp.path(), &config).unwrap();
    assert_eq!(report.get("A"), Some(1.0));
    assert_eq!(report.get("B"), Some(5.0));
}

#[test]
fn one_malformed_file_aborts_the_run() {
    let tmp = two_interface_dir();
    fs::write(tmp.path().join("Z.csv"), "position,current\n0,1\n").unwrap();

    let err = compute_interface_jc(tmp.path()).unwrap_err();
    assert!(matches!(err, JcError::MissingColumn { column: "voltage", .. }));
}

#[test]
fn directory_named_csv_aborts_the_run() {
    let tmp = two_interface_dir();
    fs::create_dir(tmp.path().join("nested.csv")).unwrap();

    let err = compute_interface_jc(tmp.path()).unwrap_err();
    assert!(matches!(err, JcError::Csv { .. }));
}

#[test]
fn missing_values_follow_na_convention() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("A.csv"),
        "position,current,voltage\n0,1,2e-6\n1,3\n2,3,NA\n3,7,null\n",
    )
    .unwrap();

    let report = compute_interface_jc(tmp.path()).unwrap();
    assert_eq!(report.get("A"), Some(1.0));
}

#[test]
fn nan_current_in_qualifying_row_poisons_the_mean() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("A.csv"),
        "position,current,voltage\n0,1,2e-6\n1,,3e-6\n",
    )
    .unwrap();

    let report = compute_interface_jc(tmp.path()).unwrap();
    assert!(report.get("A").unwrap().is_nan());
}

#[test]
fn empty_directory_gives_empty_mapping() {
    let tmp = TempDir::new().unwrap();
    assert!(compute_interface_jc(tmp.path()).unwrap().is_empty());
}

#[test]
fn cli_reports_missing_directory() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("nowhere");
    let output = run_cli(&[missing.to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        format!("Data directory {} not found.\n", missing.display())
    );
}

#[test]
fn cli_prints_text_report() {
    let tmp = two_interface_dir();
    let output = run_cli(&[tmp.path().to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Interface Jc results:\nA: 1.0000e+00 A/m²\nB: 0.0000e+00 A/m²\n"
    );
}

#[test]
fn cli_fails_on_malformed_file_without_partial_report() {
    let tmp = two_interface_dir();
    fs::write(
        tmp.path().join("C.csv"),
        "position,current,voltage\n0,abc,1\n",
    )
    .unwrap();
    let output = run_cli(&[tmp.path().to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn cli_json_report() {
    let tmp = two_interface_dir();
    let output = run_cli(&["--format", "json", tmp.path().to_str().unwrap()]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["interfaces"][0]["interface"], "A");
    assert_eq!(value["interfaces"][0]["jc"], 1.0);
    assert_eq!(value["interfaces"][1]["jc"], 0.0);
}

#[test]
fn cli_prints_nan_for_missing_current() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("A.csv"),
        "position,current,voltage\n0,,2e-6\n",
    )
    .unwrap();
    let output = run_cli(&[tmp.path().to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Interface Jc results:\nA: nan A/m²\n"
    );
}

#[test]
fn cli_threshold_flag_widens_subset() {
    let tmp = two_interface_dir();
    let output = run_cli(&["--threshold", "1e-8", tmp.path().to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Interface Jc results:\nA: 1.0000e+00 A/m²\nB: 5.0000e+00 A/m²\n"
    );
}

#[test]
fn cli_without_arguments_uses_default_directory() {
    let tmp = TempDir::new().unwrap();
    let work = tmp.path().join("work");
    fs::create_dir(&work).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_interface-jc"))
        .current_dir(&work)
        .output()
        .expect("failed to launch interface-jc");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Data directory ../data/interfacial_measurements/ not found.\n"
    );
}

#[test]
fn cli_without_arguments_reads_default_directory() {
    let tmp = TempDir::new().unwrap();
    let work = tmp.path().join("work");
    let data = tmp.path().join("data").join("interfacial_measurements");
    fs::create_dir(&work).unwrap();
    fs::create_dir_all(&data).unwrap();
    write_csv(&data, "A.csv", &[(0.0, 2.0, 1e-3)]);

    let output = Command::new(env!("CARGO_BIN_EXE_interface-jc"))
        .current_dir(&work)
        .output()
        .expect("failed to launch interface-jc");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Interface Jc results:\nA: 2.0000e+00 A/m²\n"
    );
}
