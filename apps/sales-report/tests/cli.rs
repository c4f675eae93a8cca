//! End-to-end runs of the `sales-report` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run(dir: &Path, args: &[&str], envs: &[(&str, &str)]) -> Output {
    // An empty config file keeps the platform config dir out of the run.
    let config = dir.join("report.toml");
    fs::write(&config, "").unwrap();

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sales-report"));
    cmd.arg("--config").arg(&config).args(args);
    for key in [
        "RUST_LOG",
        "SALES_REPORT_CONFIG",
        "SALES_REPORT_IN_FORMAT",
        "SALES_REPORT_OUT_FORMAT",
        "SALES_REPORT_PRETTY",
        "SALES_REPORT_LOG",
    ] {
        cmd.env_remove(key);
    }
    cmd.envs(envs.iter().copied());
    cmd.output().unwrap()
}

#[test]
fn writes_report_to_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sales.json");
    let output = dir.path().join("out.json");
    fs::write(
        &input,
        r#"[{"product": "A", "quantity": 2, "price": 10}, {"product": "A", "quantity": 1, "price": 10}]"#,
    )
    .unwrap();

    let result = run(
        dir.path(),
        &["-i", input.to_str().unwrap(), "-o", output.to_str().unwrap()],
        &[],
    );

    assert_eq!(result.status.code(), Some(0));
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "[{\"product\":\"A\",\"total\":30,\"quantity\":3,\"average_price\":10.0}]\n"
    );
}

#[test]
fn rejected_input_leaves_existing_report_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sales.json");
    let output = dir.path().join("out.json");
    fs::write(&input, "[]").unwrap();
    fs::write(&output, "previous report\n").unwrap();

    let result = run(
        dir.path(),
        &["-i", input.to_str().unwrap(), "-o", output.to_str().unwrap()],
        &[],
    );

    assert_eq!(result.status.code(), Some(2));
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous report\n");
}

#[test]
fn unknown_env_format_fails_before_reading() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sales.json");
    fs::write(&input, r#"[{"product": "A", "quantity": 1, "price": 1}]"#).unwrap();

    let result = run(
        dir.path(),
        &["-i", input.to_str().unwrap()],
        &[("SALES_REPORT_OUT_FORMAT", "xml")],
    );

    assert_eq!(result.status.code(), Some(1));
    assert!(result.stdout.is_empty());
    let stderr = String::from_utf8(result.stderr).unwrap();
    assert!(stderr.contains("SALES_REPORT_OUT_FORMAT"), "{stderr}");
    assert!(stderr.contains("xml"), "{stderr}");
}

#[test]
fn failure_is_reported_once() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sales.json");
    fs::write(&input, "[]").unwrap();

    let result = run(
        dir.path(),
        &["-i", input.to_str().unwrap()],
        &[("RUST_LOG", "info")],
    );

    assert_eq!(result.status.code(), Some(2));
    let stderr = String::from_utf8(result.stderr).unwrap();
    assert_eq!(stderr.matches("Input data is empty").count(), 1, "{stderr}");
}

#[test]
fn config_load_is_logged() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sales.json");
    fs::write(&input, r#"[{"product": "A", "quantity": 1, "price": 1}]"#).unwrap();

    let result = run(
        dir.path(),
        &["-i", input.to_str().unwrap()],
        &[("RUST_LOG", "info")],
    );

    assert_eq!(result.status.code(), Some(0));
    let stderr = String::from_utf8(result.stderr).unwrap();
    assert!(stderr.contains("Loading report config from file"), "{stderr}");
}
