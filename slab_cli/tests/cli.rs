use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const SCENARIO: [(&str, &str); 7] = [
    ("--span", "4"),
    ("--thickness", "150"),
    ("--dead-load", "3.5"),
    ("--live-load", "2"),
    ("--concrete", "C25"),
    ("--steel", "460"),
    ("--cover", "20"),
];

/// `design` arguments for the reference slab with some values replaced
fn design(overrides: &[(&str, &str)]) -> Vec<String> {
    let mut args = vec!["design".to_string()];
    for (flag, value) in SCENARIO {
        let value = overrides
            .iter()
            .find(|(f, _)| *f == flag)
            .map_or(value, |(_, v)| *v);
        args.push(flag.to_string());
        args.push(value.to_string());
    }
    args
}

/// Run from an empty directory so no stray slabcalc.toml is picked up
fn cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("slabcalc").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn design_scenario_text() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(design(&[]))
        .assert()
        .success()
        .stdout(contains("BS 8110-1:1997"))
        .stdout(contains("Y8 @ 125"))
        .stdout(contains("Status: Deflection check fails"));
}

#[test]
fn design_scenario_json() {
    let dir = TempDir::new().unwrap();
    let out = cmd(&dir).args(design(&[])).args(["--format", "json"]).output().unwrap();
    assert!(out.status.success());

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["status"], "success");
    assert_eq!(json["result"]["code"], "BS8110");
    assert!((json["result"]["design_moment_knm_per_m"].as_f64().unwrap() - 16.2).abs() < 1e-9);
    assert_eq!(json["result"]["flexure"]["outcome"], "singly_reinforced");
}

#[test]
fn design_markdown_has_equation_appendix() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(design(&[]))
        .args(["--format", "markdown"])
        .assert()
        .success()
        .stdout(contains("# One-Way Slab Design"))
        .stdout(contains("## Appendix: List of Equations"));
}

#[test]
fn ec2_code_flag() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(design(&[]))
        .args(["--code", "EC2"])
        .assert()
        .success()
        .stdout(contains("Eurocode 2"))
        .stdout(contains("Y8 @ 150"))
        .stdout(contains("Status: Adequate"));
}

#[test]
fn compression_outcome_exits_zero() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(design(&[("--span", "8"), ("--dead-load", "10"), ("--live-load", "5")]))
        .assert()
        .success()
        .stdout(contains("Compression reinforcement required"));
}

#[test]
fn infeasible_geometry_exits_one() {
    let dir = TempDir::new().unwrap();
    let out = cmd(&dir)
        .args(design(&[("--thickness", "20")]))
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["status"], "failure");
    assert_eq!(json["error"]["code"], "GEOMETRY_INFEASIBLE");
}

#[test]
fn unknown_grade_exits_one() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(design(&[("--concrete", "C45")]))
        .assert()
        .code(1)
        .stderr(contains("UNKNOWN_GRADE"));
}

#[test]
fn input_limits_and_no_limits() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(design(&[("--span", "14"), ("--cover", "10")]))
        .assert()
        .code(1)
        .stderr(contains("Span").and(contains("Cover")));

    cmd(&dir)
        .args(design(&[("--span", "14"), ("--cover", "10")]))
        .arg("--no-limits")
        .assert()
        .success();
}

#[test]
fn config_file_sets_code() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.toml");
    fs::write(&path, "code = \"EC2\"\n").unwrap();

    cmd(&dir)
        .args(["--config", path.to_str().unwrap()])
        .args(design(&[]))
        .assert()
        .success()
        .stdout(contains("Eurocode 2"));
}

#[test]
fn default_config_file_is_picked_up() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("slabcalc.toml"), "[limits]\nmax_span_m = 3.0\n").unwrap();

    cmd(&dir).args(design(&[])).assert().code(1).stderr(contains("INVALID_INPUT"));
}

#[test]
fn bad_config_exits_two() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "code = \"ACI318\"\n").unwrap();

    cmd(&dir)
        .args(["--config", path.to_str().unwrap()])
        .args(design(&[]))
        .assert()
        .code(2)
        .stderr(contains("invalid config"));

    cmd(&dir)
        .args(["--config", "missing.toml"])
        .args(design(&[]))
        .assert()
        .code(2);
}

#[test]
fn request_file_with_flag_override() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("request.json");
    fs::write(
        &path,
        r#"{"span": 4.0, "thickness": 150, "dead_load": 3.5, "live_load": 2.0,
            "concrete_grade": "C25", "steel_grade": 460, "cover": 20}"#,
    )
    .unwrap();

    cmd(&dir)
        .args(["design", "--input", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("Y8 @ 125"));

    cmd(&dir)
        .args(["design", "--input", path.to_str().unwrap(), "--code", "EC2"])
        .assert()
        .success()
        .stdout(contains("Y8 @ 150"));
}

#[test]
fn missing_values_exit_two() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["design", "--span", "4"])
        .assert()
        .code(2)
        .stderr(contains("--thickness"));
}

#[test]
fn unknown_format_is_usage_error() {
    let dir = TempDir::new().unwrap();
    cmd(&dir).args(design(&[])).args(["--format", "pdf"]).assert().code(2);
}

#[test]
fn grades_lists_catalogs() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("grades")
        .assert()
        .success()
        .stdout(contains("C20").and(contains("C40")))
        .stdout(contains("fy = 500"))
        .stdout(contains("Y16"));
}
