use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

fn repo_file(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../..")
        .join(relative)
}

#[test]
fn simulate_defaults_report_a_safe_pass() {
    Command::cargo_bin("simulate")
        .expect("simulate bin")
        .assert()
        .success()
        .stdout(predicate::str::contains("EARTH SAVED!"))
        .stdout(predicate::str::contains("7389 km"));
}

#[test]
fn simulate_without_deflection_reports_an_ocean_impact() {
    Command::cargo_bin("simulate")
        .expect("simulate bin")
        .args(["--deflection", "0", "--medium", "ocean"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Catastrophic Ocean Impact"))
        .stdout(predicate::str::contains("Tsunami:"));
}

#[test]
fn simulate_fixed_site_ignores_deflection() {
    Command::cargo_bin("simulate")
        .expect("simulate bin")
        .args([
            "--site",
            "central usa impact",
            "--sites",
            repo_file("data/scenarios/sites.yaml").to_str().unwrap(),
            "--deflection",
            "5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Catastrophic Land Impact"));
}

#[test]
fn simulate_writes_json_report() {
    let dir = tempfile::tempdir().expect("tempdir");
    let json_path = dir.path().join("report.json");

    Command::cargo_bin("simulate")
        .expect("simulate bin")
        .args([
            "--config",
            repo_file("configs/model.toml").to_str().unwrap(),
            "--deflection",
            "0",
            "--json",
            json_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let text = fs::read_to_string(&json_path).expect("json report");
    let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
    assert_eq!(value["body"], "101955 Bennu");
    assert_eq!(value["outcome"]["will_impact"], true);
    assert_eq!(value["outcome"]["consequences"]["effects"]["medium"], "land");
}

#[test]
fn simulate_rejects_out_of_range_diameter() {
    Command::cargo_bin("simulate")
        .expect("simulate bin")
        .args(["--diameter", "5000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("diameter_m"));
}

#[test]
fn simulate_checks_ranges_for_catalog_sites_too() {
    Command::cargo_bin("simulate")
        .expect("simulate bin")
        .args([
            "--site",
            "real simulation mode",
            "--deflection",
            "50",
            "--warning-years",
            "200",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("deflection_cm_s"))
        .stdout(predicate::str::contains("Total displacement").not());
}

#[test]
fn simulate_rejects_unknown_site() {
    Command::cargo_bin("simulate")
        .expect("simulate bin")
        .args(["--site", "Moon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn deflection_sweep_writes_csv() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("sweep.csv");

    Command::cargo_bin("deflection_sweep")
        .expect("deflection_sweep bin")
        .args([
            "--force-steps",
            "3",
            "--warning-steps",
            "4",
            "--output",
            csv_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let text = fs::read_to_string(&csv_path).expect("csv output");
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("deflection_cm_s,warning_years,displacement_km,miss_distance_km,will_impact")
    );
    assert_eq!(lines.count(), 12);
}

#[test]
fn deflection_sweep_rejects_zero_steps() {
    Command::cargo_bin("deflection_sweep")
        .expect("deflection_sweep bin")
        .args(["--force-steps", "0"])
        .assert()
        .failure();
}
