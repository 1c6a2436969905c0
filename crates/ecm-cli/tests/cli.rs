use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ecm() -> Command {
    Command::cargo_bin("ecm").expect("ecm binary builds")
}

#[test]
fn simulate_reports_seeded_bench() {
    ecm()
        .args(["simulate", "--seed", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cell_name"))
        .stdout(predicate::str::contains("Cell 1"))
        .stdout(predicate::str::contains("Cell 4"))
        .stdout(predicate::str::contains("Health overview:"))
        .stdout(predicate::str::contains("4 cells"));
}

#[test]
fn simulate_add_extends_numbering() {
    ecm()
        .args(["simulate", "--seed", "42", "--add", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cell 7"))
        .stdout(predicate::str::contains("7 cells"));
}

#[test]
fn simulate_rejects_oversized_batch() {
    ecm()
        .args(["simulate", "--seed", "42", "--add", "25"])
        .assert()
        .failure();
}

#[test]
fn simulate_remove_is_noop_for_unknown_cell() {
    ecm()
        .args(["simulate", "--seed", "42", "--remove", "Cell 99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 cells"));
}

#[test]
fn simulate_exports_roundtrip_through_inspect() {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("bench.csv");

    ecm()
        .args(["simulate", "--seed", "7"])
        .args(["--csv", csv_path.to_str().unwrap()])
        .assert()
        .success();

    ecm()
        .args(["inspect", csv_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cell 1"))
        .stdout(predicate::str::contains("4 cells"));
}

#[test]
fn pack_scenario_derives_and_removes() {
    ecm()
        .args(["pack", "--cell", "Cell 01,LFP,12,5,90,30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cell 01"))
        .stdout(predicate::str::contains("Good"))
        .stdout(predicate::str::contains("6"));

    ecm()
        .args([
            "pack",
            "--cell",
            "Cell 01,LFP,12,5,90,30",
            "--remove",
            "Cell 01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 cells"));
}

#[test]
fn pack_rejects_duplicate_ids() {
    ecm()
        .args([
            "pack",
            "--cell",
            "Cell 01,LFP,12,5,90,30",
            "--cell",
            "Cell 01,NMC,3.7,2,80,25",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("duplicate"));
}

#[test]
fn pack_rejects_malformed_entries() {
    ecm()
        .args(["pack", "--cell", "Cell 01,LFP,12"])
        .assert()
        .failure();

    ecm()
        .args(["pack", "--cell", "Cell 01,LFP,12,5,140,30"])
        .assert()
        .failure();
}

#[test]
fn convert_csv_to_json() {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("pack.csv");
    let json_path = temp_dir.path().join("pack.json");

    ecm()
        .args(["pack", "--cell", "Cell 01,NMC,3.7,2,88,25"])
        .args(["--csv", csv_path.to_str().unwrap()])
        .assert()
        .success();

    ecm()
        .args(["convert", "--input", csv_path.to_str().unwrap()])
        .args(["--output", json_path.to_str().unwrap()])
        .assert()
        .success();

    let json = std::fs::read_to_string(&json_path).unwrap();
    assert!(json.contains("\"cell_id\": \"Cell 01\""));
    assert!(json.contains("\"cell_type\": \"NMC\""));
}

#[test]
fn inspect_emits_json_summary() {
    let temp_dir = TempDir::new().unwrap();
    let json_path = temp_dir.path().join("bench.json");

    ecm()
        .args(["simulate", "--seed", "11"])
        .args(["--json", json_path.to_str().unwrap()])
        .assert()
        .success();

    ecm()
        .args(["inspect", json_path.to_str().unwrap(), "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"cells\": 4"))
        .stdout(predicate::str::contains("\"histogram\""));
}
