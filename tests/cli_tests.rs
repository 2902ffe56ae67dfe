//! End-to-end CLI tests
//!
//! Drives the `cotacao` binary against a temporary data directory via the
//! `COTACAO_DATA_DIR` override.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cotacao(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cotacao").unwrap();
    cmd.env("COTACAO_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn add_then_stats_shows_day_averages() {
    let data_dir = TempDir::new().unwrap();

    cotacao(&data_dir)
        .args(["add", "conilon", "1.376,72"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added R$ 1.376,72 to Conilon"));

    cotacao(&data_dir)
        .args(["add", "conilon", "1200,00"])
        .assert()
        .success();

    cotacao(&data_dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("R$ 1.288,36"))
        .stdout(predicate::str::contains("R$ 1.200,00"))
        .stdout(predicate::str::contains("R$ 1.376,72"))
        .stdout(predicate::str::contains("Média geral: R$ 1.288,36"));
}

#[test]
fn invalid_value_is_rejected_and_list_stays_unchanged() {
    let data_dir = TempDir::new().unwrap();

    cotacao(&data_dir)
        .args(["add", "conilon", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid decimal value: 'abc'"));

    cotacao(&data_dir)
        .args(["list", "conilon"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No quotes recorded for Conilon."));
}

#[test]
fn unknown_variety_is_rejected() {
    let data_dir = TempDir::new().unwrap();

    cotacao(&data_dir)
        .args(["add", "robusta", "10,00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Variety not found: robusta"));
}

#[test]
fn remove_shifts_positions() {
    let data_dir = TempDir::new().unwrap();

    for value in ["10,00", "20,00", "30,00"] {
        cotacao(&data_dir)
            .args(["add", "arabica-rio", value])
            .assert()
            .success();
    }

    cotacao(&data_dir)
        .args(["remove", "arabica-rio", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed R$ 20,00"));

    cotacao(&data_dir)
        .args(["list", "arabica-rio"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[0] R$ 10,00"))
        .stdout(predicate::str::contains("[1] R$ 30,00"))
        .stdout(predicate::str::contains("R$ 20,00").not());
}

#[test]
fn remove_out_of_range_fails_cleanly() {
    let data_dir = TempDir::new().unwrap();

    cotacao(&data_dir)
        .args(["add", "conilon", "5,00"])
        .assert()
        .success();

    cotacao(&data_dir)
        .args(["remove", "conilon", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Entry not found"));

    cotacao(&data_dir)
        .args(["list", "conilon"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[0] R$ 5,00"));
}

#[test]
fn quotes_survive_process_restart() {
    let data_dir = TempDir::new().unwrap();

    cotacao(&data_dir)
        .args(["add", "arabica-duro", "900,50"])
        .assert()
        .success();

    // A fresh invocation reads the persisted state back
    cotacao(&data_dir)
        .args(["list", "arabica-duro"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[0] R$ 900,50"));
}

#[test]
fn reset_requires_confirmation_then_clears_everything() {
    let data_dir = TempDir::new().unwrap();

    cotacao(&data_dir)
        .args(["add", "conilon", "1,00"])
        .assert()
        .success();

    cotacao(&data_dir)
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Re-run with --yes"));

    cotacao(&data_dir)
        .args(["list", "conilon"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[0] R$ 1,00"));

    cotacao(&data_dir)
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All quotes cleared."));

    cotacao(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No quotes recorded for Conilon."))
        .stdout(predicate::str::contains("No quotes recorded for Arabica Rio."))
        .stdout(predicate::str::contains("No quotes recorded for Arabica Duro."));
}

#[test]
fn export_writes_two_line_semicolon_csv() {
    let data_dir = TempDir::new().unwrap();

    cotacao(&data_dir)
        .args(["add", "conilon", "1.376,72"])
        .assert()
        .success();
    cotacao(&data_dir)
        .args(["add", "conilon", "1200,00"])
        .assert()
        .success();

    let out_path = data_dir.path().join("medias.csv");
    cotacao(&data_dir)
        .args(["export", "--output"])
        .arg(&out_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported daily averages"));

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].split(';').count(), 14);
    assert_eq!(lines[1].split(';').count(), 14);
    assert!(lines[0].starts_with("data;conilon_avg"));
    assert!(lines[0].ends_with("media_geral"));
    assert!(lines[1].contains(";1288.36;1200.00;1376.72;2;"));
}

#[test]
fn corrupted_storage_degrades_to_empty_lists() {
    let data_dir = TempDir::new().unwrap();

    cotacao(&data_dir)
        .args(["add", "conilon", "5,00"])
        .assert()
        .success();

    let values_file = data_dir
        .path()
        .join("data")
        .join("cotacao-cafe.v1.values.default.json");
    assert!(values_file.exists());
    std::fs::write(&values_file, "{{{ not json").unwrap();

    cotacao(&data_dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Média geral: R$ 0,00"));
}

#[test]
fn wrong_shaped_category_degrades_independently() {
    let data_dir = TempDir::new().unwrap();
    let values_file = data_dir
        .path()
        .join("data")
        .join("cotacao-cafe.v1.values.default.json");
    std::fs::create_dir_all(values_file.parent().unwrap()).unwrap();
    std::fs::write(
        &values_file,
        r#"{"conilon": "oops", "arabicaRio": [7.5], "arabicaDuro": []}"#,
    )
    .unwrap();

    cotacao(&data_dir)
        .args(["list", "conilon"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No quotes recorded for Conilon."));

    cotacao(&data_dir)
        .args(["list", "arabica-rio"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[0] R$ 7,50"));
}

#[test]
fn profiles_are_isolated() {
    let data_dir = TempDir::new().unwrap();

    cotacao(&data_dir)
        .args(["add", "conilon", "10,00"])
        .assert()
        .success();

    cotacao(&data_dir)
        .args(["--profile", "fazenda", "list", "conilon"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No quotes recorded for Conilon."));
}

#[test]
fn config_shows_resolved_paths() {
    let data_dir = TempDir::new().unwrap();

    cotacao(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("cotacao-cafe.v1.values.default.json"))
        .stdout(predicate::str::contains("Profile:        default"));
}
