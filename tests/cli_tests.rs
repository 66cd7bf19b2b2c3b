use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::Sandbox;

#[test]
fn init_creates_database() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&sb.db).exists());
}

#[test]
fn service_is_created_then_updated() {
    let sb = Sandbox::new();
    sb.init();

    sb.cmd()
        .args([
            "service", "2026-01-04", "--total", "50", "--male", "20", "--female", "30",
        ])
        .assert()
        .success()
        .stdout(contains("Service 2026-01-04 created.").and(contains("create / update").not()));

    sb.cmd()
        .args([
            "service", "2026-01-04", "--total", "52", "--male", "22", "--female", "30",
        ])
        .assert()
        .success()
        .stdout(contains("updated"));

    sb.cmd()
        .args(["list", "service"])
        .assert()
        .success()
        .stdout(contains("2026-01-04").and(contains("52")));
}

#[test]
fn wrong_gender_sum_fails_without_storing() {
    let sb = Sandbox::new();
    sb.init();

    sb.cmd()
        .args([
            "service", "2026-01-04", "--total", "50", "--male", "20", "--female", "29",
        ])
        .assert()
        .failure()
        .stderr(contains("male + female must equal the total"));

    sb.cmd()
        .args(["list", "service"])
        .assert()
        .success()
        .stdout(contains("No service recorded yet"));
}

#[test]
fn invalid_date_is_rejected() {
    let sb = Sandbox::new();
    sb.init();

    sb.cmd()
        .args([
            "prayer", "2026-02-30", "--mode", "remote", "--total", "1", "--male", "1",
            "--female", "0",
        ])
        .assert()
        .failure()
        .stderr(contains("2026-02-30"));
}

#[test]
fn list_prayers_by_mode() {
    let sb = Sandbox::new();
    sb.seed();

    sb.cmd()
        .args(["list", "prayer", "--mode", "remote"])
        .assert()
        .success()
        .stdout(
            contains("REMOTE")
                .and(contains("2026-01-12"))
                .and(contains("ON_SITE").not()),
        );
}

#[test]
fn list_with_empty_window_warns() {
    let sb = Sandbox::new();
    sb.seed();

    sb.cmd()
        .args(["list", "service", "--range", "2024"])
        .assert()
        .success()
        .stdout(contains("No service data for this period"));
}

#[test]
fn report_for_january() {
    let sb = Sandbox::new();
    sb.seed();

    sb.cmd()
        .args(["report", "service", "--range", "2026-01", "--details"])
        .assert()
        .success()
        .stdout(
            contains("110")
                .and(contains("2026-01-11"))
                .and(contains("2025-12-28").not()),
        );
}

#[test]
fn report_rejects_chart_of_other_kind() {
    let sb = Sandbox::new();
    sb.seed();

    sb.cmd()
        .args(["report", "prayer", "--chart", "gender"])
        .assert()
        .failure()
        .stderr(contains("Invalid chart: gender"));
}

#[test]
fn report_rejects_reversed_range() {
    let sb = Sandbox::new();
    sb.seed();

    sb.cmd()
        .args(["report", "service", "--range", "2026-02:2026-01"])
        .assert()
        .failure();
}

#[test]
fn dashboard_on_empty_database() {
    let sb = Sandbox::new();
    sb.init();

    sb.cmd()
        .arg("dashboard")
        .assert()
        .success()
        .stdout(contains("No service recorded yet").and(contains("No prayer meeting recorded yet")));
}

#[test]
fn dashboard_shows_both_sections() {
    let sb = Sandbox::new();
    sb.seed();

    sb.cmd()
        .arg("dashboard")
        .assert()
        .success()
        .stdout(contains("Services").and(contains("Prayer meetings")).and(contains("150")));
}

#[test]
fn db_check_and_log() {
    let sb = Sandbox::new();
    sb.init();

    sb.cmd()
        .args(["db", "--check", "--info"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed").and(contains("service_records")));

    sb.cmd()
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("init").and(contains("integrity_check")));
}

#[test]
fn config_print_shows_database() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("cache_invalidation: per-type"));
}

#[test]
fn relative_db_is_the_same_file_for_every_command() {
    let sb = Sandbox::new();
    let workdir = tempfile::tempdir().unwrap();

    sb.bare()
        .current_dir(workdir.path())
        .args(["--db", "church.sqlite", "--test", "init"])
        .assert()
        .success();

    sb.bare()
        .current_dir(workdir.path())
        .args([
            "--db", "church.sqlite", "service", "2026-01-04", "--total", "50", "--male", "20",
            "--female", "30",
        ])
        .assert()
        .success();

    assert!(sb.path("church.sqlite").exists());
    assert!(!workdir.path().join("church.sqlite").exists());

    sb.bare()
        .args(["--db", "church.sqlite", "list", "service"])
        .assert()
        .success()
        .stdout(contains("2026-01-04"));
}

#[test]
fn prayer_upsert_reports_outcome_once() {
    let sb = Sandbox::new();
    sb.init();

    sb.cmd()
        .args([
            "prayer", "2026-01-05", "--mode", "remote", "--total", "30", "--male", "10",
            "--female", "20",
        ])
        .assert()
        .success()
        .stdout(contains("Prayer meeting 2026-01-05 (Remote) created.").and(contains("create / update").not()));
}
