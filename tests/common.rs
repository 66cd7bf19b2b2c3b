#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated config dir + database file for one CLI test.
pub struct Sandbox {
    pub dir: TempDir,
    pub db: String,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let db = dir
            .path()
            .join("ejp_test.sqlite")
            .to_string_lossy()
            .to_string();
        Self { dir, db }
    }

    /// `ejp-analytics` in the sandbox config dir, without `--db`.
    pub fn bare(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("ejp-analytics");
        cmd.env("EJP_CONFIG_DIR", self.dir.path())
            .env_remove("EJP_DB_PATH")
            .env_remove("DB_NAME")
            .env_remove("EJP_CACHE_INVALIDATION");
        cmd
    }

    /// `ejp-analytics --db <sandbox db> …` with the config dir pointed inside the sandbox.
    pub fn cmd(&self) -> Command {
        let mut cmd = self.bare();
        cmd.args(["--db", &self.db]);
        cmd
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn init(&self) {
        self.cmd().args(["--test", "init"]).assert().success();
    }

    pub fn add_service(&self, date: &str, total: u32, male: u32, female: u32) {
        self.cmd()
            .args([
                "service",
                date,
                "--site",
                &(total + 5).to_string(),
                "--total",
                &total.to_string(),
                "--male",
                &male.to_string(),
                "--female",
                &female.to_string(),
            ])
            .assert()
            .success();
    }

    pub fn add_prayer(&self, date: &str, mode: &str, total: u32, male: u32, female: u32) {
        self.cmd()
            .args([
                "prayer",
                date,
                "--mode",
                mode,
                "--total",
                &total.to_string(),
                "--male",
                &male.to_string(),
                "--female",
                &female.to_string(),
            ])
            .assert()
            .success();
    }

    /// Three services around January 2026 and three prayer meetings.
    pub fn seed(&self) {
        self.init();
        self.add_service("2025-12-28", 40, 20, 20);
        self.add_service("2026-01-04", 50, 20, 30);
        self.add_service("2026-01-11", 60, 25, 35);
        self.add_prayer("2026-01-05", "on-site", 12, 5, 7);
        self.add_prayer("2026-01-05", "remote", 30, 10, 20);
        self.add_prayer("2026-01-12", "remote", 25, 10, 15);
    }
}
