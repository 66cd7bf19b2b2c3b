//! SQLite connection wrapper (lightweight for CLI usage).
//!
//! Every handle returned here has the schema fully migrated.

use crate::db::migrate::run_pending_migrations;
use rusqlite::{Connection, Result};
use std::path::Path;
use std::time::{Duration, Instant};

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Opens (or creates) the database file and applies pending migrations.
    pub fn new(path: &str) -> Result<Self> {
        let started_at = Instant::now();
        log::debug!("event=db_open module=db status=start mode=file path={path}");

        let conn = Connection::open(Path::new(path)).inspect_err(|err| {
            log::error!(
                "event=db_open module=db status=error mode=file duration_ms={} error={err}",
                started_at.elapsed().as_millis()
            );
        })?;

        let pool = Self::bootstrap(conn)?;
        log::debug!(
            "event=db_open module=db status=ok mode=file duration_ms={}",
            started_at.elapsed().as_millis()
        );
        Ok(pool)
    }

    /// In-memory database, used by tests and dry runs.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::bootstrap(conn)
    }

    fn bootstrap(conn: Connection) -> Result<Self> {
        conn.busy_timeout(Duration::from_secs(5))?;
        run_pending_migrations(&conn)?;
        Ok(Self { conn })
    }

    /// Helper to execute a closure with a mutable connection reference.
    pub fn with_conn<F, T>(&mut self, func: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> Result<T>,
    {
        func(&mut self.conn)
    }
}
