use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// A versioned schema step. Applied steps are recorded in the `log` table
/// as `migration_applied` rows targeting `version`.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20260105_0001_create_service_records",
        description: "Created service_records table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS service_records (
            event_date       TEXT    NOT NULL UNIQUE,
            site_attendance  INTEGER NOT NULL DEFAULT 0 CHECK(site_attendance >= 0),
            total_attendance INTEGER NOT NULL DEFAULT 0 CHECK(total_attendance >= 0),
            male_count       INTEGER NOT NULL DEFAULT 0 CHECK(male_count >= 0),
            female_count     INTEGER NOT NULL DEFAULT 0 CHECK(female_count >= 0),
            salvation_calls  INTEGER NOT NULL DEFAULT 0 CHECK(salvation_calls >= 0),
            new_people       INTEGER NOT NULL DEFAULT 0 CHECK(new_people >= 0)
        );
        "#,
    },
    Migration {
        version: "20260105_0002_create_prayer_records",
        description: "Created prayer_records table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS prayer_records (
            event_date       TEXT    NOT NULL,
            mode             TEXT    NOT NULL CHECK(mode IN ('ON_SITE','REMOTE')),
            total_attendance INTEGER NOT NULL DEFAULT 0 CHECK(total_attendance >= 0),
            male_count       INTEGER NOT NULL DEFAULT 0 CHECK(male_count >= 0),
            female_count     INTEGER NOT NULL DEFAULT 0 CHECK(female_count >= 0),
            UNIQUE (event_date, mode)
        );
        "#,
    },
];

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists in the connected database.
pub fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, migration: &Migration) -> Result<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(migration.sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [migration.version, migration.description],
    )?;

    tx.commit()?;

    log::info!(
        "event=migration_applied module=db version={}",
        migration.version
    );
    success(format!("Migration applied: {}", migration.description));
    Ok(())
}

/// Number of known schema steps not yet recorded as applied.
pub fn pending_count(conn: &Connection) -> Result<usize> {
    ensure_log_table(conn)?;
    let mut pending = 0;
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            pending += 1;
        }
    }
    Ok(pending)
}

/// Public entry point: run all pending migrations.
///
/// Idempotent; invoked by `init_db()` and every time a `DbPool` is opened.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            apply(conn, m)?;
        }
    }

    Ok(())
}
